use glam::{Quat, Vec2, Vec3};

/// World-space ray with a unit direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self {
            origin,
            dir: dir.normalize_or_zero(),
        }
    }

    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}

/// Logical button number, 1-based, shared by a button marker and its ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ButtonId(pub u32);

impl std::fmt::Display for ButtonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Map a 0-based position in the (button, ring, button, ring, ...) pick list
/// to its logical button.
///
/// Raycasts may report either the button plane or the ring plane that
/// overlaps it; both resolve to the same button. Even positions are bumped to
/// the following odd one before converting to a 1-based number.
#[inline]
pub fn resolve_button(position: usize) -> ButtonId {
    let paired = if position % 2 == 0 {
        position + 1
    } else {
        position
    };
    ButtonId(((paired + 1) / 2) as u32)
}

/// Double-sided intersection with a rectangle centered at `center`, spanning
/// `size` along the rotated X/Y axes. Returns the ray parameter of the hit.
#[inline]
pub fn ray_quad(ray: &Ray, center: Vec3, rotation: Quat, size: Vec2) -> Option<f32> {
    let normal = rotation * Vec3::Z;
    let denom = normal.dot(ray.dir);
    if denom.abs() < 1e-8 {
        return None;
    }
    let t = normal.dot(center - ray.origin) / denom;
    if t < 0.0 {
        return None;
    }
    let local = rotation.inverse() * (ray.at(t) - center);
    let half = size * 0.5;
    (local.x.abs() <= half.x && local.y.abs() <= half.y).then_some(t)
}

#[inline]
pub fn ray_sphere(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let b = oc.dot(ray.dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    let t = -b - sq;
    if t >= 0.0 {
        return Some(t);
    }
    // origin inside the sphere
    let t_far = -b + sq;
    (t_far >= 0.0).then_some(t_far)
}

/// Index and distance of the closest hit, first one wins on ties.
pub fn nearest_hit(hits: impl IntoIterator<Item = (usize, f32)>) -> Option<(usize, f32)> {
    let mut best = None::<(usize, f32)>;
    for (i, t) in hits {
        match best {
            Some((_, bt)) if t >= bt => {}
            _ => best = Some((i, t)),
        }
    }
    best
}
