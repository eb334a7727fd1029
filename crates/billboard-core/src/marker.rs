use crate::hit::{nearest_hit, ray_quad, resolve_button, ButtonId, Ray};
use glam::{Quat, Vec2, Vec3};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerKind {
    Button,
    Ring,
    Decorative,
}

/// A camera-facing quad parented to one instance.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub kind: MarkerKind,
    pub button: Option<ButtonId>,
    pub owner: usize,
    pub offset: Vec3,
    pub size: Vec2,
    pub rotation: Quat,
    pub attached: bool,
}

impl Marker {
    #[inline]
    pub fn world_position(&self, owner_position: Vec3) -> Vec3 {
        owner_position + self.offset
    }

    #[inline]
    pub fn is_pickable(&self) -> bool {
        matches!(self.kind, MarkerKind::Button | MarkerKind::Ring)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelState {
    Visible,
    Hidden,
}

/// The billboard button panel: button/ring pairs in insertion order plus any
/// decorative overlays.
///
/// Buttons and rings are only ever attached or detached as a whole, so the
/// pick list always holds complete pairs.
#[derive(Clone, Debug)]
pub struct Panel {
    markers: Vec<Marker>,
    state: PanelState,
}

impl Panel {
    /// One (button, ring) pair per anchor; button `n` is `anchors[n - 1]`.
    pub fn new(owner: usize, anchors: &[Vec3], button_size: f32, ring_size: f32) -> Self {
        let mut markers = Vec::with_capacity(anchors.len() * 2);
        for (i, anchor) in anchors.iter().enumerate() {
            let button = Some(ButtonId(i as u32 + 1));
            for (kind, size) in [
                (MarkerKind::Button, button_size),
                (MarkerKind::Ring, ring_size),
            ] {
                markers.push(Marker {
                    kind,
                    button,
                    owner,
                    offset: *anchor,
                    size: Vec2::splat(size),
                    rotation: Quat::IDENTITY,
                    attached: true,
                });
            }
        }
        Self {
            markers,
            state: PanelState::Visible,
        }
    }

    /// Add a detached decorative overlay; returns its marker index.
    pub fn add_decorative(&mut self, owner: usize, offset: Vec3, size: Vec2) -> usize {
        self.markers.push(Marker {
            kind: MarkerKind::Decorative,
            button: None,
            owner,
            offset,
            size,
            rotation: Quat::IDENTITY,
            attached: false,
        });
        self.markers.len() - 1
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn button_count(&self) -> usize {
        self.markers
            .iter()
            .filter(|m| m.kind == MarkerKind::Button)
            .count()
    }

    /// Resolve the nearest attached button or ring under `ray`.
    ///
    /// `owner_position` yields the world position of a marker's owning
    /// instance; markers whose owner is gone are skipped.
    pub fn hit_test(
        &self,
        ray: &Ray,
        owner_position: impl Fn(usize) -> Option<Vec3>,
    ) -> Option<ButtonId> {
        let candidates: Vec<(&Marker, Vec3)> = self
            .markers
            .iter()
            .filter(|m| m.attached && m.is_pickable())
            .filter_map(|m| owner_position(m.owner).map(|p| (m, m.world_position(p))))
            .collect();
        let hits = candidates
            .iter()
            .enumerate()
            .filter_map(|(i, (m, center))| ray_quad(ray, *center, m.rotation, m.size).map(|t| (i, t)));
        let (position, _) = nearest_hit(hits)?;
        Some(resolve_button(position))
    }

    /// Detach every button and ring, keeping them for a later `open`.
    pub fn close(&mut self) {
        self.set_pickables_attached(false);
        self.state = PanelState::Hidden;
    }

    pub fn open(&mut self) {
        self.set_pickables_attached(true);
        self.state = PanelState::Visible;
    }

    pub fn attach_decorations(&mut self) {
        for m in self
            .markers
            .iter_mut()
            .filter(|m| m.kind == MarkerKind::Decorative)
        {
            m.attached = true;
        }
    }

    /// Detach every marker owned by `slot`; returns how many changed.
    pub fn detach_owned_by(&mut self, slot: usize) -> usize {
        let mut changed = 0;
        for m in self.markers.iter_mut().filter(|m| m.owner == slot && m.attached) {
            m.attached = false;
            changed += 1;
        }
        changed
    }

    /// Face every attached marker toward the viewer.
    pub fn orient(&mut self, camera_rotation: Quat) {
        for m in self.markers.iter_mut().filter(|m| m.attached) {
            m.rotation = camera_rotation;
        }
    }

    fn set_pickables_attached(&mut self, attached: bool) {
        for m in self.markers.iter_mut().filter(|m| m.is_pickable()) {
            m.attached = attached;
        }
    }
}
