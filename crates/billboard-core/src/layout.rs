use crate::error::LayoutError;
use glam::Vec3;

/// Evenly spaced, centered placement of model instances along X.
///
/// Slot `i` of `n` sits at `center + (i - (n - 1) / 2) * spacing`, so any
/// count is symmetric about `center` and adjacent slots are exactly
/// `spacing` apart. Y and Z never change.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub center: Vec3,
    pub spacing: f32,
    pub max_instances: usize,
}

impl Layout {
    pub fn new(center: Vec3, spacing: f32, max_instances: usize) -> Self {
        Self {
            center,
            spacing,
            max_instances,
        }
    }

    /// Target world positions for `count` instances, ordered by slot.
    pub fn positions(&self, count: usize) -> Result<Vec<Vec3>, LayoutError> {
        if count == 0 {
            return Err(LayoutError::EmptyLayout);
        }
        if count > self.max_instances {
            return Err(LayoutError::TooManyInstances {
                count,
                max: self.max_instances,
            });
        }
        Ok((0..count).map(|slot| self.slot_position(slot, count)).collect())
    }

    #[inline]
    fn slot_position(&self, slot: usize, count: usize) -> Vec3 {
        let half_span = (count as f32 - 1.0) * 0.5;
        let dx = (slot as f32 - half_span) * self.spacing;
        self.center + Vec3::new(dx, 0.0, 0.0)
    }
}
