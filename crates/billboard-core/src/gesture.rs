use glam::Vec2;

/// Pointer down/up record used to tell a click from an orbit drag.
///
/// Positions are client pixels. A click requires the pointer to come up
/// exactly where it went down; any movement makes it a drag, and so does a
/// half-recorded press. Only the initial state with no records is not a drag.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureState {
    pub down: Option<Vec2>,
    pub up: Option<Vec2>,
}

impl GestureState {
    pub fn pointer_down(&mut self, pos: Vec2) {
        self.down = Some(pos);
        self.up = None;
    }

    pub fn pointer_up(&mut self, pos: Vec2) {
        self.up = Some(pos);
    }

    pub fn is_drag(&self) -> bool {
        match (self.down, self.up) {
            (None, None) => false,
            (Some(d), Some(u)) => d != u,
            _ => true,
        }
    }

    #[inline]
    pub fn is_click(&self) -> bool {
        !self.is_drag()
    }
}
