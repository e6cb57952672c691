use glam::Vec2;

/// Last known pointer state on the surface.
///
/// When `active` is `false` the stored coordinates are stale and must
/// not be read; [`crate::physics::integrate`] checks `active` before
/// touching `position`.
#[derive(Debug, Clone, Copy)]
pub struct Pointer {
    pub position: Vec2,
    pub active: bool,
}

impl Pointer {
    /// The "no interaction" state (pointer off the surface).
    pub fn inactive() -> Self {
        Self {
            position: Vec2::ZERO,
            active: false,
        }
    }

    /// An active pointer at the given surface position.
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            active: true,
        }
    }
}
