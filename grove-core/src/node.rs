use glam::Vec2;

/// The atomic simulated entity: a point particle tethered to a fixed
/// anchor.
///
/// `anchor` is set once at placement and never moves; `position` and
/// `velocity` are mutated only by [`crate::physics::integrate`]. A node
/// has no identity beyond its slot in the owning collection.
#[derive(Debug, Clone, Copy)]
pub struct Node {
    pub anchor: Vec2,
    pub position: Vec2,
    pub velocity: Vec2,
}

impl Node {
    /// A node sitting exactly on its anchor with zero velocity, the
    /// state every node starts in after placement.
    pub fn at_rest(anchor: Vec2) -> Self {
        Self {
            anchor,
            position: anchor,
            velocity: Vec2::ZERO,
        }
    }
}
