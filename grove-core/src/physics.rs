//! Per-tick spring / pointer-repulsion integration.
//!
//! The update for every node, in order:
//! 1. Spring pull toward the anchor.
//! 2. Pointer repulsion (plus bounded jitter) while inside the repel
//!    radius of an active pointer.
//! 3. Multiplicative damping.
//! 4. Per-component speed clamp.
//! 5. Position integration, normalized to the frame rate.

use crate::{config::Config, node::Node, pointer::Pointer};
use glam::Vec2;
use rand::Rng;

/// Repulsion kick for a node at `position` pushed by a pointer at
/// `pointer_pos`.
///
/// With `d` the node–pointer distance and `R = cfg.repel_radius`, the
/// magnitude is `(1 - d/R)² * repel_strength * push_scale` — strong
/// up close, exactly zero at and beyond the radius. The direction is
/// the unit vector away from the pointer; a node sitting exactly on
/// the pointer is pushed along +X so the normalization never divides
/// by zero.
///
/// ### Parameters
/// - `position` - Current node position.
/// - `pointer_pos` - Pointer position (caller has already checked the
///   pointer is active).
/// - `cfg` - Repel radius and strength scales.
///
/// ### Returns
/// The velocity delta to apply, `Vec2::ZERO` outside the radius.
pub fn repulsion(position: Vec2, pointer_pos: Vec2, cfg: &Config) -> Vec2 {
    let delta = position - pointer_pos;
    let d2 = delta.length_squared();
    let r = cfg.repel_radius;
    if d2 >= r * r {
        return Vec2::ZERO;
    }

    let d = d2.sqrt();
    let falloff = 1.0 - d / r;
    let dir = if d > 0.0001 { delta / d } else { Vec2::X };
    dir * (falloff * falloff * cfg.repel_strength * cfg.push_scale)
}

/// Advances every node's velocity and position in place by one tick.
///
/// Velocities are expressed in pixels per 1/60 s frame; positions
/// advance by `velocity * dt * 60`, so a 30 fps and a 120 fps run show
/// the same apparent speed. `dt` is assumed already clamped by the
/// caller (see [`crate::scene::Scene::advance`]).
///
/// An inactive pointer contributes nothing regardless of its stored
/// coordinates — they may be stale from before a pointer-leave.
///
/// ### Parameters
/// - `nodes` - The node set to mutate.
/// - `pointer` - Current pointer state.
/// - `dt` - Elapsed time since the previous tick, in seconds.
/// - `cfg` - Physics constants.
/// - `rng` - Source of the repel jitter; untouched while the pointer
///   is inactive or out of range.
pub fn integrate(
    nodes: &mut [Node],
    pointer: &Pointer,
    dt: f32,
    cfg: &Config,
    rng: &mut impl Rng,
) {
    let step = dt * 60.0;
    let r2 = cfg.repel_radius * cfg.repel_radius;
    let v_min = Vec2::splat(-cfg.max_speed);
    let v_max = Vec2::splat(cfg.max_speed);

    for node in nodes.iter_mut() {
        node.velocity += (node.anchor - node.position) * cfg.spring;

        if pointer.active && node.position.distance_squared(pointer.position) < r2 {
            node.velocity += repulsion(node.position, pointer.position, cfg);
            // Small independent jitter keeps repelled motion from
            // being perfectly radial.
            node.velocity += Vec2::new(
                (rng.random::<f32>() - 0.5) * cfg.noise_strength,
                (rng.random::<f32>() - 0.5) * cfg.noise_strength,
            );
        }

        node.velocity *= cfg.damping;
        node.velocity = node.velocity.clamp(v_min, v_max);
        node.position += node.velocity * step;
    }
}
