//! Procedural anchor placement for the two layout variants.
//!
//! Both strategies answer the same question — "where do the anchors go
//! for the current surface size?" — and both return plain node sets
//! with positions and velocities initialized to the anchors:
//!
//! 1. [`plant_forest`] — scatters discrete 10-node tree glyphs around
//!    a protected central safe zone, biased toward the surface edges.
//! 2. [`grow_silhouette`] — builds a single tree silhouette from a
//!    statistical point cloud (canopy + trunk).

use crate::{config::Config, node::Node};
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// Normalized glyph silhouette, one template unit ≈ one scale unit.
///
/// Ordered top point, shoulders, branch tips, inner branches, base
/// spread, trunk foot. Y grows downward, so the crown is negative.
pub const TREE_TEMPLATE: [Vec2; 10] = [
    Vec2::new(0.0, -1.35),
    Vec2::new(-0.45, -0.95),
    Vec2::new(0.45, -0.95),
    Vec2::new(-0.8, -0.45),
    Vec2::new(0.8, -0.45),
    Vec2::new(-0.3, -0.3),
    Vec2::new(0.3, -0.3),
    Vec2::new(-0.55, 0.05),
    Vec2::new(0.55, 0.05),
    Vec2::new(0.0, 0.45),
];

/// One placed tree glyph: a template origin and a uniform scale.
///
/// The glyph's anchors are fully determined by these two values —
/// each one is `center + scale * template_offset`. The grouping only
/// exists at placement time; the nodes it produces are simulated like
/// any others.
#[derive(Debug, Clone, Copy)]
pub struct Tree {
    pub center: Vec2,
    pub scale: f32,
}

impl Tree {
    /// Picks a center (see [`pick_tree_center`]) and draws one uniform
    /// scale from `[tree_scale_min, tree_scale_max]`.
    pub fn plant(cfg: &Config, size: Vec2, rng: &mut impl Rng) -> Self {
        let center = pick_tree_center(cfg, rng) * size;
        let scale = rng.random_range(cfg.tree_scale_min..=cfg.tree_scale_max);
        Self { center, scale }
    }

    /// Anchor positions of the glyph's nodes, in template order.
    pub fn anchors(&self) -> impl Iterator<Item = Vec2> + '_ {
        TREE_TEMPLATE
            .iter()
            .map(|&offset| self.center + offset * self.scale)
    }
}

/// True if the fractional point lies strictly inside the safe zone.
fn in_safe_zone(p: Vec2, cfg: &Config) -> bool {
    p.x > cfg.safe_zone_min.x
        && p.x < cfg.safe_zone_max.x
        && p.y > cfg.safe_zone_min.y
        && p.y < cfg.safe_zone_max.y
}

/// True if the fractional point falls in the outer `margin` band of
/// any surface edge.
fn near_edge(p: Vec2, margin: f32) -> bool {
    p.x < margin || p.x > 1.0 - margin || p.y < margin || p.y > 1.0 - margin
}

/// Samples a fractional tree center outside the safe zone, preferring
/// the surface edges.
///
/// Candidates are uniform fractional points. A candidate is accepted
/// if it is outside the safe zone and inside the edge-margin band;
/// after `cfg.relax_after` failed tries the edge requirement is
/// dropped, and after `cfg.place_attempts` tries the next unconstrained
/// sample is accepted as-is. The last rule guarantees termination even
/// when the safe zone covers the whole surface.
///
/// ### Parameters
/// - `cfg` - Placement bounds: safe zone corners, edge margin, retry
///   thresholds.
/// - `rng` - Source of uniform candidates.
///
/// ### Returns
/// A point with both components in `[0, 1)`, to be multiplied by the
/// surface size.
pub fn pick_tree_center(cfg: &Config, rng: &mut impl Rng) -> Vec2 {
    let mut candidate = Vec2::new(rng.random(), rng.random());
    for attempt in 0..cfg.place_attempts {
        if !in_safe_zone(candidate, cfg)
            && (attempt >= cfg.relax_after || near_edge(candidate, cfg.edge_margin))
        {
            return candidate;
        }
        candidate = Vec2::new(rng.random(), rng.random());
    }
    candidate
}

/// Scatters `cfg.tree_count` glyphs and returns their nodes at rest.
///
/// ### Parameters
/// - `cfg` - Tree count, scale range and center-picking bounds.
/// - `size` - Current surface size in pixels.
/// - `rng` - Source of centers and scales.
///
/// ### Returns
/// `tree_count * 10` nodes in glyph order, every position equal to its
/// anchor and every velocity zero.
pub fn plant_forest(cfg: &Config, size: Vec2, rng: &mut impl Rng) -> Vec<Node> {
    let mut nodes = Vec::with_capacity(cfg.tree_count * TREE_TEMPLATE.len());
    for _ in 0..cfg.tree_count {
        let tree = Tree::plant(cfg, size, rng);
        nodes.extend(tree.anchors().map(Node::at_rest));
    }
    nodes
}

/// One standard-normal sample (mean 0, variance 1).
///
/// Box–Muller transform over two independent uniforms in `[0, 1)`;
/// both uniforms are redrawn whenever either is exactly zero, since
/// the transform takes a logarithm of the first.
pub fn standard_normal(rng: &mut impl Rng) -> f32 {
    let mut u1: f32 = rng.random();
    let mut u2: f32 = rng.random();
    while u1 == 0.0 || u2 == 0.0 {
        u1 = rng.random();
        u2 = rng.random();
    }
    (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos()
}

/// Builds the silhouette point cloud: canopy first, then trunk.
///
/// Canopy: each node draws a uniform height fraction `t`; its vertical
/// position lerps from the canopy base band to the top band as `t → 1`,
/// and its horizontal position is the surface center plus a
/// standard-normal offset whose spread shrinks as
/// `(1 - t)^canopy_taper`. The sub-linear taper gives a dense, wide
/// base and a narrow top without an explicit boundary curve.
///
/// Trunk: evenly spaced vertical positions from the trunk base up to
/// the trunk top, with tight Gaussian horizontal jitter.
///
/// ### Parameters
/// - `cfg` - Node counts, band fractions, spread and taper.
/// - `size` - Current surface size in pixels.
/// - `rng` - Source of height fractions and normal samples.
///
/// ### Returns
/// `canopy_count + trunk_count` nodes at rest, canopy nodes first.
pub fn grow_silhouette(cfg: &Config, size: Vec2, rng: &mut impl Rng) -> Vec<Node> {
    let mut nodes = Vec::with_capacity(cfg.canopy_count + cfg.trunk_count);
    let mid_x = size.x * 0.5;

    for _ in 0..cfg.canopy_count {
        let t: f32 = rng.random();
        let y = size.y * (cfg.canopy_base + (cfg.canopy_top - cfg.canopy_base) * t);
        let spread = size.x * cfg.canopy_spread * (1.0 - t).powf(cfg.canopy_taper);
        let x = mid_x + standard_normal(rng) * spread;
        nodes.push(Node::at_rest(Vec2::new(x, y)));
    }

    let last = cfg.trunk_count.saturating_sub(1).max(1) as f32;
    for i in 0..cfg.trunk_count {
        let t = i as f32 / last;
        let y = size.y * (cfg.trunk_base + (cfg.trunk_top - cfg.trunk_base) * t);
        let x = mid_x + standard_normal(rng) * cfg.trunk_jitter;
        nodes.push(Node::at_rest(Vec2::new(x, y)));
    }

    nodes
}
