use glam::Vec2;

/// Every tunable constant of the simulation in one place.
///
/// Physics values are expressed in surface pixels and "pixels per
/// 1/60 s frame" (see [`crate::physics::integrate`] for the frame
/// normalization). Placement bounds (`safe_zone_*`, `edge_margin`,
/// canopy/trunk bands) are fractions of the surface size.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    // Forest layout.
    /// Number of tree glyphs to scatter.
    pub tree_count: usize,
    /// Uniform scale range applied to the glyph template, in pixels per
    /// template unit.
    pub tree_scale_min: f32,
    pub tree_scale_max: f32,
    /// Fractional corners of the rectangle tree centers must avoid.
    pub safe_zone_min: Vec2,
    pub safe_zone_max: Vec2,
    /// Fractional width of the outer band a candidate center must fall
    /// into to count as edge-biased.
    pub edge_margin: f32,
    /// Total candidate centers sampled per tree before giving up and
    /// taking an unconstrained point.
    pub place_attempts: u32,
    /// Failed tries after which the edge-bias requirement is dropped
    /// (the safe zone still applies).
    pub relax_after: u32,

    // Silhouette layout.
    pub canopy_count: usize,
    pub trunk_count: usize,
    /// Vertical canopy band, as fractions of the surface height
    /// (`canopy_top` < `canopy_base`; y grows downward).
    pub canopy_top: f32,
    pub canopy_base: f32,
    /// Canopy half-width at the base, as a fraction of surface width.
    pub canopy_spread: f32,
    /// Sub-linear exponent shaping how the spread tapers toward the
    /// top (values below 1.0 keep the mid-canopy wide).
    pub canopy_taper: f32,
    /// Vertical trunk band, as fractions of the surface height.
    pub trunk_top: f32,
    pub trunk_base: f32,
    /// Horizontal Gaussian jitter of trunk nodes, in pixels.
    pub trunk_jitter: f32,

    // Physics.
    /// Spring constant pulling each node toward its anchor.
    pub spring: f32,
    /// Per-tick multiplicative velocity decay.
    pub damping: f32,
    /// Per-component velocity bound, in pixels per frame.
    pub max_speed: f32,
    /// Pointer influence radius, in pixels.
    pub repel_radius: f32,
    /// Base repulsion force scale.
    pub repel_strength: f32,
    /// Overall push scale relative to the spring scale.
    pub push_scale: f32,
    /// Bound of the per-component random jitter added while repelling.
    pub noise_strength: f32,
    /// Largest simulated gap per tick, in seconds.
    pub max_frame_dt: f32,

    // Rendering.
    /// Node circle radius, in pixels.
    pub node_radius: f32,
    /// Distance below which a node pair gets a link line, in pixels.
    pub link_distance: f32,
    /// Link opacity for a coincident pair; falls off to zero at
    /// `link_distance`.
    pub link_alpha: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tree_count: 9,
            tree_scale_min: 22.0,
            tree_scale_max: 46.0,
            safe_zone_min: Vec2::new(0.28, 0.22),
            safe_zone_max: Vec2::new(0.72, 0.78),
            edge_margin: 0.22,
            place_attempts: 40,
            relax_after: 15,

            canopy_count: 240,
            trunk_count: 36,
            canopy_top: 0.18,
            canopy_base: 0.74,
            canopy_spread: 0.16,
            canopy_taper: 0.62,
            trunk_top: 0.52,
            trunk_base: 0.94,
            trunk_jitter: 1.4,

            spring: 0.025,
            damping: 0.86,
            max_speed: 16.0,
            repel_radius: 110.0,
            repel_strength: 1.0,
            push_scale: 16.0,
            noise_strength: 0.5,
            max_frame_dt: 0.033,

            node_radius: 1.8,
            link_distance: 42.0,
            link_alpha: 0.3,
        }
    }
}
