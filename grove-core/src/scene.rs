//! The owning animation context.
//!
//! A [`Scene`] holds everything the per-frame loop reads and writes:
//! the node set, the pointer state, the surface size and the
//! configuration. Event handlers mutate it between frames and the
//! driver calls [`Scene::advance`] once per refresh; there are no
//! hidden process-wide singletons.

use crate::{
    config::Config,
    links::{self, Link},
    node::Node,
    physics,
    placement,
    pointer::Pointer,
};
use glam::Vec2;
use rand::Rng;

/// Which placement strategy fills the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Scattered 10-node tree glyphs around the safe zone.
    Forest,
    /// A single statistical tree silhouette with link lines.
    Silhouette,
}

/// All mutable animation state for one surface.
#[derive(Debug)]
pub struct Scene {
    pub cfg: Config,
    pub layout: Layout,
    pub size: Vec2,
    pub nodes: Vec<Node>,
    pub pointer: Pointer,
}

impl Scene {
    /// Builds a scene and places its initial node set.
    pub fn new(layout: Layout, cfg: Config, size: Vec2, rng: &mut impl Rng) -> Self {
        let mut scene = Self {
            cfg,
            layout,
            size,
            nodes: Vec::new(),
            pointer: Pointer::inactive(),
        };
        scene.regenerate(rng);
        scene
    }

    /// Discards every node and re-places the set from scratch for the
    /// current layout and size. Old positions never carry over.
    pub fn regenerate(&mut self, rng: &mut impl Rng) {
        self.nodes = match self.layout {
            Layout::Forest => placement::plant_forest(&self.cfg, self.size, rng),
            Layout::Silhouette => placement::grow_silhouette(&self.cfg, self.size, rng),
        };
    }

    /// Records a new surface size and regenerates the node set.
    pub fn resize(&mut self, size: Vec2, rng: &mut impl Rng) {
        self.size = size;
        self.regenerate(rng);
    }

    /// Switches the placement strategy and regenerates.
    pub fn set_layout(&mut self, layout: Layout, rng: &mut impl Rng) {
        self.layout = layout;
        self.regenerate(rng);
    }

    /// Pointer-move handler.
    pub fn pointer_moved(&mut self, position: Vec2) {
        self.pointer = Pointer::at(position);
    }

    /// Pointer-leave handler. The stored coordinates go stale; the
    /// integrator never reads them while `active` is false.
    pub fn pointer_left(&mut self) {
        self.pointer.active = false;
    }

    /// One simulation tick. Clamps `dt` to `[0, max_frame_dt]` so a
    /// backgrounded surface resuming cannot produce one giant,
    /// destabilizing step.
    pub fn advance(&mut self, dt: f32, rng: &mut impl Rng) {
        let dt = dt.clamp(0.0, self.cfg.max_frame_dt);
        physics::integrate(&mut self.nodes, &self.pointer, dt, &self.cfg, rng);
    }

    /// Proximity links for the current positions. Only the silhouette
    /// layout draws links; a forest yields none.
    pub fn links(&self) -> Vec<Link> {
        match self.layout {
            Layout::Forest => Vec::new(),
            Layout::Silhouette => links::collect(&self.nodes, &self.cfg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn resize_regenerates_solely_from_the_new_dimensions() {
        let cfg = Config::default();
        let mut rng = StdRng::seed_from_u64(20);
        let mut scene = Scene::new(Layout::Forest, cfg, Vec2::new(800.0, 300.0), &mut rng);

        // Disturb live state so any carry-over would be visible.
        scene.nodes[0].position += Vec2::splat(25.0);
        scene.nodes[0].velocity = Vec2::new(3.0, -2.0);

        let mut resize_rng = StdRng::seed_from_u64(21);
        scene.resize(Vec2::new(1280.0, 500.0), &mut resize_rng);

        // Same seed, same dimensions, fresh placement: identical set.
        let mut fresh_rng = StdRng::seed_from_u64(21);
        let fresh = placement::plant_forest(&cfg, Vec2::new(1280.0, 500.0), &mut fresh_rng);

        assert_eq!(scene.nodes.len(), fresh.len());
        for (a, b) in scene.nodes.iter().zip(&fresh) {
            assert_eq!(a.anchor, b.anchor);
            assert_eq!(a.position, b.position);
            assert_eq!(a.velocity, Vec2::ZERO);
        }
    }

    #[test]
    fn advance_clamps_oversized_time_gaps() {
        let cfg = Config::default();
        let size = Vec2::new(600.0, 400.0);

        let mut rng_a = StdRng::seed_from_u64(22);
        let mut scene_a = Scene::new(Layout::Silhouette, cfg, size, &mut rng_a);
        let mut rng_b = StdRng::seed_from_u64(22);
        let mut scene_b = Scene::new(Layout::Silhouette, cfg, size, &mut rng_b);

        scene_a.nodes[0].position += Vec2::splat(30.0);
        scene_b.nodes[0].position += Vec2::splat(30.0);

        // A huge gap (tab was backgrounded) behaves like the clamp.
        scene_a.advance(10.0, &mut rng_a);
        scene_b.advance(cfg.max_frame_dt, &mut rng_b);

        for (a, b) in scene_a.nodes.iter().zip(&scene_b.nodes) {
            assert_eq!(a.position, b.position);
            assert_eq!(a.velocity, b.velocity);
        }
    }

    #[test]
    fn pointer_leave_stops_all_interaction() {
        let cfg = Config::default();
        let mut rng = StdRng::seed_from_u64(23);
        let mut scene = Scene::new(Layout::Forest, cfg, Vec2::new(640.0, 480.0), &mut rng);

        let target = scene.nodes[0].anchor;
        scene.pointer_moved(target);
        scene.pointer_left();

        for _ in 0..5 {
            scene.advance(1.0 / 60.0, &mut rng);
        }

        assert_eq!(scene.nodes[0].position, target);
        assert_eq!(scene.nodes[0].velocity, Vec2::ZERO);
    }

    #[test]
    fn forest_layout_never_yields_links() {
        let cfg = Config::default();
        let mut rng = StdRng::seed_from_u64(24);
        let scene = Scene::new(Layout::Forest, cfg, Vec2::new(640.0, 480.0), &mut rng);

        assert!(scene.links().is_empty());
    }

    #[test]
    fn layout_switch_replaces_the_node_set() {
        let cfg = Config::default();
        let mut rng = StdRng::seed_from_u64(25);
        let mut scene = Scene::new(Layout::Forest, cfg, Vec2::new(900.0, 360.0), &mut rng);
        assert_eq!(scene.nodes.len(), cfg.tree_count * 10);

        scene.set_layout(Layout::Silhouette, &mut rng);
        assert_eq!(scene.nodes.len(), cfg.canopy_count + cfg.trunk_count);
    }
}
