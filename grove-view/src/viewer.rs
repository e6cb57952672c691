//! Interactive particle banner viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the simulation state
//! (scene, RNG, run/pause flags) and implements [`eframe::App`] to
//! wire pointer and resize events into the scene and draw it every
//! frame.

use eframe::App;
use glam::Vec2;
use grove_core::{
    config::Config,
    scene::{Layout, Scene},
};
use rand::{SeedableRng, rngs::StdRng};

/// Banner background fill.
const BACKDROP: egui::Color32 = egui::Color32::from_rgb(12, 17, 14);
/// Node circle fill.
const NODE_COLOR: egui::Color32 = egui::Color32::from_rgb(126, 196, 143);
/// Link line base color; per-link alpha is applied on top.
const LINK_COLOR: egui::Color32 = egui::Color32::from_rgb(126, 196, 143);

/// Main application state for the interactive viewer.
///
/// [`Viewer`] glues together:
/// - The simulation core: one [`Scene`] (nodes, pointer, size, config).
/// - The RNG driving placement and repel jitter (seedable from the CLI
///   so placements are reproducible).
/// - eframe/egui callbacks for drawing and event wiring.
///
/// The typical per-frame update is:
/// 1. Sync the surface size (a change regenerates the node set).
/// 2. Sync the pointer state from the hover position.
/// 3. Advance the scene by the frame's clamped `dt` (unless paused).
/// 4. Paint links, then nodes, then overlays.
pub struct Viewer {
    scene: Scene,
    rng: StdRng,

    running: bool,
    show_safe_zone: bool,

    last_dt: f32,
    last_links: usize,
}

impl Viewer {
    /// Creates a viewer with a freshly placed scene.
    ///
    /// The initial size is a placeholder; the first frame syncs it to
    /// the real panel rect and regenerates.
    pub fn new(layout: Layout, cfg: Config, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let scene = Scene::new(layout, cfg, Vec2::new(1200.0, 420.0), &mut rng);

        Self {
            scene,
            rng,
            running: true,
            show_safe_zone: false,
            last_dt: 0.0,
            last_links: 0,
        }
    }

    /// Adopts a new surface size, regenerating the node set when it
    /// actually changed. Sub-pixel rect wobble is ignored.
    fn sync_surface(&mut self, size: Vec2) {
        if (size - self.scene.size).abs().max_element() > 0.5 {
            self.scene.resize(size, &mut self.rng);
        }
    }

    /// Feeds the hover position (panel-local) into the pointer state;
    /// `None` means the pointer left the surface.
    fn sync_pointer(&mut self, hover: Option<Vec2>) {
        match hover {
            Some(position) => self.scene.pointer_moved(position),
            None => self.scene.pointer_left(),
        }
    }

    /// One driver tick: advances the scene unless paused.
    fn tick(&mut self, dt: f32) {
        if self.running {
            self.scene.advance(dt, &mut self.rng);
            self.last_dt = dt;
        }
    }

    /// Switches the placement strategy and replaces the node set.
    fn switch_layout(&mut self, layout: Layout) {
        if self.scene.layout != layout {
            self.scene.set_layout(layout, &mut self.rng);
        }
    }

    /// Helper to draw a labeled `usize` [`egui::DragValue`].
    fn labeled_drag_usize(
        ui: &mut egui::Ui,
        label: &str,
        value: &mut usize,
        range: std::ops::RangeInclusive<usize>,
        speed: f64,
    ) {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).range(range).speed(speed));
        });
    }

    /// Helper to draw a labeled `f32` [`egui::DragValue`].
    fn labeled_drag_f32(
        ui: &mut egui::Ui,
        label: &str,
        value: &mut f32,
        range: std::ops::RangeInclusive<f32>,
        speed: f64,
    ) {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).range(range).speed(speed));
        });
    }

    /// Builds the top panel UI (run controls, layout, replanting).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .button(if self.running { "⏸ Pause" } else { "▶ Run" })
                    .clicked()
                {
                    self.running = !self.running;
                }

                ui.separator();

                if ui
                    .selectable_label(self.scene.layout == Layout::Forest, "■ Forest")
                    .clicked()
                {
                    self.switch_layout(Layout::Forest);
                }
                if ui
                    .selectable_label(self.scene.layout == Layout::Silhouette, "▲ Silhouette")
                    .clicked()
                {
                    self.switch_layout(Layout::Silhouette);
                }

                ui.separator();

                if ui.button("Replant").clicked() {
                    self.scene.regenerate(&mut self.rng);
                }

                ui.checkbox(&mut self.show_safe_zone, "Safe zone");
            });
        });
    }

    /// Builds the bottom status bar (node count, link count, dt).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("dt = {:.4} s", self.last_dt));
                ui.separator();
                ui.label(format!("links = {}", self.last_links));
                ui.label(format!("nodes = {}", self.scene.nodes.len()));
            });
        });
    }

    /// Builds the right-hand configuration panel.
    fn ui_config_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("config_panel")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.heading("Config");

                let cfg = &mut self.scene.cfg;

                ui.separator();
                ui.label("Spring");
                Self::labeled_drag_f32(ui, "spring:", &mut cfg.spring, 0.0..=0.2, 0.001);
                Self::labeled_drag_f32(ui, "damping:", &mut cfg.damping, 0.5..=0.99, 0.005);
                Self::labeled_drag_f32(ui, "max_speed:", &mut cfg.max_speed, 1.0..=60.0, 0.5);

                ui.separator();
                ui.label("Pointer");
                Self::labeled_drag_f32(
                    ui,
                    "repel_radius:",
                    &mut cfg.repel_radius,
                    10.0..=400.0,
                    1.0,
                );
                Self::labeled_drag_f32(
                    ui,
                    "repel_strength:",
                    &mut cfg.repel_strength,
                    0.0..=5.0,
                    0.05,
                );
                Self::labeled_drag_f32(ui, "noise:", &mut cfg.noise_strength, 0.0..=3.0, 0.05);

                ui.separator();
                ui.label("Links");
                Self::labeled_drag_f32(
                    ui,
                    "link_distance:",
                    &mut cfg.link_distance,
                    5.0..=150.0,
                    0.5,
                );
                Self::labeled_drag_f32(ui, "link_alpha:", &mut cfg.link_alpha, 0.0..=1.0, 0.01);

                ui.separator();
                ui.label("Placement (Replant to apply)");
                Self::labeled_drag_usize(ui, "trees:", &mut cfg.tree_count, 1..=40, 1.0);
                Self::labeled_drag_usize(ui, "canopy:", &mut cfg.canopy_count, 10..=1000, 1.0);
                Self::labeled_drag_usize(ui, "trunk:", &mut cfg.trunk_count, 0..=200, 1.0);
                Self::labeled_drag_f32(ui, "node_radius:", &mut cfg.node_radius, 0.5..=6.0, 0.1);

                ui.separator();
                if ui.button("Reset cfg to default").clicked() {
                    self.scene.cfg = Config::default();
                }
            });
    }

    /// Draws the safe-zone outline so placement can be eyeballed.
    fn ui_safe_zone_hint(&self, painter: &egui::Painter, rect: egui::Rect) {
        let cfg = &self.scene.cfg;
        let stroke = egui::Stroke::new(1.5, egui::Color32::YELLOW);

        let min = cfg.safe_zone_min;
        let max = cfg.safe_zone_max;
        let corners = [
            Vec2::new(min.x, min.y),
            Vec2::new(max.x, min.y),
            Vec2::new(max.x, max.y),
            Vec2::new(min.x, max.y),
        ];
        let points: Vec<egui::Pos2> = corners
            .iter()
            .map(|&frac| to_screen(rect, frac * self.scene.size))
            .collect();
        painter.add(egui::Shape::closed_line(points, stroke));
    }

    /// Builds the central panel: event sync, one tick, then painting.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let response = ui.allocate_response(ui.available_size(), egui::Sense::hover());
            let rect = response.rect;
            let painter = ui.painter_at(rect);

            self.sync_surface(Vec2::new(rect.width(), rect.height()));

            let hover = response
                .hover_pos()
                .map(|p| Vec2::new(p.x - rect.min.x, p.y - rect.min.y));
            self.sync_pointer(hover);

            let dt = ctx.input(|i| i.stable_dt);
            self.tick(dt);

            painter.rect_filled(rect, egui::CornerRadius::ZERO, BACKDROP);

            // Links first so nodes sit on top of them.
            let links = self.scene.links();
            self.last_links = links.len();
            for link in &links {
                let a = to_screen(rect, self.scene.nodes[link.a].position);
                let b = to_screen(rect, self.scene.nodes[link.b].position);
                let color = egui::Color32::from_rgba_unmultiplied(
                    LINK_COLOR.r(),
                    LINK_COLOR.g(),
                    LINK_COLOR.b(),
                    (link.alpha * 255.0) as u8,
                );
                painter.line_segment([a, b], egui::Stroke::new(1.0, color));
            }

            for node in &self.scene.nodes {
                painter.circle_filled(
                    to_screen(rect, node.position),
                    self.scene.cfg.node_radius,
                    NODE_COLOR,
                );
            }

            if self.show_safe_zone && self.scene.layout == Layout::Forest {
                self.ui_safe_zone_hint(&painter, rect);
            }

            if self.running {
                ctx.request_repaint();
            }
        });
    }
}

/// Maps a surface-space position into the panel's screen rect.
fn to_screen(rect: egui::Rect, p: Vec2) -> egui::Pos2 {
    egui::pos2(rect.min.x + p.x, rect.min.y + p.y)
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_config_panel(ctx);
        self.ui_central_panel(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_viewer(layout: Layout) -> Viewer {
        Viewer::new(layout, Config::default(), Some(42))
    }

    #[test]
    fn seeded_viewers_place_identical_scenes() {
        let a = test_viewer(Layout::Forest);
        let b = test_viewer(Layout::Forest);

        assert_eq!(a.scene.nodes.len(), b.scene.nodes.len());
        for (na, nb) in a.scene.nodes.iter().zip(&b.scene.nodes) {
            assert_eq!(na.anchor, nb.anchor);
        }
    }

    #[test]
    fn surface_sync_regenerates_only_on_a_real_change() {
        let mut viewer = test_viewer(Layout::Forest);
        let size = viewer.scene.size;

        // Disturb live state; a same-size sync must not discard it.
        viewer.scene.nodes[0].position += Vec2::splat(9.0);
        viewer.sync_surface(size);
        assert_ne!(viewer.scene.nodes[0].position, viewer.scene.nodes[0].anchor);

        // A genuinely new size replaces everything at rest.
        viewer.sync_surface(size * 1.5);
        assert_eq!(viewer.scene.size, size * 1.5);
        for node in &viewer.scene.nodes {
            assert_eq!(node.position, node.anchor);
        }
    }

    #[test]
    fn hover_none_deactivates_the_pointer() {
        let mut viewer = test_viewer(Layout::Silhouette);

        viewer.sync_pointer(Some(Vec2::new(40.0, 60.0)));
        assert!(viewer.scene.pointer.active);
        assert_eq!(viewer.scene.pointer.position, Vec2::new(40.0, 60.0));

        viewer.sync_pointer(None);
        assert!(!viewer.scene.pointer.active);
    }

    #[test]
    fn pause_freezes_the_simulation() {
        let mut viewer = test_viewer(Layout::Forest);
        viewer.scene.nodes[0].position += Vec2::splat(20.0);
        let displaced = viewer.scene.nodes[0].position;

        viewer.running = false;
        viewer.tick(1.0 / 60.0);
        assert_eq!(viewer.scene.nodes[0].position, displaced);

        viewer.running = true;
        viewer.tick(1.0 / 60.0);
        assert_ne!(viewer.scene.nodes[0].position, displaced);
    }

    #[test]
    fn layout_switch_replants_with_the_right_population() {
        let mut viewer = test_viewer(Layout::Forest);
        let cfg = viewer.scene.cfg;
        assert_eq!(viewer.scene.nodes.len(), cfg.tree_count * 10);

        viewer.switch_layout(Layout::Silhouette);
        assert_eq!(
            viewer.scene.nodes.len(),
            cfg.canopy_count + cfg.trunk_count
        );

        // Switching to the current layout is a no-op.
        let anchor = viewer.scene.nodes[0].anchor;
        viewer.switch_layout(Layout::Silhouette);
        assert_eq!(viewer.scene.nodes[0].anchor, anchor);
    }
}
