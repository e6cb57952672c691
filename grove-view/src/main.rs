//! Application entry point for the Grove Banner viewer.
//!
//! This binary parses startup options, sets up eframe/egui and
//! delegates all interactive logic and rendering to [`Viewer`] from
//! the `viewer` module.

mod viewer;

use clap::{Parser, ValueEnum};
use grove_core::{config::Config, scene::Layout};
use viewer::Viewer;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LayoutArg {
    Forest,
    Silhouette,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Starting layout.
    #[arg(long, value_enum, default_value = "forest")]
    layout: LayoutArg,

    /// Tree glyph count for the forest layout.
    #[arg(long)]
    trees: Option<usize>,

    /// Canopy node count for the silhouette layout.
    #[arg(long)]
    canopy: Option<usize>,

    /// Trunk node count for the silhouette layout.
    #[arg(long)]
    trunk: Option<usize>,

    /// Seed for deterministic placement (OS entropy if omitted).
    #[arg(long)]
    seed: Option<u64>,
}

/// Starts the native eframe application with a banner-shaped window.
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if eframe fails to create the native window or event loop.
fn main() -> eframe::Result<()> {
    let args = Args::parse();

    let mut cfg = Config::default();
    if let Some(trees) = args.trees {
        cfg.tree_count = trees;
    }
    if let Some(canopy) = args.canopy {
        cfg.canopy_count = canopy;
    }
    if let Some(trunk) = args.trunk {
        cfg.trunk_count = trunk;
    }

    let layout = match args.layout {
        LayoutArg::Forest => Layout::Forest,
        LayoutArg::Silhouette => Layout::Silhouette,
    };

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1200.0, 460.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Grove Banner",
        options,
        Box::new(move |_cc| Ok(Box::new(Viewer::new(layout, cfg, args.seed)))),
    )
}
