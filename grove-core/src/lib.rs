//! Core spring-particle banner simulation library.
//!
//! Main components:
//! - [`placement`] — procedural anchor generation (forest glyphs and silhouette cloud).
//! - [`physics`] — per-tick spring / pointer-repulsion integration.
//! - [`links`] — proximity link extraction for the silhouette layout.
//! - [`scene`] — the owning animation context (nodes, pointer, surface size).
//! - [`config`] — tunable constants with documented defaults.
//! - [`node`], [`pointer`], [`types`] — shared plain data types.

pub mod config;
pub mod links;
pub mod node;
pub mod physics;
pub mod placement;
pub mod pointer;
pub mod scene;
pub mod types;
