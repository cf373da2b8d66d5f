//! Core types for gridview.
//!
//! This crate provides the types shared by every gridview crate:
//! - [`GridCell`] records read from a grid dataset
//! - [`GridError`] and the crate-wide [`Result`]
//! - [`Options`] for the lookup table and cell outlines
//! - the [`Structure`] trait and the [`Scene`] that owns built geometry
//! - [`ClipPlane`] for hiding one side of the model

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]

pub mod cell;
pub mod clip_plane;
pub mod error;
pub mod options;
pub mod scene;
pub mod structure;

pub use cell::{GridCell, CELL_CORNERS};
pub use clip_plane::{ClipPlane, ClipPlaneUniforms};
pub use error::{GridError, Result};
pub use options::{LutOptions, Options, WireframeOptions};
pub use scene::Scene;
pub use structure::Structure;

// Re-export glam types for convenience
pub use glam::Vec3;
