//! Rendering descriptors for gridview.
//!
//! This crate holds everything a host renderer needs besides raw geometry:
//! - Color maps and the [`ColorLookupTable`] that turns cell values into colors
//! - Material descriptors for cell solids and outlines
//! - `Pod` vertex, index and uniform layouts

// Graphics code intentionally uses casts for indices, colors, and coordinates
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod buffer;
pub mod color_maps;
pub mod materials;

pub use buffer::{Vertex, VERTEX_STRIDE};
pub use color_maps::{ColorLookupTable, ColorMap, ColorMapRegistry, MAX_LUT_RESOLUTION};
pub use materials::{
    BackfacePolicy, LineMaterial, LineUniforms, ShadeStyle, SolidMaterial, SolidUniforms,
};
