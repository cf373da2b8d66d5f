//! Cell geometry for gridview.
//!
//! This crate turns [`gridview_core::GridCell`] records into render-ready geometry:
//! - [`HEX_TRIANGLES`], the fixed triangulation of a hexahedral cell
//! - [`CellMesh`], the flat-colored closed solid of a cell
//! - [`CellWireframe`], the cell's outline reduced to feature edges
//! - [`CellMeshBuilder`] and the [`SceneSink`] receiving its output

// Graphics code intentionally uses casts for indices, colors, and coordinates
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod builder;
pub mod cell_mesh;
pub mod hexahedron;

pub use builder::{build, CellMeshBuilder, CellStyle, SceneSink};
pub use cell_mesh::{CellMesh, CellWireframe};
pub use hexahedron::{feature_edges, DEFAULT_THRESHOLD_ANGLE_DEG, HEX_TRIANGLES};
