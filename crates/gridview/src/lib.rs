//! gridview: render-ready geometry for hexahedral grid datasets.
//!
//! gridview reads a grid of hexahedral cells, each carrying a scalar
//! property, and produces for every cell a flat-colored closed solid and a
//! translucent outline, ready to be handed to a host renderer's scene.
//!
//! # Quick Start
//!
//! ```no_run
//! use gridview::*;
//!
//! # async fn run() -> Result<()> {
//! init_logging();
//!
//! let options = Options::default();
//! let loader = GridLoader::new();
//! let mut scene = Scene::new();
//!
//! let count = load_into_scene(&loader, "data/grid.json", &options, &mut scene).await?;
//! println!("{count} cells, scene size {}", scene.length_scale());
//! # Ok(())
//! # }
//! ```
//!
//! # Pipeline
//!
//! - [`GridLoader::load`] fetches a JSON document and parses it into [`GridCell`]s
//! - [`ColorLookupTable`] maps each cell's value to a palette color
//! - [`build`] / [`CellMeshBuilder`] produce one ([`CellMesh`], [`CellWireframe`]) pair per cell
//! - a [`SceneSink`] such as [`Scene`] takes ownership of the pairs

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

mod format;
mod loader;

// Re-export core types
pub use gridview_core::{
    error::{GridError, Result},
    ClipPlane, ClipPlaneUniforms, GridCell, LutOptions, Options, Scene, Structure, Vec3,
    WireframeOptions, CELL_CORNERS,
};

// Re-export render types
pub use gridview_render::{
    BackfacePolicy, ColorLookupTable, ColorMap, ColorMapRegistry, LineMaterial, ShadeStyle,
    SolidMaterial, Vertex,
};

// Re-export structures
pub use gridview_structures::{
    build, feature_edges, CellMesh, CellMeshBuilder, CellStyle, CellWireframe, SceneSink,
    HEX_TRIANGLES,
};

pub use format::parse_grid_document;
pub use loader::{GridLoader, Source};

/// Initializes `env_logger` once; later calls are ignored.
pub fn init_logging() {
    let _ = env_logger::try_init();
}

/// Loads cells from `source` with a one-off loader.
pub async fn load(source: &str) -> Result<Vec<GridCell>> {
    GridLoader::new().load(source).await
}

/// Builds the pairs for `cells` as configured by `options`.
pub fn build_with_options(
    cells: &[GridCell],
    options: &Options,
) -> Result<Vec<(CellMesh, CellWireframe)>> {
    let lut = ColorLookupTable::from_options(&options.lut)?;
    CellMeshBuilder::new(&lut)
        .with_style(CellStyle::from_options(&options.wireframe))
        .build(cells)
}

/// Loads `source`, builds every cell and hands the pairs to `sink`.
///
/// The lookup table is checked before anything is fetched. Returns the
/// number of cells added.
pub async fn load_into_scene<S: SceneSink>(
    loader: &GridLoader,
    source: &str,
    options: &Options,
    sink: &mut S,
) -> Result<usize> {
    let lut = ColorLookupTable::from_options(&options.lut)?;
    let cells = loader.load(source).await?;

    let pairs = CellMeshBuilder::new(&lut)
        .with_style(CellStyle::from_options(&options.wireframe))
        .build(&cells)?;
    let count = sink.add_cells(pairs)?;

    log::info!("added {count} cells from {source}");
    Ok(count)
}
