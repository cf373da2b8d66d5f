//! Turns grid cells into solid meshes and outlines.
//!
//! The builder is a pure transform: it borrows the lookup table, reads the
//! cells and returns one `(CellMesh, CellWireframe)` pair per cell, in input
//! order. Calling it twice on the same input yields equal output.

use gridview_core::{GridCell, GridError, Result, Scene, WireframeOptions};
use gridview_render::{ColorLookupTable, LineMaterial, SolidMaterial};

use crate::cell_mesh::{CellMesh, CellWireframe};
use crate::hexahedron::{feature_edges, DEFAULT_THRESHOLD_ANGLE_DEG, HEX_TRIANGLES};

/// Appearance settings shared by every cell of a build.
#[derive(Debug, Clone, PartialEq)]
pub struct CellStyle {
    /// Faces meeting below this angle (degrees) hide their shared edge.
    pub threshold_angle_deg: f32,
    /// Outline material.
    pub line_material: LineMaterial,
}

impl CellStyle {
    /// Builds a style from wireframe options.
    pub fn from_options(options: &WireframeOptions) -> Self {
        Self {
            threshold_angle_deg: options.threshold_angle_deg,
            line_material: LineMaterial::new(options.color, options.opacity),
        }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            threshold_angle_deg: DEFAULT_THRESHOLD_ANGLE_DEG,
            line_material: LineMaterial::default(),
        }
    }
}

/// Builds cell geometry against a fixed lookup table.
pub struct CellMeshBuilder<'a> {
    lut: &'a ColorLookupTable,
    style: CellStyle,
    name_prefix: String,
}

impl<'a> CellMeshBuilder<'a> {
    /// Creates a builder coloring cells with `lut`.
    pub fn new(lut: &'a ColorLookupTable) -> Self {
        Self {
            lut,
            style: CellStyle::default(),
            name_prefix: "cell".to_string(),
        }
    }

    /// Sets the outline style.
    #[must_use]
    pub fn with_style(mut self, style: CellStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the prefix of generated structure names (default "cell").
    #[must_use]
    pub fn with_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.name_prefix = prefix.into();
        self
    }

    /// Returns the outline style.
    pub fn style(&self) -> &CellStyle {
        &self.style
    }

    /// Builds one pair per cell.
    ///
    /// Every cell is validated before anything is built, so a single bad
    /// cell fails the whole batch with [`GridError::InvalidCell`].
    pub fn build(&self, cells: &[GridCell]) -> Result<Vec<(CellMesh, CellWireframe)>> {
        for (index, cell) in cells.iter().enumerate() {
            cell.validate(index)?;
        }

        let pairs = cells
            .iter()
            .enumerate()
            .map(|(index, cell)| self.build_cell(index, cell))
            .collect::<Result<Vec<_>>>()?;

        log::debug!(
            "built {} cells with color map '{}'",
            pairs.len(),
            self.lut.name()
        );
        Ok(pairs)
    }

    /// Builds the pair for a single cell.
    pub fn build_cell(&self, index: usize, cell: &GridCell) -> Result<(CellMesh, CellWireframe)> {
        let corners = cell.corners().ok_or(GridError::InvalidCell {
            index,
            found: cell.points.len(),
        })?;

        let color = self.lut.color(cell.property_value);
        let name = format!("{}_{index}", self.name_prefix);

        let edges = feature_edges(&corners, &HEX_TRIANGLES, self.style.threshold_angle_deg);
        let wireframe = CellWireframe::new(
            format!("{name}_wireframe"),
            &corners,
            edges,
            self.style.line_material,
        );
        let mesh = CellMesh::new(
            name,
            &corners,
            cell.property_value,
            SolidMaterial::flat(color),
        );

        Ok((mesh, wireframe))
    }
}

/// Builds cells with the default outline style.
pub fn build(cells: &[GridCell], lut: &ColorLookupTable) -> Result<Vec<(CellMesh, CellWireframe)>> {
    CellMeshBuilder::new(lut).build(cells)
}

/// A destination for built cells, typically the host's scene graph.
pub trait SceneSink {
    /// Takes ownership of one cell's solid and outline.
    fn add_cell(&mut self, mesh: CellMesh, wireframe: CellWireframe) -> Result<()>;

    /// Hands over every pair in order, stopping at the first error.
    fn add_cells(&mut self, pairs: Vec<(CellMesh, CellWireframe)>) -> Result<usize> {
        let count = pairs.len();
        for (mesh, wireframe) in pairs {
            self.add_cell(mesh, wireframe)?;
        }
        Ok(count)
    }
}

impl SceneSink for Scene {
    fn add_cell(&mut self, mesh: CellMesh, wireframe: CellWireframe) -> Result<()> {
        self.add(Box::new(mesh))?;
        self.add(Box::new(wireframe))
    }
}

impl SceneSink for Vec<(CellMesh, CellWireframe)> {
    fn add_cell(&mut self, mesh: CellMesh, wireframe: CellWireframe) -> Result<()> {
        self.push((mesh, wireframe));
        Ok(())
    }
}
