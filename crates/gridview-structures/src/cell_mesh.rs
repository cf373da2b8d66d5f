//! Render-ready geometry for a single grid cell.
//!
//! Each cell produces a [`CellMesh`] (the closed, flat-colored solid) and a
//! [`CellWireframe`] (its feature edges). Both share the cell's eight corners
//! as their vertex buffer, in the order the dataset listed them.

use std::any::Any;

use glam::Vec3;
use gridview_core::{Structure, CELL_CORNERS};
use gridview_render::{buffer, LineMaterial, SolidMaterial, Vertex};

use crate::hexahedron::HEX_TRIANGLES;

fn to_vertices(corners: &[Vec3; CELL_CORNERS]) -> [Vertex; CELL_CORNERS] {
    corners.map(|p| Vertex {
        position: p.to_array(),
    })
}

fn positions(vertices: &[Vertex; CELL_CORNERS]) -> [Vec3; CELL_CORNERS] {
    vertices.map(|v| Vec3::from_array(v.position))
}

fn bounds(vertices: &[Vertex; CELL_CORNERS]) -> (Vec3, Vec3) {
    let first = Vec3::from_array(vertices[0].position);
    positions(vertices)
        .iter()
        .fold((first, first), |(min, max), &p| (min.min(p), max.max(p)))
}

fn centroid(vertices: &[Vertex; CELL_CORNERS]) -> Vec3 {
    positions(vertices).iter().fold(Vec3::ZERO, |a, &b| a + b) / CELL_CORNERS as f32
}

/// The triangulated solid of one cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CellMesh {
    name: String,
    vertices: [Vertex; CELL_CORNERS],
    property_value: f32,
    material: SolidMaterial,
    enabled: bool,
}

impl CellMesh {
    /// Creates a solid from the cell's corners, colored with `material`.
    pub fn new(
        name: impl Into<String>,
        corners: &[Vec3; CELL_CORNERS],
        property_value: f32,
        material: SolidMaterial,
    ) -> Self {
        Self {
            name: name.into(),
            vertices: to_vertices(corners),
            property_value,
            material,
            enabled: true,
        }
    }

    /// Returns the vertices.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Returns the corner positions.
    pub fn positions(&self) -> [Vec3; CELL_CORNERS] {
        positions(&self.vertices)
    }

    /// Returns the flattened vertex buffer: 24 scalars in corner order.
    pub fn vertex_buffer(&self) -> &[f32] {
        buffer::flatten(&self.vertices)
    }

    /// Returns the triangles as indices into the vertices.
    pub fn triangles(&self) -> &'static [[u32; 3]] {
        &HEX_TRIANGLES
    }

    /// Returns the number of triangles.
    pub fn num_triangles(&self) -> usize {
        HEX_TRIANGLES.len()
    }

    /// Returns the vertex buffer as bytes.
    pub fn vertex_bytes(&self) -> &[u8] {
        buffer::vertex_bytes(&self.vertices)
    }

    /// Returns the index buffer as bytes.
    pub fn index_bytes(&self) -> &[u8] {
        buffer::index_bytes(&HEX_TRIANGLES)
    }

    /// Returns the scalar the color was derived from.
    pub fn property_value(&self) -> f32 {
        self.property_value
    }

    /// Returns the uniform surface color.
    pub fn color(&self) -> Vec3 {
        self.material.color
    }

    /// Returns the material.
    pub fn material(&self) -> &SolidMaterial {
        &self.material
    }

    /// Returns the average of the corners.
    pub fn centroid(&self) -> Vec3 {
        centroid(&self.vertices)
    }
}

impl Structure for CellMesh {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn type_name(&self) -> &'static str {
        "CellMesh"
    }

    fn bounding_box(&self) -> Option<(Vec3, Vec3)> {
        Some(bounds(&self.vertices))
    }

    fn anchor(&self) -> Option<Vec3> {
        Some(self.centroid())
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

/// The outline of one cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CellWireframe {
    name: String,
    vertices: [Vertex; CELL_CORNERS],
    edges: Vec<[u32; 2]>,
    material: LineMaterial,
    enabled: bool,
}

impl CellWireframe {
    /// Creates an outline from the cell's corners and the edges to draw.
    pub fn new(
        name: impl Into<String>,
        corners: &[Vec3; CELL_CORNERS],
        edges: Vec<[u32; 2]>,
        material: LineMaterial,
    ) -> Self {
        Self {
            name: name.into(),
            vertices: to_vertices(corners),
            edges,
            material,
            enabled: true,
        }
    }

    /// Returns the vertices.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Returns the edges as index pairs.
    pub fn edges(&self) -> &[[u32; 2]] {
        &self.edges
    }

    /// Returns the edges as position pairs.
    pub fn segments(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        let positions = positions(&self.vertices);
        self.edges
            .iter()
            .map(move |&[a, b]| (positions[a as usize], positions[b as usize]))
    }

    /// Returns the index buffer as bytes.
    pub fn index_bytes(&self) -> &[u8] {
        buffer::index_bytes(&self.edges)
    }

    /// Returns the material.
    pub fn material(&self) -> &LineMaterial {
        &self.material
    }
}

impl Structure for CellWireframe {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn type_name(&self) -> &'static str {
        "CellWireframe"
    }

    fn bounding_box(&self) -> Option<(Vec3, Vec3)> {
        Some(bounds(&self.vertices))
    }

    fn anchor(&self) -> Option<Vec3> {
        Some(centroid(&self.vertices))
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn box_corners(size: Vec3) -> [Vec3; CELL_CORNERS] {
        [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(size.x, 0.0, 0.0),
            Vec3::new(size.x, size.y, 0.0),
            Vec3::new(0.0, size.y, 0.0),
            Vec3::new(0.0, size.y, size.z),
            Vec3::new(0.0, 0.0, size.z),
            Vec3::new(size.x, 0.0, size.z),
            Vec3::new(size.x, size.y, size.z),
        ]
    }

    #[test]
    fn test_mesh_buffers() {
        let corners = box_corners(Vec3::new(2.0, 1.0, 3.0));
        let mesh = CellMesh::new("cell_0", &corners, 1.5, SolidMaterial::flat(Vec3::Y));

        assert_eq!(mesh.vertex_buffer().len(), 24);
        assert_eq!(&mesh.vertex_buffer()[18..21], &[2.0, 0.0, 3.0]);
        assert_eq!(mesh.num_triangles(), 12);
        assert_eq!(mesh.vertex_bytes().len(), 96);
        assert_eq!(mesh.index_bytes().len(), 144);
        assert_eq!(mesh.color(), Vec3::Y);
        assert_eq!(mesh.property_value(), 1.5);
    }

    #[test]
    fn test_mesh_structure() {
        let corners = box_corners(Vec3::new(2.0, 1.0, 3.0));
        let mut mesh = CellMesh::new("cell_0", &corners, 0.0, SolidMaterial::flat(Vec3::ONE));

        assert_eq!(mesh.type_name(), "CellMesh");
        assert_eq!(
            mesh.bounding_box(),
            Some((Vec3::ZERO, Vec3::new(2.0, 1.0, 3.0)))
        );
        assert!((mesh.anchor().unwrap() - Vec3::new(1.0, 0.5, 1.5)).length() < 1e-6);

        mesh.set_enabled(false);
        assert!(!mesh.is_enabled());
    }

    #[test]
    fn test_wireframe_segments() {
        let corners = box_corners(Vec3::ONE);
        let wire = CellWireframe::new(
            "cell_0_wireframe",
            &corners,
            vec![[0, 1], [1, 6]],
            LineMaterial::default(),
        );

        let segments: Vec<_> = wire.segments().collect();
        assert_eq!(segments[0], (Vec3::ZERO, Vec3::X));
        assert_eq!(segments[1], (Vec3::X, Vec3::new(1.0, 0.0, 1.0)));
        assert_eq!(wire.index_bytes().len(), 16);
        assert_eq!(wire.type_name(), "CellWireframe");
    }
}
