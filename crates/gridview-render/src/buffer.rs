//! Vertex and index layouts ready for upload to a GPU buffer.

/// A vertex position.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

/// Size in bytes of one [`Vertex`].
pub const VERTEX_STRIDE: usize = std::mem::size_of::<Vertex>();

/// Reinterprets a vertex slice as raw bytes.
pub fn vertex_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Reinterprets index triples or pairs as raw bytes.
pub fn index_bytes<T: bytemuck::Pod>(indices: &[T]) -> &[u8] {
    bytemuck::cast_slice(indices)
}

/// Flattens vertices into consecutive `x, y, z` scalars.
pub fn flatten(vertices: &[Vertex]) -> &[f32] {
    bytemuck::cast_slice(vertices)
}
