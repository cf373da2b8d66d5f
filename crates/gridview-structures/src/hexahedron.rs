//! Hexahedron triangulation and feature-edge extraction.

use std::collections::HashMap;

use glam::Vec3;

/// Fixed triangulation of a hexahedral cell into 12 triangles.
///
/// Corner convention: corners 0-1-2-3 form the front quad in order around
/// the face. The back quad is 4-5-6-7, where 5 lies behind 0, 6 behind 1,
/// 7 behind 2 and 4 behind 3. For the unit cube that is
///
/// ```text
/// 0 (0,0,0)  1 (1,0,0)  2 (1,1,0)  3 (0,1,0)
/// 4 (0,1,1)  5 (0,0,1)  6 (1,0,1)  7 (1,1,1)
/// ```
///
/// Each consecutive pair of triangles covers one quad face. Nothing checks
/// that the input follows this order; a cell authored in another convention
/// produces a self-intersecting surface. Windings are not consistent across
/// the table, so the solid must be drawn double sided.
pub const HEX_TRIANGLES: [[u32; 3]; 12] = [
    [0, 1, 3],
    [2, 1, 3], // Front (0,1,2,3)
    [1, 0, 6],
    [5, 6, 0], // Bottom (0,1,6,5)
    [0, 3, 5],
    [4, 5, 3], // Left (0,3,4,5)
    [7, 4, 6],
    [5, 4, 6], // Back (4,5,6,7)
    [1, 2, 6],
    [7, 6, 2], // Right (1,2,7,6)
    [2, 3, 7],
    [4, 3, 7], // Top (2,3,4,7)
];

/// Default angle (degrees) below which a shared edge is treated as interior.
pub const DEFAULT_THRESHOLD_ANGLE_DEG: f32 = 10.0;

/// Returns the unit normal of a triangle, or `None` if it has no area.
fn triangle_normal(positions: &[Vec3], [a, b, c]: [u32; 3]) -> Option<Vec3> {
    let p0 = *positions.get(a as usize)?;
    let p1 = *positions.get(b as usize)?;
    let p2 = *positions.get(c as usize)?;
    (p1 - p0).cross(p2 - p0).try_normalize()
}

/// Computes the edges of a triangle mesh worth drawing as an outline.
///
/// An edge is kept when it borders a single triangle, or when two of its
/// triangles meet at more than `threshold_angle_deg`. The angle is taken
/// between the triangles' planes, ignoring winding. Zero-area triangles are
/// skipped. Edges come back as sorted index pairs in ascending order.
pub fn feature_edges(
    positions: &[Vec3],
    triangles: &[[u32; 3]],
    threshold_angle_deg: f32,
) -> Vec<[u32; 2]> {
    let threshold_dot = threshold_angle_deg.to_radians().cos();

    // Edge -> normals of the triangles using it
    let mut adjacency: HashMap<[u32; 2], Vec<Vec3>> = HashMap::new();
    for &tri in triangles {
        let Some(normal) = triangle_normal(positions, tri) else {
            continue;
        };
        for i in 0..3 {
            let (v0, v1) = (tri[i], tri[(i + 1) % 3]);
            let edge = if v0 < v1 { [v0, v1] } else { [v1, v0] };
            adjacency.entry(edge).or_default().push(normal);
        }
    }

    let mut edges: Vec<[u32; 2]> = adjacency
        .into_iter()
        .filter(|(_, normals)| match normals.as_slice() {
            [_] => true,
            [first, rest @ ..] => rest.iter().any(|n| first.dot(*n).abs() <= threshold_dot),
            [] => false,
        })
        .map(|(edge, _)| edge)
        .collect();
    edges.sort_unstable();
    edges
}
