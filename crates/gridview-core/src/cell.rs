//! Grid cell records.
//!
//! A [`GridCell`] is one hexahedral block of the dataset: its eight corner
//! points and the scalar used to color it. Cells are plain values; they are
//! built once per load and consumed by the mesh builder.

use glam::Vec3;

use crate::error::{GridError, Result};

/// Number of corners of a hexahedral cell.
pub const CELL_CORNERS: usize = 8;

/// One hexahedral cell of a grid dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct GridCell {
    /// Corner points in the dataset's corner order.
    pub points: Vec<Vec3>,
    /// Scalar property used for color mapping.
    pub property_value: f32,
}

impl GridCell {
    /// Creates a new cell. The point count is not checked here; see [`GridCell::validate`].
    pub fn new(points: Vec<Vec3>, property_value: f32) -> Self {
        Self {
            points,
            property_value,
        }
    }

    /// Checks that the cell has exactly eight corners.
    ///
    /// `index` is the position of the cell in its batch and is carried in the error.
    pub fn validate(&self, index: usize) -> Result<()> {
        if self.points.len() == CELL_CORNERS {
            Ok(())
        } else {
            Err(GridError::InvalidCell {
                index,
                found: self.points.len(),
            })
        }
    }

    /// Returns the corners as a fixed-size array, or `None` if the cell is malformed.
    pub fn corners(&self) -> Option<[Vec3; CELL_CORNERS]> {
        self.points.as_slice().try_into().ok()
    }

    /// Returns the average of the corner points.
    pub fn centroid(&self) -> Vec3 {
        if self.points.is_empty() {
            return Vec3::ZERO;
        }
        let sum = self.points.iter().fold(Vec3::ZERO, |a, &b| a + b);
        sum / self.points.len() as f32
    }

    /// Returns the axis-aligned bounding box of the corners.
    pub fn bounding_box(&self) -> Option<(Vec3, Vec3)> {
        let first = *self.points.first()?;
        Some(
            self.points
                .iter()
                .fold((first, first), |(min, max), &p| (min.min(p), max.max(p))),
        )
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn unit_cube() -> Vec<Vec3> {
        vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 1.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(1.0, 1.0, 1.0),
        ]
    }

    #[test]
    fn test_validate_point_count() {
        assert!(GridCell::new(unit_cube(), 1.0).validate(0).is_ok());

        let mut short = unit_cube();
        short.pop();
        let err = GridCell::new(short, 1.0).validate(3).unwrap_err();
        assert!(matches!(err, GridError::InvalidCell { index: 3, found: 7 }));

        let mut long = unit_cube();
        long.push(Vec3::ONE);
        let err = GridCell::new(long, 1.0).validate(0).unwrap_err();
        assert!(matches!(err, GridError::InvalidCell { index: 0, found: 9 }));
    }

    #[test]
    fn test_corners() {
        let cell = GridCell::new(unit_cube(), 0.0);
        let corners = cell.corners().unwrap();
        assert_eq!(corners[6], Vec3::new(1.0, 0.0, 1.0));

        let cell = GridCell::new(vec![Vec3::ZERO; 4], 0.0);
        assert!(cell.corners().is_none());
    }

    #[test]
    fn test_centroid_and_bounds() {
        let cell = GridCell::new(unit_cube(), 0.0);
        assert!((cell.centroid() - Vec3::splat(0.5)).length() < 1e-6);
        assert_eq!(cell.bounding_box(), Some((Vec3::ZERO, Vec3::ONE)));

        let empty = GridCell::new(Vec::new(), 0.0);
        assert_eq!(empty.centroid(), Vec3::ZERO);
        assert!(empty.bounding_box().is_none());
    }

    fn point() -> impl Strategy<Value = Vec3> {
        (-1000.0f32..1000.0, -1000.0f32..1000.0, -1000.0f32..1000.0)
            .prop_map(|(x, y, z)| Vec3::new(x, y, z))
    }

    proptest! {
        #[test]
        fn prop_bounds_contain_points_and_centroid(
            points in proptest::collection::vec(point(), CELL_CORNERS),
        ) {
            let cell = GridCell::new(points, 0.0);
            let (min, max) = cell.bounding_box().unwrap();
            for &p in &cell.points {
                prop_assert!(p.cmpge(min).all() && p.cmple(max).all());
            }
            let c = cell.centroid();
            let slack = Vec3::splat(1e-3);
            prop_assert!(c.cmpge(min - slack).all() && c.cmple(max + slack).all());
        }
    }
}
