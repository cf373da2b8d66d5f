//! Clip plane for cutting through a grid.
//!
//! A clip plane hides the cells lying on its negative side, exposing the
//! interior of the model. Only the cell-level decision lives here; drawing
//! the plane or capping the cut is up to the rendering host.

use glam::Vec3;

/// A plane that clips away geometry.
///
/// The plane is defined by a point (origin) and a normal direction.
/// Geometry on the negative side of the plane (opposite to normal) is hidden.
#[derive(Debug, Clone, PartialEq)]
pub struct ClipPlane {
    /// A point on the plane.
    origin: Vec3,
    /// The normal direction of the plane (points toward kept geometry).
    normal: Vec3,
    /// Whether the plane is active.
    enabled: bool,
}

impl ClipPlane {
    /// Creates an enabled clip plane through `origin` facing `normal`.
    pub fn new(origin: Vec3, normal: Vec3) -> Self {
        Self {
            origin,
            normal: normal.normalize_or_zero(),
            enabled: true,
        }
    }

    /// Returns the origin point of the plane.
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Returns the normal direction of the plane.
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Sets both origin and normal at once.
    pub fn set_pose(&mut self, origin: Vec3, normal: Vec3) {
        self.origin = origin;
        self.normal = normal.normalize_or_zero();
    }

    /// Returns whether the plane is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Sets whether the plane is enabled.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Returns the signed distance from a point to the plane.
    ///
    /// Positive values are on the normal side (kept), negative on the opposite (hidden).
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        (point - self.origin).dot(self.normal)
    }

    /// Returns whether a point is on the kept side of the plane.
    pub fn is_kept(&self, point: Vec3) -> bool {
        !self.enabled || self.signed_distance(point) >= 0.0
    }

    /// Projects a point onto the plane.
    pub fn project(&self, point: Vec3) -> Vec3 {
        point - self.signed_distance(point) * self.normal
    }
}

impl Default for ClipPlane {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::Y)
    }
}

/// GPU-compatible clip plane uniforms.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ClipPlaneUniforms {
    /// Origin point of the plane.
    pub origin: [f32; 3],
    /// Whether the plane is enabled (1.0) or disabled (0.0).
    pub enabled: f32,
    /// Normal direction of the plane.
    pub normal: [f32; 3],
    /// Padding for alignment.
    pub _padding: f32,
}

impl From<&ClipPlane> for ClipPlaneUniforms {
    fn from(plane: &ClipPlane) -> Self {
        Self {
            origin: plane.origin.to_array(),
            enabled: if plane.enabled { 1.0 } else { 0.0 },
            normal: plane.normal.to_array(),
            _padding: 0.0,
        }
    }
}
