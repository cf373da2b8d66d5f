//! Structure trait.
//!
//! A [`Structure`] is a piece of render-ready geometry owned by a [`crate::Scene`],
//! such as a cell's solid mesh or its wireframe outline.

use std::any::Any;

use glam::Vec3;

/// A geometric object that can be handed to a scene.
pub trait Structure: Any + Send + Sync {
    /// Returns a reference to self as `Any` for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Returns a mutable reference to self as `Any` for downcasting.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Returns the unique name of this structure.
    fn name(&self) -> &str;

    /// Returns the type name of this structure (e.g., "`CellMesh`").
    fn type_name(&self) -> &'static str;

    /// Returns the axis-aligned bounding box.
    ///
    /// Returns `None` if the structure has no spatial extent.
    fn bounding_box(&self) -> Option<(Vec3, Vec3)>;

    /// Returns the point used to decide which side of a clip plane the structure is on.
    fn anchor(&self) -> Option<Vec3> {
        self.bounding_box().map(|(min, max)| (min + max) * 0.5)
    }

    /// Returns whether this structure is currently visible.
    fn is_enabled(&self) -> bool;

    /// Sets the visibility of this structure.
    fn set_enabled(&mut self, enabled: bool);
}
