//! Scene holding the structures handed over by the mesh builder.
//!
//! Structures are kept in insertion order so that the host draws cells in
//! the order they appeared in the dataset.

use std::collections::HashMap;

use glam::Vec3;

use crate::clip_plane::ClipPlane;
use crate::error::{GridError, Result};
use crate::structure::Structure;

/// Ordered collection of structures with scene extents.
#[derive(Default)]
pub struct Scene {
    structures: Vec<Box<dyn Structure>>,

    /// Map from structure name -> position in `structures`
    index: HashMap<String, usize>,

    /// Union of all structure bounding boxes, if any structure has one.
    extents: Option<(Vec3, Vec3)>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a structure to the scene.
    ///
    /// Returns an error if a structure with the same name already exists.
    pub fn add(&mut self, structure: Box<dyn Structure>) -> Result<()> {
        if self.contains(structure.name()) {
            return Err(GridError::StructureExists(structure.name().to_string()));
        }
        if let Some(bounds) = structure.bounding_box() {
            self.extents = Some(match self.extents {
                Some((min, max)) => (min.min(bounds.0), max.max(bounds.1)),
                None => bounds,
            });
        }
        self.index
            .insert(structure.name().to_string(), self.structures.len());
        self.structures.push(structure);
        Ok(())
    }

    /// Gets a structure by name.
    pub fn get(&self, name: &str) -> Option<&dyn Structure> {
        self.index
            .get(name)
            .and_then(|&i| self.structures.get(i))
            .map(|s| s.as_ref())
    }

    /// Gets a structure by name and downcasts it to a concrete type.
    pub fn get_as<T: Structure>(&self, name: &str) -> Option<&T> {
        self.get(name).and_then(|s| s.as_any().downcast_ref::<T>())
    }

    /// Checks if a structure with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Removes a structure by name.
    pub fn remove(&mut self, name: &str) -> Option<Box<dyn Structure>> {
        let idx = self.index.remove(name)?;
        let removed = self.structures.remove(idx);
        for (i, structure) in self.structures.iter().enumerate().skip(idx) {
            self.index.insert(structure.name().to_string(), i);
        }
        self.update_extents();
        Some(removed)
    }

    /// Removes all structures.
    pub fn clear(&mut self) {
        self.structures.clear();
        self.index.clear();
        self.extents = None;
    }

    /// Returns an iterator over all structures in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Structure> {
        self.structures.iter().map(|s| s.as_ref())
    }

    /// Returns all structures of a given type, in insertion order.
    pub fn iter_of_type<'a>(
        &'a self,
        type_name: &'a str,
    ) -> impl Iterator<Item = &'a dyn Structure> + 'a {
        self.iter().filter(move |s| s.type_name() == type_name)
    }

    /// Returns the number of structures.
    pub fn len(&self) -> usize {
        self.structures.len()
    }

    /// Returns true if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.structures.is_empty()
    }

    /// Returns the scene bounding box.
    ///
    /// An empty scene reports the unit box.
    pub fn bounding_box(&self) -> (Vec3, Vec3) {
        self.extents.unwrap_or((Vec3::ZERO, Vec3::ONE))
    }

    /// Returns the length of the bounding box diagonal, or 1.0 for an empty scene.
    pub fn length_scale(&self) -> f32 {
        self.extents.map_or(1.0, |(min, max)| (max - min).length())
    }

    /// Computes the center of the bounding box.
    pub fn center(&self) -> Vec3 {
        let (min, max) = self.bounding_box();
        (min + max) * 0.5
    }

    /// Shows structures on the kept side of `plane` and hides the rest.
    ///
    /// Returns the number of structures left visible.
    pub fn apply_clip(&mut self, plane: &ClipPlane) -> usize {
        let mut visible = 0;
        for structure in &mut self.structures {
            let kept = structure.anchor().map_or(true, |p| plane.is_kept(p));
            structure.set_enabled(kept);
            if kept {
                visible += 1;
            }
        }
        log::debug!(
            "clip plane applied: {visible} of {} structures visible",
            self.structures.len()
        );
        visible
    }

    /// Recomputes the extents from all structures.
    fn update_extents(&mut self) {
        self.extents = self
            .structures
            .iter()
            .filter_map(|s| s.bounding_box())
            .reduce(|(min_a, max_a), (min_b, max_b)| (min_a.min(min_b), max_a.max(max_b)));
    }
}

#[cfg(test)]
mod tests {
    use std::any::Any;

    use super::*;

    struct Marker {
        name: String,
        at: Vec3,
        enabled: bool,
    }

    impl Marker {
        fn boxed(name: &str, at: Vec3) -> Box<dyn Structure> {
            Box::new(Self {
                name: name.to_string(),
                at,
                enabled: true,
            })
        }
    }

    impl Structure for Marker {
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
            "Marker"
        }
        fn bounding_box(&self) -> Option<(Vec3, Vec3)> {
            Some((self.at, self.at))
        }
        fn is_enabled(&self) -> bool {
            self.enabled
        }
        fn set_enabled(&mut self, enabled: bool) {
            self.enabled = enabled;
        }
    }

    #[test]
    fn test_insertion_order_and_duplicates() {
        let mut scene = Scene::new();
        scene.add(Marker::boxed("b", Vec3::ZERO)).unwrap();
        scene.add(Marker::boxed("a", Vec3::ONE)).unwrap();

        let names: Vec<_> = scene.iter().map(Structure::name).collect();
        assert_eq!(names, ["b", "a"]);

        let err = scene.add(Marker::boxed("a", Vec3::ZERO)).unwrap_err();
        assert!(matches!(err, GridError::StructureExists(name) if name == "a"));
        assert_eq!(scene.len(), 2);
        assert!(scene.get_as::<Marker>("b").is_some());
    }

    #[test]
    fn test_extents() {
        let mut scene = Scene::new();
        assert_eq!(scene.length_scale(), 1.0);

        scene.add(Marker::boxed("lo", Vec3::new(-1.0, 0.0, 0.0))).unwrap();
        scene.add(Marker::boxed("hi", Vec3::new(1.0, 2.0, 2.0))).unwrap();
        assert_eq!(
            scene.bounding_box(),
            (Vec3::new(-1.0, 0.0, 0.0), Vec3::new(1.0, 2.0, 2.0))
        );
        assert!((scene.length_scale() - 3.0).abs() < 1e-6);
        assert_eq!(scene.center(), Vec3::new(0.0, 1.0, 1.0));

        scene.remove("hi");
        assert_eq!(scene.bounding_box().1, Vec3::new(-1.0, 0.0, 0.0));

        scene.clear();
        assert!(scene.is_empty());
        assert_eq!(scene.bounding_box(), (Vec3::ZERO, Vec3::ONE));
    }

    #[test]
    fn test_remove_keeps_lookup_in_order() {
        let mut scene = Scene::new();
        for name in ["a", "b", "c", "d"] {
            scene.add(Marker::boxed(name, Vec3::ZERO)).unwrap();
        }

        assert!(scene.remove("b").is_some());
        assert!(scene.remove("b").is_none());
        assert!(!scene.contains("b"));
        assert_eq!(scene.get("c").unwrap().name(), "c");
        assert_eq!(scene.get("d").unwrap().name(), "d");

        scene.add(Marker::boxed("b", Vec3::ONE)).unwrap();
        let names: Vec<_> = scene.iter().map(Structure::name).collect();
        assert_eq!(names, ["a", "c", "d", "b"]);
        assert_eq!(scene.get("b").unwrap().bounding_box(), Some((Vec3::ONE, Vec3::ONE)));
    }

    #[test]
    fn test_many_structures() {
        const COUNT: usize = 100_000;
        let mut scene = Scene::new();
        for i in 0..COUNT {
            let at = Vec3::new(i as f32, 0.0, -(i as f32));
            scene.add(Marker::boxed(&format!("cell_{i}"), at)).unwrap();
        }

        assert_eq!(scene.len(), COUNT);
        let last = (COUNT - 1) as f32;
        assert_eq!(
            scene.bounding_box(),
            (Vec3::new(0.0, 0.0, -last), Vec3::new(last, 0.0, 0.0))
        );
        assert!(scene.contains("cell_0"));
        assert_eq!(scene.get("cell_99999").unwrap().name(), "cell_99999");
        assert!(matches!(
            scene.add(Marker::boxed("cell_500", Vec3::ZERO)),
            Err(GridError::StructureExists(_))
        ));
    }

    #[test]
    fn test_apply_clip() {
        let mut scene = Scene::new();
        scene.add(Marker::boxed("below", Vec3::new(0.0, -1.0, 0.0))).unwrap();
        scene.add(Marker::boxed("above", Vec3::new(0.0, 1.0, 0.0))).unwrap();

        let mut plane = ClipPlane::new(Vec3::ZERO, Vec3::Y);
        assert_eq!(scene.apply_clip(&plane), 1);
        assert!(!scene.get("below").unwrap().is_enabled());
        assert!(scene.get("above").unwrap().is_enabled());

        plane.set_enabled(false);
        assert_eq!(scene.apply_clip(&plane), 2);
        assert!(scene.get("below").unwrap().is_enabled());
    }
}
