//! Owning scene container: object records, transforms, and selection.
//!
//! Objects are plain value records owned by the [`Scene`]; the selected
//! object is tracked as an index into that storage and revalidated on
//! removal, never as a back-reference, so a stale selection cannot
//! dangle.

use crate::math::{Aabb, Mat4, Vec3};

/// Position, Euler rotation (degrees), and non-uniform scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// World-space position.
    pub position: Vec3,
    /// Euler angles in degrees (`x` = pitch, `y` = yaw, `z` = roll).
    pub rotation: Vec3,
    /// Per-axis scale; also the full extents of the picking box.
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    /// Model matrix for the external renderer: translation, then Euler
    /// rotation, then scale (scale applied to vertices first).
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        Mat4::translate(self.position)
            * Mat4::from_euler_degrees(self.rotation)
            * Mat4::scale(self.scale)
    }
}

/// A single object in the scene.
#[derive(Debug, Clone)]
pub struct SceneObject {
    id: u32,
    /// Human-readable name shown by inspector UIs.
    pub name: String,
    /// The object's world transform.
    pub transform: Transform,
}

impl SceneObject {
    /// Create an object with the given id and name and a default
    /// transform.
    #[must_use]
    pub fn new(id: u32, name: &str) -> Self {
        Self {
            id,
            name: name.to_owned(),
            transform: Transform::default(),
        }
    }

    /// Stable object identifier assigned by the scene.
    #[must_use]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// World-space axis-aligned bounding box used for picking.
    ///
    /// Centered on the object's position with half-extents of half the
    /// scale. Rotation is deliberately ignored: picking volumes stay axis
    /// aligned.
    #[must_use]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_half_extents(self.transform.position, self.transform.scale * 0.5)
    }
}

/// Owning collection of scene objects plus the current selection.
#[derive(Debug, Default)]
pub struct Scene {
    objects: Vec<SceneObject>,
    selected: Option<usize>,
    next_id: u32,
}

impl Scene {
    /// Empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object with a freshly assigned id; returns its index.
    pub fn add(&mut self, name: &str, transform: Transform) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        let mut object = SceneObject::new(id, name);
        object.transform = transform;
        self.objects.push(object);
        self.objects.len() - 1
    }

    /// All objects, in insertion order. This is the proxy sequence handed
    /// to [`crate::picking::pick`].
    #[must_use]
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Mutable access to an object by index.
    pub fn object_mut(&mut self, index: usize) -> Option<&mut SceneObject> {
        self.objects.get_mut(index)
    }

    /// Number of objects in the scene.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the scene holds no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Mark the object at `index` as selected. Out-of-range indices clear
    /// the selection instead.
    pub fn select(&mut self, index: usize) {
        self.selected = if index < self.objects.len() {
            Some(index)
        } else {
            None
        };
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Index of the selected object, if any.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The selected object record, if any.
    #[must_use]
    pub fn selected_object(&self) -> Option<&SceneObject> {
        self.selected.and_then(|index| self.objects.get(index))
    }

    /// Remove and return the object at `index`.
    ///
    /// The selection is kept pointing at the same object: it shifts down
    /// when a preceding object is removed and clears when the selected
    /// object itself is removed.
    pub fn remove(&mut self, index: usize) -> Option<SceneObject> {
        if index >= self.objects.len() {
            return None;
        }
        let removed = self.objects.remove(index);
        self.selected = match self.selected {
            Some(s) if s == index => None,
            Some(s) if s > index => Some(s - 1),
            other => other,
        };
        Some(removed)
    }
}
