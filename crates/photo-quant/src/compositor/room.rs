//! A room: one quantized photo plus the objects drawn over it.

use super::sprite::PlacedObject;
use crate::output::IndexedPhoto;

/// The photo and ordered object list the compositor samples.
///
/// Object order is paint order: later objects are drawn over earlier ones.
#[derive(Debug, Clone)]
pub struct Room {
    photo: IndexedPhoto,
    objects: Vec<PlacedObject>,
}

impl Room {
    /// A room with no objects.
    pub fn new(photo: IndexedPhoto) -> Self {
        Self {
            photo,
            objects: Vec::new(),
        }
    }

    /// A room with an initial object list.
    pub fn with_objects(photo: IndexedPhoto, objects: Vec<PlacedObject>) -> Self {
        Self { photo, objects }
    }

    #[inline]
    pub fn photo(&self) -> &IndexedPhoto {
        &self.photo
    }

    #[inline]
    pub fn objects(&self) -> &[PlacedObject] {
        &self.objects
    }

    /// Mutable object list, for the scene layer to move, add or remove
    /// objects between frames.
    #[inline]
    pub fn objects_mut(&mut self) -> &mut Vec<PlacedObject> {
        &mut self.objects
    }

    /// Append an object on top of all existing ones.
    pub fn push_object(&mut self, object: PlacedObject) {
        self.objects.push(object);
    }
}
