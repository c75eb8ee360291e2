//! Map object definitions and the insertion-ordered object collections.

mod line;
mod point;

pub use line::{MapLine, TopographicProfilePoint};
pub use point::MapPoint;

use crate::coords::CanvasPoint;
use peniko::Color;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for map objects.
pub type ObjectId = Uuid;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn red() -> Self {
        Self::new(255, 0, 0, 255)
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Per-object interaction state, read and written by the editor on every
/// pointer move and click.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectState {
    /// Pointer is within the hover radius.
    pub hover: bool,
    /// Object is selected.
    pub active: bool,
    /// Object is excluded from queries and editing.
    pub disabled: bool,
}

/// Common surface of the geometric objects held in an [`ObjectList`].
pub trait MapObject {
    fn id(&self) -> ObjectId;
    fn state(&self) -> &ObjectState;
    fn state_mut(&mut self) -> &mut ObjectState;

    /// Proximity test against a canvas point, radius in canvas units.
    fn is_close_to(&self, p: CanvasPoint, radius: f64) -> bool;
}

/// An insertion-ordered collection of map objects addressed by stable ids.
///
/// Queries are full scans; at the expected scale (tens of objects) this is
/// both fast enough and what keeps result order equal to registration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectList<T> {
    items: Vec<T>,
}

impl<T> Default for ObjectList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: MapObject> ObjectList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an object, returning its id.
    pub fn add(&mut self, object: T) -> ObjectId {
        let id = object.id();
        self.items.push(object);
        id
    }

    /// Remove an object by id.
    pub fn remove(&mut self, id: ObjectId) -> Option<T> {
        let idx = self.items.iter().position(|o| o.id() == id)?;
        Some(self.items.remove(idx))
    }

    pub fn get(&self, id: ObjectId) -> Option<&T> {
        self.items.iter().find(|o| o.id() == id)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut T> {
        self.items.iter_mut().find(|o| o.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.items.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Ids of enabled objects within `radius` of `p`, in registration order.
    pub fn close_to_point(&self, p: CanvasPoint, radius: f64) -> Vec<ObjectId> {
        self.items
            .iter()
            .filter(|o| !o.state().disabled && o.is_close_to(p, radius))
            .map(|o| o.id())
            .collect()
    }

    /// Clear the hover flag on every object.
    pub fn clear_hover(&mut self) {
        for o in &mut self.items {
            o.state_mut().hover = false;
        }
    }

    /// Clear the active flag on every object.
    pub fn clear_active(&mut self) {
        for o in &mut self.items {
            o.state_mut().active = false;
        }
    }

    /// Set the hover flag for the given ids.
    pub fn set_hover(&mut self, ids: &[ObjectId]) {
        for o in &mut self.items {
            if ids.contains(&o.id()) {
                o.state_mut().hover = true;
            }
        }
    }

    /// Flip the active flag of one object.
    pub fn toggle_active(&mut self, id: ObjectId) {
        if let Some(o) = self.get_mut(id) {
            let state = o.state_mut();
            state.active = !state.active;
        }
    }

    /// First hovered object in registration order.
    pub fn first_hovered(&self) -> Option<&T> {
        self.items.iter().find(|o| o.state().hover)
    }

    /// Ids of all active objects, in registration order.
    pub fn active_ids(&self) -> Vec<ObjectId> {
        self.items
            .iter()
            .filter(|o| o.state().active)
            .map(|o| o.id())
            .collect()
    }

    /// Remove every active object, returning how many were deleted.
    pub fn delete_active(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|o| !o.state().active);
        before - self.items.len()
    }
}

impl<T: Serialize> ObjectList<T> {
    /// Serialize the collection to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.items)
    }
}

impl<T: for<'de> Deserialize<'de>> ObjectList<T> {
    /// Deserialize a collection from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self {
            items: serde_json::from_str(json)?,
        })
    }
}
