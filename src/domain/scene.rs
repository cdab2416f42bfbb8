//! Ordered collection of scene objects.
//!
//! Insertion order is update order. Objects updated earlier in a tick have already moved when
//! later objects sense them.

use std::fmt;

use super::{HasPosition, Rgb, SceneObject};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ObjectId(u64);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

struct Entry {
    id: ObjectId,
    object: Box<dyn SceneObject>,
}

#[derive(Default)]
pub struct Scene {
    background: Rgb,
    entries: Vec<Entry>,
    next_id: u64,
}

impl Scene {
    pub fn new(background: Rgb) -> Self {
        Self {
            background,
            entries: vec![],
            next_id: 0,
        }
    }

    pub fn background(&self) -> Rgb {
        self.background
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn add(&mut self, object: impl SceneObject + 'static) -> ObjectId {
        self.add_boxed(Box::new(object))
    }

    pub fn add_boxed(&mut self, object: Box<dyn SceneObject>) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { id, object });
        id
    }

    /// Removes the object and hands it back. Unknown ids are ignored.
    pub fn remove(&mut self, id: ObjectId) -> Option<Box<dyn SceneObject>> {
        let idx = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(idx).object)
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    pub fn enumerate(&self) -> impl Iterator<Item = (ObjectId, &dyn SceneObject)> + '_ {
        self.view().objects()
    }

    pub fn view(&self) -> SceneView<'_> {
        SceneView {
            before: &[],
            after: &self.entries,
        }
    }

    pub fn update(&mut self) {
        for idx in 0..self.entries.len() {
            let (before, rest) = self.entries.split_at_mut(idx);
            if let Some((current, after)) = rest.split_first_mut() {
                let view = SceneView { before, after };
                current.object.update(&view);
            }
        }
    }
}

/// Read-only window onto a scene, given to objects while they update.
///
/// During [`Scene::update`] the object being updated is not part of its own view. Everything
/// it finds here is a sibling, so sensing never needs to skip the caller. Outside an update the
/// view lists every object, including ones that are about to update.
#[derive(Clone, Copy)]
pub struct SceneView<'a> {
    before: &'a [Entry],
    after: &'a [Entry],
}

impl<'a> SceneView<'a> {
    pub fn objects(&self) -> impl Iterator<Item = (ObjectId, &'a dyn SceneObject)> + 'a {
        self.before
            .iter()
            .chain(self.after.iter())
            .map(|e| (e.id, e.object.as_ref()))
    }

    pub fn positioned(&self) -> impl Iterator<Item = (ObjectId, &'a dyn HasPosition)> + 'a {
        self.objects()
            .filter_map(|(id, object)| object.as_positioned().map(|p| (id, p)))
    }
}
