use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use log::trace;

use crate::error::{Error, Result};
use crate::{Tag, Value};

/// An NBT compound: an ordered collection of named tags.
///
/// Children keep the order they were added in, and that order is the order
/// they are encoded in. Names are not required to be unique; lookups by name
/// return the first child with that name.
///
/// Lookups by name fill a small name to position index so that repeated
/// lookups on a large compound do not rescan it. The index is only a cache:
/// every hit is checked against the live child before it is trusted, and any
/// mutable access to the children clears it.
pub struct Compound {
    tags: Vec<Tag>,
    index: Mutex<HashMap<String, usize>>,
}

impl Compound {
    pub fn new() -> Self {
        Self::with_tags(Vec::new())
    }

    pub fn with_tags(tags: Vec<Tag>) -> Self {
        Self {
            tags,
            index: Mutex::new(HashMap::new()),
        }
    }

    /// Append a child, builder style.
    ///
    /// ```
    /// # use nbtcodec::Compound;
    /// let c = Compound::new().insert("a", 1_i8).insert("b", "text");
    /// assert_eq!(c.len(), 2);
    /// ```
    pub fn insert(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push(Tag::new(name, value));
        self
    }

    pub fn push(&mut self, tag: Tag) {
        self.tags.push(tag);
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Get the first child with the given name.
    pub fn get(&self, name: &str) -> Result<&Tag> {
        self.position(name)
            .map(|i| &self.tags[i])
            .ok_or_else(|| Error::missing_key(name))
    }

    /// Mutable access to the first child with the given name.
    pub fn get_mut(&mut self, name: &str) -> Result<&mut Tag> {
        match self.position(name) {
            Some(i) => {
                self.clear_index();
                Ok(&mut self.tags[i])
            }
            None => Err(Error::missing_key(name)),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn get_index(&self, index: usize) -> Result<&Tag> {
        self.tags
            .get(index)
            .ok_or_else(|| Error::index_out_of_range(index, self.tags.len()))
    }

    pub fn get_index_mut(&mut self, index: usize) -> Result<&mut Tag> {
        let len = self.tags.len();
        self.clear_index();
        self.tags
            .get_mut(index)
            .ok_or_else(|| Error::index_out_of_range(index, len))
    }

    /// Remove the first child with the given name.
    pub fn remove(&mut self, name: &str) -> Result<Tag> {
        match self.position(name) {
            Some(i) => Ok(self.remove_at(i)),
            None => Err(Error::missing_key(name)),
        }
    }

    pub fn remove_index(&mut self, index: usize) -> Result<Tag> {
        if index >= self.tags.len() {
            return Err(Error::index_out_of_range(index, self.tags.len()));
        }
        Ok(self.remove_at(index))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.tags.iter()
    }

    /// Number of names currently held in the lookup index.
    pub fn index_len(&self) -> usize {
        self.lock_index().len()
    }

    pub fn into_tags(self) -> Vec<Tag> {
        self.tags
    }

    fn remove_at(&mut self, index: usize) -> Tag {
        self.clear_index();
        self.tags.remove(index)
    }

    /// Position of the first child named `name`. A cached position is only
    /// used if the child there still has that name; otherwise the children are
    /// scanned and the result cached.
    fn position(&self, name: &str) -> Option<usize> {
        let mut index = self.lock_index();

        if let Some(&i) = index.get(name) {
            if self.tags.get(i).map_or(false, |t| t.name == name) {
                return Some(i);
            }
            trace!("stale index entry for {:?}", name);
            index.remove(name);
        }

        let found = self.tags.iter().position(|t| t.name == name)?;
        index.insert(name.to_owned(), found);
        Some(found)
    }

    fn clear_index(&mut self) {
        self.index
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    // The index holds nothing that a panic elsewhere could leave
    // half-written in a harmful way, so a poisoned lock is still usable.
    fn lock_index(&self) -> MutexGuard<'_, HashMap<String, usize>> {
        self.index.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Compound {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Compound {
    fn clone(&self) -> Self {
        Self::with_tags(self.tags.clone())
    }
}

impl PartialEq for Compound {
    fn eq(&self, other: &Self) -> bool {
        self.tags == other.tags
    }
}

impl std::fmt::Debug for Compound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.tags.iter()).finish()
    }
}

impl From<Vec<Tag>> for Compound {
    fn from(tags: Vec<Tag>) -> Self {
        Self::with_tags(tags)
    }
}

impl FromIterator<Tag> for Compound {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        Self::with_tags(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Compound {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}
