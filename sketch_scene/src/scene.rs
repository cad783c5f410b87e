// Copyright 2026 the Sketch Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::element::{Element, ElementId};
use crate::update::ElementUpdate;

/// Read access to elements plus the single write path used by layout code.
pub trait ElementStore {
    /// Returns the element with the given id.
    fn element(&self, id: &ElementId) -> Option<&Element>;

    /// Applies one update atomically and notifies observers.
    ///
    /// Returns `false` if the target element does not exist.
    fn apply(&mut self, update: &ElementUpdate) -> bool;

    /// Applies updates in order. Returns how many found their target.
    fn apply_all<'a, I>(&mut self, updates: I) -> usize
    where
        I: IntoIterator<Item = &'a ElementUpdate>,
    {
        updates
            .into_iter()
            .filter(|update| self.apply(update))
            .count()
    }
}

/// An in-memory, insertion ordered element store.
///
/// Every applied update bumps [`Scene::version`] and records the element id so
/// renderers can pick up what changed with [`Scene::take_changes`].
#[derive(Clone, Debug, Default)]
pub struct Scene {
    elements: Vec<Element>,
    index: HashMap<ElementId, usize>,
    changes: Vec<ElementId>,
    version: u64,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an element, replacing any element with the same id.
    pub fn insert(&mut self, element: Element) {
        if let Some(&slot) = self.index.get(&element.id) {
            self.elements[slot] = element;
        } else {
            self.index.insert(element.id.clone(), self.elements.len());
            self.elements.push(element);
        }
        self.version += 1;
    }

    /// Iterates over all elements in insertion order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> + '_ {
        self.elements.iter()
    }

    /// Iterates over elements that are not deleted.
    pub fn non_deleted_elements(&self) -> impl Iterator<Item = &Element> + '_ {
        self.elements.iter().filter(|element| !element.is_deleted)
    }

    /// Number of elements, including deleted ones.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the scene holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Monotonic counter bumped on every change.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Drains the ids changed since the last call, in the order they changed.
    pub fn take_changes(&mut self) -> Vec<ElementId> {
        core::mem::take(&mut self.changes)
    }

    fn get_mut(&mut self, id: &ElementId) -> Option<&mut Element> {
        let slot = *self.index.get(id)?;
        self.elements.get_mut(slot)
    }
}

impl ElementStore for Scene {
    fn element(&self, id: &ElementId) -> Option<&Element> {
        let slot = *self.index.get(id)?;
        self.elements.get(slot)
    }

    fn apply(&mut self, update: &ElementUpdate) -> bool {
        if update.patch.is_empty() {
            return self.index.contains_key(&update.id);
        }
        let Some(element) = self.get_mut(&update.id) else {
            log::warn!("update for missing element {}", update.id);
            return false;
        };
        if !update.patch.apply_to(element) {
            log::warn!("text fields ignored on non-text element {}", update.id);
        }
        self.version += 1;
        self.changes.push(update.id.clone());
        true
    }
}
