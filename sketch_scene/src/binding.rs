// Copyright 2026 the Sketch Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keeping both sides of a container/label binding in step.
//!
//! A container points at its label through `bound_text_element_id` and the label
//! points back through `text_container_id`. Every function here emits the two
//! updates together so a store never sees half a binding.

use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::element::{Element, ElementId};
use crate::scene::ElementStore;
use crate::update::{ElementPatch, ElementUpdate};

/// Returns the paired updates that bind `label` to `container`.
pub fn bind_text(container: &ElementId, label: &ElementId) -> [ElementUpdate; 2] {
    [
        ElementUpdate::new(
            container.clone(),
            ElementPatch {
                bound_text_element_id: Some(label.clone()),
                ..ElementPatch::default()
            },
        ),
        ElementUpdate::new(
            label.clone(),
            ElementPatch {
                text_container_id: Some(container.clone()),
                ..ElementPatch::default()
            },
        ),
    ]
}

/// Re-points bindings after a container and its label were duplicated together.
///
/// `old_elements` are the originals and `old_to_new` maps each original id to
/// the id of its copy. For every original container with a label, the copied
/// container is bound to the copied label. Pairs whose copy is missing from the
/// map or from `store` are skipped.
pub fn bind_text_after_duplication<S: ElementStore + ?Sized>(
    store: &S,
    old_elements: &[Element],
    old_to_new: &HashMap<ElementId, ElementId>,
) -> Vec<ElementUpdate> {
    let mut updates = Vec::new();
    for element in old_elements {
        let Some(old_label) = element.bound_text() else {
            continue;
        };
        let (Some(new_container), Some(new_label)) =
            (old_to_new.get(&element.id), old_to_new.get(old_label))
        else {
            continue;
        };
        if store.element(new_container).is_none() || store.element(new_label).is_none() {
            log::warn!(
                "duplicate of {} or its label {} is not in the scene",
                element.id,
                old_label
            );
            continue;
        }
        updates.extend(bind_text(new_container, new_label));
    }
    updates
}
