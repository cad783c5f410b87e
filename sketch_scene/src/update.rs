// Copyright 2026 the Sketch Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use crate::element::{Element, ElementId};

/// A partial set of field changes for one element.
///
/// `None` leaves a field untouched. Text fields only apply to text elements.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ElementPatch {
    /// New left edge.
    pub x: Option<f32>,
    /// New top edge.
    pub y: Option<f32>,
    /// New width.
    pub width: Option<f32>,
    /// New height.
    pub height: Option<f32>,
    /// New laid out text.
    pub text: Option<String>,
    /// New baseline offset.
    pub baseline: Option<f32>,
    /// New bound label of a container.
    pub bound_text_element_id: Option<ElementId>,
    /// New container of a label.
    pub text_container_id: Option<ElementId>,
}

impl ElementPatch {
    /// Whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Whether the patch touches fields that only exist on text elements.
    pub fn has_text_fields(&self) -> bool {
        self.text.is_some() || self.baseline.is_some() || self.text_container_id.is_some()
    }

    /// Writes the patch into `element`.
    ///
    /// Returns `false` if the patch carries text fields but the element is not
    /// text. Geometry is still applied in that case.
    pub fn apply_to(&self, element: &mut Element) -> bool {
        if let Some(x) = self.x {
            element.x = x;
        }
        if let Some(y) = self.y {
            element.y = y;
        }
        if let Some(width) = self.width {
            element.width = width;
        }
        if let Some(height) = self.height {
            element.height = height;
        }
        if let Some(id) = &self.bound_text_element_id {
            element.bound_text_element_id = Some(id.clone());
        }
        if !self.has_text_fields() {
            return true;
        }
        let Some(props) = element.as_text_mut() else {
            return false;
        };
        if let Some(text) = &self.text {
            props.text.clone_from(text);
        }
        if let Some(baseline) = self.baseline {
            props.baseline = baseline;
        }
        if let Some(id) = &self.text_container_id {
            props.text_container_id = Some(id.clone());
        }
        true
    }
}

/// A coherent change to one element, applied atomically by an [`ElementStore`].
///
/// [`ElementStore`]: crate::ElementStore
#[derive(Clone, Debug, PartialEq)]
pub struct ElementUpdate {
    /// The element to change.
    pub id: ElementId,
    /// The changes.
    pub patch: ElementPatch,
}

impl ElementUpdate {
    /// Creates an update for `id`.
    pub fn new(id: ElementId, patch: ElementPatch) -> Self {
        Self { id, patch }
    }
}
