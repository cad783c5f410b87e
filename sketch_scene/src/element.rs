// Copyright 2026 the Sketch Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::sync::Arc;
use core::fmt;

/// Identifier of an element in a scene.
///
/// Cloning is cheap; the underlying string is shared.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(Arc<str>);

impl ElementId {
    /// Creates an identifier from any string-like value.
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ElementId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ElementId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ElementId({:?})", &*self.0)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Text specific properties of a text element.
#[derive(Clone, Debug, PartialEq)]
pub struct TextProps {
    /// The text as laid out, including any newlines inserted by wrapping.
    pub text: String,
    /// The text as the user typed it. Wrapping always starts from this.
    pub original_text: String,
    /// Font size in pixels.
    pub font_size: f32,
    /// Font family name (or a comma separated family list).
    pub font_family: String,
    /// Offset from the top of the text block to the baseline of its last line.
    pub baseline: f32,
    /// The container this label is bound to, if any.
    pub text_container_id: Option<ElementId>,
}

impl TextProps {
    /// Creates unbound text properties where the laid out and original text agree.
    pub fn new(text: impl Into<String>, font_size: f32, font_family: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            original_text: text.clone(),
            text,
            font_size,
            font_family: font_family.into(),
            baseline: 0.0,
            text_container_id: None,
        }
    }
}

/// The kind of an element along with its kind-specific data.
#[derive(Clone, Debug, PartialEq)]
pub enum ElementKind {
    /// A rectangle. Can hold a bound label.
    Rectangle,
    /// A diamond. Can hold a bound label.
    Diamond,
    /// An ellipse. Can hold a bound label.
    Ellipse,
    /// A straight or poly line. Never holds a label.
    Line,
    /// A text element.
    Text(TextProps),
}

/// A shape in the scene.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    /// Identifier, unique within a scene.
    pub id: ElementId,
    /// Kind and kind-specific data.
    pub kind: ElementKind,
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width of the bounding box.
    pub width: f32,
    /// Height of the bounding box.
    pub height: f32,
    /// Whether the element has been deleted but is kept for history.
    pub is_deleted: bool,
    /// The label bound to this container, if any.
    pub bound_text_element_id: Option<ElementId>,
}

impl Element {
    /// Creates an element of the given kind and geometry.
    pub fn new(
        id: impl Into<ElementId>,
        kind: ElementKind,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            x,
            y,
            width,
            height,
            is_deleted: false,
            bound_text_element_id: None,
        }
    }

    /// Creates a rectangle.
    pub fn rectangle(id: impl Into<ElementId>, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(id, ElementKind::Rectangle, x, y, width, height)
    }

    /// Creates a zero-sized text element at the origin.
    ///
    /// Its size is meant to be filled in by measuring the text.
    pub fn text(id: impl Into<ElementId>, props: TextProps) -> Self {
        Self::new(id, ElementKind::Text(props), 0.0, 0.0, 0.0, 0.0)
    }

    /// Returns the text properties if this is a text element.
    pub fn as_text(&self) -> Option<&TextProps> {
        match &self.kind {
            ElementKind::Text(props) => Some(props),
            _ => None,
        }
    }

    /// Returns mutable text properties if this is a text element.
    pub fn as_text_mut(&mut self) -> Option<&mut TextProps> {
        match &mut self.kind {
            ElementKind::Text(props) => Some(props),
            _ => None,
        }
    }

    /// Whether this kind of element can hold a bound label.
    pub fn is_bindable_container(&self) -> bool {
        matches!(
            self.kind,
            ElementKind::Rectangle | ElementKind::Diamond | ElementKind::Ellipse
        )
    }

    /// Returns the bound label id if this is a container with a label.
    pub fn bound_text(&self) -> Option<&ElementId> {
        if self.is_bindable_container() {
            self.bound_text_element_id.as_ref()
        } else {
            None
        }
    }
}
