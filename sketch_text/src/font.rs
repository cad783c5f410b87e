// Copyright 2026 the Sketch Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use std::sync::Arc;

use sketch_scene::TextProps;

/// Canonical font key in CSS shorthand form, e.g. `"20px Virgil"`.
///
/// Two specs are the same font exactly when their strings are equal; this is
/// the key of every width cache. Layout code treats it as opaque and only
/// [`MetricsProvider`](crate::MetricsProvider)s look inside with
/// [`FontSpec::parse`].
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontSpec(Arc<str>);

impl FontSpec {
    /// Builds the canonical key for `size` pixels of `family`.
    pub fn new(size: f32, family: &str) -> Self {
        Self(format!("{size}px {family}").into())
    }

    /// Builds the key of a text element's font.
    pub fn from_text(props: &TextProps) -> Self {
        Self::new(props.font_size, &props.font_family)
    }

    /// Wraps an already canonical key without checking it.
    pub fn from_raw(key: impl Into<Arc<str>>) -> Self {
        Self(key.into())
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the key is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Splits the key into a pixel size and a family list.
    ///
    /// Leading shorthand keywords such as `bold` are skipped. Returns `None` if no
    /// `<number>px` size or no family follows.
    pub fn parse(&self) -> Option<ParsedFont<'_>> {
        let mut rest = self.0.trim_start();
        let size = loop {
            let end = rest.find(char::is_whitespace)?;
            let (token, tail) = rest.split_at(end);
            rest = tail.trim_start();
            if let Some(size) = token.strip_suffix("px").and_then(|n| n.parse::<f32>().ok()) {
                break size;
            }
        };
        let families: Vec<&str> = rest
            .split(',')
            .map(|family| family.trim().trim_matches(|c: char| c == '"' || c == '\''))
            .filter(|family| !family.is_empty())
            .collect();
        if !size.is_finite() || size < 0.0 || families.is_empty() {
            return None;
        }
        Some(ParsedFont { size, families })
    }
}

impl fmt::Debug for FontSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FontSpec({:?})", &*self.0)
    }
}

impl fmt::Display for FontSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FontSpec {
    fn from(value: &str) -> Self {
        Self::from_raw(value)
    }
}

/// The pieces of a [`FontSpec`].
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedFont<'a> {
    /// Font size in pixels.
    pub size: f32,
    /// Families in preference order, unquoted.
    pub families: Vec<&'a str>,
}
