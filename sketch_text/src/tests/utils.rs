// Copyright 2026 the Sketch Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hashbrown::HashMap;

use crate::{Error, FontSpec, LayoutOptions, MetricsProvider, TextContext, VerticalMetrics};

/// Vertical metrics giving a 24px line with its baseline 18px down.
pub(crate) const VERTICAL: VerticalMetrics = VerticalMetrics {
    ascent: 16.0,
    descent: 4.0,
    leading: 4.0,
};

/// A provider where every character has a fixed, table driven advance.
///
/// The empty font key measures as zero. Every width query is counted.
#[derive(Debug, Default)]
pub(crate) struct TableMetrics {
    default_width: f32,
    widths: HashMap<char, f32>,
    calls: HashMap<String, usize>,
    invalidated: Vec<FontSpec>,
    pub(crate) unavailable: bool,
}

impl TableMetrics {
    pub(crate) fn new(default_width: f32) -> Self {
        Self {
            default_width,
            ..Default::default()
        }
    }

    pub(crate) fn with(mut self, ch: char, width: f32) -> Self {
        self.widths.insert(ch, width);
        self
    }

    /// How many times exactly `text` was measured.
    pub(crate) fn calls(&self, text: &str) -> usize {
        self.calls.get(text).copied().unwrap_or(0)
    }

    pub(crate) fn invalidated(&self) -> &[FontSpec] {
        &self.invalidated
    }

    fn check(&self, font: &FontSpec) -> Result<(), Error> {
        if self.unavailable {
            return Err(Error::measurement_unavailable(Some(font), "test surface disabled"));
        }
        Ok(())
    }
}

impl MetricsProvider for TableMetrics {
    fn text_width(&mut self, text: &str, font: &FontSpec) -> Result<f32, Error> {
        self.check(font)?;
        *self.calls.entry(text.to_owned()).or_default() += 1;
        if font.is_empty() {
            return Ok(0.0);
        }
        Ok(text
            .chars()
            .map(|ch| self.widths.get(&ch).copied().unwrap_or(self.default_width))
            .sum())
    }

    fn vertical_metrics(&mut self, font: &FontSpec) -> Result<VerticalMetrics, Error> {
        self.check(font)?;
        if font.is_empty() {
            return Ok(VerticalMetrics::default());
        }
        Ok(VERTICAL)
    }

    fn invalidate_font(&mut self, font: &FontSpec) {
        self.invalidated.push(font.clone());
    }
}

pub(crate) fn font() -> FontSpec {
    FontSpec::new(20.0, "Test")
}

/// A context where every character is 10px wide and padding is 5px.
pub(crate) fn context() -> TextContext<TableMetrics> {
    TextContext::new(TableMetrics::new(10.0))
}

/// A context with no padding, so container width equals usable width.
pub(crate) fn unpadded(provider: TableMetrics) -> TextContext<TableMetrics> {
    TextContext::with_options(provider, LayoutOptions { padding: 0.0 })
}
