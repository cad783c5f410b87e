// Copyright 2026 the Sketch Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use sketch_text::{Error, FontSpec, MetricsProvider, VerticalMetrics};

/// A monospace provider derived from the font size alone.
///
/// Every character advances half the font size. Ascent is 0.8 em, descent and
/// leading are 0.2 em each, so a 20px font has 24px lines with the baseline
/// 18px down. Keys that do not parse measure as zero.
#[derive(Debug, Default)]
pub(crate) struct FixedMetrics {
    /// Number of `text_width` calls so far.
    pub(crate) width_queries: usize,
}

impl FixedMetrics {
    fn size(font: &FontSpec) -> f32 {
        font.parse().map_or(0.0, |parsed| parsed.size)
    }
}

impl MetricsProvider for FixedMetrics {
    fn text_width(&mut self, text: &str, font: &FontSpec) -> Result<f32, Error> {
        self.width_queries += 1;
        Ok(text.chars().count() as f32 * Self::size(font) / 2.0)
    }

    fn vertical_metrics(&mut self, font: &FontSpec) -> Result<VerticalMetrics, Error> {
        let size = Self::size(font);
        Ok(VerticalMetrics {
            ascent: size * 4.0 / 5.0,
            descent: size / 5.0,
            leading: size / 5.0,
        })
    }
}
