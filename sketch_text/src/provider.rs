// Copyright 2026 the Sketch Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{Error, FontSpec};

/// Vertical metrics of a font at a given size, in pixels.
#[derive(Copy, Clone, Default, Debug, PartialEq)]
pub struct VerticalMetrics {
    /// Distance from the baseline to the top of the line box, positive up.
    pub ascent: f32,
    /// Distance from the baseline to the bottom of the line box, positive down.
    pub descent: f32,
    /// Extra spacing between lines.
    pub leading: f32,
}

impl VerticalMetrics {
    /// The natural line height: ascent, descent and leading combined.
    pub fn line_height(&self) -> f32 {
        self.ascent + self.descent + self.leading
    }

    /// Offset from the top of a line box of `line_height` to its baseline.
    ///
    /// Extra space in the box is split evenly above and below the glyphs, like
    /// CSS half-leading.
    pub fn baseline_in(&self, line_height: f32) -> f32 {
        let half_leading = (line_height - (self.ascent + self.descent)) * 0.5;
        (half_leading + self.ascent).clamp(0.0, line_height.max(0.0))
    }
}

/// The measurement primitive layout is built on.
///
/// Implementations report pixel widths of single-line strings and the vertical
/// metrics of a font. Results must be deterministic for a given text and font
/// within one process; they are cached and must never be persisted.
///
/// Fonts are not validated. A key the provider does not understand should
/// measure as zero rather than fail. Only a provider that cannot measure
/// anything returns [`ErrorKind::MeasurementUnavailable`](crate::ErrorKind).
pub trait MetricsProvider {
    /// Width in pixels of `text` rendered on one line in `font`.
    fn text_width(&mut self, text: &str, font: &FontSpec) -> Result<f32, Error>;

    /// Vertical metrics of `font`.
    fn vertical_metrics(&mut self, font: &FontSpec) -> Result<VerticalMetrics, Error>;

    /// Forgets anything resolved for `font`, e.g. after a web font finished loading.
    fn invalidate_font(&mut self, font: &FontSpec) {
        let _ = font;
    }
}

impl<P: MetricsProvider + ?Sized> MetricsProvider for &mut P {
    fn text_width(&mut self, text: &str, font: &FontSpec) -> Result<f32, Error> {
        (**self).text_width(text, font)
    }

    fn vertical_metrics(&mut self, font: &FontSpec) -> Result<VerticalMetrics, Error> {
        (**self).vertical_metrics(font)
    }

    fn invalidate_font(&mut self, font: &FontSpec) {
        (**self).invalidate_font(font);
    }
}

impl<P: MetricsProvider + ?Sized> MetricsProvider for Box<P> {
    fn text_width(&mut self, text: &str, font: &FontSpec) -> Result<f32, Error> {
        (**self).text_width(text, font)
    }

    fn vertical_metrics(&mut self, font: &FontSpec) -> Result<VerticalMetrics, Error> {
        (**self).vertical_metrics(font)
    }

    fn invalidate_font(&mut self, font: &FontSpec) {
        (**self).invalidate_font(font);
    }
}
