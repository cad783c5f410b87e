// Copyright 2026 the Sketch Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Context for measuring and wrapping text.

use sketch_scene::Element;

use crate::block::{self, TextBlockMetrics, DUMMY_TEXT};
use crate::{wrap, CharWidthCache, Error, FontSpec, MetricsProvider};

/// Space kept between a container's edges and its label, in pixels.
pub const PADDING: f32 = 5.0;

/// Options for a [`TextContext`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutOptions {
    /// Space kept on every side between a container and its label.
    ///
    /// The default value is [`PADDING`].
    pub padding: f32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self { padding: PADDING }
    }
}

/// Measurement provider plus the caches built on top of it.
///
/// One context is meant to live as long as the editor that uses it. All
/// operations take `&mut self`; the caches are not shared across contexts.
#[derive(Clone, Debug)]
pub struct TextContext<P> {
    provider: P,
    char_widths: CharWidthCache,
    options: LayoutOptions,
}

impl<P: MetricsProvider> TextContext<P> {
    /// Creates a context with default options.
    pub fn new(provider: P) -> Self {
        Self::with_options(provider, LayoutOptions::default())
    }

    /// Creates a context with the given options.
    pub fn with_options(provider: P, options: LayoutOptions) -> Self {
        Self {
            provider,
            char_widths: CharWidthCache::new(),
            options,
        }
    }

    /// The options this context was created with.
    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    /// The measurement provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Mutable access to the measurement provider.
    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    /// The character width cache.
    pub fn char_widths(&self) -> &CharWidthCache {
        &self.char_widths
    }

    /// Consumes the context and returns its provider.
    pub fn into_provider(self) -> P {
        self.provider
    }

    /// Width of `text` on a single line, straight from the provider.
    pub fn text_width(&mut self, text: &str, font: &FontSpec) -> Result<f32, Error> {
        self.provider.text_width(text, font)
    }

    /// Width of one character, measured at most once per font.
    pub fn char_width(&mut self, ch: char, font: &FontSpec) -> Result<f32, Error> {
        self.char_widths.width_of(ch, font, &mut self.provider)
    }

    /// The narrowest character width cached for `font`, or `0.0`.
    pub fn min_char_width(&self, font: &FontSpec) -> f32 {
        self.char_widths.min_cached_width(font)
    }

    /// Forgets everything measured for `font`.
    ///
    /// Call this when the font finished loading or otherwise changed, before
    /// laying anything out with it again.
    pub fn clear_cache_for_font(&mut self, font: &FontSpec) {
        self.char_widths.clear_font(font);
        self.provider.invalidate_font(font);
    }

    /// Measures a block of text, optionally constrained to `max_width`.
    ///
    /// Without a constraint every line is laid out as is and the block is as
    /// wide as its widest line. With a positive constraint, whitespace collapses
    /// and each line wraps inside `max_width`. The block is then exactly
    /// `max_width` wide.
    pub fn measure_text(
        &mut self,
        text: &str,
        font: &FontSpec,
        max_width: Option<f32>,
    ) -> Result<TextBlockMetrics, Error> {
        block::measure_block(
            &mut self.provider,
            &mut self.char_widths,
            text,
            font,
            max_width,
        )
    }

    /// Wraps `text` to fit inside `container`, minus padding on both sides.
    ///
    /// Without a container the text is returned unchanged.
    pub fn wrap_text(
        &mut self,
        text: &str,
        font: &FontSpec,
        container: Option<&Element>,
    ) -> Result<String, Error> {
        let Some(container) = container else {
            return Ok(text.to_owned());
        };
        let max_width = container.width - self.options.padding * 2.0;
        self.wrap_text_to_width(text, font, max_width)
    }

    /// Wraps `text` so that each line fits in `max_width`.
    pub fn wrap_text_to_width(
        &mut self,
        text: &str,
        font: &FontSpec,
        max_width: f32,
    ) -> Result<String, Error> {
        wrap::wrap_text(
            &mut self.provider,
            &mut self.char_widths,
            text,
            font,
            max_width,
        )
    }

    /// Height of one line of `font`.
    pub fn approx_line_height(&mut self, font: &FontSpec) -> Result<f32, Error> {
        block::approx_line_height(&mut self.provider, &mut self.char_widths, font)
    }

    /// Smallest container width that fits one character per line, padding included.
    pub fn approx_min_line_width(&mut self, font: &FontSpec) -> Result<f32, Error> {
        let mut one_per_line = String::with_capacity(DUMMY_TEXT.len() * 2);
        for ch in DUMMY_TEXT.chars() {
            if !one_per_line.is_empty() {
                one_per_line.push('\n');
            }
            one_per_line.push(ch);
        }
        let metrics = self.measure_text(&one_per_line, font, None)?;
        Ok(metrics.width + self.options.padding * 2.0)
    }

    /// Smallest container height that fits one line, padding included.
    pub fn approx_min_line_height(&mut self, font: &FontSpec) -> Result<f32, Error> {
        Ok(self.approx_line_height(font)? + self.options.padding * 2.0)
    }

    /// Roughly how many lower case characters fit on a line `width` pixels wide.
    ///
    /// Returns `0` when the font has no measurable width.
    pub fn approx_chars_to_fit_in_width(
        &mut self,
        font: &FontSpec,
        width: f32,
    ) -> Result<usize, Error> {
        let sample = DUMMY_TEXT.to_lowercase();
        let mut widths = Vec::with_capacity(sample.len());
        for ch in sample.chars() {
            widths.push(self.char_width(ch, font)?);
        }
        let cycle_width: f32 = widths.iter().sum();
        if cycle_width <= 0.0 || width < 0.0 {
            return Ok(0);
        }
        if !width.is_finite() {
            return Ok(usize::MAX);
        }
        #[allow(
            clippy::cast_possible_truncation,
            reason = "The cycle count is a non-negative whole number and `as` saturates."
        )]
        let cycles = (width / cycle_width).floor() as usize;
        let mut count = cycles.saturating_mul(widths.len());
        let mut remaining = width - cycles as f32 * cycle_width;
        for ch_width in widths {
            remaining -= ch_width;
            if remaining < 0.0 {
                break;
            }
            count = count.saturating_add(1);
        }
        Ok(count)
    }
}
