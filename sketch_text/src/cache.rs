// Copyright 2026 the Sketch Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hashbrown::HashMap;

use crate::{Error, FontSpec, MetricsProvider};

/// Widths of single characters, memoised per font.
///
/// Each (font, character) pair is measured at most once until the font is
/// cleared with [`CharWidthCache::clear_font`]. Entries are never evicted
/// otherwise.
#[derive(Clone, Debug, Default)]
pub struct CharWidthCache {
    fonts: HashMap<FontSpec, HashMap<char, f32>>,
}

impl CharWidthCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the width of `ch` in `font`, measuring it with `provider` on a miss.
    pub fn width_of<P: MetricsProvider + ?Sized>(
        &mut self,
        ch: char,
        font: &FontSpec,
        provider: &mut P,
    ) -> Result<f32, Error> {
        if let Some(width) = self.get(ch, font) {
            return Ok(width);
        }
        let mut buf = [0; 4];
        let width = provider.text_width(ch.encode_utf8(&mut buf), font)?;
        self.fonts.entry(font.clone()).or_default().insert(ch, width);
        Ok(width)
    }

    /// Makes sure `ch` is cached for `font` without reading it back.
    pub fn update_cache<P: MetricsProvider + ?Sized>(
        &mut self,
        ch: char,
        font: &FontSpec,
        provider: &mut P,
    ) -> Result<(), Error> {
        self.width_of(ch, font, provider)?;
        Ok(())
    }

    /// Returns the cached width of `ch` in `font`, if measured.
    pub fn get(&self, ch: char, font: &FontSpec) -> Option<f32> {
        self.fonts.get(font)?.get(&ch).copied()
    }

    /// All cached widths of `font`, if any were measured since the last clear.
    pub fn cached_widths(&self, font: &FontSpec) -> Option<&HashMap<char, f32>> {
        self.fonts.get(font)
    }

    /// Drops every entry of `font`.
    pub fn clear_font(&mut self, font: &FontSpec) {
        if let Some(widths) = self.fonts.remove(font) {
            log::debug!("cleared {} cached char widths for {font}", widths.len());
        }
    }

    /// The narrowest cached character width of `font`, or `0.0` if none is cached.
    ///
    /// Resizing uses this as the smallest width change worth a re-wrap.
    pub fn min_cached_width(&self, font: &FontSpec) -> f32 {
        self.fonts
            .get(font)
            .and_then(|widths| widths.values().copied().min_by(f32::total_cmp))
            .unwrap_or(0.0)
    }

    /// Number of fonts with at least one cached character.
    pub fn font_count(&self) -> usize {
        self.fonts.values().filter(|widths| !widths.is_empty()).count()
    }
}
