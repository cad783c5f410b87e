// Copyright 2026 the Sketch Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A [`MetricsProvider`] backed by installed fonts.

use core::iter::once;

use fontique::{
    Attributes, Blob, Collection, CollectionOptions, GenericFamily, QueryFamily, QueryStatus,
    SourceCache,
};
use hashbrown::HashMap;
use skrifa::instance::{LocationRef, Size};
use skrifa::{FontRef, GlyphId, MetadataProvider};

use crate::{Error, FontSpec, MetricsProvider, VerticalMetrics};

/// Options for [`SystemMetrics`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SystemMetricsOptions {
    /// Whether to look up fonts installed on the system.
    ///
    /// The default value is true.
    pub system_fonts: bool,
}

impl Default for SystemMetricsOptions {
    fn default() -> Self {
        Self { system_fonts: true }
    }
}

#[derive(Clone)]
struct Face {
    blob: Blob<u8>,
    index: u32,
    size: f32,
}

/// Measures text with fonts found by `fontique` and read by `skrifa`.
///
/// The family list of a [`FontSpec`] is matched in order, then sans-serif is
/// tried as a fallback. The width of a string is the sum of its characters'
/// nominal advances: no shaping or kerning is applied.
///
/// Keys that do not parse as `<size>px <families>` measure as zero. If no font
/// matches at all, measuring fails with
/// [`ErrorKind::MeasurementUnavailable`](crate::ErrorKind).
pub struct SystemMetrics {
    collection: Collection,
    source_cache: SourceCache,
    faces: HashMap<FontSpec, Face>,
}

impl SystemMetrics {
    /// Creates a provider that discovers system fonts.
    pub fn new() -> Self {
        Self::with_options(SystemMetricsOptions::default())
    }

    /// Creates a provider with the given options.
    pub fn with_options(options: SystemMetricsOptions) -> Self {
        let mut collection_options = CollectionOptions::default();
        collection_options.system_fonts = options.system_fonts;
        Self {
            collection: Collection::new(collection_options),
            source_cache: SourceCache::default(),
            faces: HashMap::new(),
        }
    }

    /// The underlying font collection, e.g. to register fonts that are not installed.
    pub fn collection_mut(&mut self) -> &mut Collection {
        &mut self.collection
    }

    /// Resolves `font` to a face, or `None` for a degenerate key.
    fn face(&mut self, font: &FontSpec) -> Result<Option<Face>, Error> {
        if let Some(face) = self.faces.get(font) {
            return Ok(Some(face.clone()));
        }
        let Some(parsed) = font.parse() else {
            return Ok(None);
        };
        if parsed.size == 0.0 {
            return Ok(None);
        }

        let mut found = None;
        let mut query = self.collection.query(&mut self.source_cache);
        query.set_families(
            parsed
                .families
                .iter()
                .map(|&name| match GenericFamily::parse(name) {
                    Some(generic) => QueryFamily::Generic(generic),
                    None => QueryFamily::Named(name),
                })
                .chain(once(QueryFamily::Generic(GenericFamily::SansSerif))),
        );
        query.set_attributes(Attributes::default());
        query.matches_with(|candidate| {
            found = Some((candidate.blob.clone(), candidate.index));
            QueryStatus::Stop
        });
        drop(query);

        let Some((blob, index)) = found else {
            log::debug!("no font matched {font}");
            return Err(Error::measurement_unavailable(
                Some(font),
                "no font matched the family list",
            ));
        };
        log::debug!("resolved {font} to face {index} of blob {}", blob.id());
        let face = Face {
            blob,
            index,
            size: parsed.size,
        };
        self.faces.insert(font.clone(), face.clone());
        Ok(Some(face))
    }
}

impl Default for SystemMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for SystemMetrics {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SystemMetrics")
            .field("resolved_faces", &self.faces.len())
            .finish_non_exhaustive()
    }
}

impl MetricsProvider for SystemMetrics {
    fn text_width(&mut self, text: &str, font: &FontSpec) -> Result<f32, Error> {
        let Some(face) = self.face(font)? else {
            return Ok(0.0);
        };
        let font_ref = font_ref(&face, font)?;
        let charmap = font_ref.charmap();
        let glyph_metrics = font_ref.glyph_metrics(Size::new(face.size), LocationRef::default());
        Ok(text
            .chars()
            .map(|ch| {
                let glyph = charmap.map(ch).unwrap_or(GlyphId::NOTDEF);
                glyph_metrics.advance_width(glyph).unwrap_or(0.0)
            })
            .sum())
    }

    fn vertical_metrics(&mut self, font: &FontSpec) -> Result<VerticalMetrics, Error> {
        let Some(face) = self.face(font)? else {
            return Ok(VerticalMetrics::default());
        };
        let metrics = font_ref(&face, font)?.metrics(Size::new(face.size), LocationRef::default());
        Ok(VerticalMetrics {
            ascent: metrics.ascent,
            // Descent is negative below the baseline in font units.
            descent: -metrics.descent,
            leading: metrics.leading,
        })
    }

    fn invalidate_font(&mut self, font: &FontSpec) {
        self.faces.remove(font);
    }
}

fn font_ref<'a>(face: &'a Face, font: &FontSpec) -> Result<FontRef<'a>, Error> {
    FontRef::from_index(face.blob.as_ref(), face.index)
        .map_err(|_| Error::measurement_unavailable(Some(font), "font data could not be read"))
}
