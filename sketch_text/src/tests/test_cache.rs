// Copyright 2026 the Sketch Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use super::utils::{context, font, unpadded, TableMetrics};
use crate::{CharWidthCache, FontSpec};

#[test]
fn cache_measures_each_char_once() {
    let mut ctx = context();
    let first = ctx.char_width('x', &font()).unwrap();
    let second = ctx.char_width('x', &font()).unwrap();
    assert_eq!(first, second);
    assert_eq!(ctx.provider().calls("x"), 1, "second lookup hits the cache");
}

#[test]
fn cache_keeps_zero_widths() {
    let mut ctx = unpadded(TableMetrics::new(10.0).with('\u{200B}', 0.0));
    assert_eq!(ctx.char_width('\u{200B}', &font()).unwrap(), 0.0);
    assert_eq!(ctx.char_width('\u{200B}', &font()).unwrap(), 0.0);
    assert_eq!(
        ctx.provider().calls("\u{200B}"),
        1,
        "a zero width is a cached value, not a miss"
    );
}

#[test]
fn cache_is_keyed_by_font() {
    let mut provider = TableMetrics::new(10.0);
    let mut cache = CharWidthCache::new();
    let small = FontSpec::new(12.0, "Test");
    let large = FontSpec::new(40.0, "Test");

    cache.width_of('a', &small, &mut provider).unwrap();
    cache.width_of('a', &large, &mut provider).unwrap();
    assert_eq!(provider.calls("a"), 2, "each font is measured separately");
    assert_eq!(cache.font_count(), 2);

    cache.clear_font(&small);
    assert_eq!(cache.get('a', &small), None);
    assert_eq!(cache.get('a', &large), Some(10.0), "other fonts survive a clear");
}

#[test]
fn cache_clear_forces_remeasure() {
    let mut ctx = context();
    ctx.char_width('q', &font()).unwrap();
    ctx.clear_cache_for_font(&font());
    ctx.char_width('q', &font()).unwrap();
    assert_eq!(ctx.provider().calls("q"), 2);
    assert_eq!(
        ctx.provider().invalidated(),
        &[font()],
        "the provider forgets the font too"
    );
}

#[test]
fn cache_min_width() {
    let mut ctx = unpadded(TableMetrics::new(10.0).with('i', 4.0).with('m', 16.0));
    assert_eq!(ctx.min_char_width(&font()), 0.0, "nothing cached yet");

    ctx.char_width('m', &font()).unwrap();
    assert_eq!(ctx.min_char_width(&font()), 16.0);
    ctx.char_width('i', &font()).unwrap();
    ctx.char_width('e', &font()).unwrap();
    assert_eq!(ctx.min_char_width(&font()), 4.0);

    ctx.clear_cache_for_font(&font());
    assert_eq!(ctx.min_char_width(&font()), 0.0, "cleared fonts fall back to zero");
}

#[test]
fn cache_update_and_read_back() {
    let mut provider = TableMetrics::new(10.0).with('z', 7.0);
    let mut cache = CharWidthCache::new();
    assert!(cache.cached_widths(&font()).is_none());

    cache.update_cache('z', &font(), &mut provider).unwrap();
    cache.update_cache('z', &font(), &mut provider).unwrap();
    assert_eq!(provider.calls("z"), 1);

    let widths = cache.cached_widths(&font()).unwrap();
    assert_eq!(widths.len(), 1);
    assert_eq!(widths.get(&'z'), Some(&7.0));
}

#[test]
fn cache_filled_by_char_breaking() {
    let mut ctx = context();
    ctx.wrap_text_to_width(&"a".repeat(30), &font(), 60.0)
        .unwrap();
    assert_eq!(ctx.provider().calls("a"), 1, "30 lookups, one measurement");
    assert_eq!(ctx.min_char_width(&font()), 10.0);
}
