// Copyright 2026 the Sketch Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{wrap, CharWidthCache, Error, FontSpec, MetricsProvider};

/// Text used to estimate a font's line box: every capital letter and digit.
pub const DUMMY_TEXT: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Size and baseline of a measured block of text.
#[derive(Copy, Clone, Default, Debug, PartialEq)]
pub struct TextBlockMetrics {
    /// Width of the widest line, or the constraining width.
    pub width: f32,
    /// Height of all lines together.
    pub height: f32,
    /// Offset from the top of the block to the baseline of its last line.
    pub baseline: f32,
}

pub(crate) fn measure_block<P: MetricsProvider + ?Sized>(
    provider: &mut P,
    cache: &mut CharWidthCache,
    text: &str,
    font: &FontSpec,
    max_width: Option<f32>,
) -> Result<TextBlockMetrics, Error> {
    // An empty line would collapse to nothing and stop counting towards the height.
    let lines = text.split('\n').map(|line| if line.is_empty() { " " } else { line });

    let (width, line_height, line_count) = match max_width.filter(|width| *width > 0.0) {
        Some(max_width) => {
            let line_height = approx_line_height(provider, cache, font)?;
            let mut line_count = 0;
            for line in lines {
                line_count += wrapped_line_count(provider, cache, line, font, max_width)?;
            }
            (max_width, line_height, line_count)
        }
        None => {
            let line_height = provider.vertical_metrics(font)?.line_height();
            let mut width = 0.0_f32;
            let mut line_count = 0;
            for line in lines {
                width = width.max(provider.text_width(line, font)?);
                line_count += 1;
            }
            (width, line_height, line_count)
        }
    };

    let metrics = provider.vertical_metrics(font)?;
    let line_height = line_height.max(0.0);
    let last_line_top = line_height * line_count.saturating_sub(1) as f32;
    Ok(TextBlockMetrics {
        width,
        height: line_height * line_count as f32,
        baseline: last_line_top + metrics.baseline_in(line_height),
    })
}

/// Height of a single line of `font`, measured on [`DUMMY_TEXT`].
pub(crate) fn approx_line_height<P: MetricsProvider + ?Sized>(
    provider: &mut P,
    cache: &mut CharWidthCache,
    font: &FontSpec,
) -> Result<f32, Error> {
    Ok(measure_block(provider, cache, DUMMY_TEXT, font, None)?.height)
}

/// How many lines `line` takes when it is laid out `max_width` wide with
/// collapsed whitespace, breaking long words anywhere.
fn wrapped_line_count<P: MetricsProvider + ?Sized>(
    provider: &mut P,
    cache: &mut CharWidthCache,
    line: &str,
    font: &FontSpec,
    max_width: f32,
) -> Result<usize, Error> {
    let collapsed = line.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        return Ok(1);
    }
    let wrapped = wrap::wrap_text(provider, cache, &collapsed, font, max_width)?;
    Ok(wrapped.split('\n').count())
}
