// Copyright 2026 the Sketch Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Greedy line wrapping.
//!
//! Explicit newlines are kept and each line between them is wrapped on its own.
//! Words (split on `' '`) are packed greedily. A word wider than the whole line
//! is broken between characters using cached character widths.

use crate::{CharWidthCache, Error, FontSpec, MetricsProvider};

/// Wraps `text` so that every line fits in `max_width` pixels.
///
/// The result has at least as many lines as the input. Every line measures at
/// most `max_width`, unless it holds a single character that is wider than that
/// by itself. Trailing whitespace is removed from wrapped lines. A character of
/// a broken word that is exactly `max_width` wide is left out.
///
/// A zero or negative `max_width` puts one character on each line. Only a
/// failing provider makes this return an error.
pub fn wrap_text<P: MetricsProvider + ?Sized>(
    provider: &mut P,
    cache: &mut CharWidthCache,
    text: &str,
    font: &FontSpec,
    max_width: f32,
) -> Result<String, Error> {
    let mut wrapper = LineWrapper {
        provider,
        cache,
        font,
        max_width,
        lines: Vec::new(),
    };
    for segment in text.split('\n') {
        wrapper.wrap_segment(segment)?;
    }
    log::trace!(
        "wrapped {} chars into {} lines at width {max_width} ({font})",
        text.len(),
        wrapper.lines.len()
    );
    Ok(wrapper.lines.join("\n"))
}

struct LineWrapper<'a, P: ?Sized> {
    provider: &'a mut P,
    cache: &'a mut CharWidthCache,
    font: &'a FontSpec,
    max_width: f32,
    lines: Vec<String>,
}

impl<P: MetricsProvider + ?Sized> LineWrapper<'_, P> {
    fn wrap_segment(&mut self, segment: &str) -> Result<(), Error> {
        if segment.is_empty() {
            self.lines.push(String::new());
            return Ok(());
        }
        let first_line = self.lines.len();
        // Words on `line` are always followed by a single separating space.
        let mut line = String::new();
        let words: Vec<&str> = segment.split(' ').collect();
        let mut index = 0;
        while index < words.len() {
            let word = words[index];
            if self.width(word)? > self.max_width {
                self.break_word(word, &mut line)?;
                index += 1;
                continue;
            }
            if line.is_empty() {
                line.push_str(word);
                line.push(' ');
                index += 1;
                continue;
            }
            let candidate_len = line.len();
            line.push_str(word);
            if self.width(&line)? <= self.max_width {
                line.push(' ');
                index += 1;
            } else {
                // Retry the same word on a fresh line.
                line.truncate(candidate_len);
                self.flush(&mut line, false);
            }
        }
        let last = line.trim_end();
        if !last.is_empty() || self.lines.len() == first_line {
            self.lines.push(last.to_owned());
        }
        Ok(())
    }

    /// Breaks a word that cannot fit on any line between its characters.
    ///
    /// The word starts on a fresh line. Once the running width reaches the
    /// line width, the line is ended without the current character, which then
    /// starts the next line. A character exactly as wide as a line by itself is
    /// dropped.
    fn break_word(&mut self, word: &str, line: &mut String) -> Result<(), Error> {
        self.flush(line, false);
        let mut line_width = 0.0;
        for ch in word.chars() {
            let ch_width = self.cache.width_of(ch, self.font, &mut *self.provider)?;
            line_width += ch_width;
            if line_width < self.max_width {
                line.push(ch);
                continue;
            }
            let forced = line.chars().nth(1).is_none();
            self.flush(line, forced);
            line_width = ch_width;
            if line_width == self.max_width {
                line_width = 0.0;
            } else {
                line.push(ch);
            }
        }
        if !line.is_empty() {
            line.push(' ');
        }
        Ok(())
    }

    /// Ends the current line. Lines that are only whitespace are dropped.
    fn flush(&mut self, line: &mut String, keep_whitespace: bool) {
        let finished = if keep_whitespace {
            line.as_str()
        } else {
            line.trim_end()
        };
        if !finished.is_empty() {
            self.lines.push(finished.to_owned());
        }
        line.clear();
    }

    fn width(&mut self, text: &str) -> Result<f32, Error> {
        self.provider.text_width(text, self.font)
    }
}
