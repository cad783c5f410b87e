// Copyright 2026 the Sketch Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A short label that wraps once in narrow boxes.
pub(crate) const SHORT: &str = "hello world";

/// Label with explicit line breaks and a blank line.
pub(crate) const MULTILINE: &str = "Line one.\n\nLine three is longer.";

/// Contains a word too long for most containers.
pub(crate) const LONG_WORD: &str = "Most words are short. Antidisestablishmentarianism is not.";

/// Runs of spaces between and after words.
pub(crate) const SPACED: &str = "one  two   three    four ";

pub(crate) const LOREM_IPSUM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Integer cursus interdum dui, in gravida ligula aliquam in. Vivamus vitae metus pharetra, ultricies metus quis, consectetur augue.";

pub(crate) const ALL: [&str; 5] = [SHORT, MULTILINE, LONG_WORD, SPACED, LOREM_IPSUM];
