// Copyright 2026 the Sketch Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement and wrapping for labels bound to diagram shapes.
//!
//! The entry point is [`TextContext`], which owns a [`MetricsProvider`] and the
//! per-font [`CharWidthCache`]. With it you can:
//!
//! - measure a block of text ([`TextContext::measure_text`]),
//! - wrap text to fit a container ([`TextContext::wrap_text`]),
//! - re-layout labels when their containers are resized ([`handle_bind_text_resize`]).
//!
//! Layout never writes to the scene. The sync functions return
//! [`ElementUpdate`](sketch_scene::ElementUpdate)s, and the caller applies them
//! with an [`ElementStore`](sketch_scene::ElementStore).
//!
//! ## Features
//!
//! - `system` (enabled by default): Provides [`SystemMetrics`], a provider that
//!   measures with system fonts found by `fontique` and read with `skrifa`.
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use sketch_scene;

mod block;
mod cache;
mod context;
mod error;
mod font;
mod provider;
mod sync;
#[cfg(feature = "system")]
mod system;

pub mod wrap;

#[cfg(test)]
mod tests;

pub use block::{TextBlockMetrics, DUMMY_TEXT};
pub use cache::CharWidthCache;
pub use context::{LayoutOptions, TextContext, PADDING};
pub use error::{Error, ErrorKind};
pub use font::{FontSpec, ParsedFont};
pub use provider::{MetricsProvider, VerticalMetrics};
pub use sync::{handle_bind_text_resize, redraw_text_bounding_box};
#[cfg(feature = "system")]
pub use system::{SystemMetrics, SystemMetricsOptions};
