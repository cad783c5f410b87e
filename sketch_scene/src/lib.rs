// Copyright 2026 the Sketch Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sketch Scene is the element model shared by the sketch text engine.
//!
//! It holds the shapes of a diagram, the binding between a container shape and
//! its text label, and the update commands used to change them. Layout code never
//! mutates elements in place. It reads them through an [`ElementStore`] and hands
//! back [`ElementUpdate`]s for the caller to apply.
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
#![no_std]

extern crate alloc;

mod binding;
mod element;
mod scene;
mod transform;
mod update;

pub use crate::binding::{bind_text, bind_text_after_duplication};
pub use crate::element::{Element, ElementId, ElementKind, TextProps};
pub use crate::scene::{ElementStore, Scene};
pub use crate::transform::TransformHandle;
pub use crate::update::{ElementPatch, ElementUpdate};
