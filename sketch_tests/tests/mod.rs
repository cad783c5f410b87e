// Copyright 2026 the Sketch Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `sketch_text` and `sketch_scene`.
//!
//! - The `util` module contains the fixed width metrics provider and the scene
//!   environment shared by the tests.
//! - We use this `mod.rs` file as the single entry point instead of one test binary per
//!   file, so shared utilities are compiled once.
//! - Put new tests in the module for their topic and start the test name with that
//!   topic, e.g. `resize_grows_container` rather than `grows_container_on_resize`.

#![allow(missing_docs, reason = "we don't need docs for testing")]

mod util;
