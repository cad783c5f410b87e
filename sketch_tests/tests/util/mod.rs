// Copyright 2026 the Sketch Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Utility functions and types shared across tests.

pub(crate) mod env;
mod metrics;
pub(crate) mod samples;

pub(crate) use env::TestEnv;
pub(crate) use metrics::FixedMetrics;
