// Copyright 2026 the Sketch Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

mod test_cache;
mod utils;
