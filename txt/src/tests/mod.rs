// Copyright 2026 the Txt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

mod test_ellipsis;
mod test_hit_test;
mod test_rects;
pub(crate) mod utils;
