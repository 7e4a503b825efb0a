// Copyright 2026 the Txt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

mod env;
mod font;

pub(crate) use env::{test_collection, utf16, TestEnv, TEST_FAMILY};
pub(crate) use font::TestFont;
