// Copyright 2026 the Txt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Code point counting and iteration over UTF-8 and UTF-16 buffers.
//!
//! This crate is a small, `no_std` leaf shared by the text layout crates. Unlike the decoding
//! routines in `core`, every function here reports malformed input in-band: counts return `-1`
//! and the `next_*` iterators return `-1` and move the cursor to the end of the buffer, so that
//! a caller looping until the cursor is exhausted always terminates.
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
//!
//! ## Example
//!
//! ```
//! use txt_utf::{count_utf8, next_utf16};
//!
//! assert_eq!(count_utf8("h\u{e9}llo".as_bytes()), 5);
//!
//! let units = [0xD83D, 0xDE00, 0x0041];
//! let mut cursor = &units[..];
//! assert_eq!(next_utf16(&mut cursor), 0x1F600);
//! assert_eq!(next_utf16(&mut cursor), 0x41);
//! assert!(cursor.is_empty());
//! ```

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

mod utf16;
mod utf8;

pub use utf16::{count_utf16, count_utf16_bytes, next_utf16};
pub use utf8::{count_utf8, next_utf8};

/// Value returned by the counting and decoding functions for malformed input.
pub const INVALID: i32 = -1;
