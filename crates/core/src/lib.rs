//! # real_lines_core
//!
//! Comment-aware "real line" counting for C-family sources (`.c`, `.h`, `.cpp`).
//!
//! A real line is a non-blank line holding at least one token that is neither
//! whitespace nor comment syntax. The crate is `no_std` and performs no I/O:
//!
//! - [`language::classify`]: classify one line given the incoming block-comment state
//! - [`language::RealLineCounter`]: stream a file's lines and accumulate the count
//! - [`parser::count_bytes`]: count an in-memory buffer
//!
//! ```rust
//! use real_lines_core::language::count_real_lines;
//!
//! let src = ["/* header", "   still header */ int x;", "// note", "", "return x;"];
//! assert_eq!(count_real_lines(src), 2);
//! ```

#![no_std]
#![allow(clippy::cargo_common_metadata)]

extern crate alloc;

pub mod language;
pub mod parser;
pub mod stats;
