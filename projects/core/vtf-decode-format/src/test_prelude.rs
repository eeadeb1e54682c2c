//! Common test imports and utilities for VTF format tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.
#![allow(unused_imports)]

// Re-export commonly used alloc types for tests
pub use alloc::{vec, vec::Vec};

// External crates commonly used in tests
pub use rstest::rstest;

pub use crate::format::*;
pub use crate::test_utils::VtfBuilder;
pub use crate::vtf::constants::*;
pub use crate::vtf::{parse_header, parse_image_data, VtfHeader};
pub use crate::VtfParseError;
