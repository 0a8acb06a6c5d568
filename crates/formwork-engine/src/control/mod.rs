//! Control tree types for formwork.
//!
//! This module provides:
//! - Node type definitions (`types` module, re-exported at this level)
//! - Factory functions for composing trees bottom-up

mod types;

pub use types::*;
