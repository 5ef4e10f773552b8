#![no_std]

//! Submat Core - Selector Definitions for Dense Matrix Sub-Indexing
//!
//! This crate provides the selector data model, normalization and
//! materialization rules, and pure validation helpers for bounds-checked
//! sub-matrix access over dense column-major storage

extern crate alloc;

pub mod error;
pub mod materialize;
pub mod normalize;
pub mod selector;
pub mod traits;
pub mod validation;

pub use error::*;
pub use materialize::*;
pub use normalize::*;
pub use selector::*;
pub use traits::*;
pub use validation::*;
