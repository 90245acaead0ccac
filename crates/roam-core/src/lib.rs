//! Core types for the Roam random-walk simulation engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! cell coordinate, the step counter newtype, and the error enums shared by
//! the grid, storage, and engine crates.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;

pub use error::{GridError, StepError};
pub use id::{Cell, StepId};
