//! Spatial types for the Roam random-walk engine.
//!
//! - [`GridBounds`]: the fixed `[MIN_DIM, MAX_DIM]` range and the clamp that
//!   keeps every requested dimension inside it
//! - [`Dims`]: a validated logical window `[0, width) x [0, height)` laid over
//!   the fixed `MAX_DIM x MAX_DIM` physical storage
//! - [`Direction`]: the four cardinal unit moves

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bounds;
pub mod dims;
pub mod direction;

pub use bounds::{GridBounds, MAX_DIM, MIN_DIM, PHYSICAL_CELLS};
pub use dims::Dims;
pub use direction::Direction;
