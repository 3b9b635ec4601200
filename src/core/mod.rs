//! Core conversion logic: rate graph, fewest-hop search and rate composition

pub mod config;
pub mod convert;
pub mod error;
pub mod graph;
pub mod log;
pub mod path;
pub mod request;
pub mod resolver;

// Re-export main types for cleaner imports
pub use convert::{Conversion, compute, convert};
pub use error::ConversionError;
pub use graph::{Edge, RateGraph, round_dp};
pub use path::{ConversionPath, reconstruct};
pub use request::{ConversionRequest, RateDeclaration};
pub use resolver::{SearchState, resolve};
