//! Procedural spider-web generation.
//!
//! A [`WebModel`] samples a radial skeleton around the canvas center, grows
//! nested trapping-net rings inside it, and scores the net by the fraction of
//! randomly scattered square "flies" whose outline touches a ring edge.

pub mod config;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod random;
pub mod web;

pub use config::WebConfig;
pub use error::{ConfigError, GenerationError, Result, WebError};
pub use random::{RandomSource, SequenceSource};
pub use web::{Web, WebModel, WebSnapshot};
