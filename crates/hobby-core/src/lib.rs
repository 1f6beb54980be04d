//! Core types for the hobby log statistics tool.
//!
//! Defines the standardized series model shared by the ingestion and
//! statistics layers, the error taxonomy, and the timestamp normalizer
//! that converts heterogeneous date notations into epoch seconds.

pub mod error;
pub mod models;
pub mod timestamp;

pub use error::{Result, StatsError};
