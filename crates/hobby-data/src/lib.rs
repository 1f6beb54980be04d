//! Log ingestion layer for the hobby statistics tool.
//!
//! Responsible for discovering log files in a directory, classifying each
//! file's record schema from its header row, parsing rows with the
//! schema-appropriate rules, and merging the results into the shared
//! series store consumed by the statistics engines.

pub mod reader;

pub use hobby_core as core;
