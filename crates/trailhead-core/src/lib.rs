#![forbid(unsafe_code)]

//! Semantic prerequisite-graph model (headless).
//!
//! Design goals:
//! - a validated, immutable graph built once per API response
//! - deterministic queries (original node order is preserved everywhere)
//! - tolerant of malformed input per documented policies; never panics on it

pub mod error;
pub mod graph;

pub use error::{Error, Result};
pub use graph::{
    DanglingEdges, Difficulty, GraphOptions, GraphPayload, PrereqEdge, PrereqGraph, Topic, TopicId,
};
