#![forbid(unsafe_code)]

//! Async client for the remote roadmap API.
//!
//! Every request carries a bearer token and a JSON body; every call is an
//! independently awaited operation with no ordering relative to other
//! in-flight calls. Fetch failures on read paths follow the dashboard's
//! documented "silent empty state" policy via the `*_or_*` wrappers; the
//! roadmap-generation path surfaces its error so a retry/cancel UI can act
//! on it.

pub mod client;
pub mod error;
pub mod model;

pub use client::{DEFAULT_TIMEOUT, GenerateRequest, RoadmapClient};
pub use error::{ClientError, Result};
pub use model::{Roadmap, Task};
