/*
    Bindings for the Halo: Reach stats API. Every operation builds a request
    path from the configured token, issues one blocking GET and returns the
    raw response, so callers decide how to decode each body. Timestamps in
    the bodies use the service's own serialization; parse_timestamp decodes
    those.
*/

pub mod client;
pub mod route;
pub mod timestamp;

pub use client::{ApiResponse, ReachApi};
pub use route::Route;
pub use timestamp::{parse_timestamp, TimestampError};
