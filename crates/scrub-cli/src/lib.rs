//! CLI library components for the customer record scrubber.

pub mod logging;
pub mod pipeline;
pub mod summary;
pub mod types;
