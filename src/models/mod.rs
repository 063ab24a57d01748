//! Data structures shared across the pipeline.

mod posting;

pub use posting::Posting;
