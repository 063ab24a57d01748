//! The check pipeline: fetch → extract → diff → notify → persist.

pub mod diff;
pub mod run;

pub use diff::diff_postings;
pub use run::{RunReport, reconcile, run_once};
