// src/lib.rs

//! jobwatch Library
//!
//! Watches a single job-listings page and emails alerts for new postings.

pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod server;
pub mod services;
pub mod storage;
