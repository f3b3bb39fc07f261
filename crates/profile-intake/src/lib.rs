//! Student profile intake and review.
//!
//! Submissions are collected through the intake endpoint, stored behind the
//! [`submissions::SubmissionStore`] contract, and reviewed through a filter
//! engine that splits each filter into predicates the store evaluates natively
//! and predicates evaluated after the fetch.

pub mod catalog;
pub mod config;
pub mod error;
pub mod submissions;
pub mod telemetry;
