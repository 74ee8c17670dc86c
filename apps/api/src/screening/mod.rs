//! The screening core: taxonomy lookup, resume analysis, job requirement
//! extraction, scoring, ranking, and report building.
//!
//! Everything here is a pure function over in-memory text; candidates are
//! independent of one another and the ranker is the only point that needs
//! the whole batch.

pub mod analyzer;
pub mod extraction;
pub mod handlers;
pub mod job_requirements;
pub mod ranking;
pub mod report;
pub mod scoring;
pub mod taxonomy;
