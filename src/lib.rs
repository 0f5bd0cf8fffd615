//! Spaced repetition scheduling core
//!
//! This crate provides:
//! - SM-2 interval calculation driven by recall quality
//! - A four-value review rating scale mapped onto SM-2 quality (0-5)
//! - Review submission as a pure transform (caller persists the result)
//! - Due-queue ordering and aggregate review statistics
//!
//! The scheduler never touches storage or the system clock: callers load a
//! card's [`CardSchedule`], pass the current time in, and persist whatever
//! comes back. Review history is returned as an immutable [`ReviewEvent`]
//! for the caller to append.

pub mod algorithm;
pub mod models;
pub mod queue;
pub mod review;

pub use models::*;
pub use queue::{due_schedules, review_stats, ReviewStats};
pub use review::{apply_review, ReviewError, ReviewOutcome};
