//! Review submission
//!
//! The one operation callers invoke per review: validate the raw rating,
//! map it onto the SM-2 quality scale, run the scheduler, and hand back
//! the new schedule together with the history event to append. Loading
//! the prior schedule and persisting both outputs stays with the caller,
//! as does serializing concurrent reviews of the same card.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::algorithm::{calculate_next_review, MIN_EASE_FACTOR};
use crate::models::{CardSchedule, ReviewEvent, ReviewRating};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReviewError {
    #[error("Invalid rating {0}: expected one of 0, 2, 3, 5")]
    InvalidRating(i32),

    #[error("Invalid card schedule: {0}")]
    InvalidSchedule(String),
}

pub type Result<T> = std::result::Result<T, ReviewError>;

/// Result of a review submission
///
/// `schedule` replaces the card's prior schedule; `event` is appended to
/// the card's review history, immutably.
#[derive(Debug, Clone)]
pub struct ReviewOutcome {
    pub schedule: CardSchedule,
    pub event: ReviewEvent,
}

/// Apply a review to a card's schedule
///
/// # Arguments
/// * `schedule` - The card's current schedule, as loaded by the caller
/// * `rating` - Raw UI rating (0 Wrong, 2 Hard, 3 Good, 5 Easy)
/// * `now` - Timestamp of the review
///
/// # Errors
/// `InvalidRating` for a rating outside the four recognized values;
/// `InvalidSchedule` if the stored state violates the scheduler's
/// preconditions. Neither is retryable.
pub fn apply_review(
    schedule: &CardSchedule,
    rating: i32,
    now: DateTime<Utc>,
) -> Result<ReviewOutcome> {
    let rating = ReviewRating::from_raw(rating).map_err(ReviewError::InvalidRating)?;
    validate_schedule(schedule)?;

    let quality = rating.quality();
    let next = calculate_next_review(schedule, quality, now);

    log::debug!(
        "Reviewed card {}: quality {}, interval {} -> {}, ease {:.2} -> {:.2}",
        schedule.card_id,
        quality,
        schedule.interval,
        next.interval,
        schedule.ease_factor,
        next.ease_factor
    );

    let event = ReviewEvent {
        card_id: schedule.card_id,
        quality,
        interval: next.interval,
        ease_factor: next.ease_factor,
        reviewed_at: now,
    };

    Ok(ReviewOutcome {
        schedule: next,
        event,
    })
}

fn validate_schedule(schedule: &CardSchedule) -> Result<()> {
    if schedule.ease_factor < MIN_EASE_FACTOR {
        return Err(ReviewError::InvalidSchedule(format!(
            "ease factor {} below minimum {}",
            schedule.ease_factor, MIN_EASE_FACTOR
        )));
    }
    if schedule.interval < 0 {
        return Err(ReviewError::InvalidSchedule(format!(
            "negative interval {}",
            schedule.interval
        )));
    }
    if schedule.repetitions < 0 {
        return Err(ReviewError::InvalidSchedule(format!(
            "negative repetitions {}",
            schedule.repetitions
        )));
    }
    Ok(())
}
