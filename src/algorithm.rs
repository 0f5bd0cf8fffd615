//! SM-2 Spaced Repetition Algorithm
//!
//! Implementation of the SuperMemo 2 algorithm for calculating
//! optimal review intervals based on recall quality.
//!
//! Quality ratings (0-5):
//! - 0: Complete blackout, no recall
//! - 1: Incorrect, but upon seeing answer, remembered
//! - 2: Incorrect, but answer seemed easy to recall
//! - 3: Correct response with serious difficulty
//! - 4: Correct response after hesitation
//! - 5: Perfect response with no hesitation
//!
//! Quality below 3 counts as a failure: repetitions reset and the card
//! comes back the next day. The ease factor is adjusted on every review,
//! pass or fail, so a wrong answer permanently lowers ease.

use chrono::{DateTime, Duration, Utc};

use crate::models::{CardSchedule, ReviewRating};

/// Minimum ease factor allowed
pub const MIN_EASE_FACTOR: f32 = 1.3;

/// Calculate the next schedule state for a card using the SM-2 algorithm
///
/// Pure: `now` is the moment of the review, supplied by the caller rather
/// than read from the clock, so identical inputs give identical outputs.
///
/// # Arguments
/// * `schedule` - Current card schedule (ease >= 1.3, interval >= 0)
/// * `quality` - Quality rating (0-5)
/// * `now` - Timestamp of the review
///
/// # Returns
/// The new schedule, with `last_reviewed = now` and
/// `next_review = now + interval` days.
pub fn calculate_next_review(
    schedule: &CardSchedule,
    quality: i32,
    now: DateTime<Utc>,
) -> CardSchedule {
    debug_assert!((0..=5).contains(&quality), "quality out of range: {}", quality);
    debug_assert!(schedule.ease_factor >= MIN_EASE_FACTOR);
    debug_assert!(schedule.interval >= 0);
    debug_assert!(schedule.repetitions >= 0);

    // EF' = EF + (0.1 - (5-q) * (0.08 + (5-q) * 0.02)), applied on every
    // review, then floored at 1.3
    let miss = (5 - quality) as f32;
    let ease_factor =
        (schedule.ease_factor + (0.1 - miss * (0.08 + miss * 0.02))).max(MIN_EASE_FACTOR);

    let (interval, repetitions) = if quality < 3 {
        // Failed: progress resets, the card is seen again tomorrow
        (1, 0)
    } else {
        let repetitions = schedule.repetitions + 1;
        let interval = match repetitions {
            1 => 1,
            2 => 6,
            // f32::round is half-away-from-zero, which is the rounding
            // rule this scheduler commits to (12.5 days becomes 13)
            _ => (schedule.interval as f32 * ease_factor).round() as i32,
        };
        (interval, repetitions)
    };

    CardSchedule {
        card_id: schedule.card_id,
        interval,
        ease_factor,
        repetitions,
        last_reviewed: Some(now),
        next_review: Some(now + Duration::days(interval as i64)),
    }
}

/// Calculate the prospective interval for each rating
///
/// Used to label the review buttons: returns the interval each of
/// Wrong, Hard, Good, Easy would assign, in that order.
pub fn preview_intervals(schedule: &CardSchedule, now: DateTime<Utc>) -> [i32; 4] {
    let wrong = calculate_next_review(schedule, ReviewRating::Wrong.quality(), now).interval;
    let hard = calculate_next_review(schedule, ReviewRating::Hard.quality(), now).interval;
    let good = calculate_next_review(schedule, ReviewRating::Good.quality(), now).interval;
    let easy = calculate_next_review(schedule, ReviewRating::Easy.quality(), now).interval;

    [wrong, hard, good, easy]
}

/// Format an interval in days to a compact human-readable string
pub fn format_interval(days: i32) -> String {
    match days {
        0 => "now".to_string(),
        d if d < 7 => format!("{}d", d),
        d if d < 30 => format!("{}w", d / 7),
        d if d < 365 => format!("{}mo", d / 30),
        d => format!("{}y", d / 365),
    }
}
