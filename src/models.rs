//! Data models for the spaced repetition scheduler

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Current spaced repetition state for a card
///
/// Owned by the flashcard entity and mutated exactly once per review, by
/// replacing it with the scheduler's output. A freshly created schedule
/// (`ease_factor` 2.5, everything else zero/absent) means the card has
/// never been reviewed and is due immediately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSchedule {
    pub card_id: Uuid,
    /// Current interval in days (0 = not yet scheduled)
    #[serde(default)]
    pub interval: i32,
    /// SM-2 ease factor (default 2.5, never below 1.3)
    #[serde(default = "default_ease_factor")]
    pub ease_factor: f32,
    /// Consecutive successful reviews since the last failure
    #[serde(default)]
    pub repetitions: i32,
    /// When the card was last reviewed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_reviewed: Option<DateTime<Utc>>,
    /// When the card is next due for review
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_review: Option<DateTime<Utc>>,
}

fn default_ease_factor() -> f32 {
    2.5
}

impl CardSchedule {
    pub fn new(card_id: Uuid) -> Self {
        Self {
            card_id,
            interval: 0,
            ease_factor: default_ease_factor(),
            repetitions: 0,
            last_reviewed: None,
            next_review: None,
        }
    }

    /// Check if the card has never been reviewed
    pub fn is_new(&self) -> bool {
        self.last_reviewed.is_none()
    }

    /// Check if the card is due for review
    ///
    /// A card with no scheduled review yet is due immediately.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        match self.next_review {
            Some(due) => due <= now,
            None => true,
        }
    }
}

/// UI-facing review rating
///
/// The review screen exposes four buttons; the algorithm works on the full
/// 0-5 SM-2 quality scale. The mapping is a fixed lookup so the four-value
/// domain stays closed: anything else is rejected, never defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReviewRating {
    /// No recall (raw value 0)
    Wrong,
    /// Correct with serious difficulty (raw value 2)
    Hard,
    /// Correct after hesitation (raw value 3)
    Good,
    /// Perfect response (raw value 5)
    Easy,
}

impl ReviewRating {
    /// Parse a raw rating value from the review submission
    ///
    /// Only `{0, 2, 3, 5}` are recognized; anything else returns the raw
    /// value back so the caller can report it.
    pub fn from_raw(raw: i32) -> Result<Self, i32> {
        match raw {
            0 => Ok(Self::Wrong),
            2 => Ok(Self::Hard),
            3 => Ok(Self::Good),
            5 => Ok(Self::Easy),
            other => Err(other),
        }
    }

    /// SM-2 quality (0-5) for this rating
    pub fn quality(self) -> i32 {
        match self {
            Self::Wrong => 0,
            Self::Hard => 3,
            Self::Good => 4,
            Self::Easy => 5,
        }
    }
}

/// A record of a single review attempt
///
/// Append-only: the caller persists one per submission and never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewEvent {
    pub card_id: Uuid,
    /// Quality rating (0-5, SM-2 scale, post-mapping)
    pub quality: i32,
    /// Interval assigned by this review (days)
    pub interval: i32,
    /// Ease factor after this review
    pub ease_factor: f32,
    /// When the review occurred
    pub reviewed_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_new_schedule_defaults() {
        let schedule = CardSchedule::new(Uuid::new_v4());
        assert_eq!(schedule.interval, 0);
        assert_eq!(schedule.repetitions, 0);
        assert_eq!(schedule.ease_factor, 2.5);
        assert!(schedule.is_new());
        assert!(schedule.is_due(Utc::now()));
    }

    #[test]
    fn test_is_due_respects_next_review() {
        let now = Utc::now();
        let mut schedule = CardSchedule::new(Uuid::new_v4());
        schedule.next_review = Some(now + Duration::days(3));
        assert!(!schedule.is_due(now));
        assert!(schedule.is_due(now + Duration::days(3)));
    }

    #[test]
    fn test_rating_lookup_is_total_over_four_values() {
        assert_eq!(ReviewRating::from_raw(0), Ok(ReviewRating::Wrong));
        assert_eq!(ReviewRating::from_raw(2), Ok(ReviewRating::Hard));
        assert_eq!(ReviewRating::from_raw(3), Ok(ReviewRating::Good));
        assert_eq!(ReviewRating::from_raw(5), Ok(ReviewRating::Easy));

        for raw in [-1, 1, 4, 6, 7, 100] {
            assert_eq!(ReviewRating::from_raw(raw), Err(raw));
        }
    }

    #[test]
    fn test_rating_to_quality_mapping() {
        assert_eq!(ReviewRating::Wrong.quality(), 0);
        assert_eq!(ReviewRating::Hard.quality(), 3);
        assert_eq!(ReviewRating::Good.quality(), 4);
        assert_eq!(ReviewRating::Easy.quality(), 5);
    }

    #[test]
    fn test_schedule_snapshot_shape() {
        // Persisted snapshots are camelCase JSON; absent timestamps are
        // omitted and missing numeric fields fall back to new-card defaults.
        let schedule = CardSchedule::new(Uuid::nil());
        let json = serde_json::to_value(&schedule).unwrap();
        assert_eq!(json["cardId"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(json["easeFactor"], 2.5);
        assert!(json.get("lastReviewed").is_none());
        assert!(json.get("nextReview").is_none());

        let parsed: CardSchedule = serde_json::from_str(
            r#"{"cardId":"00000000-0000-0000-0000-000000000000"}"#,
        )
        .unwrap();
        assert_eq!(parsed, schedule);
    }
}
