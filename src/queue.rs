//! Due-queue ordering and review statistics
//!
//! Pure helpers over schedule slices; the caller loads the schedules and
//! decides what to do with the ordering.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::CardSchedule;

/// Aggregate counts over a set of card schedules
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewStats {
    pub total_cards: usize,
    /// Cards never reviewed
    pub new_cards: usize,
    /// Cards with at least one review behind them
    pub scheduled_cards: usize,
    /// Cards due at the given time (new cards included)
    pub due_cards: usize,
}

/// Select the schedules due for review, oldest due first
///
/// Never-reviewed cards have no `next_review` and sort ahead of
/// everything else.
pub fn due_schedules<'a>(
    schedules: &'a [CardSchedule],
    now: DateTime<Utc>,
) -> Vec<&'a CardSchedule> {
    let mut due: Vec<&CardSchedule> = schedules.iter().filter(|s| s.is_due(now)).collect();
    due.sort_by(|a, b| a.next_review.cmp(&b.next_review));
    due
}

/// Compute aggregate statistics for a set of card schedules
pub fn review_stats(schedules: &[CardSchedule], now: DateTime<Utc>) -> ReviewStats {
    let mut stats = ReviewStats {
        total_cards: schedules.len(),
        ..Default::default()
    };

    for schedule in schedules {
        if schedule.is_new() {
            stats.new_cards += 1;
        } else {
            stats.scheduled_cards += 1;
        }
        if schedule.is_due(now) {
            stats.due_cards += 1;
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use uuid::Uuid;

    fn reviewed(now: DateTime<Utc>, days_until_due: i64) -> CardSchedule {
        let mut schedule = CardSchedule::new(Uuid::new_v4());
        schedule.interval = days_until_due.max(1) as i32;
        schedule.repetitions = 1;
        schedule.last_reviewed = Some(now - Duration::days(1));
        schedule.next_review = Some(now + Duration::days(days_until_due));
        schedule
    }

    #[test]
    fn test_due_ordering_oldest_first() {
        let now = Utc::now();
        let overdue_far = reviewed(now, -5);
        let overdue_near = reviewed(now, -1);
        let not_due = reviewed(now, 3);
        let fresh = CardSchedule::new(Uuid::new_v4());

        let schedules = vec![
            not_due.clone(),
            overdue_near.clone(),
            fresh.clone(),
            overdue_far.clone(),
        ];
        let due = due_schedules(&schedules, now);

        let ids: Vec<_> = due.iter().map(|s| s.card_id).collect();
        assert_eq!(ids, vec![fresh.card_id, overdue_far.card_id, overdue_near.card_id]);
    }

    #[test]
    fn test_due_includes_exactly_due() {
        let now = Utc::now();
        let schedules = vec![reviewed(now, 0)];
        assert_eq!(due_schedules(&schedules, now).len(), 1);
    }

    #[test]
    fn test_stats_buckets() {
        let now = Utc::now();
        let schedules = vec![
            CardSchedule::new(Uuid::new_v4()),
            reviewed(now, -2),
            reviewed(now, 4),
        ];

        let stats = review_stats(&schedules, now);
        assert_eq!(
            stats,
            ReviewStats {
                total_cards: 3,
                new_cards: 1,
                scheduled_cards: 2,
                due_cards: 2,
            }
        );
    }

    #[test]
    fn test_stats_empty() {
        assert_eq!(review_stats(&[], Utc::now()), ReviewStats::default());
    }
}
