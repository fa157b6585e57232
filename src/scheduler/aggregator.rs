/// Агрегация активности по часам суток

use chrono::{DateTime, Timelike};

use crate::types::{ActivityEvent, HourHistogram};

pub struct ActivityAggregator;

impl ActivityAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Раскладывает события по 24 корзинам часа суток.
    /// Час берется из метки как она записана (RFC 3339 со смещением),
    /// без конвертации часового пояса. События без годной метки пропускаются
    pub fn aggregate(&self, events: &[ActivityEvent]) -> HourHistogram {
        let mut histogram = HourHistogram::new();

        for event in events {
            if let Some(raw) = &event.timestamp {
                if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
                    histogram.record(ts.hour() as i32);
                }
            }
        }

        histogram
    }
}

impl Default for ActivityAggregator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(timestamp: Option<&str>) -> ActivityEvent {
        ActivityEvent {
            user_id: "u1".to_string(),
            timestamp: timestamp.map(|t| t.to_string()),
            action: "app_open".to_string(),
        }
    }

    #[test]
    fn empty_input_gives_empty_histogram() {
        let histogram = ActivityAggregator::new().aggregate(&[]);
        assert_eq!(histogram.total(), 0);
    }

    #[test]
    fn counts_events_by_hour_of_day() {
        let events = vec![
            event(Some("2024-03-01T18:05:00Z")),
            event(Some("2024-03-02T18:59:59Z")),
            event(Some("2024-03-03T09:00:00Z")),
        ];
        let histogram = ActivityAggregator::new().aggregate(&events);
        assert_eq!(histogram.count(18), 2);
        assert_eq!(histogram.count(9), 1);
        assert_eq!(histogram.total(), 3);
    }

    #[test]
    fn hour_is_taken_as_written_without_conversion() {
        // 18:30+05:00 — это 13:30 UTC, но корзина должна быть 18
        let events = vec![event(Some("2024-03-01T18:30:00+05:00"))];
        let histogram = ActivityAggregator::new().aggregate(&events);
        assert_eq!(histogram.count(18), 1);
        assert_eq!(histogram.count(13), 0);
    }

    #[test]
    fn skips_missing_and_unparseable_timestamps() {
        let events = vec![
            event(None),
            event(Some("not-a-timestamp")),
            event(Some("2024-03-01T07:00:00Z")),
            event(Some("")),
        ];
        let histogram = ActivityAggregator::new().aggregate(&events);
        assert_eq!(histogram.count(7), 1);
        assert_eq!(histogram.total(), 1);
    }

    #[test]
    fn histogram_sum_equals_parseable_event_count() {
        let mut events = Vec::new();
        for i in 0..50 {
            events.push(event(Some(&format!("2024-03-01T{:02}:10:00Z", i % 24))));
        }
        events.push(event(None));
        events.push(event(Some("garbage")));

        let histogram = ActivityAggregator::new().aggregate(&events);
        assert_eq!(histogram.total(), 50);
    }

    #[test]
    fn aggregation_is_deterministic() {
        let events = vec![
            event(Some("2024-03-01T10:00:00Z")),
            event(Some("2024-03-01T15:00:00Z")),
            event(Some("2024-03-01T10:30:00Z")),
        ];
        let first = ActivityAggregator::new().aggregate(&events);
        let second = ActivityAggregator::new().aggregate(&events);
        assert_eq!(first, second);
    }
}
