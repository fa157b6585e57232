/// Типы данных для движка оптимального времени

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Запись активности пользователя (сигнал "друзья онлайн")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEvent {
    pub user_id: String,
    /// RFC 3339; отсутствующая или битая метка просто пропускается при агрегации
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default = "default_action")]
    pub action: String,
}

fn default_action() -> String {
    "app_open".to_string()
}

/// Предпочтительное окно уведомлений, включительно с обеих сторон.
/// Переход через полночь не поддерживается: "22:00-02:00" дает
/// start_hour=22, end_hour=2 и не совпадает ни с одним часом между ними.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start_hour: i32,
    pub end_hour: i32,
}

impl TimeWindow {
    pub fn new(start_hour: i32, end_hour: i32) -> Self {
        Self { start_hour, end_hour }
    }

    /// Разбор строки вида "HH:MM-HH:MM" (минуты игнорируются).
    /// Часы вне 0..=23 считаются некорректными
    pub fn parse(raw: &str) -> Option<Self> {
        let (start_raw, end_raw) = raw.split_once('-')?;
        Some(Self {
            start_hour: parse_hour(start_raw)?,
            end_hour: parse_hour(end_raw)?,
        })
    }

    pub fn contains(&self, hour: i32) -> bool {
        hour >= self.start_hour && hour <= self.end_hour
    }
}

fn parse_hour(part: &str) -> Option<i32> {
    let hour: i32 = part.trim().split(':').next()?.trim().parse().ok()?;
    if (0..=23).contains(&hour) {
        Some(hour)
    } else {
        None
    }
}

/// Гистограмма активности: 24 счетчика, по одному на час суток
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourHistogram {
    counts: [i32; 24],
}

impl HourHistogram {
    pub fn new() -> Self {
        Self { counts: [0; 24] }
    }

    pub fn record(&mut self, hour: i32) {
        if (0..=23).contains(&hour) {
            self.counts[hour as usize] += 1;
        }
    }

    pub fn count(&self, hour: i32) -> i32 {
        if (0..=23).contains(&hour) {
            self.counts[hour as usize]
        } else {
            0
        }
    }

    /// Копия счетчиков — рабочий буфер для выбора топ-N
    pub fn to_counts(&self) -> [i32; 24] {
        self.counts
    }

    pub fn total(&self) -> i64 {
        self.counts.iter().map(|&c| c as i64).sum()
    }
}

impl Default for HourHistogram {
    fn default() -> Self {
        Self::new()
    }
}

/// Решение планировщика: час и дата доставки уведомления
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDecision {
    pub scheduled_hour: i32,
    pub scheduled_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerConfig {
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    /// Резервные часы по позициям, когда в гистограмме не осталось сигнала
    #[serde(default = "default_fallback_hours")]
    pub fallback_hours: Vec<i32>,
    /// Час по умолчанию при полном отсутствии кандидатов
    #[serde(default = "default_hour")]
    pub default_hour: i32,
    /// Лимит, передаваемый хранилищу активности (newest-first)
    #[serde(default = "default_max_events")]
    pub max_events: usize,
}

fn default_top_n() -> usize { 3 }
fn default_fallback_hours() -> Vec<i32> { vec![18, 19, 20] }
fn default_hour() -> i32 { 18 }
fn default_max_events() -> usize { 500 }

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            fallback_hours: default_fallback_hours(),
            default_hour: default_hour(),
            max_events: default_max_events(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetPreferencesInput {
    pub user_id: String,
    pub preferred_windows: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimalTimesInput {
    pub friend_ids: Vec<String>,
    #[serde(default)]
    pub config: Option<SchedulerConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimalTimesOutput {
    pub optimal_hours: Vec<i32>,
    pub events_considered: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleInput {
    pub user_id: String,
    #[serde(default)]
    pub friend_ids: Vec<String>,
    #[serde(default)]
    pub config: Option<SchedulerConfig>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_window_string() {
        assert_eq!(TimeWindow::parse("17:00-19:00"), Some(TimeWindow::new(17, 19)));
        assert_eq!(TimeWindow::parse("9:30-10:00"), Some(TimeWindow::new(9, 10)));
        assert_eq!(TimeWindow::parse("0:00-23:00"), Some(TimeWindow::new(0, 23)));
    }

    #[test]
    fn rejects_malformed_window_strings() {
        assert_eq!(TimeWindow::parse(""), None);
        assert_eq!(TimeWindow::parse("17:00"), None);
        assert_eq!(TimeWindow::parse("abc-def"), None);
        assert_eq!(TimeWindow::parse("25:00-26:00"), None);
    }

    #[test]
    fn window_is_inclusive_on_both_ends() {
        let window = TimeWindow::new(17, 19);
        assert!(!window.contains(16));
        assert!(window.contains(17));
        assert!(window.contains(18));
        assert!(window.contains(19));
        assert!(!window.contains(20));
    }

    #[test]
    fn midnight_wrap_window_matches_nothing_in_between() {
        let window = TimeWindow::parse("22:00-02:00").unwrap();
        assert_eq!(window, TimeWindow::new(22, 2));
        for hour in 3..22 {
            assert!(!window.contains(hour), "hour {} must not match", hour);
        }
        // start > end: даже левая граница не проходит включительный тест
        assert!(!window.contains(22));
        assert!(window.contains(2));
    }

    #[test]
    fn histogram_records_only_valid_hours() {
        let mut histogram = HourHistogram::new();
        histogram.record(0);
        histogram.record(23);
        histogram.record(24);
        histogram.record(-1);
        assert_eq!(histogram.count(0), 1);
        assert_eq!(histogram.count(23), 1);
        assert_eq!(histogram.total(), 2);
    }

    #[test]
    fn config_defaults_match_contract() {
        let config = SchedulerConfig::default();
        assert_eq!(config.top_n, 3);
        assert_eq!(config.fallback_hours, vec![18, 19, 20]);
        assert_eq!(config.default_hour, 18);
        assert_eq!(config.max_events, 500);
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: SchedulerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.top_n, 3);

        let config: SchedulerConfig = serde_json::from_str(r#"{"top_n": 5}"#).unwrap();
        assert_eq!(config.top_n, 5);
        assert_eq!(config.fallback_hours, vec![18, 19, 20]);
    }

    #[test]
    fn activity_event_defaults_action_to_app_open() {
        let event: ActivityEvent = serde_json::from_str(r#"{"user_id": "u1"}"#).unwrap();
        assert_eq!(event.action, "app_open");
        assert_eq!(event.timestamp, None);
    }
}
