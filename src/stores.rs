/// Хранилища активности и предпочтений — границы движка.
/// В продакшене за этими трейтами стоит бэкенд-хранилище,
/// здесь — потокобезопасные реализации в памяти

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use crate::types::{ActivityEvent, TimeWindow};

pub trait ActivityEventStore: Send + Sync {
    /// Запись события; без метки времени подставляется "сейчас"
    fn record(&self, event: ActivityEvent);

    /// События заданных пользователей, новые первыми, не больше max_count.
    /// Фильтрация популяции (друзья) — забота вызывающего
    fn fetch_recent(&self, user_ids: &[String], max_count: usize) -> Vec<ActivityEvent>;
}

pub trait PreferenceStore: Send + Sync {
    fn set_preferred_windows(&self, user_id: &str, windows: Vec<String>);

    /// Разобранные окна пользователя; битые строки пропускаются,
    /// неизвестный пользователь дает пустой список (не ошибка)
    fn preferred_windows(&self, user_id: &str) -> Vec<TimeWindow>;
}

pub struct InMemoryActivityStore {
    events: RwLock<Vec<ActivityEvent>>,
}

impl InMemoryActivityStore {
    pub fn new() -> Self {
        Self {
            events: RwLock::new(Vec::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.events.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.read().is_empty()
    }
}

impl Default for InMemoryActivityStore {
    fn default() -> Self {
        Self::new()
    }
}

fn event_time(event: &ActivityEvent) -> Option<DateTime<Utc>> {
    let raw = event.timestamp.as_deref()?;
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|ts| ts.with_timezone(&Utc))
}

impl ActivityEventStore for InMemoryActivityStore {
    fn record(&self, mut event: ActivityEvent) {
        if event.timestamp.is_none() {
            event.timestamp = Some(Utc::now().to_rfc3339());
        }
        self.events.write().push(event);
    }

    fn fetch_recent(&self, user_ids: &[String], max_count: usize) -> Vec<ActivityEvent> {
        let events = self.events.read();
        let mut matching: Vec<ActivityEvent> = events
            .iter()
            .filter(|e| user_ids.contains(&e.user_id))
            .cloned()
            .collect();

        // Новые первыми; события без разборной метки уходят в конец
        matching.sort_by(|a, b| event_time(b).cmp(&event_time(a)));
        matching.truncate(max_count);
        matching
    }
}

pub struct InMemoryPreferenceStore {
    windows: RwLock<HashMap<String, Vec<String>>>,
}

impl InMemoryPreferenceStore {
    pub fn new() -> Self {
        Self {
            windows: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryPreferenceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for InMemoryPreferenceStore {
    fn set_preferred_windows(&self, user_id: &str, windows: Vec<String>) {
        self.windows.write().insert(user_id.to_string(), windows);
    }

    fn preferred_windows(&self, user_id: &str) -> Vec<TimeWindow> {
        let windows = self.windows.read();
        windows
            .get(user_id)
            .map(|raw| raw.iter().filter_map(|w| TimeWindow::parse(w)).collect())
            .unwrap_or_default()
    }
}
