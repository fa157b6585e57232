/// Движок оптимального времени уведомлений

pub mod aggregator;
pub mod composer;
pub mod matcher;
pub mod selector;

pub use aggregator::ActivityAggregator;
pub use composer::ScheduleComposer;
pub use matcher::WindowMatcher;
pub use selector::TopHourSelector;

use chrono::{DateTime, Utc};

use crate::error::SchedulerError;
use crate::types::{ActivityEvent, ScheduleDecision, SchedulerConfig, TimeWindow};

/// Конвейер без состояния: агрегация → топ-N → окна → решение.
/// Идентификаторы пользователей и конфигурация передаются в вызов,
/// а не хранятся в полях
pub struct OptimalTimeScheduler {
    config: SchedulerConfig,
    aggregator: ActivityAggregator,
    selector: TopHourSelector,
    matcher: WindowMatcher,
    composer: ScheduleComposer,
}

impl OptimalTimeScheduler {
    /// Конфигурация проверяется здесь один раз (fail fast);
    /// разреженные или пустые данные дальше ошибок не дают
    pub fn new(config: SchedulerConfig) -> Result<Self, SchedulerError> {
        let selector = TopHourSelector::new(config.top_n, config.fallback_hours.clone())?;
        let matcher = WindowMatcher::new(config.default_hour)?;
        Ok(Self {
            config,
            aggregator: ActivityAggregator::new(),
            selector,
            matcher,
            composer: ScheduleComposer::new(),
        })
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Ранжированные кандидаты: ровно top_n часов, лучшие первыми
    pub fn calculate_optimal_times(&self, events: &[ActivityEvent]) -> Vec<i32> {
        let histogram = self.aggregator.aggregate(events);
        self.selector.select_top_hours(&histogram)
    }

    /// Полный конвейер: события друзей + окна пользователя → решение.
    /// now инжектируется для тестируемости
    pub fn schedule_notification(
        &self,
        events: &[ActivityEvent],
        windows: &[TimeWindow],
        now: DateTime<Utc>,
    ) -> Result<ScheduleDecision, SchedulerError> {
        let optimal_hours = self.calculate_optimal_times(events);
        let selected_hour = self.matcher.select_hour(&optimal_hours, windows)?;
        self.composer.compose(selected_hour, now)
    }
}
