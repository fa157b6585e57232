/// Формирование итогового решения о времени уведомления

use chrono::{DateTime, Timelike, Utc};

use crate::error::SchedulerError;
use crate::types::ScheduleDecision;

pub struct ScheduleComposer;

impl ScheduleComposer {
    pub fn new() -> Self {
        Self
    }

    /// Дата — всегда "сегодня" относительно now в выбранный час,
    /// минуты/секунды/наносекунды обнуляются. Переноса на завтра нет,
    /// даже если час уже прошел (унаследованное поведение)
    pub fn compose(
        &self,
        hour: i32,
        now: DateTime<Utc>,
    ) -> Result<ScheduleDecision, SchedulerError> {
        if !(0..=23).contains(&hour) {
            return Err(SchedulerError::HourOutOfRange(hour));
        }

        let scheduled_date = now
            .with_hour(hour as u32)
            .and_then(|d| d.with_minute(0))
            .and_then(|d| d.with_second(0))
            .and_then(|d| d.with_nanosecond(0))
            .ok_or(SchedulerError::HourOutOfRange(hour))?;

        Ok(ScheduleDecision {
            scheduled_hour: hour,
            scheduled_date,
        })
    }
}

impl Default for ScheduleComposer {
    fn default() -> Self {
        Self::new()
    }
}
