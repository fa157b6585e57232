/// Сопоставление кандидатов с предпочтительными окнами пользователя

use crate::error::SchedulerError;
use crate::types::TimeWindow;

pub struct WindowMatcher {
    default_hour: i32,
}

impl WindowMatcher {
    pub fn new(default_hour: i32) -> Result<Self, SchedulerError> {
        if !(0..=23).contains(&default_hour) {
            return Err(SchedulerError::HourOutOfRange(default_hour));
        }
        Ok(Self { default_hour })
    }

    /// Первый кандидат (в порядке ранга), попавший хоть в одно окно
    /// (в заданном порядке окон). Без совпадений — кандидат с позиции 0,
    /// без кандидатов вовсе — час по умолчанию. Результат определен всегда
    pub fn select_hour(
        &self,
        candidates: &[i32],
        windows: &[TimeWindow],
    ) -> Result<i32, SchedulerError> {
        for &hour in candidates {
            if !(0..=23).contains(&hour) {
                return Err(SchedulerError::HourOutOfRange(hour));
            }
        }

        for &hour in candidates {
            for window in windows {
                if window.contains(hour) {
                    return Ok(hour);
                }
            }
        }

        match candidates.first() {
            Some(&top) => Ok(top),
            None => Ok(self.default_hour),
        }
    }
}
