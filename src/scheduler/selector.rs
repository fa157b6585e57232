/// Выбор топ-N часов по гистограмме активности

use crate::error::SchedulerError;
use crate::types::HourHistogram;

pub struct TopHourSelector {
    top_n: usize,
    fallback_hours: Vec<i32>,
}

impl TopHourSelector {
    /// Проверяет конфигурацию один раз, дальше выбор безошибочный
    pub fn new(top_n: usize, fallback_hours: Vec<i32>) -> Result<Self, SchedulerError> {
        if top_n == 0 {
            return Err(SchedulerError::InvalidTopN);
        }
        if fallback_hours.is_empty() {
            return Err(SchedulerError::EmptyFallbackHours);
        }
        for &hour in &fallback_hours {
            if !(0..=23).contains(&hour) {
                return Err(SchedulerError::HourOutOfRange(hour));
            }
        }
        Ok(Self { top_n, fallback_hours })
    }

    /// Ровно top_n часов по убыванию счетчика. При равенстве побеждает
    /// меньший час (скан 0→23, первый максимум). Когда положительного
    /// сигнала не осталось, позиция заполняется резервным часом;
    /// за пределами списка резерв зацикливается
    pub fn select_top_hours(&self, histogram: &HourHistogram) -> Vec<i32> {
        // Рабочая копия: гистограмма вызывающего не портится
        let mut counts = histogram.to_counts();
        let mut top_hours = Vec::with_capacity(self.top_n);

        for position in 0..self.top_n {
            let mut max_hour = 0;
            for hour in 1..24 {
                if counts[hour] > counts[max_hour] {
                    max_hour = hour;
                }
            }

            if counts[max_hour] > 0 {
                top_hours.push(max_hour as i32);
                counts[max_hour] = -1; // корзина потреблена, больше не выбирается
            } else {
                top_hours.push(self.fallback_hours[position % self.fallback_hours.len()]);
            }
        }

        top_hours
    }
}
