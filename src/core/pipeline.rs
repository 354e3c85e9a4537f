use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::analysis::monthly::{
    apply_correction, summarize_months, DayGeneration, MonthlySummary,
};
use crate::config::constants::HOURS_PER_DAY;
use crate::config::pv_config::PvConfig;
use crate::core::generation::{hourly_generation, sum_defined};
use crate::data::nedo_loader::NedoData;
use crate::models::channel::{Channel, ChannelTable};

/// Result of one full estimation run. All tables are built during
/// `compute` and never mutated afterwards, so every query is a pure read
/// and repeated queries are idempotent.
#[derive(Debug)]
pub struct PvEstimate {
    generation: BTreeMap<(u32, u32), DayGeneration>,
    summaries: BTreeMap<u32, MonthlySummary>,
    corrected: BTreeMap<(u32, u32), [Option<f64>; HOURS_PER_DAY]>,
}

impl PvEstimate {
    /// Runs the whole pipeline: unit conversion, the temperature-corrected
    /// hourly model, monthly aggregation of both the model integral and the
    /// standard-condition reference, and reapplication of the monthly
    /// correction factor to every hour.
    pub fn compute(data: &NedoData, config: &PvConfig) -> Self {
        let solar = ChannelTable::from_records(Channel::Solar, &data.solar);
        let temperature = ChannelTable::from_records(Channel::Temperature, &data.temperature);
        debug!(
            solar_days = solar.len(),
            temperature_days = temperature.len(),
            "built channel tables"
        );

        // Hourly model over every solar day, matched to temperature by
        // (month, day). A day absent from the temperature channel leaves
        // all of its hours undefined.
        let mut generation = BTreeMap::new();
        for (&(month, day), solar_series) in solar.iter() {
            let temp_series = temperature.get(month, day);
            let mut hours = [None; HOURS_PER_DAY];
            for h in 0..HOURS_PER_DAY {
                let t = temp_series.and_then(|s| s.values[h]);
                hours[h] = hourly_generation(config, solar_series.values[h], t);
            }
            let daily_total = sum_defined(hours);
            generation.insert((month, day), DayGeneration { hours, daily_total });
        }

        let summaries = summarize_months(&generation, config, &solar, &temperature);
        let corrected = apply_correction(&generation, &summaries);
        info!(
            days = generation.len(),
            months = summaries.len(),
            "estimation pipeline complete"
        );

        Self {
            generation,
            summaries,
            corrected,
        }
    }

    /// (month, reference_total, model_integral) rows sorted by month, the
    /// pre-correction quantities the comparison chart plots.
    pub fn monthly_comparison(&self) -> Vec<(u32, Option<f64>, Option<f64>)> {
        self.summaries
            .values()
            .map(|s| (s.month, s.reference_total, s.model_integral))
            .collect()
    }

    /// Full monthly rows including correction factor and mean temperature.
    pub fn monthly_summaries(&self) -> Vec<&MonthlySummary> {
        self.summaries.values().collect()
    }

    /// The corrected 24-hour curve for one day, hours numbered 1..24.
    /// A (month, day) absent from the input yields None, never a default
    /// curve.
    pub fn corrected_day_curve(&self, month: u32, day: u32) -> Option<Vec<(u32, Option<f64>)>> {
        self.corrected.get(&(month, day)).map(|hours| {
            hours
                .iter()
                .enumerate()
                .map(|(h, v)| (h as u32 + 1, *v))
                .collect()
        })
    }

    /// Uncorrected model output for one day.
    pub fn day_generation(&self, month: u32, day: u32) -> Option<&DayGeneration> {
        self.generation.get(&(month, day))
    }

    /// Months present in the solar data, ascending, no duplicates.
    pub fn available_months(&self) -> Vec<u32> {
        let mut months: Vec<u32> = self.summaries.keys().copied().collect();
        months.dedup();
        months
    }

    /// Days of one month present in the solar data, ascending. Empty when
    /// the month is absent.
    pub fn available_days(&self, month: u32) -> Vec<u32> {
        self.generation
            .keys()
            .filter(|(m, _)| *m == month)
            .map(|(_, d)| *d)
            .collect()
    }

    /// Iterates the corrected table in (month, day) order, for export.
    pub fn corrected_days(
        &self,
    ) -> impl Iterator<Item = (&(u32, u32), &[Option<f64>; HOURS_PER_DAY])> + '_ {
        self.corrected.iter()
    }
}
