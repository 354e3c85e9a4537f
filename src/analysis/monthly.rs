use std::collections::BTreeMap;

use crate::config::constants::HOURS_PER_DAY;
use crate::config::pv_config::PvConfig;
use crate::core::generation::{mean_defined, reference_daily, sum_defined};
use crate::models::channel::ChannelTable;

/// One corrected-model day: 24 hourly estimates plus their sum.
#[derive(Debug, Clone)]
pub struct DayGeneration {
    pub hours: [Option<f64>; HOURS_PER_DAY],
    pub daily_total: Option<f64>,
}

/// Monthly calibration row. `model_integral` is the month's sum of hourly-
/// model daily totals; `reference_total` the month's sum of standard-
/// condition daily estimates; `correction` their ratio. `mean_temperature`
/// is carried for reporting only.
#[derive(Debug, Clone)]
pub struct MonthlySummary {
    pub month: u32,
    pub model_integral: Option<f64>,
    pub reference_total: Option<f64>,
    pub mean_temperature: Option<f64>,
    pub correction: Option<f64>,
}

/// Sums the hourly model's daily totals into per-month integrals.
pub fn model_integrals(
    generation: &BTreeMap<(u32, u32), DayGeneration>,
) -> BTreeMap<u32, Option<f64>> {
    let mut totals: BTreeMap<u32, Option<f64>> = BTreeMap::new();
    for ((month, _day), day_gen) in generation {
        let entry = totals.entry(*month).or_insert(None);
        *entry = sum_defined([*entry, day_gen.daily_total]);
    }
    totals
}

/// Applies the standard-condition formula to each solar day's total
/// irradiance and sums per month.
pub fn reference_totals(config: &PvConfig, solar: &ChannelTable) -> BTreeMap<u32, Option<f64>> {
    let mut totals: BTreeMap<u32, Option<f64>> = BTreeMap::new();
    for ((month, _day), series) in solar.iter() {
        let day_total = sum_defined(series.values.iter().copied());
        let day_reference = reference_daily(config, day_total);
        let entry = totals.entry(*month).or_insert(None);
        *entry = sum_defined([*entry, day_reference]);
    }
    totals
}

/// Monthly mean of the daily average temperatures, as the original tabulates
/// alongside the irradiance integral.
pub fn mean_temperatures(temperature: &ChannelTable) -> BTreeMap<u32, Option<f64>> {
    let mut daily_means: BTreeMap<u32, Vec<Option<f64>>> = BTreeMap::new();
    for ((month, _day), series) in temperature.iter() {
        daily_means
            .entry(*month)
            .or_default()
            .push(mean_defined(series.values.iter().copied()));
    }
    daily_means
        .into_iter()
        .map(|(month, means)| (month, mean_defined(means)))
        .collect()
}

/// Joins the monthly quantities and derives the correction factor
/// reference / integral. A zero or undefined integral gives an undefined
/// factor; it must propagate as missing, never collapse to 1.0.
pub fn summarize_months(
    generation: &BTreeMap<(u32, u32), DayGeneration>,
    config: &PvConfig,
    solar: &ChannelTable,
    temperature: &ChannelTable,
) -> BTreeMap<u32, MonthlySummary> {
    let integrals = model_integrals(generation);
    let references = reference_totals(config, solar);
    let temperatures = mean_temperatures(temperature);

    integrals
        .into_iter()
        .map(|(month, model_integral)| {
            let reference_total = references.get(&month).copied().flatten();
            let correction = match (reference_total, model_integral) {
                (Some(reference), Some(integral)) if integral != 0.0 => {
                    Some(reference / integral)
                }
                _ => None,
            };
            let summary = MonthlySummary {
                month,
                model_integral,
                reference_total,
                mean_temperature: temperatures.get(&month).copied().flatten(),
                correction,
            };
            (month, summary)
        })
        .collect()
}

/// Multiplies every hourly value by its month's correction factor. An
/// undefined factor poisons the whole month's corrected hours.
pub fn apply_correction(
    generation: &BTreeMap<(u32, u32), DayGeneration>,
    summaries: &BTreeMap<u32, MonthlySummary>,
) -> BTreeMap<(u32, u32), [Option<f64>; HOURS_PER_DAY]> {
    generation
        .iter()
        .map(|(&(month, day), day_gen)| {
            let factor = summaries.get(&month).and_then(|s| s.correction);
            let mut corrected = [None; HOURS_PER_DAY];
            if let Some(factor) = factor {
                for (h, value) in day_gen.hours.iter().enumerate() {
                    corrected[h] = value.map(|v| v * factor);
                }
            }
            ((month, day), corrected)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(hours: Option<f64>) -> DayGeneration {
        DayGeneration {
            hours: [hours; HOURS_PER_DAY],
            daily_total: hours.map(|v| v * HOURS_PER_DAY as f64),
        }
    }

    #[test]
    fn integrals_sum_daily_totals_per_month() {
        let mut generation = BTreeMap::new();
        generation.insert((1, 1), day(Some(1.0)));
        generation.insert((1, 2), day(Some(2.0)));
        generation.insert((2, 1), day(None));
        let integrals = model_integrals(&generation);
        assert_eq!(integrals[&1], Some(72.0));
        assert_eq!(integrals[&2], None);
    }

    #[test]
    fn zero_integral_gives_undefined_correction() {
        let mut generation = BTreeMap::new();
        generation.insert(
            (3, 1),
            DayGeneration {
                hours: [Some(0.0); HOURS_PER_DAY],
                daily_total: Some(0.0),
            },
        );
        let summaries = {
            let mut map = BTreeMap::new();
            map.insert(
                3,
                MonthlySummary {
                    month: 3,
                    model_integral: Some(0.0),
                    reference_total: Some(5.0),
                    mean_temperature: None,
                    correction: None,
                },
            );
            map
        };
        let corrected = apply_correction(&generation, &summaries);
        assert_eq!(corrected[&(3, 1)], [None; HOURS_PER_DAY]);
    }

    #[test]
    fn correction_scales_every_hour() {
        let mut generation = BTreeMap::new();
        let mut hours = [Some(2.0); HOURS_PER_DAY];
        hours[5] = None;
        generation.insert(
            (7, 10),
            DayGeneration {
                hours,
                daily_total: sum_defined(hours),
            },
        );
        let mut summaries = BTreeMap::new();
        summaries.insert(
            7,
            MonthlySummary {
                month: 7,
                model_integral: Some(46.0),
                reference_total: Some(23.0),
                mean_temperature: Some(24.0),
                correction: Some(0.5),
            },
        );
        let corrected = apply_correction(&generation, &summaries);
        let row = &corrected[&(7, 10)];
        assert_eq!(row[0], Some(1.0));
        assert_eq!(row[5], None); // missing hour stays missing, not zero
    }
}
