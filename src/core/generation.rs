use crate::config::pv_config::PvConfig;

/// Temperature-corrected hourly generation in kWh:
/// K * PAS * S_h * (1 + alpha * (T_h + deltaT)) / GS.
/// A missing irradiance or temperature makes that hour undefined; other
/// hours of the same day are unaffected.
pub fn hourly_generation(
    config: &PvConfig,
    solar_kwh_m2: Option<f64>,
    temp_c: Option<f64>,
) -> Option<f64> {
    let s = solar_kwh_m2?;
    let t = temp_c?;
    Some(config.k * config.pas * s * (1.0 + config.alpha_pmax * (t + config.delta_t)) / config.gs)
}

/// Standard-condition daily estimate from the day's total irradiance:
/// K * PAS * S_day * (1 + alpha * deltaT) / GS. The ambient temperature
/// deliberately takes no part here; this is the nameplate figure the hourly
/// model is calibrated against.
pub fn reference_daily(config: &PvConfig, solar_day_total_kwh_m2: Option<f64>) -> Option<f64> {
    let s = solar_day_total_kwh_m2?;
    Some(config.k * config.pas * s * (1.0 + config.alpha_pmax * config.delta_t) / config.gs)
}

/// Sum over the defined values only. No defined values means no sum, not a
/// zero sum: a fully dropped-out day must stay distinguishable from a dark
/// one.
pub fn sum_defined<I: IntoIterator<Item = Option<f64>>>(values: I) -> Option<f64> {
    let mut total = None;
    for v in values {
        if let Some(v) = v {
            total = Some(total.unwrap_or(0.0) + v);
        }
    }
    total
}

/// Mean over the defined values only, None when nothing is defined.
pub fn mean_defined<I: IntoIterator<Item = Option<f64>>>(values: I) -> Option<f64> {
    let mut total = 0.0;
    let mut count = 0usize;
    for v in values.into_iter().flatten() {
        total += v;
        count += 1;
    }
    if count > 0 {
        Some(total / count as f64)
    } else {
        None
    }
}
