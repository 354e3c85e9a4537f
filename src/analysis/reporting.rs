use crate::analysis::monthly::MonthlySummary;
use crate::core::pipeline::PvEstimate;

fn fmt_kwh(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => "--".to_string(),
    }
}

fn fmt_factor(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.4}", v),
        None => "--".to_string(),
    }
}

pub fn print_monthly_summary(summaries: &[&MonthlySummary]) {
    println!("\nMonthly Generation Summary");
    println!("------------------------------------------------------------------");
    println!(
        "{:>5} {:>16} {:>16} {:>12} {:>10}",
        "Month", "Reference [kWh]", "Integral [kWh]", "Mean T [C]", "Factor"
    );
    for summary in summaries {
        println!(
            "{:>5} {:>16} {:>16} {:>12} {:>10}",
            summary.month,
            fmt_kwh(summary.reference_total),
            fmt_kwh(summary.model_integral),
            match summary.mean_temperature {
                Some(t) => format!("{:.1}", t),
                None => "--".to_string(),
            },
            fmt_factor(summary.correction)
        );
    }
    println!("------------------------------------------------------------------");
}

pub fn print_day_curve(estimate: &PvEstimate, month: u32, day: u32) {
    match estimate.corrected_day_curve(month, day) {
        Some(curve) => {
            println!("\nCorrected 24h Generation Curve ({}/{})", month, day);
            println!("----------------------------------------");
            for (hour, value) in curve {
                println!("  {:>2}h: {} kWh", hour, fmt_kwh(value));
            }
            println!("----------------------------------------");
        }
        None => {
            println!(
                "No data for month {} day {} (available months: {:?})",
                month,
                day,
                estimate.available_months()
            );
        }
    }
}
