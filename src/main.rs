use std::error::Error;

use clap::Parser;

use nedopv::analysis::reporting;
use nedopv::cli::cli::Args;
use nedopv::config::pv_config::PvConfig;
use nedopv::core::pipeline::PvEstimate;
use nedopv::data::nedo_loader::load_nedo_csv;
use nedopv::utils::csv_export::CsvExporter;
use nedopv::utils::logging;

fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let args = Args::parse();

    logging::init_logging(args.debug_logging());

    let config = build_config(&args)?;
    println!("NEDO PV Generation Estimator");
    println!(
        "K = {}, PAS = {} m², GS = {} kWh/m², alpha = {} /°C, deltaT = {} °C",
        config.k, config.pas, config.gs, config.alpha_pmax, config.delta_t
    );

    let data = load_nedo_csv(args.input())?;
    let estimate = PvEstimate::compute(&data, &config);

    reporting::print_monthly_summary(&estimate.monthly_summaries());

    if let (Some(month), Some(day)) = (args.month(), args.day()) {
        reporting::print_day_curve(&estimate, month, day);
    }

    if let Some(export_dir) = args.export_dir() {
        let exporter = CsvExporter::new(export_dir)?;
        exporter.export(&estimate)?;
    }

    Ok(())
}

/// Defaults, overridden by the JSON config file when given, overridden in
/// turn by individual flags. The alpha flag is taken in %/°C like the data
/// sheets quote it and stored as a fraction.
fn build_config(args: &Args) -> Result<PvConfig, Box<dyn Error + Send + Sync>> {
    let mut config = match args.config() {
        Some(path) => PvConfig::load(path)?,
        None => PvConfig::default(),
    };
    if let Some(k) = args.k() {
        config.k = k;
    }
    if let Some(pas) = args.pas() {
        config.pas = pas;
    }
    if let Some(gs) = args.gs() {
        config.gs = gs;
    }
    if let Some(alpha_percent) = args.alpha_pmax() {
        config.alpha_pmax = alpha_percent / 100.0;
    }
    if let Some(delta_t) = args.delta_t() {
        config.delta_t = delta_t;
    }
    Ok(config)
}
