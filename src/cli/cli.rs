use clap::Parser;

#[derive(Parser)]
#[command(author, version, about = "Estimate PV generation from NEDO meteorological CSV data", long_about = None)]
pub struct Args {
    /// Path to the NEDO-format CSV file (Shift-JIS encoded)
    input: String,

    #[arg(long, help = "System derating coefficient K")]
    k: Option<f64>,

    #[arg(long, help = "Receiving surface area PAS in m²")]
    pas: Option<f64>,

    #[arg(long, help = "Standard irradiance GS in kWh/m²")]
    gs: Option<f64>,

    #[arg(long, help = "Temperature coefficient alpha-pmax in %/°C (e.g. -0.35)")]
    alpha_pmax: Option<f64>,

    #[arg(long, help = "Temperature offset deltaT in °C")]
    delta_t: Option<f64>,

    #[arg(short, long, help = "JSON parameter file; flags override its values")]
    config: Option<String>,

    #[arg(short, long, help = "Month of the day curve to print")]
    month: Option<u32>,

    #[arg(short, long, help = "Day of the day curve to print")]
    day: Option<u32>,

    #[arg(short, long, help = "Directory for CSV export of the result tables")]
    export_dir: Option<String>,

    #[arg(long, default_value_t = false)]
    debug_logging: bool,
}

impl Args {
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn k(&self) -> Option<f64> {
        self.k
    }

    pub fn pas(&self) -> Option<f64> {
        self.pas
    }

    pub fn gs(&self) -> Option<f64> {
        self.gs
    }

    pub fn alpha_pmax(&self) -> Option<f64> {
        self.alpha_pmax
    }

    pub fn delta_t(&self) -> Option<f64> {
        self.delta_t
    }

    pub fn config(&self) -> Option<&str> {
        self.config.as_deref()
    }

    pub fn month(&self) -> Option<u32> {
        self.month
    }

    pub fn day(&self) -> Option<u32> {
        self.day
    }

    pub fn export_dir(&self) -> Option<&str> {
        self.export_dir.as_deref()
    }

    pub fn debug_logging(&self) -> bool {
        self.debug_logging
    }
}
