// NEDO File Layout Constants
pub const KEY_COLUMNS: usize = 4;                  // element code, month, day, year
pub const HOURS_PER_DAY: usize = 24;
pub const SUMMARY_COLUMNS: usize = 5;              // max, min, sum, avg, day of year
pub const TOTAL_COLUMNS: usize = KEY_COLUMNS + HOURS_PER_DAY + SUMMARY_COLUMNS;

// Element Codes Consumed
pub const ELEMENT_CODE_SOLAR: u32 = 1;             // global solar irradiance
pub const ELEMENT_CODE_TEMPERATURE: u32 = 5;       // air temperature

// Unit Conversion Factors
pub const SOLAR_RAW_TO_KWH_M2: f64 = 0.01 / 3.6;   // 0.01 MJ/m² -> kWh/m²
pub const TEMP_RAW_TO_CELSIUS: f64 = 0.1;          // 0.1 °C -> °C

// Generation Parameter Defaults (JIS-style estimation)
pub const DEFAULT_K: f64 = 0.95;                   // system derating coefficient
pub const DEFAULT_PAS: f64 = 10.0;                 // receiving surface area in m²
pub const DEFAULT_GS: f64 = 1.0;                   // standard irradiance in kWh/m²
pub const DEFAULT_ALPHA_PMAX: f64 = -0.0035;       // temperature coefficient as fraction per °C
pub const DEFAULT_DELTA_T: f64 = 25.0;             // temperature offset in °C
