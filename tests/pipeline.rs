use nedopv::config::pv_config::PvConfig;
use nedopv::core::pipeline::PvEstimate;
use nedopv::data::nedo_loader::{load_nedo_bytes, NedoLoadError};

fn nedo_row(code: u32, month: u32, day: u32, year: u32, cells: &[&str; 24]) -> String {
    format!(
        "{},{},{},{},{},0,0,0,0,1",
        code,
        month,
        day,
        year,
        cells.join(",")
    )
}

fn uniform_row(code: u32, month: u32, day: u32, cell: &str) -> String {
    nedo_row(code, month, day, 2020, &[cell; 24])
}

fn nedo_file(rows: &[String]) -> Vec<u8> {
    // Shift-JIS header line as a real NEDO export carries one; the data
    // rows themselves are ASCII.
    let mut bytes: Vec<u8> = vec![0x97, 0x76, 0x91, 0x66, b',', 0x8c, 0x8e, b'\n'];
    for row in rows {
        bytes.extend_from_slice(row.as_bytes());
        bytes.push(b'\n');
    }
    bytes
}

fn neutral_config() -> PvConfig {
    PvConfig {
        k: 1.0,
        pas: 1.0,
        gs: 1.0,
        alpha_pmax: 0.0,
        delta_t: 0.0,
    }
}

#[test]
fn end_to_end_round_trip() {
    let bytes = nedo_file(&[
        uniform_row(1, 6, 15, "100"),
        uniform_row(5, 6, 15, "200"),
    ]);
    let data = load_nedo_bytes(&bytes).expect("file should load");
    let estimate = PvEstimate::compute(&data, &neutral_config());

    // Uncorrected hourly value 100 * 0.01 / 3.6, and with a single month the
    // correction factor is 1 under neutral parameters, so the corrected
    // curve matches the spec figures directly.
    let curve = estimate.corrected_day_curve(6, 15).expect("day exists");
    for (hour, value) in &curve {
        assert!(*hour >= 1 && *hour <= 24);
        assert!(
            (value.unwrap() - 0.27778).abs() < 1e-4,
            "hour {} should be ~0.2778, got {:?}",
            hour,
            value
        );
    }
    let day = estimate.day_generation(6, 15).unwrap();
    assert!((day.daily_total.unwrap() - 6.6667).abs() < 1e-3);
}

#[test]
fn monthly_comparison_is_sorted_and_complete() {
    let bytes = nedo_file(&[
        uniform_row(1, 11, 1, "80"),
        uniform_row(5, 11, 1, "120"),
        uniform_row(1, 2, 9, "40"),
        uniform_row(5, 2, 9, "50"),
        uniform_row(1, 7, 20, "300"),
        uniform_row(5, 7, 20, "280"),
    ]);
    let data = load_nedo_bytes(&bytes).unwrap();
    let estimate = PvEstimate::compute(&data, &PvConfig::default());

    let comparison = estimate.monthly_comparison();
    let months: Vec<u32> = comparison.iter().map(|(m, _, _)| *m).collect();
    assert_eq!(months, vec![2, 7, 11]);
    for (month, reference, integral) in comparison {
        assert!(reference.is_some(), "month {} reference missing", month);
        assert!(integral.is_some(), "month {} integral missing", month);
    }
    assert_eq!(estimate.available_months(), vec![2, 7, 11]);
}

#[test]
fn sensor_dropout_degrades_gracefully() {
    let mut solar_cells = ["100"; 24];
    solar_cells[3] = "--";
    solar_cells[4] = "";
    let bytes = nedo_file(&[
        nedo_row(1, 6, 15, 2020, &solar_cells),
        uniform_row(5, 6, 15, "200"),
    ]);
    let data = load_nedo_bytes(&bytes).unwrap();
    let estimate = PvEstimate::compute(&data, &neutral_config());

    let day = estimate.day_generation(6, 15).unwrap();
    assert!(day.hours[3].is_none());
    assert!(day.hours[4].is_none());
    assert!(day.hours[5].is_some());
    // Daily total counts the 22 defined hours, not 24 with zeros.
    assert!((day.daily_total.unwrap() - 22.0 * 100.0 * 0.01 / 3.6).abs() < 1e-6);
}

#[test]
fn wrong_layout_fails_before_any_table_exists() {
    let bytes = nedo_file(&[String::from("1,6,15,2020,100,200,300")]);
    match load_nedo_bytes(&bytes) {
        Err(NedoLoadError::FormatError { .. }) => {}
        other => panic!("expected FormatError, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn corrected_curve_not_found_for_absent_day() {
    let bytes = nedo_file(&[
        uniform_row(1, 6, 15, "100"),
        uniform_row(5, 6, 15, "200"),
    ]);
    let data = load_nedo_bytes(&bytes).unwrap();
    let estimate = PvEstimate::compute(&data, &PvConfig::default());
    assert!(estimate.corrected_day_curve(6, 16).is_none());
    assert!(estimate.available_days(6).contains(&15));
}

#[test]
fn channel_mismatch_produces_undefined_not_misaligned_values() {
    // Temperature rows arrive in a different order and one solar day has no
    // temperature counterpart at all; the key-based join must pair dates
    // correctly and leave the unmatched day undefined.
    let bytes = nedo_file(&[
        uniform_row(1, 6, 15, "100"),
        uniform_row(1, 6, 16, "100"),
        uniform_row(5, 6, 16, "300"),
    ]);
    let data = load_nedo_bytes(&bytes).unwrap();
    let config = PvConfig {
        alpha_pmax: -0.0035,
        ..neutral_config()
    };
    let estimate = PvEstimate::compute(&data, &config);

    let unmatched = estimate.day_generation(6, 15).unwrap();
    assert!(unmatched.hours.iter().all(|h| h.is_none()));
    assert!(unmatched.daily_total.is_none());

    let matched = estimate.day_generation(6, 16).unwrap();
    let expected = 1.0 * 1.0 * (100.0 * 0.01 / 3.6) * (1.0 + -0.0035 * 30.0) / 1.0;
    assert!((matched.hours[0].unwrap() - expected).abs() < 1e-9);
}

#[test]
fn alpha_makes_correction_factor_nontrivial() {
    // With a negative temperature coefficient the hourly model sits below
    // the standard-condition reference at warm temperatures, so the factor
    // must land above 1 and corrected values above the raw model output.
    let bytes = nedo_file(&[
        uniform_row(1, 8, 1, "100"),
        uniform_row(5, 8, 1, "300"),
    ]);
    let data = load_nedo_bytes(&bytes).unwrap();
    let config = PvConfig::default();
    let estimate = PvEstimate::compute(&data, &config);

    let summary = estimate.monthly_summaries()[0].clone();
    let factor = summary.correction.unwrap();
    assert!(factor > 1.0, "expected factor > 1, got {}", factor);

    let raw = estimate.day_generation(8, 1).unwrap().hours[0].unwrap();
    let corrected = estimate.corrected_day_curve(8, 1).unwrap()[0].1.unwrap();
    assert!((corrected - raw * factor).abs() < 1e-9);
}
