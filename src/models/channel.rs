use std::collections::BTreeMap;

use crate::config::constants::{
    ELEMENT_CODE_SOLAR, ELEMENT_CODE_TEMPERATURE, HOURS_PER_DAY, SOLAR_RAW_TO_KWH_M2,
    TEMP_RAW_TO_CELSIUS,
};
use crate::data::nedo_loader::RawRecord;

/// Measurement channels this estimator consumes. Rows with other element
/// codes exist in NEDO files but carry no generation semantics here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Solar,
    Temperature,
}

impl Channel {
    pub fn from_element_code(code: u32) -> Option<Channel> {
        match code {
            ELEMENT_CODE_SOLAR => Some(Channel::Solar),
            ELEMENT_CODE_TEMPERATURE => Some(Channel::Temperature),
            _ => None,
        }
    }

    /// Converts a raw sensor value to physical units for this channel:
    /// solar 0.01 MJ/m² -> kWh/m², temperature 0.1 °C -> °C.
    pub fn convert(&self, raw: Option<f64>) -> Option<f64> {
        let factor = match self {
            Channel::Solar => SOLAR_RAW_TO_KWH_M2,
            Channel::Temperature => TEMP_RAW_TO_CELSIUS,
        };
        raw.map(|v| v * factor)
    }
}

/// One day of converted physical values for a single channel.
#[derive(Debug, Clone)]
pub struct DailySeries {
    pub month: u32,
    pub day: u32,
    pub values: [Option<f64>; HOURS_PER_DAY],
}

impl DailySeries {
    pub fn from_record(channel: Channel, record: &RawRecord) -> Self {
        let mut values = [None; HOURS_PER_DAY];
        for (h, raw) in record.hours.iter().enumerate() {
            values[h] = channel.convert(*raw);
        }
        Self {
            month: record.month,
            day: record.day,
            values,
        }
    }
}

/// Per-channel table keyed by (month, day). Keying by date rather than row
/// position makes the solar/temperature pairing explicit: reordered rows or
/// a day missing from one channel cannot silently misalign the other.
/// Year is not part of the key, so multi-year files merge same-numbered
/// months; the NEDO standard-year files this targets hold a single year.
#[derive(Debug, Default)]
pub struct ChannelTable {
    days: BTreeMap<(u32, u32), DailySeries>,
}

impl ChannelTable {
    pub fn from_records(channel: Channel, records: &[RawRecord]) -> Self {
        let mut days = BTreeMap::new();
        for record in records {
            let series = DailySeries::from_record(channel, record);
            days.insert((record.month, record.day), series);
        }
        Self { days }
    }

    pub fn get(&self, month: u32, day: u32) -> Option<&DailySeries> {
        self.days.get(&(month, day))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&(u32, u32), &DailySeries)> + '_ {
        self.days.iter()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(code: u32, month: u32, day: u32, hours: [Option<f64>; 24]) -> RawRecord {
        RawRecord {
            element_code: code,
            month,
            day,
            year: 2020,
            hours,
        }
    }

    #[test]
    fn solar_conversion_is_exact() {
        let converted = Channel::Solar.convert(Some(100.0)).unwrap();
        assert!((converted - 100.0 * 0.01 / 3.6).abs() < 1e-9);
    }

    #[test]
    fn temperature_conversion_is_exact() {
        let converted = Channel::Temperature.convert(Some(200.0)).unwrap();
        assert!((converted - 20.0).abs() < 1e-9);
    }

    #[test]
    fn missing_value_converts_to_missing() {
        assert_eq!(Channel::Solar.convert(None), None);
        assert_eq!(Channel::Temperature.convert(None), None);
    }

    #[test]
    fn element_code_mapping() {
        assert_eq!(Channel::from_element_code(1), Some(Channel::Solar));
        assert_eq!(Channel::from_element_code(5), Some(Channel::Temperature));
        assert_eq!(Channel::from_element_code(2), None);
    }

    #[test]
    fn table_joins_by_date_not_position() {
        // Rows deliberately out of order; lookup must still find them by key.
        let records = vec![
            record(1, 8, 2, [Some(10.0); 24]),
            record(1, 8, 1, [Some(20.0); 24]),
        ];
        let table = ChannelTable::from_records(Channel::Solar, &records);
        assert_eq!(table.len(), 2);
        let first = table.get(8, 1).unwrap();
        assert!((first.values[0].unwrap() - 20.0 * 0.01 / 3.6).abs() < 1e-9);
        assert!(table.get(8, 3).is_none());
    }
}
