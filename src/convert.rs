//! Unit conversion from survey units to solver SI units.
//!
//! The inversion solver expects observation positions in a depth-positive-down
//! frame, gravity in m/s² and magnetics in Tesla, while surveys report
//! topographic elevation, mGal and nT. Conversion is a pure record-by-record
//! transform with no partial-success mode: callers convert everything first
//! and only then open output files.

use crate::io::SurveyRecord;

/// mGal to m/s².
pub const MGAL_TO_MS2: f64 = 1e-5;

/// nT to Tesla.
pub const NANOTESLA_TO_TESLA: f64 = 1e-9;

/// One converted observation: position plus a single field value in SI units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObservationPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub value: f64,
}

/// Convert survey records into gravity and magnetic observation series.
///
/// The observation depth is the negated topography (depth-positive-down);
/// field values scale by exact powers of ten, so the conversion is bit-exact
/// under IEEE 754. Output order matches input order.
pub fn convert_records(records: &[SurveyRecord]) -> (Vec<ObservationPoint>, Vec<ObservationPoint>) {
    let mut gravity = Vec::with_capacity(records.len());
    let mut magnetic = Vec::with_capacity(records.len());

    for record in records {
        let z = -record.topography;
        gravity.push(ObservationPoint {
            x: record.x,
            y: record.y,
            z,
            value: record.grav * MGAL_TO_MS2,
        });
        magnetic.push(ObservationPoint {
            x: record.x,
            y: record.y,
            z,
            value: record.mag * NANOTESLA_TO_TESLA,
        });
    }

    (gravity, magnetic)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(x: f64, y: f64, topography: f64, grav: f64, mag: f64) -> SurveyRecord {
        SurveyRecord {
            x,
            y,
            topography,
            grav,
            mag,
        }
    }

    #[test]
    fn test_single_record() {
        let (gravity, magnetic) = convert_records(&[record(0.0, 0.0, 50.0, 1.0, 2.0)]);

        assert_eq!(gravity.len(), 1);
        assert_eq!(magnetic.len(), 1);
        assert_eq!(gravity[0].z, -50.0);
        assert_eq!(magnetic[0].z, -50.0);
        assert_eq!(gravity[0].value, 1e-5);
        assert_eq!(magnetic[0].value, 2e-9);
    }

    #[test]
    fn test_conversion_is_bit_exact() {
        let records = [
            record(1.0, 2.0, 3.0, 12.345, 48250.7),
            record(4.0, 5.0, -6.0, -0.25, -13.5),
        ];
        let (gravity, magnetic) = convert_records(&records);

        for (r, g) in records.iter().zip(gravity.iter()) {
            assert_eq!(g.value, r.grav * 1e-5);
            assert_eq!(g.z, -r.topography);
        }
        for (r, m) in records.iter().zip(magnetic.iter()) {
            assert_eq!(m.value, r.mag * 1e-9);
        }
    }

    #[test]
    fn test_order_preserved() {
        let records: Vec<SurveyRecord> = (0..10)
            .map(|i| record(i as f64, 0.0, 0.0, i as f64, i as f64))
            .collect();
        let (gravity, _) = convert_records(&records);

        for (i, g) in gravity.iter().enumerate() {
            assert_eq!(g.x, i as f64);
        }
    }

    #[test]
    fn test_empty_input() {
        let (gravity, magnetic) = convert_records(&[]);
        assert!(gravity.is_empty());
        assert!(magnetic.is_empty());
    }
}
