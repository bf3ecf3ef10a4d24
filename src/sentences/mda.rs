#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{error::Error, fields::parse_float, frame::RawSentence, sentences::Decode};

/// MDA - Meteorological Composite
///
/// ```text
///         1   2 3   4 5   6 7   8 9   10  11  12 13  14 15  16 17  18 19  20
///         |   | |   | |   | |   | |   |   |   |  |   |  |   |  |   |  |   |
///  $--MDA,x.x,I,x.x,B,x.x,C,x.x,C,x.x,x.x,x.x,C,x.x,T,x.x,M,x.x,N,x.x,M*hh
/// ```
///
/// Every measurement is independently optional; a station that lacks a
/// sensor leaves its fields empty. Pressure in millibars is derived from the
/// bar reading.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct MDA {
    /// Barometric pressure in inches of mercury
    pub pressure_inches: Option<f32>,
    /// Barometric pressure in bars
    pub pressure_bars: Option<f32>,
    /// Barometric pressure in millibars, derived from the bar reading
    pub pressure_millibars: Option<f32>,
    /// Air temperature in degrees Celsius
    pub air_temperature: Option<f32>,
    /// Water temperature in degrees Celsius
    pub water_temperature: Option<f32>,
    /// Relative humidity in percent
    pub relative_humidity: Option<f32>,
    /// Dew point in degrees Celsius
    pub dew_point: Option<f32>,
    /// Wind direction in degrees true
    pub wind_direction_true: Option<f32>,
    /// Wind direction in degrees magnetic
    pub wind_direction_magnetic: Option<f32>,
    /// Wind speed in knots
    pub wind_speed_knots: Option<f32>,
    /// Wind speed in meters per second
    pub wind_speed_mps: Option<f32>,
}

impl Decode for MDA {
    fn decode(sentence: &RawSentence<'_>) -> Result<Self, Error> {
        let pressure_bars = parse_float(sentence.field(3));

        Ok(Self {
            pressure_inches: parse_float(sentence.field(1)),
            pressure_bars,
            pressure_millibars: pressure_bars.map(|bars| bars * 1000.0),
            air_temperature: parse_float(sentence.field(5)),
            water_temperature: parse_float(sentence.field(7)),
            relative_humidity: parse_float(sentence.field(9)),
            dew_point: parse_float(sentence.field(11)),
            wind_direction_true: parse_float(sentence.field(13)),
            wind_direction_magnetic: parse_float(sentence.field(15)),
            wind_speed_knots: parse_float(sentence.field(17)),
            wind_speed_mps: parse_float(sentence.field(19)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::tokenize;

    fn decode(line: &str) -> MDA {
        MDA::decode(&tokenize(line).unwrap()).unwrap()
    }

    #[test]
    fn test_mda_decoding() {
        let mda =
            decode("$WIMDA,29.92,I,1.0132,B,21.5,C,14.0,C,65.0,,12.2,C,235.0,T,221.0,M,11.5,N,5.9,M");

        assert_eq!(mda.pressure_inches, Some(29.92));
        assert_eq!(mda.pressure_bars, Some(1.0132));
        assert!((mda.pressure_millibars.unwrap() - 1013.2).abs() < 1e-3);
        assert_eq!(mda.air_temperature, Some(21.5));
        assert_eq!(mda.water_temperature, Some(14.0));
        assert_eq!(mda.relative_humidity, Some(65.0));
        assert_eq!(mda.dew_point, Some(12.2));
        assert_eq!(mda.wind_direction_true, Some(235.0));
        assert_eq!(mda.wind_direction_magnetic, Some(221.0));
        assert_eq!(mda.wind_speed_knots, Some(11.5));
        assert_eq!(mda.wind_speed_mps, Some(5.9));
    }

    #[test]
    fn test_mda_sparse_station() {
        // A wind-only station: pressure and temperature sensors absent.
        let mda = decode("$WIMDA,,,,,,,,,,,,,235.0,T,221.0,M,11.5,N,5.9,M");

        assert_eq!(mda.pressure_inches, None);
        assert_eq!(mda.pressure_bars, None);
        assert_eq!(mda.pressure_millibars, None);
        assert_eq!(mda.air_temperature, None);
        assert_eq!(mda.wind_direction_true, Some(235.0));
        assert_eq!(mda.wind_speed_knots, Some(11.5));
    }

    #[test]
    fn test_mda_millibars_follow_bars() {
        let mda = decode("$WIMDA,29.92,I,,B,21.5,C,,,,,,,,,,,,,,");
        assert_eq!(mda.pressure_bars, None);
        assert_eq!(mda.pressure_millibars, None);
    }
}
