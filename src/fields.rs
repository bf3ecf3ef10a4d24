//! # Field Parsers
//!
//! Pure functions converting textual sub-fields into typed values.
//!
//! Numeric fields follow a lenient policy: an empty or unparseable field
//! decodes to `None` ("no value") rather than failing the sentence, since
//! numeric noise should not abort a decode that has other usable fields. The
//! exceptions are spelled out per parser below; structural discriminators
//! (status, unit, and reference letters) are checked by the decoders that own
//! them.

use std::str::FromStr;

use nom::{
    Parser,
    bytes::complete::take_while_m_n,
    character::complete::{char, digit0, digit1},
    combinator::{all_consuming, map_res, opt, recognize},
    sequence::preceded,
};
use time::{Duration, PrimitiveDateTime, Time};

use crate::error::Error;

type IResult<'a, O> = nom::IResult<&'a str, O>;

fn two_digits(i: &str) -> IResult<'_, u8> {
    map_res(
        take_while_m_n(2, 2, |c: char| c.is_ascii_digit()),
        |s: &str| s.parse(),
    )
    .parse(i)
}

/// Seconds with an optional fraction, e.g. `09` or `09.80`.
fn seconds(i: &str) -> IResult<'_, f64> {
    map_res(
        recognize((
            take_while_m_n(2, 2, |c: char| c.is_ascii_digit()),
            opt(preceded(char('.'), digit0)),
        )),
        |s: &str| s.parse(),
    )
    .parse(i)
}

/// Parses an `HHMMSS[.SS]` time-of-day field, rounding to the nearest whole
/// second.
///
/// Rounding is done with `Time` arithmetic, so `"235959.80"` carries over to
/// midnight instead of producing an out-of-range second. Malformed input of
/// any kind yields `None`, never a failure.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::fields::parse_time;
/// use time::Time;
///
/// assert_eq!(parse_time("151209.00"), Time::from_hms(15, 12, 9).ok());
/// assert_eq!(parse_time("151209.80"), Time::from_hms(15, 12, 10).ok());
/// assert_eq!(parse_time(""), None);
/// ```
pub fn parse_time(i: &str) -> Option<Time> {
    let result: IResult<'_, (u8, u8, f64)> =
        all_consuming((two_digits, two_digits, seconds)).parse(i);
    let (_, (hour, minute, secs)) = result.ok()?;

    let base = Time::from_hms(hour, minute, 0).ok()?;
    Some(base + Duration::seconds(secs.round() as i64))
}

/// Combines a `DDMMYY` date field with an `HHMMSS[.SS]` time field into one
/// timestamp. Two-digit years are reported relative to 2000.
///
/// Stricter than [`parse_time`]: this is only invoked where a valid fix is
/// mandatory, so malformed input is a hard failure rather than "no value".
pub fn parse_date_time(date: &str, time: &str) -> Result<PrimitiveDateTime, Error> {
    let bad_date = || Error::FieldValidation {
        field: "date",
        value: date.to_string(),
        expected: "DDMMYY",
    };
    let bad_time = || Error::FieldValidation {
        field: "time",
        value: time.to_string(),
        expected: "HHMMSS[.SS]",
    };

    let result: IResult<'_, (u8, u8, u8)> =
        all_consuming((two_digits, two_digits, two_digits)).parse(date);
    let (_, (day, month, year)) = result.map_err(|_| bad_date())?;

    let result: IResult<'_, (u8, u8, f64)> =
        all_consuming((two_digits, two_digits, seconds)).parse(time);
    let (_, (hour, minute, secs)) = result.map_err(|_| bad_time())?;

    let month = time::Month::try_from(month).map_err(|_| bad_date())?;
    let calendar_date =
        time::Date::from_calendar_date(2000 + year as i32, month, day).map_err(|_| bad_date())?;
    let time_of_day = Time::from_hms(hour, minute, 0).map_err(|_| bad_time())?;

    // Second rounding may carry across midnight; date-time arithmetic keeps
    // the calendar date in step.
    Ok(PrimitiveDateTime::new(calendar_date, time_of_day) + Duration::seconds(secs.round() as i64))
}

/// Converts a geographic coordinate given in degrees/minutes `DDDMM.MMMM`
/// format (e.g. `"12319.943281"` = 123 degrees, 19.943281 minutes) to signed
/// decimal degrees.
///
/// An empty field is "no value" and the literal `"0"` is exactly `0.0`;
/// anything else must match the degrees/minutes grammar or the decode fails
/// with [`Error::CoordinateFormat`].
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::fields::parse_coordinate;
///
/// assert_eq!(parse_coordinate("4530.000"), Ok(Some(45.5)));
/// assert_eq!(parse_coordinate("0"), Ok(Some(0.0)));
/// assert_eq!(parse_coordinate(""), Ok(None));
/// assert!(parse_coordinate("45.5").is_err());
/// ```
pub fn parse_coordinate(dm: &str) -> Result<Option<f64>, Error> {
    if dm.is_empty() {
        return Ok(None);
    }
    if dm == "0" {
        return Ok(Some(0.0));
    }

    let bad = || Error::CoordinateFormat(dm.to_string());

    let result: IResult<'_, (&str, &str)> =
        all_consuming((digit1, recognize(preceded(char('.'), digit1)))).parse(dm);
    let (_, (whole, _)) = result.map_err(|_| bad())?;
    if whole.len() < 3 {
        return Err(bad());
    }

    let degrees: f64 = whole[..whole.len() - 2].parse().map_err(|_| bad())?;
    let minutes: f64 = dm[whole.len() - 2..].parse().map_err(|_| bad())?;

    Ok(Some(degrees + minutes / 60.0))
}

/// Parses a latitude field, negating when the hemisphere letter is `S`.
pub fn parse_latitude(value: &str, hemisphere: &str) -> Result<Option<f64>, Error> {
    let value = parse_coordinate(value)?;
    if hemisphere.eq_ignore_ascii_case("S") {
        Ok(value.map(|v| -v))
    } else {
        Ok(value)
    }
}

/// Parses a longitude field, negating when the hemisphere letter is `W`.
pub fn parse_longitude(value: &str, hemisphere: &str) -> Result<Option<f64>, Error> {
    let value = parse_coordinate(value)?;
    if hemisphere.eq_ignore_ascii_case("W") {
        Ok(value.map(|v| -v))
    } else {
        Ok(value)
    }
}

/// Lenient floating-point field: empty or unparseable input is "no value".
pub fn parse_float(i: &str) -> Option<f32> {
    i.parse().ok()
}

/// Lenient integer field: empty or unparseable input is "no value".
pub fn parse_int<T: FromStr>(i: &str) -> Option<T> {
    i.parse().ok()
}

/// Optional trailing mode field: its first character when present.
pub fn mode_char(i: &str) -> Option<char> {
    i.chars().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time() {
        assert_eq!(parse_time("151209.00"), Time::from_hms(15, 12, 9).ok());
        assert_eq!(parse_time("151209.80"), Time::from_hms(15, 12, 10).ok());
        assert_eq!(parse_time("151209"), Time::from_hms(15, 12, 9).ok());
        assert_eq!(parse_time(""), None);
        assert_eq!(parse_time("0"), None);
        assert_eq!(parse_time("1512"), None);
        assert_eq!(parse_time("abcdef"), None);
        assert_eq!(parse_time("151209.00x"), None);
        // Out-of-range components are noise, not values.
        assert_eq!(parse_time("991209.00"), None);
    }

    #[test]
    fn test_parse_time_carries_over_midnight() {
        assert_eq!(parse_time("235959.80"), Time::from_hms(0, 0, 0).ok());
    }

    #[test]
    fn test_parse_date_time() {
        let dt = parse_date_time("230394", "123519").unwrap();
        assert_eq!(dt.year(), 2094);
        assert_eq!(dt.month(), time::Month::March);
        assert_eq!(dt.day(), 23);
        assert_eq!(dt.time(), Time::from_hms(12, 35, 19).unwrap());

        let dt = parse_date_time("010100", "000000").unwrap();
        assert_eq!(dt.year(), 2000);
    }

    #[test]
    fn test_parse_date_time_rejects_malformed() {
        assert!(parse_date_time("", "123519").is_err());
        assert!(parse_date_time("2303", "123519").is_err());
        assert!(parse_date_time("320394", "123519").is_err());
        assert!(parse_date_time("231394", "123519").is_err());
        assert!(parse_date_time("230394", "").is_err());
        assert!(parse_date_time("230394", "abc").is_err());
    }

    #[test]
    fn test_parse_coordinate() {
        assert_eq!(parse_coordinate("4530.000"), Ok(Some(45.5)));
        assert_eq!(parse_coordinate("151130.00"), Ok(Some(1511.5)));
        assert_eq!(parse_coordinate("0"), Ok(Some(0.0)));
        assert_eq!(parse_coordinate(""), Ok(None));
    }

    #[test]
    fn test_parse_coordinate_rejects_malformed() {
        for dm in ["45.5", "4530", "abc", "4530.", ".000", "45x0.000"] {
            assert_eq!(parse_coordinate(dm), Err(Error::CoordinateFormat(dm.to_string())));
        }
    }

    #[test]
    fn test_hemisphere_sign() {
        assert_eq!(parse_latitude("4530.000", "N"), Ok(Some(45.5)));
        assert_eq!(parse_latitude("4530.000", "S"), Ok(Some(-45.5)));
        assert_eq!(parse_latitude("4530.000", ""), Ok(Some(45.5)));
        assert_eq!(parse_latitude("", "S"), Ok(None));
        assert_eq!(parse_longitude("12240.000", "E"), Ok(Some(122.0 + 40.0 / 60.0)));
        assert_eq!(parse_longitude("12240.000", "W"), Ok(Some(-(122.0 + 40.0 / 60.0))));
    }

    #[test]
    fn test_parse_float() {
        assert_eq!(parse_float("6.1"), Some(6.1));
        assert_eq!(parse_float("-0.4"), Some(-0.4));
        assert_eq!(parse_float(""), None);
        assert_eq!(parse_float("abc"), None);
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int::<u8>("08"), Some(8));
        assert_eq!(parse_int::<u8>(""), None);
        assert_eq!(parse_int::<u8>("8.5"), None);
        assert_eq!(parse_int::<u16>("292"), Some(292));
    }

    #[test]
    fn test_mode_char() {
        assert_eq!(mode_char("A"), Some('A'));
        assert_eq!(mode_char("D*"), Some('D'));
        assert_eq!(mode_char(""), None);
    }
}
