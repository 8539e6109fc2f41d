/*!
Parsing of loosely-structured time zone identifier strings.

Host systems report the local zone in a handful of shapes:
`America/Chicago` (a plain name), `CST6CDT` or `EST5` (a name with a GMT
offset and possibly a daylight zone name appended), or a literal offset
like `GMT+05:30`. This module tears such strings into their parts; the
default zone resolver decides what to do with them.
*/

use crate::error::{err, Error};

/// The parts of an identifier of the form
/// `BaseName[GMToffset[DaylightName]]`.
#[derive(Debug, Eq, PartialEq)]
pub(crate) struct ZoneIdHint<'s> {
    /// Everything before the offset region.
    pub(crate) base: &'s str,
    /// The offset, converted to seconds to *add to UTC* to get local
    /// standard time. `None` when the identifier has no offset region.
    pub(crate) offset: Option<i32>,
    /// Whether a daylight zone name trails the offset.
    pub(crate) dst: bool,
    /// The trailing daylight zone name, when present.
    pub(crate) dst_name: Option<&'s str>,
}

impl<'s> ZoneIdHint<'s> {
    /// Tears the given identifier into base name, optional GMT offset and
    /// optional daylight zone name.
    ///
    /// The offset region starts at the first `+`, `-` or ASCII digit
    /// (a match at position zero doesn't count, so a bare offset is not
    /// an offset region). The daylight name is the maximal non-digit
    /// suffix, when it doesn't span the whole string. An offset value
    /// with an absolute value below 24 is in hours, otherwise seconds;
    /// either way the identifier carries "time to add to local time to
    /// get GMT", so the value is negated here.
    pub(crate) fn parse(id: &'s str) -> Result<ZoneIdHint<'s>, Error> {
        let bytes = id.as_bytes();

        let mut offset_start = 0;
        for (i, &b) in bytes.iter().enumerate().skip(1) {
            if b == b'+' || b == b'-' || b.is_ascii_digit() {
                offset_start = i;
                break;
            }
        }
        let base = if offset_start == 0 { id } else { &id[..offset_start] };

        let mut dst_start = 0;
        for i in (0..bytes.len()).rev() {
            if bytes[i].is_ascii_digit() {
                break;
            }
            dst_start = i;
        }
        let dst = dst_start > 0;
        let dst_name = if dst { Some(&id[dst_start..]) } else { None };

        let mut offset = None;
        if offset_start > 0 {
            let mut digits_start = offset_start;
            // A single leading `+` is skipped; what remains must be a
            // plain (possibly `-`-signed) integer. Integer parsing below
            // would accept a second `+`, so reject that explicitly.
            if bytes[digits_start] == b'+' {
                digits_start += 1;
            }
            let digits_end = if dst_start == 0 { id.len() } else { dst_start };
            let digits = &id[digits_start..digits_end];
            if digits.starts_with('+') {
                return Err(err!(
                    "invalid GMT offset {digits:?} \
                     in time zone identifier {id:?}"
                ));
            }
            let value = digits.parse::<i64>().map_err(|_| {
                err!(
                    "invalid GMT offset {digits:?} \
                     in time zone identifier {id:?}"
                )
            })?;
            let seconds = if value.abs() < 24 { value * 3600 } else { value };
            let seconds = i32::try_from(-seconds).map_err(|_| {
                err!(
                    "GMT offset {value} out of range \
                     in time zone identifier {id:?}"
                )
            })?;
            offset = Some(seconds);
        }

        Ok(ZoneIdHint { base, offset, dst, dst_name })
    }
}

/// Parses a literal `GMT[+|-]H[H][:MM|MM]` identifier into seconds to add
/// to UTC (positive east of Greenwich).
///
/// The hour and minute fields may be colon separated, the hour may stand
/// alone (at most two digits), or both may be concatenated with the last
/// two digits taken as minutes. Anything else is an error; callers treat
/// that as "not a GMT literal" and fall back.
pub(crate) fn parse_gmt_offset(id: &str) -> Result<i32, Error> {
    let rest = id
        .strip_prefix("GMT")
        .ok_or_else(|| err!("time zone identifier {id:?} lacks GMT prefix"))?;
    let (sign, rest) = match rest.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, rest.strip_prefix('+').unwrap_or(rest)),
    };
    if rest.is_empty() {
        return Err(err!("time zone identifier {id:?} lacks a GMT offset"));
    }
    // The splitting below indexes by byte; anything outside ASCII can't
    // be part of a valid offset anyway.
    if !rest.is_ascii() {
        return Err(err!(
            "non-ASCII GMT offset in time zone identifier {id:?}"
        ));
    }

    let field = |digits: &str| -> Result<i32, Error> {
        digits.parse::<i32>().map_err(|_| {
            err!(
                "invalid field {digits:?} in GMT offset \
                 time zone identifier {id:?}"
            )
        })
    };
    let (hour, minute) = match rest.split_once(':') {
        Some((hour, minute)) => (field(hour)?, field(minute)?),
        None if rest.len() <= 2 => (field(rest)?, 0),
        None => {
            let (hour, minute) = rest.split_at(rest.len() - 2);
            (field(hour)?, field(minute)?)
        }
    };
    Ok(sign * (hour * 3600 + minute * 60))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compound_name_offset_and_daylight() {
        let hint = ZoneIdHint::parse("PST8PDT").unwrap();
        assert_eq!(hint.base, "PST");
        assert_eq!(hint.offset, Some(-8 * 3600));
        assert!(hint.dst);
        assert_eq!(hint.dst_name, Some("PDT"));
    }

    #[test]
    fn name_and_offset_only() {
        let hint = ZoneIdHint::parse("EST5").unwrap();
        assert_eq!(hint.base, "EST");
        assert_eq!(hint.offset, Some(-5 * 3600));
        assert!(!hint.dst);
        assert_eq!(hint.dst_name, None);
    }

    #[test]
    fn plain_name() {
        let hint = ZoneIdHint::parse("America/Chicago").unwrap();
        assert_eq!(hint.base, "America/Chicago");
        assert_eq!(hint.offset, None);
        assert!(!hint.dst);
    }

    #[test]
    fn negative_offset() {
        // The Netherlands, one hour east: the offset to add to local time
        // to reach GMT is -1, so the stored offset comes out positive.
        let hint = ZoneIdHint::parse("CET-1CEST").unwrap();
        assert_eq!(hint.base, "CET");
        assert_eq!(hint.offset, Some(3600));
        assert!(hint.dst);
        assert_eq!(hint.dst_name, Some("CEST"));
    }

    #[test]
    fn explicit_plus_is_skipped() {
        let hint = ZoneIdHint::parse("EST+5").unwrap();
        assert_eq!(hint.base, "EST");
        assert_eq!(hint.offset, Some(-5 * 3600));
        assert!(!hint.dst);
    }

    #[test]
    fn offset_in_seconds() {
        let hint = ZoneIdHint::parse("EST18000").unwrap();
        assert_eq!(hint.offset, Some(-18000));
    }

    #[test]
    fn non_numeric_offset_region_is_rejected() {
        assert!(ZoneIdHint::parse("EST+x").is_err());
        assert!(ZoneIdHint::parse("EST5+5EDT").is_err());
        // Only one leading `+` is tolerated.
        assert!(ZoneIdHint::parse("EST++5").is_err());
    }

    #[test]
    fn leading_digit_does_not_start_an_offset() {
        let hint = ZoneIdHint::parse("5up").unwrap();
        assert_eq!(hint.base, "5up");
        assert_eq!(hint.offset, None);
    }

    #[test]
    fn gmt_literal_colon() {
        assert_eq!(parse_gmt_offset("GMT+05:30").unwrap(), 5 * 3600 + 1800);
        assert_eq!(parse_gmt_offset("GMT-3:15").unwrap(), -(3 * 3600 + 900));
    }

    #[test]
    fn gmt_literal_hours_only() {
        assert_eq!(parse_gmt_offset("GMT-8").unwrap(), -8 * 3600);
        assert_eq!(parse_gmt_offset("GMT+10").unwrap(), 10 * 3600);
        assert_eq!(parse_gmt_offset("GMT5").unwrap(), 5 * 3600);
    }

    #[test]
    fn gmt_literal_concatenated_minutes() {
        assert_eq!(parse_gmt_offset("GMT+0800").unwrap(), 8 * 3600);
        assert_eq!(parse_gmt_offset("GMT-0930").unwrap(), -(9 * 3600 + 1800));
    }

    #[test]
    fn gmt_literal_rejects_malformed_input() {
        assert!(parse_gmt_offset("GMT").is_err());
        assert!(parse_gmt_offset("GMT+").is_err());
        assert!(parse_gmt_offset("GMT+junk").is_err());
        assert!(parse_gmt_offset("GMT+5:").is_err());
        assert!(parse_gmt_offset("UTC+5").is_err());
    }

    #[test]
    fn gmt_literal_rejects_multibyte_input() {
        // A multi-byte character in the offset region must fail the
        // parse, not panic on a mid-character byte index.
        assert!(parse_gmt_offset("GMT\u{e9}1").is_err());
        assert!(parse_gmt_offset("GMT+5\u{e9}").is_err());
        assert!(parse_gmt_offset("GMT+\u{0661}\u{0662}").is_err());
    }
}
