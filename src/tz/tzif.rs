/*!
Best-effort decoding of binary zone-info (TZif) files.

These are the files commonly found on Unix systems at `/etc/localtime` and
under `/usr/share/zoneinfo`. Full interpretation of the transition history
is out of scope here; this module extracts just enough to compose an
identifier string of the form
`abbreviation[offset[daylight-abbreviation]]` (for example `EST5EDT`),
which the default zone resolver then matches against the built-in table.
*/

use std::path::Path;

use crate::error::{err, Error};

/// Reads the file at `path` and decodes it as TZif.
///
/// Every failure (missing file, I/O error, malformed data) is logged and
/// collapsed to `None`: a zone-info file the resolver can't use is simply
/// not a candidate source.
pub fn read(path: &Path) -> Option<String> {
    let data = match std::fs::read(path) {
        Ok(data) => data,
        Err(err) => {
            debug!("{}", Error::fs(path, err));
            return None;
        }
    };
    match parse(&data) {
        Ok(id) => Some(id),
        Err(err) => {
            warn!("unusable zone-info file: {}", err.path(path));
            None
        }
    }
}

/// Decodes TZif data into a best-guess identifier string.
///
/// The last type record flagged as standard time supplies the offset and
/// abbreviation; the last record flagged as daylight time supplies the
/// daylight abbreviation, when there is one. The offset in the composed
/// string is the time to add to local time to get UTC, in hours when it
/// divides evenly, otherwise in seconds. It is omitted entirely when
/// there is no daylight abbreviation and it would be redundant (zero, or
/// the abbreviation itself already spells a `GMT+`/`GMT-` offset).
///
/// Some systems ship these files without the leading `TZif` magic; such
/// header-less data is decoded the same way.
pub fn parse(bytes: &[u8]) -> Result<String, Error> {
    let rest = if bytes.len() >= 4 && &bytes[..4] == b"TZif" {
        // Version byte, 15 reserved bytes, then the ttisutcnt, ttisstdcnt
        // and leapcnt fields, none of which matter here.
        let (_, rest) = try_split_at("header", &bytes[4..], 28)?;
        rest
    } else {
        let (_, rest) = try_split_at("header", bytes, 28)?;
        rest
    };
    let (timecnt, rest) = read_count("transition count", rest)?;
    let (typecnt, rest) = read_count("type count", rest)?;
    if typecnt == 0 {
        return Err(err!("zone-info data has no local time types"));
    }
    let (charcnt, rest) = read_count("abbreviation length", rest)?;

    // Each transition is a 4-byte time plus a 1-byte type index. The
    // counts come from untrusted data, so the length math must not
    // overflow on 32-bit targets.
    let transitions_len = timecnt
        .checked_mul(5)
        .ok_or_else(|| err!("transition count {timecnt} is too large"))?;
    let (_, rest) = try_split_at("transitions", rest, transitions_len)?;

    let mut std: Option<(i32, usize)> = None;
    let mut dst_index: Option<usize> = None;
    let types_len = typecnt
        .checked_mul(6)
        .ok_or_else(|| err!("type count {typecnt} is too large"))?;
    let (types, rest) = try_split_at("local time types", rest, types_len)?;
    for record in types.chunks_exact(6) {
        let offset = from_be_bytes_i32(&record[..4]);
        if record[4] == 0 {
            std = Some((offset, usize::from(record[5])));
        } else {
            dst_index = Some(usize::from(record[5]));
        }
    }
    let Some((offset, std_index)) = std else {
        return Err(err!("zone-info data has no standard time type"));
    };

    // The file stores the offset added to UTC to get local time; the
    // identifier grammar wants the reverse. Prefer hours when exact.
    let offset = -offset;
    let offset = if offset % 3600 == 0 { offset / 3600 } else { offset };

    let (names, _) = try_split_at("abbreviations", rest, charcnt)?;
    let abbreviation = designation(names, std_index)?;
    let dst_abbreviation = match dst_index {
        Some(index) => designation(names, index)?,
        None => "",
    };

    let offset_string = if dst_abbreviation.is_empty()
        && (offset == 0
            || abbreviation.starts_with("GMT+")
            || abbreviation.starts_with("GMT-"))
    {
        String::new()
    } else {
        offset.to_string()
    };
    Ok(format!("{abbreviation}{offset_string}{dst_abbreviation}"))
}

/// Extracts the abbreviation starting at `index` in the null-delimited
/// table `names`.
fn designation(names: &[u8], index: usize) -> Result<&str, Error> {
    let Some(tail) = names.get(index..) else {
        return Err(err!(
            "abbreviation index {index} exceeds table length {}",
            names.len()
        ));
    };
    let abbreviation = match tail.iter().position(|&b| b == 0) {
        Some(nul) => &tail[..nul],
        None => tail,
    };
    if !abbreviation.is_ascii() {
        return Err(err!("abbreviation at index {index} is not ASCII"));
    }
    // ASCII is valid UTF-8.
    Ok(core::str::from_utf8(abbreviation)
        .map_err(|_| err!("abbreviation at index {index} is not ASCII"))?)
}

/// Reads a 4-byte big-endian count, rejecting negative values.
fn read_count<'b>(
    what: &'static str,
    bytes: &'b [u8],
) -> Result<(usize, &'b [u8]), Error> {
    let (count, rest) = try_split_at(what, bytes, 4)?;
    let count = from_be_bytes_i32(count);
    let count = usize::try_from(count)
        .map_err(|_| err!("{what} {count} is negative"))?;
    Ok((count, rest))
}

fn try_split_at<'b>(
    what: &'static str,
    bytes: &'b [u8],
    at: usize,
) -> Result<(&'b [u8], &'b [u8]), Error> {
    if at > bytes.len() {
        return Err(err!(
            "expected at least {at} bytes for {what}, \
             but only {len} bytes remain",
            len = bytes.len()
        ));
    }
    Ok(bytes.split_at(at))
}

fn from_be_bytes_i32(bytes: &[u8]) -> i32 {
    i32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Builds synthetic TZif data for tests: `types` is a sequence of
/// `(offset, is_dst, abbreviation_index)` records and `names` the
/// null-delimited abbreviation table.
#[cfg(test)]
pub(crate) fn synthetic(
    magic: bool,
    transitions: u32,
    types: &[(i32, u8, u8)],
    names: &[u8],
) -> Vec<u8> {
    let mut data = Vec::new();
    if magic {
        data.extend_from_slice(b"TZif");
    }
    // Version/reserved/count padding; zero regardless so that the
    // header-less variant can't be mistaken for the magic.
    data.extend_from_slice(&[0; 28]);
    data.extend_from_slice(&(transitions as i32).to_be_bytes());
    data.extend_from_slice(&(types.len() as i32).to_be_bytes());
    data.extend_from_slice(&(names.len() as i32).to_be_bytes());
    data.extend_from_slice(&vec![0; (transitions * 5) as usize]);
    for &(offset, is_dst, index) in types {
        data.extend_from_slice(&offset.to_be_bytes());
        data.push(is_dst);
        data.push(index);
    }
    data.extend_from_slice(names);
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_and_daylight() {
        let data = synthetic(
            true,
            3,
            &[(-18000, 0, 0), (-14400, 1, 4)],
            b"EST\0EDT\0",
        );
        assert_eq!(parse(&data).unwrap(), "EST5EDT");
    }

    #[test]
    fn headerless_variant() {
        let data = synthetic(
            false,
            3,
            &[(-18000, 0, 0), (-14400, 1, 4)],
            b"EST\0EDT\0",
        );
        assert_eq!(parse(&data).unwrap(), "EST5EDT");
    }

    #[test]
    fn last_standard_record_wins() {
        let data = synthetic(
            true,
            0,
            &[(-18000, 0, 0), (-21600, 0, 4), (-18000, 1, 8)],
            b"EST\0CST\0CDT\0",
        );
        assert_eq!(parse(&data).unwrap(), "CST6CDT");
    }

    #[test]
    fn zero_offset_suffix_omitted() {
        let data = synthetic(true, 0, &[(0, 0, 0)], b"GMT\0");
        assert_eq!(parse(&data).unwrap(), "GMT");
    }

    #[test]
    fn gmt_style_abbreviation_suffix_omitted() {
        let data = synthetic(true, 0, &[(18000, 0, 0)], b"GMT+5\0");
        assert_eq!(parse(&data).unwrap(), "GMT+5");
    }

    #[test]
    fn uneven_offset_stays_in_seconds() {
        let data = synthetic(true, 0, &[(-20700, 0, 0)], b"LMT\0");
        assert_eq!(parse(&data).unwrap(), "LMT20700");
    }

    #[test]
    fn daylight_only_fails() {
        let data = synthetic(true, 0, &[(-14400, 1, 0)], b"EDT\0");
        assert!(parse(&data).is_err());
    }

    #[test]
    fn zero_type_count_fails() {
        let data = synthetic(true, 0, &[], b"");
        assert!(parse(&data).is_err());
    }

    #[test]
    fn short_data_fails() {
        assert!(parse(b"").is_err());
        assert!(parse(b"TZif").is_err());
        assert!(parse(&[0; 20]).is_err());
    }

    #[test]
    fn truncated_type_records_fail() {
        let mut data = synthetic(
            true,
            1,
            &[(-18000, 0, 0), (-14400, 1, 4)],
            b"EST\0EDT\0",
        );
        data.truncate(data.len() - 12);
        assert!(parse(&data).is_err());
    }

    #[test]
    fn huge_counts_fail() {
        // Counts near i32::MAX must fail cleanly on every target width.
        let mut data = Vec::new();
        data.extend_from_slice(b"TZif");
        data.extend_from_slice(&[0; 28]);
        for _ in 0..3 {
            data.extend_from_slice(&i32::MAX.to_be_bytes());
        }
        assert!(parse(&data).is_err());
    }

    #[test]
    fn non_ascii_abbreviation_fails() {
        let data = synthetic(true, 0, &[(3600, 0, 0)], &[0xC3, 0xA9, 0x00]);
        assert!(parse(&data).is_err());
    }

    #[test]
    fn abbreviation_index_out_of_range_fails() {
        let data = synthetic(true, 0, &[(3600, 0, 9)], b"CET\0");
        assert!(parse(&data).is_err());
    }

    #[test]
    fn read_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(read(&dir.path().join("localtime")), None);
    }

    #[test]
    fn read_round_trips_through_a_file() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("localtime");
        let data =
            synthetic(true, 0, &[(-18000, 0, 0), (-14400, 1, 4)], b"EST\0EDT\0");
        std::fs::write(&path, data)?;
        assert_eq!(read(&path).as_deref(), Some("EST5EDT"));
        Ok(())
    }
}
