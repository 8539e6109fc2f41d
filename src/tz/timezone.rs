use std::sync::Arc;

use crate::tz::db;

/// A handle to a time zone definition.
///
/// A `TimeZone` pairs an identifier (for example, `America/Chicago` or
/// `CST`) with a raw offset from UTC and, when the zone observes daylight
/// saving time, a [`DaylightRule`] describing when its clocks shift.
///
/// Values of this type are immutable and cheap to clone. Many identifiers
/// may share one underlying definition: aliases registered in the
/// [`TimeZoneDatabase`](crate::TimeZoneDatabase) point at the same
/// definition until a caller asks for the alias by name, at which point a
/// duplicate carrying the requested identifier is handed out. A handle
/// therefore always reports exactly the identifier it was looked up under.
///
/// # Construction
///
/// `TimeZone` values come from the database: [`TimeZoneDatabase::get`],
/// [`TimeZoneDatabase::default_zone`] or the [`TimeZone::system`]
/// convenience. There is no public constructor; the built-in table is the
/// source of truth.
///
/// [`TimeZoneDatabase::get`]: crate::TimeZoneDatabase::get
/// [`TimeZoneDatabase::default_zone`]: crate::TimeZoneDatabase::default_zone
#[derive(Clone, Eq, PartialEq)]
pub struct TimeZone {
    inner: Arc<TimeZoneInner>,
}

#[derive(Debug, Eq, PartialEq)]
struct TimeZoneInner {
    id: String,
    offset: i32,
    daylight: Option<DaylightRule>,
}

impl TimeZone {
    pub(crate) fn new(
        id: impl Into<String>,
        offset: i32,
        daylight: Option<DaylightRule>,
    ) -> TimeZone {
        let inner = TimeZoneInner { id: id.into(), offset, daylight };
        TimeZone { inner: Arc::new(inner) }
    }

    /// Returns the default time zone for this host.
    ///
    /// This is a convenience for `db().default_zone()`. The first call
    /// resolves the zone from system hints; subsequent calls return the
    /// memoized result.
    pub fn system() -> TimeZone {
        db().default_zone()
    }

    /// Returns the identifier of this time zone.
    ///
    /// This is the exact string the zone was looked up under, which for an
    /// alias lookup differs from the canonical name of the shared
    /// definition.
    pub fn id(&self) -> &str {
        &self.inner.id
    }

    /// Returns the raw offset of this zone in seconds.
    ///
    /// This is the value added to UTC to obtain local standard time. It
    /// excludes any daylight saving adjustment.
    pub fn raw_offset(&self) -> i32 {
        self.inner.offset
    }

    /// Returns the daylight saving rule for this zone, if it observes one.
    pub fn daylight_rule(&self) -> Option<&DaylightRule> {
        self.inner.daylight.as_ref()
    }

    /// Returns true if this zone observes daylight saving time.
    pub fn has_daylight_time(&self) -> bool {
        self.inner.daylight.is_some()
    }

    /// Returns true if `other` has the same raw offset and daylight rule
    /// as this zone. The identifiers may differ.
    pub fn has_same_rules(&self, other: &TimeZone) -> bool {
        self.inner.offset == other.inner.offset
            && self.inner.daylight == other.inner.daylight
    }

    /// Renders the effective offset of this zone as a `GMT±HH:MM` string.
    ///
    /// When `daylight` is true and this zone carries a daylight rule, the
    /// rule's savings are added to the raw offset first. For zones without
    /// a rule the flag has no effect.
    pub fn display_offset(&self, daylight: bool) -> String {
        let mut offset = self.inner.offset;
        if daylight {
            if let Some(ref rule) = self.inner.daylight {
                offset += rule.savings;
            }
        }
        let sign = if offset < 0 { '-' } else { '+' };
        let minutes = offset.abs() / 60;
        format!("GMT{}{:02}:{:02}", sign, minutes / 60, minutes % 60)
    }

    /// Returns a duplicate of this definition carrying `id` as its own
    /// identifier. Used for alias lookups.
    pub(crate) fn with_id(&self, id: impl Into<String>) -> TimeZone {
        TimeZone::new(id, self.inner.offset, self.inner.daylight)
    }

    /// Returns true if both handles point at the same allocation.
    pub(crate) fn shares_definition(&self, other: &TimeZone) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl core::fmt::Debug for TimeZone {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("TimeZone")
            .field("id", &self.inner.id)
            .field("offset", &self.inner.offset)
            .field("daylight", &self.inner.daylight)
            .finish()
    }
}

impl core::fmt::Display for TimeZone {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{}", self.inner.id)
    }
}

/// A description of when a zone's clocks shift for part of the year.
///
/// The rule is carried as static reference data from the built-in zone
/// table. This crate records it and reports its presence; evaluating the
/// rule against a calendar is the business of date arithmetic built on
/// top.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DaylightRule {
    pub(crate) start: Annual,
    pub(crate) end: Annual,
    /// Seconds added to the raw offset while the rule is in effect.
    pub(crate) savings: i32,
}

impl DaylightRule {
    /// Returns the day in each year on which the shift begins.
    pub fn start(&self) -> Annual {
        self.start
    }

    /// Returns the day in each year on which the shift ends.
    pub fn end(&self) -> Annual {
        self.end
    }

    /// Returns the daylight adjustment in seconds. Almost always `3600`.
    pub fn savings(&self) -> i32 {
        self.savings
    }
}

/// A yearly recurring date, as encoded in the built-in zone table.
///
/// The `day`/`weekday` encoding follows the table's source data:
///
/// * `weekday == 0` means the exact `day` of the month.
/// * `weekday > 0` with `day > 0` means the `day`-th such weekday of the
///   month (`1` = first), and `day < 0` counts from the end of the month
///   (`-1` = last).
/// * `weekday < 0` means that weekday (negated) on or after `day`.
///
/// Weekdays are numbered `1` = Sunday through `7` = Saturday.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Annual {
    /// Month of the year, `1` = January.
    pub month: i8,
    /// Day of the month, possibly counted from the end. See above.
    pub day: i8,
    /// Weekday selector, `1` = Sunday through `7` = Saturday. See above.
    pub weekday: i8,
    /// Seconds after local midnight at which the shift occurs.
    pub time: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chicago() -> TimeZone {
        crate::db().get("America/Chicago")
    }

    #[test]
    fn display_offset_standard() {
        let tz = chicago();
        assert_eq!(tz.display_offset(false), "GMT-06:00");
    }

    #[test]
    fn display_offset_daylight_adds_savings() {
        let tz = chicago();
        assert_eq!(tz.display_offset(true), "GMT-05:00");
    }

    #[test]
    fn display_offset_daylight_noop_without_rule() {
        let tz = crate::db().get("Asia/Tehran");
        assert_eq!(tz.display_offset(false), "GMT+03:30");
        assert_eq!(tz.display_offset(true), "GMT+03:30");
    }

    #[test]
    fn same_rules_ignores_id() {
        let db = crate::db();
        assert!(db.get("America/Chicago").has_same_rules(&db.get("CST")));
        assert!(!db.get("America/Chicago").has_same_rules(&db.get("EST")));
        // Same offset, but only one observes daylight time.
        assert!(!db.get("EST").has_same_rules(&db.get("EST5")));
    }
}
