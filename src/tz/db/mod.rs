/*!
The registry of known time zones.

The database is a fixed table of real-world zone definitions (canonical
identifiers, raw offsets and daylight rules, plus a large set of alias
identifiers sharing those definitions) with two small pieces of runtime
state layered on top: a cache of alias clones handed out by [`get`], and
the memoized result of default zone resolution.

[`get`]: TimeZoneDatabase::get
*/

use std::sync::{OnceLock, RwLock};

use crate::tz::{hint, system::Resolver, TimeZone};

mod builtin;

/// Returns this process's time zone database.
///
/// The database is built on first use and lives for the rest of the
/// process. Concurrent first calls observe exactly one construction.
pub fn db() -> &'static TimeZoneDatabase {
    static DB: OnceLock<TimeZoneDatabase> = OnceLock::new();
    DB.get_or_init(TimeZoneDatabase::builtin)
}

/// A registry mapping time zone identifiers to definitions.
///
/// Most callers should use the process-wide instance returned by [`db`].
/// A separate instance (via [`TimeZoneDatabase::builtin`]) behaves
/// identically but keeps its own alias cache and default zone, which is
/// useful for tests.
///
/// Lookups never fail outward: [`TimeZoneDatabase::get`] falls back to a
/// fixed-offset zone for `GMT±…` identifiers and to `GMT` for everything
/// else. Use [`TimeZoneDatabase::lookup`] when a miss should be
/// observable.
#[derive(Debug)]
pub struct TimeZoneDatabase {
    /// The canonical table: every built-in identifier (canonical names
    /// and aliases both) mapped to its shared definition. Sorted by
    /// identifier, immutable after construction.
    entries: Vec<(&'static str, TimeZone)>,
    /// Alias clones handed out by `get`, so that repeated lookups of the
    /// same alias return the same definition. Sorted by identifier.
    aliases: RwLock<Vec<(String, TimeZone)>>,
    /// The memoized default zone. `None` until first resolution.
    default: RwLock<Option<TimeZone>>,
}

impl TimeZoneDatabase {
    /// Builds a database from the built-in zone table.
    pub fn builtin() -> TimeZoneDatabase {
        let mut entries: Vec<(&'static str, TimeZone)> = Vec::new();
        for spec in builtin::ZONES {
            let tz = TimeZone::new(spec.id, spec.offset, spec.daylight);
            entries.push((spec.id, tz.clone()));
            for &alias in spec.aliases {
                entries.push((alias, tz.clone()));
            }
        }
        entries.sort_by_key(|&(id, _)| id);
        TimeZoneDatabase {
            entries,
            aliases: RwLock::new(Vec::new()),
            default: RwLock::new(None),
        }
    }

    /// Looks up the given identifier, exactly and case-sensitively.
    ///
    /// An alias identifier resolves to its shared definition, whose
    /// canonical identifier may differ from `id`. (Unless the alias has
    /// already been requested through [`get`], in which case the cached
    /// alias clone is returned.)
    ///
    /// [`get`]: TimeZoneDatabase::get
    pub fn lookup(&self, id: &str) -> Option<TimeZone> {
        {
            let aliases = self.aliases.read().unwrap();
            if let Ok(i) =
                aliases.binary_search_by(|(key, _)| key.as_str().cmp(id))
            {
                return Some(aliases[i].1.clone());
            }
        }
        self.entries
            .binary_search_by(|&(key, _)| key.cmp(id))
            .ok()
            .map(|i| self.entries[i].1.clone())
    }

    /// Returns the time zone for the given identifier.
    ///
    /// This never fails. If `id` names an alias, the returned handle
    /// carries `id` itself (not the canonical name) and is memoized so
    /// that the next lookup returns the same definition. If `id` is
    /// unknown but matches the `GMT[+|-]H[H][:MM]` grammar, a fixed
    /// offset zone is synthesized. Anything else falls back to `GMT`.
    pub fn get(&self, id: &str) -> TimeZone {
        if let Some(tz) = self.lookup(id) {
            if tz.id() == id {
                return tz;
            }
            // An alias hit. Hand out (and remember) a duplicate that
            // reports the requested identifier.
            let clone = tz.with_id(id);
            let mut aliases = self.aliases.write().unwrap();
            match aliases.binary_search_by(|(key, _)| key.as_str().cmp(id)) {
                // Someone else cached this alias while we were building
                // the clone. Same value either way; return theirs.
                Ok(i) => return aliases[i].1.clone(),
                Err(i) => aliases.insert(i, (id.to_string(), clone.clone())),
            }
            return clone;
        }
        match hint::parse_gmt_offset(id) {
            Ok(offset) => TimeZone::new(id, offset, None),
            Err(err) => {
                debug!("unknown time zone {id:?}, using GMT: {err}");
                self.gmt()
            }
        }
    }

    /// Returns every known identifier, including aliases, sorted.
    pub fn available_ids(&self) -> Vec<String> {
        self.entries.iter().map(|&(id, _)| id.to_string()).collect()
    }

    /// Returns every known identifier whose definition has the given raw
    /// offset (in seconds), including aliases, sorted.
    pub fn available_ids_with_offset(&self, offset: i32) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(_, tz)| tz.raw_offset() == offset)
            .map(|&(id, _)| id.to_string())
            .collect()
    }

    /// Returns the default time zone for this host.
    ///
    /// The first call resolves the zone from system hints (see
    /// [`Resolver`](crate::Resolver)); the result is memoized for all
    /// later calls. Resolution never fails: with no usable hint at all
    /// this returns `GMT`.
    pub fn default_zone(&self) -> TimeZone {
        self.default_zone_with(&Resolver::default())
    }

    pub(crate) fn default_zone_with(&self, resolver: &Resolver) -> TimeZone {
        {
            let default = self.default.read().unwrap();
            if let Some(ref tz) = *default {
                return tz.clone();
            }
        }
        let mut default = self.default.write().unwrap();
        // Resolution runs under the write lock so that exactly one build
        // executes and every concurrent caller observes its result.
        if default.is_none() {
            *default = Some(resolver.resolve(self));
        }
        default.as_ref().map(TimeZone::clone).unwrap()
    }

    /// Installs `tz` as the default zone for subsequent
    /// [`default_zone`](TimeZoneDatabase::default_zone) calls.
    pub fn set_default(&self, tz: TimeZone) {
        *self.default.write().unwrap() = Some(tz);
    }

    /// The unconditional fallback entry.
    pub(crate) fn gmt(&self) -> TimeZone {
        // GMT is a fixed row of the built-in table.
        self.lookup("GMT").unwrap_or_else(|| TimeZone::new("GMT", 0, None))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn lookup_is_exact_and_case_sensitive() {
        let db = TimeZoneDatabase::builtin();
        assert!(db.lookup("America/Chicago").is_some());
        assert!(db.lookup("america/chicago").is_none());
        assert!(db.lookup("America/Chicago ").is_none());
    }

    #[test]
    fn gmt_and_utc_are_always_present() {
        let db = TimeZoneDatabase::builtin();
        for id in ["GMT", "UTC"] {
            let tz = db.lookup(id).unwrap();
            assert_eq!(tz.raw_offset(), 0);
            assert!(!tz.has_daylight_time());
        }
    }

    #[test]
    fn get_reports_requested_identifier() {
        let db = TimeZoneDatabase::builtin();
        // Canonical hit: the shared definition comes back untouched.
        assert_eq!(db.get("CST").id(), "CST");
        // Alias hit: same rules, but the handle reports the alias.
        let chicago = db.get("America/Chicago");
        assert_eq!(chicago.id(), "America/Chicago");
        assert!(chicago.has_same_rules(&db.get("CST")));
    }

    #[test]
    fn alias_clone_is_memoized() {
        let db = TimeZoneDatabase::builtin();
        let first = db.get("America/New_York");
        let second = db.get("America/New_York");
        assert!(first.shares_definition(&second));
        // A plain lookup now sees the cached clone too.
        assert_eq!(db.lookup("America/New_York").unwrap().id(), "America/New_York");
    }

    #[test]
    fn aliases_share_until_requested() {
        let db = TimeZoneDatabase::builtin();
        let via_alias = db.lookup("America/Chicago").unwrap();
        let canonical = db.lookup("CST").unwrap();
        assert!(via_alias.shares_definition(&canonical));
        assert_eq!(via_alias.id(), "CST");
    }

    #[test]
    fn get_synthesizes_gmt_literals() {
        let db = TimeZoneDatabase::builtin();
        let tz = db.get("GMT+05:30");
        assert_eq!(tz.id(), "GMT+05:30");
        assert_eq!(tz.raw_offset(), 5 * 3600 + 1800);
        assert!(!tz.has_daylight_time());

        let tz = db.get("GMT-8");
        assert_eq!(tz.raw_offset(), -8 * 3600);
    }

    #[test]
    fn get_falls_back_to_gmt() {
        let db = TimeZoneDatabase::builtin();
        let tz = db.get("Not/A_Zone");
        assert_eq!(tz.id(), "GMT");
        assert_eq!(tz.raw_offset(), 0);

        // A GMT-prefixed identifier whose offset region isn't a valid
        // offset (multi-byte characters included) degrades the same way.
        let tz = db.get("GMT\u{e9}1");
        assert_eq!(tz.id(), "GMT");
        assert_eq!(tz.raw_offset(), 0);
    }

    #[test]
    fn concurrent_first_default_zone_resolves_once() -> anyhow::Result<()> {
        use std::sync::{
            atomic::{AtomicUsize, Ordering},
            Arc,
        };

        let dir = tempfile::tempdir()?;
        let probes = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&probes);
        let resolver = Resolver::default()
            .env_var("TZHINT_TEST_RACE_UNSET")
            .hint_path(dir.path().join("timezone"))
            .tzif_path(dir.path().join("localtime"))
            .platform(move || {
                counter.fetch_add(1, Ordering::SeqCst);
                Some(String::from("Asia/Tokyo"))
            });
        let db = TimeZoneDatabase::builtin();
        let results: Vec<TimeZone> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| db.default_zone_with(&resolver)))
                .collect();
            handles.into_iter().map(|handle| handle.join().unwrap()).collect()
        });
        // Exactly one resolution ran; every racer observed its result.
        assert_eq!(probes.load(Ordering::SeqCst), 1);
        for tz in &results {
            assert_eq!(tz.id(), "JST");
            assert!(tz.shares_definition(&results[0]));
        }
        Ok(())
    }

    #[test]
    fn concurrent_alias_gets_agree() {
        let db = TimeZoneDatabase::builtin();
        let results: Vec<TimeZone> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| db.get("America/New_York")))
                .collect();
            handles.into_iter().map(|handle| handle.join().unwrap()).collect()
        });
        for tz in &results {
            assert_eq!(tz.id(), "America/New_York");
            assert_eq!(tz, &results[0]);
        }
        // Once the race settles, the cache hands everyone one clone.
        let cached = db.get("America/New_York");
        assert!(cached.shares_definition(&db.get("America/New_York")));
    }

    #[test]
    fn ids_with_offset_partition_all_ids() {
        let db = TimeZoneDatabase::builtin();
        let all: Vec<String> = db.available_ids();
        assert!(!all.is_empty());

        let offsets: BTreeSet<i32> = all
            .iter()
            .map(|id| db.lookup(id).unwrap().raw_offset())
            .collect();
        let mut seen: Vec<String> = Vec::new();
        for offset in offsets {
            for id in db.available_ids_with_offset(offset) {
                assert_eq!(db.lookup(&id).unwrap().raw_offset(), offset);
                seen.push(id);
            }
        }
        seen.sort();
        assert_eq!(seen, all);
    }

    #[test]
    fn ids_with_offset_is_stable() {
        let db = TimeZoneDatabase::builtin();
        let first = db.available_ids_with_offset(-5 * 3600);
        let second = db.available_ids_with_offset(-5 * 3600);
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn set_default_overrides_memoized_resolution() {
        let db = TimeZoneDatabase::builtin();
        db.set_default(db.get("Asia/Tokyo"));
        assert_eq!(db.default_zone().id(), "Asia/Tokyo");
        db.set_default(db.get("GMT"));
        assert_eq!(db.default_zone().id(), "GMT");
    }
}
