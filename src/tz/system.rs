/*!
Routines for finding the default time zone of the host.

Resolution walks an ordered list of candidate sources (an explicit
override, the `TZ` environment variable, the `/etc/timezone` hint file,
the `/etc/localtime` zone-info file and finally an optional
platform-specific probe), takes the first identifier string any of them
yields that matches a known zone, and falls back to `GMT` when none does.
*/

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::tz::{hint::ZoneIdHint, tzif, TimeZone, TimeZoneDatabase};

/// A closure that asks the platform for a zone identifier string.
type PlatformProbe = Box<dyn Fn() -> Option<String> + Send + Sync>;

/// The procedure for resolving a host's default time zone.
///
/// The default configuration reads the conventional Unix sources. Each
/// source can be redirected, which is how the tests exercise resolution
/// without depending on the machine they run on, and how embedders plug
/// in a platform-specific probe of their own.
///
/// Most callers never touch this type:
/// [`TimeZone::system`](crate::TimeZone::system) and
/// [`TimeZoneDatabase::default_zone`] run a default resolver on first use
/// and memoize what it finds.
///
/// [`TimeZoneDatabase::default_zone`]: crate::TimeZoneDatabase::default_zone
pub struct Resolver {
    override_id: Option<String>,
    env_var: String,
    hint_path: PathBuf,
    tzif_path: PathBuf,
    platform: Option<PlatformProbe>,
}

impl Default for Resolver {
    fn default() -> Resolver {
        Resolver {
            override_id: None,
            env_var: String::from("TZ"),
            hint_path: PathBuf::from("/etc/timezone"),
            tzif_path: PathBuf::from("/etc/localtime"),
            platform: None,
        }
    }
}

impl Resolver {
    /// Sets an identifier that takes precedence over every other source.
    pub fn override_id(mut self, id: impl Into<String>) -> Resolver {
        self.override_id = Some(id.into());
        self
    }

    /// Sets the environment variable to consult. Defaults to `TZ`.
    pub fn env_var(mut self, name: impl Into<String>) -> Resolver {
        self.env_var = name.into();
        self
    }

    /// Sets the path of the plain-text hint file. Defaults to
    /// `/etc/timezone`.
    pub fn hint_path(mut self, path: impl Into<PathBuf>) -> Resolver {
        self.hint_path = path.into();
        self
    }

    /// Sets the path of the binary zone-info file. Defaults to
    /// `/etc/localtime`.
    pub fn tzif_path(mut self, path: impl Into<PathBuf>) -> Resolver {
        self.tzif_path = path.into();
        self
    }

    /// Installs a platform probe, consulted after every file source has
    /// failed.
    pub fn platform<F>(mut self, probe: F) -> Resolver
    where
        F: Fn() -> Option<String> + Send + Sync + 'static,
    {
        self.platform = Some(Box::new(probe));
        self
    }

    /// Resolves the default time zone against `db`.
    ///
    /// Sources are tried in order: the override, the environment
    /// variable, the hint file, the zone-info file, the platform probe.
    /// A source that yields no identifier, or an identifier matching no
    /// known zone, is skipped. When every source is exhausted this
    /// returns `GMT`.
    pub fn resolve(&self, db: &TimeZoneDatabase) -> TimeZone {
        let attempt = |source: &str, id: Option<String>| -> Option<TimeZone> {
            let id = id?;
            match match_id(db, &id) {
                Some(tz) => {
                    debug!(
                        "resolved default time zone {} \
                         from {source} hint {id:?}",
                        tz.id()
                    );
                    Some(tz)
                }
                None => {
                    debug!("no time zone matches {source} hint {id:?}");
                    None
                }
            }
        };
        if let Some(tz) = attempt("override", self.override_id.clone()) {
            return tz;
        }
        let env = std::env::var(&self.env_var)
            .ok()
            .filter(|value| !value.is_empty());
        if let Some(tz) = attempt("environment", env) {
            return tz;
        }
        if let Some(tz) = attempt("hint file", read_hint_file(&self.hint_path))
        {
            return tz;
        }
        if let Some(tz) = attempt("zone-info", tzif::read(&self.tzif_path)) {
            return tz;
        }
        let platform = self.platform.as_ref().and_then(|probe| probe());
        if let Some(tz) = attempt("platform", platform) {
            return tz;
        }
        debug!("no default time zone source matched, using GMT");
        db.gmt()
    }
}

impl core::fmt::Debug for Resolver {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Resolver")
            .field("override_id", &self.override_id)
            .field("env_var", &self.env_var)
            .field("hint_path", &self.hint_path)
            .field("tzif_path", &self.tzif_path)
            .field("platform", &self.platform.as_ref().map(|_| ".."))
            .finish()
    }
}

/// Reads the leading zone identifier token from a plain-text hint file
/// such as `/etc/timezone`.
///
/// The token is the maximal leading run of identifier bytes (ASCII
/// letters and digits, `/`, `-` and `_`); everything from the first other
/// byte on (typically a trailing newline) is ignored. An unreadable file
/// or an empty token yields `None`.
pub(crate) fn read_hint_file(path: &Path) -> Option<String> {
    let data = match fs::read(path) {
        Ok(data) => data,
        Err(err) => {
            debug!("failed to read hint file {}: {err}", path.display());
            return None;
        }
    };
    let mut id = String::new();
    for &byte in &data {
        if byte.is_ascii_alphanumeric()
            || byte == b'/'
            || byte == b'-'
            || byte == b'_'
        {
            id.push(char::from(byte));
        } else {
            break;
        }
    }
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

/// Matches a candidate identifier string against the database.
///
/// The identifier is torn into `BaseName[GMToffset[DaylightName]]` parts
/// first. A base name that spans the whole string matches by plain
/// lookup. Otherwise the zone registered under the base name matches when
/// its raw offset equals the parsed offset and it observes daylight time
/// exactly when a daylight name is present; a zone whose daylight name
/// merely differs from its standard name is accepted on offset and
/// daylight observance alone. Failing all that, the first known
/// identifier with the parsed offset and the right daylight observance
/// wins. The returned handle is the registered definition, so an alias
/// candidate reports its canonical identifier.
fn match_id(db: &TimeZoneDatabase, id: &str) -> Option<TimeZone> {
    let hint = match ZoneIdHint::parse(id) {
        Ok(hint) => hint,
        Err(err) => {
            debug!("unusable time zone hint {id:?}: {err}");
            return None;
        }
    };
    if let Some(tz) = db.lookup(hint.base) {
        if hint.base == id {
            return Some(tz);
        }
        if let Some(offset) = hint.offset {
            if offset == tz.raw_offset()
                && hint.dst == tz.has_daylight_time()
            {
                return Some(tz);
            }
        }
    }
    // The daylight zone name may not be the one the table pairs with this
    // base name. Accept the base zone on offset and observance alone,
    // unless the "daylight name" is just the base name repeated.
    if hint.dst_name.is_some_and(|name| name != hint.base) {
        if let Some(tz) = db.lookup(hint.base) {
            if let Some(offset) = hint.offset {
                if offset == tz.raw_offset() && tz.has_daylight_time() {
                    return Some(tz);
                }
            }
        }
    }
    // The base name is unknown; guess from the offset.
    if let Some(offset) = hint.offset {
        for candidate in db.available_ids_with_offset(offset) {
            let Some(tz) = db.lookup(&candidate) else { continue };
            if tz.has_daylight_time() == hint.dst {
                return Some(tz);
            }
        }
    }
    None
}
