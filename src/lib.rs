/*!
Identification of time zones from host system conventions.

This crate maintains a built-in table of time zone definitions (raw UTC
offsets and daylight saving rules, under both canonical identifiers and a
large set of aliases) and resolves the identifiers a host system actually
reports against that table. That includes loosely-structured strings like
`PST8PDT`, literal offsets like `GMT+05:30` and the contents of
`/etc/timezone` and `/etc/localtime`.

# Examples

Look up a zone by identifier:

```
let tz = tzhint::db().get("America/Chicago");
assert_eq!(tz.id(), "America/Chicago");
assert_eq!(tz.raw_offset(), -6 * 60 * 60);
assert!(tz.has_daylight_time());
```

Identifiers that aren't in the table still resolve, to a fixed-offset
zone when they spell one and to `GMT` otherwise:

```
let tz = tzhint::db().get("GMT+05:30");
assert_eq!(tz.raw_offset(), 5 * 60 * 60 + 30 * 60);

let tz = tzhint::db().get("Not/A_Zone");
assert_eq!(tz.id(), "GMT");
```

Find the host's default zone (resolved once, then memoized):

```no_run
let tz = tzhint::TimeZone::system();
println!("local time zone is {tz}");
```

# Logging

This crate never emits anything to stdout or stderr on its own. With the
`logging` feature enabled (it is by default), resolution decisions and
parse failures are reported through the [`log`](https://docs.rs/log)
crate's facade at `debug` and `warn` levels.
*/

#![deny(rustdoc::broken_intra_doc_links)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

#[macro_use]
mod logging;

mod error;
mod tz;

pub use crate::{
    error::Error,
    tz::{db, tzif, Annual, DaylightRule, Resolver, TimeZone, TimeZoneDatabase},
};
