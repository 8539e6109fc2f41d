/*!
Time zone identification and lookup.

The centerpiece is the [`TimeZoneDatabase`], a registry of built-in zone
definitions reachable through the process-wide [`db`] function. A
[`TimeZone`] is a cheap handle into that registry pairing an identifier
with a raw UTC offset and an optional [`DaylightRule`]. The [`Resolver`]
and the [`tzif`] module feed default zone resolution from host system
hints.
*/

pub use self::{
    db::{db, TimeZoneDatabase},
    system::Resolver,
    timezone::{Annual, DaylightRule, TimeZone},
};

mod db;
pub(crate) mod hint;
mod system;
mod timezone;
pub mod tzif;
