/*!
The built-in zone table.

This is static reference data: every known canonical identifier with its raw
UTC offset (seconds), optional daylight rule and alias identifiers. It is
transcribed from generated tz data and not computed; offsets are seconds,
months are 1-based and weekdays are 1 = Sunday through 7 = Saturday.

The invariants the rest of the crate relies on: `GMT` and `UTC` are present
with a zero offset and no daylight rule, and every definition is reachable
from at least one identifier.
*/

use crate::tz::{Annual, DaylightRule};

/// One canonical zone definition plus the aliases that share it.
pub(crate) struct ZoneSpec {
    pub(crate) id: &'static str,
    pub(crate) offset: i32,
    pub(crate) daylight: Option<DaylightRule>,
    pub(crate) aliases: &'static [&'static str],
}

const HOUR: i32 = 3600;

const SUN: i8 = 1;
const THU: i8 = 5;
const FRI: i8 = 6;
const SAT: i8 = 7;

const fn at(month: i8, day: i8, weekday: i8, time: i32) -> Annual {
    Annual { month, day, weekday, time }
}

const fn rule(start: Annual, end: Annual) -> Option<DaylightRule> {
    Some(DaylightRule { start, end, savings: HOUR })
}

/// First Sunday in April through last Sunday in October, at 02:00.
const US: Option<DaylightRule> =
    rule(at(4, 1, SUN, 2 * HOUR), at(10, -1, SUN, 2 * HOUR));

/// Last Sunday in March through last Sunday in October, at 02:00.
const EU: Option<DaylightRule> =
    rule(at(3, -1, SUN, 2 * HOUR), at(10, -1, SUN, 2 * HOUR));

macro_rules! zone {
    ($id:literal, $offset:expr, $rule:expr) => {
        zone!($id, $offset, $rule, [])
    };
    ($id:literal, $offset:expr, $rule:expr, [$($alias:literal),* $(,)?]) => {
        ZoneSpec {
            id: $id,
            offset: $offset,
            daylight: $rule,
            aliases: &[$($alias),*],
        }
    };
}

#[rustfmt::skip]
pub(crate) static ZONES: &[ZoneSpec] = &[
    zone!("MIT", -11 * HOUR, None,
        ["Pacific/Apia", "Pacific/Midway", "Pacific/Niue",
         "Pacific/Pago_Pago"]),
    zone!("America/Adak", -10 * HOUR, US),
    zone!("HST", -10 * HOUR, None,
        ["Pacific/Fakaofo", "Pacific/Honolulu", "Pacific/Johnston",
         "Pacific/Rarotonga", "Pacific/Tahiti"]),
    zone!("Pacific/Marquesas", -9 * HOUR - 1800, None),
    zone!("AST", -9 * HOUR, US,
        ["America/Anchorage", "America/Juneau", "America/Nome",
         "America/Yakutat"]),
    zone!("Pacific/Gambier", -9 * HOUR, None),
    zone!("PST", -8 * HOUR, US,
        ["PST8PDT", "America/Dawson", "America/Los_Angeles",
         "America/Tijuana", "America/Vancouver", "America/Whitehorse",
         "US/Pacific-New"]),
    zone!("Pacific/Pitcairn", -8 * HOUR, None),
    zone!("MST", -7 * HOUR, US,
        ["MST7MDT", "America/Boise", "America/Chihuahua", "America/Denver",
         "America/Edmonton", "America/Inuvik", "America/Mazatlan",
         "America/Shiprock", "America/Yellowknife"]),
    zone!("MST7", -7 * HOUR, None,
        ["PNT", "America/Dawson_Creek", "America/Hermosillo",
         "America/Phoenix"]),
    zone!("CST", -6 * HOUR, US,
        ["CST6CDT", "America/Cambridge_Bay", "America/Cancun",
         "America/Chicago", "America/Menominee", "America/Merida",
         "America/Mexico_City", "America/Monterrey", "America/Rainy_River",
         "America/Winnipeg"]),
    zone!("America/Belize", -6 * HOUR, None,
        ["America/Costa_Rica", "America/El_Salvador", "America/Guatemala",
         "America/Managua", "America/Regina", "America/Swift_Current",
         "America/Tegucigalpa", "Pacific/Galapagos"]),
    zone!("Pacific/Easter", -6 * HOUR,
        rule(at(10, 9, -SUN, 0), at(3, 9, -SUN, 0))),
    zone!("America/Grand_Turk", -5 * HOUR,
        rule(at(4, 1, SUN, 0), at(10, -1, SUN, 0)),
        ["America/Havana"]),
    zone!("EST5", -5 * HOUR, None,
        ["IET", "America/Bogota", "America/Cayman", "America/Eirunepe",
         "America/Guayaquil", "America/Indiana/Indianapolis",
         "America/Indiana/Knox", "America/Indiana/Marengo",
         "America/Indiana/Vevay", "America/Indianapolis", "America/Iqaluit",
         "America/Jamaica", "America/Lima", "America/Panama",
         "America/Pangnirtung", "America/Port-au-Prince",
         "America/Porto_Acre", "America/Rankin_Inlet"]),
    zone!("EST", -5 * HOUR, US,
        ["EST5EDT", "America/Detroit", "America/Kentucky/Louisville",
         "America/Kentucky/Monticello", "America/Louisville",
         "America/Montreal", "America/Nassau", "America/New_York",
         "America/Nipigon", "America/Thunder_Bay"]),
    zone!("PRT", -4 * HOUR, None,
        ["America/Anguilla", "America/Antigua", "America/Aruba",
         "America/Barbados", "America/Boa_Vista", "America/Caracas",
         "America/Curacao", "America/Dominica", "America/Grenada",
         "America/Guadeloupe", "America/Guyana", "America/La_Paz",
         "America/Manaus", "America/Martinique", "America/Montserrat",
         "America/Port_of_Spain", "America/Porto_Velho",
         "America/Puerto_Rico", "America/Santo_Domingo", "America/St_Kitts",
         "America/St_Lucia", "America/St_Thomas", "America/St_Vincent",
         "America/Tortola"]),
    zone!("America/Asuncion", -4 * HOUR,
        rule(at(10, 1, SUN, 0), at(2, -1, SUN, 0))),
    zone!("America/Cuiaba", -4 * HOUR,
        rule(at(10, 2, SUN, 0), at(2, 3, SUN, 0))),
    zone!("America/Goose_Bay", -4 * HOUR,
        rule(at(4, 1, SUN, 60), at(10, -1, SUN, 60))),
    zone!("America/Glace_Bay", -4 * HOUR, US,
        ["America/Halifax", "America/Thule", "Atlantic/Bermuda"]),
    zone!("America/Santiago", -4 * HOUR,
        rule(at(10, 9, -SUN, 0), at(3, 9, -SUN, 0)),
        ["Antarctica/Palmer"]),
    zone!("Atlantic/Stanley", -4 * HOUR,
        rule(at(9, 2, SUN, 0), at(4, 16, -SUN, 0))),
    zone!("CNT", -3 * HOUR - 1800,
        rule(at(4, 1, SUN, 60), at(10, -1, SUN, 60)),
        ["America/St_Johns"]),
    zone!("America/Araguaina", -3 * HOUR,
        rule(at(10, 2, SUN, 0), at(2, 3, SUN, 0)),
        ["America/Sao_Paulo"]),
    zone!("AGT", -3 * HOUR, None,
        ["America/Belem", "America/Buenos_Aires", "America/Catamarca",
         "America/Cayenne", "America/Cordoba", "America/Fortaleza",
         "America/Jujuy", "America/Maceio", "America/Mendoza",
         "America/Montevideo", "America/Paramaribo", "America/Recife",
         "America/Rosario"]),
    zone!("America/Godthab", -3 * HOUR,
        rule(at(3, 30, -SAT, 22 * HOUR), at(10, 30, -SAT, 22 * HOUR))),
    zone!("America/Miquelon", -3 * HOUR, US),
    zone!("America/Noronha", -2 * HOUR, None, ["Atlantic/South_Georgia"]),
    zone!("America/Scoresbysund", -HOUR,
        rule(at(3, -1, SUN, 0), at(10, -1, SUN, 0)),
        ["Atlantic/Azores"]),
    zone!("Atlantic/Cape_Verde", -HOUR, None, ["Atlantic/Jan_Mayen"]),
    zone!("GMT", 0, None,
        ["UTC", "Africa/Abidjan", "Africa/Accra", "Africa/Bamako",
         "Africa/Banjul", "Africa/Bissau", "Africa/Casablanca",
         "Africa/Conakry", "Africa/Dakar", "Africa/El_Aaiun",
         "Africa/Freetown", "Africa/Lome", "Africa/Monrovia",
         "Africa/Nouakchott", "Africa/Ouagadougou", "Africa/Sao_Tome",
         "Africa/Timbuktu", "Atlantic/Reykjavik", "Atlantic/St_Helena",
         "Europe/Belfast", "Europe/Dublin", "Europe/London"]),
    zone!("WET", 0,
        rule(at(3, -1, SUN, HOUR), at(10, -1, SUN, HOUR)),
        ["Atlantic/Canary", "Atlantic/Faeroe", "Atlantic/Madeira",
         "Europe/Lisbon"]),
    zone!("Africa/Algiers", HOUR, None,
        ["Africa/Bangui", "Africa/Brazzaville", "Africa/Douala",
         "Africa/Kinshasa", "Africa/Lagos", "Africa/Libreville",
         "Africa/Luanda", "Africa/Malabo", "Africa/Ndjamena",
         "Africa/Niamey", "Africa/Porto-Novo", "Africa/Tunis"]),
    zone!("Africa/Windhoek", HOUR,
        rule(at(9, 1, SUN, 2 * HOUR), at(4, 1, SUN, 2 * HOUR))),
    zone!("CET", HOUR, EU,
        ["ECT", "MET", "Africa/Ceuta", "Arctic/Longyearbyen",
         "Europe/Amsterdam", "Europe/Andorra", "Europe/Belgrade",
         "Europe/Berlin", "Europe/Bratislava", "Europe/Brussels",
         "Europe/Budapest", "Europe/Copenhagen", "Europe/Gibraltar",
         "Europe/Ljubljana", "Europe/Luxembourg", "Europe/Madrid",
         "Europe/Malta", "Europe/Monaco", "Europe/Oslo", "Europe/Paris",
         "Europe/Prague", "Europe/Rome", "Europe/San_Marino",
         "Europe/Sarajevo", "Europe/Skopje", "Europe/Stockholm",
         "Europe/Tirane", "Europe/Vaduz", "Europe/Vatican",
         "Europe/Vienna", "Europe/Warsaw", "Europe/Zagreb",
         "Europe/Zurich"]),
    zone!("ART", 2 * HOUR,
        rule(at(4, -1, FRI, 0), at(9, -1, THU, 23 * HOUR)),
        ["Africa/Cairo"]),
    zone!("CAT", 2 * HOUR, None,
        ["Africa/Blantyre", "Africa/Bujumbura", "Africa/Gaborone",
         "Africa/Harare", "Africa/Johannesburg", "Africa/Kigali",
         "Africa/Lubumbashi", "Africa/Lusaka", "Africa/Maputo",
         "Africa/Maseru", "Africa/Mbabane", "Africa/Tripoli",
         "Europe/Riga", "Europe/Tallinn", "Europe/Vilnius"]),
    zone!("Asia/Amman", 2 * HOUR,
        rule(at(3, -1, THU, 0), at(9, -1, THU, 0))),
    zone!("Asia/Beirut", 2 * HOUR,
        rule(at(3, -1, SUN, 0), at(10, -1, SUN, 0))),
    zone!("Asia/Damascus", 2 * HOUR,
        rule(at(4, 1, 0, 0), at(10, 1, 0, 0))),
    zone!("Asia/Gaza", 2 * HOUR,
        rule(at(4, 3, FRI, 0), at(10, 3, FRI, 0))),
    zone!("Asia/Jerusalem", 2 * HOUR,
        rule(at(4, 1, 0, HOUR), at(10, 1, 0, HOUR))),
    zone!("EET", 2 * HOUR,
        rule(at(3, -1, SUN, 3 * HOUR), at(10, -1, SUN, 3 * HOUR)),
        ["Asia/Istanbul", "Asia/Nicosia", "Europe/Athens",
         "Europe/Bucharest", "Europe/Chisinau", "Europe/Helsinki",
         "Europe/Istanbul", "Europe/Kiev", "Europe/Nicosia",
         "Europe/Simferopol", "Europe/Sofia", "Europe/Uzhgorod",
         "Europe/Zaporozhye"]),
    zone!("Europe/Kaliningrad", 2 * HOUR, EU, ["Europe/Minsk"]),
    zone!("Asia/Baghdad", 3 * HOUR,
        rule(at(4, 1, 0, 3 * HOUR), at(10, 1, 0, 3 * HOUR))),
    zone!("Europe/Moscow", 3 * HOUR, EU, ["Europe/Tiraspol"]),
    zone!("EAT", 3 * HOUR, None,
        ["Africa/Addis_Ababa", "Africa/Asmera", "Africa/Dar_es_Salaam",
         "Africa/Djibouti", "Africa/Kampala", "Africa/Khartoum",
         "Africa/Mogadishu", "Africa/Nairobi", "Antarctica/Syowa",
         "Asia/Aden", "Asia/Bahrain", "Asia/Kuwait", "Asia/Qatar",
         "Asia/Riyadh", "Indian/Antananarivo", "Indian/Comoro",
         "Indian/Mayotte"]),
    zone!("Asia/Tehran", 3 * HOUR + 1800, None),
    zone!("Asia/Baku", 4 * HOUR,
        rule(at(3, -1, SUN, HOUR), at(10, -1, SUN, HOUR))),
    zone!("Asia/Aqtau", 4 * HOUR,
        rule(at(3, -1, SUN, 0), at(10, -1, SUN, 0)),
        ["Asia/Tbilisi"]),
    zone!("Asia/Yerevan", 4 * HOUR, EU, ["Europe/Samara"]),
    zone!("NET", 4 * HOUR, None,
        ["Asia/Dubai", "Asia/Muscat", "Indian/Mahe", "Indian/Mauritius",
         "Indian/Reunion"]),
    zone!("Asia/Kabul", 4 * HOUR + 1800, None),
    zone!("Asia/Aqtobe", 5 * HOUR,
        rule(at(3, -1, SUN, 0), at(10, -1, SUN, 0))),
    zone!("Asia/Bishkek", 5 * HOUR,
        rule(at(3, -1, SUN, 9000), at(10, -1, SUN, 9000))),
    zone!("Asia/Yekaterinburg", 5 * HOUR, EU),
    zone!("PLT", 5 * HOUR, None,
        ["Asia/Ashgabat", "Asia/Dushanbe", "Asia/Karachi",
         "Asia/Samarkand", "Asia/Tashkent", "Indian/Chagos",
         "Indian/Kerguelen", "Indian/Maldives"]),
    zone!("IST", 5 * HOUR + 1800, None, ["Asia/Calcutta"]),
    zone!("Asia/Katmandu", 5 * HOUR + 2700, None),
    zone!("BST", 6 * HOUR, None,
        ["Antarctica/Mawson", "Asia/Colombo", "Asia/Dhaka",
         "Asia/Thimphu"]),
    zone!("Asia/Almaty", 6 * HOUR,
        rule(at(3, -1, SUN, 0), at(10, -1, SUN, 0))),
    zone!("Asia/Novosibirsk", 6 * HOUR, EU, ["Asia/Omsk"]),
    zone!("Asia/Rangoon", 6 * HOUR + 1800, None, ["Indian/Cocos"]),
    zone!("VST", 7 * HOUR, None,
        ["Antarctica/Davis", "Asia/Bangkok", "Asia/Hovd", "Asia/Jakarta",
         "Asia/Phnom_Penh", "Asia/Saigon", "Asia/Vientiane",
         "Indian/Christmas"]),
    zone!("Asia/Krasnoyarsk", 7 * HOUR, EU),
    zone!("CTT", 8 * HOUR, None,
        ["Antarctica/Casey", "Asia/Brunei", "Asia/Chungking",
         "Asia/Harbin", "Asia/Hong_Kong", "Asia/Kashgar",
         "Asia/Kuala_Lumpur", "Asia/Kuching", "Asia/Macao", "Asia/Manila",
         "Asia/Shanghai", "Asia/Singapore", "Asia/Taipei",
         "Asia/Ujung_Pandang", "Asia/Ulaanbaatar", "Asia/Urumqi",
         "Australia/Perth"]),
    zone!("Asia/Irkutsk", 8 * HOUR, EU),
    zone!("JST", 9 * HOUR, None,
        ["Asia/Dili", "Asia/Jayapura", "Asia/Pyongyang", "Asia/Seoul",
         "Asia/Tokyo", "Pacific/Palau"]),
    zone!("Asia/Yakutsk", 9 * HOUR, EU),
    zone!("Australia/Adelaide", 9 * HOUR + 1800,
        rule(at(10, -1, SUN, 2 * HOUR), at(3, -1, SUN, 2 * HOUR)),
        ["Australia/Broken_Hill"]),
    zone!("ACT", 9 * HOUR + 1800, None, ["Australia/Darwin"]),
    zone!("Antarctica/DumontDUrville", 10 * HOUR, None,
        ["Australia/Brisbane", "Australia/Lindeman", "Pacific/Guam",
         "Pacific/Port_Moresby", "Pacific/Saipan", "Pacific/Truk",
         "Pacific/Yap"]),
    zone!("Asia/Vladivostok", 10 * HOUR, EU),
    zone!("Australia/Hobart", 10 * HOUR,
        rule(at(10, 1, SUN, 2 * HOUR), at(3, -1, SUN, 2 * HOUR))),
    zone!("AET", 10 * HOUR,
        rule(at(10, -1, SUN, 2 * HOUR), at(3, -1, SUN, 2 * HOUR)),
        ["Australia/Melbourne", "Australia/Sydney"]),
    zone!("Australia/Lord_Howe", 10 * HOUR + 1800,
        Some(DaylightRule {
            start: at(10, -1, SUN, 2 * HOUR),
            end: at(3, -1, SUN, 2 * HOUR),
            savings: 1800,
        })),
    zone!("Asia/Magadan", 11 * HOUR, EU),
    zone!("SST", 11 * HOUR, None,
        ["Pacific/Efate", "Pacific/Guadalcanal", "Pacific/Kosrae",
         "Pacific/Noumea", "Pacific/Ponape"]),
    zone!("Pacific/Norfolk", 11 * HOUR + 1800, None),
    zone!("NST", 12 * HOUR,
        rule(at(10, 1, SUN, 2 * HOUR), at(3, 3, SUN, 2 * HOUR)),
        ["Antarctica/McMurdo", "Antarctica/South_Pole",
         "Pacific/Auckland"]),
    zone!("Asia/Anadyr", 12 * HOUR, EU, ["Asia/Kamchatka"]),
    zone!("Pacific/Fiji", 12 * HOUR, None,
        ["Pacific/Funafuti", "Pacific/Kwajalein", "Pacific/Majuro",
         "Pacific/Nauru", "Pacific/Tarawa", "Pacific/Wake",
         "Pacific/Wallis"]),
    zone!("Pacific/Chatham", 12 * HOUR + 2700,
        rule(at(10, 1, SUN, 2 * HOUR + 2700), at(3, 3, SUN, 2 * HOUR + 2700))),
    zone!("Pacific/Enderbury", 13 * HOUR, None, ["Pacific/Tongatapu"]),
    zone!("Pacific/Kiritimati", 14 * HOUR, None),
];
