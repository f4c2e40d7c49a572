//! Czech word tables.
//!
//! Agreement tables are indexed by bucket: 0, 1, 2, 3, 4, then 5 and above.

use super::agreement::AgreementTable;

/// Sign word.
pub const MINUS: &str = "mínus";

/// Zero.
pub const ZERO: &str = "nula";

/// Zero used for an absent whole part ("žádná celá pět").
pub const ZERO_NONE: &str = "žádná";

/// Feminine/neuter two, used for a standalone 2 and for 2 in currency mode.
pub const TWO_DUAL: &str = "dvě";

/// Words for 1 to 19.
pub const UNITS: [&str; 19] = [
    "jedna",
    "dva",
    "tři",
    "čtyři",
    "pět",
    "šest",
    "sedm",
    "osm",
    "devět",
    "deset",
    "jedenáct",
    "dvanáct",
    "třináct",
    "čtrnáct",
    "patnáct",
    "šestnáct",
    "sedmnáct",
    "osmnáct",
    "devatenáct",
];

/// Words for 20, 30, ..., 90.
pub const TENS: [&str; 8] = [
    "dvacet",
    "třicet",
    "čtyřicet",
    "padesát",
    "šedesát",
    "sedmdesát",
    "osmdesát",
    "devadesát",
];

/// Phrases for 100, 200, ..., 900.
pub const HUNDREDS: [&str; 9] = [
    "jedno sto",
    "dvě stě",
    "tři sta",
    "čtyři sta",
    "pět set",
    "šest set",
    "sedm set",
    "osm set",
    "devět set",
];

/// Phrases for 1000 to 4000.
pub const THOUSANDS: [&str; 4] = ["jeden tisíc", "dva tisíce", "tři tisíce", "čtyři tisíce"];

/// Thousand after a spelled group of 5 and more.
pub const THOUSANDS_PLURAL: &str = "tisíc";

/// Phrases for 1 000 000 to 4 000 000.
pub const MILLIONS: [&str; 4] = ["jeden milion", "dva miliony", "tři miliony", "čtyři miliony"];

/// Million after a spelled group of 5 and more.
pub const MILLIONS_PLURAL: &str = "milionů";

/// Word between the whole and the fractional part.
pub const DECIMAL_POINT: AgreementTable = ["celá", "celá", "celé", "celé", "celé", "celých"];

/// Unit word for two-digit fractions below ten.
pub const HUNDREDTHS: AgreementTable = ["setin", "setina", "setiny", "setiny", "setiny", "setin"];

/// Unit word for three-digit fractions below one hundred.
pub const THOUSANDTHS: AgreementTable = [
    "tisícin",
    "tisícina",
    "tisíciny",
    "tisíciny",
    "tisíciny",
    "tisícin",
];

/// Major currency unit.
pub const CROWNS: AgreementTable = ["korun", "koruna", "koruny", "koruny", "koruny", "korun"];

/// Minor currency unit.
pub const HELLERS: AgreementTable = ["haléřů", "haléř", "haléře", "haléře", "haléře", "haléřů"];

/// Minor unit counts 0 to 2, which agree with the masculine "haléř".
pub const HELLER_COUNTS: [&str; 3] = ["nula", "jeden", "dva"];
