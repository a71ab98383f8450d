//! Fixed vocabularies the generators sample from.
//!
//! Everything is upper case so dashboard filters can match values verbatim.

/// ABAC tokens used in `TOKENS` expressions.
pub const TOKENS: [&str; 7] = ["AAA", "BBB", "CCC", "DDD", "XXX", "YYY", "ZZZ"];

pub const NIPF_PRIORITIES: &[&str] = &["1", "2", "3", "4", "NONE"];
pub const AFFILIATION_TYPES: &[&str] = &["CONTRACTOR", "CIVILIAN", "MILITARY"];
pub const YES_NO: &[&str] = &["YES", "NO"];
pub const SITE_RESILIENCE: &[&str] = &["ABC", "DEF", "GHI", "JKL"];

pub const BUILDINGS: &[&str] = &[
    "BLDG 1", "BLDG 2", "BLDG 3", "BLDG 4", "BLDG 5", "ANNEX A", "ANNEX B", "HQ",
];
pub const POP_CATEGORIES: &[&str] = &["OFFICER", "ENLISTED", "CIVILIAN", "CONTRACTOR"];
pub const NIAB_CATEGORY_SUFFIXES: &[&str] = &["A", "B", "C", "D", "E"];
pub const STATUSES: &[&str] = &["ACTIVE", "RESERVE", "GUARD", "CIVILIAN", "CONTRACT"];
pub const SKILLS: &[&str] = &[
    "CYBERSECURITY",
    "ENGINEERING",
    "INTELLIGENCE",
    "LOGISTICS",
    "MEDICAL",
    "PILOT",
    "MAINTENANCE",
    "COMMUNICATIONS",
];
pub const FOCUS_AREAS: &[&str] = &[
    "CYBER OPERATIONS",
    "AIR SUPERIORITY",
    "GLOBAL STRIKE",
    "MOBILITY",
    "ISR",
];
pub const FUNCTIONAL_ROLES: &[&str] = &[
    "ANALYST",
    "TECHNICIAN",
    "MANAGER",
    "SPECIALIST",
    "ADMINISTRATOR",
];
pub const WORK_ROLES: &[&str] = &["ANALYST", "ENGINEER", "OPERATOR", "MANAGER", "TECHNICIAN"];
pub const RANK_CATEGORIES: &[&str] = &["JUNIOR", "MID-LEVEL", "SENIOR", "EXECUTIVE"];
pub const LOE_JUSTIFICATIONS: &[&str] = &[
    "MISSION CRITICAL",
    "SUPPORT",
    "ADMINISTRATIVE",
    "TRAINING",
];

/// Technology domains. Sampled uniformly.
pub const DOMAINS: [&str; 10] = [
    "ARTIFICIAL INTELLIGENCE",
    "CLOUD COMPUTING",
    "CYBERSECURITY",
    "DATA SCIENCE",
    "ROBOTICS",
    "BLOCKCHAIN",
    "QUANTUM",
    "BIOMETRICS",
    "SATELLITE",
    "WIRELESS",
];

/// Job functions that cut across domains.
pub const FUNCTIONS: [&str; 10] = [
    "SOFTWARE ENGINEER",
    "DATA ANALYST",
    "SYSTEM ADMINISTRATOR",
    "PROJECT MANAGER",
    "CYBERSECURITY SPECIALIST",
    "TECHNICAL LEAD",
    "OPERATIONS MANAGER",
    "RESEARCH ANALYST",
    "QUALITY ASSURANCE",
    "BUSINESS ANALYST",
];

/// Percent weights for [`FUNCTIONS`], skewed toward technical roles. Sums to 100.
pub const FUNCTION_WEIGHTS: [u32; 10] = [35, 15, 12, 8, 10, 8, 5, 3, 2, 2];

pub const LANGUAGES: &[&str] = &[
    "BASIC",
    "HUTTESE",
    "SHYRIIWOOK",
    "RODIAN",
    "TWI'LEKI",
    "DROIDSPEAK",
    "EWOKESE",
    "JAWAESE",
    "MANDALORIAN",
    "BOCCE",
    "SULLUSTESE",
    "DURESE",
    "ZABRAK",
    "CEREAN",
    "GUNGAN",
    "NABOO",
    "CORELLIAN",
    "ALDERAANIAN",
];

pub const USA: &str = "UNITED STATES OF AMERICA";

/// `(city, state, country)`. International sites have no state.
pub const LOCATIONS: &[(&str, &str, &str)] = &[
    ("SAN ANTONIO", "TX", USA),
    ("COLORADO SPRINGS", "CO", USA),
    ("DAYTON", "OH", USA),
    ("WASHINGTON", "DC", USA),
    ("NORFOLK", "VA", USA),
    ("TAMPA", "FL", USA),
    ("LAS VEGAS", "NV", USA),
    ("LOS ANGELES", "CA", USA),
    ("OMAHA", "NE", USA),
    ("MONTGOMERY", "AL", USA),
    ("SHREVEPORT", "LA", USA),
    ("SPOKANE", "WA", USA),
    ("TUCSON", "AZ", USA),
    ("GOLDSBORO", "NC", USA),
    ("LITTLE ROCK", "AR", USA),
    ("BILOXI", "MS", USA),
    ("DEL RIO", "TX", USA),
    ("VALDOSTA", "GA", USA),
    ("GREAT FALLS", "MT", USA),
    ("MINOT", "ND", USA),
    ("CHEYENNE", "WY", USA),
    ("SALT LAKE CITY", "UT", USA),
    ("ANCHORAGE", "AK", USA),
    ("HONOLULU", "HI", USA),
    ("RAMSTEIN", "", "GERMANY"),
    ("SPANGDAHLEM", "", "GERMANY"),
    ("KAISERSLAUTERN", "", "GERMANY"),
    ("STUTTGART", "", "GERMANY"),
    ("WIESBADEN", "", "GERMANY"),
    ("YOKOTA", "", "JAPAN"),
    ("KADENA", "", "JAPAN"),
    ("MISAWA", "", "JAPAN"),
    ("OSAN", "", "SOUTH KOREA"),
    ("KUNSAN", "", "SOUTH KOREA"),
    ("LAKENHEATH", "", "UNITED KINGDOM"),
    ("MILDENHALL", "", "UNITED KINGDOM"),
    ("CROUGHTON", "", "UNITED KINGDOM"),
    ("AVIANO", "", "ITALY"),
    ("SIGONELLA", "", "ITALY"),
    ("INCIRLIK", "", "TURKEY"),
    ("AL UDEID", "", "QATAR"),
    ("AL DHAFRA", "", "UNITED ARAB EMIRATES"),
    ("ANDERSEN", "", "GUAM"),
    ("DIEGO GARCIA", "", "BRITISH INDIAN OCEAN TERRITORY"),
    ("THULE", "", "GREENLAND"),
    ("KEFLAVIK", "", "ICELAND"),
];

/// Duty orgs `Z11`..`Z44`.
pub fn orgs() -> Vec<String> {
    (1..=4)
        .flat_map(|i| (1..=4).map(move |j| format!("Z{i}{j}")))
        .collect()
}
