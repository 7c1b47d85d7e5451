//! Country code value object
//!
//! Maps human country names to ISO 3166-1 alpha-2 codes via a static
//! table. Lookup is case-insensitive and treats hyphens as spaces.

use serde::{Deserialize, Deserializer, Serialize, de};
use std::fmt;

/// Country name to alpha-2 code mapping, including common aliases
static COUNTRY_TABLE: &[(&str, &str)] = &[
    ("afghanistan", "AF"),
    ("albania", "AL"),
    ("algeria", "DZ"),
    ("angola", "AO"),
    ("argentina", "AR"),
    ("armenia", "AM"),
    ("australia", "AU"),
    ("austria", "AT"),
    ("azerbaijan", "AZ"),
    ("bahamas", "BS"),
    ("bahrain", "BH"),
    ("bangladesh", "BD"),
    ("belarus", "BY"),
    ("belgium", "BE"),
    ("bolivia", "BO"),
    ("bosnia and herzegovina", "BA"),
    ("botswana", "BW"),
    ("brazil", "BR"),
    ("bulgaria", "BG"),
    ("cambodia", "KH"),
    ("cameroon", "CM"),
    ("canada", "CA"),
    ("chile", "CL"),
    ("china", "CN"),
    ("colombia", "CO"),
    ("costa rica", "CR"),
    ("croatia", "HR"),
    ("cuba", "CU"),
    ("cyprus", "CY"),
    ("czech republic", "CZ"),
    ("czechia", "CZ"),
    ("democratic republic of the congo", "CD"),
    ("denmark", "DK"),
    ("dominican republic", "DO"),
    ("ecuador", "EC"),
    ("egypt", "EG"),
    ("el salvador", "SV"),
    ("estonia", "EE"),
    ("ethiopia", "ET"),
    ("federated states of micronesia", "FM"),
    ("micronesia", "FM"),
    ("finland", "FI"),
    ("france", "FR"),
    ("georgia", "GE"),
    ("germany", "DE"),
    ("ghana", "GH"),
    ("greece", "GR"),
    ("guatemala", "GT"),
    ("honduras", "HN"),
    ("hong kong", "HK"),
    ("hungary", "HU"),
    ("iceland", "IS"),
    ("india", "IN"),
    ("indonesia", "ID"),
    ("iran", "IR"),
    ("iraq", "IQ"),
    ("ireland", "IE"),
    ("israel", "IL"),
    ("italy", "IT"),
    ("ivory coast", "CI"),
    ("cote d'ivoire", "CI"),
    ("jamaica", "JM"),
    ("japan", "JP"),
    ("jordan", "JO"),
    ("kazakhstan", "KZ"),
    ("kenya", "KE"),
    ("kiribati", "KI"),
    ("kuwait", "KW"),
    ("laos", "LA"),
    ("latvia", "LV"),
    ("lebanon", "LB"),
    ("libya", "LY"),
    ("lithuania", "LT"),
    ("luxembourg", "LU"),
    ("madagascar", "MG"),
    ("malaysia", "MY"),
    ("maldives", "MV"),
    ("mali", "ML"),
    ("malta", "MT"),
    ("mexico", "MX"),
    ("moldova", "MD"),
    ("mongolia", "MN"),
    ("montenegro", "ME"),
    ("morocco", "MA"),
    ("mozambique", "MZ"),
    ("myanmar", "MM"),
    ("namibia", "NA"),
    ("nepal", "NP"),
    ("netherlands", "NL"),
    ("new zealand", "NZ"),
    ("nicaragua", "NI"),
    ("nigeria", "NG"),
    ("north korea", "KP"),
    ("north macedonia", "MK"),
    ("norway", "NO"),
    ("oman", "OM"),
    ("pakistan", "PK"),
    ("panama", "PA"),
    ("papua new guinea", "PG"),
    ("paraguay", "PY"),
    ("peru", "PE"),
    ("philippines", "PH"),
    ("poland", "PL"),
    ("portugal", "PT"),
    ("qatar", "QA"),
    ("romania", "RO"),
    ("russia", "RU"),
    ("russian federation", "RU"),
    ("rwanda", "RW"),
    ("saudi arabia", "SA"),
    ("senegal", "SN"),
    ("serbia", "RS"),
    ("singapore", "SG"),
    ("slovakia", "SK"),
    ("slovenia", "SI"),
    ("south africa", "ZA"),
    ("south korea", "KR"),
    ("korea", "KR"),
    ("spain", "ES"),
    ("sri lanka", "LK"),
    ("sudan", "SD"),
    ("sweden", "SE"),
    ("switzerland", "CH"),
    ("syria", "SY"),
    ("taiwan", "TW"),
    ("tanzania", "TZ"),
    ("thailand", "TH"),
    ("tunisia", "TN"),
    ("turkey", "TR"),
    ("turkiye", "TR"),
    ("uganda", "UG"),
    ("ukraine", "UA"),
    ("united arab emirates", "AE"),
    ("uae", "AE"),
    ("united kingdom", "GB"),
    ("uk", "GB"),
    ("great britain", "GB"),
    ("england", "GB"),
    ("united states", "US"),
    ("united states of america", "US"),
    ("usa", "US"),
    ("america", "US"),
    ("uruguay", "UY"),
    ("uzbekistan", "UZ"),
    ("venezuela", "VE"),
    ("vietnam", "VN"),
    ("yemen", "YE"),
    ("zambia", "ZM"),
    ("zimbabwe", "ZW"),
];

/// An ISO 3166-1 alpha-2 country code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CountryCode(&'static str);

impl CountryCode {
    /// Resolve a human country name to its alpha-2 code
    ///
    /// Returns `None` for names the mapping table does not know.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.trim().replace('-', " ").to_lowercase();
        COUNTRY_TABLE
            .iter()
            .find(|(n, _)| *n == normalized)
            .map(|(_, code)| Self(code))
    }

    /// Resolve an alpha-2 code to its canonical table entry
    ///
    /// Returns `None` for codes no table row carries.
    #[must_use]
    pub fn from_alpha2(code: &str) -> Option<Self> {
        COUNTRY_TABLE
            .iter()
            .find(|(_, c)| c.eq_ignore_ascii_case(code))
            .map(|(_, c)| Self(c))
    }

    /// Get the alpha-2 code
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

// Deserialized by table lookup; the inner borrow must point at the
// static table, so a derived impl cannot work here.
impl<'de> Deserialize<'de> for CountryCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = String::deserialize(deserializer)?;
        Self::from_alpha2(&code)
            .ok_or_else(|| de::Error::custom(format!("unknown country code '{code}'")))
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_exact() {
        assert_eq!(CountryCode::from_name("France").map(|c| c.as_str()), Some("FR"));
        assert_eq!(CountryCode::from_name("Japan").map(|c| c.as_str()), Some("JP"));
    }

    #[test]
    fn test_from_name_case_insensitive() {
        assert_eq!(CountryCode::from_name("GERMANY").map(|c| c.as_str()), Some("DE"));
        assert_eq!(CountryCode::from_name("india").map(|c| c.as_str()), Some("IN"));
    }

    #[test]
    fn test_from_name_hyphenated() {
        // URL path segments arrive with hyphens instead of spaces
        assert_eq!(
            CountryCode::from_name("new-zealand").map(|c| c.as_str()),
            Some("NZ")
        );
        assert_eq!(
            CountryCode::from_name("united-states").map(|c| c.as_str()),
            Some("US")
        );
    }

    #[test]
    fn test_from_name_aliases() {
        assert_eq!(CountryCode::from_name("UK").map(|c| c.as_str()), Some("GB"));
        assert_eq!(CountryCode::from_name("USA").map(|c| c.as_str()), Some("US"));
        assert_eq!(CountryCode::from_name("Czechia").map(|c| c.as_str()), Some("CZ"));
    }

    #[test]
    fn test_from_name_unknown() {
        assert!(CountryCode::from_name("Atlantis").is_none());
        assert!(CountryCode::from_name("").is_none());
    }

    #[test]
    fn test_from_alpha2_case_insensitive() {
        assert_eq!(CountryCode::from_alpha2("fr").map(|c| c.as_str()), Some("FR"));
        assert_eq!(CountryCode::from_alpha2("JP").map(|c| c.as_str()), Some("JP"));
        assert!(CountryCode::from_alpha2("ZZ").is_none());
    }

    #[test]
    fn test_serde_round_trip() {
        let code = CountryCode::from_name("Germany").expect("mapped");
        let json = serde_json::to_string(&code).expect("serialize");
        assert_eq!(json, "\"DE\"");
        let back: CountryCode = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, code);
    }

    #[test]
    fn test_deserialize_unknown_code_rejected() {
        let result: Result<CountryCode, _> = serde_json::from_str("\"XX\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_display() {
        let code = CountryCode::from_name("Brazil").expect("mapped");
        assert_eq!(format!("{code}"), "BR");
    }
}
