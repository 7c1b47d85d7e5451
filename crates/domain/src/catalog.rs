//! Zone catalog
//!
//! Read-only lookup of IANA zone identifiers and their display metadata.
//! Validity checks defer to the full IANA set compiled into `chrono-tz`;
//! display names and per-country zone lists come from a bundled static
//! table. Built once at process start and never mutated.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::value_objects::{CountryCode, Timezone};

/// One row of the bundled display-metadata table
struct ZoneRecord {
    id: &'static str,
    country: &'static str,
    long_name: &'static str,
    /// Representative population of the zone's area, used only to order
    /// zones within a country
    population: u64,
}

const fn rec(
    id: &'static str,
    country: &'static str,
    long_name: &'static str,
    population: u64,
) -> ZoneRecord {
    ZoneRecord {
        id,
        country,
        long_name,
        population,
    }
}

#[rustfmt::skip]
static ZONE_TABLE: &[ZoneRecord] = &[
    // North America
    rec("America/New_York", "US", "Eastern Time", 141_000_000),
    rec("America/Chicago", "US", "Central Time", 85_000_000),
    rec("America/Denver", "US", "Mountain Time", 15_000_000),
    rec("America/Phoenix", "US", "Mountain Time - Arizona", 5_500_000),
    rec("America/Los_Angeles", "US", "Pacific Time", 52_000_000),
    rec("America/Anchorage", "US", "Alaska Time", 730_000),
    rec("Pacific/Honolulu", "US", "Hawaii-Aleutian Time", 1_400_000),
    rec("America/Toronto", "CA", "Eastern Time", 24_000_000),
    rec("America/Winnipeg", "CA", "Central Time", 1_400_000),
    rec("America/Edmonton", "CA", "Mountain Time", 4_500_000),
    rec("America/Vancouver", "CA", "Pacific Time", 5_500_000),
    rec("America/Halifax", "CA", "Atlantic Time", 1_000_000),
    rec("America/St_Johns", "CA", "Newfoundland Time", 500_000),
    rec("America/Mexico_City", "MX", "Central Mexico Time", 88_000_000),
    rec("America/Tijuana", "MX", "Pacific Time", 2_100_000),
    rec("America/Cancun", "MX", "Eastern Standard Time", 900_000),
    rec("America/Guatemala", "GT", "Central Time", 17_000_000),
    rec("America/Costa_Rica", "CR", "Central Time", 5_100_000),
    rec("America/Panama", "PA", "Eastern Time", 4_300_000),
    rec("America/Havana", "CU", "Cuba Time", 11_000_000),
    rec("America/Jamaica", "JM", "Eastern Time", 2_800_000),
    rec("America/Santo_Domingo", "DO", "Atlantic Time", 11_000_000),
    // South America
    rec("America/Sao_Paulo", "BR", "Brasilia Time", 110_000_000),
    rec("America/Manaus", "BR", "Amazon Time", 2_600_000),
    rec("America/Rio_Branco", "BR", "Acre Time", 400_000),
    rec("America/Noronha", "BR", "Fernando de Noronha Time", 3_000),
    rec("America/Argentina/Buenos_Aires", "AR", "Argentina Time", 45_000_000),
    rec("America/Lima", "PE", "Peru Time", 33_000_000),
    rec("America/Bogota", "CO", "Colombia Time", 51_000_000),
    rec("America/Caracas", "VE", "Venezuela Time", 28_000_000),
    rec("America/La_Paz", "BO", "Bolivia Time", 12_000_000),
    rec("America/Asuncion", "PY", "Paraguay Time", 7_400_000),
    rec("America/Montevideo", "UY", "Uruguay Time", 3_400_000),
    rec("America/Santiago", "CL", "Chile Time", 18_000_000),
    rec("Pacific/Easter", "CL", "Easter Island Time", 7_000),
    rec("America/Guayaquil", "EC", "Ecuador Time", 17_000_000),
    rec("Pacific/Galapagos", "EC", "Galapagos Time", 30_000),
    // Europe
    rec("Europe/London", "GB", "Greenwich Mean Time", 67_000_000),
    rec("Europe/Dublin", "IE", "Greenwich Mean Time", 5_100_000),
    rec("Europe/Paris", "FR", "Central European Time", 68_000_000),
    rec("Europe/Berlin", "DE", "Central European Time", 84_000_000),
    rec("Europe/Rome", "IT", "Central European Time", 59_000_000),
    rec("Europe/Madrid", "ES", "Central European Time", 47_000_000),
    rec("Atlantic/Canary", "ES", "Western European Time", 2_200_000),
    rec("Europe/Lisbon", "PT", "Western European Time", 10_000_000),
    rec("Atlantic/Azores", "PT", "Azores Time", 240_000),
    rec("Europe/Amsterdam", "NL", "Central European Time", 17_700_000),
    rec("Europe/Brussels", "BE", "Central European Time", 11_600_000),
    rec("Europe/Zurich", "CH", "Central European Time", 8_800_000),
    rec("Europe/Vienna", "AT", "Central European Time", 9_000_000),
    rec("Europe/Warsaw", "PL", "Central European Time", 38_000_000),
    rec("Europe/Prague", "CZ", "Central European Time", 10_500_000),
    rec("Europe/Bratislava", "SK", "Central European Time", 5_400_000),
    rec("Europe/Budapest", "HU", "Central European Time", 9_700_000),
    rec("Europe/Stockholm", "SE", "Central European Time", 10_500_000),
    rec("Europe/Oslo", "NO", "Central European Time", 5_500_000),
    rec("Europe/Copenhagen", "DK", "Central European Time", 5_900_000),
    rec("Europe/Helsinki", "FI", "Eastern European Time", 5_500_000),
    rec("Europe/Athens", "GR", "Eastern European Time", 10_400_000),
    rec("Europe/Bucharest", "RO", "Eastern European Time", 19_000_000),
    rec("Europe/Sofia", "BG", "Eastern European Time", 6_800_000),
    rec("Europe/Belgrade", "RS", "Central European Time", 6_600_000),
    rec("Europe/Zagreb", "HR", "Central European Time", 3_900_000),
    rec("Europe/Tallinn", "EE", "Eastern European Time", 1_300_000),
    rec("Europe/Riga", "LV", "Eastern European Time", 1_900_000),
    rec("Europe/Vilnius", "LT", "Eastern European Time", 2_800_000),
    rec("Europe/Kyiv", "UA", "Eastern European Time", 36_000_000),
    rec("Europe/Istanbul", "TR", "Turkey Time", 85_000_000),
    rec("Atlantic/Reykjavik", "IS", "Greenwich Mean Time", 380_000),
    rec("Europe/Moscow", "RU", "Moscow Time", 80_000_000),
    rec("Europe/Kaliningrad", "RU", "Kaliningrad Time", 1_000_000),
    rec("Asia/Yekaterinburg", "RU", "Yekaterinburg Time", 13_000_000),
    rec("Asia/Novosibirsk", "RU", "Novosibirsk Time", 6_500_000),
    rec("Asia/Krasnoyarsk", "RU", "Krasnoyarsk Time", 3_500_000),
    rec("Asia/Irkutsk", "RU", "Irkutsk Time", 3_000_000),
    rec("Asia/Vladivostok", "RU", "Vladivostok Time", 4_300_000),
    rec("Asia/Kamchatka", "RU", "Petropavlovsk-Kamchatski Time", 300_000),
    // Middle East & Central Asia
    rec("Asia/Jerusalem", "IL", "Israel Time", 9_500_000),
    rec("Asia/Amman", "JO", "Eastern European Time", 11_000_000),
    rec("Asia/Beirut", "LB", "Eastern European Time", 5_500_000),
    rec("Asia/Baghdad", "IQ", "Arabian Time", 43_000_000),
    rec("Asia/Riyadh", "SA", "Arabian Time", 36_000_000),
    rec("Asia/Dubai", "AE", "Gulf Time", 9_900_000),
    rec("Asia/Tehran", "IR", "Iran Time", 88_000_000),
    rec("Asia/Kabul", "AF", "Afghanistan Time", 40_000_000),
    rec("Asia/Karachi", "PK", "Pakistan Time", 235_000_000),
    rec("Asia/Tashkent", "UZ", "Uzbekistan Time", 35_000_000),
    rec("Asia/Almaty", "KZ", "Alma-Ata Time", 17_000_000),
    rec("Asia/Aqtobe", "KZ", "Aqtobe Time", 2_000_000),
    rec("Asia/Tbilisi", "GE", "Georgia Time", 3_700_000),
    rec("Asia/Yerevan", "AM", "Armenia Time", 2_800_000),
    rec("Asia/Baku", "AZ", "Azerbaijan Time", 10_000_000),
    // South & East Asia
    rec("Asia/Kolkata", "IN", "India Time", 1_400_000_000),
    rec("Asia/Colombo", "LK", "India Time", 22_000_000),
    rec("Asia/Kathmandu", "NP", "Nepal Time", 30_000_000),
    rec("Asia/Dhaka", "BD", "Bangladesh Time", 170_000_000),
    rec("Asia/Bangkok", "TH", "Indochina Time", 71_000_000),
    rec("Asia/Ho_Chi_Minh", "VN", "Indochina Time", 98_000_000),
    rec("Asia/Shanghai", "CN", "China Time", 1_400_000_000),
    rec("Asia/Hong_Kong", "HK", "Hong Kong Time", 7_400_000),
    rec("Asia/Taipei", "TW", "Taipei Time", 23_000_000),
    rec("Asia/Tokyo", "JP", "Japan Time", 125_000_000),
    rec("Asia/Seoul", "KR", "Korea Time", 51_000_000),
    rec("Asia/Singapore", "SG", "Singapore Time", 5_900_000),
    rec("Asia/Kuala_Lumpur", "MY", "Malaysia Time", 33_000_000),
    rec("Asia/Manila", "PH", "Philippine Time", 115_000_000),
    rec("Asia/Jakarta", "ID", "Western Indonesia Time", 180_000_000),
    rec("Asia/Makassar", "ID", "Central Indonesia Time", 60_000_000),
    rec("Asia/Jayapura", "ID", "Eastern Indonesia Time", 5_000_000),
    rec("Asia/Ulaanbaatar", "MN", "Ulaanbaatar Time", 3_300_000),
    rec("Asia/Hovd", "MN", "Hovd Time", 90_000),
    // Africa
    rec("Africa/Cairo", "EG", "Eastern European Time", 110_000_000),
    rec("Africa/Casablanca", "MA", "Western European Time", 37_000_000),
    rec("Africa/Algiers", "DZ", "Central European Time", 45_000_000),
    rec("Africa/Tunis", "TN", "Central European Time", 12_000_000),
    rec("Africa/Tripoli", "LY", "Eastern European Time", 6_800_000),
    rec("Africa/Lagos", "NG", "West Africa Time", 220_000_000),
    rec("Africa/Accra", "GH", "Greenwich Mean Time", 33_000_000),
    rec("Africa/Nairobi", "KE", "East Africa Time", 54_000_000),
    rec("Africa/Addis_Ababa", "ET", "East Africa Time", 123_000_000),
    rec("Africa/Dar_es_Salaam", "TZ", "East Africa Time", 65_000_000),
    rec("Africa/Kampala", "UG", "East Africa Time", 47_000_000),
    rec("Africa/Johannesburg", "ZA", "South Africa Time", 60_000_000),
    rec("Africa/Harare", "ZW", "Central Africa Time", 16_000_000),
    rec("Africa/Kinshasa", "CD", "West Africa Time", 60_000_000),
    rec("Africa/Lubumbashi", "CD", "Central Africa Time", 30_000_000),
    // Oceania
    rec("Australia/Sydney", "AU", "Australian Eastern Time", 16_000_000),
    rec("Australia/Brisbane", "AU", "Australian Eastern Time - Queensland", 5_000_000),
    rec("Australia/Adelaide", "AU", "Australian Central Time", 1_800_000),
    rec("Australia/Darwin", "AU", "Australian Central Time - Northern Territory", 250_000),
    rec("Australia/Perth", "AU", "Australian Western Time", 2_800_000),
    rec("Pacific/Auckland", "NZ", "New Zealand Time", 5_100_000),
    rec("Pacific/Chatham", "NZ", "Chatham Time", 600),
    rec("Pacific/Port_Moresby", "PG", "Papua New Guinea Time", 8_900_000),
    rec("Pacific/Bougainville", "PG", "Bougainville Time", 300_000),
    rec("Pacific/Tarawa", "KI", "Gilbert Islands Time", 120_000),
    rec("Pacific/Kanton", "KI", "Phoenix Islands Time", 30),
    rec("Pacific/Kiritimati", "KI", "Line Islands Time", 7_000),
    rec("Pacific/Chuuk", "FM", "Chuuk Time", 50_000),
    rec("Pacific/Pohnpei", "FM", "Pohnpei Time", 36_000),
];

/// A zone belonging to a country, with its ordering weight
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryZone {
    /// The zone identifier
    pub zone: Timezone,
    /// Representative population, used for most-populous-first ordering
    pub population: u64,
}

/// Read-only zone catalog, initialized once at process start
#[derive(Debug)]
pub struct ZoneCatalog {
    by_country: HashMap<&'static str, Vec<CountryZone>>,
    long_names: HashMap<&'static str, &'static str>,
}

impl ZoneCatalog {
    /// Build the catalog from the bundled table
    #[must_use]
    pub fn bundled() -> Self {
        let mut by_country: HashMap<&'static str, Vec<CountryZone>> = HashMap::new();
        let mut long_names = HashMap::new();

        for record in ZONE_TABLE {
            long_names.insert(record.id, record.long_name);
            let Ok(zone) = Timezone::parse(record.id) else {
                continue;
            };
            let zones = by_country.entry(record.country).or_default();
            if zones.iter().all(|z| z.zone != zone) {
                zones.push(CountryZone {
                    zone,
                    population: record.population,
                });
            }
        }

        for zones in by_country.values_mut() {
            zones.sort_by(|a, b| b.population.cmp(&a.population));
        }

        Self {
            by_country,
            long_names,
        }
    }

    /// Validate a zone identifier against the IANA database
    ///
    /// Returns `None` for identifiers the database does not know.
    #[must_use]
    pub fn validate(&self, id: &str) -> Option<Timezone> {
        Timezone::parse(id).ok()
    }

    /// Display name for a zone
    ///
    /// Falls back to the identifier with underscores replaced by spaces
    /// when the bundled table has no entry.
    #[must_use]
    pub fn long_name(&self, zone: &Timezone) -> String {
        self.long_names.get(zone.as_str()).map_or_else(
            || zone.as_str().replace('_', " "),
            |name| (*name).to_string(),
        )
    }

    /// All distinct zones of a country, most populous first
    #[must_use]
    pub fn zones_for_country(&self, country: CountryCode) -> &[CountryZone] {
        self.by_country
            .get(country.as_str())
            .map_or(&[], Vec::as_slice)
    }
}

impl Default for ZoneCatalog {
    fn default() -> Self {
        Self::bundled()
    }
}
