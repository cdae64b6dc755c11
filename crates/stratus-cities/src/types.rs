use serde::{Deserialize, Serialize};

/// A world city from the geonames dataset.
///
/// Identity is structural; the dataset exposes no stable ID, so two
/// cities with identical fields are indistinguishable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub timezone: String,
    pub population: u64,
    pub country: String,
}

/// Wire shape of the records API response.
#[derive(Debug, Deserialize)]
pub(crate) struct RecordsResponse {
    #[serde(default)]
    pub records: Vec<Record>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Record {
    pub fields: RecordFields,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecordFields {
    pub name: Option<String>,
    pub timezone: Option<String>,
    // The dataset serves populations as JSON numbers, occasionally with
    // a fractional part.
    pub population: Option<f64>,
    pub cou_name_en: Option<String>,
}

impl RecordsResponse {
    /// Convert wire records into cities, skipping incomplete rows.
    pub(crate) fn into_cities(self) -> Vec<City> {
        self.records
            .into_iter()
            .filter_map(|record| {
                let f = record.fields;
                match (f.name, f.timezone, f.population, f.cou_name_en) {
                    (Some(name), Some(timezone), Some(population), Some(country)) => Some(City {
                        name,
                        timezone,
                        population: population.max(0.0) as u64,
                        country,
                    }),
                    _ => {
                        tracing::debug!("Skipping city record with missing fields");
                        None
                    }
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_records_are_skipped() {
        let response: RecordsResponse = serde_json::from_str(
            r#"{
                "records": [
                    {"fields": {"name": "Ottawa", "timezone": "America/Toronto", "population": 934243, "cou_name_en": "Canada"}},
                    {"fields": {"name": "Nowhere", "timezone": "Etc/UTC"}}
                ]
            }"#,
        )
        .expect("parse");

        let cities = response.into_cities();
        assert_eq!(cities.len(), 1);
        assert_eq!(cities[0].name, "Ottawa");
        assert_eq!(cities[0].population, 934243);
        assert_eq!(cities[0].country, "Canada");
    }

    #[test]
    fn test_missing_records_array_is_empty() {
        let response: RecordsResponse = serde_json::from_str("{}").expect("parse");
        assert!(response.into_cities().is_empty());
    }

    #[test]
    fn test_fractional_population_truncates() {
        let response: RecordsResponse = serde_json::from_str(
            r#"{"records": [{"fields": {"name": "X", "timezone": "Etc/UTC", "population": 1000.7, "cou_name_en": "Y"}}]}"#,
        )
        .expect("parse");
        assert_eq!(response.into_cities()[0].population, 1000);
    }
}
