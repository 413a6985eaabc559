use serde::{Deserialize, Serialize};

/// Identifier assigned by the history store, in insertion order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub i64);

impl RecordId {
    pub fn get(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A beer as delivered by the remote source, before it is persisted
///
/// Unknown payload fields are ignored. Each of the three fields must be
/// present and a string; empty strings are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Beer {
    pub brand: String,
    pub name: String,
    pub style: String,
}

impl Beer {
    pub fn new(
        brand: impl Into<String>,
        name: impl Into<String>,
        style: impl Into<String>,
    ) -> Self {
        Self {
            brand: brand.into(),
            name: name.into(),
            style: style.into(),
        }
    }
}

/// A persisted row of the `beers` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeerRecord {
    pub id: RecordId,
    #[serde(flatten)]
    pub beer: Beer,
}

impl BeerRecord {
    pub fn new(id: RecordId, beer: Beer) -> Self {
        Self { id, beer }
    }
}

/// What the detail region currently shows
///
/// A fetched beer is shown even when it could not be persisted, so it has
/// no record id. A beer picked from history keeps its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurrentDetail {
    Fetched(Beer),
    Recorded(BeerRecord),
}

impl CurrentDetail {
    pub fn beer(&self) -> &Beer {
        match self {
            CurrentDetail::Fetched(beer) => beer,
            CurrentDetail::Recorded(record) => &record.beer,
        }
    }

    pub fn record_id(&self) -> Option<RecordId> {
        match self {
            CurrentDetail::Fetched(_) => None,
            CurrentDetail::Recorded(record) => Some(record.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beer_ignores_unknown_fields() {
        let json = r#"{
            "id": 8123,
            "uid": "2f1c0c8e-4a0e-4c1e-9a53-0d0c6b3c2a11",
            "brand": "Guinness",
            "name": "Draught",
            "style": "Stout",
            "hop": "Cascade",
            "yeast": "1084 - Irish Ale",
            "malts": "Roasted barley",
            "ibu": "45 IBU",
            "alcohol": "4.2%",
            "blg": "10.4°Blg"
        }"#;

        let beer: Beer = serde_json::from_str(json).unwrap();
        assert_eq!(beer, Beer::new("Guinness", "Draught", "Stout"));
    }

    #[test]
    fn test_beer_requires_all_three_fields() {
        let json = r#"{"brand": "Guinness", "name": "Draught"}"#;
        let result: std::result::Result<Beer, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_beer_rejects_non_string_field() {
        let json = r#"{"brand": "Guinness", "name": 7, "style": "Stout"}"#;
        let result: std::result::Result<Beer, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_beer_accepts_empty_strings() {
        let json = r#"{"brand": "", "name": "", "style": ""}"#;
        let beer: Beer = serde_json::from_str(json).unwrap();
        assert_eq!(beer, Beer::new("", "", ""));
    }

    #[test]
    fn test_record_serializes_flat() {
        let record = BeerRecord::new(RecordId(3), Beer::new("Guinness", "Draught", "Stout"));
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 3,
                "brand": "Guinness",
                "name": "Draught",
                "style": "Stout"
            })
        );
    }

    #[test]
    fn test_current_detail_record_id() {
        let beer = Beer::new("a", "b", "c");
        assert_eq!(CurrentDetail::Fetched(beer.clone()).record_id(), None);

        let recorded = CurrentDetail::Recorded(BeerRecord::new(RecordId(9), beer.clone()));
        assert_eq!(recorded.record_id(), Some(RecordId(9)));
        assert_eq!(recorded.beer(), &beer);
    }
}
