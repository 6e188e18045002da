/// Catalog data model
///
/// These structs mirror the PokéAPI JSON payloads. Unknown fields are
/// ignored when decoding so new upstream attributes never break the app.
use serde::{Deserialize, Serialize};

/// One catalog entry as returned by the list endpoint
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Lowercase entry name, also accepted as an id by the detail endpoint
    pub name: String,
    /// Detail resource URL
    pub url: String,
}

/// One page of the catalog
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ListEnvelope {
    /// Total number of entries upstream
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<Summary>,
}

/// Full attributes of one entry
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Details {
    pub id: u32,
    pub name: String,
    /// Height in decimetres
    pub height: u32,
    /// Weight in hectograms
    pub weight: u32,
    pub sprites: Sprites,
    pub types: Vec<TypeSlot>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Sprites {
    pub front_default: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TypeSlot {
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: TypeInfo,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TypeInfo {
    pub name: String,
    pub url: String,
}

impl Details {
    /// Height in metres (the API reports decimetres)
    pub fn height_meters(&self) -> f64 {
        f64::from(self.height) / 10.0
    }

    /// Weight in kilograms (the API reports hectograms)
    pub fn weight_kilograms(&self) -> f64 {
        f64::from(self.weight) / 10.0
    }

    /// Whether these details were fetched for `id`.
    ///
    /// Names compare case-insensitively, numeric ids compare exactly.
    pub fn matches_id(&self, id: &str) -> bool {
        self.name.eq_ignore_ascii_case(id) || self.id.to_string() == id
    }

    /// Type names in payload order
    pub fn type_names(&self) -> Vec<&str> {
        self.types.iter().map(|slot| slot.kind.name.as_str()).collect()
    }
}

/// Uppercase the first character, leave the rest alone
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::BULBASAUR_JSON;

    #[test]
    fn test_decode_list_envelope() {
        let json = r#"{
            "count": 1302,
            "next": null,
            "previous": null,
            "results": [
                {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"},
                {"name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/"}
            ]
        }"#;

        let envelope: ListEnvelope = serde_json::from_str(json).unwrap();

        assert_eq!(envelope.count, 1302);
        assert_eq!(envelope.next, None);
        assert_eq!(envelope.results.len(), 2);
        assert_eq!(envelope.results[1].name, "ivysaur");
    }

    #[test]
    fn test_decode_details_ignores_unknown_fields() {
        let details: Details = serde_json::from_str(BULBASAUR_JSON).unwrap();

        assert_eq!(details.id, 1);
        assert_eq!(details.name, "bulbasaur");
        assert_eq!(
            details.sprites.front_default.as_deref(),
            Some("https://example.test/sprites/1.png")
        );
        assert_eq!(details.type_names(), vec!["poison", "grass"]);
        assert_eq!(details.types[0].slot, 2);
    }

    #[test]
    fn test_decode_details_null_sprite() {
        let json = r#"{"id": 10, "name": "caterpie", "height": 3, "weight": 29,
            "sprites": {"front_default": null}, "types": []}"#;

        let details: Details = serde_json::from_str(json).unwrap();

        assert_eq!(details.sprites.front_default, None);
        assert!(details.types.is_empty());
    }

    #[test]
    fn test_unit_conversion() {
        let details: Details = serde_json::from_str(BULBASAUR_JSON).unwrap();

        assert_eq!(details.height_meters(), 0.7);
        assert_eq!(details.weight_kilograms(), 6.9);
    }

    #[test]
    fn test_matches_id() {
        let details: Details = serde_json::from_str(BULBASAUR_JSON).unwrap();

        assert!(details.matches_id("bulbasaur"));
        assert!(details.matches_id("BulbaSaur"));
        assert!(details.matches_id("1"));
        assert!(!details.matches_id("01"));
        assert!(!details.matches_id("ivysaur"));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("pikachu"), "Pikachu");
        assert_eq!(capitalize("mr-mime"), "Mr-mime");
        assert_eq!(capitalize(""), "");
    }
}
