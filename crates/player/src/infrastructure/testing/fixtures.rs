//! Simple test fixtures used across unit tests.

use pokeform_domain::{SelectOption, SelectionSet};
use serde_json::{json, Value};

use crate::application::dto::{CatalogPage, CreatureDetail};
use crate::ports::outbound::ApiError;

/// (name, id, categories) of the fixture catalog
pub const CREATURES: [(&str, u32, &[&str]); 6] = [
    ("bulbasaur", 1, &["grass", "poison"]),
    ("charmander", 4, &["fire"]),
    ("squirtle", 7, &["water"]),
    ("pikachu", 25, &["electric"]),
    ("pidgey", 16, &["normal", "flying"]),
    ("eevee", 133, &["normal"]),
];

pub fn api_request_failed(msg: &str) -> ApiError {
    ApiError::RequestFailed(msg.to_string())
}

pub fn catalog_page_json() -> Value {
    let results: Vec<Value> = CREATURES
        .iter()
        .map(|(name, id, _)| {
            json!({ "name": name, "url": format!("https://pokeapi.co/api/v2/pokemon/{}/", id) })
        })
        .collect();
    json!({
        "count": 1302,
        "next": "https://pokeapi.co/api/v2/pokemon?offset=151&limit=151",
        "previous": null,
        "results": results,
    })
}

pub fn catalog_page() -> CatalogPage {
    serde_json::from_value(catalog_page_json()).unwrap_or_default()
}

pub fn detail_json(id: u32, name: &str, categories: &[&str]) -> Value {
    let types: Vec<Value> = categories
        .iter()
        .enumerate()
        .map(|(i, category)| json!({ "slot": i + 1, "type": { "name": category, "url": "" } }))
        .collect();
    json!({
        "id": id,
        "name": name,
        "sprites": {
            "front_default": format!(
                "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/{}.png",
                id
            ),
        },
        "types": types,
    })
}

/// Detail record of a fixture creature, or `None` for unknown names
pub fn detail(name: &str) -> Option<CreatureDetail> {
    CREATURES
        .iter()
        .find(|(n, _, _)| *n == name)
        .and_then(|(n, id, categories)| serde_json::from_value(detail_json(*id, n, categories)).ok())
}

/// The first `n` fixture creatures as selected options
pub fn team(n: usize) -> SelectionSet {
    catalog_page()
        .to_options()
        .into_iter()
        .take(n)
        .collect()
}

pub fn option(name: &str) -> SelectOption {
    catalog_page()
        .to_options()
        .into_iter()
        .find(|o| o.value() == name)
        .unwrap_or_else(|| SelectOption::new(name, name))
}
