// Records as served by the reference API. Only the fields the pipeline reads are
// declared; everything else in the payload is ignored.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NamedResource {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl NamedResource {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        NamedResource {
            name: name.into(),
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResourceList {
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub results: Vec<NamedResource>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Generation {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub main_region: Option<NamedResource>,
    #[serde(default)]
    pub pokemon_species: Vec<NamedResource>,
    #[serde(default)]
    pub version_groups: Vec<NamedResource>,
}

impl Generation {
    pub fn has_version_group(&self, version_group: &str) -> bool {
        self.version_groups.iter().any(|v| v.name == version_group)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VersionGroup {
    pub name: String,
    #[serde(default)]
    pub generation: Option<NamedResource>,
    #[serde(default)]
    pub pokedexes: Vec<NamedResource>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PokedexEntry {
    #[serde(default)]
    pub entry_number: u32,
    #[serde(default)]
    pub pokemon_species: Option<NamedResource>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Pokedex {
    pub name: String,
    #[serde(default)]
    pub pokemon_entries: Vec<PokedexEntry>,
}

impl Pokedex {
    pub fn species(&self) -> crate::error::Result<Vec<NamedResource>> {
        self.pokemon_entries
            .iter()
            .map(|entry| {
                entry.pokemon_species.clone().ok_or_else(|| {
                    crate::error::PokedexError::SourceData(format!(
                        "pokédex {} entry {} has no species",
                        self.name, entry.entry_number
                    ))
                })
            })
            .collect()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PokemonForm {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub is_battle_only: bool,
    #[serde(default)]
    pub is_mega: bool,
    pub pokemon: NamedResource,
    pub version_group: NamedResource,
}
