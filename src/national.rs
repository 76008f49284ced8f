use crate::catalogue::Entry;
use crate::error::{PokedexError, Result};
use crate::model::Pokedex;
use std::collections::HashMap;

/// Name ↔ national number mapping built from the national pokédex. Listing
/// position is the number: the entry at offset `i` is `#i+1`.
#[derive(Debug, Clone)]
pub struct CanonicalNumbering {
    names: Vec<String>,
    numbers: HashMap<String, u32>,
}

pub fn build_canonical(national: &Pokedex) -> Result<CanonicalNumbering> {
    if national.pokemon_entries.is_empty() {
        return Err(PokedexError::SourceData(format!(
            "national pokédex `{}` has no entries",
            national.name
        )));
    }
    let mut names = Vec::with_capacity(national.pokemon_entries.len());
    let mut numbers = HashMap::with_capacity(national.pokemon_entries.len());
    for (offset, entry) in national.pokemon_entries.iter().enumerate() {
        let name = entry
            .pokemon_species
            .as_ref()
            .map(|species| species.name.as_str())
            .filter(|name| !name.is_empty())
            .ok_or_else(|| {
                PokedexError::SourceData(format!(
                    "national pokédex entry at position {} has no species name",
                    offset + 1
                ))
            })?;
        numbers.entry(name.to_string()).or_insert(offset as u32 + 1);
        names.push(name.to_string());
    }
    Ok(CanonicalNumbering { names, numbers })
}

impl CanonicalNumbering {
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn number_of(&self, name: &str) -> Option<u32> {
        self.numbers.get(name).copied()
    }

    pub fn name_of(&self, national_number: u32) -> Option<&str> {
        let offset = (national_number as usize).checked_sub(1)?;
        self.names.get(offset).map(String::as_str)
    }

    pub fn resolve(&self, national_number: u32) -> Result<&str> {
        self.name_of(national_number).ok_or_else(|| {
            PokedexError::Resolution(format!(
                "national number {national_number} (national pokédex has {} entries)",
                self.len()
            ))
        })
    }

    pub fn is_standard(&self, name: &str) -> bool {
        self.numbers.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn entries(&self) -> Vec<Entry> {
        self.names
            .iter()
            .enumerate()
            .map(|(offset, name)| Entry::single(name.clone(), offset as u32 + 1))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NamedResource, PokedexEntry};

    fn national(names: &[&str]) -> Pokedex {
        Pokedex {
            name: "national".into(),
            pokemon_entries: names
                .iter()
                .enumerate()
                .map(|(i, name)| PokedexEntry {
                    entry_number: i as u32 + 1,
                    pokemon_species: Some(NamedResource::new(
                        *name,
                        format!("https://pokeapi.co/api/v2/pokemon-species/{}/", i + 1),
                    )),
                })
                .collect(),
        }
    }

    #[test]
    fn offset_plus_one_is_the_number() {
        let canonical = build_canonical(&national(&["bulbasaur", "ivysaur", "venusaur"])).unwrap();
        for (offset, name) in ["bulbasaur", "ivysaur", "venusaur"].iter().enumerate() {
            assert_eq!(canonical.number_of(name), Some(offset as u32 + 1));
        }
        assert_eq!(canonical.name_of(2), Some("ivysaur"));
        assert_eq!(canonical.name_of(0), None);
        assert!(matches!(canonical.resolve(4), Err(PokedexError::Resolution(_))));
        assert_eq!(canonical.entries()[2], Entry::single("venusaur", 3));
    }

    #[test]
    fn empty_national_list_is_rejected() {
        let err = build_canonical(&national(&[])).unwrap_err();
        assert!(matches!(err, PokedexError::SourceData(_)));
    }

    #[test]
    fn missing_species_name_is_rejected() {
        let mut dex = national(&["bulbasaur", "ivysaur"]);
        dex.pokemon_entries[1].pokemon_species = None;
        assert!(matches!(
            build_canonical(&dex),
            Err(PokedexError::SourceData(_))
        ));
        let mut dex = national(&["bulbasaur", "ivysaur"]);
        dex.pokemon_entries[0].pokemon_species = Some(NamedResource::new("", ""));
        assert!(build_canonical(&dex).is_err());
    }
}
