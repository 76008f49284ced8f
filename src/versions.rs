use crate::model::{Generation, VersionGroup};
use phf::phf_set;
use std::collections::BTreeSet;

// Titles that do have a pokédex in the reference data but never get a
// catalogue of their own.
static KNOWN_SIDE_VERSIONS: phf::Set<&'static str> = phf_set! {
    "lets-go-pikachu-lets-go-eevee",
    "legends-arceus",
    "the-teal-mask",
    "the-indigo-disk",
};

pub fn classify(version_groups: &[VersionGroup]) -> BTreeSet<String> {
    let mut side: BTreeSet<String> = KNOWN_SIDE_VERSIONS.iter().map(|v| v.to_string()).collect();
    side.extend(
        version_groups
            .iter()
            .filter(|group| group.pokedexes.is_empty())
            .map(|group| group.name.clone()),
    );
    side
}

// The stadium titles have no pokédex entry in the reference data.
fn extra_versions(generation_number: u32) -> &'static [&'static str] {
    match generation_number {
        1 => &["stadium"],
        2 => &["stadium-2"],
        _ => &[],
    }
}

pub fn applicable_versions(
    generation: &Generation,
    generation_number: u32,
    side: &BTreeSet<String>,
) -> Vec<String> {
    let mut versions: Vec<String> = generation
        .version_groups
        .iter()
        .filter(|group| !side.contains(&group.name))
        .map(|group| group.name.clone())
        .collect();
    versions.extend(extra_versions(generation_number).iter().map(|v| v.to_string()));
    versions
}

pub fn generation_label(generation_number: u32, versions: &[String]) -> String {
    format!("generation {generation_number} ({})", versions.join(", "))
}
