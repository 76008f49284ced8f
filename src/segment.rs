use crate::catalogue::{Catalogue, Entry};
use crate::collate::{compare_natural, trailing_number};
use crate::datasets::Compatibility;
use crate::error::{PokedexError, Result};
use crate::gateway::ReferenceGateway;
use crate::model::{Generation, NamedResource};
use crate::national::CanonicalNumbering;
use crate::versions::{applicable_versions, generation_label};
use std::collections::BTreeSet;
use tracing::{debug, info};

pub const EARLY_GENERATIONS: usize = 7;

/// Box size by generation index. The first two generations had 20-slot boxes.
pub fn box_capacity(generation_index: usize) -> usize {
    if generation_index <= 1 {
        20
    } else {
        30
    }
}

fn sorted_by_reference(species: &[NamedResource]) -> Vec<&NamedResource> {
    let mut sorted: Vec<&NamedResource> = species.iter().collect();
    sorted.sort_by(|a, b| compare_natural(&a.url, &b.url));
    sorted
}

fn species_name(species: &NamedResource) -> Result<&str> {
    if species.name.is_empty() {
        return Err(PokedexError::SourceData(format!(
            "species reference `{}` has no name",
            species.url
        )));
    }
    Ok(&species.name)
}

fn number_new_species(species: &[NamedResource], previous_total: usize) -> Result<Vec<Entry>> {
    sorted_by_reference(species)
        .into_iter()
        .enumerate()
        .map(|(position, specimen)| -> Result<Entry> {
            let number = (previous_total + position + 1) as u32;
            Ok(Entry::single(species_name(specimen)?, number))
        })
        .collect()
}

pub fn number_by_reference(species: &[NamedResource]) -> Result<Vec<Entry>> {
    sorted_by_reference(species)
        .into_iter()
        .map(|specimen| -> Result<Entry> {
            Ok(Entry::single(
                species_name(specimen)?,
                trailing_number(&specimen.url)?,
            ))
        })
        .collect()
}

pub fn region_entries(gateway: &dyn ReferenceGateway, region: &str) -> Result<Vec<Entry>> {
    let pokedex = gateway.pokedex(region)?;
    number_by_reference(&pokedex.species()?)
}

pub fn segment_early(generations: &[Generation], side: &BTreeSet<String>) -> Result<Vec<Catalogue>> {
    let (catalogues, _) = generations.iter().take(EARLY_GENERATIONS).enumerate().try_fold(
        (Vec::new(), Vec::<Entry>::new()),
        |(mut catalogues, accumulated), (index, generation)| -> Result<(Vec<Catalogue>, Vec<Entry>)> {
            let generation_number = index as u32 + 1;
            let new_entries = number_new_species(&generation.pokemon_species, accumulated.len())?;
            debug!(
                generation = generation_number,
                new = new_entries.len(),
                total = accumulated.len() + new_entries.len(),
                "segmented generation"
            );
            let mut entries = accumulated;
            entries.extend(new_entries);
            let label = generation_label(
                generation_number,
                &applicable_versions(generation, generation_number, side),
            );
            catalogues.push(Catalogue::new(
                label,
                generation_number,
                box_capacity(index),
                entries.clone(),
            ));
            Ok((catalogues, entries))
        },
    )?;
    Ok(catalogues)
}

pub fn segment_late(
    gateway: &dyn ReferenceGateway,
    generations: &[Generation],
    side: &BTreeSet<String>,
    compatibility: &Compatibility,
    canonical: &CanonicalNumbering,
) -> Result<Vec<Catalogue>> {
    let mut catalogues = Vec::new();
    for (index, generation) in generations.iter().enumerate().skip(EARLY_GENERATIONS) {
        let generation_number = index as u32 + 1;
        let region = generation.main_region.as_ref().ok_or_else(|| {
            PokedexError::SourceData(format!("generation {} has no main region", generation.name))
        })?;
        let versions = applicable_versions(generation, generation_number, side);
        let mut entries = region_entries(gateway, &region.name)?;
        let regional = entries.len();
        apply_compatibility(&mut entries, &versions, compatibility, canonical)?;
        info!(
            generation = generation_number,
            region = %region.name,
            regional,
            transferable = entries.len() - regional,
            "fetched regional pokédex"
        );
        catalogues.push(Catalogue::new(
            generation_label(generation_number, &versions),
            generation_number,
            30,
            entries,
        ));
    }
    Ok(catalogues)
}

pub fn apply_compatibility(
    entries: &mut Vec<Entry>,
    versions: &[String],
    compatibility: &Compatibility,
    canonical: &CanonicalNumbering,
) -> Result<()> {
    let mut present: BTreeSet<u32> = entries.iter().flat_map(|e| e.national_numbers()).collect();
    let mut added = false;
    for version in versions {
        let Some(numbers) = compatibility.get(version) else {
            continue;
        };
        for &number in numbers {
            if present.insert(number) {
                entries.push(Entry::single(canonical.resolve(number)?, number));
                added = true;
            }
        }
    }
    if added {
        entries.sort_by_key(|entry| entry.national_numbers().first().copied().unwrap_or(0));
    }
    Ok(())
}
