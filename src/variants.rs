use crate::catalogue::{Catalogue, Variant};
use crate::collate::compare_keys;
use crate::datasets::FormExclusions;
use crate::error::{PokedexError, Result};
use crate::gateway::{fetch_all, ReferenceGateway};
use crate::model::{Generation, NamedResource, PokemonForm};
use crate::national::CanonicalNumbering;
use phf::phf_set;
use tracing::{info, warn};

// Spin-off titles with no form support.
static VARIANT_FREE_CATALOGUES: phf::Set<&'static str> = phf_set! {
    "colosseum",
    "xd-gale-of-darkness",
};

fn receives_variants(catalogue: &Catalogue) -> bool {
    !VARIANT_FREE_CATALOGUES
        .iter()
        .any(|fragment| catalogue.label_contains(fragment))
}

/// The standard species whose name is contained in `pokemon_name`. The longest
/// match wins so `porygon-z` is not claimed by `porygon`.
fn owning_species<'a>(canonical: &'a CanonicalNumbering, pokemon_name: &str) -> Option<&'a str> {
    canonical
        .names()
        .filter(|name| pokemon_name.contains(name))
        .fold(None, |best, name| match best {
            Some(current) if current.len() >= name.len() => Some(current),
            _ => Some(name),
        })
}

fn generation_of(generations: &[Generation], version_group: &str) -> Option<u32> {
    generations
        .iter()
        .position(|generation| generation.has_version_group(version_group))
        .map(|index| index as u32 + 1)
}

pub fn compute_variants(
    gateway: &dyn ReferenceGateway,
    forms: &[NamedResource],
    canonical: &CanonicalNumbering,
    generations: &[Generation],
    exclusions: &FormExclusions,
) -> Result<Vec<Variant>> {
    let candidates: Vec<NamedResource> = forms
        .iter()
        .filter(|form| !canonical.is_standard(&form.name) && !exclusions.forms.contains(&form.name))
        .cloned()
        .collect();
    let details: Vec<PokemonForm> = fetch_all(&candidates, |name| gateway.form(name))?;

    let mut variants = Vec::new();
    for form in details {
        if form.is_battle_only || form.is_mega || exclusions.pokemon.contains(&form.pokemon.name) {
            continue;
        }
        let Some(species) = owning_species(canonical, &form.pokemon.name) else {
            warn!(form = %form.name, pokemon = %form.pokemon.name, "no standard species for form");
            continue;
        };
        let national_number = canonical.number_of(species).ok_or_else(|| {
            PokedexError::Resolution(format!("national number of species `{species}`"))
        })?;
        let generation = generation_of(generations, &form.version_group.name).ok_or_else(|| {
            PokedexError::Resolution(format!(
                "generation of version group `{}` (form `{}`)",
                form.version_group.name, form.name
            ))
        })?;
        variants.push(Variant {
            id: form.id,
            name: form.name,
            pokemon_name: species.to_string(),
            national_number,
            version_group: form.version_group.name,
            generation,
        });
    }

    variants.sort_by(|a, b| {
        let a_key = [a.national_number.to_string(), a.id.to_string()];
        let b_key = [b.national_number.to_string(), b.id.to_string()];
        compare_keys(
            &[a_key[0].as_str(), a_key[1].as_str(), a.name.as_str()],
            &[b_key[0].as_str(), b_key[1].as_str(), b.name.as_str()],
        )
    });
    info!(
        forms = forms.len(),
        fetched = candidates.len(),
        variants = variants.len(),
        "resolved variants"
    );
    Ok(variants)
}

// Later generations always qualify; the variant's own generation only when
// the label names its version group.
pub fn available_in(variant: &Variant, catalogue: &Catalogue) -> bool {
    variant.generation < catalogue.generation
        || (variant.generation == catalogue.generation
            && catalogue.label_contains(&variant.version_group))
}

pub fn inject(catalogues: Vec<Catalogue>, variants: &[Variant]) -> Vec<Catalogue> {
    catalogues
        .into_iter()
        .map(|catalogue| {
            if !receives_variants(&catalogue) {
                return catalogue.with_variants(Vec::new());
            }
            let numbers = catalogue.standard_numbers();
            let listed = variants
                .iter()
                .filter(|variant| numbers.contains(&variant.national_number))
                .filter(|variant| available_in(variant, &catalogue))
                .map(Variant::to_entry)
                .collect();
            catalogue.with_variants(listed)
        })
        .collect()
}
