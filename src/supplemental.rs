use crate::catalogue::{Catalogue, Entry, LinkedMember};
use crate::error::{PokedexError, Result};
use crate::gateway::ReferenceGateway;
use crate::national::CanonicalNumbering;
use crate::reorganize::{Anchor, Insertion};
use crate::segment::region_entries;
use crate::RunContext;
use tracing::info;

pub const COLOSSEUM_LABEL: &str = "generation 3 (colosseum)";
pub const XD_LABEL: &str = "generation 3 (xd-gale-of-darkness)";
pub const POKEMON_BOX_LABEL: &str = "generation 3 (pokémon box)";
pub const LEGENDS_ARCEUS_LABEL: &str = "generation 8 (legends-arceus)";
pub const HOME_LABEL: &str = "pokémon home";

/// Each group becomes one slot; a group of several numbers becomes a linked
/// slot. Numbers outside the national pokédex are an error.
pub fn from_static_dataset(
    canonical: &CanonicalNumbering,
    dataset: &[Vec<u32>],
    label: &str,
    generation: u32,
) -> Result<Catalogue> {
    let entries = dataset
        .iter()
        .enumerate()
        .map(|(position, group)| -> Result<Entry> {
            let mut members = group
                .iter()
                .map(|&number| {
                    canonical
                        .resolve(number)
                        .map(|name| LinkedMember {
                            name: name.to_string(),
                            national_number: number,
                        })
                        .map_err(|_| {
                            PokedexError::Resolution(format!(
                                "national number {number} in group {} of `{label}`",
                                position + 1
                            ))
                        })
                })
                .collect::<Result<Vec<_>>>()?;
            if members.len() > 1 {
                return Ok(Entry::Linked(members));
            }
            members
                .pop()
                .map(|member| Entry::single(member.name, member.national_number))
                .ok_or_else(|| {
                    PokedexError::Resolution(format!("empty group {} in `{label}`", position + 1))
                })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Catalogue::new(label, generation, 30, entries))
}

pub fn from_region_lookup(
    gateway: &dyn ReferenceGateway,
    region: &str,
    label: &str,
    generation: u32,
    per_box_capacity: usize,
    box_label: &str,
) -> Result<Catalogue> {
    let entries = region_entries(gateway, region)?;
    Ok(Catalogue::new(label, generation, per_box_capacity, entries).with_box_label(box_label))
}

pub fn home_catalogue(canonical: &CanonicalNumbering, latest_generation: u32) -> Catalogue {
    Catalogue::new(HOME_LABEL, latest_generation + 1, 30, canonical.entries())
}

pub struct Supplemental {
    pub colosseum: Catalogue,
    pub xd: Catalogue,
    pub pokemon_box: Catalogue,
    pub legends_arceus: Catalogue,
    pub home: Catalogue,
}

impl Supplemental {
    pub fn into_plan(self) -> (Vec<Insertion>, Catalogue) {
        let insertions = vec![
            Insertion::new(Anchor::Emerald, vec![self.colosseum, self.xd]),
            Insertion::new(Anchor::XdGale, vec![self.pokemon_box]),
            Insertion::new(Anchor::Sword, vec![self.legends_arceus]),
        ];
        (insertions, self.home)
    }
}

pub fn build_supplemental(ctx: &RunContext<'_>, early: &[Catalogue]) -> Result<Supplemental> {
    let colosseum = from_static_dataset(&ctx.canonical, &ctx.datasets.colosseum, COLOSSEUM_LABEL, 3)?;
    let xd = from_static_dataset(&ctx.canonical, &ctx.datasets.xd, XD_LABEL, 3)?;
    let emerald = Anchor::Emerald.position_in(early)?;
    let pokemon_box = early[emerald].derive_box_variant(POKEMON_BOX_LABEL, 60);
    let legends_arceus =
        from_region_lookup(ctx.gateway, "hisui", LEGENDS_ARCEUS_LABEL, 8, 30, "pasture")?;
    let home = home_catalogue(&ctx.canonical, ctx.generations.len() as u32);
    info!(
        colosseum = colosseum.standard().len(),
        xd = xd.standard().len(),
        legends_arceus = legends_arceus.standard().len(),
        home = home.standard().len(),
        "built supplemental catalogues"
    );
    Ok(Supplemental {
        colosseum,
        xd,
        pokemon_box,
        legends_arceus,
        home,
    })
}
