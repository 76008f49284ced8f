#![allow(dead_code)]

use pokedex_box_order::datasets::{Datasets, FormExclusions};
use pokedex_box_order::gateway::ReferenceGateway;
use pokedex_box_order::model::{
    Generation, NamedResource, Pokedex, PokedexEntry, PokemonForm, VersionGroup,
};
use pokedex_box_order::{PokedexError, Result};
use std::collections::HashMap;

const API: &str = "https://pokeapi.co/api/v2";

pub fn species(name: &str, number: u32) -> NamedResource {
    NamedResource::new(name, format!("{API}/pokemon-species/{number}/"))
}

pub fn resource(kind: &str, name: &str) -> NamedResource {
    NamedResource::new(name, format!("{API}/{kind}/{name}/"))
}

pub fn pokedex(name: &str, species: &[NamedResource]) -> Pokedex {
    Pokedex {
        name: name.to_string(),
        pokemon_entries: species
            .iter()
            .enumerate()
            .map(|(i, s)| PokedexEntry {
                entry_number: i as u32 + 1,
                pokemon_species: Some(s.clone()),
            })
            .collect(),
    }
}

pub fn generation(
    id: u32,
    region: &str,
    species: Vec<NamedResource>,
    version_groups: &[&str],
) -> Generation {
    Generation {
        id,
        name: format!("generation-{id}"),
        main_region: Some(resource("region", region)),
        pokemon_species: species,
        version_groups: version_groups
            .iter()
            .map(|v| resource("version-group", v))
            .collect(),
    }
}

pub fn version_group(name: &str, pokedexes: &[&str]) -> VersionGroup {
    VersionGroup {
        name: name.to_string(),
        generation: None,
        pokedexes: pokedexes.iter().map(|p| resource("pokedex", p)).collect(),
    }
}

pub fn form(id: u32, name: &str, pokemon: &str, version_group: &str) -> PokemonForm {
    PokemonForm {
        id,
        name: name.to_string(),
        is_battle_only: false,
        is_mega: false,
        pokemon: resource("pokemon", pokemon),
        version_group: resource("version-group", version_group),
    }
}

#[derive(Default)]
pub struct FakeGateway {
    pub generations: Vec<Generation>,
    pub version_groups: Vec<VersionGroup>,
    pub pokedexes: HashMap<String, Pokedex>,
    pub form_names: Vec<NamedResource>,
    pub forms: HashMap<String, PokemonForm>,
}

fn missing(kind: &str, name: &str) -> PokedexError {
    PokedexError::gateway(format!("{kind}/{name}"), "404 Not Found")
}

impl ReferenceGateway for FakeGateway {
    fn generation_names(&self) -> Result<Vec<NamedResource>> {
        Ok(self
            .generations
            .iter()
            .map(|g| resource("generation", &g.name))
            .collect())
    }

    fn generation(&self, name: &str) -> Result<Generation> {
        self.generations
            .iter()
            .find(|g| g.name == name)
            .cloned()
            .ok_or_else(|| missing("generation", name))
    }

    fn version_group_names(&self) -> Result<Vec<NamedResource>> {
        Ok(self
            .version_groups
            .iter()
            .map(|v| resource("version-group", &v.name))
            .collect())
    }

    fn version_group(&self, name: &str) -> Result<VersionGroup> {
        self.version_groups
            .iter()
            .find(|v| v.name == name)
            .cloned()
            .ok_or_else(|| missing("version-group", name))
    }

    fn pokedex(&self, name: &str) -> Result<Pokedex> {
        self.pokedexes
            .get(name)
            .cloned()
            .ok_or_else(|| missing("pokedex", name))
    }

    fn form_names(&self) -> Result<Vec<NamedResource>> {
        Ok(self.form_names.clone())
    }

    fn form(&self, name: &str) -> Result<PokemonForm> {
        self.forms
            .get(name)
            .cloned()
            .ok_or_else(|| missing("pokemon-form", name))
    }
}

/// Eighteen species, two introduced per generation. Listing order inside a
/// generation is deliberately not numeric.
pub const NATIONAL: [&str; 18] = [
    "bulbasaur", "vulpix", "chikorita", "wooper", "treecko", "zigzagoon", "turtwig", "shinx",
    "snivy", "zorua", "chespin", "froakie", "rowlet", "litten", "grookey", "wooloo",
    "sprigatito", "fuecoco",
];

pub fn national_species(number: u32) -> NamedResource {
    species(NATIONAL[number as usize - 1], number)
}

fn pair(a: u32, b: u32) -> Vec<NamedResource> {
    // Higher number first so sorting has work to do.
    vec![national_species(b), national_species(a)]
}

pub fn fixture_gateway() -> FakeGateway {
    let generations = vec![
        generation(1, "kanto", pair(1, 2), &["red-blue", "yellow"]),
        generation(2, "johto", pair(3, 4), &["gold-silver", "crystal"]),
        generation(
            3,
            "hoenn",
            pair(5, 6),
            &["ruby-sapphire", "emerald", "firered-leafgreen", "colosseum", "xd"],
        ),
        generation(4, "sinnoh", pair(7, 8), &["diamond-pearl", "platinum"]),
        generation(5, "unova", pair(9, 10), &["black-white", "black-2-white-2"]),
        generation(6, "kalos", pair(11, 12), &["x-y", "omega-ruby-alpha-sapphire"]),
        generation(
            7,
            "alola",
            pair(13, 14),
            &["sun-moon", "ultra-sun-ultra-moon", "lets-go-pikachu-lets-go-eevee"],
        ),
        generation(8, "galar", pair(15, 16), &["sword-shield", "legends-arceus"]),
        generation(9, "paldea", pair(17, 18), &["scarlet-violet", "the-teal-mask"]),
    ];

    let version_groups = vec![
        version_group("red-blue", &["kanto"]),
        version_group("yellow", &["kanto"]),
        version_group("gold-silver", &["original-johto"]),
        version_group("crystal", &["original-johto"]),
        version_group("ruby-sapphire", &["hoenn"]),
        version_group("emerald", &["hoenn"]),
        version_group("firered-leafgreen", &["kanto"]),
        version_group("colosseum", &[]),
        version_group("xd", &[]),
        version_group("diamond-pearl", &["original-sinnoh"]),
        version_group("platinum", &["extended-sinnoh"]),
        version_group("black-white", &["original-unova"]),
        version_group("black-2-white-2", &["updated-unova"]),
        version_group("x-y", &["kalos-central"]),
        version_group("omega-ruby-alpha-sapphire", &["updated-hoenn"]),
        version_group("sun-moon", &["original-alola"]),
        version_group("ultra-sun-ultra-moon", &["updated-alola"]),
        version_group("lets-go-pikachu-lets-go-eevee", &["letsgo-kanto"]),
        version_group("sword-shield", &["galar"]),
        version_group("legends-arceus", &["hisui"]),
        version_group("scarlet-violet", &["paldea"]),
        version_group("the-teal-mask", &["kitakami"]),
    ];

    let mut pokedexes = HashMap::new();
    let national: Vec<NamedResource> = (1..=18).map(national_species).collect();
    pokedexes.insert("national".to_string(), pokedex("national", &national));
    pokedexes.insert(
        "galar".to_string(),
        pokedex(
            "galar",
            &[national_species(16), national_species(15), national_species(2), national_species(6)],
        ),
    );
    pokedexes.insert(
        "hisui".to_string(),
        pokedex("hisui", &[national_species(13), national_species(10)]),
    );
    pokedexes.insert(
        "paldea".to_string(),
        pokedex(
            "paldea",
            &[national_species(17), national_species(18), national_species(4)],
        ),
    );

    let mut forms = vec![
        form(10103, "vulpix-alola", "vulpix-alola", "sun-moon"),
        form(10158, "zigzagoon-galar", "zigzagoon-galar", "sword-shield"),
        form(10239, "zorua-hisui", "zorua-hisui", "legends-arceus"),
        form(10253, "wooper-paldea", "wooper-paldea", "scarlet-violet"),
        form(10033, "bulbasaur-mega", "bulbasaur-mega", "x-y"),
        form(10400, "shinx-battle", "shinx-battle", "diamond-pearl"),
        form(10500, "froakie-cap", "froakie-cap", "x-y"),
        form(10600, "rowlet-costume", "rowlet-costume", "sun-moon"),
    ];
    forms[4].is_mega = true;
    forms[5].is_battle_only = true;

    let mut form_names: Vec<NamedResource> =
        NATIONAL.iter().map(|name| resource("pokemon-form", name)).collect();
    form_names.extend(forms.iter().map(|f| resource("pokemon-form", &f.name)));

    FakeGateway {
        generations,
        version_groups,
        pokedexes,
        form_names,
        forms: forms.into_iter().map(|f| (f.name.clone(), f)).collect(),
    }
}

pub fn fixture_datasets() -> Datasets {
    Datasets {
        colosseum: vec![vec![5], vec![2, 4]],
        xd: vec![vec![6], vec![1]],
        exclusions: FormExclusions {
            forms: vec!["froakie-cap".to_string()],
            pokemon: vec!["rowlet-costume".to_string()],
        },
        compatibility: [("sword-shield".to_string(), vec![1, 2])].into_iter().collect(),
    }
}
