// Hand-authored inputs shipped in additional-data/.
use crate::error::{PokedexError, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

pub type GroupDataset = Vec<Vec<u32>>;

pub type Compatibility = BTreeMap<String, Vec<u32>>;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormExclusions {
    #[serde(default)]
    pub forms: Vec<String>,
    #[serde(default)]
    pub pokemon: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Datasets {
    pub colosseum: GroupDataset,
    pub xd: GroupDataset,
    pub exclusions: FormExclusions,
    pub compatibility: Compatibility,
}

const COLOSSEUM: (&str, &str) = (
    "colosseum.json",
    include_str!("../additional-data/colosseum.json"),
);
const XD: (&str, &str) = ("xd.json", include_str!("../additional-data/xd.json"));
const FORM_EXCLUSIONS: (&str, &str) = (
    "form-exclusions.json",
    include_str!("../additional-data/form-exclusions.json"),
);
const COMPATIBILITY: (&str, &str) = (
    "compatibility.json",
    include_str!("../additional-data/compatibility.json"),
);

static EMBEDDED: Lazy<Datasets> = Lazy::new(|| {
    Datasets::from_sources(|_, embedded| Ok(embedded.to_string()))
        .expect("Failed to parse embedded additional-data")
});

fn parse<T: DeserializeOwned>(name: &str, raw: &str) -> Result<T> {
    serde_json::from_str(raw).map_err(|source| PokedexError::Dataset {
        name: name.to_string(),
        source,
    })
}

impl Datasets {
    pub fn embedded() -> Datasets {
        EMBEDDED.clone()
    }

    pub fn from_dir(dir: &Path) -> Result<Datasets> {
        Self::from_sources(|name, embedded| {
            let path = dir.join(name);
            if !path.exists() {
                return Ok(embedded.to_string());
            }
            std::fs::read_to_string(&path).map_err(|source| PokedexError::DatasetIo {
                name: path.display().to_string(),
                source,
            })
        })
    }

    fn from_sources<F>(read: F) -> Result<Datasets>
    where
        F: Fn(&str, &str) -> Result<String>,
    {
        let load = |(name, embedded): (&'static str, &'static str)| {
            read(name, embedded).map(|raw| (name, raw))
        };
        let (name, raw) = load(COLOSSEUM)?;
        let colosseum = parse(name, &raw)?;
        let (name, raw) = load(XD)?;
        let xd = parse(name, &raw)?;
        let (name, raw) = load(FORM_EXCLUSIONS)?;
        let exclusions = parse(name, &raw)?;
        let (name, raw) = load(COMPATIBILITY)?;
        let compatibility = parse(name, &raw)?;
        Ok(Datasets {
            colosseum,
            xd,
            exclusions,
            compatibility,
        })
    }
}
