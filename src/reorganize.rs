use crate::catalogue::Catalogue;
use crate::error::{PokedexError, Result};
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    Emerald,
    XdGale,
    Sword,
}

impl Anchor {
    pub fn fragment(self) -> &'static str {
        match self {
            Anchor::Emerald => "emerald",
            Anchor::XdGale => "xd-gale",
            Anchor::Sword => "sword",
        }
    }

    pub fn position_in(self, catalogues: &[Catalogue]) -> Result<usize> {
        catalogues
            .iter()
            .position(|catalogue| catalogue.label_contains(self.fragment()))
            .ok_or_else(|| PokedexError::UnmatchedAnchor {
                anchor: self.fragment().to_string(),
            })
    }
}

#[derive(Debug)]
pub struct Insertion {
    pub anchor: Anchor,
    pub catalogues: Vec<Catalogue>,
}

impl Insertion {
    pub fn new(anchor: Anchor, catalogues: Vec<Catalogue>) -> Self {
        Insertion { anchor, catalogues }
    }
}

pub fn splice(mut main: Vec<Catalogue>, insertions: Vec<Insertion>) -> Result<Vec<Catalogue>> {
    let mut inserted: HashMap<Anchor, usize> = HashMap::new();
    for insertion in insertions {
        let anchored_at = insertion.anchor.position_in(&main)?;
        let already = inserted.entry(insertion.anchor).or_insert(0);
        let at = anchored_at + 1 + *already;
        *already += insertion.catalogues.len();
        debug!(
            anchor = insertion.anchor.fragment(),
            after = %main[anchored_at].label,
            count = insertion.catalogues.len(),
            "splicing catalogues"
        );
        main.splice(at..at, insertion.catalogues);
    }
    Ok(main)
}
