use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkedMember {
    pub name: String,
    pub national_number: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Entry {
    Single { name: String, national_number: u32 },
    Linked(Vec<LinkedMember>),
}

impl Entry {
    pub fn single(name: impl Into<String>, national_number: u32) -> Self {
        Entry::Single {
            name: name.into(),
            national_number,
        }
    }

    pub fn names(&self) -> Vec<&str> {
        match self {
            Entry::Single { name, .. } => vec![name.as_str()],
            Entry::Linked(members) => members.iter().map(|m| m.name.as_str()).collect(),
        }
    }

    pub fn national_numbers(&self) -> Vec<u32> {
        match self {
            Entry::Single {
                national_number, ..
            } => vec![*national_number],
            Entry::Linked(members) => members.iter().map(|m| m.national_number).collect(),
        }
    }

    pub fn display(&self) -> String {
        match self {
            Entry::Single {
                name,
                national_number,
            } => format!("{name} (#{national_number})"),
            Entry::Linked(members) => members
                .iter()
                .map(|m| format!("{} (#{})", m.name, m.national_number))
                .collect::<Vec<_>>()
                .join(" / "),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Entries {
    Flat(Vec<Entry>),
    Split {
        standard: Vec<Entry>,
        variant: Vec<Entry>,
    },
}

impl Entries {
    pub fn standard(&self) -> &[Entry] {
        match self {
            Entries::Flat(entries) => entries,
            Entries::Split { standard, .. } => standard,
        }
    }

    pub fn variant(&self) -> &[Entry] {
        match self {
            Entries::Flat(_) => &[],
            Entries::Split { variant, .. } => variant,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Catalogue {
    pub label: String,
    pub generation: u32,
    pub per_box_capacity: usize,
    pub box_label: String,
    pub entries: Entries,
}

impl Catalogue {
    pub const DEFAULT_BOX_LABEL: &'static str = "box";

    pub fn new(
        label: impl Into<String>,
        generation: u32,
        per_box_capacity: usize,
        entries: Vec<Entry>,
    ) -> Self {
        Catalogue {
            label: label.into(),
            generation,
            per_box_capacity,
            box_label: Self::DEFAULT_BOX_LABEL.to_string(),
            entries: Entries::Flat(entries),
        }
    }

    pub fn with_box_label(mut self, box_label: impl Into<String>) -> Self {
        self.box_label = box_label.into();
        self
    }

    pub fn standard(&self) -> &[Entry] {
        self.entries.standard()
    }

    pub fn variants(&self) -> &[Entry] {
        self.entries.variant()
    }

    pub fn entry_count(&self) -> usize {
        self.standard().len() + self.variants().len()
    }

    pub fn standard_numbers(&self) -> BTreeSet<u32> {
        self.standard()
            .iter()
            .flat_map(|entry| entry.national_numbers())
            .collect()
    }

    pub fn derive_box_variant(&self, label: impl Into<String>, per_box_capacity: usize) -> Catalogue {
        Catalogue {
            label: label.into(),
            generation: self.generation,
            per_box_capacity,
            box_label: self.box_label.clone(),
            entries: self.entries.clone(),
        }
    }

    pub fn with_variants(self, variant: Vec<Entry>) -> Catalogue {
        let standard = match self.entries {
            Entries::Flat(entries) => entries,
            Entries::Split { standard, .. } => standard,
        };
        Catalogue {
            entries: Entries::Split { standard, variant },
            ..self
        }
    }

    pub fn label_contains(&self, fragment: &str) -> bool {
        self.label.contains(fragment)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Variant {
    pub id: u32,
    pub name: String,
    pub pokemon_name: String,
    pub national_number: u32,
    pub version_group: String,
    pub generation: u32,
}

impl Variant {
    pub fn to_entry(&self) -> Entry {
        Entry::single(self.name.clone(), self.national_number)
    }
}
