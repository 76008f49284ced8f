use crate::catalogue::{Catalogue, Entry};
use phf::phf_set;

// Variants in these catalogues continue the last standard box instead of
// starting their own boxes.
static CONTINUOUS_VARIANTS: phf::Set<&'static str> = phf_set! {
    "pokémon box",
    "legends-arceus",
    "pokémon home",
};

const BOX_INDENT: &str = "    ";
const ITEM_INDENT: &str = "        ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCatalogue {
    pub label: String,
    pub title: String,
    pub lines: Vec<String>,
}

impl RenderedCatalogue {
    pub fn to_markdown(&self) -> String {
        self.lines.join("\n")
    }
}

struct BoxWriter<'a> {
    lines: &'a mut Vec<String>,
    box_label: String,
    capacity: usize,
    next_box: usize,
    in_section: usize,
    position: usize,
}

impl<'a> BoxWriter<'a> {
    fn new(lines: &'a mut Vec<String>, box_label: &str, capacity: usize) -> Self {
        BoxWriter {
            lines,
            box_label: box_label.to_string(),
            capacity: capacity.max(1),
            next_box: 1,
            in_section: 0,
            position: 1,
        }
    }

    fn restart(&mut self, box_label: String) {
        self.box_label = box_label;
        self.next_box = 1;
        self.in_section = 0;
    }

    fn open_box(&mut self) {
        self.lines
            .push(format!("{BOX_INDENT}- {} {}", self.box_label, self.next_box));
        self.next_box += 1;
        self.position = 1;
    }

    fn push(&mut self, entry: &Entry) {
        if self.in_section % self.capacity == 0 {
            self.open_box();
        }
        self.push_item(entry);
    }

    fn push_unboxed(&mut self, entry: &Entry) {
        if self.next_box == 1 {
            self.open_box();
        }
        self.push_item(entry);
    }

    fn push_item(&mut self, entry: &Entry) {
        self.lines.push(format!(
            "{ITEM_INDENT}- [ ] {} - {}",
            self.position,
            entry.display()
        ));
        self.position += 1;
        self.in_section += 1;
    }
}

fn continuous_variants(catalogue: &Catalogue) -> bool {
    CONTINUOUS_VARIANTS
        .iter()
        .any(|fragment| catalogue.label_contains(fragment))
}

pub fn render_catalogue(catalogue: &Catalogue) -> RenderedCatalogue {
    let title = format!("{} [{} pokémon]", catalogue.label, catalogue.entry_count());
    let mut lines = vec![format!("- {title}")];
    {
        let mut writer = BoxWriter::new(&mut lines, &catalogue.box_label, catalogue.per_box_capacity);
        for entry in catalogue.standard() {
            writer.push(entry);
        }
        if continuous_variants(catalogue) {
            for entry in catalogue.variants() {
                writer.push_unboxed(entry);
            }
        } else if !catalogue.variants().is_empty() {
            writer.restart(format!("variant {}", catalogue.box_label));
            for entry in catalogue.variants() {
                writer.push(entry);
            }
        }
    }
    RenderedCatalogue {
        label: catalogue.label.clone(),
        title,
        lines,
    }
}

pub fn render(catalogues: &[Catalogue]) -> Vec<RenderedCatalogue> {
    catalogues.iter().map(render_catalogue).collect()
}

pub fn file_stem(label: &str) -> String {
    label
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
