pub mod catalogue;
pub mod collate;
pub mod datasets;
pub mod emit;
pub mod error;
pub mod gateway;
pub mod model;
pub mod national;
pub mod render;
pub mod reorganize;
pub mod segment;
pub mod supplemental;
pub mod variants;
pub mod versions;

use crate::catalogue::Catalogue;
use crate::datasets::Datasets;
use crate::emit::{emit, Layout};
use crate::gateway::{fetch_all, HttpGateway, ReferenceGateway};
use crate::model::Generation;
use crate::national::{build_canonical, CanonicalNumbering};
use crate::reorganize::splice;
use crate::segment::{segment_early, segment_late};
use crate::supplemental::build_supplemental;
use crate::variants::{compute_variants, inject};
use anyhow::Context;
use std::collections::BTreeSet;
use std::path::PathBuf;
use tracing::{info, warn};

pub use crate::error::{PokedexError, Result};

#[derive(Debug, Clone)]
pub struct CliOptions {
    pub output_dir: PathBuf,
    pub layout: Layout,
    pub data_dir: Option<PathBuf>,
    pub api_base: String,
}

impl Default for CliOptions {
    fn default() -> Self {
        CliOptions {
            output_dir: PathBuf::from("output"),
            layout: Layout::PerCatalogue,
            data_dir: None,
            api_base: HttpGateway::DEFAULT_BASE_URL.to_string(),
        }
    }
}

pub struct RunContext<'a> {
    pub gateway: &'a dyn ReferenceGateway,
    pub generations: Vec<Generation>,
    pub side_versions: BTreeSet<String>,
    pub canonical: CanonicalNumbering,
    pub datasets: Datasets,
}

impl<'a> RunContext<'a> {
    pub fn load(gateway: &'a dyn ReferenceGateway, datasets: Datasets) -> Result<Self> {
        let generations = fetch_all(&gateway.generation_names()?, |name| gateway.generation(name))?;
        let version_groups =
            fetch_all(&gateway.version_group_names()?, |name| gateway.version_group(name))?;
        let side_versions = versions::classify(&version_groups);
        let canonical = build_canonical(&gateway.pokedex("national")?)?;
        info!(
            generations = generations.len(),
            version_groups = version_groups.len(),
            side_versions = side_versions.len(),
            species = canonical.len(),
            "loaded reference data"
        );
        Ok(RunContext {
            gateway,
            generations,
            side_versions,
            canonical,
            datasets,
        })
    }
}

pub fn build_catalogues(ctx: &RunContext<'_>) -> Result<Vec<Catalogue>> {
    let early = segment_early(&ctx.generations, &ctx.side_versions)?;
    let late = segment_late(
        ctx.gateway,
        &ctx.generations,
        &ctx.side_versions,
        &ctx.datasets.compatibility,
        &ctx.canonical,
    )?;
    let supplemental = build_supplemental(ctx, &early)?;
    let (insertions, home) = supplemental.into_plan();

    let mut main = early;
    main.extend(late);
    let mut catalogues = splice(main, insertions)?;
    catalogues.push(home);

    let forms = ctx.gateway.form_names()?;
    let variants = compute_variants(
        ctx.gateway,
        &forms,
        &ctx.canonical,
        &ctx.generations,
        &ctx.datasets.exclusions,
    )?;
    Ok(inject(catalogues, &variants))
}

pub fn render_all(
    gateway: &dyn ReferenceGateway,
    datasets: Datasets,
) -> Result<Vec<render::RenderedCatalogue>> {
    let ctx = RunContext::load(gateway, datasets)?;
    let catalogues = build_catalogues(&ctx)?;
    Ok(render::render(&catalogues))
}

pub fn run(opts: CliOptions) -> anyhow::Result<()> {
    let datasets = match &opts.data_dir {
        Some(dir) => Datasets::from_dir(dir)
            .with_context(|| format!("Failed to load datasets from {}", dir.display()))?,
        None => Datasets::embedded(),
    };
    let gateway = HttpGateway::new(opts.api_base.as_str())?;
    let rendered = render_all(&gateway, datasets).context("Failed to build catalogues")?;
    let report = emit(&opts.output_dir, &rendered, opts.layout)?;
    for (path, reason) in &report.failed {
        warn!(path = %path.display(), %reason, "catalogue not written");
    }
    println!(
        "Wrote {} of {} catalogue file(s) to {}",
        report.written.len(),
        report.written.len() + report.failed.len(),
        opts.output_dir.display()
    );
    Ok(())
}
