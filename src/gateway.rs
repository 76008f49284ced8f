use crate::error::{PokedexError, Result};
use crate::model::{
    Generation, NamedResource, Pokedex, PokemonForm, ResourceList, VersionGroup,
};
use rayon::prelude::*;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

pub trait ReferenceGateway: Send + Sync {
    fn generation_names(&self) -> Result<Vec<NamedResource>>;
    fn generation(&self, name: &str) -> Result<Generation>;
    fn version_group_names(&self) -> Result<Vec<NamedResource>>;
    fn version_group(&self, name: &str) -> Result<VersionGroup>;
    fn pokedex(&self, name: &str) -> Result<Pokedex>;
    fn form_names(&self) -> Result<Vec<NamedResource>>;
    fn form(&self, name: &str) -> Result<PokemonForm>;
}

/// Fetches every named resource in parallel. The result follows the order of
/// `names`, not completion order; the first failure is returned.
pub fn fetch_all<T, F>(names: &[NamedResource], fetch: F) -> Result<Vec<T>>
where
    T: Send,
    F: Fn(&str) -> Result<T> + Sync + Send,
{
    names.par_iter().map(|resource| fetch(&resource.name)).collect()
}

pub struct HttpGateway {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpGateway {
    pub const DEFAULT_BASE_URL: &'static str = "https://pokeapi.co/api/v2";
    // Large enough for every list endpoint to fit in one page.
    const LIST_LIMIT: usize = 100_000;

    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| PokedexError::gateway("http client", e))?;
        Ok(HttpGateway {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}/{}", self.base_url, path);
        debug!(%url, "GET");
        self.client
            .get(&url)
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.json::<T>())
            .map_err(|e| PokedexError::gateway(path, e))
    }

    fn list(&self, endpoint: &str) -> Result<Vec<NamedResource>> {
        let page: ResourceList = self.get(&format!("{endpoint}/?limit={}", Self::LIST_LIMIT))?;
        Ok(page.results)
    }
}

impl ReferenceGateway for HttpGateway {
    fn generation_names(&self) -> Result<Vec<NamedResource>> {
        self.list("generation")
    }

    fn generation(&self, name: &str) -> Result<Generation> {
        self.get(&format!("generation/{name}/"))
    }

    fn version_group_names(&self) -> Result<Vec<NamedResource>> {
        self.list("version-group")
    }

    fn version_group(&self, name: &str) -> Result<VersionGroup> {
        self.get(&format!("version-group/{name}/"))
    }

    fn pokedex(&self, name: &str) -> Result<Pokedex> {
        self.get(&format!("pokedex/{name}/"))
    }

    fn form_names(&self) -> Result<Vec<NamedResource>> {
        self.list("pokemon-form")
    }

    fn form(&self, name: &str) -> Result<PokemonForm> {
        self.get(&format!("pokemon-form/{name}/"))
    }
}
