use dashmap::DashMap;
use log::debug;
use rust_embed::Embed;
use std::sync::LazyLock;
use thiserror::Error;

use crate::gallery::{GalleryItem, Registry, RegistryError};

static GLOBAL_REGISTRY_CACHE: LazyLock<DashMap<Collection, Registry>> =
    LazyLock::new(DashMap::new);

#[derive(Embed)]
#[folder = "content"]
struct Assets;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Projects,
    Artworks,
}

impl Collection {
    fn file(&self) -> &'static str {
        match self {
            Collection::Projects => "projects.json",
            Collection::Artworks => "artworks.json",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("content file {0} is missing")]
    Missing(&'static str),
    #[error("couldn't parse {file}: {reason}")]
    Parse { file: &'static str, reason: String },
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Registry for one collection, parsed once and then served from cache.
pub fn registry(collection: Collection) -> Result<Registry, ContentError> {
    let cache = &*GLOBAL_REGISTRY_CACHE;
    if let Some(r) = cache.get(&collection) {
        return Ok(r.clone());
    }
    let registry = Registry::new(parse(collection)?)?;
    debug!(
        "content: loaded {} items from {}",
        registry.len(),
        collection.file()
    );
    Ok(cache.entry(collection).or_insert(registry).clone())
}

fn parse(collection: Collection) -> Result<Vec<GalleryItem>, ContentError> {
    let file = collection.file();
    let content = Assets::get(file).ok_or(ContentError::Missing(file))?;
    serde_json::from_slice(&content.data).map_err(|e| ContentError::Parse {
        file,
        reason: e.to_string(),
    })
}
