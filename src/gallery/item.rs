use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single displayable entry of a gallery page.
///
/// The fields here are the ones the navigation controller and the grid tiles
/// care about. Everything that only the detail panel renders lives in the
/// [`ItemKind`] payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: ItemId,
    pub title: String,
    pub image_ref: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub kind: ItemKind,
}

impl GalleryItem {
    pub fn description(&self) -> &str {
        match &self.kind {
            ItemKind::CodeProject(p) => &p.description,
            ItemKind::Artwork(a) => &a.description,
        }
    }

    /// Image used for grid tiles. Artworks may ship a lighter thumbnail.
    pub fn tile_image(&self) -> &str {
        match &self.kind {
            ItemKind::Artwork(ArtworkDetails {
                thumbnail_ref: Some(thumb),
                ..
            }) => thumb,
            _ => &self.image_ref,
        }
    }

    pub fn fallback_image(&self) -> Option<&str> {
        match &self.kind {
            ItemKind::CodeProject(p) => p.fallback_ref.as_deref(),
            ItemKind::Artwork(_) => None,
        }
    }

    pub fn category(&self) -> Option<Category> {
        match &self.kind {
            ItemKind::CodeProject(p) => Some(p.category),
            ItemKind::Artwork(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ItemKind {
    CodeProject(ProjectDetails),
    Artwork(ArtworkDetails),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDetails {
    pub description: String,
    pub long_description: String,
    pub category: Category,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    pub live_link: Option<String>,
    pub source_link: Option<String>,
    pub fallback_ref: Option<String>,
    pub video_ref: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtworkDetails {
    pub description: String,
    pub long_description: String,
    pub year: String,
    pub medium: String,
    pub dimensions: String,
    pub software: String,
    pub thumbnail_ref: Option<String>,
    pub process: String,
    pub inspiration: Option<String>,
    #[serde(default)]
    pub techniques: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Web,
    Mobile,
    Data,
    #[serde(rename = "AI")]
    Ai,
    Web3,
}

impl Category {
    pub fn all() -> Vec<Category> {
        vec![
            Category::Web,
            Category::Mobile,
            Category::Data,
            Category::Ai,
            Category::Web3,
        ]
    }

    /// Label used on the filter buttons.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Web => "Web Apps",
            Category::Mobile => "Mobile",
            Category::Data => "Data Science",
            Category::Ai => "AI/ML",
            Category::Web3 => "Web3",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, item: &GalleryItem) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => item.category() == Some(*c),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All Projects",
            CategoryFilter::Only(c) => c.label(),
        }
    }
}
