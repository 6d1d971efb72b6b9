use serde::{Serialize, Deserialize};
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Top,
    Jacket,
    Pants,
    Shoes,
    Accessory,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct WardrobeItem {
    pub id: String,
    pub filename: String,
    pub display_name: String,
    pub category: Category,
    pub tags: Vec<String>,
    pub image_url: String,
    pub added_at: DateTime<Utc>,
}

impl WardrobeItem {
    // Normalization boundary for raw upload data: id assignment, display-name
    // defaulting to the filename stem, comma-separated tag parsing.
    pub fn from_upload(
        file: UploadFile,
        display_name: Option<&str>,
        category: Category,
        raw_tags: Option<&str>,
    ) -> Self {
        let display_name = match display_name.map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => filename_stem(&file.filename).to_string(),
        };
        Self {
            id: Uuid::new_v4().to_string(),
            display_name,
            category,
            tags: parse_tags(raw_tags.unwrap_or_default()),
            filename: file.filename,
            image_url: file.image_url,
            added_at: Utc::now(),
        }
    }
}

pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

fn filename_stem(filename: &str) -> &str {
    filename
        .split('.')
        .next()
        .filter(|stem| !stem.is_empty())
        .unwrap_or(filename)
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Outfit {
    pub items: Vec<String>,
    pub explanation: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GeneratedOutfits {
    pub outfits: Vec<Outfit>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ShopSuggestion {
    pub name: String,
    pub reason: String,
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GeneratedShopSuggestions {
    pub suggestions: Vec<ShopSuggestion>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UploadFile {
    pub filename: String,
    pub image_url: String,
}

// One upload request mirrors the wardrobe form: a batch of files sharing
// display name, category, and tag metadata.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AddItemsRequest {
    pub files: Vec<UploadFile>,
    #[serde(default)]
    pub display_name: Option<String>,
    pub category: Category,
    #[serde(default)]
    pub tags: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OutfitRequest {
    #[serde(default = "default_mood")]
    pub mood: String,
    #[serde(default = "default_occasion")]
    pub occasion: String,
    #[serde(default = "default_weather")]
    pub weather: String,
    #[serde(default = "default_count")]
    pub count: usize,
    #[serde(default)]
    pub avoid: Vec<Outfit>,
}

fn default_mood() -> String {
    "relaxed".to_string()
}

fn default_occasion() -> String {
    "casual outing".to_string()
}

fn default_weather() -> String {
    "20°C, sunny".to_string()
}

fn default_count() -> usize {
    2
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ShopRequest {
    pub goal: String,
}
