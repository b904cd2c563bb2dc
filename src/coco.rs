//! COCO format data structures
//!
//! Only the fields the subset operations look at are typed. Everything else
//! (geometry, licenses, urls, `info`) is carried through untouched in the
//! flattened `extra` maps, in its original key order.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::{HashMap, HashSet};

/// COCO category information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Category {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            extra: Map::new(),
        }
    }
}

/// COCO image information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub id: u64,
    pub file_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Image {
    pub fn new(id: u64, file_name: impl Into<String>) -> Self {
        Self {
            id,
            file_name: file_name.into(),
            width: None,
            height: None,
            extra: Map::new(),
        }
    }
}

/// COCO annotation information
///
/// `bbox`, `segmentation`, `area` and `iscrowd` live in `extra` so that
/// polygon and RLE payloads survive a round trip byte for byte.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub id: u64,
    pub image_id: u64,
    pub category_id: u64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Annotation {
    pub fn new(id: u64, image_id: u64, category_id: u64) -> Self {
        Self {
            id,
            image_id,
            category_id,
            extra: Map::new(),
        }
    }
}

/// Complete COCO dataset structure
///
/// `extra` is declared first so that `info` and `licenses` keep their
/// usual place at the top of the written file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CocoFile {
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    pub images: Vec<Image>,
    pub annotations: Vec<Annotation>,
    pub categories: Vec<Category>,
}

impl CocoFile {
    /// Look up images by ID
    pub fn image_index(&self) -> HashMap<u64, &Image> {
        self.images.iter().map(|image| (image.id, image)).collect()
    }

    /// IDs of every category whose name matches exactly
    pub fn category_ids_named(&self, name: &str) -> Vec<u64> {
        self.categories
            .iter()
            .filter(|category| category.name == name)
            .map(|category| category.id)
            .collect()
    }

    /// Check ID uniqueness and that every annotation points at an existing
    /// image and category. Returns a description of the first violation.
    pub fn validate(&self) -> std::result::Result<(), String> {
        let mut image_ids = HashSet::with_capacity(self.images.len());
        for image in &self.images {
            if !image_ids.insert(image.id) {
                return Err(format!("duplicate image id {}", image.id));
            }
        }

        let mut category_ids = HashSet::with_capacity(self.categories.len());
        for category in &self.categories {
            if !category_ids.insert(category.id) {
                return Err(format!("duplicate category id {}", category.id));
            }
        }

        for annotation in &self.annotations {
            if !image_ids.contains(&annotation.image_id) {
                return Err(format!(
                    "annotation {} references missing image id {}",
                    annotation.id, annotation.image_id
                ));
            }
            if !category_ids.contains(&annotation.category_id) {
                return Err(format!(
                    "annotation {} references missing category id {}",
                    annotation.id, annotation.category_id
                ));
            }
        }

        Ok(())
    }
}
