//! Reduce a COCO annotation set to a list of categories
//!
//! Filtering never renumbers anything: every kept image, annotation and
//! category keeps its source ID and relative order, so the result can be
//! cross-referenced against the full dataset.

use log::info;
use std::collections::HashSet;

use crate::coco::CocoFile;
use crate::error::{Result, SubsetError};

/// Counts of kept entries against the source, per sequence
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FilterSummary {
    pub images_kept: usize,
    pub images_total: usize,
    pub annotations_kept: usize,
    pub annotations_total: usize,
    pub categories_kept: usize,
    pub categories_total: usize,
}

impl FilterSummary {
    pub fn new(source: &CocoFile, filtered: &CocoFile) -> Self {
        Self {
            images_kept: filtered.images.len(),
            images_total: source.images.len(),
            annotations_kept: filtered.annotations.len(),
            annotations_total: source.annotations.len(),
            categories_kept: filtered.categories.len(),
            categories_total: source.categories.len(),
        }
    }

    pub fn print_summary(&self) {
        info!("=== Filter Summary ===");
        info!("Categories kept: {}/{}", self.categories_kept, self.categories_total);
        info!("Images kept: {}/{}", self.images_kept, self.images_total);
        info!(
            "Annotations kept: {}/{}",
            self.annotations_kept, self.annotations_total
        );
    }
}

/// Resolve category names to IDs.
///
/// Names are matched exactly and case-sensitively. Every name that does not
/// resolve is collected into a single `CategoryNotFound` error. An empty
/// list is an error too.
pub fn resolve_categories<S: AsRef<str>>(coco: &CocoFile, names: &[S]) -> Result<HashSet<u64>> {
    if names.is_empty() {
        return Err(SubsetError::EmptySelection);
    }

    let mut ids = HashSet::new();
    let mut unresolved: Vec<String> = Vec::new();

    for name in names {
        let name = name.as_ref();
        let matches = coco.category_ids_named(name);
        if matches.is_empty() {
            if !unresolved.iter().any(|n| n == name) {
                unresolved.push(name.to_string());
            }
        } else {
            ids.extend(matches);
        }
    }

    if unresolved.is_empty() {
        Ok(ids)
    } else {
        Err(SubsetError::category_not_found(unresolved))
    }
}

/// Build a new annotation set holding only the given categories, the
/// annotations of those categories and the images those annotations
/// reference.
pub fn filter_annotations<S: AsRef<str>>(coco: &CocoFile, categories: &[S]) -> Result<CocoFile> {
    let selected = resolve_categories(coco, categories)?;

    let categories = coco
        .categories
        .iter()
        .filter(|category| selected.contains(&category.id))
        .cloned()
        .collect();

    let annotations: Vec<_> = coco
        .annotations
        .iter()
        .filter(|annotation| selected.contains(&annotation.category_id))
        .cloned()
        .collect();

    let referenced: HashSet<u64> = annotations.iter().map(|a| a.image_id).collect();
    let images = coco
        .images
        .iter()
        .filter(|image| referenced.contains(&image.id))
        .cloned()
        .collect();

    Ok(CocoFile {
        extra: coco.extra.clone(),
        images,
        annotations,
        categories,
    })
}
