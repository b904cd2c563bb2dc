//! Copy the images of one category out of a COCO image directory

use indicatif::ProgressBar;
use log::{debug, info, warn};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use crate::coco::{CocoFile, Image};
use crate::config::{MissingFilePolicy, SelectConfig};
use crate::error::{Result, SubsetError};
use crate::filter::resolve_categories;
use crate::io::ensure_directory;
use crate::utils::{create_progress_bar, relative_image_path, target_file_name};

// Struct to hold selection statistics
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SelectionStats {
    pub images_matched: usize,
    pub copied: usize,
    pub skipped_missing: usize,
}

impl SelectionStats {
    pub fn print_summary(&self) {
        info!("=== Selection Summary ===");
        info!("Images annotated with category: {}", self.images_matched);
        info!("Images copied: {}", self.copied);
        if self.skipped_missing > 0 {
            warn!(
                "Skipped (missing image file): {}",
                self.skipped_missing
            );
        }
    }
}

/// Images carrying at least one annotation of `category`, in the order they
/// appear in the `images` table. Each image is listed once no matter how many
/// annotations it has.
pub fn image_files_for_category<'a>(coco: &'a CocoFile, category: &str) -> Result<Vec<&'a Image>> {
    let category_ids = resolve_categories(coco, &[category])?;

    let image_ids: HashSet<u64> = coco
        .annotations
        .iter()
        .filter(|annotation| category_ids.contains(&annotation.category_id))
        .map(|annotation| annotation.image_id)
        .collect();

    Ok(coco
        .images
        .iter()
        .filter(|image| image_ids.contains(&image.id))
        .collect())
}

/// Copy every image annotated with `category` from `source_dir` into
/// `target_dir`, creating the target if needed. Existing files with the same
/// name are overwritten, so repeated runs leave the same set of files.
///
/// All sources are checked before the first copy. A file name outside
/// `source_dir`, a target name clash or (with [`MissingFilePolicy::FailFast`])
/// a missing file aborts the run without touching the target.
pub fn select_images(
    source_dir: &Path,
    coco: &CocoFile,
    target_dir: &Path,
    category: &str,
    config: &SelectConfig,
) -> Result<SelectionStats> {
    let images = image_files_for_category(coco, category)?;
    let mut stats = SelectionStats {
        images_matched: images.len(),
        ..SelectionStats::default()
    };
    info!(
        "Found {} images annotated with '{}'",
        images.len(),
        category
    );

    let copies = plan_copies(source_dir, target_dir, &images, config, &mut stats)?;

    ensure_directory(target_dir)?;

    let pb = if config.show_progress {
        create_progress_bar(copies.len() as u64, category)
    } else {
        ProgressBar::hidden()
    };
    for (source, dest) in &copies {
        fs::copy(source, dest).map_err(|e| SubsetError::io(dest, e))?;
        debug!("Copied {} -> {}", source.display(), dest.display());
        stats.copied += 1;
        pb.inc(1);
    }
    pb.finish_with_message("Copy complete");

    Ok(stats)
}

/// Pair each image with its source and destination path, applying the
/// missing file policy.
///
/// File names must stay inside `source_dir`. Images that point at the same
/// source file are copied once; two different sources that would land on
/// the same target name are rejected.
fn plan_copies(
    source_dir: &Path,
    target_dir: &Path,
    images: &[&Image],
    config: &SelectConfig,
    stats: &mut SelectionStats,
) -> Result<Vec<(PathBuf, PathBuf)>> {
    let mut planned: HashMap<String, PathBuf> = HashMap::new();
    let mut copies = Vec::with_capacity(images.len());

    for image in images {
        let relative = relative_image_path(&image.file_name).ok_or_else(|| {
            SubsetError::malformed(
                &image.file_name,
                format!("image {} file name is not inside the image directory", image.id),
            )
        })?;
        let source = source_dir.join(relative);
        if !source.is_file() {
            match config.missing_files {
                MissingFilePolicy::FailFast => return Err(SubsetError::missing_file(&source)),
                MissingFilePolicy::Skip => {
                    warn!("Image file not found, skipping: {}", source.display());
                    stats.skipped_missing += 1;
                    continue;
                }
            }
        }

        let name = target_file_name(&image.file_name);
        match planned.get(&name) {
            Some(existing) if *existing == source => {
                debug!("Image {} shares {} with an earlier image", image.id, source.display());
            }
            Some(existing) => {
                return Err(SubsetError::malformed(
                    &source,
                    format!(
                        "image {} would overwrite {} in the target directory (also copied from {})",
                        image.id,
                        name,
                        existing.display()
                    ),
                ));
            }
            None => {
                planned.insert(name.clone(), source.clone());
                copies.push((source, target_dir.join(name)));
            }
        }
    }

    Ok(copies)
}
