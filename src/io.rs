use log::info;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::coco::CocoFile;
use crate::error::{Result, SubsetError};

/// Read a COCO annotation file and check its cross references.
///
/// The file is parsed straight from a buffered stream rather than loaded
/// into a string first; val2017 instance files run to hundreds of megabytes.
pub fn read_coco_file(path: &Path) -> Result<CocoFile> {
    let file = File::open(path).map_err(|e| SubsetError::io(path, e))?;
    let coco: CocoFile = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| SubsetError::from_json(path, e))?;

    coco.validate()
        .map_err(|reason| SubsetError::malformed(path, reason))?;

    info!(
        "Loaded {}: {} images, {} annotations, {} categories",
        path.display(),
        coco.images.len(),
        coco.annotations.len(),
        coco.categories.len()
    );
    Ok(coco)
}

/// Write a COCO annotation file, creating parent directories as needed.
///
/// The JSON goes to a temporary file next to `path` that is renamed over it
/// once complete, so a failed write never leaves a truncated file behind.
pub fn write_coco_file(path: &Path, coco: &CocoFile, pretty: bool) -> Result<()> {
    let parent = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => ensure_directory(parent)?,
        None => PathBuf::from("."),
    };

    let temp = NamedTempFile::new_in(&parent).map_err(|e| SubsetError::io(&parent, e))?;
    let mut writer = BufWriter::new(temp);
    let written = if pretty {
        serde_json::to_writer_pretty(&mut writer, coco)
    } else {
        serde_json::to_writer(&mut writer, coco)
    };
    written.map_err(|e| SubsetError::from_json(path, e))?;
    let temp = writer
        .into_inner()
        .map_err(|e| SubsetError::io(path, e.into_error()))?;
    temp.persist(path)
        .map_err(|e| SubsetError::io(path, e.error))?;

    info!("Wrote {}", path.display());
    Ok(())
}

/// Create a directory (and parents) if it is missing. Existing contents are kept.
pub fn ensure_directory(path: &Path) -> Result<PathBuf> {
    if !path.exists() {
        info!("Creating directory {}", path.display());
    }
    fs::create_dir_all(path).map_err(|e| SubsetError::io(path, e))?;
    Ok(path.to_path_buf())
}
