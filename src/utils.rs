use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Component, Path};

/// Create a progress bar with the given length and label
pub fn create_progress_bar(len: u64, label: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(&format!(
                "{{spinner:.green}} [{}] [{{elapsed_precise}}] [{{bar:40.cyan/blue}}] {{pos}}/{{len}} ({{eta}})",
                label
            ))
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb
}

/// Name a copied image gets in the target directory.
///
/// Plain COCO names (`000000000139.jpg`) come back unchanged; anything with
/// directory components is reduced to its last component and sanitized so
/// the copy cannot land outside the target directory.
pub fn target_file_name(file_name: &str) -> String {
    let base = Path::new(file_name)
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name);
    sanitize_filename::sanitize(base)
}

/// `file_name` as a path below the image directory.
///
/// Returns `None` for empty names, absolute paths and anything containing
/// `..`, none of which can be read from inside the image directory.
pub fn relative_image_path(file_name: &str) -> Option<&Path> {
    let path = Path::new(file_name);
    let mut has_normal = false;
    for component in path.components() {
        match component {
            Component::Normal(_) => has_normal = true,
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    has_normal.then_some(path)
}
