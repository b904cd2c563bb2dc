//! COCO category subsetting
//!
//! This library selects the images of a COCO dataset that carry a given
//! category and reduces a COCO annotation file to a set of categories while
//! keeping every cross reference valid.

pub mod coco;
pub mod config;
pub mod error;
pub mod filter;
pub mod io;
pub mod select;
pub mod utils;

// Re-export commonly used types and functions
pub use coco::{Annotation, Category, CocoFile, Image};
pub use config::{FilterArgs, MissingFilePolicy, SelectArgs, SelectConfig};
pub use error::{Result, SubsetError};
pub use filter::{filter_annotations, resolve_categories, FilterSummary};
pub use io::{ensure_directory, read_coco_file, write_coco_file};
pub use select::{image_files_for_category, select_images, SelectionStats};
