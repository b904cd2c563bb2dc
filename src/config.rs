use clap::Parser;
use std::path::PathBuf;

/// Copy the images annotated with one COCO category into a target directory.
#[derive(Parser, Debug, Clone)]
#[command(version, long_about = None)]
pub struct SelectArgs {
    /// Directory holding the source images (e.g. val2017/)
    #[arg(short = 'i', long = "image_dir")]
    pub image_dir: PathBuf,

    /// COCO annotation file (e.g. instances_val2017.json)
    #[arg(short = 'a', long = "annotations")]
    pub annotations: PathBuf,

    /// Directory the selected images are copied into; created if missing
    #[arg(short = 't', long = "target_dir")]
    pub target_dir: PathBuf,

    /// Category name, matched exactly (e.g. "cat")
    #[arg(short = 'c', long = "category")]
    pub category: String,

    /// Skip images missing from image_dir with a warning instead of aborting
    #[arg(long = "continue_on_missing")]
    pub continue_on_missing: bool,

    /// Hide the progress bar
    #[arg(long = "no_progress")]
    pub no_progress: bool,
}

impl SelectArgs {
    pub fn to_select_config(&self) -> SelectConfig {
        SelectConfig {
            missing_files: if self.continue_on_missing {
                MissingFilePolicy::Skip
            } else {
                MissingFilePolicy::FailFast
            },
            show_progress: !self.no_progress,
        }
    }
}

/// Reduce a COCO annotation file to the given categories.
#[derive(Parser, Debug, Clone)]
#[command(version, long_about = None)]
pub struct FilterArgs {
    /// Source COCO annotation file
    #[arg(long = "input_json")]
    pub input_json: PathBuf,

    /// Where the filtered annotation file is written
    #[arg(long = "output_json")]
    pub output_json: PathBuf,

    /// Category names to keep, matched exactly
    #[arg(long = "categories", required = true, num_args = 1.., value_delimiter = ',')]
    pub categories: Vec<String>,

    /// Write indented JSON instead of a single line
    #[arg(long = "pretty")]
    pub pretty: bool,
}

// What to do when an annotated image is not on disk
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum MissingFilePolicy {
    #[default]
    FailFast,
    Skip,
}

/// Options for image selection
#[derive(Debug, Clone)]
pub struct SelectConfig {
    pub missing_files: MissingFilePolicy,
    pub show_progress: bool,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            missing_files: MissingFilePolicy::FailFast,
            show_progress: true,
        }
    }
}
