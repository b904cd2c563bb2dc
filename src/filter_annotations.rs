use clap::Parser;
use log::{error, info};
use std::process::ExitCode;

use coco_subset::{filter_annotations, read_coco_file, write_coco_file, FilterArgs, FilterSummary};

fn main() -> ExitCode {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = FilterArgs::parse();

    info!(
        "Filtering {} to categories: {}",
        args.input_json.display(),
        args.categories.join(", ")
    );

    let coco = match read_coco_file(&args.input_json) {
        Ok(coco) => coco,
        Err(e) => {
            error!("Failed to read annotations: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let filtered = match filter_annotations(&coco, &args.categories) {
        Ok(filtered) => filtered,
        Err(e) => {
            error!("Failed to filter annotations: {}", e);
            return ExitCode::FAILURE;
        }
    };
    FilterSummary::new(&coco, &filtered).print_summary();

    if let Err(e) = write_coco_file(&args.output_json, &filtered, args.pretty) {
        error!("Failed to write filtered annotations: {}", e);
        return ExitCode::FAILURE;
    }

    info!("Annotation filtering completed successfully.");
    ExitCode::SUCCESS
}
