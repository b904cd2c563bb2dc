use clap::Parser;
use log::{error, info};
use std::process::ExitCode;

use coco_subset::{read_coco_file, select_images, SelectArgs};

fn main() -> ExitCode {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = SelectArgs::parse();

    if !args.image_dir.is_dir() {
        error!(
            "The specified image_dir does not exist: {}",
            args.image_dir.display()
        );
        return ExitCode::FAILURE;
    }

    info!(
        "Selecting '{}' images from {}...",
        args.category,
        args.image_dir.display()
    );

    let coco = match read_coco_file(&args.annotations) {
        Ok(coco) => coco,
        Err(e) => {
            error!("Failed to read annotations: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let config = args.to_select_config();
    match select_images(
        &args.image_dir,
        &coco,
        &args.target_dir,
        &args.category,
        &config,
    ) {
        Ok(stats) => {
            stats.print_summary();
            info!(
                "Copied {} images into {}",
                stats.copied,
                args.target_dir.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to select images: {}", e);
            ExitCode::FAILURE
        }
    }
}
