//! shadow_mask: converts a small bitmap into a large image of a CRT with a shadow mask.
//!
//! Usage: `shadow_mask [-t DELTA|INLINE] [-p] INPUT OUTPUT WIDTH`

mod cli;

use flo_render_crt::*;

use tracing::{info};
use tracing_subscriber::EnvFilter;

use std::process::{ExitCode};

fn run(args: &cli::Args) -> Result<()> {
    let options = args.options();

    info!(path = %args.input.display(), "Loading input image");
    let input_image = load_image(&args.input)?;

    if let Some(mask_directory) = &args.save_masks {
        save_masks(&input_image, &options, mask_directory)?;
    }

    let output_image = render_crt(&input_image, &options)?;

    info!(path = %args.output.display(), width = output_image.width(), height = output_image.height(), "Saving output image");
    save_image(&output_image, &args.output)
}

fn main() -> ExitCode {
    let args = cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(args.log_filter())),
        )
        .init();

    match run(&args) {
        Ok(())  => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
