use flo_render_crt::{MaskType, ShadowMaskOptions};

use clap::Parser;

use std::path::{PathBuf};

/// Converts a small bitmap to a large one that looks like it's displayed on a CRT with a shadow mask.
#[derive(Parser, Debug)]
#[command(name = "shadow_mask", version, about)]
pub struct Args {
    /// Input bitmap.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output bitmap.
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Output width in pixels.
    #[arg(value_name = "WIDTH", value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Type of mask (DELTA, INLINE).
    #[arg(short = 't', long = "type", value_name = "TYPE", default_value_t = MaskType::Delta)]
    pub mask_type: MaskType,

    /// CRT is mounted portrait.
    #[arg(short = 'p', long)]
    pub portrait: bool,

    /// Write the shadow mask for each channel to this directory (for debugging).
    #[arg(long, value_name = "DIR")]
    pub save_masks: Option<PathBuf>,

    /// Log more detail (can be repeated).
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    ///
    /// The rendering options described by these arguments
    ///
    pub fn options(&self) -> ShadowMaskOptions {
        ShadowMaskOptions::new(self.width as usize)
            .with_mask_type(self.mask_type)
            .with_portrait(self.portrait)
    }

    ///
    /// The default log filter for the requested verbosity
    ///
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
