//! Refit the outlines of a svg path with as few cubic curves as possible

use bezfit::draw::svg::{SVGAbsolutePath, SVGRelativePath};
use bezfit::draw::DrawCurve;
use bezfit::path::subpaths_from_svg;
use bezfit::{fit_subpaths, FitConfig};
use clap::Parser;
use std::io::Read;

/// Refit the outlines of a svg path with as few cubic curves as possible
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Increase logging
    #[clap(short, long, parse(from_occurrences))]
    verbose: usize,

    /// Cosine at or above which a joint is a corner
    #[clap(long, default_value_t = 0.5)]
    cusp_cosine: f64,

    /// Divisor of the shortest chord giving the allowed fit error
    #[clap(long, default_value_t = 3.0)]
    error_divisor: f64,

    /// Cosine at or below which a joint gets straightened
    #[clap(long, default_value_t = -0.94, allow_hyphen_values = true)]
    smooth_cosine: f64,

    /// Write relative path commands
    #[clap(short, long)]
    relative: bool,

    /// Path data to refit, read from stdin if missing
    path: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    env_logger::init_from_env(env_logger::Env::default().filter_or(
        env_logger::DEFAULT_FILTER_ENV,
        match args.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        },
    ));

    let d = match args.path {
        Some(d) => d,
        None => {
            let mut d = String::new();
            std::io::stdin().read_to_string(&mut d)?;
            d
        }
    };

    let config = FitConfig {
        cusp_cosine: args.cusp_cosine,
        error_divisor: args.error_divisor,
        smooth_cosine: args.smooth_cosine,
        ..FitConfig::default()
    };

    let subpaths = subpaths_from_svg(d.trim())?;
    log::info!("fitting {} subpaths", subpaths.len());
    let fitted = fit_subpaths(&subpaths, &config)?;

    let mut output = String::new();
    for curves in &fitted {
        if args.relative {
            SVGRelativePath::from(&mut output).add_curves(curves);
        } else {
            SVGAbsolutePath::from(&mut output).add_curves(curves);
        }
    }
    println!("{}", output);
    Ok(())
}
