mod plot_results_app;

use algobench::config::BenchConfig;
use anyhow::{anyhow, Result};
use std::path::PathBuf;

fn usage() -> &'static str {
    "Usage: plot_results [--results-dir <path>] [--linear]\n\
     \n\
     Reads the benchmark CSVs and renders comparison plots next to them.\n\
     \n\
     --results-dir <path>  directory holding the CSVs (default: ALGOBENCH_RESULTS_DIR or ./results)\n\
     --linear              disable logarithmic axes"
}

struct PlotArgs {
    results_dir: Option<PathBuf>,
    use_log_scale: bool,
}

fn parse_args() -> Result<PlotArgs> {
    let mut results_dir = None;
    let mut use_log_scale = true;

    let mut args = std::env::args_os().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--help" || arg == "-h" {
            println!("{}", usage());
            std::process::exit(0);
        }

        if arg == "--linear" {
            use_log_scale = false;
            continue;
        }

        if arg == "--results-dir" {
            let Some(path) = args.next() else {
                return Err(anyhow!("missing value for --results-dir"));
            };
            results_dir = Some(PathBuf::from(path));
            continue;
        }

        return Err(anyhow!("unknown argument: {:?}\n\n{}", arg, usage()));
    }

    Ok(PlotArgs {
        results_dir,
        use_log_scale,
    })
}

fn run() -> Result<()> {
    let args = parse_args()?;
    let results_dir = match args.results_dir {
        Some(dir) => dir,
        None => BenchConfig::from_env()?.results_dir,
    };

    if !results_dir.is_dir() {
        log::warn!("Results directory {} does not exist", results_dir.display());
    }

    let written = plot_results_app::plot_all(&results_dir, args.use_log_scale)?;
    for path in &written {
        println!("Plot saved to {}", path.display());
    }

    Ok(())
}

fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    if let Err(err) = run() {
        log::error!("{err:#}");
        eprintln!("Plotting failed: {err:#}");
        std::process::exit(1);
    }
}
