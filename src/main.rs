use vibsim::{ScenarioConfig, Scenario, ConfigError};
use vibsim::{run_charts, write_csv, bench_solvers, Chart};

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{error, info};

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Shown instead of the technical cause when a solve fails
const SOLVE_FAILED_MSG: &str = "Error calculating results. Please check your input parameters.";

#[derive(Parser, Debug)]
struct Args {
    /// Scenario files (under scenarios/ or a direct path), one chart tab each
    #[arg(short, default_values = ["transient.yaml", "harmonic.yaml"])]
    file_name: Vec<String>,

    /// Override a parameter, e.g. --set k12=-4000. Applies to every scenario that has it
    #[arg(long = "set", value_name = "NAME=VALUE")]
    overrides: Vec<String>,

    /// Print CSV instead of opening the chart window
    #[arg(long)]
    headless: bool,

    /// Directory to write one <scenario>.csv per scenario into (implies --headless)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Time both solvers and exit
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let direct = Path::new(file_name);
    let config_path = if direct.is_file() {
        direct.to_path_buf()
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
    };

    let file = File::open(&config_path).with_context(|| format!("opening {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig =
        serde_yaml::from_reader(reader).with_context(|| format!("parsing {}", config_path.display()))?;

    Ok(scenario_cfg)
}

/// Apply each override to every scenario that knows the name; a name no
/// scenario knows is an error
fn apply_overrides(scenarios: &mut [(String, Scenario)], overrides: &[String]) -> Result<()> {
    for arg in overrides {
        let mut accepted = false;
        let mut unknown = None;
        for (_, scenario) in scenarios.iter_mut() {
            match scenario.apply_overrides(&[arg]) {
                Ok(_) => accepted = true,
                Err(e @ ConfigError::UnknownParameter { .. }) => unknown = Some(e),
                Err(e) => return Err(e.into()),
            }
        }
        if !accepted {
            match unknown {
                Some(e) => return Err(e.into()),
                None => bail!("no scenario loaded to apply {arg:?} to"),
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.bench {
        bench_solvers();
        return Ok(());
    }

    let mut scenarios = Vec::with_capacity(args.file_name.len());
    for file_name in &args.file_name {
        let cfg = load_scenario_from_yaml(file_name)?;
        let scenario = Scenario::build_scenario(cfg).with_context(|| format!("building {file_name}"))?;
        scenarios.push((file_name.clone(), scenario));
    }
    apply_overrides(&mut scenarios, &args.overrides)?;

    // Each solve is all-or-nothing; a failed one gets no chart
    let mut charts = Vec::with_capacity(scenarios.len());
    for (file_name, scenario) in &scenarios {
        match scenario.run() {
            Ok(samples) => charts.push((file_name, Chart { title: scenario.title.clone(), samples })),
            Err(e) => {
                eprintln!("{}: {SOLVE_FAILED_MSG}", scenario.title);
                error!("{file_name}: {e}");
            }
        }
    }
    if charts.is_empty() {
        bail!("no scenario could be solved");
    }

    if let Some(dir) = &args.output {
        std::fs::create_dir_all(dir)?;
        for (file_name, chart) in &charts {
            let stem = Path::new(file_name.as_str()).file_stem().and_then(|s| s.to_str()).unwrap_or("scenario");
            let path = dir.join(format!("{stem}.csv"));
            let mut out = BufWriter::new(File::create(&path)?);
            write_csv(&mut out, &chart.samples)?;
            out.flush()?;
            info!("wrote {} samples to {}", chart.samples.len(), path.display());
        }
    } else if args.headless {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        for (_, chart) in &charts {
            writeln!(out, "# {}", chart.title)?;
            write_csv(&mut out, &chart.samples)?;
        }
    } else {
        run_charts(charts.into_iter().map(|(_, chart)| chart).collect());
    }

    Ok(())
}
