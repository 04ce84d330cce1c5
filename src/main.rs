use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tracing::{info, warn};

use bullet_trajectory::cli::{LaunchArgs, init_logging};
use bullet_trajectory::core::export::export_csv;
use bullet_trajectory::core::plot::render_chart;
use bullet_trajectory::{FlightSummary, flight_summary, sample_trajectory};

#[derive(Parser, Debug)]
#[command(name = "bullet_trajectory")]
#[command(version, about = "Drag-free bullet trajectory sampler and chart writer")]
struct Args {
    #[command(flatten)]
    launch: LaunchArgs,

    /// Chart file (.png, .bmp, .jpg or .svg) [default: trajectory_<timestamp>.png]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also write the sampled t,x,y series to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Skip writing the chart
    #[arg(long)]
    no_plot: bool,
}

fn default_chart_path() -> PathBuf {
    PathBuf::from(format!(
        "trajectory_{}.png",
        Local::now().format("%Y%m%d_%H%M%S")
    ))
}

/// What to do about the chart once the trajectory is known.
#[derive(Debug, PartialEq)]
enum ChartPlan {
    Disabled,
    Degenerate,
    Draw(PathBuf),
}

fn chart_plan(args: &Args, summary: &FlightSummary, samples: usize) -> ChartPlan {
    if args.no_plot {
        ChartPlan::Disabled
    } else if summary.is_degenerate() || samples == 0 {
        ChartPlan::Degenerate
    } else {
        ChartPlan::Draw(args.output.clone().unwrap_or_else(default_chart_path))
    }
}

fn print_summary(summary: &FlightSummary, samples: usize) {
    println!("\nTime of flight: {:.4} s", summary.flight_time_s);
    println!("Apex height: {:.4} m", summary.apex_height_m);
    println!("Horizontal distance: {:.4} m", summary.range_m);
    println!("Samples: {samples}");
}

fn run() -> Result<()> {
    init_logging();
    let args = Args::parse();
    let config = args.launch.resolve()?;
    let params = config.launch;

    info!(
        angle_deg = params.angle_deg,
        muzzle_velocity_mps = params.muzzle_velocity_mps,
        "simulating trajectory"
    );

    let result = sample_trajectory(params)?;
    let summary = flight_summary(params)?;
    print_summary(&summary, result.len());

    if let Some(path) = &args.csv {
        export_csv(&result, path)
            .with_context(|| format!("writing csv to {}", path.display()))?;
        println!("Series written to {}", path.display());
    }

    match chart_plan(&args, &summary, result.len()) {
        ChartPlan::Disabled => {}
        ChartPlan::Degenerate => warn!(
            angle_deg = params.angle_deg,
            "projectile never rises above launch height, skipping chart"
        ),
        ChartPlan::Draw(path) => {
            render_chart(&result, &config.chart, &path)
                .with_context(|| format!("drawing chart to {}", path.display()))?;
            println!("Chart written to {}", path.display());
        }
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
