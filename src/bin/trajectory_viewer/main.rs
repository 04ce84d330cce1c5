use anyhow::Result;
use clap::Parser;
use macroquad::prelude::Conf;
use tracing::{info, warn};

use bullet_trajectory::cli::{LaunchArgs, init_logging};
use bullet_trajectory::sample_trajectory;

mod app;
mod constants;
mod render;

#[derive(Parser, Debug)]
#[command(name = "trajectory_viewer")]
#[command(version, about = "Show a drag-free bullet trajectory in a window")]
struct Args {
    #[command(flatten)]
    launch: LaunchArgs,
}

fn window_conf() -> Conf {
    app::window_conf()
}

fn prepare() -> Result<app::Scene> {
    init_logging();
    let args = Args::parse();
    let config = args.launch.resolve()?;
    let result = sample_trajectory(config.launch)?;

    if result.is_empty() {
        warn!(
            angle_deg = config.launch.angle_deg,
            "projectile never rises above launch height"
        );
    } else {
        info!(samples = result.len(), "showing trajectory, Esc to close");
    }

    Ok(app::Scene::new(result, config.chart))
}

#[macroquad::main(window_conf)]
async fn main() {
    let scene = match prepare() {
        Ok(scene) => scene,
        Err(err) => {
            eprintln!("Error: {err:#}");
            std::process::exit(1);
        }
    };
    app::run(scene).await;
}
