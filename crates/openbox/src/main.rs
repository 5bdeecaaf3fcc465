use std::path::PathBuf;

use clap::Parser;
use openbox::app::{self, RunOptions};
use openbox::scenes::{self, Scene};
use openbox::simulation::MaterialKind;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file (RON); defaults to ./openbox.ron when present
    #[arg(long)]
    config: Option<PathBuf>,

    /// Preset scene to start from (see --list-scenes)
    #[arg(long)]
    scene: Option<Scene>,

    /// Scenario script (RON) to run after the scene
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Ticks to simulate after the scenario
    #[arg(long, default_value = "0")]
    ticks: u32,

    /// RNG seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Save file to load first
    #[arg(long)]
    load: Option<PathBuf>,

    /// Save the final grid to this file
    #[arg(long)]
    save: Option<PathBuf>,

    /// Write a PNG of the final grid
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// List available scenes
    #[arg(long)]
    list_scenes: bool,

    /// List materials and their hotkeys
    #[arg(long)]
    list_materials: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.list_scenes {
        scenes::list_scenes();
        return Ok(());
    }

    if args.list_materials {
        println!("Materials:");
        for key in 1..=9 {
            if let Some(kind) = MaterialKind::from_hotkey(key) {
                println!("  [{}] {}", key, kind);
            }
        }
        return Ok(());
    }

    let options = RunOptions {
        config_path: args.config,
        seed: args.seed,
        load: args.load,
        scene: args.scene,
        scenario: args.scenario,
        ticks: args.ticks,
        save: args.save,
        snapshot: args.snapshot,
    };

    if !app::run(&options)? {
        log::error!("Scenario verification failed");
        std::process::exit(1);
    }

    Ok(())
}
