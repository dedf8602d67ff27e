//! Tesserae main entry point.
//!
//! A lightweight 2D game framework using **raylib** for windowing,
//! graphics, and input. This executable runs one of the bundled demo
//! games, selected on the command line:
//!
//! ```sh
//! cargo run --release -- --demo platformer
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use clap::{Parser, ValueEnum};

use tesserae::demos::explorer::ExplorerScene;
use tesserae::demos::platformer::PlatformerScene;
use tesserae::demos::starfish::StarfishScene;
use tesserae::game::{Game, Scene, WindowConfig};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Demo {
    /// Top-down collector
    Starfish,
    /// Run and jump across a tile map
    Platformer,
    /// Wander a dungeon and pick up coins
    Explorer,
}

/// Tesserae 2D demo runner
#[derive(Parser)]
#[command(version, about = "Demo games for the Tesserae 2D framework")]
struct Cli {
    /// Which demo game to run.
    #[arg(long, value_enum, default_value_t = Demo::Starfish)]
    demo: Demo,

    /// Window width in pixels.
    #[arg(long, default_value_t = 800)]
    width: i32,

    /// Window height in pixels.
    #[arg(long, default_value_t = 600)]
    height: i32,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = WindowConfig {
        width: cli.width,
        height: cli.height,
        title: format!("Tesserae — {:?}", cli.demo),
        ..WindowConfig::default()
    };

    log::info!("starting demo {:?}", cli.demo);
    let mut scene: Box<dyn Scene> = match cli.demo {
        Demo::Starfish => Box::new(StarfishScene::new()),
        Demo::Platformer => Box::new(PlatformerScene::new()),
        Demo::Explorer => Box::new(ExplorerScene::new()),
    };

    if let Err(e) = Game::new(config).run(scene.as_mut()) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
