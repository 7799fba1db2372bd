use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use scenegraft_assets::{AssetLookup, AssetStore, demo};
use scenegraft_common::{GameRef, SnoId};
use scenegraft_kernel::PopulationLog;
use scenegraft_tools::WorldInspector;
use scenegraft_worldgen::{Generator, GeneratorConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "scenegraft-cli", about = "CLI tool for scenegraft world assembly")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print engine version and crate info
    Info,
    /// Generate a world from a JSON template store
    Generate {
        /// Path to an asset store saved as JSON
        #[arg(short, long)]
        assets: PathBuf,
        /// World template id
        #[arg(short, long)]
        world: i32,
        /// RNG seed; overrides the config file
        #[arg(short, long)]
        seed: Option<u64>,
        /// Generator config (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Print the scene tree
        #[arg(long)]
        tree: bool,
    },
    /// Generate both worlds of the bundled demo catalog
    Demo {
        /// RNG seed
        #[arg(short, long, default_value = "42")]
        seed: u64,
        /// Write the demo catalog to this path as JSON
        #[arg(long)]
        export: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("scenegraft-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("assets: {}", scenegraft_assets::crate_info());
            println!("worldgen: {}", scenegraft_worldgen::crate_info());
            println!("tools: {}", scenegraft_tools::crate_info());
        }
        Commands::Generate {
            assets,
            world,
            seed,
            config,
            tree,
        } => {
            let store = AssetStore::load(&assets)
                .with_context(|| format!("loading asset store {}", assets.display()))?;
            let mut cfg = match config {
                Some(path) => GeneratorConfig::load(&path)
                    .with_context(|| format!("loading config {}", path.display()))?,
                None => GeneratorConfig::default(),
            };
            if let Some(seed) = seed {
                cfg = cfg.with_seed(seed);
            }
            generate_and_print(&store, cfg, SnoId(world), tree)?;
        }
        Commands::Demo { seed, export } => {
            let store = demo::demo_store();
            if let Some(path) = export {
                store
                    .save(&path)
                    .with_context(|| format!("writing demo catalog to {}", path.display()))?;
                println!("Demo catalog written to {}", path.display());
            }
            for world in store.world_ids() {
                let cfg = GeneratorConfig::default().with_seed(seed);
                generate_and_print(&store, cfg, world, true)?;
            }
        }
    }

    Ok(())
}

fn generate_and_print<A>(
    assets: &A,
    config: GeneratorConfig,
    world: SnoId,
    tree: bool,
) -> anyhow::Result<()>
where
    A: AssetLookup + ?Sized,
{
    let mut generator = Generator::new(assets, config).with_populator(PopulationLog::new());
    tracing::info!(world = %world, seed = ?generator.config().seed, "generating");
    let generated = generator
        .generate(GameRef(0), world)
        .with_context(|| format!("generating world {world}"))?;
    let populated = generator.into_populator().populated;

    println!("{}", WorldInspector::summary(&generated));
    println!("Populated scenes: {}", populated.len());
    if tree {
        print!("{}", WorldInspector::render_tree(&generated));
    }
    Ok(())
}
