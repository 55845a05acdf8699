use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use tracing::error;

use retail_network_gen::generation::GeneratorConfig;
use retail_network_gen::io::reporting;
use retail_network_gen::logging;
use retail_network_gen::simulation::{EnvConfig, InventoryEnv};

#[derive(Debug, Parser)]
#[command(
    name = "retail-network-gen",
    about = "Generate a synthetic retail inventory network (items, stores, DCs)",
    version
)]
struct Args {
    /// Seed for every random draw.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of items in the global catalog.
    #[arg(long, default_value_t = 100)]
    items: usize,

    /// Number of stores.
    #[arg(long, default_value_t = 20)]
    stores: usize,

    /// Number of distribution centers.
    #[arg(long, default_value_t = 2)]
    dcs: usize,

    /// JSON file with generator parameters. Missing fields use defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for items.csv, stores.csv and dcs.csv. Nothing is written when omitted.
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Verbosity: -v, -vv
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    // 1. LOAD GENERATOR PARAMETERS
    let generators = match &args.config {
        Some(path) => match GeneratorConfig::from_json_file(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                error!(path = %path.display(), "{e}");
                return ExitCode::FAILURE;
            }
        },
        None => GeneratorConfig::default(),
    };

    // 2. BUILD THE NETWORK
    let config = EnvConfig::new(args.items, args.stores, args.dcs).with_generators(generators);
    let mut env = InventoryEnv::new(config);
    if let Err(e) = env.reset(args.seed) {
        error!(seed = args.seed, "{e}");
        return ExitCode::FAILURE;
    }

    // 3. EXPORT
    if let Some(out_dir) = &args.out_dir {
        match reporting::write_network(out_dir, env.items(), env.stores(), env.dcs()) {
            Ok(paths) => {
                for path in paths {
                    println!("Wrote {}", path.display());
                }
            }
            Err(e) => {
                error!(out_dir = %out_dir.display(), "{e}");
                return ExitCode::FAILURE;
            }
        }
    }

    // 4. SUMMARY
    if let Some(summary) = env.summary() {
        println!("=== Network Summary (seed {}) ===", summary.seed);
        println!("Items: {}, Stores: {}, DCs: {}", summary.items, summary.stores, summary.dcs);
        println!("Graph: {} nodes, {} edges", summary.nodes, summary.edges);
        println!(
            "Store capacity: {}, on hand: {} (mean overshoot {:.1})",
            summary.total_store_capacity, summary.total_store_inventory, summary.mean_overshoot
        );
        println!(
            "Inventory value: ${:.2} at cost, ${:.2} at retail",
            summary.inventory_value_at_cost, summary.inventory_value_at_retail
        );
    }

    ExitCode::SUCCESS
}
