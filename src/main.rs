//! Torus Life CLI - Run Game of Life sessions from JSON configuration.

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use std::fs;
use std::path::PathBuf;
use std::thread;
use std::time::Instant;

use torus_life::{
    control::Simulation,
    engine::{Grid, GridStats},
    schema::{GameConfig, Pattern, Seed},
};

fn main() {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <config.json> [generations] [--soup <density>]", args[0]);
        eprintln!();
        eprintln!("Run a Game of Life session from JSON configuration.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  config.json  Path to session configuration file");
        eprintln!("  generations  Number of generations to advance (default: 100)");
        eprintln!("  --soup       Ignore any seed file and start from a random soup");
        eprintln!();
        eprintln!("A sidecar <config>.seed.json selects the initial pattern.");
        eprintln!("Example configuration is generated with --example flag.");
        std::process::exit(1);
    }

    if args[1] == "--example" {
        print_example_config();
        return;
    }

    let config_path = PathBuf::from(&args[1]);
    let generations: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(100);

    // Load configuration
    let config_str = fs::read_to_string(&config_path).unwrap_or_else(|e| {
        eprintln!("Error reading config file: {}", e);
        std::process::exit(1);
    });

    let config: GameConfig = serde_json::from_str(&config_str).unwrap_or_else(|e| {
        eprintln!("Error parsing config: {}", e);
        std::process::exit(1);
    });

    // Resolve the seed: --soup shorthand, sidecar file, or the default glider
    let seed = if let Some(flag) = args.iter().position(|a| a == "--soup") {
        let density = args
            .get(flag + 1)
            .and_then(|s| s.parse().ok())
            .unwrap_or(0.3);
        Seed {
            pattern: Pattern::Soup {
                density,
                seed: rand::random(),
            },
        }
    } else {
        load_seed_file(&config_path)
    };

    println!("Torus Life Simulation");
    println!("=====================");
    println!(
        "Grid: {}x{} ({} cells)",
        config.rows,
        config.columns,
        config.grid_size()
    );
    if config.tick_interval_ms == 0 {
        println!("Tick interval: unpaced");
    } else {
        println!("Tick interval: {} ms", config.tick_interval_ms);
    }
    println!("Generations: {}", generations);
    println!();

    // Initialize
    let mut simulation = Simulation::with_seed(&config, &seed).unwrap_or_else(|e| {
        eprintln!("Error creating simulation: {}", e);
        std::process::exit(1);
    });

    let initial_stats = GridStats::from_grid(simulation.grid());
    println!("Initial state:");
    println!("  Population: {}", initial_stats.population);
    println!("  Density: {:.4}", initial_stats.density);
    println!();

    // Run session: paced through the ticker, or flat out when unpaced
    println!("Running simulation...");
    let paced = config.tick_interval_ms > 0;
    if paced {
        simulation.start();
    }

    let start = Instant::now();
    let mut completed = 0u64;

    while completed < generations {
        if paced {
            let now = Instant::now();
            if !simulation.pump_at(now) {
                thread::sleep(simulation.time_until_due(now));
                continue;
            }
        } else {
            simulation.step();
        }
        completed += 1;

        // Print progress every 10%
        if completed % (generations / 10).max(1) == 0 {
            let stats = GridStats::from_grid(simulation.grid());
            let elapsed = start.elapsed().as_secs_f32();
            let gens_per_sec = completed as f32 / elapsed;
            println!(
                "  Generation {}/{}: population={}, density={:.4}, {:.1} gen/s",
                completed, generations, stats.population, stats.density, gens_per_sec
            );
        }
    }

    let elapsed = start.elapsed();
    let final_stats = GridStats::from_grid(simulation.grid());

    println!();
    println!("Final state:");
    println!("  Population: {}", final_stats.population);
    println!("  Density: {:.4}", final_stats.density);
    println!(
        "Time: {:.2}s ({:.1} gen/s)",
        elapsed.as_secs_f32(),
        generations as f32 / elapsed.as_secs_f32()
    );
    println!();
    print!("{}", render_frame(simulation.grid()));
}

/// Read the sidecar seed file next to the config, or fall back to the
/// default seed.
fn load_seed_file(config_path: &std::path::Path) -> Seed {
    let seed_path = config_path.with_extension("seed.json");
    if !seed_path.exists() {
        return Seed::default();
    }

    let seed_str = fs::read_to_string(&seed_path).unwrap_or_else(|e| {
        eprintln!("Error reading seed file: {}", e);
        std::process::exit(1);
    });
    serde_json::from_str(&seed_str).unwrap_or_else(|e| {
        eprintln!("Error parsing seed: {}", e);
        std::process::exit(1);
    })
}

/// Render the grid as one text frame, '#' for live cells.
fn render_frame(grid: &Grid) -> String {
    let mut frame = String::with_capacity(grid.len() + grid.rows());
    for row in grid.cells().chunks(grid.columns()) {
        for &alive in row {
            frame.push(if alive { '#' } else { '.' });
        }
        frame.push('\n');
    }
    frame
}

fn print_example_config() {
    let config = GameConfig::default();
    let seed = Seed::default();

    println!("Example configuration (config.json):");
    println!("{}", serde_json::to_string_pretty(&config).unwrap());
    println!();
    println!("Example seed (config.seed.json):");
    println!("{}", serde_json::to_string_pretty(&seed).unwrap());
}
