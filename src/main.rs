//! Main CLI application for the toroidal Game of Life simulator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use game_of_life_torus::{
    config::{CliOverrides, Settings, SourceMode},
    simulation::{evolution_window, BehaviorAnalysis, SimulationRunner},
    source::{create_example_patterns, load_board_from_file},
    utils::{BoardFormatter, ColorOutput},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "game_of_life_torus")]
#[command(about = "Conway's Game of Life on a finite toroidal grid")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Grid width (overrides config)
        #[arg(short = 'W', long)]
        width: Option<i64>,

        /// Grid height (overrides config)
        #[arg(short = 'H', long)]
        height: Option<i64>,

        /// Number of generations to run (overrides config)
        #[arg(short = 'n', long)]
        steps: Option<usize>,

        /// Per-cell live probability for random boards (overrides config)
        #[arg(short, long)]
        probability: Option<f64>,

        /// RNG seed for reproducible random boards (overrides config)
        #[arg(long)]
        seed: Option<u64>,

        /// Milliseconds to pause between generations (overrides config)
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Load the initial board from a pattern file (overrides config)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Output directory (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Suppress frame rendering, show progress only
        #[arg(short, long)]
        quiet: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Create example configuration and pattern files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Classify the behavior of a pattern over a few generations
    Analyze {
        /// Pattern file to analyze
        #[arg(short, long)]
        file: PathBuf,

        /// Generations to evolve while classifying
        #[arg(short, long, default_value_t = 16)]
        generations: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            width,
            height,
            steps,
            probability,
            seed,
            delay_ms,
            file,
            output,
            quiet,
            verbose,
        } => {
            let overrides = CliOverrides {
                width,
                height,
                steps,
                delay_ms,
                probability,
                seed,
                pattern_file: file,
                output_dir: output,
            };
            run_command(config, overrides, quiet, verbose)
        }
        Commands::Setup { directory, force } => setup_command(directory, force),
        Commands::Analyze { file, generations } => analyze_command(file, generations),
    }
}

fn run_command(
    config_path: PathBuf,
    overrides: CliOverrides,
    quiet: bool,
    verbose: bool,
) -> Result<()> {
    let mut settings = if config_path.exists() {
        Settings::from_file(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Settings::default()
    };

    settings.merge_with_cli(&overrides);

    if verbose {
        println!("Configuration:");
        println!("  Grid: {}x{}", settings.grid.width, settings.grid.height);
        println!("  Steps: {}", settings.simulation.steps);
        println!("  Delay: {}ms", settings.simulation.delay_ms);
        match settings.source.mode {
            SourceMode::Random => println!(
                "  Source: random (p = {}, seed = {:?})",
                settings.source.probability, settings.source.seed
            ),
            SourceMode::File => println!(
                "  Source: file ({})",
                settings
                    .source
                    .pattern_file
                    .as_deref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default()
            ),
        }
        println!();
    }

    settings
        .validate()
        .context("Configuration validation failed")?;

    let mut runner =
        SimulationRunner::new(settings.clone()).context("Failed to create simulation")?;

    let report = if quiet {
        runner.run_quiet()?
    } else {
        let mut stdout = std::io::stdout();
        runner.run(&mut stdout)?
    };

    println!("{}", ColorOutput::success(&report.summary()));

    BoardFormatter::save_run_outputs(&report, runner.board(), &settings)
        .context("Failed to save run outputs")?;
    println!(
        "{}",
        ColorOutput::info(&format!(
            "Run outputs saved to {}",
            settings.output.directory.display()
        ))
    );

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let patterns_dir = directory.join("input/patterns");
    let output_dir = directory.join("output/runs");

    for dir in [&config_dir, &patterns_dir, &output_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    create_example_patterns(&patterns_dir).context("Failed to create example patterns")?;
    println!("Created example patterns in: {}", patterns_dir.display());

    // Pattern-driven configuration variant.
    let examples_dir = config_dir.join("examples");
    std::fs::create_dir_all(&examples_dir)?;

    let mut glider_config = Settings::default();
    glider_config.grid.width = 25;
    glider_config.grid.height = 25;
    glider_config.simulation.steps = 40;
    glider_config.source.mode = SourceMode::File;
    glider_config.source.pattern_file = Some(PathBuf::from("input/patterns/glider.txt"));
    glider_config.to_file(&examples_dir.join("glider.yaml"))?;

    let mut dense_config = Settings::default();
    dense_config.grid.width = 80;
    dense_config.grid.height = 40;
    dense_config.source.probability = 0.5;
    dense_config.source.seed = Some(1);
    dense_config.to_file(&examples_dir.join("dense_random.yaml"))?;

    println!("Created example configurations in: {}", examples_dir.display());

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Add your patterns to {}", patterns_dir.display());
    println!("3. Run: cargo run -- run --config config/default.yaml");

    Ok(())
}

fn analyze_command(pattern_path: PathBuf, generations: usize) -> Result<()> {
    println!("{}", ColorOutput::info("Analyzing pattern..."));

    let (board, width, height) = load_board_from_file(&pattern_path)
        .with_context(|| format!("Failed to load pattern from {}", pattern_path.display()))?;

    println!("Pattern ({}x{}):", width, height);
    println!("{}", BoardFormatter::format_board_with_coords(&board, width, height));

    println!("Pattern statistics:");
    println!("  Living cells: {}", board.population());
    println!(
        "  Density: {:.1}%",
        (board.population() as f64 / (width * height) as f64) * 100.0
    );
    println!("  Live cells: {}", BoardFormatter::format_live_cells(&board));

    let frames = evolution_window(&board, width, height, generations)
        .context("Failed to evolve pattern")?;
    let analysis = BehaviorAnalysis::analyze(&frames);

    println!("\nBehavior over {} generation(s):", generations);
    println!("  Classification: {}", analysis.classification());
    if let Some(period) = analysis.oscillation_period {
        println!("  Oscillation period: {}", period);
    }
    println!("  Population drift: {:+}", analysis.population_drift);

    if analysis.went_extinct {
        println!("{}", ColorOutput::warning("Pattern dies out"));
    } else {
        println!("{}", ColorOutput::success("Pattern survives the window"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "game_of_life_torus",
            "run",
            "--config",
            "test.yaml",
            "--steps",
            "5",
            "--seed",
            "42",
        ]);

        assert!(cli.is_ok());
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        let result = setup_command(temp_dir.path().to_path_buf(), false);

        assert!(result.is_ok());
        assert!(temp_dir.path().join("config/default.yaml").exists());
        assert!(temp_dir.path().join("input/patterns/glider.txt").exists());
        assert!(temp_dir.path().join("config/examples/glider.yaml").exists());
    }

    #[test]
    fn test_analyze_command() {
        let temp_dir = tempdir().unwrap();
        create_example_patterns(temp_dir.path()).unwrap();

        let result = analyze_command(temp_dir.path().join("blinker.txt"), 8);
        assert!(result.is_ok());
    }
}
