use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::path::PathBuf;

use pushback_engine::path_io;
use pushback_engine::{generate_path, PushbackResult, PushbackSolver, Scenario};

#[derive(Parser)]
#[command(name = "pushback")]
#[command(version = "0.1.0")]
#[command(about = "Aircraft pushback kinematics simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the reference path and write it to a CSV file
    Path {
        /// Scenario JSON file (defaults to the built-in example scenario)
        #[arg(short, long)]
        scenario: Option<PathBuf>,

        /// Output CSV file
        #[arg(short, long, default_value = "reference_path_data.csv")]
        output_file: PathBuf,
    },

    /// Run the full pipeline: reference path -> kinematics propagation
    Simulate {
        /// Scenario JSON file (defaults to the built-in example scenario)
        #[arg(short, long)]
        scenario: Option<PathBuf>,

        /// Load the drive trajectory from an existing CSV instead of
        /// generating it from the scenario segments
        #[arg(short, long)]
        path_file: Option<PathBuf>,

        /// Persist the generated reference path to this CSV before propagating
        #[arg(long)]
        save_path: Option<PathBuf>,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,

        /// Print every time step in table output
        #[arg(long)]
        full: bool,
    },

    /// Show information about the engine
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

/// Flat, serializable mirror of the propagation result for JSON output.
#[derive(Debug, Serialize, Deserialize)]
struct SimulationOutput {
    samples: usize,
    link_length: f64,
    drive: Vec<[f64; 2]>,
    trace: Vec<[f64; 2]>,
    drag: Vec<Vec<[f64; 2]>>,
    track: Vec<Vec<[f64; 2]>>,
    wing_center: Vec<[f64; 2]>,
    tail_center: Vec<[f64; 2]>,
    min_vals: [f64; 2],
    max_vals: [f64; 2],
}

impl SimulationOutput {
    fn from_result(result: &PushbackResult) -> Self {
        let flatten = |series: &[nalgebra::Vector2<f64>]| -> Vec<[f64; 2]> {
            series.iter().map(|p| [p.x, p.y]).collect()
        };
        SimulationOutput {
            samples: result.drive.len(),
            link_length: result.link_length,
            drive: flatten(&result.drive),
            trace: flatten(&result.trace),
            drag: result.drag.iter().map(|s| flatten(s)).collect(),
            track: result.track.iter().map(|s| flatten(s)).collect(),
            wing_center: flatten(&result.wing_center),
            tail_center: flatten(&result.tail_center),
            min_vals: [result.min_vals.x, result.min_vals.y],
            max_vals: [result.max_vals.x, result.max_vals.y],
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Path {
            scenario,
            output_file,
        } => {
            let scenario = load_scenario(scenario)?;
            let waypoints = generate_path(&scenario.segments, scenario.samples_per_segment);
            path_io::save_path(&output_file, &waypoints)?;
            println!(
                "Path data saved to {} ({} waypoints)",
                output_file.display(),
                waypoints.len()
            );
        }

        Commands::Simulate {
            scenario,
            path_file,
            save_path,
            output,
            full,
        } => {
            let scenario = load_scenario(scenario)?;
            let drive_sequence = match path_file {
                Some(file) => path_io::load_path(&file)?,
                None => {
                    let waypoints =
                        generate_path(&scenario.segments, scenario.samples_per_segment);
                    if let Some(file) = &save_path {
                        path_io::save_path(file, &waypoints)?;
                    }
                    waypoints
                }
            };

            let solver = PushbackSolver::new(drive_sequence, scenario.inputs());
            let result = solver.solve()?;
            display_results(&result, output, full)?;
        }

        Commands::Info => {
            println!("╔════════════════════════════════════════╗");
            println!("║        PUSHBACK ENGINE v0.1.0          ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Ground-towing kinematics simulator     ║");
            println!("║ for aircraft pushback operations.      ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Features:                              ║");
            println!("║ • Line/arc reference path sampling     ║");
            println!("║ • Rigid-body trajectory propagation    ║");
            println!("║ • CSV path persistence                 ║");
            println!("║ • Multiple output formats              ║");
            println!("╚════════════════════════════════════════╝");
        }
    }

    Ok(())
}

fn load_scenario(path: Option<PathBuf>) -> Result<Scenario, Box<dyn Error>> {
    match path {
        Some(path) => Ok(Scenario::from_json_file(path)?),
        None => Ok(Scenario::default()),
    }
}

fn display_results(
    result: &PushbackResult,
    format: OutputFormat,
    full: bool,
) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Json => {
            let output = SimulationOutput::from_result(result);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }

        OutputFormat::Csv => {
            println!("index,drive_x,drive_y,trace_x,trace_y,wing_x,wing_y,tail_x,tail_y");
            for i in 0..result.drive.len() {
                println!(
                    "{},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4}",
                    i,
                    result.drive[i].x,
                    result.drive[i].y,
                    result.trace[i].x,
                    result.trace[i].y,
                    result.wing_center[i].x,
                    result.wing_center[i].y,
                    result.tail_center[i].x,
                    result.tail_center[i].y
                );
            }
        }

        OutputFormat::Table => {
            println!("╔════════════════════════════════════════╗");
            println!("║         PUSHBACK SIMULATION            ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Samples:           {:>8}            ║", result.drive.len());
            println!("║ Link Length:       {:>8.2} m          ║", result.link_length);
            println!("║ Drag Points:       {:>8}            ║", result.drag.len());
            println!("║ Track Points:      {:>8}            ║", result.track.len());
            println!("╠════════════════════════════════════════╣");
            println!("║ BOUNDS (indices >= 1)                  ║");
            println!("║ Min X:             {:>8.2} m          ║", result.min_vals.x);
            println!("║ Min Y:             {:>8.2} m          ║", result.min_vals.y);
            println!("║ Max X:             {:>8.2} m          ║", result.max_vals.x);
            println!("║ Max Y:             {:>8.2} m          ║", result.max_vals.y);
            println!("╚════════════════════════════════════════╝");

            if full {
                println!("\nFull Trajectory:");
                println!("┌────────┬──────────┬──────────┬──────────┬──────────┐");
                println!("│ Index  │ Drive X  │ Drive Y  │ Trace X  │ Trace Y  │");
                println!("├────────┼──────────┼──────────┼──────────┼──────────┤");
                for i in 0..result.drive.len() {
                    println!(
                        "│ {:>6} │ {:>8.3} │ {:>8.3} │ {:>8.3} │ {:>8.3} │",
                        i,
                        result.drive[i].x,
                        result.drive[i].y,
                        result.trace[i].x,
                        result.trace[i].y
                    );
                }
                println!("└────────┴──────────┴──────────┴──────────┴──────────┘");
            }
        }
    }

    Ok(())
}
