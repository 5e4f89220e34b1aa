//! Command-line front end for the Gridlock deadlock simulator.
//!
//! With no arguments, analyzes the two built-in example states (one per
//! mode) and prints their reports. Given a scenario file, analyzes that
//! instead. `--save <path>` exports the single-request example as a scenario
//! file so its JSON layout can be inspected or edited.

use std::env;
use std::path::Path;
use std::process::ExitCode;

use gridlock_core::{DetectionReport, ResourceSnapshot};

fn print_report(report: &DetectionReport) {
    println!("Is Deadlock: {}", report.is_deadlock);
    println!("Deadlocked Processes: {:?}", report.deadlocked);
    for step in &report.steps {
        println!("Process P{}: {}", step.process, step.description);
    }
}

/// The single-request example: three processes trapped on a request for
/// five units of resource 2 that can never be freed.
fn single_request_example() -> ResourceSnapshot {
    ResourceSnapshot::single_request(
        vec![vec![0, 1, 0], vec![2, 0, 0], vec![3, 0, 2]],
        vec![vec![0, 0, 5], vec![2, 0, 0], vec![0, 0, 2]],
        Some(vec![0, 3, 0]),
    )
    .expect("example dimensions are valid")
}

/// The multi-need example: the textbook five-process Banker state with a
/// safe sequence.
fn multi_need_example() -> ResourceSnapshot {
    ResourceSnapshot::multi_need(
        vec![
            vec![0, 1, 0],
            vec![2, 0, 0],
            vec![3, 0, 2],
            vec![2, 1, 1],
            vec![0, 0, 2],
        ],
        vec![
            vec![7, 5, 3],
            vec![3, 2, 2],
            vec![9, 0, 2],
            vec![2, 2, 2],
            vec![4, 3, 3],
        ],
        Some(vec![3, 3, 2]),
    )
    .expect("example dimensions are valid")
}

fn run_examples() {
    println!("Single Mode Example:");
    print_report(&single_request_example().detect_deadlock());

    println!("\nMulti Mode Example:");
    print_report(&multi_need_example().detect_deadlock());
}

fn run_scenario(path: &Path) -> Result<(), gridlock_scenario::ScenarioError> {
    let snapshot = gridlock_scenario::load_scenario(path)?;
    log::info!(
        "loaded {} scenario with {} processes and {} resource types",
        snapshot.mode().tag(),
        snapshot.num_processes(),
        snapshot.num_resources()
    );
    print_report(&snapshot.detect_deadlock());
    Ok(())
}

fn usage() {
    eprintln!("usage: gridlock [SCENARIO.json | --save PATH]");
    eprintln!();
    eprintln!("  (no arguments)   analyze the built-in example states");
    eprintln!("  SCENARIO.json    analyze a saved scenario file");
    eprintln!("  --save PATH      export the single-request example to PATH");
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    match args.as_slice() {
        [] => {
            run_examples();
            ExitCode::SUCCESS
        }
        [flag, path] if flag == "--save" => {
            let path = Path::new(path);
            match gridlock_scenario::save_scenario(path, &single_request_example()) {
                Ok(()) => {
                    println!("Scenario saved successfully to {}", path.display());
                    ExitCode::SUCCESS
                }
                Err(err) => {
                    eprintln!("gridlock: {err}");
                    ExitCode::FAILURE
                }
            }
        }
        [path] if !path.starts_with('-') => match run_scenario(Path::new(path)) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("gridlock: {err}");
                ExitCode::FAILURE
            }
        },
        _ => {
            usage();
            ExitCode::FAILURE
        }
    }
}
