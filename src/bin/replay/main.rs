// Navigation Replay Runner
// Drives the gate through scripted journeys and checks where each one ends
//
// Usage:
//   cargo run --bin replay                           # Run built-in journeys
//   cargo run --bin replay -- INVEST                 # Filter by name
//   cargo run --bin replay -- --file journeys.json   # Replay scenarios from a file
//   cargo run --bin replay -- --json                 # Emit steps as JSON lines
//   RUST_LOG=debug cargo run --bin replay            # Show gate decisions

mod report;
mod scenarios;

use invest_gate::*;
use report::*;
use scenarios::*;
use std::path::PathBuf;

// ─── CLI Parsing ────────────────────────────────────────────────────────────

struct CliArgs {
    file: Option<PathBuf>,
    json: bool,
    filter: Option<String>,
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut cli = CliArgs { file: None, json: false, filter: None };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--file" => {
                i += 1;
                if i < args.len() {
                    cli.file = Some(PathBuf::from(&args[i]));
                }
            }
            "--json" => {
                cli.json = true;
            }
            arg if !arg.starts_with('-') => {
                cli.filter = Some(arg.to_string());
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
            }
        }
        i += 1;
    }

    cli
}

// ─── Replay ─────────────────────────────────────────────────────────────────

fn replay(scenario: &Scenario) -> ScenarioReport {
    let mut gate = NavigationGate::with_config(scenario.config.clone());
    let stored = StoredSession::new(scenario.stored_session.clone());

    let mut steps = Vec::with_capacity(scenario.events.len() + 1);
    steps.push(StepRecord { scenario: scenario.name.clone(), step: 0, transition: gate.start(&stored) });
    for (i, event) in scenario.events.iter().enumerate() {
        let transition = gate.dispatch(event.clone());
        steps.push(StepRecord { scenario: scenario.name.clone(), step: i + 1, transition });
    }

    ScenarioReport {
        scenario: scenario.name.clone(),
        label: scenario.label.clone(),
        steps,
        failures: scenario.expect.check(&gate),
    }
}

// ─── Main ───────────────────────────────────────────────────────────────────

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = parse_args();

    let all_scenarios = match &cli.file {
        Some(path) => match load_file(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Failed to load scenarios: {}", e);
                std::process::exit(2);
            }
        },
        None => builtin(),
    };

    let to_run: Vec<&Scenario> = match &cli.filter {
        Some(f) => {
            let f_lower = f.to_lowercase();
            all_scenarios.iter()
                .filter(|s| s.name.to_lowercase().contains(&f_lower)
                          || s.label.to_lowercase().contains(&f_lower))
                .collect()
        }
        None => all_scenarios.iter().collect(),
    };

    if to_run.is_empty() {
        eprintln!("No scenarios match filter: {:?}", cli.filter);
        std::process::exit(1);
    }

    if !cli.json {
        println!("\n  Navigation Replay: {} scenario(s)\n", to_run.len());
    }

    let mut failed = 0;
    for scenario in &to_run {
        let report = replay(scenario);
        if cli.json {
            for step in &report.steps {
                match serde_json::to_string(step) {
                    Ok(line) => println!("{}", line),
                    Err(e) => eprintln!("Failed to serialize step: {}", e),
                }
            }
        } else {
            report.print_table();
        }
        if !report.passed() {
            failed += 1;
        }
    }

    if !cli.json {
        println!("  Total: {}  Passed: {}  Failed: {}\n", to_run.len(), to_run.len() - failed, failed);
    }
    if failed > 0 {
        std::process::exit(1);
    }
}
