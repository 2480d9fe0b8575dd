//! Interactive terminal front end for the platform simulator.
//!
//! Owns the current [`SimulationState`] and maps REPL commands onto the four
//! engine operations. All rule logic lives in the core crate; this binary
//! clamps raw lever input to the documented ranges and renders the engine's
//! output.

use std::env;
use std::fs;
use std::io::{self, Write};
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use platform_simulator_core_rs::{
    DaySnapshot, EconomyRates, Event, Lever, SimulationState, TransitionEngine,
};

const COMMANDS: &str = "Commands: stats | set <lever> <value> | day [n] | campaign | events | log | history | chart <metric> | export <path> | reset | help | quit";

const LOW_REPUTATION_WARNING: &str = "Warning: Reputation critically low! Consider increasing moderation or launching a Public Campaign.";

const CHART_WIDTH: usize = 40;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "platform_simulator_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let seed = parse_seed(env::args().collect());
    tracing::info!(seed, "session started");

    let mut engine = TransitionEngine::new(seed);
    let mut state = engine.reset();

    println!("Platform Simulator (seed {})", seed);
    println!("{}", COMMANDS);
    print_stats(&state, engine.rates());

    loop {
        print!("> ");
        io::stdout().flush().unwrap();

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            break;
        }
        if input.is_empty() {
            // EOF
            break;
        }
        let trimmed = input.trim();
        if trimmed.is_empty() {
            continue;
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or("").to_lowercase();

        match cmd.as_str() {
            "quit" | "exit" => break,
            "help" => {
                println!("{}", COMMANDS);
            }
            "stats" => {
                print_stats(&state, engine.rates());
            }
            "set" => {
                let (Some(lever_raw), Some(value_raw)) = (parts.next(), parts.next()) else {
                    println!("Usage: set <personalization|moderation|ad-targeting> <value>");
                    continue;
                };
                let lever = match Lever::from_str(lever_raw) {
                    Ok(lever) => lever,
                    Err(err) => {
                        println!("{}", err);
                        continue;
                    }
                };
                let value = match value_raw.parse::<f64>() {
                    Ok(value) if value.is_finite() => value,
                    _ => {
                        println!("Invalid value: {}", value_raw);
                        continue;
                    }
                };
                let range = lever.range();
                let clamped = value.clamp(*range.start(), *range.end());
                if clamped != value {
                    println!(
                        "{} only goes from {:.1} to {:.1}; using {:.2}.",
                        lever.label(),
                        range.start(),
                        range.end(),
                        clamped
                    );
                }
                let (next, events) = engine.adjust_lever(&state, lever, clamped);
                state = next;
                println!("{} -> {:.2}", lever.label(), clamped);
                print_events(&events);
            }
            "day" => {
                let count = parts
                    .next()
                    .and_then(|raw| raw.parse::<u32>().ok())
                    .unwrap_or(1);
                for _ in 0..count {
                    let levers = *state.levers();
                    let (next, events) = engine.advance_day(&state, &levers);
                    state = next;
                    print_events(&events);
                }
            }
            "campaign" => {
                let (next, events) = engine.run_campaign(&state);
                state = next;
                print_events(&events);
            }
            "events" => {
                let critical = state.log().critical_events();
                if critical.is_empty() {
                    println!("No critical events yet.");
                } else {
                    for event in critical {
                        println!("{}", event);
                    }
                }
            }
            "log" => {
                if state.log().is_empty() {
                    println!("Log is empty.");
                } else {
                    for event in state.log().events() {
                        println!("{}", event);
                    }
                }
            }
            "history" => {
                print_history(&state);
            }
            "chart" => {
                let Some(metric) = parts.next() else {
                    println!("Usage: chart <users|engagement|reputation|revenue>");
                    continue;
                };
                print_chart(&state, metric);
            }
            "export" => {
                let Some(path) = parts.next() else {
                    println!("Usage: export <path>");
                    continue;
                };
                export_run(&state, path);
            }
            "reset" => {
                state = engine.reset();
                println!("Simulation reset to day 1.");
            }
            _ => {
                println!("Unknown command. Type 'help'.");
            }
        }
    }
}

/// Pull a `--seed N` argument, falling back to the wall clock so unscripted
/// sessions differ. Replay a session by passing its printed seed back in.
fn parse_seed(args: Vec<String>) -> u64 {
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--seed" {
            let Some(value) = iter.next() else {
                eprintln!("Usage: --seed <u64>");
                std::process::exit(1);
            };
            match value.parse::<u64>() {
                Ok(seed) => return seed,
                Err(_) => {
                    eprintln!("Invalid seed: {}", value);
                    std::process::exit(1);
                }
            }
        }
    }
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(1)
}

fn print_stats(state: &SimulationState, rates: &EconomyRates) {
    println!(
        "Day {} | Users={} | Engagement={:.2} | Reputation={:.2} | Revenue=${:.2}",
        state.day(),
        state.users(),
        state.engagement(),
        state.reputation(),
        state.revenue()
    );
    for lever in Lever::ALL {
        println!(
            "  {} ({}): {:.2}",
            lever.label(),
            lever,
            state.levers().get(lever)
        );
    }
    println!("  Campaigns launched: {}", state.campaign_count());
    if state.reputation() < rates.reputation_warning_threshold {
        println!("{}", LOW_REPUTATION_WARNING);
    }
}

fn print_events(events: &[Event]) {
    for event in events {
        println!("{}", event);
    }
}

fn print_history(state: &SimulationState) {
    println!("  day | users | engagement | reputation |      revenue");
    for snap in state.history() {
        println!(
            "  {:>3} | {:>5} | {:>10.2} | {:>10.2} | {:>12.2}",
            snap.day, snap.users, snap.engagement, snap.reputation, snap.revenue
        );
    }
}

fn print_chart(state: &SimulationState, metric: &str) {
    let extract: fn(&DaySnapshot) -> f64 = match metric {
        "users" => |snap| snap.users as f64,
        "engagement" => |snap| snap.engagement,
        "reputation" => |snap| snap.reputation,
        "revenue" => |snap| snap.revenue,
        _ => {
            println!("Unknown metric: {} (users, engagement, reputation, revenue)", metric);
            return;
        }
    };
    // Bars are scaled to the series maximum, which the user band and the
    // non-negative metric floors keep meaningful.
    let max = state.history().iter().map(extract).fold(0.0_f64, f64::max);
    println!("{} per day:", metric);
    for snap in state.history() {
        let value = extract(snap);
        let bar = if max > 0.0 {
            ((value / max) * CHART_WIDTH as f64).round() as usize
        } else {
            0
        };
        println!(
            "  {:>3} | {:<width$} {:.2}",
            snap.day,
            "#".repeat(bar),
            value,
            width = CHART_WIDTH
        );
    }
}

#[derive(Serialize)]
struct RunExport<'a> {
    history: &'a [DaySnapshot],
    log: Vec<String>,
}

fn export_run(state: &SimulationState, path: &str) {
    let export = RunExport {
        history: state.history(),
        log: state
            .log()
            .events()
            .iter()
            .map(|event| event.to_string())
            .collect(),
    };
    let json = match serde_json::to_string_pretty(&export) {
        Ok(json) => json,
        Err(err) => {
            println!("Failed to serialize run: {}", err);
            return;
        }
    };
    match fs::write(path, json) {
        Ok(()) => {
            tracing::info!(path, "run exported");
            println!(
                "Exported {} snapshots and {} log lines to {}",
                export.history.len(),
                export.log.len(),
                path
            );
        }
        Err(err) => println!("Failed to write {}: {}", path, err),
    }
}
