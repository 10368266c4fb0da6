//! Console dashboard entry point.
//!
//! # Responsibility
//! - Seed a manager with the demo dataset and print the dashboard.
//! - Accept no flags or environment input; run once and exit.

mod dashboard;

use log::warn;
use prd_core::{
    core_version, init_logging, load_demo_data, DashboardConfig, LoggingConfig, PrdManager,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("PRD Management System v{}", core_version());
    println!("Initializing system...");

    // File logging is best-effort; the dashboard still runs without it.
    if let Err(err) = init_logging(&LoggingConfig::default()) {
        eprintln!("logging disabled: {err}");
    }

    let mut manager = PrdManager::in_memory();
    if let Err(err) = load_demo_data(&mut manager) {
        warn!("event=fixture_failed module=cli status=error error={err}");
        eprintln!("failed to load demo data: {err}");
        return ExitCode::FAILURE;
    }

    let config = DashboardConfig::default();
    print!("{}", dashboard::render_dashboard(&manager, &config));
    print!("{}", dashboard::render_demo(&manager, &config));

    println!("\nPRD Management System demonstration completed!");
    ExitCode::SUCCESS
}
