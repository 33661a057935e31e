//! Informational entry point for the pushback engine

fn main() {
    println!("Pushback Engine v0.1.0");
    println!();
    println!("Simulates the ground-towing kinematics of an aircraft being");
    println!("pushed or pulled by a tug along a planned reference path.");
    println!();
    println!("To use as a Rust library:");
    println!("  Add to Cargo.toml: pushback-engine = \"0.1\"");
    println!();
    println!("For the command-line tool, run:");
    println!("  pushback-cli --help");
}
