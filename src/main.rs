//! River Kayak Conditions Service
//!
//! One-shot mode (default) fetches current telemetry for the configured
//! USGS site, classifies it, and writes the rendered report to stdout.
//! Endpoint mode serves the same report as a web page, fetching fresh
//! data on every request.
//!
//! Usage:
//!   cargo run --release                    # One-shot report to stdout
//!   cargo run --release -- --endpoint 8080 # Serve the page on port 8080
//!   cargo run --release -- --site 05568500 # Override the configured site

use kayakcast_service::sink::{DisplaySink, StdoutSink};
use kayakcast_service::{config, endpoint, fetch, report};
use std::env;

fn main() {
    println!("🛶 River Kayak Conditions");
    println!("=========================\n");

    // Parse command-line arguments
    let args: Vec<String> = env::args().collect();
    let mut endpoint_port: Option<u16> = None;
    let mut site_override: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--endpoint" => {
                if i + 1 < args.len() {
                    endpoint_port = args[i + 1].parse().ok();
                    i += 2;
                } else {
                    eprintln!("Error: --endpoint requires a port number");
                    std::process::exit(1);
                }
            }
            "--site" => {
                if i + 1 < args.len() {
                    site_override = Some(args[i + 1].clone());
                    i += 2;
                } else {
                    eprintln!("Error: --site requires a USGS site code");
                    std::process::exit(1);
                }
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                eprintln!("Usage: {} [--endpoint PORT] [--site CODE]", args[0]);
                std::process::exit(1);
            }
        }
    }

    // Load site configuration (site.toml, or the built-in default)
    let mut site_config = config::load_config();
    if let Some(site) = site_override {
        site_config.site_code = site;
    }
    println!("📍 Site: {}", site_config.site_code);
    if let Some(desc) = &site_config.description {
        println!("   {}", desc);
    }
    println!();

    // Endpoint mode: serve the page until killed
    if let Some(port) = endpoint_port {
        println!("🚀 Starting conditions page server...");
        println!("   http://0.0.0.0:{}/\n", port);
        if let Err(e) = endpoint::start_endpoint_server(port, site_config) {
            eprintln!("\n❌ Endpoint server error: {}", e);
            std::process::exit(1);
        }
        return;
    }

    // One-shot mode: fetch once, render, write to the display sink.
    // The sink always receives a string — fetch failure renders the
    // generic error report rather than aborting.
    println!("📥 Fetching current conditions...\n");
    let client = reqwest::blocking::Client::new();
    let mut sink = StdoutSink;

    match fetch::fetch_conditions(&client, &site_config.site_code) {
        Ok(doc) => {
            warn_if_stale(&doc);
            sink.render(&report::render_report(&doc));
        }
        Err(e) => {
            eprintln!("   ✗ Fetch failed: {}\n", e);
            sink.render(&report::render_error_report());
        }
    }
}

/// DV data is daily; a newest observation more than a week old usually
/// means the gage stopped reporting.
fn warn_if_stale(doc: &kayakcast_service::ingest::usgs::DvDocument) {
    if let Some(observed) = report::latest_observation(doc) {
        let age = chrono::Utc::now().naive_utc() - observed;
        if age.num_days() > 7 {
            eprintln!(
                "   ⚠ Newest observation is {} days old — gage may be offline\n",
                age.num_days()
            );
        }
    }
}
