//! CLI tool to browse and filter test results from a CFU monitor server.
//!
//! Usage:
//!   cargo run --bin cfu-results -- --facility acme --from 2024-01-01 --to 2024-03-31

use std::env;

use cfu_monitor_lib::review::ReviewSession;
use cfu_monitor_lib::store::HttpResultStore;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let args: Vec<String> = env::args().collect();

    // Parse arguments
    let mut server = env::var("CFU_SERVER_URL").unwrap_or_else(|_| "http://127.0.0.1:8080".to_string());
    let mut facility = String::new();
    let mut line = String::new();
    let mut from = String::new();
    let mut to = String::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--server" | "-s" => {
                i += 1;
                if i < args.len() {
                    server = args[i].clone();
                }
            }
            "--facility" | "-f" => {
                i += 1;
                if i < args.len() {
                    facility = args[i].clone();
                }
            }
            "--line" | "-l" => {
                i += 1;
                if i < args.len() {
                    line = args[i].clone();
                }
            }
            "--from" => {
                i += 1;
                if i < args.len() {
                    from = args[i].clone();
                }
            }
            "--to" => {
                i += 1;
                if i < args.len() {
                    to = args[i].clone();
                }
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let store = HttpResultStore::new(server);
    let mut session = ReviewSession::new();

    if let Err(e) = session.load(&store).await {
        eprintln!("Error loading test results: {}", e);
        std::process::exit(1);
    }

    let total = session.all_results().len();

    {
        let spec = session.spec_mut();
        spec.facility_name = facility;
        spec.production_line_name = line;
        spec.from = from;
        spec.to = to;
    }
    session.apply_filters();

    println!();
    println!(
        "{:<24} {:<20} {:>8}  {:<20} {}",
        "Facility", "Production Line", "CFU", "Location", "Tested At"
    );
    println!("{}", "-".repeat(96));

    for record in session.view() {
        println!(
            "{:<24} {:<20} {:>8}  {:<20} {}",
            record.facility_name().unwrap_or("-"),
            record.production_line_name().unwrap_or("-"),
            record.cfu_count,
            record.location,
            record.tested_at.to_rfc3339()
        );
    }

    println!();
    println!("{} of {} results shown", session.view().len(), total);
}

fn print_usage() {
    eprintln!();
    eprintln!("Usage: cfu-results [--server <url>] [--facility <text>] [--line <text>] [--from <date>] [--to <date>]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --server, -s    Server base URL (default: http://127.0.0.1:8080 or CFU_SERVER_URL)");
    eprintln!("  --facility, -f  Keep results whose facility name contains this text");
    eprintln!("  --line, -l      Keep results whose production line name contains this text");
    eprintln!("  --from          Keep results tested on or after this date (YYYY-MM-DD)");
    eprintln!("  --to            Keep results tested on or before this date (YYYY-MM-DD)");
    eprintln!("  --help, -h      Show this help");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  cfu-results --facility acme --from 2024-01-01 --to 2024-03-31");
    eprintln!("  cfu-results --line \"Line 2\"");
    eprintln!();
}
