//! Stellar Vanity Address Generator CLI
//!
//! Usage:
//!   stellar_vanity -p CAFE        # Find a public key starting with "GCAFE"
//!   stellar_vanity -s TACO        # Find a public key ending with "TACO"
//!   stellar_vanity -m DOG -j 4    # Find a public key containing "DOG", 4 workers

use std::process;
use std::time::Duration;

use clap::Parser;

use stellar_vanity::{Config, VanityMatch, WorkerPool};

fn main() {
    let config = Config::parse();

    let pattern = match config.compile_pattern() {
        Ok(pattern) => pattern,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = stellar_vanity::crypto::init() {
        eprintln!("Fatal: {}", e);
        process::exit(1);
    }

    if pattern.was_adjusted() {
        println!("Prepending 'G' to the search term.");
    }

    // Print startup info
    println!("Stellar Vanity Address Generator");
    println!("=================================");
    println!("Pattern:    {} ({})", pattern.term(), pattern.pattern_type());
    println!("Difficulty: {}", pattern.difficulty_description());
    println!("Workers:    {}", config.worker_count());
    println!();

    let pool = WorkerPool::new(config.worker_count(), pattern);

    // Set up ctrl-c handler
    let state = pool.state_handle();
    ctrlc::set_handler(move || state.request_stop()).expect("Error setting Ctrl-C handler");

    println!("Searching... (Press Ctrl+C to stop)\n");

    let report_interval = Duration::from_secs(config.report_interval);

    let result = loop {
        match pool.wait_for_result(report_interval) {
            Some(found) => break Some(found),
            None if pool.is_stopped() => {
                // Workers are exiting; pick up a result that raced the flag.
                break pool.wait_for_result(Duration::from_millis(100));
            }
            None => print_progress(&pool),
        }
    };

    // Drain every worker before reading the final attempt count.
    let elapsed = pool.elapsed();
    let attempts = pool.join();

    match result {
        Some(found) => print_result(&found),
        None => println!("\nStopped by user."),
    }

    let rate = if elapsed.as_secs_f64() > 0.0 {
        attempts as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    };

    println!("\n--- Final Statistics ---");
    println!("Total attempts: {}", format_number(attempts));
    println!("Time elapsed:   {:.2}s", elapsed.as_secs_f64());
    println!("Average speed:  {}/s", format_number(rate as u64));
}

fn print_result(result: &VanityMatch) {
    println!("\nFOUND!\n");
    println!("Public key:  {}", result.public_key);
    println!("Secret seed: {}", result.seed);
    println!("Worker:      {}", result.worker_id);
}

fn print_progress(pool: &WorkerPool) {
    println!(
        "[{:>4}s] {} attempts ({}/s)",
        pool.elapsed().as_secs(),
        format_number(pool.attempts()),
        format_number(pool.attempts_per_second() as u64)
    );
}

fn format_number(n: u64) -> String {
    if n >= 1_000_000_000 {
        format!("{:.2}B", n as f64 / 1_000_000_000.0)
    } else if n >= 1_000_000 {
        format!("{:.2}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.2}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}
