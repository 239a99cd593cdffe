//! # blowup-pages
//!
//! Browse the titles and tricks classification pages in the terminal, export them as static
//! HTML, and resolve the virtual-host rewrites that serve them.
//!
//! ## Features
//! - Interactive terminal browser with expandable topics and subtypes (default)
//! - Static HTML export with `render`
//! - Host rewrite lookup with `route`
//! - Database validation with `check`

mod cli;
mod core;
mod run;
mod tui;

use clap::Parser;
use dotenv::dotenv;

use cli::Args;

fn main() {
    // Load environment variables from .env file
    dotenv().ok();

    let args = Args::parse();
    run::init_logger(&args);

    // Print user-friendly messages; exit uses Display not Debug
    let config = core::config::load().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = run::dispatch(args, &config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
