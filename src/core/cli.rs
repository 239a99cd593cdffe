//! CLI-only commands: render, route, check, config.
//!
//! These run without opening the terminal browser and produce plain text output.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::core::app;
use crate::core::config::Config;
use crate::core::database::{Database, DatabaseError};
use crate::core::expansion::ExpansionState;
use crate::core::html;
use crate::core::page::{Page, PageError};
use crate::core::paths;
use crate::core::routing::Router;
use crate::core::view::PageView;

/// Error from a CLI-only command.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Page(#[from] PageError),
    #[error(transparent)]
    Database(#[from] DatabaseError),
    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),
    #[error("No rewrite for host '{0}'")]
    NoRoute(String),
}

/// Options for the `render` command.
pub struct RenderOptions<'a> {
    pub page: Page,
    pub data: Option<&'a Path>,
    pub output: Option<&'a Path>,
    pub expand_all: bool,
}

/// Run the `render` command: export a page as HTML to a file or stdout.
pub fn run_render(options: RenderOptions<'_>, config: &Config) -> Result<(), CommandError> {
    let database = options.page.load_database(options.data, config)?;
    let view = PageView::new(&database);
    let mut expansion = ExpansionState::for_topic_count(view.topics.len());
    if options.expand_all {
        expansion.expand_all(view.subtype_counts());
    }
    let document = html::render_page(options.page, &view, &expansion);

    match options.output {
        Some(path) => {
            fs::write(path, &document)?;
            log::info!("Wrote {} ({} bytes)", path.display(), document.len());
            println!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(document.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Run the `route` command: print the rewritten path, or fail when the host has no rule.
pub fn run_route(host: &str, path: &str, config: &Config) -> Result<(), CommandError> {
    let router = Router::from_config(config);
    match router.rewrite(host, path) {
        Some(target) => {
            println!("{}", target);
            Ok(())
        }
        None => Err(CommandError::NoRoute(host.to_string())),
    }
}

/// Run the `check` command: validate a database file and print its counts.
pub fn run_check(file: &Path) -> Result<(), CommandError> {
    let database = Database::load(file)?;
    log::debug!("Keys: {:?}", database.keys().collect::<Vec<_>>());
    let stats = database.stats();
    println!(
        "{}: {} topics, {} subtypes, {} examples",
        file.display(),
        stats.topics,
        stats.subtypes,
        stats.examples
    );
    Ok(())
}

/// Run the `config` command: display data paths, log file, and virtual hosts.
pub fn run_config(config: &Config) {
    let data_dir = config
        .data_dir
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "-".to_string());
    let log_file = paths::log_file()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "-".to_string());

    println!("{} {}", app::NAME, app::VERSION);
    println!("Data:     {}", data_dir);
    for page in Page::ALL {
        let source = match &config.data_dir {
            Some(dir) if dir.join(page.data_file_name()).is_file() => "from data dir",
            _ => "embedded",
        };
        println!("  {:<7} {}", page.slug(), source);
    }
    println!("Log:      {}", log_file);
    println!("Hosts:");
    for rule in Router::from_config(config).rules() {
        println!("  {} -> {}", rule.host, rule.page.route());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_writes_file() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let out = dir.path().join("titles.html");
        run_render(
            RenderOptions {
                page: Page::Titles,
                data: None,
                output: Some(&out),
                expand_all: true,
            },
            &Config::default(),
        )
        .expect("render");
        let html = fs::read_to_string(&out).expect("read");
        assert!(html.contains("<title>YouTube Titles</title>"));
        assert!(!html.contains("<details>\n"), "expand_all opens every element");
    }

    #[test]
    fn route_unknown_host_fails() {
        let err = run_route("example.org", "/", &Config::default()).unwrap_err();
        assert!(matches!(err, CommandError::NoRoute(ref h) if h == "example.org"));
    }

    #[test]
    fn check_reports_database_errors() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let path = dir.path().join("db.json");
        fs::write(&path, r#"{"x": {"type": "a"}}"#).expect("write");
        let err = run_check(&path).unwrap_err();
        assert!(matches!(
            err,
            CommandError::Database(DatabaseError::InvalidKey(_))
        ));
    }
}
