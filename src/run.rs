//! Application run modes: logger init, subcommand dispatch, browser launch.

use std::io;
use std::path::Path;

use clap::CommandFactory;

use crate::cli::{Args, Commands, generate};
use crate::core;
use crate::core::cli::RenderOptions;
use crate::core::config::Config;
use crate::core::page::Page;

/// Initialize env_logger. In browse mode, writes to file to avoid corrupting the display.
pub fn init_logger(args: &Args) {
    let log_level = args.log_level();
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level));

    if args.is_browse()
        && let Some(path) = core::paths::log_file()
        && let Some(dir) = path.parent()
        && std::fs::create_dir_all(dir).is_ok()
        && let Ok(file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
    {
        logger.target(env_logger::Target::Pipe(Box::new(file)));
    }
    let _ = logger.try_init();
}

/// Run the selected command.
pub fn dispatch(args: Args, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        None => launch_browser(Page::Titles, None, config)?,
        Some(Commands::Browse { page, data }) => {
            launch_browser(page.unwrap_or(Page::Titles), data.as_deref(), config)?
        }
        Some(Commands::Render {
            page,
            data,
            output,
            expand_all,
        }) => core::cli::run_render(
            RenderOptions {
                page,
                data: data.as_deref(),
                output: output.as_deref(),
                expand_all,
            },
            config,
        )?,
        Some(Commands::Route { host, path }) => core::cli::run_route(&host, &path, config)?,
        Some(Commands::Check { file }) => core::cli::run_check(&file)?,
        Some(Commands::Config) => core::cli::run_config(config),
        Some(Commands::Completions { shell }) => {
            generate(shell, &mut Args::command(), core::app::NAME, &mut io::stdout());
        }
    }
    Ok(())
}

/// Load the starting page and run the terminal browser until the user quits.
fn launch_browser(
    page: Page,
    data: Option<&Path>,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    // Fail before touching the terminal if the data is broken.
    let database = page.load_database(data, config)?;
    if database.is_empty() {
        log::warn!("{} has no topics", page);
    }
    log::info!("Browsing {} ({} topics)", page, database.len());
    crate::tui::run(page, database, data.map(Path::to_path_buf), config.clone())?;
    Ok(())
}
