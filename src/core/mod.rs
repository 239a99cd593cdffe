pub mod app;
pub mod cli;
pub mod config;
pub mod database;
pub mod expansion;
pub mod format;
pub mod html;
pub mod page;
pub mod paths;
pub mod routing;
pub mod view;
