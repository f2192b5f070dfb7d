//! Terminal front end: reads typed commands, drives the core and prints the view.
mod app;
mod cli;
mod effects;
mod logging;
mod seed;
mod ui;

pub use app::run_app;
