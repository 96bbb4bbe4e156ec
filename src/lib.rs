pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod form;
pub mod logging;
pub mod navigation;
pub mod ui;
pub mod validation;
pub mod view;
pub mod workflow;

#[cfg(test)]
mod testing;

pub use error::{CustomizationError, Result};
