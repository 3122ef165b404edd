//! Static site generator for the clean. programming language landing page.

mod assets;
pub mod components;
mod config;
pub mod pages;
mod site;
pub mod styles;

pub use config::{Config, DOWNLOAD_ASSET, DownloadAction};
pub use site::build;
