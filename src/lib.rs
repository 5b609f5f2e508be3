pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

pub use config::Config;
pub use core::{Codec, DownloadCommand, MediaSelection, MediaType, ToolRunner, YtDlpRunner};
pub use error::HelperError;
