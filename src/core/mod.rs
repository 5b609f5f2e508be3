pub mod command;
pub mod media;
pub mod runner;

pub use command::{DownloadCommand, YT_DLP};
pub use media::{Codec, MediaSelection, MediaType};
pub use runner::{ToolRunner, YtDlpRunner};
