use crate::config::Config;
use crate::core::{MediaSelection, MediaType};
use crate::utils::{expand_path, sanitize_filename};
use std::fmt;
use tracing::debug;

pub const YT_DLP: &str = "yt-dlp";

/// Argument vector for one yt-dlp invocation; the first element is the program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadCommand {
    argv: Vec<String>,
}

impl DownloadCommand {
    pub fn build(selection: &MediaSelection, url: &str, config: &Config) -> Self {
        let media = selection.media();
        let codec = selection.codec();

        let mut argv = vec![YT_DLP.to_string(), "--restrict-filenames".to_string()];

        if let Some(path) = config.download_path(media) {
            argv.push("-P".to_string());
            argv.push(expand_path(path));
        }

        if let Some(template) = config.output_template() {
            let template = sanitize_filename(template);
            if !template.is_empty() {
                argv.push("-o".to_string());
                argv.push(template);
            }
        }

        match media {
            MediaType::Video => {
                argv.push("-f".to_string());
                argv.push(format!("bestvideo[ext={}]+bestaudio/best", codec));
            }
            MediaType::Audio => {
                argv.push("-x".to_string());
                argv.push("--audio-format".to_string());
                argv.push(codec.to_string());
            }
        }
        argv.push(url.to_string());

        debug!("Built command: {:?}", argv);
        Self { argv }
    }

    #[cfg(test)]
    pub(crate) fn from_argv(argv: Vec<String>) -> Self {
        Self { argv }
    }

    pub fn program(&self) -> &str {
        &self.argv[0]
    }

    /// Arguments after the program name.
    pub fn args(&self) -> &[String] {
        &self.argv[1..]
    }

    pub fn argv(&self) -> &[String] {
        &self.argv
    }

    pub fn into_argv(self) -> Vec<String> {
        self.argv
    }
}

impl fmt::Display for DownloadCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.argv.join(" "))
    }
}
