use crate::config::ConfigError;
use crate::core::MediaType;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, HelperError>;

#[derive(Debug, Error)]
pub enum HelperError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid media type '{0}'. Please choose 'video' or 'audio'.")]
    InvalidMediaType(String),

    #[error("Invalid codec '{codec}' selected for {media}.")]
    InvalidCodec { media: MediaType, codec: String },

    #[error("No URL provided.")]
    EmptyUrl,

    #[error("No valid URL entered after {attempts} attempts.")]
    InvalidUrl { attempts: usize },

    #[error("{program} is not installed or not found in PATH.")]
    ToolNotFound { program: String },

    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Download failed: {program} exited with {}", describe_code(.code))]
    ToolFailed { program: String, code: Option<i32> },

    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl HelperError {
    /// Process exit status for this error. A failing tool passes its own code through.
    pub fn exit_code(&self) -> u8 {
        match self {
            HelperError::ToolFailed { code: Some(code), .. } => {
                u8::try_from(*code).ok().filter(|c| *c != 0).unwrap_or(1)
            }
            _ => 1,
        }
    }
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit status {}", code),
        None => "a signal".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_failure_keeps_its_exit_code() {
        let err = HelperError::ToolFailed {
            program: "yt-dlp".to_string(),
            code: Some(2),
        };
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), "Download failed: yt-dlp exited with exit status 2");
    }

    #[test]
    fn out_of_range_tool_code_maps_to_one() {
        for code in [256, -1, -1073741510] {
            let err = HelperError::ToolFailed {
                program: "yt-dlp".to_string(),
                code: Some(code),
            };
            assert_eq!(err.exit_code(), 1);
        }
    }

    #[test]
    fn signal_termination_maps_to_one() {
        let err = HelperError::ToolFailed {
            program: "yt-dlp".to_string(),
            code: None,
        };
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn user_errors_map_to_one() {
        assert_eq!(HelperError::EmptyUrl.exit_code(), 1);
        assert_eq!(HelperError::InvalidMediaType("gif".into()).exit_code(), 1);
        assert_eq!(
            HelperError::ToolNotFound { program: "yt-dlp".into() }.exit_code(),
            1
        );
    }
}
