use crate::core::{Codec, MediaType};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub paths: PathsConfig,
    pub defaults: DefaultsConfig,
}

/// Download directories per media type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub video: Option<String>,
    pub audio: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub media_type: Option<String>,
    pub video_codec: Option<String>,
    pub audio_codec: Option<String>,
    pub output_template: Option<String>,
}

impl Config {
    /// Loads `path`, falling back to an empty configuration when the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    pub fn download_path(&self, media: MediaType) -> Option<&str> {
        let path = match media {
            MediaType::Video => self.paths.video.as_deref(),
            MediaType::Audio => self.paths.audio.as_deref(),
        };
        non_empty(path)
    }

    /// The configured media type, if it names one.
    pub fn default_media_type(&self) -> Option<MediaType> {
        non_empty(self.defaults.media_type.as_deref())?.parse().ok()
    }

    /// The configured codec for `media`, if it is one of that type's codecs.
    pub fn default_codec(&self, media: MediaType) -> Option<Codec> {
        let codec = match media {
            MediaType::Video => self.defaults.video_codec.as_deref(),
            MediaType::Audio => self.defaults.audio_codec.as_deref(),
        };
        Codec::for_media(media, non_empty(codec)?).ok()
    }

    pub fn output_template(&self) -> Option<&str> {
        non_empty(self.defaults.output_template.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Config {
        toml::from_str(input).unwrap()
    }

    #[test]
    fn partial_sections_leave_other_fields_empty() {
        let config = parse("[paths]\nvideo = \"videos\"\n");
        assert_eq!(config.download_path(MediaType::Video), Some("videos"));
        assert_eq!(config.download_path(MediaType::Audio), None);
        assert_eq!(config.defaults, DefaultsConfig::default());
    }

    #[test]
    fn invalid_defaults_are_ignored() {
        let config = parse(
            "[defaults]\nmedia_type = \"gif\"\nvideo_codec = \"mp3\"\naudio_codec = \"FLAC\"\n",
        );
        assert_eq!(config.default_media_type(), None);
        assert_eq!(config.default_codec(MediaType::Video), None);
        assert_eq!(config.default_codec(MediaType::Audio), Some(Codec::Flac));
    }

    #[test]
    fn empty_strings_count_as_absent() {
        let config = parse("[paths]\naudio = \"\"\n[defaults]\noutput_template = \"  \"\n");
        assert_eq!(config.download_path(MediaType::Audio), None);
        assert_eq!(config.output_template(), None);
    }

    #[test]
    fn unknown_keys_are_accepted() {
        let config = parse("[defaults]\nmedia_type = \"Audio\"\n[extra]\nfoo = 1\n");
        assert_eq!(config.default_media_type(), Some(MediaType::Audio));
    }
}
