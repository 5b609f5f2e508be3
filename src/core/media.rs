use crate::error::HelperError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Video,
    Audio,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Video => "video",
            MediaType::Audio => "audio",
        }
    }

    /// Codecs offered for this media type, in prompt order.
    pub fn codecs(&self) -> &'static [Codec] {
        match self {
            MediaType::Video => &[Codec::Mp4, Codec::Webm],
            MediaType::Audio => &[Codec::Mp3, Codec::M4a, Codec::Flac],
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaType {
    type Err = HelperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "video" => Ok(MediaType::Video),
            "audio" => Ok(MediaType::Audio),
            _ => Err(HelperError::InvalidMediaType(s.trim().to_string())),
        }
    }
}

/// Container extension (video) or extraction format (audio) handed to yt-dlp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    Mp4,
    Webm,
    Mp3,
    M4a,
    Flac,
}

impl Codec {
    pub fn as_str(&self) -> &'static str {
        match self {
            Codec::Mp4 => "mp4",
            Codec::Webm => "webm",
            Codec::Mp3 => "mp3",
            Codec::M4a => "m4a",
            Codec::Flac => "flac",
        }
    }

    pub fn media_type(&self) -> MediaType {
        match self {
            Codec::Mp4 | Codec::Webm => MediaType::Video,
            Codec::Mp3 | Codec::M4a | Codec::Flac => MediaType::Audio,
        }
    }

    /// Parses `input` as one of the codecs offered for `media`.
    pub fn for_media(media: MediaType, input: &str) -> Result<Self, HelperError> {
        let wanted = input.trim().to_lowercase();
        media
            .codecs()
            .iter()
            .copied()
            .find(|codec| codec.as_str() == wanted)
            .ok_or_else(|| HelperError::InvalidCodec {
                media,
                codec: input.trim().to_string(),
            })
    }
}

impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A media type together with a codec that belongs to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaSelection {
    media: MediaType,
    codec: Codec,
}

impl MediaSelection {
    pub fn new(media: MediaType, codec: Codec) -> Result<Self, HelperError> {
        if codec.media_type() != media {
            return Err(HelperError::InvalidCodec {
                media,
                codec: codec.to_string(),
            });
        }
        Ok(Self { media, codec })
    }

    pub fn media(&self) -> MediaType {
        self.media
    }

    pub fn codec(&self) -> Codec {
        self.codec
    }
}
