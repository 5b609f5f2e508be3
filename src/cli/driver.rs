use crate::config::Config;
use crate::core::{Codec, DownloadCommand, MediaSelection, MediaType, ToolRunner};
use crate::error::{HelperError, Result};
use crate::utils::is_valid_url;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// Upper bound on URL prompts before giving up.
pub const MAX_URL_ATTEMPTS: usize = 5;

/// Walks the user through media type, codec and URL selection, then runs the download.
pub struct Driver<R, W, T> {
    config: Config,
    input: R,
    output: W,
    runner: T,
    dry_run: bool,
}

impl<R: BufRead, W: Write, T: ToolRunner> Driver<R, W, T> {
    pub fn new(config: Config, input: R, output: W, runner: T) -> Self {
        Self {
            config,
            input,
            output,
            runner,
            dry_run: false,
        }
    }

    /// When set, the command is printed but never executed.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn runner(&self) -> &T {
        &self.runner
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Runs one interactive session and returns the command that was built.
    pub async fn run(&mut self) -> Result<DownloadCommand> {
        writeln!(self.output, "========== YT-DLP Helper ==========")?;
        writeln!(
            self.output,
            "Download audio or video from supported sites using yt-dlp.\n"
        )?;

        let media = self.resolve_media_type()?;
        let codec = self.resolve_codec(media)?;
        let selection = MediaSelection::new(media, codec)?;
        let url = self.read_url()?;

        let command = DownloadCommand::build(&selection, &url, &self.config);
        writeln!(self.output, "Running: {}", command)?;
        self.output.flush()?;

        if self.dry_run {
            info!("Dry run, not executing {}", command.program());
            return Ok(command);
        }

        self.runner.run(&command).await?;
        writeln!(self.output, "Download completed!")?;
        Ok(command)
    }

    fn resolve_media_type(&mut self) -> Result<MediaType> {
        if let Some(media) = self.config.default_media_type() {
            debug!("Using configured media type {}", media);
            return Ok(media);
        }
        self.prompt("Select media type (video/audio): ")?.parse()
    }

    fn resolve_codec(&mut self, media: MediaType) -> Result<Codec> {
        writeln!(self.output, "Available {} codecs:", media)?;
        for codec in media.codecs() {
            writeln!(self.output, "- {}", codec)?;
        }

        if let Some(codec) = self.config.default_codec(media) {
            debug!("Using configured {} codec {}", media, codec);
            return Ok(codec);
        }
        let answer = self.prompt("Choose codec: ")?;
        Codec::for_media(media, &answer)
    }

    fn read_url(&mut self) -> Result<String> {
        for attempt in 1..=MAX_URL_ATTEMPTS {
            let url = self.prompt("Enter video URL: ")?;
            if url.is_empty() {
                return Err(HelperError::EmptyUrl);
            }
            if is_valid_url(&url) {
                return Ok(url);
            }

            warn!("Rejected URL {:?} (attempt {}/{})", url, attempt, MAX_URL_ATTEMPTS);
            writeln!(
                self.output,
                "Invalid URL format. Include the scheme and host, e.g. https://example.com/watch?v=..."
            )?;
        }

        Err(HelperError::InvalidUrl {
            attempts: MAX_URL_ATTEMPTS,
        })
    }

    /// Prints `message` and reads one trimmed line; end of input reads as empty.
    fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::io::Cursor;

    struct FailingRunner;

    #[async_trait]
    impl ToolRunner for FailingRunner {
        async fn run(&self, _command: &DownloadCommand) -> Result<()> {
            Err(HelperError::ToolNotFound {
                program: "yt-dlp".to_string(),
            })
        }
    }

    fn driver(input: &str) -> Driver<Cursor<Vec<u8>>, Vec<u8>, FailingRunner> {
        Driver::new(
            Config::default(),
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
            FailingRunner,
        )
    }

    #[tokio::test]
    async fn invalid_media_type_is_fatal() {
        let mut driver = driver("gif\n");
        let err = driver.run().await.unwrap_err();
        assert!(matches!(err, HelperError::InvalidMediaType(ref s) if s == "gif"));
        assert_eq!(err.exit_code(), 1);
    }

    #[tokio::test]
    async fn codec_list_is_printed_before_prompt() {
        let mut driver = driver("audio\nwav\n");
        let err = driver.run().await.unwrap_err();
        assert!(matches!(err, HelperError::InvalidCodec { media: MediaType::Audio, .. }));

        let output = String::from_utf8_lossy(driver.output()).into_owned();
        let list = output.find("Available audio codecs:\n- mp3\n- m4a\n- flac\n").unwrap();
        assert!(list < output.find("Choose codec: ").unwrap());
    }

    #[tokio::test]
    async fn end_of_input_reads_as_empty_url() {
        let mut driver = driver("video\nmp4\n");
        let err = driver.run().await.unwrap_err();
        assert!(matches!(err, HelperError::EmptyUrl));
    }

    #[tokio::test]
    async fn gives_up_after_repeated_invalid_urls() {
        let input = "video\nmp4\n".to_string() + &"example.com\n".repeat(MAX_URL_ATTEMPTS);
        let mut driver = driver(&input);
        let err = driver.run().await.unwrap_err();
        assert!(matches!(err, HelperError::InvalidUrl { attempts } if attempts == MAX_URL_ATTEMPTS));
    }

    #[tokio::test]
    async fn missing_tool_surfaces_runner_error() {
        let mut driver = driver("video\nwebm\nhttps://example.com/v\n");
        let err = driver.run().await.unwrap_err();
        assert!(matches!(err, HelperError::ToolNotFound { .. }));
        let output = String::from_utf8_lossy(driver.output()).into_owned();
        assert!(output.contains(
            "Running: yt-dlp --restrict-filenames -f bestvideo[ext=webm]+bestaudio/best https://example.com/v"
        ));
    }
}
