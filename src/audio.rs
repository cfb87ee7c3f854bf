// src/audio.rs

use crate::errors::{InterviewError, InterviewResult};
use log::{debug, warn};
use reqwest::{Client, Url};
use rodio::{Decoder, OutputStream, Sink};
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Plays the audio cue attached to a reply.
pub trait AudioPlayer: Send {
    /// Starts playback of `reference` and returns without waiting for it.
    fn play(&self, reference: &str) -> InterviewResult<()>;
}

/// Used when audio is disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct MutePlayer;

impl AudioPlayer for MutePlayer {
    fn play(&self, reference: &str) -> InterviewResult<()> {
        debug!("audio disabled, skipping {}", reference);
        Ok(())
    }
}

/// Where an audio reference points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioSource {
    Remote(Url),
    Local(PathBuf),
}

/// Resolves `reference` against the server it came from. Absolute http(s)
/// URLs are used as-is, `file://` URLs and existing absolute paths are read
/// locally, anything else is relative to `base`.
pub fn resolve_reference(base: &Url, reference: &str) -> InterviewResult<AudioSource> {
    let reference = reference.trim();
    if reference.is_empty() {
        return Err(InterviewError::audio_error("Empty audio reference"));
    }

    if let Ok(url) = Url::parse(reference) {
        match url.scheme() {
            "http" | "https" => return Ok(AudioSource::Remote(url)),
            "file" => {
                return url
                    .to_file_path()
                    .map(AudioSource::Local)
                    .map_err(|_| {
                        InterviewError::audio_error(format!("Invalid file URL: {}", reference))
                    })
            }
            _ => {}
        }
    }

    let path = Path::new(reference);
    if path.is_absolute() && path.is_file() {
        return Ok(AudioSource::Local(path.to_path_buf()));
    }

    base.join(reference)
        .map(AudioSource::Remote)
        .map_err(|e| InterviewError::audio_error(format!("Invalid audio reference {}: {}", reference, e)))
}

/// Plays audio through the default output device with rodio.
#[derive(Debug, Clone)]
pub struct RodioPlayer {
    client: Client,
    base_url: Url,
}

impl RodioPlayer {
    pub fn new(base_url: Url) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }
}

impl AudioPlayer for RodioPlayer {
    fn play(&self, reference: &str) -> InterviewResult<()> {
        let source = resolve_reference(&self.base_url, reference)?;
        let client = self.client.clone();

        tokio::spawn(async move {
            let bytes = match load_bytes(&client, &source).await {
                Ok(bytes) => bytes,
                Err(e) => {
                    warn!("Failed to load audio {:?}: {}", source, e);
                    return;
                }
            };

            let played = tokio::task::spawn_blocking(move || play_bytes(bytes)).await;
            match played {
                Ok(Ok(())) => debug!("finished playing {:?}", source),
                Ok(Err(e)) => warn!("Failed to play audio {:?}: {}", source, e),
                Err(e) => warn!("Audio task panicked: {}", e),
            }
        });

        Ok(())
    }
}

async fn load_bytes(client: &Client, source: &AudioSource) -> InterviewResult<Vec<u8>> {
    match source {
        AudioSource::Remote(url) => {
            let response = client.get(url.clone()).send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(InterviewError::audio_error(format!(
                    "Audio fetch returned {}",
                    status
                )));
            }
            Ok(response.bytes().await?.to_vec())
        }
        AudioSource::Local(path) => Ok(tokio::fs::read(path).await?),
    }
}

fn play_bytes(bytes: Vec<u8>) -> InterviewResult<()> {
    let (_stream, handle) = OutputStream::try_default()
        .map_err(|e| InterviewError::audio_error(format!("No audio output: {}", e)))?;
    let sink = Sink::try_new(&handle)
        .map_err(|e| InterviewError::audio_error(format!("Failed to open sink: {}", e)))?;
    let decoder = Decoder::new(Cursor::new(bytes))
        .map_err(|e| InterviewError::audio_error(format!("Failed to decode audio: {}", e)))?;

    sink.append(decoder);
    sink.sleep_until_end();
    Ok(())
}
