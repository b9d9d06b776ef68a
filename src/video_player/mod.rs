// SPDX-License-Identifier: MPL-2.0
//! Inline video playback for the modal.
//!
//! A dedicated thread decodes the file with FFmpeg and paces RGBA frames
//! over a bounded channel; the UI drains that channel from a time
//! subscription and draws the latest frame. One player exists at a time
//! because only one modal can be open.

mod decoder;

use crate::error::{Result, VideoError};
use decoder::{DecodeEvent, DecoderControl};
use iced::widget::image::Handle;
use std::path::PathBuf;
use std::sync::mpsc::Receiver;
use std::time::Duration;

/// UI-facing playback state for a single local video.
pub struct Player {
    events: Receiver<DecodeEvent>,
    control: DecoderControl,
    /// Latest decoded frame, ready to draw.
    pub frame: Option<Handle>,
    /// Stream duration in seconds (0.0 when the container does not say).
    pub duration_secs: f64,
    /// Presentation time of the last drawn frame.
    pub position_secs: f64,
    playing: bool,
    finished: bool,
    error: Option<VideoError>,
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("playing", &self.playing)
            .field("finished", &self.finished)
            .field("position_secs", &self.position_secs)
            .finish()
    }
}

impl Player {
    /// Probes the file and starts the decode thread. Playback begins
    /// immediately (the modal always auto-plays local footage).
    pub fn spawn(path: PathBuf) -> Result<Self> {
        let (events, control, duration_secs) = decoder::spawn(path)?;
        Ok(Self {
            events,
            control,
            frame: None,
            duration_secs,
            position_secs: 0.0,
            playing: true,
            finished: false,
            error: None,
        })
    }

    /// Drains decoded frames, keeping only the newest. Returns true when
    /// the displayed frame changed.
    pub fn poll(&mut self) -> bool {
        let mut updated = false;
        while let Ok(event) = self.events.try_recv() {
            match event {
                DecodeEvent::Frame {
                    width,
                    height,
                    rgba,
                    pts_secs,
                } => {
                    self.frame = Some(Handle::from_rgba(width, height, rgba));
                    self.position_secs = pts_secs;
                    updated = true;
                }
                DecodeEvent::Finished => {
                    self.finished = true;
                    self.playing = false;
                    updated = true;
                }
                DecodeEvent::Failed(message) => {
                    self.error = Some(VideoError::from_message(&message));
                    self.playing = false;
                    updated = true;
                }
            }
        }
        updated
    }

    pub fn toggle_playback(&mut self) {
        if self.finished || self.error.is_some() {
            return;
        }
        self.playing = !self.playing;
        self.control.set_paused(!self.playing);
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    #[must_use]
    pub fn error(&self) -> Option<&VideoError> {
        self.error.as_ref()
    }

    /// How often the UI should poll for new frames.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        // Frames are paced by the decoder; polling at ~30 Hz keeps display
        // latency under one frame for typical footage.
        Duration::from_millis(33)
    }
}

impl Drop for Player {
    fn drop(&mut self) {
        self.control.stop();
    }
}

/// Formats a position as m:ss for the transport bar.
#[must_use]
pub fn format_timestamp(secs: f64) -> String {
    let total = secs.max(0.0).floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps_format_as_minutes_and_seconds() {
        assert_eq!(format_timestamp(0.0), "0:00");
        assert_eq!(format_timestamp(7.9), "0:07");
        assert_eq!(format_timestamp(61.0), "1:01");
        assert_eq!(format_timestamp(600.0), "10:00");
    }

    #[test]
    fn negative_positions_clamp_to_zero() {
        assert_eq!(format_timestamp(-3.0), "0:00");
    }

    #[test]
    fn spawn_on_missing_file_reports_video_error() {
        let result = Player::spawn(PathBuf::from("/definitely/not/here.mp4"));
        assert!(result.is_err());
    }
}
