// SPDX-License-Identifier: MPL-2.0
//! FFmpeg decode thread.
//!
//! Frames are converted to RGBA and paced against their presentation
//! timestamps before being sent over a bounded channel, so the channel
//! depth (not the UI) applies backpressure to the decoder.

use crate::error::{Error, Result, VideoError};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{sync_channel, Receiver, SyncSender};
use std::sync::{Arc, Once};
use std::time::{Duration, Instant};

/// Static flag to ensure FFmpeg is initialized only once.
static FFMPEG_INIT: Once = Once::new();

/// Frames buffered ahead of the UI.
const CHANNEL_DEPTH: usize = 4;

/// Sleep quantum while paused.
const PAUSE_POLL: Duration = Duration::from_millis(40);

/// Initialize FFmpeg with the log level lowered to ERROR so routine
/// container warnings do not reach stderr.
pub fn init_ffmpeg() -> Result<()> {
    let mut init_result: Result<()> = Ok(());

    FFMPEG_INIT.call_once(|| {
        if let Err(e) = ffmpeg_next::init() {
            init_result = Err(Error::Io(format!("FFmpeg initialization failed: {e}")));
            return;
        }

        // SAFETY: av_log_set_level is thread-safe and only affects logging
        unsafe {
            ffmpeg_next::ffi::av_log_set_level(ffmpeg_next::ffi::AV_LOG_ERROR);
        }
    });

    init_result
}

/// Events sent from the decode thread to the player.
pub enum DecodeEvent {
    Frame {
        width: u32,
        height: u32,
        rgba: Vec<u8>,
        pts_secs: f64,
    },
    Finished,
    Failed(String),
}

/// Shared flags the player flips to pause or stop the thread.
#[derive(Clone)]
pub struct DecoderControl {
    paused: Arc<AtomicBool>,
    stopped: Arc<AtomicBool>,
}

impl DecoderControl {
    pub fn set_paused(&self, paused: bool) {
        self.paused.store(paused, Ordering::Relaxed);
    }

    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Relaxed);
    }
}

/// Probes `path`, then starts the decode thread. Returns the event
/// receiver, the control handle, and the stream duration in seconds.
pub fn spawn(path: PathBuf) -> Result<(Receiver<DecodeEvent>, DecoderControl, f64)> {
    init_ffmpeg()?;

    // Probe up front so unreadable files fail before the modal renders a
    // player surface.
    let duration_secs = probe_duration(&path)?;

    let (tx, rx) = sync_channel(CHANNEL_DEPTH);
    let control = DecoderControl {
        paused: Arc::new(AtomicBool::new(false)),
        stopped: Arc::new(AtomicBool::new(false)),
    };

    let thread_control = control.clone();
    std::thread::Builder::new()
        .name("video-decoder".into())
        .spawn(move || {
            if let Err(err) = decode_loop(&path, &tx, &thread_control) {
                let _ = tx.send(DecodeEvent::Failed(err.to_string()));
            }
        })
        .map_err(|e| Error::Io(e.to_string()))?;

    Ok((rx, control, duration_secs))
}

fn probe_duration(path: &Path) -> Result<f64> {
    let ictx = ffmpeg_next::format::input(&path)
        .map_err(|e| VideoError::from_message(&e.to_string()))?;
    ictx.streams()
        .best(ffmpeg_next::media::Type::Video)
        .ok_or(Error::Video(VideoError::NoVideoStream))?;

    let duration = ictx.duration();
    if duration <= 0 {
        return Ok(0.0);
    }
    Ok(duration as f64 / f64::from(ffmpeg_next::ffi::AV_TIME_BASE))
}

fn decode_loop(
    path: &Path,
    tx: &SyncSender<DecodeEvent>,
    control: &DecoderControl,
) -> Result<()> {
    let mut ictx = ffmpeg_next::format::input(&path)
        .map_err(|e| VideoError::from_message(&e.to_string()))?;

    let input = ictx
        .streams()
        .best(ffmpeg_next::media::Type::Video)
        .ok_or(Error::Video(VideoError::NoVideoStream))?;
    let stream_index = input.index();
    let time_base = f64::from(input.time_base());

    let context_decoder =
        ffmpeg_next::codec::context::Context::from_parameters(input.parameters())
            .map_err(|e| VideoError::from_message(&e.to_string()))?;
    let mut decoder = context_decoder
        .decoder()
        .video()
        .map_err(|e| VideoError::from_message(&e.to_string()))?;

    let width = decoder.width();
    let height = decoder.height();
    if width == 0 || height == 0 {
        return Err(Error::Video(VideoError::CorruptedFile));
    }

    let mut scaler = ffmpeg_next::software::scaling::Context::get(
        decoder.format(),
        width,
        height,
        ffmpeg_next::format::Pixel::RGBA,
        width,
        height,
        ffmpeg_next::software::scaling::Flags::BILINEAR,
    )
    .map_err(|e| VideoError::from_message(&e.to_string()))?;

    let playback_start = Instant::now();
    let mut paused_total = Duration::ZERO;

    let mut deliver = |frame: &ffmpeg_next::frame::Video| -> std::result::Result<(), ()> {
        let pts_secs = frame.pts().map_or(0.0, |pts| pts as f64 * time_base);

        // Wait while paused, accumulating the pause time so resumed
        // frames are paced against a shifted clock instead of rushing.
        while control.paused.load(Ordering::Relaxed) {
            if control.stopped.load(Ordering::Relaxed) {
                return Err(());
            }
            std::thread::sleep(PAUSE_POLL);
            paused_total += PAUSE_POLL;
        }
        if control.stopped.load(Ordering::Relaxed) {
            return Err(());
        }

        // Pace against the wall clock.
        let due = Duration::from_secs_f64(pts_secs.max(0.0)) + paused_total;
        let elapsed = playback_start.elapsed();
        if due > elapsed {
            std::thread::sleep(due - elapsed);
        }

        let mut rgba_frame = ffmpeg_next::frame::Video::empty();
        if scaler.run(frame, &mut rgba_frame).is_err() {
            return Err(());
        }

        // The scaler may pad each row; copy the packed pixels only.
        let stride = rgba_frame.stride(0);
        let row_bytes = width as usize * 4;
        let data = rgba_frame.data(0);
        let mut rgba = Vec::with_capacity(row_bytes * height as usize);
        for row in 0..height as usize {
            let start = row * stride;
            rgba.extend_from_slice(&data[start..start + row_bytes]);
        }

        tx.send(DecodeEvent::Frame {
            width,
            height,
            rgba,
            pts_secs,
        })
        .map_err(|_| ())
    };

    for (stream, packet) in ictx.packets() {
        if control.stopped.load(Ordering::Relaxed) {
            return Ok(());
        }
        if stream.index() != stream_index {
            continue;
        }
        decoder
            .send_packet(&packet)
            .map_err(|e| VideoError::from_message(&e.to_string()))?;

        let mut decoded = ffmpeg_next::frame::Video::empty();
        while decoder.receive_frame(&mut decoded).is_ok() {
            if deliver(&decoded).is_err() {
                return Ok(());
            }
        }
    }

    // Flush the decoder.
    let _ = decoder.send_eof();
    let mut decoded = ffmpeg_next::frame::Video::empty();
    while decoder.receive_frame(&mut decoded).is_ok() {
        if deliver(&decoded).is_err() {
            return Ok(());
        }
    }

    let _ = tx.send(DecodeEvent::Finished);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_flags_flip_atomically() {
        let control = DecoderControl {
            paused: Arc::new(AtomicBool::new(false)),
            stopped: Arc::new(AtomicBool::new(false)),
        };
        control.set_paused(true);
        assert!(control.paused.load(Ordering::Relaxed));
        control.set_paused(false);
        assert!(!control.paused.load(Ordering::Relaxed));
        control.stop();
        assert!(control.stopped.load(Ordering::Relaxed));
    }

    #[test]
    fn spawn_rejects_missing_file() {
        let result = spawn(PathBuf::from("/no/such/clip.mp4"));
        assert!(result.is_err());
    }
}
