//! Sprite animation frame addressing
//!
//! Frame lookup is a pure function of elapsed time: animations carry no
//! per-instance playback state, so any number of entities can share one
//! definition and seek freely.

use super::sheet::{SpriteDefinition, SpriteSheet};

/// Rule mapping elapsed time to a position within a finite frame sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackMode {
    /// Wrap around to the first frame after the last
    Loop,

    /// Hold the first frame before time zero and the last frame after the end
    Once,

    /// Play forward then mirror backward, never repeating the turn frames
    PingPong,
}

/// Map elapsed seconds to a frame index in `[0, frame_count)`
///
/// Negative elapsed times are safe for every mode: `Loop` and `PingPong`
/// wrap periodically, `Once` clamps to the first frame.
///
/// Per-frame time is `duration_seconds * 0.5 / frame_count`. The halved
/// duration (playback at twice the nominal rate) is long-standing behavior
/// that shipped content is tuned against, so it is kept as-is.
pub fn frame_index(
    elapsed_seconds: f32,
    frame_count: usize,
    duration_seconds: f32,
    mode: PlaybackMode,
) -> usize {
    debug_assert!(frame_count >= 1, "frame list must be non-empty");
    if frame_count <= 1 {
        return 0;
    }

    let frame_seconds = duration_seconds * 0.5 / frame_count as f32;
    if frame_seconds <= 0.0 {
        return 0;
    }

    let step = (elapsed_seconds / frame_seconds).floor() as i64;
    let count = frame_count as i64;

    let index = match mode {
        PlaybackMode::Loop => step.rem_euclid(count),
        PlaybackMode::Once => step.clamp(0, count - 1),
        PlaybackMode::PingPong => {
            let period = 2 * (count - 1);
            let wrapped = step.rem_euclid(period);
            if wrapped < count {
                wrapped
            } else {
                period - wrapped
            }
        }
    };

    index as usize
}

/// Ordered frame sequence with a duration and playback mode
///
/// Stateless: `sprite_index_at` is a pure lookup, so definitions are shared
/// freely and never ticked.
#[derive(Debug, Clone)]
pub struct SpriteAnimDefinition {
    frames: Vec<usize>,
    duration_seconds: f32,
    playback: PlaybackMode,
}

impl SpriteAnimDefinition {
    /// Create an animation over an ordered list of sprite indices
    ///
    /// The frame list must be non-empty.
    pub fn new(frames: Vec<usize>, duration_seconds: f32, playback: PlaybackMode) -> Self {
        debug_assert!(!frames.is_empty(), "frame list must be non-empty");
        Self { frames, duration_seconds, playback }
    }

    /// Create an animation over a contiguous index range `[first, last]`
    pub fn from_range(
        first: usize,
        last: usize,
        duration_seconds: f32,
        playback: PlaybackMode,
    ) -> Self {
        Self::new((first..=last).collect(), duration_seconds, playback)
    }

    /// Number of frames in the sequence
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Nominal duration in seconds
    pub fn duration_seconds(&self) -> f32 {
        self.duration_seconds
    }

    /// Playback mode
    pub fn playback(&self) -> PlaybackMode {
        self.playback
    }

    /// Sprite index for the given elapsed time
    pub fn sprite_index_at(&self, elapsed_seconds: f32) -> usize {
        let frame =
            frame_index(elapsed_seconds, self.frames.len(), self.duration_seconds, self.playback);
        self.frames[frame]
    }

    /// Sprite UVs for the given elapsed time, resolved against a sheet
    pub fn sprite_at<'sheet>(
        &self,
        sheet: &'sheet SpriteSheet,
        elapsed_seconds: f32,
    ) -> &'sheet SpriteDefinition {
        sheet.sprite(self.sprite_index_at(elapsed_seconds))
    }
}
