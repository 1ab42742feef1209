//! Custom glyph slots and animation scheduling
//!
//! The ST7036 has 8 CGRAM slots, each holding a 5x8 glyph that is printed by
//! writing character codes 0 to 7. A slot can hold a static glyph or an
//! animation: a list of frames cycled at a fixed frame rate.
//!
//! Animations are not driven by a timer. The caller polls
//! [`Display::advance_animations`](crate::Display::advance_animations) with the
//! current time, and the frame shown is a pure function of that timestamp:
//!
//! ```
//! use st7036::animation::frame_index;
//!
//! // 4 frames at 2 fps: frame 0 at t=0, frame 1 at t=500ms, back to 0 at t=2s
//! assert_eq!(frame_index(0, 2, 4), 0);
//! assert_eq!(frame_index(500, 2, 4), 1);
//! assert_eq!(frame_index(2_000, 2, 4), 0);
//! ```

use heapless::Vec;

use crate::error::{Error, GLYPH_SLOTS, MAX_ANIMATION_FRAMES};
use crate::interface::DisplayInterface;

/// Glyph bitmap: one byte per pixel row, low 5 bits significant
pub type Glyph = [u8; 8];

/// Number of pixel rows in a glyph
pub const GLYPH_ROWS: usize = 8;

/// Index of the frame due at `now_ms`
///
/// Computes `round(now_seconds * frame_rate) mod frame_count` in integer
/// arithmetic, rounding halves up. Returns 0 for an empty frame list.
pub fn frame_index(now_ms: u64, frame_rate: u32, frame_count: usize) -> usize {
    if frame_count == 0 {
        return 0;
    }
    let ticks = (u128::from(now_ms) * u128::from(frame_rate) + 500) / 1000;
    (ticks % frame_count as u128) as usize
}

/// An animation stored in a glyph slot
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Animation {
    frames: Vec<Glyph, MAX_ANIMATION_FRAMES>,
    frame_rate: u32,
    last_frame: Option<usize>,
}

impl Animation {
    /// Validate and copy `frames`
    ///
    /// # Errors
    ///
    /// - `Error::EmptyAnimation` if `frames` is empty
    /// - `Error::TooManyFrames` if there are more than [`MAX_ANIMATION_FRAMES`]
    /// - `Error::InvalidFrameLength` if any frame is not exactly 8 bytes
    pub(crate) fn new<I: DisplayInterface>(
        frames: &[&[u8]],
        frame_rate: u32,
    ) -> Result<Self, Error<I>> {
        if frames.is_empty() {
            return Err(Error::EmptyAnimation);
        }
        if frames.len() > MAX_ANIMATION_FRAMES {
            return Err(Error::TooManyFrames {
                provided: frames.len(),
                max: MAX_ANIMATION_FRAMES,
            });
        }
        let mut stored = Vec::new();
        for (index, frame) in frames.iter().enumerate() {
            let glyph: Glyph = (*frame)
                .try_into()
                .map_err(|_| Error::InvalidFrameLength {
                    frame: index,
                    length: frame.len(),
                })?;
            // Capacity checked above
            let _ = stored.push(glyph);
        }
        Ok(Self {
            frames: stored,
            frame_rate,
            last_frame: None,
        })
    }

    /// Frames in display order
    pub fn frames(&self) -> &[Glyph] {
        &self.frames
    }

    /// Whole frames per second
    pub fn frame_rate(&self) -> u32 {
        self.frame_rate
    }

    /// Index of the frame currently resident in CGRAM, if any
    pub fn last_frame(&self) -> Option<usize> {
        self.last_frame
    }

    /// Frame due at `now_ms`, or `None` if it is already resident
    pub fn due(&self, now_ms: u64) -> Option<(usize, Glyph)> {
        let index = frame_index(now_ms, self.frame_rate, self.frames.len());
        if self.last_frame == Some(index) {
            return None;
        }
        self.frames.get(index).map(|glyph| (index, *glyph))
    }
}

/// Contents of one CGRAM slot
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AnimationSlot {
    /// Nothing uploaded by this driver
    #[default]
    Empty,
    /// A single glyph
    Static(Glyph),
    /// A cycling sequence of glyphs
    Animated(Animation),
}

/// The 8 CGRAM slots as last written by the driver
#[derive(Clone, Debug, Default)]
pub(crate) struct AnimationStore {
    slots: [AnimationSlot; GLYPH_SLOTS],
}

impl AnimationStore {
    pub(crate) fn get(&self, slot: u8) -> Option<&AnimationSlot> {
        self.slots.get(usize::from(slot))
    }

    pub(crate) fn set(&mut self, slot: u8, contents: AnimationSlot) {
        if let Some(entry) = self.slots.get_mut(usize::from(slot)) {
            *entry = contents;
        }
    }

    /// Frame due at `now_ms` for an animated `slot`
    pub(crate) fn due(&self, slot: u8, now_ms: u64) -> Option<(usize, Glyph)> {
        match self.get(slot)? {
            AnimationSlot::Animated(animation) => animation.due(now_ms),
            _ => None,
        }
    }

    pub(crate) fn mark_uploaded(&mut self, slot: u8, frame: usize) {
        if let Some(AnimationSlot::Animated(animation)) = self.slots.get_mut(usize::from(slot)) {
            animation.last_frame = Some(frame);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::interface::ControlLevel;
    use core::convert::Infallible;

    #[derive(Debug)]
    struct NullInterface;

    impl DisplayInterface for NullInterface {
        type Error = Infallible;

        fn set_control_line(&mut self, _level: ControlLevel) -> Result<(), Infallible> {
            Ok(())
        }

        fn transfer_byte(&mut self, _byte: u8) -> Result<(), Infallible> {
            Ok(())
        }

        fn delay_us(&mut self, _us: u32) {}

        fn pulse_reset(&mut self) -> Result<(), Infallible> {
            Ok(())
        }
    }

    type TestError = Error<NullInterface>;

    const A: Glyph = [0x1F; 8];
    const B: Glyph = [0x00; 8];

    fn animation(frames: &[&[u8]], fps: u32) -> Result<Animation, TestError> {
        Animation::new(frames, fps)
    }

    #[test]
    fn test_frame_index_rounds_to_nearest() {
        // 1 fps: 0.4s rounds down, 0.5s rounds up
        assert_eq!(frame_index(400, 1, 10), 0);
        assert_eq!(frame_index(500, 1, 10), 1);
        assert_eq!(frame_index(1_499, 1, 10), 1);
    }

    #[test]
    fn test_frame_index_wraps() {
        assert_eq!(frame_index(3_000, 1, 3), 0);
        assert_eq!(frame_index(4_000, 1, 3), 1);
    }

    #[test]
    fn test_frame_index_is_deterministic() {
        let now = 1_234_567_890_123;
        assert_eq!(frame_index(now, 7, 5), frame_index(now, 7, 5));
    }

    #[test]
    fn test_frame_index_zero_rate_stays_on_first_frame() {
        assert_eq!(frame_index(99_999, 0, 4), 0);
    }

    #[test]
    fn test_animation_rejects_empty() {
        assert!(matches!(animation(&[], 1), Err(Error::EmptyAnimation)));
    }

    #[test]
    fn test_animation_rejects_short_frame() {
        let short = [0u8; 7];
        let frames: [&[u8]; 2] = [&A, &short];
        let result = animation(&frames, 1);
        assert!(matches!(
            result,
            Err(Error::InvalidFrameLength {
                frame: 1,
                length: 7
            })
        ));
    }

    #[test]
    fn test_animation_rejects_too_many_frames() {
        let frame: &[u8] = &A;
        let frames = [frame; MAX_ANIMATION_FRAMES + 1];
        assert!(matches!(
            animation(&frames, 1),
            Err(Error::TooManyFrames { provided: 33, .. })
        ));
    }

    #[test]
    fn test_due_skips_resident_frame() {
        let frames: [&[u8]; 2] = [&A, &B];
        let mut animation = animation(&frames, 1).unwrap();
        assert_eq!(animation.due(0), Some((0, A)));
        animation.last_frame = Some(0);
        assert_eq!(animation.due(0), None);
        assert_eq!(animation.due(1_000), Some((1, B)));
    }

    #[test]
    fn test_store_tracks_uploads() {
        let mut store = AnimationStore::default();
        let frames: [&[u8]; 2] = [&A, &B];
        store.set(3, AnimationSlot::Animated(animation(&frames, 2).unwrap()));
        assert_eq!(store.due(3, 0), Some((0, A)));
        store.mark_uploaded(3, 0);
        assert_eq!(store.due(3, 0), None);
        assert_eq!(store.due(2, 0), None);
    }

    #[test]
    fn test_store_ignores_static_and_out_of_range() {
        let mut store = AnimationStore::default();
        store.set(1, AnimationSlot::Static(A));
        store.set(9, AnimationSlot::Static(A));
        assert_eq!(store.get(1), Some(&AnimationSlot::Static(A)));
        assert_eq!(store.get(9), None);
        assert_eq!(store.due(1, 0), None);
    }
}
