//! Frame clock for the javelin throw animation.
//!
//! The clock holds at most one in-flight throw. Whoever owns it (the game
//! loop, or a test) calls [`AnimationClock::advance`] once per frame; each
//! call renders the current frame through the supplied callback and then
//! steps forward. The throw lands after `THROW_FRAMES` rendered frames.

use crate::config::THROW_FRAMES;
use crate::debug_anim;
use crate::types::{PlayerId, ThrowRecord};

/// The throw currently in the air.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationState {
    pub player: PlayerId,
    pub frame_index: u32, // 0..THROW_FRAMES
    pub distance_meters: u32,
}

impl AnimationState {
    /// Fraction of the flight completed, in [0, 1)
    pub fn progress(&self) -> f32 {
        self.frame_index as f32 / THROW_FRAMES as f32
    }
}

#[derive(Debug, Default)]
pub struct AnimationClock {
    active: Option<AnimationState>,
}

impl AnimationClock {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn state(&self) -> Option<&AnimationState> {
        self.active.as_ref()
    }

    /// Progress of the active throw, if any.
    pub fn progress(&self) -> Option<f32> {
        self.active.as_ref().map(AnimationState::progress)
    }

    /// Begin a throw at frame 0. Returns false and leaves the clock untouched
    /// when a throw is already in flight.
    pub fn start(&mut self, player: PlayerId, distance_meters: u32) -> bool {
        if let Some(current) = &self.active {
            debug_anim!(
                "{} start ignored, {} still in flight at frame {}",
                player,
                current.player,
                current.frame_index
            );
            return false;
        }
        self.active = Some(AnimationState {
            player,
            frame_index: 0,
            distance_meters,
        });
        debug_anim!("{} throw started ({}m)", player, distance_meters);
        true
    }

    /// Render the current frame via `on_frame`, then step forward one frame.
    ///
    /// Returns the completed throw once the final frame has been rendered.
    /// Does nothing while idle.
    pub fn advance<F>(&mut self, mut on_frame: F) -> Option<ThrowRecord>
    where
        F: FnMut(&AnimationState),
    {
        let state = self.active.as_mut()?;
        on_frame(state);
        state.frame_index += 1;

        if state.frame_index < THROW_FRAMES {
            return None;
        }

        let record = ThrowRecord {
            player: state.player,
            distance_meters: state.distance_meters,
        };
        self.active = None;
        debug_anim!("{} throw landed at {}m", record.player, record.distance_meters);
        Some(record)
    }
}
