//! Transition presenter — maps wizard direction and phase to motion
//! parameters for the hosting view.
//!
//! Entering content originates offset in the direction of travel and
//! animates to neutral; exiting content leaves the opposite way, so a
//! retreat visually mirrors an advance. Reduced motion collapses every
//! transition to an instantaneous state change.

use serde::Serialize;

use super::state::Direction;

/// Horizontal travel distance for step transitions, in pixels.
const STEP_OFFSET_PX: f32 = 300.0;
/// Step slide duration.
const STEP_DURATION_MS: u32 = 300;
/// Step header fade duration.
const HEADER_DURATION_MS: u32 = 200;
/// Header fade vertical travel, in pixels.
const HEADER_OFFSET_PX: f32 = 10.0;
/// Progress bar fill duration.
pub const PROGRESS_DURATION_MS: u32 = 300;

/// Phase of a step transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionPhase {
    /// Content entering the viewport, at its origin offset.
    Enter,
    /// Content at rest.
    Center,
    /// Content leaving the viewport, at its target offset.
    Exit,
}

/// Presentation parameters for one animation target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Motion {
    pub x_offset: f32,
    pub y_offset: f32,
    pub opacity: f32,
    pub duration_ms: u32,
}

impl Motion {
    /// Neutral resting position with no animation.
    fn instant() -> Self {
        Self {
            x_offset: 0.0,
            y_offset: 0.0,
            opacity: 1.0,
            duration_ms: 0,
        }
    }
}

/// Process-wide motion preferences, read-only for the session.
#[derive(Debug, Clone, Copy, Default)]
pub struct MotionConfig {
    /// Collapse every transition to a zero-duration state change.
    pub reduced_motion: bool,
}

/// Motion parameters for step content in the given transition phase.
pub fn step_motion(direction: Direction, phase: MotionPhase, config: &MotionConfig) -> Motion {
    if config.reduced_motion {
        return Motion::instant();
    }

    let travel = match direction {
        Direction::Forward => STEP_OFFSET_PX,
        Direction::Backward => -STEP_OFFSET_PX,
    };

    match phase {
        MotionPhase::Enter => Motion {
            x_offset: travel,
            y_offset: 0.0,
            opacity: 0.0,
            duration_ms: STEP_DURATION_MS,
        },
        MotionPhase::Center => Motion {
            x_offset: 0.0,
            y_offset: 0.0,
            opacity: 1.0,
            duration_ms: STEP_DURATION_MS,
        },
        MotionPhase::Exit => Motion {
            x_offset: -travel,
            y_offset: 0.0,
            opacity: 0.0,
            duration_ms: STEP_DURATION_MS,
        },
    }
}

/// Motion parameters for the step header fade.
pub fn header_motion(phase: MotionPhase, config: &MotionConfig) -> Motion {
    if config.reduced_motion {
        return Motion::instant();
    }

    match phase {
        MotionPhase::Enter => Motion {
            x_offset: 0.0,
            y_offset: HEADER_OFFSET_PX,
            opacity: 0.0,
            duration_ms: HEADER_DURATION_MS,
        },
        MotionPhase::Center => Motion {
            x_offset: 0.0,
            y_offset: 0.0,
            opacity: 1.0,
            duration_ms: HEADER_DURATION_MS,
        },
        MotionPhase::Exit => Motion {
            x_offset: 0.0,
            y_offset: -HEADER_OFFSET_PX,
            opacity: 0.0,
            duration_ms: HEADER_DURATION_MS,
        },
    }
}

/// Duration of the progress bar fill animation.
pub fn progress_duration(config: &MotionConfig) -> u32 {
    if config.reduced_motion {
        0
    } else {
        PROGRESS_DURATION_MS
    }
}
