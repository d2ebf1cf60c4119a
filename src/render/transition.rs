use serde::{Deserialize, Serialize};

use super::Attrs;

/// Share of the axis animation every fade transition occupies.
pub const FADE_DURATION: f64 = 0.5;
/// Share of the axis animation a fade-in waits before starting, so new
/// elements appear once moving elements have mostly settled.
pub const FADE_IN_DELAY: f64 = 0.5;

/// When a transition runs, expressed as fractions of the axis animation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitionTiming {
    pub delay: f64,
    pub partition_duration: f64,
}

impl TransitionTiming {
    pub const FULL: Self = Self {
        delay: 0.0,
        partition_duration: 1.0,
    };
    pub const FADE_IN: Self = Self {
        delay: FADE_IN_DELAY,
        partition_duration: FADE_DURATION,
    };
    pub const FADE_OUT: Self = Self {
        delay: 0.0,
        partition_duration: FADE_DURATION,
    };
}

impl Default for TransitionTiming {
    fn default() -> Self {
        Self::FULL
    }
}

/// Declarative animation handed to the surface.
///
/// Ticks only ever issue requests; the surface owns execution and is
/// expected to let a newer request override an in-flight one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionRequest {
    pub target: Attrs,
    pub timing: TransitionTiming,
}

impl TransitionRequest {
    /// Positional transition over the whole axis animation.
    #[must_use]
    pub fn to(target: Attrs) -> Self {
        Self {
            target,
            timing: TransitionTiming::FULL,
        }
    }

    #[must_use]
    pub fn fade_in() -> Self {
        Self {
            target: Attrs::new().with_opacity(1.0),
            timing: TransitionTiming::FADE_IN,
        }
    }

    #[must_use]
    pub fn fade_out() -> Self {
        Self {
            target: Attrs::new().with_opacity(0.0),
            timing: TransitionTiming::FADE_OUT,
        }
    }

    #[must_use]
    pub fn is_fade(&self) -> bool {
        self.target.opacity.is_some()
            && (self.timing == TransitionTiming::FADE_IN || self.timing == TransitionTiming::FADE_OUT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fades_share_one_duration() {
        let fade_in = TransitionRequest::fade_in();
        let fade_out = TransitionRequest::fade_out();
        assert_eq!(fade_in.timing.partition_duration, FADE_DURATION);
        assert_eq!(fade_out.timing.partition_duration, FADE_DURATION);
        assert_eq!(fade_in.timing.delay, FADE_IN_DELAY);
        assert_eq!(fade_out.timing.delay, 0.0);
        assert_eq!(fade_in.target.opacity, Some(1.0));
        assert_eq!(fade_out.target.opacity, Some(0.0));
    }

    #[test]
    fn positional_transition_is_not_a_fade() {
        let request = TransitionRequest::to(Attrs::new().with_position(1.0, 2.0));
        assert!(!request.is_fade());
        assert!(TransitionRequest::fade_out().is_fade());
    }

    #[test]
    fn fade_length_with_other_delay_is_not_a_fade() {
        let request = TransitionRequest {
            target: Attrs::new().with_opacity(1.0),
            timing: TransitionTiming {
                delay: 0.25,
                partition_duration: FADE_DURATION,
            },
        };
        assert!(!request.is_fade());
        assert!(TransitionRequest::fade_in().is_fade());
    }
}
