use std::time::{Duration, Instant};

use crate::nav::Direction;

/// How long one full page turn takes (exit half plus enter half).
pub const TURN_DURATION: Duration = Duration::from_millis(600);

/// Edge the page rotates around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PivotEdge {
    Left,
    Center,
    Right,
}

/// Visual state of a page at one end of a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlipParams {
    /// Rotation about the vertical axis, in degrees.
    pub rotate_y: f32,
    /// 0.0 fully transparent, 1.0 fully opaque.
    pub opacity: f32,
    pub origin: PivotEdge,
}

impl FlipParams {
    /// The settled state of the page currently on display.
    pub const CENTER: Self = Self {
        rotate_y: 0.0,
        opacity: 1.0,
        origin: PivotEdge::Center,
    };
}

/// Start and end states for both halves of a page turn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlipVariants {
    /// Where the incoming page starts.
    pub enter: FlipParams,
    /// Where every page settles.
    pub center: FlipParams,
    /// Where the outgoing page ends.
    pub exit: FlipParams,
}

/// Maps a turn direction to its animation endpoints. Total and deterministic:
/// rotation sign and pivot edge mirror between Forward and Backward so the
/// effect reads as "turning" either way. `Direction::None` is the neutral
/// pre-interaction state with no animation at all.
pub fn flip_variants(direction: Direction) -> FlipVariants {
    match direction {
        Direction::Forward => FlipVariants {
            enter: FlipParams {
                rotate_y: -90.0,
                opacity: 0.0,
                origin: PivotEdge::Left,
            },
            center: FlipParams::CENTER,
            exit: FlipParams {
                rotate_y: 90.0,
                opacity: 0.0,
                origin: PivotEdge::Right,
            },
        },
        Direction::Backward => FlipVariants {
            enter: FlipParams {
                rotate_y: 90.0,
                opacity: 0.0,
                origin: PivotEdge::Right,
            },
            center: FlipParams::CENTER,
            exit: FlipParams {
                rotate_y: -90.0,
                opacity: 0.0,
                origin: PivotEdge::Left,
            },
        },
        Direction::None => FlipVariants {
            enter: FlipParams::CENTER,
            center: FlipParams::CENTER,
            exit: FlipParams::CENTER,
        },
    }
}

/// Which page is visible right now and how to draw it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurnFrame {
    pub page: usize,
    pub params: FlipParams,
}

/// The single in-flight page turn, keyed by the outgoing and incoming page
/// ids. The outgoing page's exit and the incoming page's enter run as one
/// atomic transition; starting a new turn replaces this one outright, so rapid
/// input never queues anything beyond the last-registered direction.
#[derive(Debug)]
pub struct Turn {
    from: usize,
    to: usize,
    direction: Direction,
    started: Instant,
}

impl Turn {
    pub fn start(from: usize, to: usize, direction: Direction) -> Self {
        Self {
            from,
            to,
            direction,
            started: Instant::now(),
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    fn progress(&self) -> f32 {
        let elapsed = self.started.elapsed().as_secs_f32();
        (elapsed / TURN_DURATION.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub fn is_done(&self) -> bool {
        self.started.elapsed() >= TURN_DURATION
    }

    /// Current frame by wall clock.
    pub fn frame(&self) -> TurnFrame {
        self.params_at(self.progress())
    }

    /// Pure frame lookup at normalized time `t` in `[0, 1]`. The first half
    /// plays the outgoing page from center to exit; the second half plays the
    /// incoming page from enter to center.
    pub fn params_at(&self, t: f32) -> TurnFrame {
        let v = flip_variants(self.direction);
        if t >= 1.0 {
            return TurnFrame {
                page: self.to,
                params: v.center,
            };
        }
        let t = t.max(0.0);
        if t < 0.5 {
            let k = ease_in_out(t * 2.0);
            TurnFrame {
                page: self.from,
                params: FlipParams {
                    rotate_y: lerp(v.center.rotate_y, v.exit.rotate_y, k),
                    opacity: lerp(v.center.opacity, v.exit.opacity, k),
                    origin: v.exit.origin,
                },
            }
        } else {
            let k = ease_in_out((t - 0.5) * 2.0);
            TurnFrame {
                page: self.to,
                params: FlipParams {
                    rotate_y: lerp(v.enter.rotate_y, v.center.rotate_y, k),
                    opacity: lerp(v.enter.opacity, v.center.opacity, k),
                    origin: v.enter.origin,
                },
            }
        }
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

fn ease_in_out(t: f32) -> f32 {
    0.5 - 0.5 * (std::f32::consts::PI * t).cos()
}
