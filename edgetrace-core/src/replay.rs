// Replay driver
// Feeds a motion plan to a pointer device as a drag gesture

use std::thread;
use std::time::Duration;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::error::DeviceError;
use crate::motion::{Motion, MotionPlan};

/// Relative pointer device the plan is replayed on
/// Calls are synchronous and must be applied in order
pub trait PointerDevice {
    /// Move the pointer by exactly (dx, dy)
    fn move_relative(&mut self, dx: i64, dy: i64) -> Result<(), DeviceError>;
    fn button_down(&mut self) -> Result<(), DeviceError>;
    fn button_up(&mut self) -> Result<(), DeviceError>;
}

/// Delays inserted between device calls, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pacing {
    /// After every relative move
    pub move_ms: f64,
    /// After each step, on top of `move_ms`
    pub step_ms: f64,
    /// Between releasing the button and starting a jump
    pub release_ms: f64,
    /// After the unit walk of a jump, before pressing again
    pub settle_ms: f64,
    /// After pressing the button again
    pub press_ms: f64,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            move_ms: 1.6,
            step_ms: 10.0,
            release_ms: 500.0,
            settle_ms: 200.0,
            press_ms: 100.0,
        }
    }
}

impl Pacing {
    /// No delays at all
    pub fn none() -> Self {
        Self {
            move_ms: 0.0,
            step_ms: 0.0,
            release_ms: 0.0,
            settle_ms: 0.0,
            press_ms: 0.0,
        }
    }

    /// Every delay multiplied by `factor`
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            move_ms: self.move_ms * factor,
            step_ms: self.step_ms * factor,
            release_ms: self.release_ms * factor,
            settle_ms: self.settle_ms * factor,
            press_ms: self.press_ms * factor,
        }
    }

    /// All delays are finite and non-negative
    pub fn is_valid(&self) -> bool {
        [self.move_ms, self.step_ms, self.release_ms, self.settle_ms, self.press_ms]
            .iter()
            .all(|ms| ms.is_finite() && *ms >= 0.0)
    }

    /// Lower bound on the wall time a plan takes to replay
    pub fn estimate(&self, plan: &MotionPlan) -> Duration {
        let summary = plan.summary();
        let moves = summary.steps as f64 + summary.jump_moves as f64;
        let ms = moves * self.move_ms
            + summary.steps as f64 * self.step_ms
            + summary.jumps as f64 * (self.release_ms + self.settle_ms + self.press_ms);
        to_duration(ms)
    }
}

fn to_duration(ms: f64) -> Duration {
    if ms.is_finite() && ms > 0.0 {
        Duration::from_secs_f64(ms / 1000.0)
    } else {
        Duration::ZERO
    }
}

fn pause(ms: f64) {
    let delay = to_duration(ms);
    if !delay.is_zero() {
        thread::sleep(delay);
    }
}

/// Device call counts from one replay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayStats {
    pub moves: usize,
    pub presses: usize,
    pub releases: usize,
}

struct Replayer<'a, D: PointerDevice> {
    device: &'a mut D,
    pacing: &'a Pacing,
    stats: ReplayStats,
}

impl<D: PointerDevice> Replayer<'_, D> {
    fn move_by(&mut self, dx: i64, dy: i64) -> Result<(), DeviceError> {
        self.device.move_relative(dx, dy)?;
        self.stats.moves += 1;
        pause(self.pacing.move_ms);
        Ok(())
    }

    fn press(&mut self) -> Result<(), DeviceError> {
        self.device.button_down()?;
        self.stats.presses += 1;
        Ok(())
    }

    fn release(&mut self) -> Result<(), DeviceError> {
        self.device.button_up()?;
        self.stats.releases += 1;
        Ok(())
    }
}

/// Replay `plan` as one drag: press, apply every motion, release
/// Steps move with the button held; jumps release it, walk x then y one
/// unit at a time and press again. The first device error aborts the replay
pub fn replay<D: PointerDevice>(
    plan: &MotionPlan,
    device: &mut D,
    pacing: &Pacing,
) -> Result<ReplayStats, DeviceError> {
    let mut r = Replayer {
        device,
        pacing,
        stats: ReplayStats::default(),
    };

    debug!("Replaying {} motion(s)", plan.len());
    r.press()?;

    for motion in plan.iter() {
        match *motion {
            Motion::Step(d) => {
                r.move_by(d.dx, d.dy)?;
                pause(pacing.step_ms);
            }
            Motion::Jump(d) => {
                trace!("jump {}", d);
                r.release()?;
                pause(pacing.release_ms);
                for unit in d.unit_steps() {
                    r.move_by(unit.dx, unit.dy)?;
                }
                pause(pacing.settle_ms);
                r.press()?;
                pause(pacing.press_ms);
            }
        }
    }

    r.release()?;
    Ok(r.stats)
}
