//! Threshold-based fan speed selection.
//!
//! The bands are scanned from the highest threshold down; the first one the
//! temperature reaches decides the speed.  Anything below the lowest
//! threshold turns the fan off.

use serde::{Deserialize, Serialize};

use crate::drivers::motor::MotorState;

/// Run at `speed_percent` once the temperature reaches `threshold_c`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeedBand {
    pub threshold_c: u8,
    pub speed_percent: u8,
}

impl SpeedBand {
    pub const fn new(threshold_c: u8, speed_percent: u8) -> Self {
        Self {
            threshold_c,
            speed_percent,
        }
    }
}

/// What the actuator is told to do for one iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FanCommand {
    pub state: MotorState,
    pub speed: u8,
}

impl FanCommand {
    pub const OFF: Self = Self {
        state: MotorState::Off,
        speed: 0,
    };

    pub fn is_on(&self) -> bool {
        self.state != MotorState::Off
    }
}

/// Pick the command for `temperature_c`.  `bands` must be ordered by
/// descending threshold.
pub fn select(temperature_c: u8, bands: &[SpeedBand]) -> FanCommand {
    bands
        .iter()
        .find(|band| temperature_c >= band.threshold_c)
        .map_or(FanCommand::OFF, |band| FanCommand {
            state: MotorState::Forward,
            speed: band.speed_percent,
        })
}
