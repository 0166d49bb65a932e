// Dry-run pointer device
// Stands in for OS pointer injection: tracks position and button state and logs calls

use edgetrace_core::{DeviceError, PointerDevice};
use log::trace;

/// Pointer that only records what a real device would have done
#[derive(Debug, Default)]
pub struct LoggingDevice {
    /// Pointer offset from where the replay started
    pub position: (i64, i64),
    pub pressed: bool,
    pub moves: usize,
    /// Unit moves made with the button held
    pub drawn: usize,
}

impl PointerDevice for LoggingDevice {
    fn move_relative(&mut self, dx: i64, dy: i64) -> Result<(), DeviceError> {
        if dx.abs() > 1 || dy.abs() > 1 {
            return Err(DeviceError::new(
                "move",
                format!("({}, {}) is larger than one unit", dx, dy),
            ));
        }
        self.position = (self.position.0 + dx, self.position.1 + dy);
        self.moves += 1;
        if self.pressed {
            self.drawn += 1;
        }
        trace!("move ({:+}, {:+}) -> {:?}", dx, dy, self.position);
        Ok(())
    }

    fn button_down(&mut self) -> Result<(), DeviceError> {
        if self.pressed {
            return Err(DeviceError::new("press", "button is already down"));
        }
        self.pressed = true;
        trace!("button down at {:?}", self.position);
        Ok(())
    }

    fn button_up(&mut self) -> Result<(), DeviceError> {
        if !self.pressed {
            return Err(DeviceError::new("release", "button is already up"));
        }
        self.pressed = false;
        trace!("button up at {:?}", self.position);
        Ok(())
    }
}
