#![no_std]

use arduino_hal::{
	hal::port::{PD5, PD6, PD7},
	port::{mode::Output, Pin},
};
use segment_common::{HexDisplay, ShiftRegister};

pub const BAUD_RATE: u32 = 57600;
/// How long each symbol stays on the display.
pub const HOLD_MS: u32 = 1000;

/// SER on D5, SRCLK on D6, RCLK on D7.
pub type UnoDisplay = HexDisplay<Pin<Output, PD5>, Pin<Output, PD6>, Pin<Output, PD7>>;

pub fn display(ser: Pin<Output, PD5>, srclk: Pin<Output, PD6>, rclk: Pin<Output, PD7>) -> UnoDisplay {
	HexDisplay::new(ShiftRegister::new(ser, srclk, rclk))
}
