use embedded_hal::digital::{OutputPin, PinState};

use crate::segment::SegmentPattern;

/// A 74HC595 style serial-in/parallel-out register on three output pins.
///
/// `data` goes to SER, `clock` to SRCLK and `latch` to RCLK. The register's
/// own clear input (SRCLR) isn't wired, [`ShiftRegister::clear`] shifts in
/// zeros instead.
pub struct ShiftRegister<D, C, L> {
	data: D,
	clock: C,
	latch: L,
}

impl<E, D, C, L> ShiftRegister<D, C, L>
where
	D: OutputPin<Error = E>,
	C: OutputPin<Error = E>,
	L: OutputPin<Error = E>,
{
	pub fn new(data: D, clock: C, latch: L) -> Self {
		Self { data, clock, latch }
	}

	/// Shifts `value` in MSB first and latches it to the outputs.
	///
	/// Always 8 clock pulses followed by a single latch pulse. The register
	/// samples data on the rising clock edge.
	pub fn push_byte_and_latch(&mut self, mut value: u8) -> Result<(), E> {
		for _ in 0..8 {
			self.data.set_state(PinState::from(value & 0x80 != 0))?;
			self.clock.set_high()?;
			self.clock.set_low()?;
			value <<= 1;
		}

		self.latch.set_high()?;
		self.latch.set_low()
	}

	pub fn push_pattern(&mut self, pattern: SegmentPattern) -> Result<(), E> {
		self.push_byte_and_latch(pattern.bits())
	}

	/// Blanks every output.
	pub fn clear(&mut self) -> Result<(), E> {
		self.push_byte_and_latch(0b0000_0000)
	}

	/// Gives the pins back.
	pub fn release(self) -> (D, C, L) {
		(self.data, self.clock, self.latch)
	}
}
