use core::convert::Infallible;

use embedded_hal::{delay::DelayNs, digital::OutputPin};

use crate::{segment::Symbol, shift_register::ShiftRegister};

/// A single eight-segment digit hanging off a [`ShiftRegister`].
pub struct HexDisplay<D, C, L> {
	register: ShiftRegister<D, C, L>,
}

impl<E, D, C, L> HexDisplay<D, C, L>
where
	D: OutputPin<Error = E>,
	C: OutputPin<Error = E>,
	L: OutputPin<Error = E>,
{
	pub fn new(register: ShiftRegister<D, C, L>) -> Self {
		Self { register }
	}

	pub fn show(&mut self, symbol: Symbol) -> Result<(), E> {
		self.register.push_pattern(symbol.pattern())
	}

	pub fn clear(&mut self) -> Result<(), E> {
		self.register.clear()
	}

	/// Shows every symbol once, in index order, holding each for `hold_ms`.
	///
	/// `on_show` is called right before a symbol is pushed, the firmware uses
	/// it to trace over serial.
	pub fn cycle_once<Dl: DelayNs>(
		&mut self,
		delay: &mut Dl,
		hold_ms: u32,
		mut on_show: impl FnMut(Symbol),
	) -> Result<(), E> {
		for symbol in Symbol::ALL {
			on_show(symbol);
			self.show(symbol)?;
			delay.delay_ms(hold_ms);
		}
		Ok(())
	}

	/// Blanks the display once, then cycles forever. Only returns on a pin error.
	pub fn run<Dl: DelayNs>(
		&mut self,
		delay: &mut Dl,
		hold_ms: u32,
		mut on_show: impl FnMut(Symbol),
	) -> Result<Infallible, E> {
		self.clear()?;
		loop {
			self.cycle_once(delay, hold_ms, &mut on_show)?;
		}
	}

	pub fn release(self) -> ShiftRegister<D, C, L> {
		self.register
	}
}
