#![allow(dead_code)]

use std::{cell::RefCell, rc::Rc};

use embedded_hal::{
	delay::DelayNs,
	digital::{self, ErrorKind, ErrorType, OutputPin},
};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Line {
	Data,
	Clock,
	Latch,
}

/// Every level write, in order, across all three lines.
#[derive(Clone, Default)]
pub struct Bus(Rc<RefCell<Vec<(Line, bool)>>>);

impl Bus {
	pub fn pin(&self, line: Line) -> FakePin {
		FakePin { line, bus: self.clone(), fail_after: None }
	}

	pub fn writes(&self) -> Vec<(Line, bool)> {
		self.0.borrow().clone()
	}

	pub fn take(&self) -> Vec<(Line, bool)> {
		self.0.borrow_mut().drain(..).collect()
	}
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PinFault;

impl digital::Error for PinFault {
	fn kind(&self) -> ErrorKind {
		ErrorKind::Other
	}
}

pub struct FakePin {
	line: Line,
	bus: Bus,
	fail_after: Option<usize>,
}

impl FakePin {
	/// Succeeds `writes` times, then every write fails.
	pub fn failing_after(mut self, writes: usize) -> Self {
		self.fail_after = Some(writes);
		self
	}

	fn write(&mut self, level: bool) -> Result<(), PinFault> {
		match self.fail_after {
			Some(0) => return Err(PinFault),
			Some(ref mut left) => *left -= 1,
			None => {}
		}
		self.bus.0.borrow_mut().push((self.line, level));
		Ok(())
	}
}

impl ErrorType for FakePin {
	type Error = PinFault;
}

impl OutputPin for FakePin {
	fn set_low(&mut self) -> Result<(), Self::Error> {
		self.write(false)
	}

	fn set_high(&mut self) -> Result<(), Self::Error> {
		self.write(true)
	}
}

/// Records every requested delay in nanoseconds.
#[derive(Default)]
pub struct FakeDelay {
	pub waits_ns: Vec<u64>,
}

impl DelayNs for FakeDelay {
	fn delay_ns(&mut self, ns: u32) {
		self.waits_ns.push(u64::from(ns));
	}

	fn delay_ms(&mut self, ms: u32) {
		self.waits_ns.push(u64::from(ms) * 1_000_000);
	}
}

/// What the register would have seen for one transaction.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Transaction {
	/// Data level at each rising clock edge.
	pub sampled: Vec<bool>,
	pub clock_writes: usize,
	pub latch_pulses: usize,
}

impl Transaction {
	pub fn byte(&self) -> u8 {
		self.sampled.iter().fold(0, |acc, &bit| (acc << 1) | u8::from(bit))
	}
}

/// Splits a write log into transactions, one per latch pulse.
pub fn decode(writes: &[(Line, bool)]) -> Vec<Transaction> {
	let mut done = Vec::new();
	let mut current = Transaction::default();
	let mut data = false;
	let mut clock = false;
	let mut latch = false;
	for &(line, level) in writes {
		match line {
			Line::Data => data = level,
			Line::Clock => {
				current.clock_writes += 1;
				if level && !clock {
					current.sampled.push(data);
				}
				clock = level;
			}
			Line::Latch => {
				if !level && latch {
					current.latch_pulses += 1;
					done.push(std::mem::take(&mut current));
				}
				latch = level;
			}
		}
	}
	if current != Transaction::default() {
		done.push(current);
	}
	done
}
