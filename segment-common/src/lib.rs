#![cfg_attr(not(test), no_std)]

//! Board independent pieces of the hex digit cycler: the symbol table,
//! the bit-banged shift register and the display loop built on top of them.
//!
//! Everything here talks to hardware only through `embedded-hal` traits, so
//! it runs the same on the Uno and in host tests.

pub mod display;
pub mod segment;
pub mod shift_register;

pub use display::HexDisplay;
pub use segment::{Segment, SegmentError, SegmentPattern, Symbol, SEGMENT_TABLE};
pub use shift_register::ShiftRegister;
