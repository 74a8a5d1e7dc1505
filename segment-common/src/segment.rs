use core::fmt;

use ufmt::derive::uDebug;

/// One bit of a segment pattern. Bit 0 is segment `a`, bit 7 the decimal point.
#[derive(Clone, Copy, PartialEq, Eq, Debug, uDebug)]
#[repr(u8)]
pub enum Segment {
	A = 0,
	B,
	C,
	D,
	E,
	F,
	G,
	Dp,
}

impl Segment {
	pub const fn mask(self) -> u8 {
		1 << self as u8
	}
}

/// Which segments of the display are lit, one bit each.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug, uDebug)]
pub struct SegmentPattern(u8);

impl SegmentPattern {
	/// Every segment off.
	pub const BLANK: Self = Self(0);

	pub const fn from_bits(bits: u8) -> Self {
		Self(bits)
	}

	pub const fn bits(self) -> u8 {
		self.0
	}

	pub const fn is_lit(self, segment: Segment) -> bool {
		self.0 & segment.mask() != 0
	}

	/// Same pattern with the decimal point turned on as well.
	pub const fn with_decimal_point(self) -> Self {
		Self(self.0 | Segment::Dp.mask())
	}
}

impl From<SegmentPattern> for u8 {
	fn from(pattern: SegmentPattern) -> u8 {
		pattern.0
	}
}

/// Everything the display can show. The discriminant is the row in
/// [`SEGMENT_TABLE`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, uDebug)]
#[repr(u8)]
pub enum Symbol {
	Zero = 0,
	One,
	Two,
	Three,
	Four,
	Five,
	Six,
	Seven,
	Eight,
	Nine,
	A,
	B,
	C,
	D,
	E,
	F,
	Dot,
}

impl Symbol {
	pub const COUNT: usize = 17;

	/// Display order: 0-9, A-F, then the lone decimal point.
	pub const ALL: [Symbol; Symbol::COUNT] = [
		Symbol::Zero,
		Symbol::One,
		Symbol::Two,
		Symbol::Three,
		Symbol::Four,
		Symbol::Five,
		Symbol::Six,
		Symbol::Seven,
		Symbol::Eight,
		Symbol::Nine,
		Symbol::A,
		Symbol::B,
		Symbol::C,
		Symbol::D,
		Symbol::E,
		Symbol::F,
		Symbol::Dot,
	];

	pub const fn index(self) -> u8 {
		self as u8
	}

	pub const fn pattern(self) -> SegmentPattern {
		SEGMENT_TABLE[self as usize]
	}

	/// Checked lookup for indexes coming from outside the fixed display loop.
	pub fn from_index(index: u8) -> Result<Self, SegmentError> {
		Symbol::ALL
			.get(usize::from(index))
			.copied()
			.ok_or(SegmentError::IndexOutOfRange(index))
	}

	/// Maps a nibble (0..=15) to its hex digit.
	pub fn from_hex_digit(nibble: u8) -> Result<Self, SegmentError> {
		if nibble > 0x0F {
			return Err(SegmentError::NotAHexDigit(nibble));
		}
		Self::from_index(nibble)
	}

	/// The glyph as it looks on the display (lowercase `b` and `d`).
	pub const fn as_char(self) -> char {
		match self {
			Symbol::Zero => '0',
			Symbol::One => '1',
			Symbol::Two => '2',
			Symbol::Three => '3',
			Symbol::Four => '4',
			Symbol::Five => '5',
			Symbol::Six => '6',
			Symbol::Seven => '7',
			Symbol::Eight => '8',
			Symbol::Nine => '9',
			Symbol::A => 'A',
			Symbol::B => 'b',
			Symbol::C => 'C',
			Symbol::D => 'd',
			Symbol::E => 'E',
			Symbol::F => 'F',
			Symbol::Dot => '.',
		}
	}
}

impl TryFrom<u8> for Symbol {
	type Error = SegmentError;

	fn try_from(index: u8) -> Result<Self, Self::Error> {
		Self::from_index(index)
	}
}

/// Segment patterns for a common cathode display, indexed by [`Symbol`].
pub const SEGMENT_TABLE: [SegmentPattern; Symbol::COUNT] = [
	SegmentPattern(0b0011_1111), // 0
	SegmentPattern(0b0000_0110), // 1
	SegmentPattern(0b0101_1011), // 2
	SegmentPattern(0b0100_1111), // 3
	SegmentPattern(0b0110_0110), // 4
	SegmentPattern(0b0110_1101), // 5
	SegmentPattern(0b0111_1101), // 6
	SegmentPattern(0b0000_0111), // 7
	SegmentPattern(0b0111_1111), // 8
	SegmentPattern(0b0110_0111), // 9
	SegmentPattern(0b0111_0111), // A
	SegmentPattern(0b0111_1100), // b
	SegmentPattern(0b0011_1001), // C
	SegmentPattern(0b0101_1110), // d
	SegmentPattern(0b0111_1001), // E
	SegmentPattern(0b0111_0001), // F
	SegmentPattern(0b1000_0000), // .
];

// Symbol::ALL must list every symbol at its own discriminant, otherwise
// `pattern()` and `from_index()` would disagree.
const _: () = {
	let mut i = 0;
	while i < Symbol::COUNT {
		assert!(Symbol::ALL[i] as usize == i);
		i += 1;
	}
};

#[derive(Clone, Copy, PartialEq, Eq, Debug, uDebug)]
pub enum SegmentError {
	IndexOutOfRange(u8),
	NotAHexDigit(u8),
}

impl fmt::Display for SegmentError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::IndexOutOfRange(index) => write!(f, "no symbol at index {index}"),
			Self::NotAHexDigit(nibble) => write!(f, "{nibble} is not a hex digit"),
		}
	}
}

impl ufmt::uDisplay for SegmentError {
	fn fmt<W>(&self, f: &mut ufmt::Formatter<'_, W>) -> Result<(), W::Error>
	where
		W: ufmt::uWrite + ?Sized,
	{
		match self {
			Self::IndexOutOfRange(index) => {
				f.write_str("no symbol at index ")?;
				ufmt::uDisplay::fmt(index, f)
			}
			Self::NotAHexDigit(nibble) => {
				ufmt::uDisplay::fmt(nibble, f)?;
				f.write_str(" is not a hex digit")
			}
		}
	}
}
