use std::fmt;

/// Row layout
pub const ROW_WIDTH: usize = 12; // seats + aisles
pub const AISLE_COUNT: usize = 2;
pub const SEATS_PER_ROW: usize = ROW_WIDTH - AISLE_COUNT;
pub const SECTIONS_PER_ROW: usize = AISLE_COUNT + 1;
pub const MAX_ROWS: usize = 10_000;

/// Occupancy of one position in a cabin row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    Unreserved, // 0
    Reserved,   // 1
    Aisle,      // 2
}

impl Marker {
    pub fn code(self) -> u8 {
        match self {
            Marker::Unreserved => 0,
            Marker::Reserved => 1,
            Marker::Aisle => 2,
        }
    }

    pub fn is_free(self) -> bool {
        self == Marker::Unreserved
    }

    pub fn is_aisle(self) -> bool {
        self == Marker::Aisle
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Marker::Aisle => write!(f, "-"),
            other => write!(f, "{}", other.code()),
        }
    }
}

/// Unreserved row, identical for every row of the cabin.
///
/// ```text
/// [A][B][C] | [D][E][F][G] | [H][J][K]
/// ```
pub const ROW_TEMPLATE: [Marker; ROW_WIDTH] = [
    Marker::Unreserved,
    Marker::Unreserved,
    Marker::Unreserved,
    Marker::Aisle,
    Marker::Unreserved,
    Marker::Unreserved,
    Marker::Unreserved,
    Marker::Unreserved,
    Marker::Aisle,
    Marker::Unreserved,
    Marker::Unreserved,
    Marker::Unreserved,
];

/// Seat letters. There is no seat `I`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeatLetter {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    J,
    K,
}

impl SeatLetter {
    pub const ALL: [SeatLetter; SEATS_PER_ROW] = [
        SeatLetter::A,
        SeatLetter::B,
        SeatLetter::C,
        SeatLetter::D,
        SeatLetter::E,
        SeatLetter::F,
        SeatLetter::G,
        SeatLetter::H,
        SeatLetter::J,
        SeatLetter::K,
    ];

    pub fn from_char(c: char) -> Option<Self> {
        use SeatLetter::*;
        match c {
            'A' => Some(A),
            'B' => Some(B),
            'C' => Some(C),
            'D' => Some(D),
            'E' => Some(E),
            'F' => Some(F),
            'G' => Some(G),
            'H' => Some(H),
            'J' => Some(J),
            'K' => Some(K),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        use SeatLetter::*;
        match self {
            A => 'A',
            B => 'B',
            C => 'C',
            D => 'D',
            E => 'E',
            F => 'F',
            G => 'G',
            H => 'H',
            J => 'J',
            K => 'K',
        }
    }

    /// Index of the seat in [`ROW_TEMPLATE`].
    pub fn row_position(self) -> usize {
        use SeatLetter::*;
        match self {
            A => 0,
            B => 1,
            C => 2,
            D => 4,
            E => 5,
            F => 6,
            G => 7,
            H => 9,
            J => 10,
            K => 11,
        }
    }

    /// Inverse of [`SeatLetter::row_position`]; `None` for aisle positions.
    pub fn from_row_position(position: usize) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|letter| letter.row_position() == position)
    }

    /// Aisle-delimited section of the row holding this seat.
    pub fn section(self) -> usize {
        use SeatLetter::*;
        match self {
            A | B | C => 0,
            D | E | F | G => 1,
            H | J | K => 2,
        }
    }

    /// Position of the seat inside its section.
    pub fn seat_in_section(self) -> usize {
        use SeatLetter::*;
        match self {
            A | D | H => 0,
            B | E | J => 1,
            C | F | K => 2,
            G => 3,
        }
    }
}

impl fmt::Display for SeatLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A single seat: zero-based row index plus letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeatRef {
    pub row: usize,
    pub letter: SeatLetter,
}

impl SeatRef {
    pub fn new(row: usize, letter: SeatLetter) -> Self {
        Self { row, letter }
    }
}

// Displays as the reservation token, with a 1-based row number
impl fmt::Display for SeatRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row + 1, self.letter)
    }
}
