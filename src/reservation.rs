use crate::{
    cabin::CabinMap,
    error::{ReservationError, Result},
    seat::{SeatLetter, SeatRef},
};

const TOKEN_SEPARATOR: char = ' ';

/// Outcome of applying a reservation string to a cabin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservationSummary {
    /// Seats in the order they were requested, duplicates included.
    pub seats: Vec<SeatRef>,
    /// Seats that went from unreserved to reserved.
    pub newly_reserved: usize,
}

impl ReservationSummary {
    pub fn requested(&self) -> usize {
        self.seats.len()
    }
}

/// Parses one `<row><letter>` token, e.g. `12K`, for a cabin of `rows` rows.
pub fn parse_token(token: &str, rows: usize) -> Result<SeatRef> {
    let Some(last) = token.chars().next_back() else {
        return Err(ReservationError::EmptyToken {
            input: token.to_string(),
        });
    };
    let letter = SeatLetter::from_char(last).ok_or_else(|| ReservationError::InvalidSeatLetter {
        token: token.to_string(),
        letter: last,
    })?;

    let row_part = &token[..token.len() - last.len_utf8()];
    let row: usize = row_part
        .parse()
        .map_err(|source| ReservationError::InvalidRowNumber {
            token: token.to_string(),
            source,
        })?;
    if row == 0 || row > rows {
        return Err(ReservationError::RowOutOfRange {
            token: token.to_string(),
            row,
            rows,
        });
    }

    Ok(SeatRef::new(row - 1, letter))
}

/// Parses a space separated reservation string. An empty string holds no
/// reservations; any bad token fails the whole string.
pub fn parse_reservations(input: &str, rows: usize) -> Result<Vec<SeatRef>> {
    if input.is_empty() {
        return Ok(Vec::new());
    }
    input
        .split(TOKEN_SEPARATOR)
        .map(|token| {
            if token.is_empty() {
                Err(ReservationError::EmptyToken {
                    input: input.to_string(),
                })
            } else {
                parse_token(token, rows)
            }
        })
        .collect()
}

/// Reserves every seat named in `input`. Nothing is written unless all
/// tokens parse.
pub fn apply_reservations(cabin: &mut dyn CabinMap, input: &str) -> Result<ReservationSummary> {
    let seats = parse_reservations(input, cabin.rows())?;
    let mut newly_reserved = 0;
    for seat in &seats {
        if cabin.reserve(*seat)? {
            newly_reserved += 1;
        }
    }
    Ok(ReservationSummary {
        seats,
        newly_reserved,
    })
}
