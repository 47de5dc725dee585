//! Cabin occupancy maps.
//!
//! Two storages share the [`CabinMap`] interface: [`FlatCabin`] keeps every
//! row (aisles included) in one vector, [`SectionedCabin`] keeps the
//! aisle-delimited sections of each row as separate vectors.

use crate::{
    error::{ReservationError, Result},
    seat::{MAX_ROWS, Marker, ROW_TEMPLATE, ROW_WIDTH, SECTIONS_PER_ROW, SeatRef},
};
use clap::ValueEnum;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CabinLayout {
    #[default]
    Flat,
    Sectioned,
}

impl fmt::Display for CabinLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CabinLayout::Flat => write!(f, "flat"),
            CabinLayout::Sectioned => write!(f, "sectioned"),
        }
    }
}

pub trait CabinMap {
    fn rows(&self) -> usize;

    /// Current marker of a seat, `None` if the row is outside the cabin.
    fn marker(&self, seat: SeatRef) -> Option<Marker>;

    /// Marks a seat reserved. Returns `true` if the seat was free before.
    fn reserve(&mut self, seat: SeatRef) -> Result<bool>;

    /// Aisle-delimited segments of one row, in seat order.
    fn row_segments(&self, row: usize) -> Vec<&[Marker]>;

    /// The full row with aisle markers between segments.
    fn row_markers(&self, row: usize) -> Vec<Marker> {
        let mut markers = Vec::with_capacity(ROW_WIDTH);
        for (i, segment) in self.row_segments(row).into_iter().enumerate() {
            if i > 0 {
                markers.push(Marker::Aisle);
            }
            markers.extend_from_slice(segment);
        }
        markers
    }

    fn count(&self, marker: Marker) -> usize {
        (0..self.rows())
            .flat_map(|row| self.row_markers(row))
            .filter(|m| *m == marker)
            .count()
    }

    fn free_seats_in_row(&self, row: usize) -> usize {
        self.row_segments(row)
            .iter()
            .map(|segment| segment.iter().filter(|m| m.is_free()).count())
            .sum()
    }
}

fn check_rows(rows: usize) -> Result<()> {
    if rows == 0 {
        return Err(ReservationError::InvalidConfiguration(
            "number of rows must be at least 1".to_string(),
        ));
    }
    if rows > MAX_ROWS {
        return Err(ReservationError::InvalidConfiguration(format!(
            "number of rows must be at most {MAX_ROWS}, got {rows}"
        )));
    }
    Ok(())
}

fn seat_out_of_range(seat: SeatRef, rows: usize) -> ReservationError {
    ReservationError::RowOutOfRange {
        token: seat.to_string(),
        row: seat.row + 1,
        rows,
    }
}

pub fn build_cabin(layout: CabinLayout, rows: usize) -> Result<Box<dyn CabinMap>> {
    let cabin: Box<dyn CabinMap> = match layout {
        CabinLayout::Flat => Box::new(FlatCabin::build(rows)?),
        CabinLayout::Sectioned => Box::new(SectionedCabin::build(rows)?),
    };
    Ok(cabin)
}

/// Every row laid end to end in one vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatCabin {
    rows: usize,
    markers: Vec<Marker>,
}

impl FlatCabin {
    pub fn build(rows: usize) -> Result<Self> {
        check_rows(rows)?;
        Ok(Self {
            rows,
            markers: ROW_TEMPLATE.repeat(rows),
        })
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    fn offset(seat: SeatRef) -> usize {
        seat.row * ROW_WIDTH + seat.letter.row_position()
    }

    fn row(&self, row: usize) -> &[Marker] {
        let start = row * ROW_WIDTH;
        &self.markers[start..start + ROW_WIDTH]
    }
}

impl CabinMap for FlatCabin {
    fn rows(&self) -> usize {
        self.rows
    }

    fn marker(&self, seat: SeatRef) -> Option<Marker> {
        if seat.row >= self.rows {
            return None;
        }
        self.markers.get(Self::offset(seat)).copied()
    }

    fn reserve(&mut self, seat: SeatRef) -> Result<bool> {
        if seat.row >= self.rows {
            return Err(seat_out_of_range(seat, self.rows));
        }
        let slot = &mut self.markers[Self::offset(seat)];
        let was_free = slot.is_free();
        *slot = Marker::Reserved;
        Ok(was_free)
    }

    fn row_segments(&self, row: usize) -> Vec<&[Marker]> {
        if row >= self.rows {
            return Vec::new();
        }
        self.row(row).split(|m| m.is_aisle()).collect()
    }

    fn row_markers(&self, row: usize) -> Vec<Marker> {
        if row >= self.rows {
            return Vec::new();
        }
        self.row(row).to_vec()
    }
}

/// Each row stored as its aisle-delimited sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionedCabin {
    rows: usize,
    sections: Vec<Vec<Marker>>,
}

impl SectionedCabin {
    pub fn build(rows: usize) -> Result<Self> {
        check_rows(rows)?;
        let mut sections = Vec::with_capacity(rows * SECTIONS_PER_ROW);
        for _ in 0..rows {
            sections.extend(ROW_TEMPLATE.split(|m| m.is_aisle()).map(<[Marker]>::to_vec));
        }
        Ok(Self { rows, sections })
    }

    pub fn sections(&self) -> &[Vec<Marker>] {
        &self.sections
    }

    fn section_offset(seat: SeatRef) -> usize {
        seat.row * SECTIONS_PER_ROW + seat.letter.section()
    }
}

impl CabinMap for SectionedCabin {
    fn rows(&self) -> usize {
        self.rows
    }

    fn marker(&self, seat: SeatRef) -> Option<Marker> {
        if seat.row >= self.rows {
            return None;
        }
        self.sections
            .get(Self::section_offset(seat))?
            .get(seat.letter.seat_in_section())
            .copied()
    }

    fn reserve(&mut self, seat: SeatRef) -> Result<bool> {
        if seat.row >= self.rows {
            return Err(seat_out_of_range(seat, self.rows));
        }
        let section = &mut self.sections[Self::section_offset(seat)];
        let slot = &mut section[seat.letter.seat_in_section()];
        let was_free = slot.is_free();
        *slot = Marker::Reserved;
        Ok(was_free)
    }

    fn row_segments(&self, row: usize) -> Vec<&[Marker]> {
        if row >= self.rows {
            return Vec::new();
        }
        let start = row * SECTIONS_PER_ROW;
        self.sections[start..start + SECTIONS_PER_ROW]
            .iter()
            .map(Vec::as_slice)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seat::{AISLE_COUNT, SEATS_PER_ROW, SeatLetter};

    #[test]
    fn test_build_rejects_zero_rows() {
        assert!(matches!(
            FlatCabin::build(0),
            Err(ReservationError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            SectionedCabin::build(0),
            Err(ReservationError::InvalidConfiguration(_))
        ));
        assert!(build_cabin(CabinLayout::Sectioned, 0).is_err());
    }

    #[test]
    fn test_build_rejects_too_many_rows() {
        for rows in [MAX_ROWS + 1, usize::MAX / 4, usize::MAX] {
            for layout in [CabinLayout::Flat, CabinLayout::Sectioned] {
                assert!(matches!(
                    build_cabin(layout, rows),
                    Err(ReservationError::InvalidConfiguration(_))
                ));
            }
        }
        let cabin = FlatCabin::build(MAX_ROWS).unwrap();
        assert_eq!(cabin.rows(), MAX_ROWS);
    }

    #[test]
    fn test_unreserved_marker_counts() {
        for rows in [1, 2, 7, 40] {
            for layout in [CabinLayout::Flat, CabinLayout::Sectioned] {
                let cabin = build_cabin(layout, rows).unwrap();
                assert_eq!(cabin.rows(), rows);
                assert_eq!(cabin.count(Marker::Unreserved), rows * SEATS_PER_ROW);
                assert_eq!(cabin.count(Marker::Aisle), rows * AISLE_COUNT);
                assert_eq!(cabin.count(Marker::Reserved), 0);
            }
        }
    }

    #[test]
    fn test_flat_cabin_is_template_repeated() {
        let cabin = FlatCabin::build(3).unwrap();
        assert_eq!(cabin.markers().len(), 3 * ROW_WIDTH);
        for chunk in cabin.markers().chunks(ROW_WIDTH) {
            assert_eq!(chunk, ROW_TEMPLATE);
        }
    }

    #[test]
    fn test_sectioned_cabin_shape() {
        let cabin = SectionedCabin::build(2).unwrap();
        let widths: Vec<usize> = cabin.sections().iter().map(Vec::len).collect();
        assert_eq!(widths, vec![3, 4, 3, 3, 4, 3]);
    }

    #[test]
    fn test_reserve_flat_offset() {
        let mut cabin = FlatCabin::build(2).unwrap();
        let seat = SeatRef::new(1, SeatLetter::F);
        assert!(cabin.reserve(seat).unwrap());
        assert_eq!(cabin.markers()[ROW_WIDTH + 6], Marker::Reserved);
        assert_eq!(cabin.marker(seat), Some(Marker::Reserved));
        assert_eq!(cabin.count(Marker::Reserved), 1);
    }

    #[test]
    fn test_reserve_sectioned_offset() {
        let mut cabin = SectionedCabin::build(2).unwrap();
        let seat = SeatRef::new(1, SeatLetter::G);
        assert!(cabin.reserve(seat).unwrap());
        assert_eq!(cabin.sections()[4][3], Marker::Reserved);
        assert_eq!(cabin.marker(seat), Some(Marker::Reserved));
    }

    #[test]
    fn test_reserve_twice_is_idempotent() {
        for layout in [CabinLayout::Flat, CabinLayout::Sectioned] {
            let mut cabin = build_cabin(layout, 1).unwrap();
            let seat = SeatRef::new(0, SeatLetter::A);
            assert!(cabin.reserve(seat).unwrap());
            assert!(!cabin.reserve(seat).unwrap());
            assert_eq!(cabin.count(Marker::Reserved), 1);
        }
    }

    #[test]
    fn test_reserve_outside_cabin() {
        let mut cabin = FlatCabin::build(1).unwrap();
        let seat = SeatRef::new(1, SeatLetter::A);
        assert!(matches!(
            cabin.reserve(seat),
            Err(ReservationError::RowOutOfRange { row: 2, rows: 1, .. })
        ));
        assert_eq!(cabin.marker(seat), None);
    }

    #[test]
    fn test_cabins_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FlatCabin>();
        assert_send_sync::<SectionedCabin>();
    }

    #[test]
    fn test_layouts_agree_on_row_view() {
        let mut flat = FlatCabin::build(2).unwrap();
        let mut sectioned = SectionedCabin::build(2).unwrap();
        for seat in [
            SeatRef::new(0, SeatLetter::C),
            SeatRef::new(1, SeatLetter::D),
            SeatRef::new(1, SeatLetter::K),
        ] {
            flat.reserve(seat).unwrap();
            sectioned.reserve(seat).unwrap();
        }
        for row in 0..2 {
            assert_eq!(flat.row_markers(row), sectioned.row_markers(row));
            assert_eq!(flat.row_segments(row), sectioned.row_segments(row));
        }
        assert_eq!(flat.free_seats_in_row(1), 8);
        assert!(flat.row_segments(2).is_empty());
    }
}
