use crate::{
    cabin::CabinMap,
    seat::{Marker, SeatLetter},
};

const COLUMN_SEPARATOR: &str = "\t";

/// Formats rows of cells as a table, padding each cell to the widest cell
/// of its column. The table starts on a new line.
pub fn format_table(rows: &[Vec<String>]) -> String {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|col| {
            rows.iter()
                .filter_map(|row| row.get(col))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut table = String::new();
    for row in rows {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect();
        table.push('\n');
        table.push_str(&line.join(COLUMN_SEPARATOR));
    }
    table
}

fn marker_cells(cabin: &dyn CabinMap, row: usize) -> Vec<String> {
    cabin
        .row_markers(row)
        .into_iter()
        .map(|marker| marker.to_string())
        .collect()
}

/// One line per row: `0` free, `1` reserved, `-` aisle.
pub fn render(cabin: &dyn CabinMap) -> String {
    let rows: Vec<Vec<String>> = (0..cabin.rows())
        .map(|row| marker_cells(cabin, row))
        .collect();
    format_table(&rows)
}

/// Like [`render`], with a header of seat letters and the row number in
/// the first column.
pub fn render_labeled(cabin: &dyn CabinMap) -> String {
    let Some(width) = (0..cabin.rows()).map(|row| cabin.row_markers(row).len()).max() else {
        return String::new();
    };

    let mut header = vec![String::new()];
    header.extend((0..width).map(|position| match SeatLetter::from_row_position(position) {
        Some(letter) => letter.to_string(),
        None => Marker::Aisle.to_string(),
    }));

    let mut rows = vec![header];
    for row in 0..cabin.rows() {
        let mut cells = vec![(row + 1).to_string()];
        cells.extend(marker_cells(cabin, row));
        rows.push(cells);
    }
    format_table(&rows)
}
