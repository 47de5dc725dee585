pub mod cabin;
pub mod config;
pub mod error;
pub mod grouping;
pub mod render;
pub mod report;
pub mod reservation;
pub mod seat;

pub use cabin::{CabinLayout, CabinMap, FlatCabin, SectionedCabin, build_cabin};
pub use config::{Args, Config};
pub use error::{ReservationError, Result};
pub use grouping::{GroupingPolicy, count_groups, widest_free_run};
pub use render::{render, render_labeled};
pub use report::{LogSink, MemorySink, ReportSink, RunOutcome, run};
pub use reservation::{ReservationSummary, apply_reservations, parse_reservations};
pub use seat::{Marker, SeatLetter, SeatRef};
