pub mod error;
pub mod loader;
pub mod render;
pub mod tour_plot;
pub mod utils;

pub use error::{FieldKind, Result, TourPlotError};
pub use loader::{read_coordinates, read_tour};
pub use render::{plot_tour, RenderOptions};

// constants
pub const VERSION: Option<&'static str> = option_env!("CARGO_PKG_VERSION");
pub const DEFAULT_TITLE: &str = "TSP Tour Order";
pub const DEFAULT_WIDTH: u32 = 1200;
pub const DEFAULT_HEIGHT: u32 = 900;

/// A waypoint as read from the coordinate table, in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Coordinate {
        Coordinate {
            latitude,
            longitude,
        }
    }

    /// Plot position, longitude on x and latitude on y.
    pub fn xy(&self) -> (f64, f64) {
        (self.longitude, self.latitude)
    }
}

/// The visiting order over the coordinate indices.
/// Always closed: the last stop repeats the first one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tour {
    pub stops: Vec<i64>,
}

impl Tour {
    /// Close the given visiting order by appending its first stop.
    /// Return None for an empty order, there is nothing to close.
    pub fn close(mut open: Vec<i64>) -> Option<Tour> {
        let first = *open.first()?;
        open.push(first);
        Some(Tour { stops: open })
    }

    /// The stops without the closing duplicate.
    pub fn visited(&self) -> &[i64] {
        &self.stops[..self.stops.len().saturating_sub(1)]
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

/// Map each stop of the tour to its (longitude, latitude) plot position.
/// Out of range indices fail here, negative ones included, they never wrap.
pub fn tour_points(coords: &[Coordinate], tour: &Tour) -> Result<Vec<(f64, f64)>> {
    tour.stops
        .iter()
        .map(|&index| {
            usize::try_from(index)
                .ok()
                .and_then(|i| coords.get(i))
                .map(Coordinate::xy)
                .ok_or(TourPlotError::IndexOutOfRange {
                    index,
                    len: coords.len(),
                })
        })
        .collect()
}
