use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which field of an input file could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Latitude,
    Longitude,
    TourIndex,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            FieldKind::Latitude => "latitude",
            FieldKind::Longitude => "longitude",
            FieldKind::TourIndex => "tour index",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Error)]
pub enum TourPlotError {
    #[error("expected exactly 3 positional arguments")]
    Usage,

    #[error("could not access {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not read csv {path:?}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{path:?}, data line {line}: could not parse {kind} from '{value}'")]
    Parse {
        path: PathBuf,
        line: usize,
        kind: FieldKind,
        value: String,
    },

    #[error("tour file {path:?} has no stops after the header line")]
    EmptyTour { path: PathBuf },

    #[error("tour index {index} is out of range for {len} coordinates")]
    IndexOutOfRange { index: i64, len: usize },

    #[error("could not render the tour: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, TourPlotError>;
