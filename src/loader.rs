use crate::error::{FieldKind, Result, TourPlotError};
use crate::{Coordinate, Tour};
use log::{debug, warn};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Read the waypoints from a comma separated table.
/// The first line is always skipped as header,
/// then the first two fields of each row are latitude and longitude.
/// Extra columns are ignored and the values are not range checked.
pub fn read_coordinates<P>(fin: P) -> Result<Vec<Coordinate>>
where
    P: AsRef<Path>,
{
    let path = fin.as_ref();
    let file = File::open(path).map_err(|source| TourPlotError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let coords = parse_coordinates(BufReader::new(file), path)?;
    debug!("read {} coordinates from {:?}", coords.len(), path);
    Ok(coords)
}

fn parse_coordinates<R: Read>(rdr: R, path: &Path) -> Result<Vec<Coordinate>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(rdr);
    let mut coords: Vec<Coordinate> = Vec::new();
    for (n, record) in reader.records().enumerate() {
        let record = record.map_err(|source| TourPlotError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let line = n + 1;
        let latitude = parse_field(record.get(0), path, line, FieldKind::Latitude)?;
        let longitude = parse_field(record.get(1), path, line, FieldKind::Longitude)?;
        coords.push(Coordinate {
            latitude,
            longitude,
        });
    }
    Ok(coords)
}

fn parse_field(field: Option<&str>, path: &Path, line: usize, kind: FieldKind) -> Result<f64> {
    let value = field.unwrap_or("");
    value.parse::<f64>().map_err(|_| TourPlotError::Parse {
        path: path.to_path_buf(),
        line,
        kind,
        value: value.to_owned(),
    })
}

/// Read the tour order, one stop per line.
/// Blank lines are dropped and the first remaining line (the node count) is skipped;
/// each following line gives the stop as its first whitespace separated token.
/// The returned tour is closed, its first stop is repeated at the end.
pub fn read_tour<P>(fin: P) -> Result<Tour>
where
    P: AsRef<Path>,
{
    let path = fin.as_ref();
    let mut text = String::new();
    File::open(path)
        .and_then(|mut f| f.read_to_string(&mut text))
        .map_err(|source| TourPlotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    let tour = parse_tour(&text, path)?;
    debug!("read tour of {} stops from {:?}", tour.visited().len(), path);
    Ok(tour)
}

fn parse_tour(text: &str, path: &Path) -> Result<Tour> {
    let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());
    let header = lines.next();
    let mut stops: Vec<i64> = Vec::new();
    for (n, l) in lines.enumerate() {
        let token = l.split_whitespace().next().unwrap_or(l);
        let stop = token.parse::<i64>().map_err(|_| TourPlotError::Parse {
            path: path.to_path_buf(),
            line: n + 1,
            kind: FieldKind::TourIndex,
            value: token.to_owned(),
        })?;
        stops.push(stop);
    }
    if let Some(count) = header.and_then(header_count) {
        if count != stops.len() {
            warn!(
                "tour header of {:?} announces {} stops but {} were found",
                path,
                count,
                stops.len()
            );
        }
    }
    Tour::close(stops).ok_or_else(|| TourPlotError::EmptyTour {
        path: path.to_path_buf(),
    })
}

/// Node count announced by the tour header, None when the header is not a count.
fn header_count(header: &str) -> Option<usize> {
    header.split_whitespace().next()?.parse::<usize>().ok()
}
