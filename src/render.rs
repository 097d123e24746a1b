use crate::error::{Result, TourPlotError};
use crate::utils::{arrow_between, min_and_max, padded_range};
use crate::{tour_points, Coordinate, Tour, DEFAULT_HEIGHT, DEFAULT_TITLE, DEFAULT_WIDTH};
use log::{debug, info};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

const TOUR_COLOR: RGBColor = RGBColor(31, 119, 180);

/// Look of the rendered tour.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// fraction of the data span added on each side of both axes
    pub margin_ratio: f64,
    pub marker_radius: i32,
    pub label_size: f64,
    /// label position relative to its marker, in pixels
    pub label_offset: (i32, i32),
    pub arrow_head_len: f64,
    pub arrow_head_half_width: f64,
}

impl Default for RenderOptions {
    fn default() -> RenderOptions {
        RenderOptions {
            title: DEFAULT_TITLE.to_string(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            margin_ratio: 0.08,
            marker_radius: 5,
            label_size: 16.,
            label_offset: (7, -20),
            arrow_head_len: 12.,
            arrow_head_half_width: 5.,
        }
    }
}

/// Plot the closed tour over the coordinates and save it to fout.
/// The extension selects the output: svg for vector graphics,
/// otherwise a bitmap encoded after the extension (png, jpg, bmp, ...).
/// Any existing file at fout is overwritten.
/// The inputs are only borrowed, nothing is written when a stop is out of range.
pub fn plot_tour<P>(coords: &[Coordinate], tour: &Tour, fout: P, opts: &RenderOptions) -> Result<()>
where
    P: AsRef<Path>,
{
    let path = fout.as_ref();
    let points = tour_points(coords, tour)?;
    let size = (opts.width, opts.height);
    let is_svg = path
        .extension()
        .and_then(|e| e.to_str())
        .map_or(false, |e| e.eq_ignore_ascii_case("svg"));
    info!("plot tour of {} stops to {:?}", tour.visited().len(), path);
    if is_svg {
        let root = SVGBackend::new(path, size).into_drawing_area();
        draw_tour(&root, &points, tour.visited(), opts).map_err(render_error)?;
    } else {
        let root = BitMapBackend::new(path, size).into_drawing_area();
        draw_tour(&root, &points, tour.visited(), opts).map_err(render_error)?;
    }
    Ok(())
}

fn render_error<E>(e: DrawingAreaErrorKind<E>) -> TourPlotError
where
    E: std::error::Error + Send + Sync,
{
    TourPlotError::Render(e.to_string())
}

/// Draw arrows, markers and labels on any plotters backend.
/// Labels are given for the visited stops only, the closing duplicate stays unlabelled.
fn draw_tour<DB>(
    root: &DrawingArea<DB, Shift>,
    points: &[(f64, f64)],
    labels: &[i64],
    opts: &RenderOptions,
) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>>
where
    DB: DrawingBackend,
{
    let (xmin, xmax) = min_and_max(points.iter().map(|(x, _)| x)).unwrap_or((0., 0.));
    let (ymin, ymax) = min_and_max(points.iter().map(|(_, y)| y)).unwrap_or((0., 0.));
    let xrange = padded_range(xmin, xmax, opts.margin_ratio);
    let yrange = padded_range(ymin, ymax, opts.margin_ratio);
    debug!("x range {:?}, y range {:?}", xrange, yrange);

    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(root)
        .caption(&opts.title, ("sans-serif", 30))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(xrange, yrange)?;
    chart
        .configure_mesh()
        .light_line_style(&RGBColor(235, 235, 235))
        .bold_line_style(RGBColor(100, 100, 100).mix(0.3).stroke_width(1))
        .label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 20))
        .x_desc("Longitude")
        .y_desc("Latitude")
        .x_label_formatter(&|x: &f64| format!("{:.4}", x))
        .y_label_formatter(&|y: &f64| format!("{:.4}", y))
        .draw()?;

    // arrow geometry is in backend pixels, drawn on the root area
    let pixels: Vec<(i32, i32)> = points.iter().map(|p| chart.backend_coord(p)).collect();
    let gap = opts.marker_radius as f64 + 2.;
    for w in pixels.windows(2) {
        if let Some(arrow) = arrow_between(
            w[0],
            w[1],
            gap,
            opts.arrow_head_len,
            opts.arrow_head_half_width,
        ) {
            root.draw(&PathElement::new(
                arrow.shaft.to_vec(),
                TOUR_COLOR.stroke_width(2),
            ))?;
            root.draw(&Polygon::new(arrow.head.to_vec(), TOUR_COLOR.filled()))?;
        }
    }

    chart.draw_series(
        points
            .iter()
            .map(|&p| Circle::new(p, opts.marker_radius, TOUR_COLOR.filled())),
    )?;

    let font = ("sans-serif", opts.label_size).into_font();
    chart.draw_series(points.iter().zip(labels).map(|(&p, index)| {
        EmptyElement::at(p) + Text::new(index.to_string(), opts.label_offset, font.clone())
    }))?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::{read_coordinates, read_tour};

    fn three_coords() -> Vec<Coordinate> {
        vec![
            Coordinate::new(10.0, 20.0),
            Coordinate::new(30.0, 40.0),
            Coordinate::new(50.0, 60.0),
        ]
    }

    fn file_len(p: &Path) -> u64 {
        std::fs::metadata(p).map(|m| m.len()).unwrap_or(0)
    }

    #[test]
    fn plot_png_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("tour.png");
        let coords = read_coordinates("./test/coords.csv").unwrap();
        let tour = read_tour("./test/tour.sol").unwrap();
        assert_eq!(tour.stops, vec![0, 1, 2, 0]);
        plot_tour(&coords, &tour, &out, &RenderOptions::default()).unwrap();
        assert!(file_len(&out) > 0);
    }

    #[test]
    fn plot_svg() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("tour.svg");
        let tour = Tour::close(vec![2, 1, 0]).unwrap();
        plot_tour(&three_coords(), &tour, &out, &RenderOptions::default()).unwrap();
        let svg = std::fs::read_to_string(&out).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Longitude"));
        assert!(svg.contains("Latitude"));
    }

    #[test]
    fn plot_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("tour.png");
        std::fs::write(&out, b"stale").unwrap();
        let tour = Tour::close(vec![0, 1, 2]).unwrap();
        plot_tour(&three_coords(), &tour, &out, &RenderOptions::default()).unwrap();
        assert_ne!(std::fs::read(&out).unwrap(), b"stale".to_vec());
    }

    #[test]
    fn plot_single_stop() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("single.png");
        let coords = read_coordinates("./test/coords.csv").unwrap();
        let tour = read_tour("./test/single.sol").unwrap();
        assert_eq!(tour.stops, vec![2, 2]);
        plot_tour(&coords, &tour, &out, &RenderOptions::default()).unwrap();
        assert!(file_len(&out) > 0);
    }

    #[test]
    fn plot_leaves_inputs_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("tour.png");
        let coords = three_coords();
        let tour = Tour::close(vec![1, 0, 2]).unwrap();
        plot_tour(&coords, &tour, &out, &RenderOptions::default()).unwrap();
        assert_eq!(coords, three_coords());
        assert_eq!(tour.stops, vec![1, 0, 2, 1]);
    }

    #[test]
    fn plot_out_of_range_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("tour.png");
        let coords = read_coordinates("./test/coords.csv").unwrap();
        let tour = read_tour("./test/out_of_range.sol").unwrap();
        let res = plot_tour(&coords, &tour, &out, &RenderOptions::default());
        assert!(matches!(
            res,
            Err(TourPlotError::IndexOutOfRange { index: 5, len: 3 })
        ));
        assert!(!out.exists());
    }

    #[test]
    fn plot_custom_title_and_size() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("custom.svg");
        let opts = RenderOptions {
            title: String::from("Depot round"),
            width: 640,
            height: 480,
            ..RenderOptions::default()
        };
        let tour = Tour::close(vec![0, 2, 1]).unwrap();
        plot_tour(&three_coords(), &tour, &out, &opts).unwrap();
        let svg = std::fs::read_to_string(&out).unwrap();
        assert!(svg.contains("Depot round"));
        assert!(svg.contains("width=\"640\""));
    }

    #[test]
    fn plot_unknown_extension_is_render_error() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("tour.xyz");
        let tour = Tour::close(vec![0, 1, 2]).unwrap();
        let res = plot_tour(&three_coords(), &tour, &out, &RenderOptions::default());
        assert!(matches!(res, Err(TourPlotError::Render(_))));
        assert!(!out.exists());
    }
}
