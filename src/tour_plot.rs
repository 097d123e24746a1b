use super::VERSION;
use crate::error::{Result, TourPlotError};
use crate::loader::{read_coordinates, read_tour};
use crate::render::{plot_tour, RenderOptions};
use crate::{DEFAULT_HEIGHT, DEFAULT_TITLE, DEFAULT_WIDTH};
use clap::{value_parser, Arg, ArgAction, Command};
use log::info;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Usage line printed when the positional arguments are not exactly three.
pub fn usage(bin: &str) -> String {
    format!(
        "Usage: {} <path/to/coords.csv> <path/to/solution.sol> <path/to/output.png>",
        bin
    )
}

fn build_cli() -> Command {
    let arg_csvin = Arg::new("coords_csv")
        .help("csv file with a header line and latitude,longitude columns")
        .value_parser(value_parser!(PathBuf))
        .required(true);
    let arg_tourin = Arg::new("tour_file")
        .help("tour file, node count on the first line and then one node index per line")
        .value_parser(value_parser!(PathBuf))
        .required(true);
    let arg_imgout = Arg::new("output_image")
        .help("output image, the extension selects the format (png, svg, jpg, ...)")
        .value_parser(value_parser!(PathBuf))
        .required(true);
    let arg_title = Arg::new("title")
        .help("title of the plot")
        .short('t')
        .long("title")
        .num_args(1)
        .default_value(DEFAULT_TITLE);
    let arg_width = Arg::new("width")
        .help("width of the image in pixels [default: 1200]")
        .long("width")
        .num_args(1)
        .value_parser(value_parser!(u32).range(100..));
    let arg_height = Arg::new("height")
        .help("height of the image in pixels [default: 900]")
        .long("height")
        .num_args(1)
        .value_parser(value_parser!(u32).range(100..));
    let arg_verbose = Arg::new("verbose")
        .help("print verbose information")
        .short('v')
        .long("verbose")
        .action(ArgAction::SetTrue);
    Command::new("tour_plot")
        .version(VERSION.unwrap_or("unknown"))
        .disable_help_flag(true)
        .disable_version_flag(true)
        .about("cli app to plot a solved TSP tour over latitude and longitude waypoints")
        .arg(arg_csvin)
        .arg(arg_tourin)
        .arg(arg_imgout)
        .arg(arg_title)
        .arg(arg_width)
        .arg(arg_height)
        .arg(arg_verbose)
}

/// Takes the CLI arguments, argv[0] included.
/// Any argument list clap rejects is a Usage error: a wrong number of positional
/// arguments, an unknown flag (help and version flags included) or an invalid option value.
/// The caller prints the usage and exits without touching any file.
/// It is safe to unwrap get_one for the required and defaulted arguments,
/// clap guarantees they are always Some<T>.
pub fn parse_cli_from<I, T>(args: I) -> Result<(PathBuf, PathBuf, PathBuf, RenderOptions, bool)>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli_args = build_cli()
        .try_get_matches_from(args)
        .map_err(|_| TourPlotError::Usage)?;
    let path_of = |id: &str| cli_args.get_one::<PathBuf>(id).unwrap().to_owned();
    let csvin = path_of("coords_csv");
    let tourin = path_of("tour_file");
    let imgout = path_of("output_image");
    let opts = RenderOptions {
        title: cli_args.get_one::<String>("title").unwrap().to_owned(),
        width: cli_args.get_one::<u32>("width").copied().unwrap_or(DEFAULT_WIDTH),
        height: cli_args.get_one::<u32>("height").copied().unwrap_or(DEFAULT_HEIGHT),
        ..RenderOptions::default()
    };
    let verbose = cli_args.get_flag("verbose");
    Ok((csvin, tourin, imgout, opts, verbose))
}

/// Read the coordinates and the tour, then plot the tour to imgout.
pub fn run(csvin: &Path, tourin: &Path, imgout: &Path, opts: &RenderOptions) -> Result<()> {
    info!("> read coordinates from {:?}", csvin);
    let coords = read_coordinates(csvin)?;
    info!("> read tour from {:?}", tourin);
    let tour = read_tour(tourin)?;
    info!(
        "> plot {} stops over {} coordinates",
        tour.visited().len(),
        coords.len()
    );
    plot_tour(&coords, &tour, imgout, opts)
}
