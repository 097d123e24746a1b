use log::LevelFilter;
use std::ffi::OsString;
use std::path::Path;
use std::process;
use tour_plot::tour_plot::{parse_cli_from, run, usage};

fn main() {
    let args: Vec<OsString> = std::env::args_os().collect();
    let bin = args
        .first()
        .and_then(|a| Path::new(a).file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from("tour_plot"));

    let (csvin, tourin, imgout, opts, verbose) = match parse_cli_from(&args) {
        Ok(parsed) => parsed,
        Err(_) => {
            println!("{}", usage(&bin));
            process::exit(1);
        }
    };

    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let _ = env_logger::Builder::new().filter_level(level).try_init();

    if let Err(e) = run(&csvin, &tourin, &imgout, &opts) {
        log::error!("{}", e);
        process::exit(2);
    }
    println!("Tour plot saved to {}", imgout.display());
}
