use cgmath::Vector2;
use chatmosaic::{Compositor, Painter, RenderInput};
use log::debug;
use quick_error::quick_error;
use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

mod config;
mod dump;
mod svg;

use self::{config::cmdline::Args, svg::SvgSurface};

quick_error! {
    #[derive(Debug)]
    enum AppError {
        Mosaic(err: chatmosaic::Error) {
            from()
            display("{}", err)
        }
        Write(path: PathBuf, err: io::Error) {
            display("could not write '{}': {}", path.display(), err)
        }
        Stdout(err: io::Error) {
            display("could not write to the standard output: {}", err)
        }
    }
}

fn main() {
    // Enable logging only in debug builds
    #[cfg(debug_assertions)]
    {
        env_logger::init();
    }

    let args = Args::from_env_or_exit();
    debug!("args = {:?}", args);

    if let Err(e) = run(&args) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    let size = Vector2::new(args.width, args.height);
    let counts = args.counts();

    if args.json {
        let json = dump::frames_to_json(&counts, size.x.min(size.y), &args.palette)?;
        return emit(args.output.as_deref(), json + "\n");
    }

    let mut compositor = Compositor::new(args.palette.clone());
    if let Some(background) = args.background {
        compositor = compositor.with_background(background);
    }

    match (args.frames, &args.output) {
        (Some(_), Some(stem)) => {
            debug!("Rendering {} frames", counts.len());
            for (i, &count) in counts.iter().enumerate() {
                let svg = render_svg(&compositor, size, count, &args.images)?;
                emit(Some(&frame_path(stem, i)), svg)?;
            }
            Ok(())
        }
        _ => {
            let svg = render_svg(&compositor, size, args.count, &args.images)?;
            emit(args.output.as_deref(), svg)
        }
    }
}

fn render_svg(
    painter: &impl Painter<SvgSurface>,
    size: Vector2<f32>,
    count: f32,
    images: &[String],
) -> Result<String, AppError> {
    let input = RenderInput::new(count, images, size)?;
    let mut surface = SvgSurface::new(size);
    painter.paint(&mut surface, &input)?;
    Ok(surface.finish())
}

/// Get the output path of the `i`-th frame, e.g., `anim-003.svg` for the stem
/// `anim`.
fn frame_path(stem: &Path, i: usize) -> PathBuf {
    let mut name = stem.file_stem().unwrap_or_default().to_os_string();
    name.push(format!("-{:03}.svg", i));
    stem.with_file_name(name)
}

fn emit(path: Option<&Path>, contents: String) -> Result<(), AppError> {
    if let Some(path) = path {
        debug!("Writing {:?}", path);
        std::fs::write(path, contents).map_err(|e| AppError::Write(path.to_owned(), e))
    } else {
        io::stdout()
            .write_all(contents.as_bytes())
            .map_err(AppError::Stdout)
    }
}
