//! Command-line argument parsing
use chatmosaic::{
    interp,
    pal::RGBAF32,
    palette::{parse_hex_color, Palette},
};
use quick_error::quick_error;
use std::{
    env::args_os,
    ffi::{OsStr, OsString},
    path::PathBuf,
};

/// Renders chat mosaic icons.
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    /// the avatar count (of the first frame if `frames` is set)
    pub count: f32,
    /// the avatar count of the last frame
    pub to: Option<f32>,
    /// the number of frames to generate
    pub frames: Option<u32>,
    pub width: f32,
    pub height: f32,
    /// image references, one per avatar
    pub images: Vec<String>,
    pub palette: Palette,
    pub background: Option<RGBAF32>,
    /// the output path, or the file name stem for frame sequences
    pub output: Option<PathBuf>,
    /// output slot geometry as JSON instead of SVG
    pub json: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            count: 1.0,
            to: None,
            frames: None,
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            images: Vec::new(),
            palette: Palette::default(),
            background: None,
            output: None,
            json: false,
        }
    }
}

const DEFAULT_SIZE: f32 = 128.0;

quick_error! {
    #[derive(Debug, PartialEq)]
    pub enum ArgError {
        HelpRequested {
            display("help was requested")
        }
        Unexpected(arg: String) {
            display("Found an unexpected argument '{}'", arg)
        }
        MissingValue(arg: String) {
            display("The argument '{}' requires a value", arg)
        }
        BadValue(arg: String, value: String, reason: String) {
            display("Invalid value '{}' for '{}': {}", value, arg, reason)
        }
        Conflict(reason: &'static str) {
            display("{}", reason)
        }
    }
}

impl Args {
    pub fn from_env_or_exit() -> Self {
        let mut args = args_os();
        if args.next().is_none() {
            return Self::default();
        }

        match Self::parse(args) {
            Ok(this) => this,
            Err(ArgError::HelpRequested) => display_help_and_exit(),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }

    /// Parse command-line arguments, excluding the program name.
    pub fn parse(args: impl IntoIterator<Item = OsString>) -> Result<Self, ArgError> {
        let mut this = Self::default();
        let mut args = args.into_iter();

        while let Some(hdr_os) = args.next() {
            // The representation of an `OsStr` is opaque, so we can't search for hyphens without
            // converting it to `str`. However, it implements `PartialEq<str>`, so we can check for
            // an exact match without doing the conversion.
            let handler_info = HANDLER_TABLE.iter().find(|p| hdr_os == p.0);

            if let Some((hdr, handler)) = handler_info {
                handler.handle(&mut this, hdr, &mut args)?;
            } else {
                return Err(ArgError::Unexpected(hdr_os.to_string_lossy().into_owned()));
            }
        }

        this.check()?;

        Ok(this)
    }

    fn check(&self) -> Result<(), ArgError> {
        match (self.frames, self.to) {
            (Some(_), None) => Err(ArgError::Conflict("'--frames' requires '--to'")),
            (None, Some(_)) => Err(ArgError::Conflict("'--to' requires '--frames'")),
            (Some(_), Some(_)) if !self.json && self.output.is_none() => Err(ArgError::Conflict(
                "'--frames' requires '--output' unless '--json' is given",
            )),
            _ => Ok(()),
        }
    }

    /// Get the avatar counts of all frames to render.
    pub fn counts(&self) -> Vec<f32> {
        match (self.frames, self.to) {
            (Some(frames), Some(to)) => {
                let last = (frames - 1) as f32;
                (0..frames)
                    .map(|i| {
                        if i == frames - 1 {
                            // Land exactly on the final count
                            to
                        } else {
                            self.count + (to - self.count) * (i as f32 / last)
                        }
                    })
                    .collect()
            }
            _ => vec![self.count],
        }
    }
}

type ValueHandler = fn(&mut Args, &str) -> Result<(), String>;

static HANDLER_TABLE: &[(&str, &(dyn ArgHandler<Args> + Send + Sync))] = &[
    ("-h", &(handle_help as fn(&mut Args) -> Result<(), ArgError>)),
    ("--help", &(handle_help as fn(&mut Args) -> Result<(), ArgError>)),
    ("--json", &(handle_json as fn(&mut Args) -> Result<(), ArgError>)),
    ("--count", &(handle_count as ValueHandler)),
    ("--to", &(handle_to as ValueHandler)),
    ("--frames", &(handle_frames as ValueHandler)),
    ("--size", &(handle_size as ValueHandler)),
    ("--width", &(handle_width as ValueHandler)),
    ("--height", &(handle_height as ValueHandler)),
    ("--image", &(handle_image as ValueHandler)),
    ("--palette", &(handle_palette as ValueHandler)),
    ("--background", &(handle_background as ValueHandler)),
    ("--output", &(handle_output as ValueHandler)),
    ("-o", &(handle_output as ValueHandler)),
];

fn display_help_and_exit() -> ! {
    println!(
        "mosaicgen
Renders chat mosaic icons.

USAGE:
    mosaicgen [OPTIONS]

FLAGS:
    -h, --help       display help information
    --json           output slot geometry as JSON instead of SVG

OPTIONS:
    --count <COUNT>          the avatar count in range [1, 5] (default: 1)
    --to <COUNT>             the avatar count of the last frame
    --frames <N>             the number of frames to generate
    --size <PX>              the width and height of the icon (default: 128)
    --width <PX>             the width of the icon
    --height <PX>            the height of the icon
    --image <HREF>           an avatar image reference; repeat for each avatar
    --palette <COLORS>       comma-separated backdrop colors, e.g., '#e91e63,#9c27b0'
    --background <COLOR>     the background color (default: '#ffffff')
    -o, --output <PATH>      the output path; the file name stem for frame sequences"
    );
    std::process::exit(0);
}

trait ArgHandler<Ctx> {
    fn handle(
        &self,
        ctx: &mut Ctx,
        arg_hdr: &str,
        args_iter: &mut dyn Iterator<Item = OsString>,
    ) -> Result<(), ArgError>;
}

impl<Ctx> ArgHandler<Ctx> for fn(&mut Ctx) -> Result<(), ArgError> {
    fn handle(
        &self,
        ctx: &mut Ctx,
        _arg_hdr: &str,
        _args_iter: &mut dyn Iterator<Item = OsString>,
    ) -> Result<(), ArgError> {
        self(ctx)
    }
}

impl<Ctx> ArgHandler<Ctx> for fn(&mut Ctx, &str) -> Result<(), String> {
    fn handle(
        &self,
        ctx: &mut Ctx,
        arg_hdr: &str,
        args_iter: &mut dyn Iterator<Item = OsString>,
    ) -> Result<(), ArgError> {
        let value = args_iter
            .next()
            .ok_or_else(|| ArgError::MissingValue(arg_hdr.to_owned()))?;
        let bad_value =
            |reason: String| ArgError::BadValue(arg_hdr.to_owned(), lossy(&value), reason);

        let value_str = value
            .to_str()
            .ok_or_else(|| bad_value("not a valid UTF-8 string".to_owned()))?;

        self(ctx, value_str).map_err(bad_value)
    }
}

fn lossy(s: &OsStr) -> String {
    s.to_string_lossy().into_owned()
}

fn parse_count(value: &str) -> Result<f32, String> {
    // Range-check at full precision first. Narrowing to `f32` would round
    // values like `5.0000001` into range.
    let count: f64 = value.parse().map_err(|e| format!("{}", e))?;
    let (min, max) = (f64::from(interp::MIN_COUNT), f64::from(interp::MAX_COUNT));
    if !(min..=max).contains(&count) {
        return Err(format!("must be in range [{}, {}]", min, max));
    }
    interp::validate_count(count as f32).map_err(|e| e.to_string())
}

fn parse_length(value: &str) -> Result<f32, String> {
    let x: f32 = value.parse().map_err(|e| format!("{}", e))?;
    if x.is_finite() && x > 0.0 {
        Ok(x)
    } else {
        Err("must be a positive number".to_owned())
    }
}

fn handle_help(_: &mut Args) -> Result<(), ArgError> {
    Err(ArgError::HelpRequested)
}

fn handle_json(args: &mut Args) -> Result<(), ArgError> {
    args.json = true;
    Ok(())
}

fn handle_count(args: &mut Args, value: &str) -> Result<(), String> {
    args.count = parse_count(value)?;
    Ok(())
}

fn handle_to(args: &mut Args, value: &str) -> Result<(), String> {
    args.to = Some(parse_count(value)?);
    Ok(())
}

fn handle_frames(args: &mut Args, value: &str) -> Result<(), String> {
    let frames: u32 = value.parse().map_err(|e| format!("{}", e))?;
    if frames < 2 {
        return Err("at least two frames are required".to_owned());
    }
    args.frames = Some(frames);
    Ok(())
}

fn handle_size(args: &mut Args, value: &str) -> Result<(), String> {
    let size = parse_length(value)?;
    args.width = size;
    args.height = size;
    Ok(())
}

fn handle_width(args: &mut Args, value: &str) -> Result<(), String> {
    args.width = parse_length(value)?;
    Ok(())
}

fn handle_height(args: &mut Args, value: &str) -> Result<(), String> {
    args.height = parse_length(value)?;
    Ok(())
}

fn handle_image(args: &mut Args, value: &str) -> Result<(), String> {
    args.images.push(value.to_owned());
    Ok(())
}

fn handle_palette(args: &mut Args, value: &str) -> Result<(), String> {
    args.palette = Palette::parse(value).map_err(|e| e.to_string())?;
    Ok(())
}

fn handle_background(args: &mut Args, value: &str) -> Result<(), String> {
    args.background = Some(parse_hex_color(value).map_err(|e| e.to_string())?);
    Ok(())
}

fn handle_output(args: &mut Args, value: &str) -> Result<(), String> {
    args.output = Some(value.into());
    Ok(())
}
