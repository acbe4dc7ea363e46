use chartlet::generate::{
    DEFAULT_GROUP_VALUES, DEFAULT_LENGTH, generate_categories, generate_groups,
};
use chartlet::render::raster::{RasterError, RasterOptions, render_jpeg_sync, render_png_sync};
use chartlet::render::{
    ChartletContext, HeadlessError, LineChartProps, SvgRenderOptions, layout_line_chart,
    render_svg_sync,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use std::io::Read;
use std::str::FromStr;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Render(HeadlessError),
    Raster(RasterError),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Render(err) => write!(f, "{err}"),
            CliError::Raster(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<HeadlessError> for CliError {
    fn from(value: HeadlessError) -> Self {
        Self::Render(value)
    }
}

impl From<chartlet::render::ChartRenderError> for CliError {
    fn from(value: chartlet::render::ChartRenderError) -> Self {
        Self::Render(HeadlessError::from(value))
    }
}

impl From<RasterError> for CliError {
    fn from(value: RasterError) -> Self {
        Self::Raster(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Render,
    Layout,
    Generate,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Dataset {
    #[default]
    Categories,
    Groups,
}

#[derive(Debug, Clone, Copy, Default)]
enum RenderFormat {
    #[default]
    Svg,
    Png,
    Jpeg,
}

impl FromStr for RenderFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    dataset: Dataset,
    input: Option<String>,
    pretty: bool,
    render_format: RenderFormat,
    render_scale: f32,
    background: Option<String>,
    auto_width: Option<f64>,
    auto_height: Option<f64>,
    diagram_id: Option<String>,
    view_box: bool,
    length: usize,
    values: usize,
    seed: Option<u64>,
    out: Option<String>,
}

fn usage() -> &'static str {
    "chartlet-cli\n\
\n\
USAGE:\n\
  chartlet-cli [render] [--format svg|png|jpg] [--scale <n>] [--background <#hex|white|black|transparent>] [--auto-width <w>] [--auto-height <h>] [--id <chart-id>] [--view-box] [--out <path>] [<path>|-]\n\
  chartlet-cli layout [--pretty] [--auto-width <w>] [--auto-height <h>] [<path>|-]\n\
  chartlet-cli generate [categories|groups] [--length <n>] [--values <n>] [--seed <n>] [--pretty]\n\
\n\
NOTES:\n\
  - Input is line chart props JSON: {\"series\": [...], \"width\": .., \"height\": .., \"colors\": [..], \"pathStyle\": {..}, \"pathStyles\": [..]}.\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - render prints SVG to stdout by default; use --out to write a file.\n\
  - PNG/JPG output defaults to writing next to the input file (or ./out.png / ./out.jpg for stdin).\n\
  - generate categories prints a keyed record usable as one entry of \"series\".\n\
  - generate groups prints one array of values per category; it is not a series entry.\n\
"
}

fn next_value<'a>(it: &mut impl Iterator<Item = &'a String>) -> Result<&'a String, CliError> {
    it.next().ok_or(CliError::Usage(usage()))
}

fn parse_number<T: FromStr>(raw: &str) -> Result<T, CliError> {
    raw.parse::<T>().map_err(|_| CliError::Usage(usage()))
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args {
        command: Command::Render,
        render_format: RenderFormat::Svg,
        render_scale: 1.0,
        length: DEFAULT_LENGTH,
        values: DEFAULT_GROUP_VALUES,
        ..Default::default()
    };

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "render" => args.command = Command::Render,
            "layout" => args.command = Command::Layout,
            "generate" => args.command = Command::Generate,
            "categories" if matches!(args.command, Command::Generate) => {
                args.dataset = Dataset::Categories
            }
            "groups" if matches!(args.command, Command::Generate) => {
                args.dataset = Dataset::Groups
            }
            "--pretty" => args.pretty = true,
            "--view-box" => args.view_box = true,
            "--format" => {
                args.render_format = next_value(&mut it)?
                    .parse::<RenderFormat>()
                    .map_err(|_| CliError::Usage(usage()))?;
            }
            "--scale" => {
                args.render_scale = parse_number(next_value(&mut it)?)?;
                if !(args.render_scale.is_finite() && args.render_scale > 0.0) {
                    return Err(CliError::Usage(usage()));
                }
            }
            "--background" => {
                let bg = next_value(&mut it)?;
                if !bg.trim().is_empty() {
                    args.background = Some(bg.trim().to_string());
                }
            }
            "--auto-width" => args.auto_width = Some(parse_number(next_value(&mut it)?)?),
            "--auto-height" => args.auto_height = Some(parse_number(next_value(&mut it)?)?),
            "--id" => args.diagram_id = Some(next_value(&mut it)?.clone()),
            "--out" => args.out = Some(next_value(&mut it)?.clone()),
            "--length" => args.length = parse_number(next_value(&mut it)?)?,
            "--values" => args.values = parse_number(next_value(&mut it)?)?,
            "--seed" => args.seed = Some(parse_number(next_value(&mut it)?)?),
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            "-" => args.input = Some("-".to_string()),
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    Ok(())
}

fn write_text(text: &str, out: Option<&str>) -> Result<(), CliError> {
    match out {
        None => {
            print!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, text)?;
            Ok(())
        }
    }
}

fn write_bytes(bytes: &[u8], out: &str) -> Result<(), CliError> {
    if out == "-" {
        use std::io::Write;
        std::io::stdout().lock().write_all(bytes)?;
    } else {
        std::fs::write(out, bytes)?;
    }
    Ok(())
}

fn default_raster_out_path(input: Option<&str>, ext: &str) -> std::path::PathBuf {
    match input {
        Some(path) if path != "-" => std::path::PathBuf::from(path).with_extension(ext),
        _ => std::path::PathBuf::from(format!("out.{ext}")),
    }
}

fn context_from_args(args: &Args) -> ChartletContext {
    ChartletContext {
        auto_width: args.auto_width,
        auto_height: args.auto_height,
    }
}

fn run_generate(args: &Args) -> Result<(), CliError> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    match args.dataset {
        Dataset::Categories => write_json(&generate_categories(&mut rng, args.length), args.pretty),
        Dataset::Groups => write_json(
            &generate_groups(&mut rng, args.length, args.values),
            args.pretty,
        ),
    }
}

fn load_props(args: &Args) -> Result<LineChartProps, CliError> {
    let text = read_input(args.input.as_deref())?;
    Ok(LineChartProps::from_json_str(&text)?)
}

fn run(args: Args) -> Result<(), CliError> {
    let context = context_from_args(&args);

    match args.command {
        Command::Generate => run_generate(&args),
        Command::Layout => {
            let props = load_props(&args)?;
            let scene = layout_line_chart(&props, &context)?;
            write_json(&scene, args.pretty)
        }
        Command::Render => {
            let props = load_props(&args)?;
            let raster = RasterOptions {
                scale: args.render_scale,
                background: args.background.clone(),
                ..Default::default()
            };
            let (bytes, ext) = match args.render_format {
                RenderFormat::Svg => {
                    let svg_options = SvgRenderOptions {
                        diagram_id: args.diagram_id.clone(),
                        view_box: args.view_box,
                    };
                    let svg = render_svg_sync(&props, &context, &svg_options)?;
                    return write_text(&svg, args.out.as_deref());
                }
                RenderFormat::Png => (render_png_sync(&props, &context, &raster)?, "png"),
                RenderFormat::Jpeg => (render_jpeg_sync(&props, &context, &raster)?, "jpg"),
            };
            let out = args.out.clone().unwrap_or_else(|| {
                default_raster_out_path(args.input.as_deref(), ext)
                    .to_string_lossy()
                    .to_string()
            });
            write_bytes(&bytes, &out)
        }
    }
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
