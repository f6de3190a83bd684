use std::fs;
use std::path::PathBuf;

use statchart::api::{BarChartOptions, Chart, ChartEngine, PieChartOptions};
use statchart::core::{Series, SurfaceMetrics, Viewport};
use statchart::interaction::HeadlessTooltip;
use statchart::render::CairoRenderer;

const DEFAULT_WIDTH: f64 = 600.0;
const DEFAULT_HEIGHT: f64 = 300.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChartKind {
    Bar,
    Pie,
}

#[derive(Debug)]
struct CliArgs {
    kind: ChartKind,
    input_path: PathBuf,
    output_path: PathBuf,
    options_path: Option<PathBuf>,
    width: f64,
    height: f64,
    scale: f64,
}

fn main() {
    let _ = statchart::telemetry::init_tracing_with_fallback_filter("warn");
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let raw = fs::read_to_string(&args.input_path).map_err(|err| {
        format!("failed to read input `{}`: {err}", args.input_path.display())
    })?;
    let series = Series::from_json_str(&raw).map_err(|err| err.to_string())?;

    let raw_options = match &args.options_path {
        Some(path) => fs::read_to_string(path)
            .map_err(|err| format!("failed to read options `{}`: {err}", path.display()))?,
        None => "{}".to_owned(),
    };
    let chart = match args.kind {
        ChartKind::Bar => {
            let options = BarChartOptions::from_json_str(&raw_options).map_err(|err| err.to_string())?;
            Chart::bar(series, &options)
        }
        ChartKind::Pie => {
            let options = PieChartOptions::from_json_str(&raw_options).map_err(|err| err.to_string())?;
            Chart::pie(series, &options)
        }
    };

    let surface = SurfaceMetrics::new(Viewport::new(args.width, args.height), args.scale);
    if !surface.viewport.is_valid() {
        return Err(format!(
            "invalid size {}x{}: width and height must be > 0",
            args.width, args.height
        ));
    }
    let (width_px, height_px) = surface.backing_store_size();
    let renderer = CairoRenderer::new(to_i32(width_px), to_i32(height_px)).map_err(|err| err.to_string())?;

    let engine = ChartEngine::create(renderer, HeadlessTooltip::default(), surface, chart)
        .map_err(|err| err.to_string())?;
    let (renderer, _tooltip) = engine.destroy();

    if let Some(parent) = args.output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|err| format!("failed to create output dir `{}`: {err}", parent.display()))?;
    }
    renderer
        .write_png(&args.output_path)
        .map_err(|err| err.to_string())?;

    let stats = renderer.last_stats();
    println!(
        "wrote {} ({}x{} px, {} rects, {} wedges, {} texts)",
        args.output_path.display(),
        width_px,
        height_px,
        stats.rects_drawn,
        stats.wedges_drawn,
        stats.texts_drawn
    );
    Ok(())
}

fn to_i32(px: u32) -> i32 {
    i32::try_from(px).unwrap_or(i32::MAX)
}

fn parse_args() -> Result<CliArgs, String> {
    let mut kind: Option<ChartKind> = None;
    let mut input_path: Option<PathBuf> = None;
    let mut output_path: Option<PathBuf> = None;
    let mut options_path: Option<PathBuf> = None;
    let mut width = DEFAULT_WIDTH;
    let mut height = DEFAULT_HEIGHT;
    let mut scale = 1.0;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "bar" if kind.is_none() => kind = Some(ChartKind::Bar),
            "pie" if kind.is_none() => kind = Some(ChartKind::Pie),
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input_path = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output_path = Some(PathBuf::from(value));
            }
            "--options" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --options".to_owned())?;
                options_path = Some(PathBuf::from(value));
            }
            "--width" => width = parse_number("--width", args.next())?,
            "--height" => height = parse_number("--height", args.next())?,
            "--scale" => scale = parse_number("--scale", args.next())?,
            "--help" | "-h" => {
                println!("{}", usage_message());
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
        }
    }

    Ok(CliArgs {
        kind: kind.ok_or_else(|| format!("missing chart kind\n\n{}", usage_message()))?,
        input_path: input_path.ok_or_else(|| "missing --input".to_owned())?,
        output_path: output_path.ok_or_else(|| "missing --output".to_owned())?,
        options_path,
        width,
        height,
        scale,
    })
}

fn parse_number(flag: &str, value: Option<String>) -> Result<f64, String> {
    let value = value.ok_or_else(|| format!("missing value for {flag}"))?;
    value
        .parse::<f64>()
        .map_err(|err| format!("invalid value `{value}` for {flag}: {err}"))
}

fn usage_message() -> &'static str {
    "usage: render_chart_png <bar|pie> --input <items.json> --output <chart.png> \
     [--width <css px>] [--height <css px>] [--scale <device pixel ratio>] \
     [--options <options.json>]"
}
