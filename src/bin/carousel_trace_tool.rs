use carousel_rs::api::{CarouselConfig, CarouselRegistry, CarouselSnapshot};
use carousel_rs::interaction::TouchPoint;
use carousel_rs::surface::MemoryScrollSurface;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const USAGE: &str = "usage: carousel_trace_tool replay --input <path> --output <path>";

#[derive(Debug)]
struct CliArgs {
    input: PathBuf,
    output: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TraceFile {
    trace_name: String,
    #[serde(default)]
    config: Option<CarouselConfig>,
    carousels: Vec<TraceCarousel>,
    #[serde(default)]
    initialize_at_ms: u64,
    steps: Vec<TraceStep>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TraceCarousel {
    id: String,
    real_items: usize,
    client_width: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TraceStep {
    at_ms: u64,
    action: TraceAction,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum TraceAction {
    Advance,
    ScrollCarousel { id: String, direction: i32 },
    PointerEnter { id: String },
    PointerLeave { id: String },
    Scroll { id: String },
    NativeScroll { id: String, left: f64 },
    TouchStart { id: String, x: f64, y: f64 },
    TouchMove { id: String, x: f64, y: f64 },
    TouchEnd { id: String, x: f64, y: f64 },
    Unload,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ReplayFrame {
    at_ms: u64,
    action: TraceAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    prevent_default: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cleared_timers: Option<usize>,
    snapshots: IndexMap<String, CarouselSnapshot>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ReplayFile {
    trace_name: String,
    config: CarouselConfig,
    frames: Vec<ReplayFrame>,
}

fn main() {
    let _ = carousel_rs::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let raw = fs::read_to_string(&args.input)
        .map_err(|err| format!("failed to read `{}`: {err}", args.input.display()))?;
    let trace: TraceFile =
        serde_json::from_str(&raw).map_err(|err| format!("invalid json: {err}"))?;
    let replay = replay_trace(trace)?;
    write_json(&args.output, &replay)
}

fn replay_trace(trace: TraceFile) -> Result<ReplayFile, String> {
    let config = trace.config.unwrap_or_default();
    let mut registry = CarouselRegistry::new(config).map_err(|err| err.to_string())?;

    let containers = trace.carousels.iter().map(|carousel| {
        (
            carousel.id.clone(),
            MemoryScrollSurface::new(
                carousel.id.clone(),
                carousel.real_items,
                config.item_width_px,
                carousel.client_width,
            ),
        )
    });
    registry.initialize_carousels(containers, trace.initialize_at_ms);

    let mut frames = Vec::with_capacity(trace.steps.len());
    for step in trace.steps {
        let mut prevent_default = None;
        let mut cleared_timers = None;
        let now = step.at_ms;
        match &step.action {
            TraceAction::Advance => {
                registry.advance_time(now);
            }
            TraceAction::ScrollCarousel { id, direction } => {
                registry.advance_time(now);
                registry.scroll_carousel(id, *direction);
            }
            TraceAction::PointerEnter { id } => registry.pointer_enter(id, now),
            TraceAction::PointerLeave { id } => registry.pointer_leave(id, now),
            TraceAction::Scroll { id } => registry.scroll_event(id, now),
            TraceAction::NativeScroll { id, left } => {
                registry.advance_time(now);
                if let Some(carousel) = registry.get_mut(id) {
                    carousel.surface_mut().set_native_scroll_left(*left);
                }
                registry.scroll_event(id, now);
            }
            TraceAction::TouchStart { id, x, y } => {
                registry.touch_start(id, TouchPoint::new(*x, *y), now);
            }
            TraceAction::TouchMove { id, x, y } => {
                let outcome = registry.touch_move(id, TouchPoint::new(*x, *y), now);
                prevent_default = Some(outcome.prevent_default);
            }
            TraceAction::TouchEnd { id, x, y } => {
                registry.touch_end(id, TouchPoint::new(*x, *y), now);
            }
            TraceAction::Unload => {
                cleared_timers = Some(registry.unload());
            }
        }
        frames.push(ReplayFrame {
            at_ms: now,
            action: step.action,
            prevent_default,
            cleared_timers,
            snapshots: registry.snapshots(),
        });
    }

    Ok(ReplayFile {
        trace_name: trace.trace_name,
        config,
        frames,
    })
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    let payload = serde_json::to_string_pretty(value)
        .map_err(|err| format!("failed to serialize output: {err}"))?;
    fs::write(path, payload).map_err(|err| format!("failed to write `{}`: {err}", path.display()))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("replay") => {}
        _ => return Err(USAGE.to_owned()),
    }

    let mut input = None::<PathBuf>;
    let mut output = None::<PathBuf>;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            other => return Err(format!("unknown flag `{other}`")),
        }
    }

    Ok(CliArgs {
        input: input.ok_or_else(|| "missing --input".to_owned())?,
        output: output.ok_or_else(|| "missing --output".to_owned())?,
    })
}
