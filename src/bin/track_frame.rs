use track_vision::config::tracker::load_config;
use track_vision::diagnostics::{elapsed_ms, InputDescriptor, TimingBreakdown, TrackReport};
use track_vision::image::io::{load_grayscale_image, save_overlay_png, write_json_file, OverlayMark};
use track_vision::{TrackContext, TrackResult};
use std::env;
use std::path::Path;
use std::time::Instant;

const EDGE_COLOR: [u8; 3] = [255, 64, 64];
const CURVE_COLOR: [u8; 3] = [64, 160, 255];
const TURN_COLOR: [u8; 3] = [255, 220, 0];
const CURVE_SAMPLES: usize = 200;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;
    let mut timings = TimingBreakdown::default();

    let mut gray = timings.measure("load", || load_grayscale_image(&config.input))?;
    let (width, height) = (gray.width(), gray.height());
    let params = config.tracking;
    if (width, height) != (params.width, params.height) {
        return Err(format!(
            "{} is {width}x{height}, config expects {}x{}",
            config.input.display(),
            params.width,
            params.height
        ));
    }

    let mut ctx = TrackContext::new(params)?;
    let start = Instant::now();
    let result = ctx.process(gray.as_view_mut());
    timings.push("process", elapsed_ms(start));
    println!(
        "status={:?} left={} right={} distance={}",
        result.status,
        result.left.points.len(),
        result.right.points.len(),
        result.final_distance
    );

    if let Some(path) = &config.output.overlay_image {
        let marks = overlay_marks(&result);
        timings.measure("overlay", || save_overlay_png(&gray.as_view(), &marks, path))?;
        println!("Saved overlay to {}", path.display());
    }

    let report = TrackReport {
        input: InputDescriptor {
            path: config.input.display().to_string(),
            width,
            height,
        },
        telemetry: result.telemetry(width, height),
        result,
        timings,
    };
    write_json_file(&config.output.report_json, &report)?;
    println!("Saved report to {}", config.output.report_json.display());
    Ok(())
}

fn overlay_marks(result: &TrackResult<'_>) -> Vec<OverlayMark> {
    let mut marks = Vec::new();
    for curve in [result.left_curve, result.right_curve].into_iter().flatten() {
        marks.extend(curve.sample(CURVE_SAMPLES).map(|[x, y]| OverlayMark {
            x,
            y,
            color: CURVE_COLOR,
        }));
    }
    for edge in [&result.left, &result.right] {
        marks.extend(edge.points.iter().map(|p| {
            let [x, y] = p.to_f32();
            OverlayMark {
                x,
                y,
                color: EDGE_COLOR,
            }
        }));
        if let Some(turn) = edge.turn {
            let [x, y] = turn.point.to_f32();
            marks.push(OverlayMark {
                x,
                y,
                color: TURN_COLOR,
            });
        }
    }
    marks
}

fn usage() -> String {
    "Usage: track_frame <config.json>".to_string()
}
