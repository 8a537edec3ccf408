use track_vision::image::ImageU8Mut;
use track_vision::telemetry::FrameDecoder;
use track_vision::{TrackContext, TrackParams};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    // Demo: a lane drifting to the right as it recedes, tracked frame by frame.
    let params = TrackParams::default();
    let (w, h) = (params.width, params.height);
    let mut ctx = TrackContext::new(params)?;
    let mut decoder = FrameDecoder::new();
    let mut gray = vec![0u8; w * h];

    for shift in [0usize, 8, 16, 24] {
        gray.fill(0);
        for y in 10..h {
            let x0 = 60 + shift * (h - y) / h;
            gray[y * w + x0..=y * w + x0 + 44].fill(255);
        }
        let frame = ImageU8Mut {
            w,
            h,
            stride: w,
            data: &mut gray,
        };
        let res = ctx.process(frame);
        println!(
            "frame={} status={:?} left={} right={} distance={}",
            res.frame,
            res.status,
            res.left.points.len(),
            res.right.points.len(),
            res.final_distance
        );
        if let Some(tm) = res.telemetry(w, h) {
            decoder.feed(&tm.encode(), |f| {
                println!(
                    "  telemetry error_x={} error_y={} distance={}",
                    f.error_x, f.error_y, f.distance
                )
            });
        }
    }
    Ok(())
}
