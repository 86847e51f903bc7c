//! Headless meadow demo
//!
//! Runs the meadow scene for a fixed number of frames at 60 Hz without a
//! window. A wandering "pilot" thread steers the butterfly through the key
//! channel and a logging render sink prints a summary once per second of
//! simulated time.
//!
//! Usage: `meadow_headless [config.toml|config.ron] [frames]`

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use meadow_engine::foundation::logging;
use meadow_engine::prelude::*;
use rand::Rng;
use thiserror::Error;

const FRAME_DT: f32 = 1.0 / 60.0;
const DEFAULT_FRAMES: u64 = 1_200;

#[derive(Error, Debug)]
enum AppError {
    #[error("engine: {0}")]
    Engine(#[from] EngineError),

    #[error("invalid frame count '{0}'")]
    FrameCount(String),
}

/// Logs a one-line summary of every 60th frame
#[derive(Default)]
struct LoggingSink {
    submitted: u64,
}

impl RenderSink for LoggingSink {
    fn submit(&mut self, snapshot: &FrameSnapshot) {
        self.submitted += 1;
        if snapshot.frame % 60 != 0 {
            return;
        }

        let butterfly = snapshot
            .instances
            .iter()
            .find(|instance| instance.kind == EntityKind::Butterfly.code())
            .map(|instance| instance.model[3]);
        let flowers: Vec<f32> = snapshot
            .instances
            .iter()
            .filter(|instance| instance.kind == EntityKind::Flower.code())
            .map(|instance| instance.model[0][0])
            .collect();
        let mean_bloom = if flowers.is_empty() {
            0.0
        } else {
            flowers.iter().sum::<f32>() / flowers.len() as f32
        };

        log::info!(
            "t={:>6.2}s frame {:>5}: butterfly {:?}, mean bloom {:.2}, {} raindrops, {} bytes of instances",
            snapshot.elapsed,
            snapshot.frame,
            butterfly.map(|p| [p[0], p[1], p[2]]),
            mean_bloom,
            snapshot.raindrops.len(),
            snapshot.instance_bytes().len(),
        );
    }
}

/// Presses a random steering key every so often until the engine hangs up
fn spawn_pilot(keys: KeySender) -> thread::JoinHandle<()> {
    const KEYS: [&str; 6] = ["ArrowUp", "ArrowDown", "ArrowLeft", "ArrowRight", "w", "s"];

    thread::spawn(move || {
        let mut rng = rand::thread_rng();
        loop {
            let key = KEYS[rng.gen_range(0..KEYS.len())];
            if keys.press_named(key).is_err() {
                log::debug!("Pilot stopping: input closed");
                break;
            }
            thread::sleep(Duration::from_millis(rng.gen_range(50..400)));
        }
    })
}

fn main() -> Result<(), AppError> {
    logging::init("info");
    log::info!("Starting headless meadow demo");

    let mut args = std::env::args().skip(1);
    let config_path = args.next().map(PathBuf::from);
    let frames = match args.next() {
        Some(raw) => raw.parse::<u64>().map_err(|_| AppError::FrameCount(raw))?,
        None => DEFAULT_FRAMES,
    };

    let config = SceneConfig::load_or_default(config_path.as_deref()).map_err(EngineError::from)?;
    let mut textures = ImageTextureProvider::new(config.assets_dir.clone());
    let mut engine = Engine::new(config, &mut textures)?;
    log::info!("Loaded {} textures from {}", textures.library().len(), textures.root().display());

    let pilot = spawn_pilot(engine.key_sender());
    let mut sink = LoggingSink::default();

    for _ in 0..frames {
        sink.submit(engine.step(FRAME_DT));
        // Give the pilot a chance to interleave with the frame loop
        thread::sleep(Duration::from_millis(1));
    }

    engine.shutdown();
    if pilot.join().is_err() {
        log::error!("Pilot thread panicked");
    }

    log::info!("Headless meadow demo finished after {} frames", sink.submitted);
    Ok(())
}
