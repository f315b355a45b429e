//! Dino Runner entry point
//!
//! The browser build is driven from JavaScript through `dino_runner::web`.
//! Natively there is no window: the binary plays a headless run on a
//! simulated 60 fps clock and logs what happens.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use dino_runner::feedback::{FeedbackSink, LogFeedback};
    use dino_runner::persistence::{FileStore, KeyValueStore, MemoryStore};
    use dino_runner::sim::{GameEvent, GamePhase, SeededRandom};
    use dino_runner::{Runner, Settings};

    /// Give up after ten simulated minutes
    const MAX_SECONDS: f64 = 600.0;
    const FRAME: f64 = 1.0 / 60.0;

    env_logger::init();
    log::info!("Dino Runner (native) starting...");

    let mut settings = Settings::load();
    // Nobody is at the keyboard
    settings.autopilot = true;

    let seed = settings.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    });

    let store: Box<dyn KeyValueStore> = match FileStore::new() {
        Ok(store) => {
            log::info!("Best score stored in {}", store.dir().display());
            Box::new(store)
        }
        Err(e) => {
            log::warn!("No data directory, best score will not persist: {e}");
            Box::new(MemoryStore::new())
        }
    };
    let feedback: Box<dyn FeedbackSink> = Box::new(LogFeedback);

    let rng = SeededRandom::new(seed);
    log::info!("Seed {}", rng.seed());
    let mut runner = Runner::new(&settings, rng, store, feedback);
    log::info!("Best score so far {}", runner.snapshot().best_score);

    let mut now = 0.0;
    runner.start(now);
    while runner.snapshot().phase == GamePhase::Running && now < MAX_SECONDS {
        now += FRAME;
        runner.update(now);
        for event in runner.drain_events() {
            match event {
                GameEvent::Scored { score, speed } => {
                    log::info!("Score {} (speed {:.2})", score, speed)
                }
                GameEvent::ObstacleSpawned(kind) => log::debug!("Next obstacle: {:?}", kind),
                GameEvent::GameOver {
                    score,
                    best,
                    new_best,
                } => {
                    let note = if new_best { " - new best!" } else { "" };
                    println!("Game over after {:.1}s: score {score}, best {best}{note}", now);
                }
                _ => {}
            }
        }
    }

    if runner.snapshot().phase == GamePhase::Running {
        println!(
            "Still running after {:.0}s: score {}",
            now,
            runner.snapshot().score
        );
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is dino_runner::web::WebGame, this is just to satisfy the compiler
}
