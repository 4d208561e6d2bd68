//! Flap Sim entry point
//!
//! Headless runner: plays the game on autopilot for a fixed number of ticks,
//! logs what happens and prints the final frame as JSON. The browser build
//! runs the same loop against LocalStorage and Web Audio.

use flap_sim::persistence::ScoreStore;
use flap_sim::renderer::{LogRenderer, Snapshot};
use flap_sim::sim::GameEvent;
use flap_sim::{Session, Settings};

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use flap_sim::audio::{AudioManager, LogOutput};
    use flap_sim::persistence::FileStore;

    env_logger::init();
    log::info!("Flap Sim (headless) starting...");

    let settings = Settings::load();
    let store = FileStore::open(&settings.best_score_path);
    log::info!("Best score file: {}", store.path().display());
    let audio = AudioManager::from_settings(&settings, Box::new(LogOutput));

    let snapshot = run(&settings, Session::new(&settings, store, audio));
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to encode snapshot: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use flap_sim::audio::{AudioManager, WebAudioOutput};
    use flap_sim::persistence::LocalStore;

    let settings = Settings::load();
    let audio = AudioManager::from_settings(&settings, Box::new(WebAudioOutput::new()));
    run(&settings, Session::new(&settings, LocalStore::new(), audio));
}

/// Play `settings.demo_ticks` ticks and return the last frame
fn run<S: ScoreStore>(settings: &Settings, mut session: Session<S>) -> Snapshot {
    let mut renderer = LogRenderer;

    let mut runs = 0u32;
    for _ in 0..settings.demo_ticks {
        for event in session.step() {
            match event {
                GameEvent::HitPipe | GameEvent::HitFloor => {
                    runs += 1;
                    log::info!(
                        "Run {} over: {:?} with score {}",
                        runs,
                        event,
                        session.state().score.current
                    );
                }
                GameEvent::NewBest { best } => log::info!("New best {}", best),
                _ => {}
            }
        }
        session.render(&mut renderer);
    }

    let snapshot = session.snapshot();
    log::info!(
        "Finished {} ticks, {} run(s), best score {}",
        settings.demo_ticks,
        runs,
        snapshot.best
    );
    snapshot
}
