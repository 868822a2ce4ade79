//! Pong entry point
//!
//! The browser build is the playable game. The native build has no window
//! system, so it runs the same loop headless and logs how the match went.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    pong::platform::web::run().await;
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Simulated length of the headless run
#[cfg(not(target_arch = "wasm32"))]
const HEADLESS_SECONDS: u32 = 120;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use pong::audio::HeadlessAudio;
    use pong::renderer::Recorder;
    use pong::sim::{GameEvent, PcgServe, TickInput};
    use pong::{Game, GameConfig, Settings};

    env_logger::init();
    log::info!("Pong (native) starting...");
    log::info!("Native mode runs headless - run with `trunk serve` for the playable web version");

    // Optional JSON config file; missing fields keep their defaults
    let config = match std::env::args().nth(1) {
        Some(path) => match GameConfig::load(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path);
                config
            }
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(1);
            }
        },
        None => GameConfig::default(),
    };
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    log::info!("Serve seed: {}", seed);

    let dt = config.frame_dt();
    let frames = HEADLESS_SECONDS * config.target_fps;
    let mut game = match Game::new(
        config,
        Box::new(PcgServe::new(seed)),
        HeadlessAudio::new(),
        Settings::default(),
    ) {
        Ok(game) => game,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };
    let mut canvas = Recorder::new();
    let input = TickInput::default();

    let mut paddle_hits = 0u32;
    for frame in 0..frames {
        canvas.reset();
        for event in game.frame(&input, dt, &mut canvas) {
            match event {
                GameEvent::PaddleHit(_) => paddle_hits += 1,
                GameEvent::Victory(_) => {
                    log::info!("Decided after {:.1}s", frame as f32 * dt);
                    log::debug!("Banner: {:?}", canvas.texts().last());
                }
                _ => {}
            }
        }
        if game.state().winner().is_some() {
            break;
        }
    }

    let state = game.state();
    let verdict = match state.winner() {
        Some(side) => format!("{} team won", side.team_name()),
        None => "no winner yet".to_string(),
    };
    println!(
        "Red {} - Blue {} ({}), {} paddle hits",
        state.scores.left, state.scores.right, verdict, paddle_hits
    );
}
