//! Browser frontend
//!
//! WebGPU draws the rectangles onto `#canvas`; a 2D context on the `#hud`
//! canvas stacked above it draws the text. Audio uses HTML media elements.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlAudioElement, HtmlCanvasElement, KeyboardEvent};

use super::input::Keyboard;
use crate::audio::{AudioBackend, SoundEffect, Track};
use crate::config::{AudioConfig, GameConfig};
use crate::game::Game;
use crate::renderer::{Canvas, Color, QuadBatch, RenderState};
use crate::settings::Settings;
use crate::sim::{Aabb, PcgServe};

/// HTML media element audio
pub struct WebAudio {
    hit: Option<HtmlAudioElement>,
    background: Option<HtmlAudioElement>,
    victory: Option<HtmlAudioElement>,
    /// Tracks the game wants audible, whether or not the browser allowed it yet
    background_wanted: bool,
    victory_wanted: bool,
}

/// Start playback. Browsers reject the returned promise when autoplay is
/// blocked, so the rejection is logged rather than left unhandled.
fn start_playback(el: &HtmlAudioElement, label: String) {
    match el.play() {
        Ok(promise) => {
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
                    log::warn!("{} playback blocked: {:?}", label, e);
                }
            });
        }
        Err(e) => log::warn!("{} playback failed: {:?}", label, e),
    }
}

fn load_audio(path: &str, looping: bool) -> Option<HtmlAudioElement> {
    match HtmlAudioElement::new_with_src(path) {
        Ok(el) => {
            el.set_loop(looping);
            el.set_preload("auto");
            Some(el)
        }
        Err(e) => {
            log::warn!("Failed to create audio element for {}: {:?}", path, e);
            None
        }
    }
}

impl WebAudio {
    pub fn new(config: &AudioConfig) -> Self {
        Self {
            hit: load_audio(&config.hit_sound, false),
            background: load_audio(&config.background_track, true),
            victory: load_audio(&config.victory_track, true),
            background_wanted: false,
            victory_wanted: false,
        }
    }

    fn element(&self, track: Track) -> Option<&HtmlAudioElement> {
        match track {
            Track::Background => self.background.as_ref(),
            Track::Victory => self.victory.as_ref(),
        }
    }

    fn wanted(&self, track: Track) -> bool {
        match track {
            Track::Background => self.background_wanted,
            Track::Victory => self.victory_wanted,
        }
    }

    fn set_wanted(&mut self, track: Track, wanted: bool) {
        match track {
            Track::Background => self.background_wanted = wanted,
            Track::Victory => self.victory_wanted = wanted,
        }
    }

}

impl AudioBackend for WebAudio {
    fn play_effect(&mut self, effect: SoundEffect, volume: f32) {
        let el = match effect {
            SoundEffect::PaddleHit => self.hit.as_ref(),
        };
        let Some(el) = el else { return };
        el.set_volume(volume as f64);
        el.set_current_time(0.0);
        start_playback(el, format!("{:?}", effect));
    }

    fn play_track(&mut self, track: Track, volume: f32) {
        self.set_wanted(track, true);
        let Some(el) = self.element(track) else { return };
        el.set_volume(volume as f64);
        el.set_current_time(0.0);
        start_playback(el, format!("{:?} track", track));
    }

    fn stop_track(&mut self, track: Track) {
        self.set_wanted(track, false);
        if let Some(el) = self.element(track) {
            let _ = el.pause();
            el.set_current_time(0.0);
        }
    }

    fn is_playing(&self, track: Track) -> bool {
        self.wanted(track)
    }

    fn set_track_volume(&mut self, track: Track, volume: f32) {
        if let Some(el) = self.element(track) {
            el.set_volume(volume as f64);
        }
    }

    fn update_streams(&mut self) {
        // Media elements buffer and loop on their own
    }

    /// Tracks blocked by autoplay policy are still wanted but paused
    fn resume(&mut self) {
        for track in [Track::Background, Track::Victory] {
            if let Some(el) = self.element(track) {
                if self.wanted(track) && el.paused() {
                    start_playback(el, format!("{:?} track", track));
                }
            }
        }
    }
}

/// GPU quads plus a 2D text overlay
pub struct WebCanvas {
    quads: QuadBatch,
    gpu: RenderState,
    hud: CanvasRenderingContext2d,
    field: (f32, f32),
}

fn font(font_size: f32) -> String {
    format!("bold {}px monospace", font_size)
}

impl WebCanvas {
    /// Submit the frame to the GPU; the overlay is already up to date
    pub fn present(&mut self) {
        match self.gpu.render(&self.quads) {
            Ok(_) => {}
            Err(wgpu::SurfaceError::Lost) => {
                let (w, h) = self.gpu.size;
                self.gpu.resize(w, h);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory!");
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}

impl Canvas for WebCanvas {
    fn clear(&mut self, color: Color) {
        self.quads.clear(color);
        self.hud
            .clear_rect(0.0, 0.0, self.field.0 as f64, self.field.1 as f64);
    }

    fn fill_rect(&mut self, rect: Aabb, color: Color) {
        self.quads.push_rect(&rect, color);
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, font_size: f32, color: Color) {
        self.hud.set_font(&font(font_size));
        self.hud.set_fill_style_str(&color.to_css());
        let _ = self.hud.fill_text(text, x as f64, y as f64);
    }

    fn measure_text(&self, text: &str, font_size: f32) -> f32 {
        self.hud.set_font(&font(font_size));
        self.hud
            .measure_text(text)
            .map(|m| m.width() as f32)
            .unwrap_or(0.0)
    }
}

struct App {
    game: Game<WebAudio>,
    canvas: WebCanvas,
    keyboard: Keyboard,
    last_time: f64,
    /// Mute chosen by the player, restored when focus returns
    user_muted: bool,
}

impl App {
    fn frame(&mut self, time: f64) {
        let dt = if self.last_time > 0.0 {
            ((time - self.last_time) / 1000.0) as f32
        } else {
            self.game.config().frame_dt()
        };
        self.last_time = time;

        let input = self.keyboard.tick_input();
        self.game.frame(&input, dt, &mut self.canvas);
        self.keyboard.end_frame();
        self.canvas.present();
    }
}

fn canvas_by_id(document: &web_sys::Document, id: &str) -> HtmlCanvasElement {
    document
        .get_element_by_id(id)
        .unwrap_or_else(|| panic!("no #{id} element"))
        .dyn_into()
        .unwrap_or_else(|_| panic!("#{id} is not a canvas"))
}

pub async fn run() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

    log::info!("Pong starting...");

    let config = GameConfig::default();
    let field = (config.screen_width, config.screen_height);

    let window = web_sys::window().expect("no window");
    let document = window.document().expect("no document");

    // GPU canvas backing store matches the field at device resolution
    let canvas = canvas_by_id(&document, "canvas");
    let dpr = window.device_pixel_ratio();
    let width = (field.0 as f64 * dpr) as u32;
    let height = (field.1 as f64 * dpr) as u32;
    canvas.set_width(width);
    canvas.set_height(height);

    // Text overlay works in field units; CSS stretches it over the GPU canvas
    let hud_canvas = canvas_by_id(&document, "hud");
    hud_canvas.set_width(field.0 as u32);
    hud_canvas.set_height(field.1 as u32);
    let hud: CanvasRenderingContext2d = hud_canvas
        .get_context("2d")
        .expect("get_context failed")
        .expect("no 2d context")
        .dyn_into()
        .expect("not a 2d context");
    hud.set_text_baseline("top");

    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
        backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
        ..Default::default()
    });

    let surface = instance
        .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
        .expect("Failed to create surface");

    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        })
        .await
        .expect("Failed to get adapter");

    log::info!("Using adapter: {:?}", adapter.get_info().name);

    let gpu = RenderState::new(surface, &adapter, width, height, field).await;

    let seed = js_sys::Date::now() as u64;
    log::info!("Serve seed: {}", seed);

    let settings = Settings::default();
    let audio = WebAudio::new(&config.audio);
    let user_muted = settings.muted;
    let game = Game::new(config, Box::new(PcgServe::new(seed)), audio, settings)
        .expect("Invalid game config");

    let app = Rc::new(RefCell::new(App {
        game,
        canvas: WebCanvas {
            quads: QuadBatch::new(),
            gpu,
            hud,
            field,
        },
        keyboard: Keyboard::new(),
        last_time: 0.0,
        user_muted,
    }));

    setup_input_handlers(app.clone());
    setup_focus_handlers(app.clone());

    request_animation_frame(app);

    log::info!("Pong running!");
}

fn setup_input_handlers(app: Rc<RefCell<App>>) {
    let window = web_sys::window().expect("no window");

    {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let mut a = app.borrow_mut();
            // A key press is a user gesture: browsers now allow playback
            a.game.audio_mut().resume();

            if event.code() == "KeyM" && !event.repeat() {
                a.game.audio_mut().toggle_mute();
                a.user_muted = a.game.audio().settings().muted;
                return;
            }
            if a.keyboard.key_down(&event.code()) {
                event.prevent_default();
            }
        });
        let _ =
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if app.borrow_mut().keyboard.key_up(&event.code()) {
                event.prevent_default();
            }
        });
        let _ = window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn setup_focus_handlers(app: Rc<RefCell<App>>) {
    let window = web_sys::window().expect("no window");

    {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
            let mut a = app.borrow_mut();
            // Key-up events are lost while unfocused
            a.keyboard.release_all();
            if a.game.audio().settings().mute_on_blur {
                a.game.audio_mut().set_muted(true);
            }
        });
        let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
            let mut a = app.borrow_mut();
            if a.game.audio().settings().mute_on_blur {
                let muted = a.user_muted;
                a.game.audio_mut().set_muted(muted);
            }
        });
        let _ = window.add_event_listener_with_callback("focus", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn request_animation_frame(app: Rc<RefCell<App>>) {
    let Some(window) = web_sys::window() else { return };
    let closure = Closure::once(move |time: f64| {
        game_loop(app, time);
    });
    let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    closure.forget();
}

fn game_loop(app: Rc<RefCell<App>>, time: f64) {
    app.borrow_mut().frame(time);
    request_animation_frame(app);
}
