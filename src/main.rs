//! Petit Runner entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use petit_runner::audio::AudioManager;
    use petit_runner::consts::*;
    use petit_runner::renderer::RenderState;
    use petit_runner::{InputEvent, Runner, Tuning};

    /// Game instance holding all browser-side state
    struct Game {
        runner: Runner,
        render_state: Option<RenderState>,
        audio: AudioManager,
        last_time: f64,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Game {
        fn new(seed: u64) -> Self {
            Self {
                runner: Runner::new(seed, Tuning::default()),
                render_state: None,
                audio: AudioManager::new(),
                last_time: 0.0,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// Run simulation ticks and play what happened
        fn update(&mut self, dt: f32, time: f64) {
            let events = self.runner.frame(dt);
            self.audio.set_muted(self.runner.muted());
            self.audio.play_events(&events);

            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let snapshot = self.runner.snapshot();
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render_snapshot(&snapshot) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let snapshot = self.runner.snapshot();

            if let Some(el) = document.query_selector("#hud-score .hud-value").ok().flatten() {
                el.set_text_content(Some(&snapshot.score.to_string()));
            }
            if let Some(el) = document.query_selector("#hud-money .hud-value").ok().flatten() {
                el.set_text_content(Some(&snapshot.currency.to_string()));
            }
            if let Some(el) = document.query_selector("#hud-fps .hud-value").ok().flatten() {
                el.set_text_content(Some(&self.fps.to_string()));
            }
            if let Some(el) = document.get_element_by_id("autopilot") {
                let class = if self.runner.autopilot() { "" } else { "hidden" };
                let _ = el.set_attribute("class", class);
            }
            if let Some(el) = document.get_element_by_id("game-over") {
                let class = if snapshot.game_over { "" } else { "hidden" };
                let _ = el.set_attribute("class", class);
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to init logger: {e}").into());
        }

        log::info!("Petit Runner starting...");

        let Some(window) = web_sys::window() else {
            log::error!("no window");
            return;
        };
        let Some(document) = window.document() else {
            log::error!("no document");
            return;
        };

        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let Some(canvas) = document
            .get_element_by_id("canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("no canvas element");
            return;
        };

        // Backing store at device resolution, world is letterboxed into it
        let dpr = window.device_pixel_ratio();
        let width = ((canvas.client_width().max(1) as f64) * dpr) as u32;
        let height = ((canvas.client_height().max(1) as f64) * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);
        log::info!(
            "Canvas {}x{} for a {}x{} world at {} Hz",
            width,
            height,
            SCREEN_WIDTH,
            SCREEN_HEIGHT,
            TICK_RATE
        );

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed)));

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
            Ok(surface) => surface,
            Err(e) => {
                log::error!("Failed to create surface: {e}");
                return;
            }
        };

        let adapter = match instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
        {
            Ok(adapter) => adapter,
            Err(e) => {
                log::error!("Failed to get adapter: {e}");
                return;
            }
        };

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        match RenderState::new(surface, &adapter, width, height).await {
            Ok(render_state) => game.borrow_mut().render_state = Some(render_state),
            Err(e) => {
                log::error!("Renderer init failed: {e}");
                return;
            }
        }

        setup_input_handlers(game.clone());

        if let Some(hud) = document.get_element_by_id("hud") {
            let _ = hud.set_attribute("class", "");
        }

        request_animation_frame(game);

        log::info!("Petit Runner running!");
    }

    /// Map a key to a game input
    fn input_for_key(key: &str) -> Option<InputEvent> {
        match key {
            " " | "ArrowUp" => Some(InputEvent::Jump),
            "r" | "R" => Some(InputEvent::Reset),
            "Escape" => Some(InputEvent::Quit),
            "i" | "I" => Some(InputEvent::ToggleAutopilot),
            "m" | "M" => Some(InputEvent::ToggleMute),
            _ => None,
        }
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            if let Some(input) = input_for_key(event.key().as_str()) {
                // Keep space/arrows from scrolling the page
                event.prevent_default();
                game.borrow_mut().runner.handle(input);
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            if g.runner.quit_requested() {
                log::info!("Quit requested - stopping game loop");
                if let Some(el) = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.get_element_by_id("quit"))
                {
                    let _ = el.set_attribute("class", "");
                }
                return;
            }

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt, time);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

/// Environment variable naming an optional tuning JSON file
#[cfg(not(target_arch = "wasm32"))]
const TUNING_ENV: &str = "PETIT_RUNNER_TUNING";

/// Length of the headless demo (one minute of game time)
#[cfg(not(target_arch = "wasm32"))]
const DEMO_TICKS: u32 = 60 * petit_runner::consts::TICK_RATE;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use petit_runner::sim::GameEvent;
    use petit_runner::{InputEvent, Runner, Tuning};

    env_logger::init();
    log::info!("Petit Runner (native) starting...");
    log::info!("Native mode runs a headless autopilot demo - run with `trunk serve` to play");

    let tuning = match std::env::var(TUNING_ENV) {
        Ok(path) => match Tuning::load(&path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {path}");
                tuning
            }
            Err(e) => {
                log::warn!("{e}; using default tuning");
                Tuning::default()
            }
        },
        Err(_) => Tuning::default(),
    };

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let mut runner = Runner::new(seed, tuning);
    runner.handle(InputEvent::ToggleAutopilot);

    let (mut jumps, mut pickups, mut crashes) = (0u32, 0u32, 0u32);
    for _ in 0..DEMO_TICKS {
        for event in runner.step() {
            match event {
                GameEvent::Jumped => jumps += 1,
                GameEvent::Collected(_) => pickups += 1,
                GameEvent::Crashed => {
                    crashes += 1;
                    runner.handle(InputEvent::Reset);
                }
                GameEvent::Restarted => {}
            }
        }
    }

    let snapshot = runner.snapshot();
    println!(
        "{DEMO_TICKS} ticks: {jumps} jumps, {pickups} pickups, {crashes} crashes; \
         current run score {} currency {}",
        snapshot.score, snapshot.currency
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
