//! Fire Flap entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use fire_flap::audio::AudioManager;
    use fire_flap::platform::{Hud, score_text};
    use fire_flap::renderer::{RenderState, Sprite};
    use fire_flap::{Game, Settings};

    /// HUD backed by DOM elements in index.html
    struct DomHud {
        document: Document,
    }

    impl DomHud {
        fn set_hidden(&self, id: &str, hidden: bool) {
            if let Some(el) = self.document.get_element_by_id(id) {
                let _ = el.set_attribute("class", if hidden { "hidden" } else { "" });
            }
        }
    }

    impl Hud for DomHud {
        fn set_score(&self, score: u32) {
            if let Some(el) = self.document.get_element_by_id("score") {
                el.set_text_content(Some(&score_text(score)));
            }
        }

        fn show_game_over(&self, final_score: u32) {
            if let Some(el) = self.document.get_element_by_id("finalScore") {
                el.set_text_content(Some(&final_score.to_string()));
            }
            self.set_hidden("gameOver", false);
        }

        fn hide_game_over(&self) {
            self.set_hidden("gameOver", true);
        }

        fn set_start_prompt(&self, visible: bool) {
            self.set_hidden("start-prompt", !visible);
        }
    }

    /// Everything the browser callbacks share
    struct App {
        game: Game,
        render_state: Option<RenderState>,
        audio: AudioManager,
        hud: DomHud,
        sprite: Sprite,
        canvas: HtmlCanvasElement,
    }

    impl App {
        /// One update+render pass
        fn frame(&mut self) {
            let scene = self.game.frame(&self.audio, &self.hud, Some(&self.sprite));

            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&scene) {
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

        /// Match the canvas to the window and rescale the world
        fn fit_to_window(&mut self) {
            let Some(window) = web_sys::window() else { return };
            let (css_w, css_h, pixel_w, pixel_h) = window_size(&window);

            self.canvas.set_width(pixel_w);
            self.canvas.set_height(pixel_h);
            if let Some(ref mut render_state) = self.render_state {
                render_state.resize(pixel_w, pixel_h);
            }
            self.game.resize(css_w, css_h);
        }

        fn toggle_mute(&mut self) {
            let settings = self.game.settings_mut();
            settings.muted = !settings.muted;
            settings.save();
            log::info!("Muted: {}", settings.muted);
            self.audio.apply_settings(self.game.settings());
        }
    }

    /// (CSS width, CSS height, pixel width, pixel height)
    fn window_size(window: &web_sys::Window) -> (f32, f32, u32, u32) {
        let dpr = window.device_pixel_ratio();
        let css_w = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(1000.0);
        let css_h = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(600.0);
        (
            css_w as f32,
            css_h as f32,
            (css_w * dpr).max(1.0) as u32,
            (css_h * dpr).max(1.0) as u32,
        )
    }

    async fn init_gpu(
        canvas: &HtmlCanvasElement,
        width: u32,
        height: u32,
    ) -> Result<RenderState, String> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| format!("surface: {e}"))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| format!("adapter: {e}"))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        RenderState::new(surface, &adapter, width, height)
            .await
            .map_err(|e| format!("device: {e}"))
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Fire Flap starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        let (css_w, css_h, pixel_w, pixel_h) = window_size(&window);
        canvas.set_width(pixel_w);
        canvas.set_height(pixel_h);

        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;
        let audio = AudioManager::new(&settings);
        let game = Game::new(seed, fire_flap::sim::Viewport::new(css_w, css_h), settings);
        log::info!("Game initialized with seed: {}", seed);

        // Rendering failures leave the HUD alive; the loop keeps running
        let render_state = match init_gpu(&canvas, pixel_w, pixel_h).await {
            Ok(state) => Some(state),
            Err(e) => {
                log::error!("WebGPU unavailable ({e}); running without canvas output");
                None
            }
        };

        let hud = DomHud {
            document: document.clone(),
        };
        hud.set_score(0);
        hud.hide_game_over();
        hud.set_start_prompt(true);

        let app = Rc::new(RefCell::new(App {
            game,
            render_state,
            audio,
            hud,
            sprite: Sprite::bird(),
            canvas: canvas.clone(),
        }));

        setup_input_handlers(&canvas, app.clone());
        setup_restart_button(&document, app.clone());
        setup_resize(app.clone());

        request_animation_frame(app);

        log::info!("Fire Flap running!");
        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        // Keyboard
        if let Some(window) = web_sys::window() {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut a = app.borrow_mut();
                match event.code().as_str() {
                    "Space" => {
                        event.prevent_default();
                        a.audio.resume();
                        a.game.press_jump();
                    }
                    "KeyM" => a.toggle_mute(),
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse click
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut a = app.borrow_mut();
                a.audio.resume();
                a.game.press_jump();
            });
            let _ = canvas
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                let mut a = app.borrow_mut();
                a.audio.resume();
                a.game.press_jump();
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_restart_button(document: &Document, app: Rc<RefCell<App>>) {
        if let Some(btn) = document.get_element_by_id("restartBtn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut a = app.borrow_mut();
                let a = &mut *a;
                a.game.reset(&a.hud);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else { return };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            app.borrow_mut().fit_to_window();
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else { return };
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>) {
        app.borrow_mut().frame();
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        log::error!("Startup failed: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use fire_flap::platform::{Hud, LogHud, Silent};
    use fire_flap::sim::{Phase, Viewport, World};
    use fire_flap::{Game, Settings};

    /// One minute at 60 Hz
    const MAX_FRAMES: u32 = 60 * 60;
    /// How far above the gap floor the autopilot lets the player sink
    const FLOOR_CLEARANCE: f32 = 20.0;

    /// Flap when falling close to the bottom of the next gap
    fn should_flap(world: &World) -> bool {
        if !world.is_started() {
            return true;
        }
        let player = &world.player;
        let floor = world
            .obstacles
            .iter()
            .find(|o| o.right() >= player.left())
            .map(|o| o.bottom_y)
            .unwrap_or(world.viewport.height * 0.6);
        player.vel_y > 0.0 && player.bottom() > floor - FLOOR_CLEARANCE
    }

    pub fn run(seed: u64) {
        let settings = Settings::load();
        let mut game = Game::new(seed, Viewport::REFERENCE, settings);
        let (audio, hud) = (Silent, LogHud);
        hud.set_start_prompt(true);

        while game.frame_count() < MAX_FRAMES {
            if should_flap(game.world()) {
                game.press_jump();
            }
            game.frame(&audio, &hud, None);
            if game.world().phase == Phase::Over {
                break;
            }
        }

        println!(
            "Autopilot (seed {}) finished after {} frames with score {}",
            seed,
            game.frame_count(),
            game.world().score
        );
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Fire Flap (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);
    headless::run(seed);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
