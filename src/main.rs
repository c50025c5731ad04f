//! Paddle Pong entry point
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

    use paddle_pong::platform::{FrameScheduler, InputAdapter};
    use paddle_pong::renderer::{Frame, RenderState};
    use paddle_pong::sim::Simulation;
    use paddle_pong::{Settings, SimulationClock};

    /// Game instance holding all state
    struct Game {
        clock: SimulationClock,
        input: InputAdapter,
        frame: Frame,
        render_state: Option<RenderState>,
    }

    impl Game {
        fn new(settings: &Settings) -> Self {
            Self {
                clock: SimulationClock::new(Simulation::from_settings(settings)),
                input: settings.input_adapter(),
                frame: Frame::new(),
                render_state: None,
            }
        }

        /// Present the recorded frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&self.frame) {
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

        /// Mirror the frame's text labels into the DOM score element
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let Some(el) = document.get_element_by_id("score") else {
                return;
            };

            for label in self.frame.labels() {
                if el.text_content().as_deref() != Some(label.text.as_str()) {
                    el.set_text_content(Some(&label.text));
                }
                let style = format!(
                    "position:absolute;left:{}px;top:{}px;transform:translate(-50%,-100%);\
                     font:{}px Arial;color:white",
                    label.center_x, label.baseline_y, label.size_px
                );
                let _ = el.set_attribute("style", &style);
            }
        }
    }

    /// Schedules the next game loop iteration on the browser's frame callback
    struct AnimationFrame {
        game: Rc<RefCell<Game>>,
    }

    impl FrameScheduler for AnimationFrame {
        fn request_frame(&mut self) {
            request_animation_frame(self.game.clone());
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Paddle Pong starting...");

        // Write back the repaired settings so LocalStorage holds an editable copy
        let settings = Settings::load();
        settings.save();

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Canvas pixels map 1:1 onto field units
        let width = settings.field_width as u32;
        let height = settings.field_height as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let game = Rc::new(RefCell::new(Game::new(&settings)));
        log::info!(
            "Game initialized with seed: {}",
            game.borrow().clock.sim().seed
        );

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let bounds = game.borrow().clock.sim().bounds;
        match RenderState::new(surface, &adapter, width, height, bounds).await {
            Ok(render_state) => game.borrow_mut().render_state = Some(render_state),
            Err(e) => log::error!("Failed to create device: {}", e),
        }

        setup_input_handlers(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Paddle Pong running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            let mut g = game.borrow_mut();
            let g = &mut *g;
            if g.clock.apply_key(&g.input, &event.key()).is_some() {
                // Keep arrow keys from scrolling the page
                event.prevent_default();
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let mut scheduler = AnimationFrame { game: game.clone() };
        let mut g = game.borrow_mut();
        let g = &mut *g;

        g.clock.run_frame(&mut g.frame, &mut scheduler);
        g.render();
        g.update_hud();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use paddle_pong::platform::{Direction, FrameScheduler, PaddleCommand, PendingFrame};
    use paddle_pong::renderer::Frame;
    use paddle_pong::sim::{Side, Simulation};
    use paddle_pong::{Settings, SimulationClock};

    env_logger::init();
    log::info!("Paddle Pong (native) starting...");
    log::info!("Native mode runs headless - run with `trunk serve` for the web version");

    let settings = Settings::load();
    let input = settings.input_adapter();
    let mut clock = SimulationClock::new(Simulation::from_settings(&settings));
    let mut frame = Frame::new();
    let mut scheduler = PendingFrame::new();

    log::info!(
        "Running {} frames on a {}x{} field, seed {}",
        settings.headless_frames,
        settings.field_width,
        settings.field_height,
        clock.sim().seed
    );

    // Prime the loop; afterwards each frame schedules the next
    scheduler.request_frame();
    while scheduler.take() && clock.frames() < u64::from(settings.headless_frames) {
        // Both paddles chase the ball with the same key presses a player would send
        for side in Side::ALL {
            let sim = clock.sim();
            let paddle = sim.paddle(side).rect();
            let ball = sim.ball.rect();
            let offset = (ball.top() + ball.h / 2.0) - (paddle.top() + paddle.h / 2.0);

            let direction = if offset < -input.step {
                Direction::Up
            } else if offset > input.step {
                Direction::Down
            } else {
                continue;
            };
            let key = input.bindings.key_for(PaddleCommand { side, direction }).to_owned();
            clock.apply_key(&input, &key);
        }

        clock.run_frame(&mut frame, &mut scheduler);
    }

    let score = clock.sim().score;
    log::info!("Finished after {} frames, final score {}", clock.frames(), score);
    println!("{}", score);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
