//! Countdown Blast entry point
//!
//! Boots the browser app and runs the frame loop. On native targets the
//! binary just runs a headless pass over the whole sequence.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::MouseEvent;

    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use countdown_blast::consts::*;
    use countdown_blast::flow::{FlowInput, FlowPhase, FlowState, tick};
    use countdown_blast::view::{self, ViewCache};

    /// App instance holding all state
    struct App {
        state: FlowState,
        view: ViewCache,
        accumulator: f32,
        last_time: f64,
        input: FlowInput,
        // Track phase for transition logging
        last_phase: FlowPhase,
    }

    impl App {
        fn new(seed: u64) -> Self {
            Self {
                state: FlowState::new(seed),
                view: ViewCache::default(),
                accumulator: 0.0,
                last_time: 0.0,
                input: FlowInput::default(),
                last_phase: FlowPhase::Welcome,
            }
        }

        /// Run simulation ticks for one frame
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                let input = self.input.clone();
                tick(&mut self.state, &input);
                self.accumulator -= SIM_DT;
                substeps += 1;

                // Clear one-shot inputs after processing
                self.input.start = false;
                self.input.reset = false;
                self.input.skip_countdown = false;
            }

            if self.state.phase != self.last_phase {
                match self.state.phase {
                    FlowPhase::Welcome => log::info!("Flow reset"),
                    FlowPhase::Countdown => log::info!("Countdown started"),
                    FlowPhase::Explosion => {
                        log::info!("Explosion! {} particles", self.state.particles.len())
                    }
                }
                self.last_phase = self.state.phase;
            }
        }

        /// Push the current state into the page
        fn render(&mut self) {
            let document = web_sys::window().unwrap().document().unwrap();
            view::sync(&document, &self.state, &mut self.view);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Countdown Blast starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let seed = js_sys::Date::now() as u64;
        let app = Rc::new(RefCell::new(App::new(seed)));

        let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        app.borrow_mut().state.set_center(w as f32, h as f32);

        // Backdrop stars draw from their own stream so the burst RNG is
        // unaffected by cosmetics
        let mut star_rng = Pcg32::seed_from_u64(seed ^ 0x5354_4152);
        view::spawn_starfield(&document, &mut star_rng);

        setup_buttons(app.clone());
        setup_keyboard(app.clone());
        setup_resize(app.clone());

        request_animation_frame(app);

        log::info!("Countdown Blast running (seed {})", seed);
    }

    fn setup_buttons(app: Rc<RefCell<App>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        if let Some(btn) = document.get_element_by_id("start-btn") {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().input.start = true;
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("reset-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().input.reset = true;
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_keyboard(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            let mut a = app.borrow_mut();
            match event.key().as_str() {
                " " | "Enter" => a.input.start = true,
                "Escape" | "r" | "R" => a.input.reset = true,
                "+" | "=" => a.input.skip_countdown = true, // Debug: jump to the last second
                "d" | "D" => {
                    // Debug: dump the flow state as JSON
                    match serde_json::to_string(&a.state) {
                        Ok(json) => log::info!("state: {}", json),
                        Err(e) => log::warn!("state dump failed: {}", e),
                    }
                }
                _ => {}
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_resize(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let win = window.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let w = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let h = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            app.borrow_mut().state.set_center(w as f32, h as f32);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            frame(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();

            let dt = if a.last_time > 0.0 {
                ((time - a.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            a.last_time = time;

            a.update(dt);
            a.render();
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Countdown Blast (native) starting...");
    log::info!("The browser build is the real thing - run with `trunk serve`");

    println!("\nRunning flow demo...");
    demo_flow();
}

/// Headless pass over the whole sequence
#[cfg(not(target_arch = "wasm32"))]
fn demo_flow() {
    use countdown_blast::consts::{PARTICLE_LINGER_TICKS, TICKS_PER_SECOND};
    use countdown_blast::flow::{FlowInput, FlowPhase, FlowState, tick};

    let mut state = FlowState::new(12345);
    state.set_center(1280.0, 720.0);

    tick(
        &mut state,
        &FlowInput {
            start: true,
            ..Default::default()
        },
    );

    let idle = FlowInput::default();
    while state.phase == FlowPhase::Countdown {
        let before = state.countdown.remaining;
        tick(&mut state, &idle);
        if state.countdown.remaining != before {
            println!("  T-{}", state.countdown.remaining);
        }
    }
    println!("  boom: {} particles", state.particles.len());

    for _ in 0..PARTICLE_LINGER_TICKS {
        tick(&mut state, &idle);
    }
    assert!(state.particles.is_empty());
    println!("  particles cleared after {} s", PARTICLE_LINGER_TICKS / TICKS_PER_SECOND);

    tick(
        &mut state,
        &FlowInput {
            reset: true,
            ..Default::default()
        },
    );
    assert_eq!(state.phase, FlowPhase::Welcome);
    println!("✓ Flow demo passed!");
}
