//! Tux Drift entry point
//!
//! Mounts the animated backdrop behind the page, wires the pointer and
//! scroll trackers, and drives the fixed-timestep loop from
//! requestAnimationFrame.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Event, MouseEvent, Window};

    use glam::Vec2;
    use tux_drift::consts::*;
    use tux_drift::renderer::BackdropDom;
    use tux_drift::sim::{PointerState, SceneState, TickInput, default_roster, tick};
    use tux_drift::tuning::MotionTuning;

    /// Background instance holding all state
    struct App {
        scene: SceneState,
        backdrop: BackdropDom,
        tuning: MotionTuning,
        input: TickInput,
        accumulator: f32,
        last_time: f64,
    }

    impl App {
        /// Run simulation substeps for one frame
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                tick(
                    &mut self.scene,
                    &self.input,
                    &self.backdrop,
                    &self.tuning,
                    SIM_DT,
                );
                self.accumulator -= SIM_DT;
                substeps += 1;
            }
        }

        /// Push the current frame into the DOM
        fn render(&self) {
            self.backdrop.apply(&self.scene, &self.input, &self.tuning);
        }

        /// Refresh the per-frame collaborator state (route, viewport)
        fn refresh_host_state(&mut self, window: &Window) {
            if let Ok(path) = window.location().pathname() {
                self.input.route = path;
            }
            let w = window
                .inner_width()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0);
            let h = window
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0);
            self.input.viewport = Vec2::new(w as f32, h as f32);
        }
    }

    /// Registered event listeners, detached deterministically on drop.
    ///
    /// A leaked listener would keep mutating input state for a torn-down
    /// scene, so the closures are stored here instead of `forget()`-ed.
    struct Listeners {
        window: Window,
        entries: Vec<(&'static str, Closure<dyn FnMut(Event)>)>,
    }

    impl Listeners {
        fn attach(window: Window, app: Rc<RefCell<App>>) -> Self {
            let mut entries = Vec::new();

            // Pointer tracker: single writer of PointerState
            {
                let app = app.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |event: Event| {
                    if let Some(event) = event.dyn_ref::<MouseEvent>() {
                        app.borrow_mut().input.pointer = PointerState {
                            pos: Some(Vec2::new(
                                event.client_x() as f32,
                                event.client_y() as f32,
                            )),
                        };
                    }
                });
                entries.push(("mousemove", closure));
            }

            // Scroll tracker: single writer of ScrollState
            {
                let window = window.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: Event| {
                    let offset = window.scroll_y().unwrap_or(0.0);
                    app.borrow_mut().input.scroll.offset_y = offset as f32;
                });
                entries.push(("scroll", closure));
            }

            for (name, closure) in &entries {
                let _ = window
                    .add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
            }

            Self { window, entries }
        }

        fn detach(&mut self) {
            for (name, closure) in self.entries.drain(..) {
                let _ = self
                    .window
                    .remove_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
            }
        }
    }

    impl Drop for Listeners {
        fn drop(&mut self) {
            self.detach();
        }
    }

    /// Handle to a mounted background; consuming it tears everything down
    pub struct BackgroundHandle {
        app: Rc<RefCell<App>>,
        listeners: Listeners,
        mounted: Rc<Cell<bool>>,
    }

    impl BackgroundHandle {
        /// Detach listeners, stop the frame loop and remove the DOM tree
        pub fn unmount(mut self) {
            self.mounted.set(false);
            self.listeners.detach();
            self.app.borrow().backdrop.unmount();
        }
    }

    thread_local! {
        static HANDLE: RefCell<Option<BackgroundHandle>> = const { RefCell::new(None) };
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Tux Drift starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let tuning = MotionTuning::load();

        let mut roster = default_roster();
        let before = roster.len();
        roster.retain(|spec| spec.is_valid());
        if roster.len() < before {
            log::warn!("Dropped {} invalid element specs", before - roster.len());
        }

        let backdrop = match BackdropDom::mount(&document, &roster) {
            Ok(backdrop) => backdrop,
            Err(err) => {
                log::error!("Failed to mount backdrop: {err:?}");
                return;
            }
        };

        let seed = js_sys::Date::now() as u64;
        let mut app = App {
            scene: SceneState::new(roster, seed),
            backdrop,
            tuning,
            input: TickInput::default(),
            accumulator: 0.0,
            last_time: 0.0,
        };
        app.refresh_host_state(&window);
        let app = Rc::new(RefCell::new(app));

        let listeners = Listeners::attach(window, app.clone());
        let mounted = Rc::new(Cell::new(true));

        HANDLE.with(|handle| {
            *handle.borrow_mut() = Some(BackgroundHandle {
                app: app.clone(),
                listeners,
                mounted: mounted.clone(),
            });
        });

        request_animation_frame(app, mounted);
        log::info!("Tux Drift running (seed {seed})");
    }

    fn request_animation_frame(app: Rc<RefCell<App>>, mounted: Rc<Cell<bool>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |time: f64| {
            frame_loop(app, mounted, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>, mounted: Rc<Cell<bool>>, time: f64) {
        // Unmounted: stop rescheduling, the loop ends here
        if !mounted.get() {
            return;
        }

        {
            let window = web_sys::window().expect("no window");
            let mut app = app.borrow_mut();

            let dt = if app.last_time > 0.0 {
                ((time - app.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            app.last_time = time;

            app.refresh_host_state(&window);
            app.update(dt);
            app.render();
        }

        request_animation_frame(app, mounted);
    }

    /// Tear down the mounted background (exported for the host page)
    pub fn unmount() {
        if let Some(handle) = HANDLE.with(|handle| handle.borrow_mut().take()) {
            handle.unmount();
        }
    }

    /// Update the reduced-motion preference and persist the tuning
    pub fn set_reduced_motion(enabled: bool) {
        HANDLE.with(|handle| {
            if let Some(handle) = handle.borrow().as_ref() {
                let mut app = handle.app.borrow_mut();
                app.tuning.reduced_motion = enabled;
                app.tuning.save();
                log::info!("Reduced motion: {enabled}");
            }
        });
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

/// Remove the backdrop and detach all listeners
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn unmount_background() {
    wasm_app::unmount();
}

/// Toggle the reduced-motion preference from the host page
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn set_reduced_motion(enabled: bool) {
    wasm_app::set_reduced_motion(enabled);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use glam::Vec2;
    use tux_drift::consts::SIM_DT;
    use tux_drift::percent_to_pixels;
    use tux_drift::sim::{
        Measure, PointerState, Rect, SceneState, TickInput, default_roster, tick,
    };
    use tux_drift::tuning::MotionTuning;

    env_logger::init();
    log::info!("Tux Drift (native) starting...");
    log::info!("Native mode is headless - build with trunk for the web version");

    // Synthetic measurement: homes laid out in a 1280x720 viewport
    struct HomeMeasure {
        centers: Vec<Vec2>,
    }

    impl Measure for HomeMeasure {
        fn measure(&self, index: usize) -> Option<Rect> {
            let c = self.centers.get(index)?;
            Some(Rect {
                x: c.x - 50.0,
                y: c.y - 50.0,
                width: 100.0,
                height: 100.0,
            })
        }
    }

    let viewport = Vec2::new(1280.0, 720.0);
    let roster = default_roster();
    let measure = HomeMeasure {
        centers: roster
            .iter()
            .map(|spec| percent_to_pixels(spec.home, viewport))
            .collect(),
    };

    let tuning = MotionTuning::default();
    let mut scene = SceneState::new(roster, 1);

    // Park the pointer near the first element and let the springs settle
    let input = TickInput {
        pointer: PointerState {
            pos: Some(measure.centers[0] + Vec2::new(20.0, 0.0)),
        },
        viewport,
        ..Default::default()
    };
    for _ in 0..240 {
        tick(&mut scene, &input, &measure, &tuning, SIM_DT);
    }

    let offset = scene.elements[0].spring.offset;
    println!(
        "element 0 repelled to offset ({:.1}, {:.1}) at distance {:.1}",
        offset.x, offset.y, scene.elements[0].distance
    );
    assert!(offset.x < -30.0, "element should be pushed away from the pointer");
    println!("✓ Headless repulsion check passed!");
}
