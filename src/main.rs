//! Achievement Drift entry point
//!
//! On the web: mounts the floating cards over the landing page and runs the
//! frame loop. Natively: steps the same loop headless and prints where the
//! cards ended up.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_landing {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::MouseEvent;

    use achievement_drift::platform::web::{
        cancel_frame, feed_from_page, request_frame, viewport_from_window,
    };
    use achievement_drift::renderer::dom::{DETAIL_CLOSE_ID, DETAIL_PANEL_ID};
    use achievement_drift::renderer::{DomOverlay, placements};
    use achievement_drift::selection::{DetailView, Selection, hit_test};
    use achievement_drift::{DriftSettings, FrameLoop};

    /// Landing page instance holding all drift state
    struct Landing {
        frame_loop: FrameLoop,
        selection: Selection,
        overlay: Option<DomOverlay>,
    }

    impl Landing {
        fn new(settings: DriftSettings) -> Self {
            Self {
                frame_loop: FrameLoop::new(settings),
                selection: Selection::new(),
                overlay: None,
            }
        }

        /// Push the latest positions to the DOM
        fn render(&self) {
            if let Some(ref overlay) = self.overlay {
                overlay.update(&placements(
                    self.frame_loop.state(),
                    self.frame_loop.achievements(),
                ));
            }
        }

        /// Handle a click anywhere on the page
        fn click(&mut self, event: &MouseEvent) {
            if self.selection.is_open() {
                let target = event
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::Element>().ok());
                let in_panel = target
                    .as_ref()
                    .and_then(|t| t.closest(&format!("#{}", DETAIL_PANEL_ID)).ok().flatten())
                    .is_some();
                let on_close = target.as_ref().map(|t| t.id() == DETAIL_CLOSE_ID).unwrap_or(false);
                if in_panel && !on_close {
                    return;
                }
                self.selection.clear();
                if let Some(ref overlay) = self.overlay {
                    overlay.show_detail(None);
                }
                return;
            }

            let viewport = viewport_from_window();
            let point = glam::Vec2::new(event.client_x() as f32, event.client_y() as f32);
            let extent = self.frame_loop.settings().extent();
            if let Some(index) = hit_test(self.frame_loop.state(), point, &viewport, extent) {
                if let Some(achievement) = self.frame_loop.achievements().get(index) {
                    self.selection.select(achievement);
                    if let Some(ref overlay) = self.overlay {
                        overlay.show_detail(Some(&DetailView::from(achievement)));
                    }
                }
            }
        }

        /// Stop the loop and remove the overlay
        fn teardown(&mut self) {
            if let Some(handle) = self.frame_loop.teardown() {
                cancel_frame(handle);
            }
            if let Some(overlay) = self.overlay.take() {
                overlay.unmount();
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to init logger: {}", e).into());
        }

        log::info!("Achievement Drift starting...");

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document, nothing to do");
            return;
        };

        let settings = DriftSettings::load();
        let achievements = feed_from_page();
        let landing = Rc::new(RefCell::new(Landing::new(settings)));

        // Initialize drift
        let seed = js_sys::Date::now() as u64;
        {
            let mut l = landing.borrow_mut();
            l.frame_loop.load(&achievements, seed);
            if !l.frame_loop.is_animating() {
                log::info!("No recent achievements, skipping drift");
                return;
            }

            match DomOverlay::mount(&document) {
                Ok(mut overlay) => {
                    let initial = placements(l.frame_loop.state(), l.frame_loop.achievements());
                    let card_width = l.frame_loop.settings().card_width;
                    if let Err(e) = overlay.rebuild(&document, &initial, card_width) {
                        log::error!("Failed to build cards: {:?}", e);
                    }
                    l.overlay = Some(overlay);
                }
                Err(e) => {
                    log::error!("Failed to mount overlay: {:?}", e);
                    return;
                }
            }
        }

        setup_click_handler(landing.clone());
        setup_teardown(landing.clone());

        // Start drift loop
        request_animation_frame(landing);

        log::info!("Achievement Drift running!");
    }

    fn setup_click_handler(landing: Rc<RefCell<Landing>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            landing.borrow_mut().click(&event);
        });
        if let Err(e) = window.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref()) {
            log::warn!("Failed to register click handler: {:?}", e);
        }
        closure.forget();
    }

    fn setup_teardown(landing: Rc<RefCell<Landing>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            landing.borrow_mut().teardown();
        });
        if let Err(e) = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref()) {
            log::warn!("Failed to register pagehide handler: {:?}", e);
        }
        closure.forget();
    }

    fn request_animation_frame(landing: Rc<RefCell<Landing>>) {
        let next = landing.clone();
        if let Some(handle) = request_frame(move |_time: f64| drift_loop(next)) {
            landing.borrow_mut().frame_loop.scheduled(handle);
        }
    }

    fn drift_loop(landing: Rc<RefCell<Landing>>) {
        let keep_going = {
            let mut l = landing.borrow_mut();
            let viewport = viewport_from_window();
            let keep_going = l.frame_loop.on_frame(viewport);
            if keep_going {
                l.render();
            }
            keep_going
        };

        if keep_going {
            request_animation_frame(landing);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_landing::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Achievement Drift (native) starting...");

    if let Err(e) = native::run(std::env::args().skip(1).collect()) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::Path;

    use achievement_drift::achievement::{Achievement, TeamSummary};
    use achievement_drift::platform::read_feed_file;
    use achievement_drift::renderer::placements;
    use achievement_drift::sim::Viewport;
    use achievement_drift::{DriftError, DriftSettings, FrameLoop, Result};

    const DEFAULT_FRAMES: u64 = 600;
    const DEFAULT_SEED: u64 = 42;

    /// Built-in feed for running without a file
    fn sample_feed() -> Vec<Achievement> {
        let teams = [
            ("Platform", "#10b981", "#14b8a6"),
            ("Data", "#6366f1", "#a855f7"),
        ];
        (0..6)
            .map(|i| {
                let (name, from, to) = teams[i % teams.len()];
                let mut a = Achievement::new(
                    format!("sample-{}", i),
                    format!("Sample achievement {}", i + 1),
                    format!("2026-09-{:02}", i + 1),
                );
                a.team = Some(TeamSummary {
                    id: None,
                    name: name.to_string(),
                    color_from: Some(from.to_string()),
                    color_to: Some(to.to_string()),
                });
                a
            })
            .collect()
    }

    fn parse_arg<T: std::str::FromStr>(args: &[String], index: usize, default: T) -> Result<T> {
        match args.get(index) {
            Some(raw) => raw
                .parse()
                .map_err(|_| DriftError::InvalidArgument(raw.clone())),
            None => Ok(default),
        }
    }

    /// `achievement-drift [feed.json|-] [frames] [seed]`
    pub fn run(args: Vec<String>) -> Result<()> {
        let achievements = match args.first().map(String::as_str) {
            Some(path) if path != "-" => read_feed_file(Path::new(path))?,
            _ => sample_feed(),
        };
        let frames: u64 = parse_arg(&args, 1, DEFAULT_FRAMES)?;
        let seed: u64 = parse_arg(&args, 2, DEFAULT_SEED)?;

        let settings = DriftSettings::load();
        settings.validate()?;

        let mut frame_loop = FrameLoop::new(settings);
        frame_loop.load(&achievements, seed);

        let viewport = Viewport::default();
        let mut stepped = 0;
        while stepped < frames && frame_loop.on_frame(viewport) {
            stepped += 1;
        }
        frame_loop.teardown();

        log::info!("Stepped {} frames", stepped);
        for placement in placements(frame_loop.state(), frame_loop.achievements()) {
            println!(
                "{:<16} left={:<12} top={:<12} {}",
                placement.id, placement.left, placement.top, placement.title
            );
        }
        Ok(())
    }
}
