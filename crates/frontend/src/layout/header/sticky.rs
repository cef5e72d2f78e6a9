//! Auto-hiding header.
//!
//! Hidden while scrolling down, shown again on the way up, always shown near
//! the top of the page. Scroll events are coalesced into one update per frame.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::shared::dom;

/// Below this offset the header is always visible
pub const SCROLL_THRESHOLD: f64 = 100.0;
/// Smaller movements are ignored
pub const SCROLL_DELTA: f64 = 5.0;

/// What the header should look like after a scroll update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderState {
    /// Near the top: visible, no `scrolled` styling
    Top,
    /// Scrolled down: `nav-hidden` + `scrolled`
    Hidden,
    /// Scrolled back up: visible with `scrolled`
    Revealed,
}

#[derive(Debug, Clone, Copy)]
pub struct ScrollTracker {
    last_y: f64,
}

impl ScrollTracker {
    pub fn new(initial_y: f64) -> Self {
        Self { last_y: initial_y }
    }

    /// Feed the current offset. `None` means leave the header as it is.
    pub fn update(&mut self, y: f64) -> Option<HeaderState> {
        let diff = y - self.last_y;
        self.last_y = y;

        if y < SCROLL_THRESHOLD {
            Some(HeaderState::Top)
        } else if diff > SCROLL_DELTA && y > SCROLL_THRESHOLD {
            Some(HeaderState::Hidden)
        } else if diff < -SCROLL_DELTA {
            Some(HeaderState::Revealed)
        } else {
            None
        }
    }
}

fn scroll_y() -> f64 {
    dom::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn init_sticky_header() {
    let (Some(window), Some(header)) = (dom::window(), dom::query("header")) else {
        return;
    };

    let tracker = Rc::new(RefCell::new(ScrollTracker::new(scroll_y())));
    let ticking = Rc::new(Cell::new(false));

    let frame = {
        let ticking = Rc::clone(&ticking);
        Closure::wrap(Box::new(move || {
            if let Some(state) = tracker.borrow_mut().update(scroll_y()) {
                let (hidden, scrolled) = match state {
                    HeaderState::Top => (false, false),
                    HeaderState::Hidden => (true, true),
                    HeaderState::Revealed => (false, true),
                };
                dom::set_class(&header, "nav-hidden", hidden);
                dom::set_class(&header, "scrolled", scrolled);
            }
            ticking.set(false);
        }) as Box<dyn FnMut()>)
    };

    let raf_window = window.clone();
    dom::listen(&window, "scroll", move |_: web_sys::Event| {
        if ticking.get() {
            return;
        }
        if raf_window
            .request_animation_frame(frame.as_ref().unchecked_ref())
            .is_ok()
        {
            ticking.set(true);
        }
    });
}
