//! `prefers-color-scheme` tracking for the browser

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use mnee_checkout_lib::theme::{
    AppearanceListener, AppearanceSource, ListenerId, Theme, ThemePreference, ThemeWatcher,
};
use wasm_bindgen::prelude::*;
use web_sys::{MediaQueryList, MediaQueryListEvent};

use crate::utils;

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

type ChangeClosure = Closure<dyn FnMut(MediaQueryListEvent)>;

/// [`AppearanceSource`] backed by `window.matchMedia`.
///
/// Without a window (workers, server rendering) it reports `light` and never
/// fires.
pub struct MediaQueryAppearance {
    query: Option<MediaQueryList>,
    next_id: Cell<u64>,
    listeners: RefCell<HashMap<u64, ChangeClosure>>,
}

impl MediaQueryAppearance {
    pub fn new() -> Self {
        let query = web_sys::window()
            .and_then(|window| window.match_media(DARK_SCHEME_QUERY).ok().flatten());
        if query.is_none() {
            tracing::debug!("matchMedia unavailable, assuming light appearance");
        }
        Self {
            query,
            next_id: Cell::new(0),
            listeners: RefCell::default(),
        }
    }
}

impl Default for MediaQueryAppearance {
    fn default() -> Self {
        Self::new()
    }
}

impl AppearanceSource for MediaQueryAppearance {
    fn current(&self) -> Theme {
        self.query
            .as_ref()
            .map(|query| Theme::from_prefers_dark(query.matches()))
            .unwrap_or_default()
    }

    fn subscribe(&self, mut listener: AppearanceListener) -> ListenerId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        if let Some(query) = &self.query {
            let closure = Closure::wrap(Box::new(move |e: MediaQueryListEvent| {
                listener(Theme::from_prefers_dark(e.matches()));
            }) as Box<dyn FnMut(MediaQueryListEvent)>);
            if let Err(e) =
                query.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
            {
                tracing::warn!(error = %utils::describe(&e), "failed to watch color scheme");
            }
            self.listeners.borrow_mut().insert(id, closure);
        }
        ListenerId(id)
    }

    fn unsubscribe(&self, id: ListenerId) {
        let Some(closure) = self.listeners.borrow_mut().remove(&id.0) else {
            return;
        };
        if let Some(query) = &self.query {
            let _ = query
                .remove_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
        }
    }
}

fn parse_preference(preference: Option<String>) -> Result<ThemePreference, JsValue> {
    match preference {
        Some(value) => value
            .parse::<ThemePreference>()
            .map_err(|e| utils::checkout_error(&e)),
        None => Ok(ThemePreference::default()),
    }
}

/// Resolved widget theme, kept current while `auto` is selected.
///
/// Call `free()` when the view is torn down to release the media query
/// listener.
#[wasm_bindgen(js_name = ThemeWatcher)]
pub struct WasmThemeWatcher {
    inner: ThemeWatcher<MediaQueryAppearance>,
}

#[wasm_bindgen(js_class = ThemeWatcher)]
impl WasmThemeWatcher {
    /// `preference` is `"light"` (default), `"dark"` or `"auto"`
    #[wasm_bindgen(constructor)]
    pub fn new(preference: Option<String>) -> Result<WasmThemeWatcher, JsValue> {
        let preference = parse_preference(preference)?;
        Ok(WasmThemeWatcher {
            inner: ThemeWatcher::new(preference, MediaQueryAppearance::new()),
        })
    }

    /// `"light"` or `"dark"`
    #[wasm_bindgen(getter)]
    pub fn theme(&self) -> String {
        self.inner.theme().as_str().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn preference(&self) -> String {
        self.inner.preference().as_str().to_string()
    }

    #[wasm_bindgen(js_name = setPreference)]
    pub fn set_preference(&mut self, preference: String) -> Result<(), JsValue> {
        let preference = parse_preference(Some(preference))?;
        self.inner.set_preference(preference);
        Ok(())
    }

    /// Call `callback(theme)` whenever the resolved theme changes
    #[wasm_bindgen(js_name = onChange)]
    pub fn on_change(&self, callback: js_sys::Function) {
        self.inner.on_change(move |theme| {
            if let Err(e) = callback.call1(&JsValue::NULL, &JsValue::from_str(theme.as_str())) {
                tracing::warn!(error = %utils::describe(&e), "theme change callback threw");
            }
        });
    }
}
