//! Theme resolution for the checkout widget.
//!
//! A [`ThemePreference`] of `light` or `dark` resolves to itself. `auto`
//! follows the system appearance, reported by an [`AppearanceSource`] (the
//! browser's `prefers-color-scheme` media query in the web crate), for as long
//! as the [`ThemeWatcher`] lives.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CheckoutError;

/// Concrete theme applied to the widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Theme matching a `prefers-color-scheme: dark` result.
    pub fn from_prefers_dark(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Theme requested by the embedding page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
    /// Follow the system appearance.
    Auto,
}

impl ThemePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Auto => "auto",
        }
    }

    /// Resolve against a one-off reading of the system appearance.
    pub fn resolve(&self, system: Theme) -> Theme {
        match self {
            Self::Light => Theme::Light,
            Self::Dark => Theme::Dark,
            Self::Auto => system,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = CheckoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "auto" => Ok(Self::Auto),
            other => Err(CheckoutError::InvalidConfig(format!(
                "unknown theme '{}', expected light, dark or auto",
                other
            ))),
        }
    }
}

/// Handle returned by [`AppearanceSource::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Callback invoked with the new system appearance.
pub type AppearanceListener = Box<dyn FnMut(Theme)>;

/// System-level appearance notifications.
pub trait AppearanceSource {
    /// Current system appearance.
    fn current(&self) -> Theme;

    /// Register `listener` for appearance changes.
    fn subscribe(&self, listener: AppearanceListener) -> ListenerId;

    /// Remove a listener. Unknown ids are ignored.
    fn unsubscribe(&self, id: ListenerId);
}

type ThemeObserver = Box<dyn FnMut(Theme)>;

#[derive(Default)]
struct WatcherState {
    theme: Cell<Theme>,
    observers: RefCell<Vec<ThemeObserver>>,
}

impl WatcherState {
    fn set(&self, theme: Theme) {
        if self.theme.replace(theme) == theme {
            return;
        }
        tracing::debug!(%theme, "theme changed");

        // Observers may register more observers while running.
        let mut observers = std::mem::take(&mut *self.observers.borrow_mut());
        for observer in observers.iter_mut() {
            observer(theme);
        }
        let mut current = self.observers.borrow_mut();
        observers.append(&mut current);
        *current = observers;
    }
}

/// Resolves a [`ThemePreference`] and keeps it current.
///
/// In `auto` mode the watcher holds a subscription on the source; it is
/// released when the preference changes to a fixed theme or the watcher is
/// dropped.
pub struct ThemeWatcher<A: AppearanceSource> {
    source: A,
    preference: ThemePreference,
    state: Rc<WatcherState>,
    subscription: Option<ListenerId>,
}

impl<A: AppearanceSource> ThemeWatcher<A> {
    pub fn new(preference: ThemePreference, source: A) -> Self {
        let mut watcher = Self {
            state: Rc::new(WatcherState {
                theme: Cell::new(preference.resolve(source.current())),
                observers: RefCell::default(),
            }),
            source,
            preference,
            subscription: None,
        };
        if preference == ThemePreference::Auto {
            watcher.subscribe();
        }
        watcher
    }

    /// Resolved theme.
    pub fn theme(&self) -> Theme {
        self.state.theme.get()
    }

    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    /// Whether an appearance subscription is currently held.
    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    /// Call `observer` whenever the resolved theme changes.
    pub fn on_change(&self, observer: impl FnMut(Theme) + 'static) {
        self.state.observers.borrow_mut().push(Box::new(observer));
    }

    /// Switch preference, re-resolving and re-subscribing as needed.
    pub fn set_preference(&mut self, preference: ThemePreference) {
        if preference == self.preference {
            return;
        }
        self.unsubscribe();
        self.preference = preference;
        self.state.set(preference.resolve(self.source.current()));
        if preference == ThemePreference::Auto {
            self.subscribe();
        }
    }

    fn subscribe(&mut self) {
        let state = Rc::clone(&self.state);
        let id = self
            .source
            .subscribe(Box::new(move |theme| state.set(theme)));
        self.subscription = Some(id);
    }

    fn unsubscribe(&mut self) {
        if let Some(id) = self.subscription.take() {
            self.source.unsubscribe(id);
        }
    }
}

impl<A: AppearanceSource> Drop for ThemeWatcher<A> {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

#[derive(Default)]
struct ManualState {
    theme: Theme,
    next_id: u64,
    listeners: Vec<(ListenerId, AppearanceListener)>,
    notifying: bool,
    /// Unsubscribed while `listeners` was taken out for notification.
    removed: Vec<ListenerId>,
}

/// Appearance source driven by the host application.
///
/// Useful for native hosts that read the appearance themselves, and for tests.
/// Clones share the same state.
#[derive(Clone, Default)]
pub struct ManualAppearance {
    inner: Rc<RefCell<ManualState>>,
}

impl ManualAppearance {
    pub fn new(theme: Theme) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ManualState {
                theme,
                ..ManualState::default()
            })),
        }
    }

    /// Change the appearance, notifying listeners if it differs.
    pub fn set(&self, theme: Theme) {
        let mut listeners = {
            let mut inner = self.inner.borrow_mut();
            if inner.theme == theme {
                return;
            }
            inner.theme = theme;
            inner.notifying = true;
            std::mem::take(&mut inner.listeners)
        };

        for (_, listener) in listeners.iter_mut() {
            listener(theme);
        }

        // Listeners may have subscribed or unsubscribed while we were notifying.
        let mut inner = self.inner.borrow_mut();
        let removed = std::mem::take(&mut inner.removed);
        listeners.retain(|(id, _)| !removed.contains(id));
        listeners.append(&mut inner.listeners);
        inner.listeners = listeners;
        inner.notifying = false;
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl AppearanceSource for ManualAppearance {
    fn current(&self) -> Theme {
        self.inner.borrow().theme
    }

    fn subscribe(&self, listener: AppearanceListener) -> ListenerId {
        let mut inner = self.inner.borrow_mut();
        let id = ListenerId(inner.next_id);
        inner.next_id += 1;
        inner.listeners.push((id, listener));
        id
    }

    fn unsubscribe(&self, id: ListenerId) {
        let mut inner = self.inner.borrow_mut();
        inner.listeners.retain(|(listener_id, _)| *listener_id != id);
        if inner.notifying {
            inner.removed.push(id);
        }
    }
}
