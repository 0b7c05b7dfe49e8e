//! Wallet connection bridge between JS wallet SDKs and the checkout controller
//!
//! The page supplies a connector object wrapping its wallet SDKs:
//!
//! ```js
//! const connector = {
//!   async connect(provider) { return { address, provider }; },
//!   async disconnect() {},
//! };
//! const wallet = new WalletConnection({ enabledWallets: ["yours"] }, connector, {
//!   onConnect: (address, provider) => {},
//!   onDisconnect: () => {},
//! });
//! await wallet.connect("yours");
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use js_sys::{Function, Promise, Reflect};
use mnee_checkout_lib::wallet::{
    WalletConnection, WalletConnector, WalletEvents, WalletProvider, WalletState,
};
use mnee_checkout_lib::{CheckoutConfig, CheckoutError};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::utils;

/// Look up `name` on `target` as a function, if present.
fn method(target: &JsValue, name: &str) -> Option<Function> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
}

/// Await a value that may or may not be a promise.
async fn settle(value: JsValue) -> Result<JsValue, JsValue> {
    JsFuture::from(Promise::resolve(&value)).await
}

/// [`WalletConnector`] delegating to a JS object with `connect(provider)` and
/// `disconnect()` methods (sync or async).
#[derive(Clone)]
pub struct JsWalletConnector {
    sdk: JsValue,
}

impl JsWalletConnector {
    pub fn new(sdk: JsValue) -> Self {
        Self { sdk }
    }

    async fn call(&self, name: &str, args: &[JsValue]) -> Result<JsValue, String> {
        let func = method(&self.sdk, name)
            .ok_or_else(|| format!("wallet connector has no {}() method", name))?;
        let returned = match args {
            [] => func.call0(&self.sdk),
            [arg] => func.call1(&self.sdk, arg),
            _ => return Err("unsupported connector call".to_string()),
        }
        .map_err(|e| utils::describe(&e))?;
        settle(returned).await.map_err(|e| utils::describe(&e))
    }
}

#[async_trait(?Send)]
impl WalletConnector for JsWalletConnector {
    async fn connect(&self, provider: WalletProvider) -> mnee_checkout_lib::Result<WalletState> {
        let value = self
            .call("connect", &[JsValue::from_str(provider.as_str())])
            .await
            .map_err(|reason| CheckoutError::WalletConnectionFailed { provider, reason })?;
        if value.is_undefined() || value.is_null() {
            return Ok(WalletState::disconnected());
        }
        serde_wasm_bindgen::from_value(value).map_err(|e| CheckoutError::WalletConnectionFailed {
            provider,
            reason: format!("unexpected wallet state: {}", e),
        })
    }

    async fn disconnect(&self) -> mnee_checkout_lib::Result<()> {
        self.call("disconnect", &[])
            .await
            .map(|_| ())
            .map_err(CheckoutError::WalletDisconnectFailed)
    }
}

enum PendingCall {
    Connect(String, WalletProvider),
    Disconnect,
    Failure(String),
}

/// Page callbacks, cloned out of the controller before being invoked.
#[derive(Clone, Default)]
struct Handlers {
    on_connect: Option<Function>,
    on_disconnect: Option<Function>,
    on_error: Option<Function>,
}

impl Handlers {
    fn dispatch(&self, calls: Vec<PendingCall>) {
        for call in calls {
            let result = match call {
                PendingCall::Connect(address, provider) => self.on_connect.as_ref().map(|f| {
                    f.call2(
                        &JsValue::NULL,
                        &JsValue::from_str(&address),
                        &JsValue::from_str(provider.as_str()),
                    )
                }),
                PendingCall::Disconnect => {
                    self.on_disconnect.as_ref().map(|f| f.call0(&JsValue::NULL))
                }
                PendingCall::Failure(message) => Some(self.alert(&message)),
            };
            if let Some(Err(e)) = result {
                tracing::warn!(error = %utils::describe(&e), "wallet callback threw");
            }
        }
    }

    /// Blocking notification: the page's `onError`, else `window.alert`.
    fn alert(&self, message: &str) -> Result<JsValue, JsValue> {
        if let Some(on_error) = &self.on_error {
            return on_error.call1(&JsValue::NULL, &JsValue::from_str(message));
        }
        match web_sys::window() {
            Some(window) => window
                .alert_with_message(message)
                .map(|_| JsValue::UNDEFINED),
            None => {
                utils::error(message);
                Ok(JsValue::UNDEFINED)
            }
        }
    }
}

/// [`WalletEvents`] that queues callbacks until the controller is released,
/// so page handlers may call back into the `WalletConnection`.
pub struct JsWalletEvents {
    handlers: Handlers,
    pending: Vec<PendingCall>,
}

impl JsWalletEvents {
    /// Read `onConnect`, `onDisconnect` and `onError` from a handlers object.
    pub fn from_handlers(handlers: &JsValue) -> Self {
        if handlers.is_undefined() || handlers.is_null() {
            return Self {
                handlers: Handlers::default(),
                pending: Vec::new(),
            };
        }
        Self {
            handlers: Handlers {
                on_connect: method(handlers, "onConnect"),
                on_disconnect: method(handlers, "onDisconnect"),
                on_error: method(handlers, "onError"),
            },
            pending: Vec::new(),
        }
    }
}

impl WalletEvents for JsWalletEvents {
    fn on_connect(&mut self, address: &str, provider: WalletProvider) {
        self.pending
            .push(PendingCall::Connect(address.to_string(), provider));
    }

    fn on_disconnect(&mut self) {
        self.pending.push(PendingCall::Disconnect);
    }

    fn notify_failure(&mut self, message: &str) {
        self.pending.push(PendingCall::Failure(message.to_string()));
    }
}

type Controller = WalletConnection<JsWalletConnector, JsWalletEvents>;

/// Release the controller borrow, then run queued page callbacks.
fn flush(inner: &Rc<RefCell<Controller>>) {
    let (pending, handlers) = {
        let mut wallet = inner.borrow_mut();
        let events = wallet.events_mut();
        (std::mem::take(&mut events.pending), events.handlers.clone())
    };
    if !pending.is_empty() {
        handlers.dispatch(pending);
    }
}

fn parse_provider(provider: &str) -> Result<WalletProvider, JsValue> {
    provider
        .parse::<WalletProvider>()
        .map_err(|e| utils::checkout_error(&e))
}

#[derive(Serialize)]
struct AffordanceView {
    kind: mnee_checkout_lib::wallet::ConnectAffordance,
    label: &'static str,
}

/// Wallet connection controller exposed to the page.
#[wasm_bindgen(js_name = WalletConnection)]
pub struct WasmWalletConnection {
    inner: Rc<RefCell<Controller>>,
}

#[wasm_bindgen(js_class = WalletConnection)]
impl WasmWalletConnection {
    /// * `config` - checkout config object (`{ enabledWallets }`), optional
    /// * `connector` - object with `connect(provider)` / `disconnect()`
    /// * `handlers` - optional `{ onConnect, onDisconnect, onError }`
    #[wasm_bindgen(constructor)]
    pub fn new(
        config: JsValue,
        connector: JsValue,
        handlers: JsValue,
    ) -> Result<WasmWalletConnection, JsValue> {
        let config = if config.is_undefined() || config.is_null() {
            CheckoutConfig::default()
        } else {
            serde_wasm_bindgen::from_value::<CheckoutConfig>(config)
                .map_err(|e| utils::js_error(&format!("Invalid config: {}", e)))?
        };
        Ok(WasmWalletConnection {
            inner: Rc::new(RefCell::new(WalletConnection::new(
                config.wallet_config(),
                JsWalletConnector::new(connector),
                JsWalletEvents::from_handlers(&handlers),
            ))),
        })
    }

    /// Connect buttons to render: `[{ kind, label }]`
    pub fn affordances(&self) -> Result<JsValue, JsValue> {
        let affordances: Vec<AffordanceView> = self
            .inner
            .borrow()
            .config()
            .affordances()
            .into_iter()
            .map(|kind| AffordanceView {
                kind,
                label: kind.label(),
            })
            .collect();
        utils::to_js(&affordances)
    }

    /// Connect through `provider`; rejects (after notifying the user) on failure
    pub async fn connect(&self, provider: String) -> Result<(), JsValue> {
        let provider = parse_provider(&provider)?;
        let connector = {
            let wallet = self.inner.borrow();
            wallet
                .ensure_enabled(provider)
                .map_err(|e| utils::checkout_error(&e))?;
            wallet.connector().clone()
        };

        let result = connector.connect(provider).await;
        let outcome = self.inner.borrow_mut().finish_connect(provider, result);
        flush(&self.inner);
        outcome.map_err(|e| utils::checkout_error(&e))
    }

    /// Disconnect; SDK errors are swallowed
    pub async fn disconnect(&self) {
        let connector = self.inner.borrow().connector().clone();
        let result = connector.disconnect().await;
        self.inner.borrow_mut().finish_disconnect(result);
        flush(&self.inner);
    }

    /// Report SDK state observed outside `connect`, e.g. `{ address, provider }`
    /// from an account-change event, or `null` once disconnected
    pub fn sync(&self, state: JsValue) -> Result<(), JsValue> {
        let state = if state.is_undefined() || state.is_null() {
            WalletState::disconnected()
        } else {
            serde_wasm_bindgen::from_value(state)
                .map_err(|e| utils::js_error(&format!("Invalid wallet state: {}", e)))?
        };
        self.inner.borrow_mut().sync(state);
        flush(&self.inner);
        Ok(())
    }

    /// `{ status: "connected", shortAddress, provider }` or
    /// `{ status: "options", affordances }`
    pub fn view(&self) -> Result<JsValue, JsValue> {
        utils::to_js(&self.inner.borrow().view())
    }

    #[wasm_bindgen(getter, js_name = isConnected)]
    pub fn is_connected(&self) -> bool {
        self.inner.borrow().state().is_connected()
    }

    #[wasm_bindgen(getter)]
    pub fn address(&self) -> Option<String> {
        self.inner.borrow().state().address.clone()
    }
}
