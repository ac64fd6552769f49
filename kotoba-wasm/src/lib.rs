//! WASM bindings installing the Japanese/English toggle on a live page.
//!
//! With the default `autostart` feature the toggle installs itself with the
//! default [`ToggleConfig`] when the module is instantiated; JS can then grab
//! the handle through [`kotoba_handle`]. Builds without `autostart` call
//! [`kotoba_install`] with an optional JSON config instead.
use kotoba_core::{Language, LanguageToggle, ToggleAction, ToggleConfig};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event};

mod document;
mod errors;
mod locale;
mod logging;
mod storage;

pub use document::WebDocumentView;
pub use errors::{KotobaWasmError, WasmResult};
pub use locale::NavigatorLocale;
pub use logging::{init_logging, ConsoleMakeWriter};
pub use storage::LocalStorageStore;

/// The toggle wired to browser collaborators.
pub type WebToggle = LanguageToggle<LocalStorageStore, NavigatorLocale, WebDocumentView>;

type Shared = Rc<RefCell<WebToggle>>;

thread_local! {
    static INSTALLED: RefCell<Option<Shared>> = RefCell::new(None);
}

/// JS handle to the installed toggle
#[wasm_bindgen]
pub struct KotobaToggle {
    inner: Shared,
}

#[wasm_bindgen]
impl KotobaToggle {
    /// `"ja"`, `"en"`, or `undefined` before the document is ready.
    pub fn current_language(&self) -> Option<String> {
        let current = self.inner.try_borrow().ok().and_then(|t| t.current());
        current.map(|l| l.code().to_string())
    }

    /// Same as clicking the control for `code`: persists and re-renders.
    pub fn set_language(&self, code: &str) -> Result<String, JsValue> {
        let lang: Language = code
            .parse()
            .map_err(|e: kotoba_core::UnknownLanguage| KotobaWasmError::UnsupportedLanguage(e.0))?;
        with_toggle(&self.inner, |t| t.dispatch(ToggleAction::Choose(lang)))
            .map(|l| l.code().to_string())
            .ok_or_else(|| KotobaWasmError::Binding("toggle busy".into()).into())
    }

    /// Re-apply the current language to content inserted after load.
    pub fn refresh(&self) -> Option<String> {
        with_toggle(&self.inner, |t| t.refresh())
            .flatten()
            .map(|l| l.code().to_string())
    }
}

/// Install the toggle on the current page. `config_json` overrides
/// [`ToggleConfig`] fields; omitted fields keep their defaults.
///
/// Installing again without a config returns the first installation;
/// passing a config once installed is a `Configuration` error.
#[wasm_bindgen]
pub fn kotoba_install(config_json: Option<String>) -> Result<KotobaToggle, JsValue> {
    Ok(install(config_json)?)
}

/// Handle to the installed toggle, if any.
#[wasm_bindgen]
pub fn kotoba_handle() -> Option<KotobaToggle> {
    INSTALLED.with(|slot| slot.borrow().clone()).map(|inner| KotobaToggle { inner })
}

/// Module start hook installing with the default config.
#[cfg(feature = "autostart")]
#[wasm_bindgen(start)]
pub fn kotoba_autostart() -> Result<(), JsValue> {
    install(None)?;
    Ok(())
}

fn install(config_json: Option<String>) -> WasmResult<KotobaToggle> {
    if let Some(inner) = INSTALLED.with(|slot| slot.borrow().clone()) {
        if config_json.is_some() {
            warn!("language toggle already installed, configuration not applied");
            return Err(KotobaWasmError::Configuration(
                "toggle already installed; configuration not applied".into(),
            ));
        }
        debug!("language toggle already installed");
        return Ok(KotobaToggle { inner });
    }

    let config = match config_json {
        Some(json) => ToggleConfig::from_json(&json)?,
        None => ToggleConfig::default(),
    };
    init_logging(config.max_level()?);

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| KotobaWasmError::Environment("no document".into()))?;
    let handle = attach(document, config)?;
    INSTALLED.with(|slot| *slot.borrow_mut() = Some(handle.inner.clone()));
    Ok(handle)
}

/// Build a toggle over `document` and bind its controls, now or on
/// `DOMContentLoaded` while the document is still loading.
///
/// Unlike [`kotoba_install`] the result is not registered as the page's
/// installation, so several toggles with distinct configs can coexist.
#[doc(hidden)]
pub fn attach(document: Document, config: ToggleConfig) -> WasmResult<KotobaToggle> {
    let window = web_sys::window().ok_or_else(|| KotobaWasmError::Environment("no window".into()))?;
    let toggle = LanguageToggle::new(
        LocalStorageStore::new(config.storage_key.clone()),
        NavigatorLocale::new(window.navigator()),
        WebDocumentView::new(document.clone(), config.clone()),
    );
    let inner: Shared = Rc::new(RefCell::new(toggle));

    if document.ready_state() == "loading" {
        let pending = inner.clone();
        let doc = document.clone();
        let on_ready = Closure::<dyn FnMut()>::new(move || {
            if let Err(e) = start(&pending, &doc, &config) {
                warn!(error = %e, "language toggle start failed");
            }
        });
        document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
            .map_err(|e| KotobaWasmError::Binding(errors::describe(&e)))?;
        // Page-lifetime listener.
        on_ready.forget();
    } else {
        start(&inner, &document, &config)?;
    }
    Ok(KotobaToggle { inner })
}

/// Document-ready: present the resolved language, then bind the controls.
fn start(inner: &Shared, document: &Document, config: &ToggleConfig) -> WasmResult<()> {
    with_toggle(inner, |t| t.dispatch(ToggleAction::Initialize));
    for lang in Language::ALL {
        bind_control(inner, document, config, lang)?;
    }
    Ok(())
}

fn bind_control(inner: &Shared, document: &Document, config: &ToggleConfig, lang: Language) -> WasmResult<()> {
    let id = config.controls.id_for(lang);
    let Some(control) = document.get_element_by_id(id) else {
        debug!(id, "control absent, not binding");
        return Ok(());
    };
    let target = inner.clone();
    let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        event.prevent_default();
        with_toggle(&target, |t| t.dispatch(ToggleAction::Choose(lang)));
    });
    control
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(|e| KotobaWasmError::Binding(errors::describe(&e)))?;
    on_click.forget();
    Ok(())
}

fn with_toggle<R>(inner: &Shared, f: impl FnOnce(&mut WebToggle) -> R) -> Option<R> {
    match inner.try_borrow_mut() {
        Ok(mut toggle) => Some(f(&mut toggle)),
        Err(_) => {
            warn!("language toggle busy, event dropped");
            None
        }
    }
}
