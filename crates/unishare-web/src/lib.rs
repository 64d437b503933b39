//! UniShare page behaviours
//!
//! Browser-side conveniences for the server-rendered UniShare pages, compiled
//! to WebAssembly:
//!
//! - **Confirmation gate**: `confirmDelete(message?)` guards destructive forms
//! - **Image preview**: `previewImage(input)` shows a selected image inline
//! - **Flash auto-dismiss**: banners fade and disappear a few seconds after load
//! - **Navigation toggle**: the mobile menu opens and closes on click
//!
//! Nothing runs on module load. Pages call `init()` (or `initWithConfig`)
//! explicitly:
//!
//! ```html
//! <script type="module">
//!   import wasm, { init, confirmDelete, previewImage } from "/static/pkg/unishare_web.js";
//!   await wasm();
//!   Object.assign(window, { confirmDelete, previewImage });
//!   init();
//! </script>
//! <form onsubmit="return confirmDelete('Delete this post?')">...</form>
//! <input type="file" onchange="previewImage(this)">
//! ```
//!
//! The behaviours themselves are generic over the traits in [`dom`], with
//! [`browser::BrowserPage`] as the production implementation.

pub mod alerts;
pub mod browser;
pub mod config;
pub mod confirm;
pub mod data_url;
pub mod dom;
pub mod error;
pub mod logging;
pub mod nav;
pub mod page;
pub mod preview;

#[cfg(test)]
pub(crate) mod testing;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use web_sys::HtmlInputElement;

pub use config::BehaviorConfig;
pub use error::{WebError, WebResult};
pub use page::{init_page, PageLifecycle, PageSetup};

use browser::BrowserPage;

thread_local! {
    static CONFIG: RefCell<BehaviorConfig> = RefCell::new(BehaviorConfig::default());
    static LIFECYCLE: PageLifecycle = PageLifecycle::new();
}

fn current_config() -> BehaviorConfig {
    CONFIG.with(|config| config.borrow().clone())
}

/// Initialise the page with the default configuration.
///
/// Throws if the page has already been initialised.
#[wasm_bindgen]
pub fn init() -> Result<(), JsValue> {
    start(BehaviorConfig::default())
}

/// Initialise the page with overrides, e.g. `{ alerts: { dismissAfterMs: 8000 } }`.
///
/// `null` and `undefined` mean the defaults. Throws on a malformed or invalid
/// configuration, or if the page has already been initialised.
#[wasm_bindgen(js_name = initWithConfig)]
pub fn init_with_config(config: JsValue) -> Result<(), JsValue> {
    let config: BehaviorConfig = if config.is_undefined() || config.is_null() {
        BehaviorConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config).map_err(WebError::from)?
    };
    start(config)
}

fn start(config: BehaviorConfig) -> Result<(), JsValue> {
    logging::init_logging(config.level());
    let page = BrowserPage::current()?;
    let active = config.clone();
    LIFECYCLE.with(|lifecycle| lifecycle.start(&page, config))?;
    CONFIG.with(|current| *current.borrow_mut() = active);
    Ok(())
}

/// Ask the user to confirm a destructive action.
///
/// Without a message the configured default text is shown.
#[wasm_bindgen(js_name = confirmDelete)]
pub fn confirm_delete(message: Option<String>) -> Result<bool, JsValue> {
    let page = BrowserPage::current()?;
    let config = current_config();
    Ok(confirm::confirm_action(
        &page,
        message.as_deref(),
        &config.confirm_message,
    ))
}

/// Preview the first image selected in `input`.
#[wasm_bindgen(js_name = previewImage)]
pub fn preview_image(input: HtmlInputElement) -> Result<(), JsValue> {
    let page = BrowserPage::current()?;
    let config = current_config();
    preview::preview_image(&page, browser::selected_files(&input), &config.preview);
    Ok(())
}
