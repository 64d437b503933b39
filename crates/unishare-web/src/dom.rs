//! Platform seam between the page behaviours and the browser
//!
//! Each behaviour is generic over the capabilities it needs, so the same code
//! drives the real document ([`crate::browser::BrowserPage`]) and the
//! in-memory page used by the unit tests. Everything here is single-threaded;
//! callbacks are `'static` closures queued on the event loop.

use crate::error::WebResult;

/// A handle to an element in the document.
///
/// Handles are cheap to clone and refer to the same underlying node.
pub trait DomElement: Clone + 'static {
    /// Set an inline style property.
    fn set_style(&self, property: &str, value: &str) -> WebResult<()>;

    /// Set an attribute, e.g. `src` on an image.
    fn set_attribute(&self, name: &str, value: &str) -> WebResult<()>;

    /// Flip `class` and return whether it is now present.
    fn toggle_class(&self, class: &str) -> WebResult<bool>;

    /// Detach the element from the document. Detached elements stay valid.
    fn remove(&self);

    /// Run `handler` on every click for the rest of the page lifetime.
    fn on_click(&self, handler: Box<dyn FnMut()>);
}

/// Element lookup.
pub trait DomDocument {
    /// Element handle type.
    type Element: DomElement;

    /// Look up an element by id.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Snapshot of all elements matching a CSS selector, in document order.
    fn query_selector_all(&self, selector: &str) -> WebResult<Vec<Self::Element>>;
}

/// One-shot timers on the event loop.
///
/// Scheduled tasks cannot be cancelled.
pub trait TimerScheduler {
    /// Run `task` once after `delay_ms` milliseconds.
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

/// Blocking yes/no dialog.
pub trait ConfirmDialog {
    /// Show `message` and return whether the user accepted.
    fn confirm(&self, message: &str) -> bool;
}

/// Contents of a file after a completed read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedFile {
    /// MIME type reported by the browser, possibly empty.
    pub mime_type: String,
    /// Raw file bytes.
    pub bytes: Vec<u8>,
}

/// Asynchronous reads of user-selected files.
pub trait FileLoader {
    /// Selected file handle.
    type File: 'static;

    /// File size in bytes, known without reading.
    fn file_size(&self, file: &Self::File) -> u64;

    /// Start reading `file`; `done` runs on the event loop once the read
    /// settles. Returns before the read completes.
    fn read_file(&self, file: Self::File, done: Box<dyn FnOnce(WebResult<LoadedFile>)>);
}

/// Document parsing state.
pub trait ReadySignal {
    /// Whether the document has finished parsing.
    fn is_ready(&self) -> bool;

    /// Run `task` once when parsing finishes (`DOMContentLoaded`).
    fn on_content_loaded(&self, task: Box<dyn FnOnce()>);
}
