//! Browser implementation of the platform seam
//!
//! Listeners and timers created here are forgotten: they live for the rest of
//! the page and cannot be cancelled.

use gloo::events::EventListener;
use gloo::file::File;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use crate::dom::{
    ConfirmDialog, DomDocument, DomElement, FileLoader, LoadedFile, ReadySignal,
    TimerScheduler,
};
use crate::error::{WebError, WebResult};

/// The current document and window.
#[derive(Clone)]
pub struct BrowserPage {
    document: Document,
}

impl BrowserPage {
    /// Page for the current window's document.
    pub fn current() -> WebResult<Self> {
        let window = web_sys::window()
            .ok_or_else(|| WebError::JavaScript("no global window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| WebError::JavaScript("window has no document".to_string()))?;
        Ok(Self { document })
    }
}

/// An element in the live document.
#[derive(Clone)]
pub struct BrowserElement(Element);

impl BrowserElement {
    fn html(&self) -> WebResult<&HtmlElement> {
        self.0.dyn_ref::<HtmlElement>().ok_or_else(|| {
            WebError::JavaScript(format!("<{}> has no inline style", self.0.tag_name()))
        })
    }
}

impl DomElement for BrowserElement {
    fn set_style(&self, property: &str, value: &str) -> WebResult<()> {
        self.html()?.style().set_property(property, value)?;
        Ok(())
    }

    fn set_attribute(&self, name: &str, value: &str) -> WebResult<()> {
        self.0.set_attribute(name, value)?;
        Ok(())
    }

    fn toggle_class(&self, class: &str) -> WebResult<bool> {
        Ok(self.0.class_list().toggle(class)?)
    }

    fn remove(&self) {
        self.0.remove();
    }

    fn on_click(&self, mut handler: Box<dyn FnMut()>) {
        EventListener::new(&self.0, "click", move |_event| handler()).forget();
    }
}

impl DomDocument for BrowserPage {
    type Element = BrowserElement;

    fn element_by_id(&self, id: &str) -> Option<BrowserElement> {
        self.document.get_element_by_id(id).map(BrowserElement)
    }

    fn query_selector_all(&self, selector: &str) -> WebResult<Vec<BrowserElement>> {
        let nodes = self.document.query_selector_all(selector)?;
        Ok((0..nodes.length())
            .filter_map(|index| nodes.item(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(BrowserElement)
            .collect())
    }
}

impl ReadySignal for BrowserPage {
    fn is_ready(&self) -> bool {
        self.document.ready_state() != "loading"
    }

    fn on_content_loaded(&self, task: Box<dyn FnOnce()>) {
        EventListener::once(&self.document, "DOMContentLoaded", move |_event| task()).forget();
    }
}

impl TimerScheduler for BrowserPage {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, task).forget();
    }
}

impl ConfirmDialog for BrowserPage {
    fn confirm(&self, message: &str) -> bool {
        gloo::dialogs::confirm(message)
    }
}

impl FileLoader for BrowserPage {
    type File = File;

    fn file_size(&self, file: &File) -> u64 {
        file.size()
    }

    fn read_file(&self, file: File, done: Box<dyn FnOnce(WebResult<LoadedFile>)>) {
        spawn_local(async move {
            let result = gloo::file::futures::read_as_bytes(&file)
                .await
                .map(|bytes| LoadedFile {
                    mime_type: file.raw_mime_type(),
                    bytes,
                })
                .map_err(|e| WebError::FileRead(format!("{}: {e}", file.name())));
            done(result);
        });
    }
}

/// Files currently selected in a file input, in selection order.
pub fn selected_files(input: &HtmlInputElement) -> Vec<File> {
    input
        .files()
        .map(|list| {
            (0..list.length())
                .filter_map(|index| list.get(index))
                .map(File::from)
                .collect()
        })
        .unwrap_or_default()
}
