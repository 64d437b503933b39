//! In-memory page for unit tests
//!
//! Models just enough of a document for the behaviours: elements with ids,
//! classes, inline styles and attributes; click handlers; a manual clock for
//! timers; a dialog with a scripted answer; file reads that settle only
//! when the test says so; and a parsing state that can be held at loading.

use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};
use std::rc::Rc;

use crate::dom::{
    ConfirmDialog, DomDocument, DomElement, FileLoader, LoadedFile, ReadySignal,
    TimerScheduler,
};
use crate::error::{WebError, WebResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeId(usize);

type ClickHandler = Rc<RefCell<Box<dyn FnMut()>>>;
type ReadCallback = Box<dyn FnOnce(WebResult<LoadedFile>)>;

#[derive(Default)]
struct Node {
    id: Option<String>,
    classes: Vec<String>,
    styles: BTreeMap<String, String>,
    attributes: BTreeMap<String, String>,
    attached: bool,
    click_handlers: Vec<ClickHandler>,
}

struct Timer {
    due: u64,
    seq: u64,
    task: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct PageState {
    nodes: Vec<Node>,
    now: u64,
    next_seq: u64,
    timers: Vec<Timer>,
    reads: VecDeque<(FakeFile, ReadCallback)>,
    dialog_answer: bool,
    dialog_messages: Vec<String>,
    loading: bool,
    content_loaded: Vec<Box<dyn FnOnce()>>,
}

impl PageState {
    fn find(&self, id: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|node| node.attached && node.id.as_deref() == Some(id))
            .map(NodeId)
    }

    fn pop_due_timer(&mut self, until: u64) -> Option<Box<dyn FnOnce()>> {
        let index = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.due <= until)
            .min_by_key(|(_, timer)| (timer.due, timer.seq))
            .map(|(index, _)| index)?;
        let timer = self.timers.remove(index);
        self.now = timer.due;
        Some(timer.task)
    }
}

/// A user-selected file with scripted contents.
#[derive(Debug, Clone)]
pub(crate) struct FakeFile {
    name: String,
    mime_type: String,
    bytes: Vec<u8>,
    fail: bool,
}

impl FakeFile {
    pub(crate) fn new(name: &str, mime_type: &str, bytes: &[u8]) -> Self {
        Self {
            name: name.to_string(),
            mime_type: mime_type.to_string(),
            bytes: bytes.to_vec(),
            fail: false,
        }
    }

    /// Make the read of this file fail.
    pub(crate) fn failing(mut self) -> Self {
        self.fail = true;
        self
    }
}

#[derive(Clone, Default)]
pub(crate) struct FakePage {
    state: Rc<RefCell<PageState>>,
}

#[derive(Clone)]
pub(crate) struct FakeElement {
    state: Rc<RefCell<PageState>>,
    node: NodeId,
}

impl FakePage {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append an element to the document.
    pub(crate) fn add_element(&self, id: Option<&str>, classes: &[&str]) -> NodeId {
        let mut state = self.state.borrow_mut();
        state.nodes.push(Node {
            id: id.map(str::to_string),
            classes: classes.iter().map(|class| class.to_string()).collect(),
            attached: true,
            ..Node::default()
        });
        NodeId(state.nodes.len() - 1)
    }

    pub(crate) fn set_style(&self, node: NodeId, property: &str, value: &str) {
        self.state.borrow_mut().nodes[node.0]
            .styles
            .insert(property.to_string(), value.to_string());
    }

    pub(crate) fn detach(&self, node: NodeId) {
        self.state.borrow_mut().nodes[node.0].attached = false;
    }

    pub(crate) fn is_attached(&self, node: NodeId) -> bool {
        self.state.borrow().nodes[node.0].attached
    }

    pub(crate) fn node_style(&self, node: NodeId, property: &str) -> Option<String> {
        self.state.borrow().nodes[node.0].styles.get(property).cloned()
    }

    pub(crate) fn style_of(&self, id: &str, property: &str) -> Option<String> {
        let state = self.state.borrow();
        let node = state.find(id)?;
        state.nodes[node.0].styles.get(property).cloned()
    }

    pub(crate) fn attribute_of(&self, id: &str, name: &str) -> Option<String> {
        let state = self.state.borrow();
        let node = state.find(id)?;
        state.nodes[node.0].attributes.get(name).cloned()
    }

    pub(crate) fn has_class(&self, id: &str, class: &str) -> bool {
        let state = self.state.borrow();
        state
            .find(id)
            .is_some_and(|node| state.nodes[node.0].classes.iter().any(|c| c == class))
    }

    pub(crate) fn click_handlers(&self, id: &str) -> usize {
        let state = self.state.borrow();
        state
            .find(id)
            .map_or(0, |node| state.nodes[node.0].click_handlers.len())
    }

    /// Dispatch a click to the element with `id`, if it exists.
    pub(crate) fn click(&self, id: &str) {
        let handlers = {
            let state = self.state.borrow();
            match state.find(id) {
                Some(node) => state.nodes[node.0].click_handlers.clone(),
                None => return,
            }
        };
        for handler in handlers {
            (&mut *handler.borrow_mut())();
        }
    }

    /// Move the clock forward, running every timer that falls due in order.
    pub(crate) fn advance(&self, ms: u64) {
        let until = self.state.borrow().now + ms;
        loop {
            let task = self.state.borrow_mut().pop_due_timer(until);
            match task {
                Some(task) => task(),
                None => break,
            }
        }
        self.state.borrow_mut().now = until;
    }

    pub(crate) fn pending_timers(&self) -> usize {
        self.state.borrow().timers.len()
    }

    pub(crate) fn answer_dialogs(&self, answer: bool) {
        self.state.borrow_mut().dialog_answer = answer;
    }

    pub(crate) fn dialog_messages(&self) -> Vec<String> {
        self.state.borrow().dialog_messages.clone()
    }

    pub(crate) fn set_loading(&self, loading: bool) {
        self.state.borrow_mut().loading = loading;
    }

    /// Finish parsing and fire `DOMContentLoaded`.
    pub(crate) fn finish_loading(&self) {
        let tasks = {
            let mut state = self.state.borrow_mut();
            state.loading = false;
            std::mem::take(&mut state.content_loaded)
        };
        for task in tasks {
            task();
        }
    }

    pub(crate) fn pending_reads(&self) -> usize {
        self.state.borrow().reads.len()
    }

    /// Settle every outstanding file read.
    pub(crate) fn complete_reads(&self) {
        loop {
            let next = self.state.borrow_mut().reads.pop_front();
            let Some((file, done)) = next else { break };
            if file.fail {
                done(Err(WebError::FileRead(format!("could not read {}", file.name))));
            } else {
                done(Ok(LoadedFile {
                    mime_type: file.mime_type,
                    bytes: file.bytes,
                }));
            }
        }
    }
}

impl DomElement for FakeElement {
    fn set_style(&self, property: &str, value: &str) -> WebResult<()> {
        self.state.borrow_mut().nodes[self.node.0]
            .styles
            .insert(property.to_string(), value.to_string());
        Ok(())
    }

    fn set_attribute(&self, name: &str, value: &str) -> WebResult<()> {
        self.state.borrow_mut().nodes[self.node.0]
            .attributes
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn toggle_class(&self, class: &str) -> WebResult<bool> {
        let mut state = self.state.borrow_mut();
        let classes = &mut state.nodes[self.node.0].classes;
        match classes.iter().position(|c| c == class) {
            Some(index) => {
                classes.remove(index);
                Ok(false)
            }
            None => {
                classes.push(class.to_string());
                Ok(true)
            }
        }
    }

    fn remove(&self) {
        self.state.borrow_mut().nodes[self.node.0].attached = false;
    }

    fn on_click(&self, handler: Box<dyn FnMut()>) {
        self.state.borrow_mut().nodes[self.node.0]
            .click_handlers
            .push(Rc::new(RefCell::new(handler)));
    }
}

impl DomDocument for FakePage {
    type Element = FakeElement;

    fn element_by_id(&self, id: &str) -> Option<FakeElement> {
        let node = self.state.borrow().find(id)?;
        Some(FakeElement {
            state: Rc::clone(&self.state),
            node,
        })
    }

    fn query_selector_all(&self, selector: &str) -> WebResult<Vec<FakeElement>> {
        let simple = |name: &str| {
            !name.is_empty()
                && name
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        };
        let state = self.state.borrow();
        let matches: Box<dyn Fn(&Node) -> bool> =
            if let Some(class) = selector.strip_prefix('.').filter(|c| simple(c)) {
                let class = class.to_string();
                Box::new(move |node| node.classes.contains(&class))
            } else if let Some(id) = selector.strip_prefix('#').filter(|i| simple(i)) {
                let id = id.to_string();
                Box::new(move |node| node.id.as_deref() == Some(id.as_str()))
            } else {
                return Err(WebError::JavaScript(format!(
                    "unsupported selector {selector:?}"
                )));
            };
        Ok(state
            .nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.attached && matches(node))
            .map(|(index, _)| FakeElement {
                state: Rc::clone(&self.state),
                node: NodeId(index),
            })
            .collect())
    }
}

impl TimerScheduler for FakePage {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let mut state = self.state.borrow_mut();
        let timer = Timer {
            due: state.now + u64::from(delay_ms),
            seq: state.next_seq,
            task,
        };
        state.next_seq += 1;
        state.timers.push(timer);
    }
}

impl ConfirmDialog for FakePage {
    fn confirm(&self, message: &str) -> bool {
        let mut state = self.state.borrow_mut();
        state.dialog_messages.push(message.to_string());
        state.dialog_answer
    }
}

impl FileLoader for FakePage {
    type File = FakeFile;

    fn file_size(&self, file: &FakeFile) -> u64 {
        file.bytes.len() as u64
    }

    fn read_file(&self, file: FakeFile, done: ReadCallback) {
        self.state.borrow_mut().reads.push_back((file, done));
    }
}

impl ReadySignal for FakePage {
    fn is_ready(&self) -> bool {
        !self.state.borrow().loading
    }

    fn on_content_loaded(&self, task: Box<dyn FnOnce()>) {
        self.state.borrow_mut().content_loaded.push(task);
    }
}
