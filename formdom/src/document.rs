//! The document: one element tree, a focus register, and the listener
//! table events are delivered through.
//!
//! Everything here is mechanical I/O over the tree — lookup, traversal,
//! marker queries, error rendering. Policy about *when* any of it happens
//! belongs to the listeners.

use std::cell::RefCell;
use std::rc::Rc;

use crate::element::{find_element, find_element_mut, Content, Element};
use crate::event::{Dispatch, Event, EventCtx, EventKind, Phase};
use crate::focus::FocusState;
use crate::validity::{self, ValidityState};

/// Marker carried by each rendered error-text element.
pub const ERROR_TEXT_MARKER: &str = "field-error";

/// Error a listener may raise; aborts the dispatch that triggered it.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// A document-level event listener.
///
/// The document calls back with itself borrowed mutably, so handlers are
/// free to rewrite the tree they were triggered from. Handlers run to
/// completion, one at a time, in registration order.
pub trait EventHandler {
    fn handle(
        &mut self,
        doc: &mut Document,
        event: &Event,
        ctx: &mut EventCtx,
    ) -> Result<(), HandlerError>;
}

struct Subscription {
    kind: EventKind,
    phase: Phase,
    handler: Rc<RefCell<dyn EventHandler>>,
}

pub struct Document {
    root: Element,
    focus: FocusState,
    subscriptions: Vec<Subscription>,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self {
            root,
            focus: FocusState::new(),
            subscriptions: Vec::new(),
        }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    // Lookup and traversal

    pub fn find(&self, id: &str) -> Option<&Element> {
        find_element(&self.root, id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_element_mut(&mut self.root, id)
    }

    /// The element whose children contain `id`.
    pub fn parent_of(&self, id: &str) -> Option<&Element> {
        parent_of_in(&self.root, id)
    }

    /// Nearest ancestor-or-self of `id` carrying `marker`.
    pub fn closest_marker(&self, id: &str, marker: &str) -> Option<&Element> {
        let mut path = Vec::new();
        if !path_to(&self.root, id, &mut path) {
            return None;
        }
        path.into_iter().rev().find(|el| el.has_marker(marker))
    }

    /// IDs of all controls inside a form subtree, in document order.
    pub fn controls(&self, form_id: &str) -> Vec<String> {
        let mut out = Vec::new();
        if let Some(form) = self.find(form_id) {
            collect_controls(form, &mut out);
        }
        out
    }

    /// Locate the error container for a field: the first descendant of the
    /// field's parent carrying `marker`.
    pub fn error_container(&self, field_id: &str, marker: &str) -> Option<String> {
        let parent = self.parent_of(field_id)?;
        descendant_with_marker(parent, marker)
    }

    /// Replace a container's content with one error-text element per
    /// message. An empty list clears the container.
    pub fn render_errors(&mut self, container_id: &str, messages: &[String]) {
        let Some(container) = self.find_mut(container_id) else {
            log::warn!("[document] render_errors: no element {container_id}");
            return;
        };

        container.content = if messages.is_empty() {
            Content::None
        } else {
            Content::Children(
                messages
                    .iter()
                    .map(|message| Element::text(message.clone()).marker(ERROR_TEXT_MARKER))
                    .collect(),
            )
        };
    }

    /// Read back the error messages currently rendered in a container.
    pub fn field_errors(&self, container_id: &str) -> Vec<String> {
        let Some(container) = self.find(container_id) else {
            return Vec::new();
        };
        container
            .content
            .children()
            .iter()
            .filter(|child| child.has_marker(ERROR_TEXT_MARKER))
            .filter_map(|child| match &child.content {
                Content::Text(text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    /// Native validity of an element, evaluated fresh. Unknown IDs and
    /// non-control elements evaluate clean.
    pub fn validity(&self, id: &str) -> ValidityState {
        self.find(id).map(validity::evaluate).unwrap_or_default()
    }

    // Focus

    pub fn focused(&self) -> Option<&str> {
        self.focus.focused()
    }

    pub fn focus(&mut self, id: &str) -> bool {
        log::debug!("[document] focus -> {id}");
        self.focus.focus(id)
    }

    pub fn blur(&mut self) -> bool {
        self.focus.blur()
    }

    // Events

    /// Register a document-level listener for one event kind.
    pub fn add_listener(
        &mut self,
        kind: EventKind,
        phase: Phase,
        handler: Rc<RefCell<dyn EventHandler>>,
    ) {
        self.subscriptions.push(Subscription {
            kind,
            phase,
            handler,
        });
    }

    /// Deliver one event to every matching listener, synchronously.
    ///
    /// Capture-phase listeners see all events of their kind; bubble-phase
    /// listeners only see events that bubble. A handler error aborts the
    /// dispatch and propagates to the caller.
    pub fn dispatch(&mut self, event: Event) -> Result<Dispatch, HandlerError> {
        let mut ctx = EventCtx::new(event.cancelable());

        let matching: Vec<Rc<RefCell<dyn EventHandler>>> = self
            .subscriptions
            .iter()
            .filter(|sub| sub.kind == event.kind() && (sub.phase == Phase::Capture || event.bubbles()))
            .map(|sub| Rc::clone(&sub.handler))
            .collect();

        log::debug!(
            "[document] dispatch {:?} on {} -> {} listener(s)",
            event.kind(),
            event.target(),
            matching.len()
        );

        for handler in matching {
            handler.borrow_mut().handle(self, &event, &mut ctx)?;
        }

        Ok(Dispatch {
            default_prevented: ctx.default_prevented(),
        })
    }
}

fn parent_of_in<'a>(element: &'a Element, id: &str) -> Option<&'a Element> {
    if let Content::Children(children) = &element.content {
        for child in children {
            if child.id == id {
                return Some(element);
            }
            if let Some(found) = parent_of_in(child, id) {
                return Some(found);
            }
        }
    }
    None
}

/// Collect the root-to-target path. Returns false if `id` is absent.
fn path_to<'a>(element: &'a Element, id: &str, path: &mut Vec<&'a Element>) -> bool {
    path.push(element);
    if element.id == id {
        return true;
    }
    if let Content::Children(children) = &element.content {
        for child in children {
            if path_to(child, id, path) {
                return true;
            }
        }
    }
    path.pop();
    false
}

fn collect_controls(element: &Element, out: &mut Vec<String>) {
    if element.is_control() {
        out.push(element.id.clone());
    }
    if let Content::Children(children) = &element.content {
        for child in children {
            collect_controls(child, out);
        }
    }
}

fn descendant_with_marker(parent: &Element, marker: &str) -> Option<String> {
    for child in parent.content.children() {
        if child.has_marker(marker) {
            return Some(child.id.clone());
        }
        if let Some(found) = descendant_with_marker(child, marker) {
            return Some(found);
        }
    }
    None
}
