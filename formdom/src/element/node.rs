use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// What an element is, as far as form handling is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Generic container or text node.
    Block,
    /// A form. Governed by validation only when it carries the managed marker.
    Form,
    /// A form control.
    Control(ControlKind),
}

/// The concrete control type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Text,
    Email,
    Password,
    TextArea,
    Radio,
    Checkbox,
}

impl ControlKind {
    /// Radio and checkbox complete on change, not on focus loss.
    pub fn is_toggle(self) -> bool {
        matches!(self, ControlKind::Radio | ControlKind::Checkbox)
    }
}

#[derive(Debug, Clone)]
pub struct Element {
    // Identity
    pub id: String,
    pub kind: ElementKind,

    // Content
    pub content: Content,

    // Declared constraints
    pub required: bool,
    pub pattern: Option<String>,
    /// Human-readable description of `pattern`, surfaced when it fails.
    pub title: Option<String>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,

    // Live control state
    pub value: String,
    pub checked: bool,

    /// Accessibility state. Unset until validation first touches the field.
    pub aria_invalid: Option<bool>,

    // Marker attributes (data-*)
    pub data: HashMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            kind: ElementKind::Block,
            content: Content::None,
            required: false,
            pattern: None,
            title: None,
            min_length: None,
            max_length: None,
            value: String::new(),
            checked: false,
            aria_invalid: None,
            data: HashMap::new(),
        }
    }
}

impl Element {
    /// Create a generic container.
    pub fn block() -> Self {
        Self::default()
    }

    /// Create a leaf text node.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: Content::Text(text.into()),
            ..Self::default()
        }
    }

    /// Create a form element.
    pub fn form() -> Self {
        Self {
            id: generate_id("form"),
            kind: ElementKind::Form,
            ..Self::default()
        }
    }

    /// Create a control of the given kind.
    pub fn control(kind: ControlKind) -> Self {
        Self {
            id: generate_id("control"),
            kind: ElementKind::Control(kind),
            ..Self::default()
        }
    }

    pub fn text_input() -> Self {
        Self::control(ControlKind::Text)
    }

    pub fn email_input() -> Self {
        Self::control(ControlKind::Email)
    }

    pub fn password_input() -> Self {
        Self::control(ControlKind::Password)
    }

    pub fn textarea() -> Self {
        Self::control(ControlKind::TextArea)
    }

    pub fn checkbox() -> Self {
        Self::control(ControlKind::Checkbox)
    }

    pub fn radio() -> Self {
        Self::control(ControlKind::Radio)
    }

    // Builder methods

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Tag this element with a valueless marker attribute.
    pub fn marker(mut self, name: impl Into<String>) -> Self {
        self.data.insert(name.into(), String::new());
        self
    }

    /// Attach a data attribute.
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Append a child element.
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    // Queries

    pub fn has_marker(&self, name: &str) -> bool {
        self.data.contains_key(name)
    }

    pub fn is_control(&self) -> bool {
        matches!(self.kind, ElementKind::Control(_))
    }

    pub fn control_kind(&self) -> Option<ControlKind> {
        match self.kind {
            ElementKind::Control(kind) => Some(kind),
            _ => None,
        }
    }
}
