pub mod document;
pub mod element;
pub mod event;
pub mod focus;
pub mod validity;

pub use document::{Document, EventHandler, HandlerError, ERROR_TEXT_MARKER};
pub use element::{find_element, find_element_mut, Content, ControlKind, Element, ElementKind};
pub use event::{Dispatch, Event, EventCtx, EventKind, Phase};
pub use focus::FocusState;
pub use validity::ValidityState;
