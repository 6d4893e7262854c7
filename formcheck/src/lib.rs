//! Accessible form validation over a host document.
//!
//! Attach one [`FormsValidation`] engine to a [`formdom::Document`] and it
//! validates required controls on blur, toggle controls on change, and
//! gates submission of managed forms, rendering an ordered message list
//! next to each invalid field and mirroring validity into `aria-invalid`.
//!
//! # Example
//!
//! ```
//! use formcheck::FormsValidation;
//! use formdom::{Document, Element, Event};
//!
//! let mut doc = Document::new(
//!     Element::form().id("signup").marker("form").child(
//!         Element::block()
//!             .child(Element::text_input().id("name").required(true))
//!             .child(Element::block().id("name-errors").marker("form-field-errors")),
//!     ),
//! );
//! let _engine = FormsValidation::attach(&mut doc);
//!
//! let outcome = doc.dispatch(Event::Submit { target: "signup".into() }).unwrap();
//! assert!(outcome.default_prevented);
//! assert_eq!(doc.focused(), Some("name"));
//! ```

pub mod constraint;
pub mod engine;
pub mod error;
pub mod message;

pub use constraint::ConstraintKind;
pub use engine::{FormsValidation, Selectors};
pub use error::EngineError;
