//! The validation orchestrator.
//!
//! One `FormsValidation` instance is attached to a document at startup and
//! reacts to blur, change, and submit interactions. Validity is recomputed
//! fresh on every pass; nothing is cached between interactions.

use std::cell::RefCell;
use std::rc::Rc;

use formdom::{
    ControlKind, Document, Event, EventCtx, EventHandler, EventKind, HandlerError, Phase,
};
use log::debug;

use crate::constraint;
use crate::error::EngineError;
use crate::message;

/// Marker names the engine looks for on the document.
#[derive(Debug, Clone)]
pub struct Selectors {
    /// Marker that opts a form into managed validation.
    pub form: String,
    /// Marker on the container error text is rendered into.
    pub field_errors: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            form: "form".to_string(),
            field_errors: "form-field-errors".to_string(),
        }
    }
}

/// The validation engine.
pub struct FormsValidation {
    selectors: Selectors,
}

impl FormsValidation {
    pub fn new() -> Self {
        Self::with_selectors(Selectors::default())
    }

    pub fn with_selectors(selectors: Selectors) -> Self {
        Self { selectors }
    }

    /// Create an engine and subscribe it on the document.
    ///
    /// Blur is taken at capture phase since it does not bubble; change and
    /// submit arrive through the bubble phase. The returned handle belongs
    /// to the application root; the subscription lives as long as the
    /// document.
    pub fn attach(doc: &mut Document) -> Rc<RefCell<Self>> {
        Self::attach_with(doc, Selectors::default())
    }

    pub fn attach_with(doc: &mut Document, selectors: Selectors) -> Rc<RefCell<Self>> {
        let engine = Rc::new(RefCell::new(Self::with_selectors(selectors)));
        doc.add_listener(EventKind::Blur, Phase::Capture, engine.clone());
        doc.add_listener(EventKind::Change, Phase::Bubble, engine.clone());
        doc.add_listener(EventKind::Submit, Phase::Bubble, engine.clone());
        engine
    }

    /// Validate one field and report the outcome next to it.
    ///
    /// Resolves a message per active violation, in fixed display order,
    /// renders the full list into the field's error container (an empty
    /// list clears earlier errors), and mirrors the outcome into
    /// `aria-invalid`. Returns whether the field is valid.
    pub fn validate_field(&self, doc: &mut Document, id: &str) -> Result<bool, EngineError> {
        let violations = constraint::violations(doc, id);

        let field = doc.find(id).ok_or_else(|| EngineError::UnknownTarget {
            id: id.to_string(),
        })?;
        let messages: Vec<String> = violations
            .into_iter()
            .map(|kind| message::message(kind, field))
            .collect();

        let container = doc
            .error_container(id, &self.selectors.field_errors)
            .ok_or_else(|| EngineError::MissingErrorContainer {
                id: id.to_string(),
            })?;
        doc.render_errors(&container, &messages);

        let is_valid = messages.is_empty();
        if let Some(field) = doc.find_mut(id) {
            field.aria_invalid = Some(!is_valid);
        }

        debug!("[engine] validated {id}: valid={is_valid}");
        Ok(is_valid)
    }

    /// Blur validates required fields inside managed forms only.
    ///
    /// Blur fires on every focus loss, form-related or not; the gate keeps
    /// optional and unmanaged fields quiet.
    fn on_blur(&self, doc: &mut Document, target: &str) -> Result<(), EngineError> {
        let Some(field) = doc.find(target) else {
            return Err(EngineError::UnknownTarget {
                id: target.to_string(),
            });
        };

        let required = field.required;
        let managed = doc.closest_marker(target, &self.selectors.form).is_some();
        if required && managed {
            self.validate_field(doc, target)?;
        } else {
            debug!("[engine] blur on {target} skipped (required={required}, managed={managed})");
        }
        Ok(())
    }

    /// Change validates required toggle controls.
    ///
    /// Focus loss is a poor completion signal for radios and checkboxes;
    /// change is the one that counts. Text-like controls are covered by
    /// blur already and are left alone here. Toggle controls validate on
    /// change even outside managed forms.
    fn on_change(&self, doc: &mut Document, target: &str) -> Result<(), EngineError> {
        let Some(field) = doc.find(target) else {
            return Err(EngineError::UnknownTarget {
                id: target.to_string(),
            });
        };

        let toggle = field.control_kind().is_some_and(ControlKind::is_toggle);
        let required = field.required;
        if toggle && required {
            self.validate_field(doc, target)?;
        } else {
            debug!("[engine] change on {target} skipped (toggle={toggle}, required={required})");
        }
        Ok(())
    }

    /// Gate a submit attempt on a managed form.
    ///
    /// Every required control is validated, not just the first failure, so
    /// all errors render at once. If anything failed, the submit default is
    /// called off and the first failing control, in document order, takes
    /// focus. Forms without the managed marker are left entirely alone.
    fn on_submit(
        &self,
        doc: &mut Document,
        target: &str,
        ctx: &mut EventCtx,
    ) -> Result<(), EngineError> {
        let Some(form) = doc.find(target) else {
            return Err(EngineError::UnknownTarget {
                id: target.to_string(),
            });
        };
        if !form.has_marker(&self.selectors.form) {
            debug!("[engine] submit on {target} not managed, default proceeds");
            return Ok(());
        }

        let required: Vec<String> = doc
            .controls(target)
            .into_iter()
            .filter(|id| doc.find(id).is_some_and(|el| el.required))
            .collect();

        let mut first_invalid: Option<String> = None;
        for id in &required {
            let valid = self.validate_field(doc, id)?;
            if !valid && first_invalid.is_none() {
                first_invalid = Some(id.clone());
            }
        }

        if let Some(id) = first_invalid {
            debug!("[engine] submit on {target} blocked, focusing {id}");
            ctx.prevent_default();
            doc.focus(&id);
        }
        Ok(())
    }
}

impl Default for FormsValidation {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for FormsValidation {
    fn handle(
        &mut self,
        doc: &mut Document,
        event: &Event,
        ctx: &mut EventCtx,
    ) -> Result<(), HandlerError> {
        match event {
            Event::Blur { target } => self.on_blur(doc, target)?,
            Event::Change { target } => self.on_change(doc, target)?,
            Event::Submit { target } => self.on_submit(doc, target, ctx)?,
        }
        Ok(())
    }
}
