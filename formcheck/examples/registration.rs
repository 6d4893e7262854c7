//! Registration form demo.
//!
//! Builds a document with a managed signup form, attaches the validation
//! engine, and drives blur/change/submit interactions the way a host
//! input loop would. Engine decisions are logged to `registration.log`.

use std::fs::File;

use formcheck::FormsValidation;
use formdom::{Document, Element, Event};
use log::LevelFilter;
use simplelog::{Config, WriteLogger};

/// A labeled field block: the control plus its error container.
fn field(name: &str, label: &str, control: Element) -> Element {
    Element::block()
        .id(format!("{name}-field"))
        .child(Element::text(label))
        .child(control)
        .child(
            Element::block()
                .id(format!("{name}-errors"))
                .marker("form-field-errors"),
        )
}

fn show_errors(doc: &Document, name: &str) {
    println!("  {name}: {:?}", doc.field_errors(&format!("{name}-errors")));
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    WriteLogger::init(
        LevelFilter::Debug,
        Config::default(),
        File::create("registration.log")?,
    )?;

    let root = Element::block().id("page").child(
        Element::form()
            .id("signup")
            .marker("form")
            .child(field(
                "username",
                "Username",
                Element::text_input().id("username").required(true).min_length(5),
            ))
            .child(field(
                "phone",
                "Phone",
                Element::text_input()
                    .id("phone")
                    .required(true)
                    .pattern(r"\+?\d{7,12}")
                    .title("Digits only, 7 to 12 of them"),
            ))
            .child(field(
                "terms",
                "I accept the terms",
                Element::checkbox().id("terms").required(true),
            )),
    );
    let mut doc = Document::new(root);
    let _engine = FormsValidation::attach(&mut doc);

    println!("Leaving the username field empty:");
    doc.dispatch(Event::Blur {
        target: "username".into(),
    })?;
    show_errors(&doc, "username");

    println!("\nTyping a bad phone number and tabbing away:");
    if let Some(phone) = doc.find_mut("phone") {
        phone.value = "not-a-number".into();
    }
    doc.dispatch(Event::Blur {
        target: "phone".into(),
    })?;
    show_errors(&doc, "phone");

    println!("\nSubmitting with everything still wrong:");
    let outcome = doc.dispatch(Event::Submit {
        target: "signup".into(),
    })?;
    show_errors(&doc, "username");
    show_errors(&doc, "phone");
    show_errors(&doc, "terms");
    println!(
        "  submit prevented: {}, focus moved to: {:?}",
        outcome.default_prevented,
        doc.focused()
    );

    println!("\nFilling everything in properly:");
    if let Some(username) = doc.find_mut("username") {
        username.value = "norpie".into();
    }
    if let Some(phone) = doc.find_mut("phone") {
        phone.value = "+3212345678".into();
    }
    if let Some(terms) = doc.find_mut("terms") {
        terms.checked = true;
    }
    doc.dispatch(Event::Change {
        target: "terms".into(),
    })?;
    show_errors(&doc, "terms");

    let outcome = doc.dispatch(Event::Submit {
        target: "signup".into(),
    })?;
    println!("  submit prevented: {}", outcome.default_prevented);

    Ok(())
}
