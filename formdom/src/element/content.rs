use super::Element;

/// What an element holds.
#[derive(Debug, Clone, Default)]
pub enum Content {
    /// Empty element.
    #[default]
    None,
    /// Leaf text.
    Text(String),
    /// Nested elements, in document order.
    Children(Vec<Element>),
}

impl Content {
    /// Child elements, or an empty slice for leaf content.
    pub fn children(&self) -> &[Element] {
        match self {
            Content::Children(children) => children,
            _ => &[],
        }
    }
}
