//! Element constructors.

use std::rc::Rc;

use super::types::{ButtonProps, Element, Node, TextProps};
use crate::types::Attr;

/// An element that renders nothing.
pub fn empty() -> Element {
    Element::new(Node::Empty)
}

/// A line of plain text.
pub fn text(content: impl Into<String>) -> Element {
    text_with(TextProps {
        content: content.into(),
        ..Default::default()
    })
}

/// A line of text with explicit props.
pub fn text_with(props: TextProps) -> Element {
    Element::new(Node::Text(props))
}

/// A section heading.
pub fn heading(content: impl Into<String>) -> Element {
    text_with(TextProps {
        content: content.into(),
        attrs: Attr::HEADING,
    })
}

/// A button that calls `on_press` when activated.
pub fn button(label: impl Into<String>, on_press: impl Fn() + 'static) -> Element {
    button_with(ButtonProps {
        label: label.into(),
        on_press: Some(Rc::new(on_press)),
    })
}

/// A button with explicit props.
pub fn button_with(props: ButtonProps) -> Element {
    Element::new(Node::Button(props))
}

/// Children stacked vertically.
pub fn group(children: Vec<Element>) -> Element {
    Element::new(Node::Group(children))
}

/// Children rendered as bullet list items.
pub fn list(items: Vec<Element>) -> Element {
    Element::new(Node::List(items))
}

/// Children inside a bordered panel.
pub fn modal(children: Vec<Element>) -> Element {
    Element::new(Node::Modal(children))
}

/// An element resolved each time it is rendered.
///
/// ```ignore
/// let open = signal(false);
/// let view = dynamic({
///     let open = open.clone();
///     move || if open.get() { text("Open") } else { empty() }
/// });
/// ```
pub fn dynamic(getter: impl Fn() -> Element + 'static) -> Element {
    Element::new(Node::Dynamic(Rc::new(getter)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_is_styled_text() {
        let el = heading("Title");
        match el.node() {
            Node::Text(props) => {
                assert_eq!(props.content, "Title");
                assert_eq!(props.attrs, Attr::HEADING);
            }
            other => panic!("expected text, got {:?}", other),
        }
    }

    #[test]
    fn test_each_constructor_yields_fresh_identity() {
        assert_ne!(empty(), empty());
        assert_ne!(text("a"), text("a"));
    }
}
