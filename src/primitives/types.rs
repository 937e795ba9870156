//! Primitive types - Element handles, nodes and props.
//!
//! An [`Element`] is the renderable handle passed around by components and
//! stored in slot registries. Cloning is cheap (reference count bump) and
//! equality is **identity**: two elements are equal only if they point at the
//! same node. Two buttons with the same label are still distinct elements.

use std::fmt;
use std::rc::Rc;

use crate::types::Attr;

// =============================================================================
// Callback Types
// =============================================================================

/// Button activation callback.
///
/// Rc so the same callback can be captured by several closures.
pub type PressCallback = Rc<dyn Fn()>;

/// Getter evaluated every time a dynamic node is rendered.
pub type ElementGetter = Rc<dyn Fn() -> Element>;

// =============================================================================
// Props
// =============================================================================

/// Properties for a text line.
#[derive(Clone, Debug, Default)]
pub struct TextProps {
    /// Text content.
    pub content: String,
    /// Cell attributes applied to the whole line.
    pub attrs: Attr,
}

/// Properties for a button.
#[derive(Clone, Default)]
pub struct ButtonProps {
    /// Label drawn inside the button.
    pub label: String,
    /// Called when the button is activated.
    pub on_press: Option<PressCallback>,
}

// =============================================================================
// Node
// =============================================================================

/// What an element renders as.
pub enum Node {
    /// Renders nothing.
    Empty,
    /// A single line of text.
    Text(TextProps),
    /// A focusable control.
    Button(ButtonProps),
    /// Children stacked vertically.
    Group(Vec<Element>),
    /// Children rendered as bullet list items.
    List(Vec<Element>),
    /// Children inside a bordered panel.
    Modal(Vec<Element>),
    /// Resolved at render time. Signals read by the getter are tracked by
    /// whatever effect performs the render.
    Dynamic(ElementGetter),
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Empty => f.write_str("Empty"),
            Node::Text(props) => f.debug_tuple("Text").field(&props.content).finish(),
            Node::Button(props) => f.debug_tuple("Button").field(&props.label).finish(),
            Node::Group(children) => f.debug_tuple("Group").field(children).finish(),
            Node::List(items) => f.debug_tuple("List").field(items).finish(),
            Node::Modal(children) => f.debug_tuple("Modal").field(children).finish(),
            Node::Dynamic(_) => f.write_str("Dynamic"),
        }
    }
}

// =============================================================================
// Element
// =============================================================================

/// Opaque renderable handle with identity semantics.
#[derive(Clone)]
pub struct Element(Rc<Node>);

impl Element {
    /// Wrap a node in a new handle.
    pub fn new(node: Node) -> Self {
        Self(Rc::new(node))
    }

    /// The underlying node.
    pub fn node(&self) -> &Node {
        &self.0
    }

    /// Identity comparison (same as `==`).
    pub fn ptr_eq(&self, other: &Element) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// True for [`Node::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(self.node(), Node::Empty)
    }

    /// Label if this element is a button.
    pub fn label(&self) -> Option<&str> {
        match self.node() {
            Node::Button(props) => Some(&props.label),
            _ => None,
        }
    }

    /// Activate this element if it is a button with a callback.
    ///
    /// Returns true if a callback ran.
    pub fn press(&self) -> bool {
        match self.node() {
            Node::Button(ButtonProps {
                on_press: Some(on_press),
                ..
            }) => {
                on_press();
                true
            }
            _ => false,
        }
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Element {}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Element({:p}, {:?})", Rc::as_ptr(&self.0), self.node())
    }
}
