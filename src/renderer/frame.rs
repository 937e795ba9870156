//! Frame - The element tree flattened into styled text lines.
//!
//! [`render`] walks an element tree top to bottom, resolving dynamic nodes as
//! it goes. Buttons are collected in the order they are drawn, which is also
//! the focus order.
//!
//! | Node      | Output                                   |
//! |-----------|------------------------------------------|
//! | `Text`    | one line                                 |
//! | `Button`  | `[ label ]`, inverse when focused        |
//! | `Group`   | children, same indent                    |
//! | `List`    | children, first line of each bulleted    |
//! | `Modal`   | children inside a box                    |
//! | `Dynamic` | whatever the getter returns right now    |

use crate::primitives::{Element, Node};
use crate::types::Attr;

const BULLET: &str = "• ";
const ITEM_INDENT: &str = "  ";
const MODAL_SIDE: &str = "│ ";

/// One rendered line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    /// Line text including indentation and decoration.
    pub text: String,
    /// Attributes for the whole line.
    pub attrs: Attr,
    /// Index into [`Frame::buttons`] if this line is a button.
    pub button: Option<usize>,
}

/// A rendered frame.
#[derive(Clone, Debug, Default)]
pub struct Frame {
    lines: Vec<Line>,
    buttons: Vec<Element>,
}

impl Frame {
    /// All lines, top to bottom.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Buttons in focus order.
    pub fn buttons(&self) -> &[Element] {
        &self.buttons
    }

    /// Button at a focus index.
    pub fn button_at(&self, index: usize) -> Option<&Element> {
        self.buttons.get(index)
    }

    /// First button with this exact label.
    pub fn find_button(&self, label: &str) -> Option<&Element> {
        self.buttons.iter().find(|b| b.label() == Some(label))
    }

    /// Index of the first line containing `needle`.
    pub fn find_line(&self, needle: &str) -> Option<usize> {
        self.lines.iter().position(|line| line.text.contains(needle))
    }

    /// True if any line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.find_line(needle).is_some()
    }

    /// Number of lines.
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Lines joined with newlines.
    pub fn to_text(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Render `root` into a frame. `focused` is an index into the button order;
/// out-of-range values draw nothing as focused.
pub fn render(root: &Element, focused: Option<usize>) -> Frame {
    let mut walker = Walker {
        frame: Frame::default(),
        focused,
    };
    walker.walk(root, "");
    walker.frame
}

struct Walker {
    frame: Frame,
    focused: Option<usize>,
}

impl Walker {
    fn push(&mut self, text: String, attrs: Attr, button: Option<usize>) {
        self.frame.lines.push(Line {
            text,
            attrs,
            button,
        });
    }

    fn walk(&mut self, element: &Element, prefix: &str) {
        match element.node() {
            Node::Empty => {}
            Node::Text(props) => {
                self.push(format!("{prefix}{}", props.content), props.attrs, None);
            }
            Node::Button(props) => {
                let index = self.frame.buttons.len();
                self.frame.buttons.push(element.clone());
                let attrs = if self.focused == Some(index) {
                    Attr::INVERSE | Attr::BOLD
                } else {
                    Attr::BOLD
                };
                self.push(format!("{prefix}[ {} ]", props.label), attrs, Some(index));
            }
            Node::Group(children) => {
                for child in children {
                    self.walk(child, prefix);
                }
            }
            Node::List(items) => {
                let item_prefix = format!("{prefix}{ITEM_INDENT}");
                for item in items {
                    let start = self.frame.lines.len();
                    self.walk(item, &item_prefix);
                    if let Some(first) = self.frame.lines.get_mut(start) {
                        let at = prefix.len();
                        first.text.replace_range(at..at + ITEM_INDENT.len(), BULLET);
                    }
                }
            }
            Node::Modal(children) => self.walk_modal(children, prefix),
            Node::Dynamic(getter) => {
                let resolved = getter();
                self.walk(&resolved, prefix);
            }
        }
    }

    fn walk_modal(&mut self, children: &[Element], prefix: &str) {
        let top = self.frame.lines.len();
        self.push(String::new(), Attr::NONE, None);

        let inner_prefix = format!("{prefix}{MODAL_SIDE}");
        let body_start = self.frame.lines.len();
        for child in children {
            self.walk(child, &inner_prefix);
        }

        // Common width of the box interior, in chars.
        let skip = inner_prefix.chars().count();
        let width = self.frame.lines[body_start..]
            .iter()
            .map(|line| line.text.chars().count().saturating_sub(skip))
            .max()
            .unwrap_or(0);

        for line in &mut self.frame.lines[body_start..] {
            let pad = width - line.text.chars().count().saturating_sub(skip);
            line.text.push_str(&" ".repeat(pad));
            line.text.push_str(" │");
        }

        let bar = "─".repeat(width + 2);
        self.frame.lines[top].text = format!("{prefix}┌{bar}┐");
        self.push(format!("{prefix}└{bar}┘"), Attr::NONE, None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{button, dynamic, empty, group, heading, list, modal, text};
    use spark_signals::signal;

    #[test]
    fn test_text_and_heading() {
        let frame = render(&group(vec![heading("Title"), text("body")]), None);
        assert_eq!(frame.height(), 2);
        assert_eq!(frame.lines()[0].attrs, Attr::HEADING);
        assert_eq!(frame.to_text(), "Title\nbody");
    }

    #[test]
    fn test_buttons_collected_in_order() {
        let a = button("A", || {});
        let b = button("B", || {});
        let frame = render(&group(vec![a.clone(), text("gap"), b.clone()]), None);

        assert_eq!(frame.buttons(), &[a.clone(), b.clone()]);
        assert_eq!(frame.find_button("B"), Some(&b));
        assert_eq!(frame.lines()[0].text, "[ A ]");
        assert_eq!(frame.lines()[2].button, Some(1));
    }

    #[test]
    fn test_focused_button_inverse() {
        let root = group(vec![button("A", || {}), button("B", || {})]);
        let frame = render(&root, Some(1));

        assert!(!frame.lines()[0].attrs.contains(Attr::INVERSE));
        assert!(frame.lines()[1].attrs.contains(Attr::INVERSE));

        let frame = render(&root, Some(7));
        assert!(frame.lines().iter().all(|l| !l.attrs.contains(Attr::INVERSE)));
    }

    #[test]
    fn test_list_bullets() {
        let frame = render(&list(vec![text("one"), empty(), text("two")]), None);
        assert_eq!(frame.to_text(), "• one\n• two");
    }

    #[test]
    fn test_nested_list_in_modal() {
        let frame = render(&modal(vec![list(vec![text("ab")]), text("wide")]), None);
        let expected = [
            "┌──────┐",
            "│ • ab │",
            "│ wide │",
            "└──────┘",
        ];
        assert_eq!(frame.to_text(), expected.join("\n"));
    }

    #[test]
    fn test_empty_modal() {
        let frame = render(&modal(vec![]), None);
        assert_eq!(frame.to_text(), "┌──┐\n└──┘");
    }

    #[test]
    fn test_dynamic_resolved_each_render() {
        let label = signal("first".to_string());
        let label_clone = label.clone();
        let root = dynamic(move || text(label_clone.get()));

        assert!(render(&root, None).contains("first"));
        label.set("second".to_string());
        assert!(render(&root, None).contains("second"));
    }
}
