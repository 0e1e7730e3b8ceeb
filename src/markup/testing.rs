//! Testing utilities for component trees
//!
//!     Hand-written `match` ladders over nested components are long and break whenever the
//!     tree shape shifts slightly. [assert_component] walks a tree with a fluent API and
//!     reports the path of the node that failed (`root:children[1]:children[0]`):
//!
//!         assert_component(&parsed)
//!             .child_count(2)
//!             .child(0, |c| {
//!                 c.text("Hello").color(TextColor::new(0xff5555));
//!             });
//!
//!     For colorization tests the tree shape matters less than what ends up on screen.
//!     [leaves] flattens a tree into its non-empty text leaves, each with the style it
//!     effectively renders with after inheritance.

use crate::markup::component::{Component, Decoration, Style, TextColor};

pub fn assert_component(component: &Component) -> ComponentAssertion<'_> {
    ComponentAssertion {
        component,
        context: "root".to_string(),
    }
}

pub struct ComponentAssertion<'a> {
    component: &'a Component,
    context: String,
}

impl<'a> ComponentAssertion<'a> {
    pub fn kind(self, expected: &str) -> Self {
        let actual = self.component.kind();
        assert_eq!(
            actual, expected,
            "{}: Expected {} node, found {}",
            self.context, expected, actual
        );
        self
    }

    /// Checks the node's own text content, not that of its children.
    pub fn text(self, expected: &str) -> Self {
        match self.component.as_text() {
            Some(actual) => assert_eq!(
                actual, expected,
                "{}: Expected text {:?}, found {:?}",
                self.context, expected, actual
            ),
            None => panic!(
                "{}: Expected text {:?}, found a {} node",
                self.context,
                expected,
                self.component.kind()
            ),
        }
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        let actual = self.component.children.len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} children, found {} children: [{}]",
            self.context,
            expected,
            actual,
            summarize(&self.component.children)
        );
        self
    }

    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ComponentAssertion<'a>),
    {
        let children = &self.component.children;
        assert!(
            index < children.len(),
            "{}: Child index {} out of bounds (node has {} children)",
            self.context,
            index,
            children.len()
        );
        assertion(ComponentAssertion {
            component: &children[index],
            context: format!("{}:children[{}]", self.context, index),
        });
        self
    }

    pub fn color(self, expected: TextColor) -> Self {
        assert_eq!(
            self.component.style.color,
            Some(expected),
            "{}: Expected color {}, found {:?}",
            self.context,
            expected,
            self.component.style.color
        );
        self
    }

    pub fn no_color(self) -> Self {
        assert!(
            self.component.style.color.is_none(),
            "{}: Expected no color, found {:?}",
            self.context,
            self.component.style.color
        );
        self
    }

    /// `None` asserts the decoration is left unset.
    pub fn decoration(self, decoration: Decoration, expected: Option<bool>) -> Self {
        let actual = self.component.style.decoration(decoration);
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} to be {:?}, found {:?}",
            self.context,
            decoration.name(),
            expected,
            actual
        );
        self
    }

    pub fn unstyled(self) -> Self {
        assert!(
            self.component.style.is_empty(),
            "{}: Expected no style, found {:?}",
            self.context,
            self.component.style
        );
        self
    }

    /// Free-form check on the node's own style.
    pub fn style<F>(self, check: F) -> Self
    where
        F: FnOnce(&Style),
    {
        check(&self.component.style);
        self
    }
}

fn summarize(children: &[Component]) -> String {
    children
        .iter()
        .map(|child| match child.as_text() {
            Some(text) => format!("{:?}", text),
            None => child.kind().to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// A visible piece of text and the style it renders with.
#[derive(Debug, Clone, PartialEq)]
pub struct Leaf {
    pub text: String,
    pub style: Style,
}

/// Non-empty text leaves in reading order, with inherited styles applied.
pub fn leaves(component: &Component) -> Vec<Leaf> {
    let mut out = Vec::new();
    collect_leaves(component, &Style::default(), &mut out);
    out
}

fn collect_leaves(component: &Component, inherited: &Style, out: &mut Vec<Leaf>) {
    let mut style = component.style.clone();
    style.merge_if_absent(inherited);
    if let Some(text) = component.as_text() {
        if !text.is_empty() {
            out.push(Leaf {
                text: text.to_string(),
                style: style.clone(),
            });
        }
    }
    for child in &component.children {
        collect_leaves(child, &style, out);
    }
}
