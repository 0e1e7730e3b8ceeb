//! Open scopes on the parser's stack.

use crate::markup::color::colorizer::{AnyColorizer, Colorizer};
use crate::markup::color::transform;
use crate::markup::component::{combine, Component, Content, Style};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum FrameKind {
    /// Bottom of the stack. Never closed by a tag.
    Root,
    /// Wraps its children in an empty styled component.
    Style(Style),
    /// Appends its children to a fixed component.
    Insert(Component),
    /// Recolors its combined children when closed.
    Color(AnyColorizer),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Frame {
    pub tag_name: Option<String>,
    pub kind: FrameKind,
    pub children: Vec<Component>,
    /// The last child is literal text pushed by this frame.
    trailing_text: bool,
}

impl Frame {
    pub fn root() -> Self {
        Frame {
            tag_name: None,
            kind: FrameKind::Root,
            children: Vec::new(),
            trailing_text: false,
        }
    }

    pub fn new(tag_name: &str, kind: FrameKind) -> Self {
        Frame {
            tag_name: Some(tag_name.to_string()),
            kind,
            children: Vec::with_capacity(4),
            trailing_text: false,
        }
    }

    /// Whether a closing tag named `name` ends this scope.
    pub fn closes_on(&self, name: &str) -> bool {
        self.tag_name.as_deref() == Some(name)
    }

    /// Appends literal text, joining it onto literal text pushed just before.
    pub fn push_text(&mut self, text: String) {
        if text.is_empty() {
            return;
        }
        if self.trailing_text {
            if let Some(Content::Text(existing)) = self.children.last_mut().map(|c| &mut c.content) {
                existing.push_str(&text);
                return;
            }
        }
        self.children.push(Component::text(text));
        self.trailing_text = true;
    }

    pub fn push_node(&mut self, node: Component) {
        self.children.push(node);
        self.trailing_text = false;
    }

    /// Materializes the scope into exactly one component.
    pub fn build(self) -> Component {
        let Frame { kind, children, .. } = self;
        match kind {
            FrameKind::Root => combine(children),
            FrameKind::Style(style) => Component::empty().with_style(style).with_children(children),
            FrameKind::Insert(base) => base.append_all(children),
            FrameKind::Color(mut colorizer) => {
                let combined = combine(children);
                let units = transform::size_of(&combined);
                if units == 0 {
                    return combined;
                }
                colorizer.init(units);
                transform::apply(combined, &mut colorizer)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::color::colorizer::GradientColorizer;
    use crate::markup::component::{compact_sentinel, Decoration, TextColor};

    #[test]
    fn test_push_text_joins_plain_leaves() {
        let mut frame = Frame::root();
        frame.push_text("a".to_string());
        frame.push_text("b".to_string());
        frame.push_node(Component::styled_text("", Style::with_decoration(Decoration::Bold, true)));
        frame.push_text("c".to_string());
        frame.push_text(String::new());
        assert_eq!(frame.children.len(), 3);
        assert_eq!(frame.children[0].as_text(), Some("ab"));
        assert_eq!(frame.children[2].as_text(), Some("c"));
    }

    #[test]
    fn test_push_text_leaves_inserted_nodes_alone() {
        let mut frame = Frame::root();
        frame.push_node(Component::newline());
        frame.push_text("a".to_string());
        assert_eq!(frame.children, vec![Component::newline(), Component::text("a")]);
    }

    #[test]
    fn test_root_build_guards_bare_wrapper() {
        let mut frame = Frame::root();
        frame.push_node(Component::empty().append(Component::text("x")));
        let built = frame.build();
        assert_eq!(built.children.len(), 2);
        assert_eq!(built.children[0], compact_sentinel());
    }

    #[test]
    fn test_style_build_without_children() {
        let bold = Style::with_decoration(Decoration::Bold, true);
        let frame = Frame::new("bold", FrameKind::Style(bold.clone()));
        assert_eq!(frame.build(), Component::styled_text("", bold));
    }

    #[test]
    fn test_insert_build_appends_after_base() {
        let base = Component::keybind("key.jump").append(Component::text("a"));
        let mut frame = Frame::new("custom", FrameKind::Insert(base));
        frame.push_text("b".to_string());
        let built = frame.build();
        assert_eq!(built.kind(), "Keybind");
        assert_eq!(built.children, vec![Component::text("a"), Component::text("b")]);
    }

    #[test]
    fn test_color_build_of_nothing_is_empty() {
        let colorizer = GradientColorizer::new(&[TextColor::WHITE, TextColor::BLACK], 0.0);
        let frame = Frame::new("gradient", FrameKind::Color(colorizer.into()));
        assert!(frame.build().is_empty());
    }

    #[test]
    fn test_closes_on_name() {
        assert!(Frame::new("red", FrameKind::Root).closes_on("red"));
        assert!(!Frame::root().closes_on(""));
    }
}
