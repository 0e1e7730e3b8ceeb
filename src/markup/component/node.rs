//! Document nodes.
//!
//! A [`Component`] owns its content, its style and its children. Groups and
//! styled wrappers are ordinary components with empty text content.

use super::color::TextColor;
use super::key::{BlockPos, Key, Uuid};
use super::style::Style;
use serde::Serialize;

/// Where an NBT component reads its data from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NbtSource {
    Block(BlockPos),
    /// Entity selector string.
    Entity(String),
    Storage(Key),
}

/// Whose face a player head shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadProfile {
    Id(Uuid),
    Name(String),
    Texture(Key),
}

/// Contents of an object component.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectContents {
    Sprite {
        /// `None` uses the default block atlas.
        #[serde(skip_serializing_if = "Option::is_none")]
        atlas: Option<Key>,
        sprite: Key,
    },
    PlayerHead {
        profile: HeadProfile,
        hat: bool,
    },
}

/// What a component displays before its children.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Content {
    Text(String),
    Translatable {
        key: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        fallback: Option<String>,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        args: Vec<Component>,
    },
    Selector {
        pattern: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        separator: Option<Box<Component>>,
    },
    Score {
        name: String,
        objective: String,
    },
    Keybind(String),
    Nbt {
        path: String,
        interpret: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        separator: Option<Box<Component>>,
        source: NbtSource,
    },
    Object(ObjectContents),
}

/// An immutable node of the rich-text tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Component {
    #[serde(flatten)]
    pub content: Content,
    #[serde(skip_serializing_if = "Style::is_empty")]
    pub style: Style,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Component>,
}

impl Component {
    pub fn new(content: Content) -> Self {
        Component {
            content,
            style: Style::default(),
            children: Vec::new(),
        }
    }

    /// Empty text with no style and no children.
    pub fn empty() -> Self {
        Self::text("")
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(Content::Text(text.into()))
    }

    pub fn styled_text(text: impl Into<String>, style: Style) -> Self {
        Self::text(text).with_style(style)
    }

    pub fn newline() -> Self {
        Self::text("\n")
    }

    pub fn keybind(key: impl Into<String>) -> Self {
        Self::new(Content::Keybind(key.into()))
    }

    pub fn score(name: impl Into<String>, objective: impl Into<String>) -> Self {
        Self::new(Content::Score {
            name: name.into(),
            objective: objective.into(),
        })
    }

    pub fn selector(pattern: impl Into<String>, separator: Option<Component>) -> Self {
        Self::new(Content::Selector {
            pattern: pattern.into(),
            separator: separator.map(Box::new),
        })
    }

    pub fn translatable(
        key: impl Into<String>,
        fallback: Option<String>,
        args: Vec<Component>,
    ) -> Self {
        Self::new(Content::Translatable {
            key: key.into(),
            fallback,
            args,
        })
    }

    pub fn object(contents: ObjectContents) -> Self {
        Self::new(Content::Object(contents))
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_children(mut self, children: Vec<Component>) -> Self {
        self.children = children;
        self
    }

    /// Appends one child.
    pub fn append(mut self, child: Component) -> Self {
        self.children.push(child);
        self
    }

    /// Appends every child, in order.
    pub fn append_all(mut self, children: impl IntoIterator<Item = Component>) -> Self {
        self.children.extend(children);
        self
    }

    /// Sets the color only when the style has none.
    pub fn color_if_absent(mut self, color: TextColor) -> Self {
        if self.style.color.is_none() {
            self.style.color = Some(color);
        }
        self
    }

    /// Returns the text content for text components.
    pub fn as_text(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self.content, Content::Text(_))
    }

    /// `true` for empty text with no style and no children.
    pub fn is_empty(&self) -> bool {
        self.as_text() == Some("") && self.style.is_empty() && self.children.is_empty()
    }

    /// Name of the content variant, used in diagnostics and tree rendering.
    pub fn kind(&self) -> &'static str {
        match self.content {
            Content::Text(_) => "Text",
            Content::Translatable { .. } => "Translatable",
            Content::Selector { .. } => "Selector",
            Content::Score { .. } => "Score",
            Content::Keybind(_) => "Keybind",
            Content::Nbt { .. } => "Nbt",
            Content::Object(_) => "Object",
        }
    }
}

impl Default for Component {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<&str> for Component {
    fn from(text: &str) -> Self {
        Component::text(text)
    }
}

impl From<String> for Component {
    fn from(text: String) -> Self {
        Component::text(text)
    }
}
