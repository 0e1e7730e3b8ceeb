//! Style records and the interactive events they carry.

use super::color::{ShadowColor, TextColor};
use super::key::{Key, Uuid};
use super::node::Component;
use serde::Serialize;

/// The five text decorations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decoration {
    Bold,
    Italic,
    Underlined,
    Strikethrough,
    Obfuscated,
}

impl Decoration {
    pub const ALL: [Decoration; 5] = [
        Decoration::Bold,
        Decoration::Italic,
        Decoration::Underlined,
        Decoration::Strikethrough,
        Decoration::Obfuscated,
    ];

    /// Maps a canonical tag name to its decoration.
    pub fn from_name(name: &str) -> Option<Decoration> {
        match name {
            "bold" => Some(Decoration::Bold),
            "italic" => Some(Decoration::Italic),
            "underlined" => Some(Decoration::Underlined),
            "strikethrough" => Some(Decoration::Strikethrough),
            "obfuscated" => Some(Decoration::Obfuscated),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Decoration::Bold => "bold",
            Decoration::Italic => "italic",
            Decoration::Underlined => "underlined",
            Decoration::Strikethrough => "strikethrough",
            Decoration::Obfuscated => "obfuscated",
        }
    }
}

/// Tri-state decoration slots; `None` means "inherit".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Decorations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underlined: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strikethrough: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obfuscated: Option<bool>,
}

impl Decorations {
    pub fn get(&self, decoration: Decoration) -> Option<bool> {
        match decoration {
            Decoration::Bold => self.bold,
            Decoration::Italic => self.italic,
            Decoration::Underlined => self.underlined,
            Decoration::Strikethrough => self.strikethrough,
            Decoration::Obfuscated => self.obfuscated,
        }
    }

    pub fn set(&mut self, decoration: Decoration, state: Option<bool>) {
        let slot = match decoration {
            Decoration::Bold => &mut self.bold,
            Decoration::Italic => &mut self.italic,
            Decoration::Underlined => &mut self.underlined,
            Decoration::Strikethrough => &mut self.strikethrough,
            Decoration::Obfuscated => &mut self.obfuscated,
        };
        *slot = state;
    }

    pub fn is_empty(&self) -> bool {
        Decoration::ALL.iter().all(|d| self.get(*d).is_none())
    }
}

/// Action run when the styled text is clicked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "value", rename_all = "snake_case")]
pub enum ClickEvent {
    OpenUrl(String),
    OpenFile(String),
    RunCommand(String),
    SuggestCommand(String),
    ChangePage(i32),
    CopyToClipboard(String),
}

/// Opaque item data attached to a `show_item` hover.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataComponentValue {
    /// Marks the component as explicitly removed from the item.
    Removed,
    /// The value text as written in the markup.
    Raw(String),
    Json(serde_json::Value),
}

/// Tooltip shown when the styled text is hovered.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", content = "contents", rename_all = "snake_case")]
pub enum HoverEvent {
    ShowText(Component),
    ShowItem {
        item: Key,
        count: i32,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        components: Vec<(Key, DataComponentValue)>,
    },
    ShowEntity {
        kind: Key,
        id: Uuid,
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<Component>,
    },
}

/// Visual and interactive attributes of a component. Every field is optional.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<TextColor>,
    #[serde(flatten)]
    pub decorations: Decorations,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Key>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub click: Option<ClickEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover: Option<Box<HoverEvent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insertion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<ShadowColor>,
}

impl Style {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.color.is_none()
            && self.decorations.is_empty()
            && self.font.is_none()
            && self.click.is_none()
            && self.hover.is_none()
            && self.insertion.is_none()
            && self.shadow.is_none()
    }

    pub fn with_color(color: TextColor) -> Self {
        Style {
            color: Some(color),
            ..Self::default()
        }
    }

    pub fn with_decoration(decoration: Decoration, state: bool) -> Self {
        let mut style = Self::default();
        style.decorations.set(decoration, Some(state));
        style
    }

    pub fn with_font(font: Key) -> Self {
        Style {
            font: Some(font),
            ..Self::default()
        }
    }

    pub fn with_click(click: ClickEvent) -> Self {
        Style {
            click: Some(click),
            ..Self::default()
        }
    }

    pub fn with_hover(hover: HoverEvent) -> Self {
        Style {
            hover: Some(Box::new(hover)),
            ..Self::default()
        }
    }

    pub fn with_insertion(insertion: impl Into<String>) -> Self {
        Style {
            insertion: Some(insertion.into()),
            ..Self::default()
        }
    }

    pub fn with_shadow(shadow: ShadowColor) -> Self {
        Style {
            shadow: Some(shadow),
            ..Self::default()
        }
    }

    pub fn decoration(&self, decoration: Decoration) -> Option<bool> {
        self.decorations.get(decoration)
    }

    /// Fills every field unset on `self` from `other`; set fields are kept.
    pub fn merge_if_absent(&mut self, other: &Style) {
        if self.color.is_none() {
            self.color = other.color;
        }
        for decoration in Decoration::ALL {
            if self.decorations.get(decoration).is_none() {
                self.decorations.set(decoration, other.decorations.get(decoration));
            }
        }
        if self.font.is_none() {
            self.font.clone_from(&other.font);
        }
        if self.click.is_none() {
            self.click.clone_from(&other.click);
        }
        if self.hover.is_none() {
            self.hover.clone_from(&other.hover);
        }
        if self.insertion.is_none() {
            self.insertion.clone_from(&other.insertion);
        }
        if self.shadow.is_none() {
            self.shadow = other.shadow;
        }
    }
}
