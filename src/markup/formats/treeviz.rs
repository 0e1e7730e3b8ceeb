//! Treeviz formatter for component trees
//!
//! One line per node, children drawn with `├─`/`└─` connectors. Each line is
//! `<icon> <label>` optionally followed by the node's own style in brackets;
//! labels are truncated to 30 characters, styles never are.
//!
//! Example for `<red>Hello <b>world</b></red>`:
//!
//!   ⧉ 2 children [red]
//!   ├─ ◦ "Hello "
//!   └─ ⧉ 1 child [bold]
//!     └─ ◦ "world"
//!
//! Icons
//!     Group (empty text with children): ⧉
//!     Text: ◦
//!     Translatable: †
//!     Selector: @
//!     Score: #
//!     Keybind: ⌨
//!     Nbt: ƒ
//!     Object: ▣
//!
//! Arguments of a translatable node are listed ahead of its children.

use super::{FormatError, Formatter};
use crate::markup::config::OutputFormat;
use crate::markup::component::{
    ClickEvent, Component, Content, Decoration, HeadProfile, HoverEvent, NbtSource,
    ObjectContents, Style,
};

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn node_type(component: &Component) -> &'static str {
    if component.as_text() == Some("") && !component.children.is_empty() {
        "Group"
    } else {
        component.kind()
    }
}

fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "Group" => "⧉",
        "Text" => "◦",
        "Translatable" => "†",
        "Selector" => "@",
        "Score" => "#",
        "Keybind" => "⌨",
        "Nbt" => "ƒ",
        "Object" => "▣",
        _ => "○",
    }
}

fn label(component: &Component) -> String {
    match &component.content {
        Content::Text(text) if text.is_empty() && !component.children.is_empty() => {
            match component.children.len() {
                1 => "1 child".to_string(),
                n => format!("{} children", n),
            }
        }
        Content::Text(text) => format!("{:?}", truncate(text, 30)),
        Content::Translatable { key, fallback, .. } => match fallback {
            Some(fallback) => truncate(&format!("{} or {:?}", key, fallback), 30),
            None => truncate(key, 30),
        },
        Content::Selector { pattern, .. } => truncate(pattern, 30),
        Content::Score { name, objective } => truncate(&format!("{} {}", name, objective), 30),
        Content::Keybind(key) => truncate(key, 30),
        Content::Nbt { path, source, .. } => {
            let source = match source {
                NbtSource::Block(pos) => format!("block {}", pos),
                NbtSource::Entity(selector) => format!("entity {}", selector),
                NbtSource::Storage(key) => format!("storage {}", key),
            };
            truncate(&format!("{} {}", source, path), 30)
        }
        Content::Object(ObjectContents::Sprite { atlas, sprite }) => match atlas {
            Some(atlas) => format!("sprite {} {}", atlas, sprite),
            None => format!("sprite {}", sprite),
        },
        Content::Object(ObjectContents::PlayerHead { profile, .. }) => match profile {
            HeadProfile::Id(id) => format!("head {}", id),
            HeadProfile::Name(name) => format!("head {}", truncate(name, 30)),
            HeadProfile::Texture(key) => format!("head {}", key),
        },
    }
}

fn click_name(click: &ClickEvent) -> &'static str {
    match click {
        ClickEvent::OpenUrl(_) => "open_url",
        ClickEvent::OpenFile(_) => "open_file",
        ClickEvent::RunCommand(_) => "run_command",
        ClickEvent::SuggestCommand(_) => "suggest_command",
        ClickEvent::ChangePage(_) => "change_page",
        ClickEvent::CopyToClipboard(_) => "copy_to_clipboard",
    }
}

fn hover_name(hover: &HoverEvent) -> &'static str {
    match hover {
        HoverEvent::ShowText(_) => "show_text",
        HoverEvent::ShowItem { .. } => "show_item",
        HoverEvent::ShowEntity { .. } => "show_entity",
    }
}

/// `[red bold !italic ...]`, or nothing for an empty style.
fn style_summary(style: &Style) -> String {
    if style.is_empty() {
        return String::new();
    }
    let mut parts = Vec::new();
    if let Some(color) = style.color {
        parts.push(match color.name() {
            Some(name) => name.to_string(),
            None => color.to_string(),
        });
    }
    for decoration in Decoration::ALL {
        match style.decoration(decoration) {
            Some(true) => parts.push(decoration.name().to_string()),
            Some(false) => parts.push(format!("!{}", decoration.name())),
            None => {}
        }
    }
    if let Some(font) = &style.font {
        parts.push(format!("font={}", font));
    }
    if let Some(click) = &style.click {
        parts.push(format!("click={}", click_name(click)));
    }
    if let Some(hover) = &style.hover {
        parts.push(format!("hover={}", hover_name(hover)));
    }
    if let Some(insertion) = &style.insertion {
        parts.push(format!("insert={:?}", insertion));
    }
    if let Some(shadow) = style.shadow {
        parts.push(format!("shadow={}", shadow));
    }
    format!(" [{}]", parts.join(" "))
}

fn line(component: &Component, show_styles: bool) -> String {
    let icon = get_icon(node_type(component));
    let styles = if show_styles {
        style_summary(&component.style)
    } else {
        String::new()
    };
    format!("{} {}{}", icon, label(component), styles)
}

fn tree_children(component: &Component) -> Vec<&Component> {
    let mut children = Vec::new();
    if let Content::Translatable { args, .. } = &component.content {
        children.extend(args.iter());
    }
    children.extend(component.children.iter());
    children
}

fn format_node(
    component: &Component,
    prefix: &str,
    child_index: usize,
    child_count: usize,
    show_styles: bool,
) -> String {
    let mut output = String::new();

    let is_last = child_index == child_count - 1;
    let connector = if is_last { "└─" } else { "├─" };
    output.push_str(&format!(
        "{}{} {}\n",
        prefix,
        connector,
        line(component, show_styles)
    ));

    let children = tree_children(component);
    if !children.is_empty() {
        let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
        let child_count = children.len();
        for (i, child) in children.into_iter().enumerate() {
            output.push_str(&format_node(child, &child_prefix, i, child_count, show_styles));
        }
    }

    output
}

pub fn to_treeviz_str(component: &Component) -> String {
    to_treeviz_str_with_styles(component, true)
}

pub fn to_treeviz_str_with_styles(component: &Component, show_styles: bool) -> String {
    let mut output = format!("{}\n", line(component, show_styles));
    let children = tree_children(component);
    let child_count = children.len();
    for (i, child) in children.into_iter().enumerate() {
        output.push_str(&format_node(child, "", i, child_count, show_styles));
    }
    output
}

/// Formatter implementation for treeviz format
pub struct TreevizFormatter {
    show_styles: bool,
}

impl TreevizFormatter {
    pub fn new(show_styles: bool) -> Self {
        TreevizFormatter { show_styles }
    }
}

impl Default for TreevizFormatter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Formatter for TreevizFormatter {
    fn format(&self) -> OutputFormat {
        OutputFormat::Treeviz
    }

    fn serialize(&self, component: &Component) -> Result<String, FormatError> {
        Ok(to_treeviz_str_with_styles(component, self.show_styles))
    }
}
