//! Plain-text flattening.
//!
//! Dynamic content is shown by what identifies it: keybinds by their key,
//! translations by their fallback (or key when there is none), selectors by
//! their pattern, scores by their holder and nbt reads by their path.
//! Objects have no text form.

use super::{FormatError, Formatter};
use crate::markup::config::OutputFormat;
use crate::markup::component::{Component, Content};

pub fn to_plain_str(component: &Component) -> String {
    let mut output = String::new();
    write_plain(component, &mut output);
    output
}

fn write_plain(component: &Component, output: &mut String) {
    match &component.content {
        Content::Text(text) => output.push_str(text),
        Content::Translatable { key, fallback, .. } => {
            output.push_str(fallback.as_deref().unwrap_or(key))
        }
        Content::Selector { pattern, .. } => output.push_str(pattern),
        Content::Score { name, .. } => output.push_str(name),
        Content::Keybind(key) => output.push_str(key),
        Content::Nbt { path, .. } => output.push_str(path),
        Content::Object(_) => {}
    }
    for child in &component.children {
        write_plain(child, output);
    }
}

pub struct PlainFormatter;

impl Formatter for PlainFormatter {
    fn format(&self) -> OutputFormat {
        OutputFormat::Plain
    }

    fn serialize(&self, component: &Component) -> Result<String, FormatError> {
        Ok(to_plain_str(component))
    }
}
