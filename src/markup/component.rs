//! The rich-text object model produced by the parser.
//!
//! Components are built bottom-up while scopes close and are never mutated
//! afterwards; every builder method consumes and returns the value.

pub mod color;
pub mod compact;
pub mod key;
pub mod node;
pub mod style;

pub use color::{ShadowColor, TextColor};
pub use compact::{combine, compact, compact_child, compact_sentinel};
pub use key::{BlockPos, Coordinate, Key, Uuid};
pub use node::{Component, Content, HeadProfile, NbtSource, ObjectContents};
pub use style::{ClickEvent, DataComponentValue, Decoration, Decorations, HoverEvent, Style};
