//! quickmm markup
//!
//!     Markup is plain text interleaved with tags: `<red>Hello <b>world</b></red>`. Tags
//!     carry colon separated arguments (`<click:run_command:'/spawn'>`), may be closed
//!     explicitly, implicitly by an outer closing tag, or not at all, and unknown or
//!     malformed tags are kept as literal text. Parsing never fails.
//!
//!     The pipeline runs leaves first:
//!
//!         source -> lexing (text runs, escapes, tag tokens)
//!                -> parsing (dispatch onto a stack of open scopes)
//!                -> component tree
//!
//!     Color scopes (`<rainbow>`, `<gradient>`, `<pride>`) recolor their finished subtree
//!     through the [color] engine when they close.
//!
//!     Entry points are [deserialize] for the built-in tags and [MarkupParser] when custom
//!     tags, a locale or a non-default [config] are needed. Output can be inspected with
//!     the [formats] and asserted on in tests with [testing].

pub mod color;
pub mod component;
pub mod config;
pub mod engine;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod resolver;
pub mod testing;

pub use component::{compact, Component, Style, TextColor};
pub use engine::{deserialize, deserialize_with, MarkupParser, MarkupParserBuilder};
pub use resolver::{Tag, TagContext, TagResolver};
