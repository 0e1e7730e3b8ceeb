//! Parsing
//!
//!     The parser keeps an explicit stack of open scopes ("frames"). Root sits at the
//!     bottom and is never closed by a tag. Opening a scope pushes a frame; closing pops
//!     the frame, builds it into a single component and appends that to the new top.
//!
//!     Closing tags match by name from the top of the stack down, so `</red>` in
//!     `<red><blue>A</red>` closes both scopes, innermost first. Anything still open at
//!     end of input is closed the same way; unterminated markup is never an error.
//!
//!     Dispatch lives in [dispatch], the argument grammars of the built-in tags in
//!     [arguments].

pub mod arguments;
pub mod dispatch;
pub(crate) mod frames;
pub(crate) mod parser;

pub use dispatch::normalize_tag_name;
pub(crate) use parser::Parser;
