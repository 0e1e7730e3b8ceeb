//! # quickmm
//!
//! A fast parser for MiniMessage-style tag markup.
//!
//! ```text
//! use quickmm::markup::deserialize;
//!
//! let component = deserialize("<gradient:#ff0000:#00ff00>Hello</gradient> world");
//! ```
//!
//! ## Testing
//!
//! Tree assertions and style-aware leaf flattening live in the
//! [testing module](markup::testing).

pub mod markup;
