//! Lexer, parser, and AST for the **shape literal notation** (`.shl`).
//!
//! This crate is intentionally dependency-free so it can be consumed by
//! editors and linters without pulling in the rasterizer.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`ast`] | `Document`, `Node`, `Prop`, `Value` |
//! | [`error`] | `ParseError` |
//! | [`lexer`] | `Lexer`, `Token`, `TokenWithPos` |
//! | [`parser`] | `parse_str` entry point |
//!
//! # Quick start
//!
//! ```rust
//! use closeness_lit::parse_str;
//!
//! let src = r#"
//!     grid { width: 200 height: 200 }
//!     circle { x: 50 y: 50 r: 12.6 }
//!     circle { x: 50 y: 50 r: 8.9 }
//! "#;
//!
//! let doc = parse_str(src).unwrap();
//! assert_eq!(doc.nodes.len(), 3);
//! assert_eq!(doc.nodes[1].prop_f64("r"), Some(12.6));
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;

pub use ast::{Document, Node, Prop, Value};
pub use error::ParseError;
pub use parser::parse_str;
