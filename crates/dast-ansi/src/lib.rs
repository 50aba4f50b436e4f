//! Dast ANSI
//!
//! Terminal backend for dast presentation trees.
//!
//! # Overview
//!
//! - [`codes`] - ANSI escape code constants
//! - [`color`] - Style colour parsing
//! - [`style`] - Terminal styles built from document text styles
//! - [`utils`] - Visible text and display width
//! - [`sanitize`] - Safe terminal output
//! - [`terminal`] - [`TerminalRenderer`], which lays a tree out as lines
//!
//! # Example
//!
//! ```
//! use dast_ansi::TerminalRenderer;
//! use dast_core::{BlockNode, Paragraph, Root};
//! use dast_render::StructuredText;
//!
//! let root = Root::new(vec![BlockNode::Paragraph(Paragraph::text("Hello"))]);
//! let tree = StructuredText::new().render_root(&root);
//!
//! assert_eq!(TerminalRenderer::plain(80).render(&tree), "Hello");
//! ```

pub mod codes;
pub mod color;
pub mod sanitize;
pub mod style;
pub mod terminal;
pub mod utils;

pub use color::{hex2rgb, parse_color, parse_rgb};
pub use sanitize::{is_safe_url, sanitize_for_terminal};
pub use style::Style;
pub use terminal::{TerminalRenderer, DEFAULT_WIDTH};
pub use utils::{visible, visible_length};
