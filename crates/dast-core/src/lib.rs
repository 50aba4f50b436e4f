//! Dast Core
//!
//! This crate provides the document model, node kinds and error
//! definitions for the dast structured-text renderer.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`Root`], [`BlockNode`], [`InlineNode`], [`DastNode`] - The tagged node families
//! - [`Mark`], [`ListStyle`], [`NodeKind`] - Closed vocabularies
//! - [`DastError`] - Error types
//!
//! # Example
//!
//! ```
//! use dast_core::{BlockNode, DastNode};
//!
//! let node = DastNode::from_json(
//!     r#"{"type":"root","children":[{"type":"thematicBreak"}]}"#,
//! ).unwrap();
//! assert!(node.is_root());
//! if let DastNode::Root(root) = node {
//!     assert_eq!(root.children, vec![BlockNode::ThematicBreak]);
//! }
//! ```

pub mod enums;
pub mod error;
pub mod node;

pub use enums::{ListStyle, Mark, NodeKind};
pub use error::{DastError, Result};
pub use node::{
    Block, BlockNode, Blockquote, Code, DastNode, Heading, InlineItem, InlineNode, ItemLink,
    Link, List, ListChild, ListItem, ListItemChild, MetaEntry, Paragraph, Root, Span,
};
