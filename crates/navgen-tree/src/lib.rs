//! Navigation tree generation for navgen.
//!
//! Scans a documentation source directory and derives a navbar tree from its
//! folder and file layout:
//!
//! - Directories become sections, omitted when nothing below them is eligible
//! - Markdown files become pages linked under the rendered-page extension
//! - `index.md` backs its directory and never appears as a separate entry
//! - Hidden entries (leading `.` by default) are skipped entirely
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use navgen_tree::{NavOptions, NavTreeBuilder};
//!
//! let builder = NavTreeBuilder::new(NavOptions::default());
//! let navbar = builder.build(Path::new("docs"))?;
//! for item in &navbar {
//!     println!("{} -> {}", item.text, item.link);
//! }
//! ```

mod builder;
mod error;
mod item;
mod options;

pub use builder::NavTreeBuilder;
pub use error::NavError;
pub use item::NavItem;
pub use options::{LinkBase, NavOptions, ParseLinkBaseError};
