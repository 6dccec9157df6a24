#![forbid(unsafe_code)]

//! Text labels for the Tessera grid.
//!
//! - [`TextItem`] - a padded label that wraps itself to the width it is
//!   measured under
//! - [`wrap`] - grapheme-aware word wrapping and truncation
//!
//! # Example
//! ```
//! use tessera_layout::{Constraints, Measurable, Sides, Size};
//! use tessera_text::TextItem;
//!
//! let mut label = TextItem::new("Item 1").padding(Sides::all(1));
//! assert_eq!(label.measure(Constraints::with_width(20)), Size::new(8, 3));
//! assert_eq!(label.lines(), ["Item 1"]);
//! ```

pub mod item;
pub mod wrap;

pub use item::TextItem;
