#![forbid(unsafe_code)]

//! Column grid layout.
//!
//! This crate arranges an ordered list of items into a fixed number of
//! columns:
//!
//! - [`GridArranger`] - measures every item at one column width and places
//!   them in row-major order
//! - [`Constraints`] - the bounds an item is measured under
//! - [`Measurable`] / [`Placeable`] - the two capabilities a host hands over
//!   for each item
//! - [`Arrangement`] - the immutable result of one layout pass
//!
//! # Example
//!
//! ```
//! use tessera_layout::{Constraints, GridArranger, Size};
//!
//! let grid = GridArranger::new(2);
//! let arrangement = grid
//!     .arrange_with_measurer(5, Constraints::with_width(40), |_, c| {
//!         Size::new(c.max_width, 30)
//!     })
//!     .unwrap();
//!
//! assert_eq!(arrangement.column_width(), 20);
//! assert_eq!(arrangement.placements()[4].offset(), (0, 60));
//! assert_eq!(arrangement.height, 90);
//! ```

pub mod grid;

use std::fmt;

pub use grid::{Arrangement, GridArranger, Placement};
pub use tessera_core::geometry::{Rect, Sides, Size};

/// Bounds an item is measured under.
///
/// Only `max_width` takes part in the grid computation. `max_height` is
/// carried through to each item unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Constraints {
    /// Maximum width in cells.
    pub max_width: u16,
    /// Maximum height in cells (None = unbounded).
    pub max_height: Option<u16>,
}

impl Constraints {
    /// Constraints with a width bound and no height bound.
    #[inline]
    pub const fn with_width(max_width: u16) -> Self {
        Self {
            max_width,
            max_height: None,
        }
    }

    /// Constraints bounded in both directions.
    #[inline]
    pub const fn bounded(max_width: u16, max_height: u16) -> Self {
        Self {
            max_width,
            max_height: Some(max_height),
        }
    }

    /// Copy of these constraints with `max_width` replaced.
    #[inline]
    #[must_use]
    pub const fn max_width(self, max_width: u16) -> Self {
        Self { max_width, ..self }
    }

    /// Clamp a measured size so it satisfies these constraints.
    #[inline]
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            size.width.min(self.max_width),
            match self.max_height {
                Some(max) => size.height.min(max),
                None => size.height,
            },
        )
    }
}

/// Something the host can measure under constraints.
pub trait Measurable {
    /// Measure under `constraints` and report the resulting size.
    ///
    /// Implementations may cache internal state (wrapped lines and the like),
    /// hence `&mut self`.
    fn measure(&mut self, constraints: Constraints) -> Size;
}

/// Something the host can position at an offset inside its container.
pub trait Placeable {
    /// Position the item with its top-left corner at `(x, y)`.
    fn place_at(&mut self, x: u16, y: u16);
}

/// A fixed-size item ignores its constraints.
impl Measurable for Size {
    #[inline]
    fn measure(&mut self, _constraints: Constraints) -> Size {
        *self
    }
}

impl<M: Measurable + ?Sized> Measurable for &mut M {
    #[inline]
    fn measure(&mut self, constraints: Constraints) -> Size {
        (**self).measure(constraints)
    }
}

impl<M: Measurable + ?Sized> Measurable for Box<M> {
    #[inline]
    fn measure(&mut self, constraints: Constraints) -> Size {
        (**self).measure(constraints)
    }
}

impl<P: Placeable + ?Sized> Placeable for &mut P {
    #[inline]
    fn place_at(&mut self, x: u16, y: u16) {
        (**self).place_at(x, y);
    }
}

impl<P: Placeable + ?Sized> Placeable for Box<P> {
    #[inline]
    fn place_at(&mut self, x: u16, y: u16) {
        (**self).place_at(x, y);
    }
}

/// Errors reported by the layout pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// An argument is outside the range the arrangement is defined for.
    InvalidArgument {
        name: &'static str,
        reason: &'static str,
        value: u64,
    },
    /// [`Arrangement::place`] was handed a different number of items than
    /// were arranged.
    ItemCountMismatch { expected: usize, actual: usize },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument {
                name,
                reason,
                value,
            } => write!(f, "invalid argument `{name}` = {value}: {reason}"),
            Self::ItemCountMismatch { expected, actual } => write!(
                f,
                "arrangement holds {expected} placements but {actual} items were given"
            ),
        }
    }
}

impl std::error::Error for LayoutError {}

/// Arrange `items` into `columns` columns within `constraints`.
///
/// Shorthand for `GridArranger::new(columns).arrange(items, constraints)`.
pub fn arrange<M: Measurable>(
    items: &mut [M],
    columns: u16,
    constraints: Constraints,
) -> Result<Arrangement, LayoutError> {
    GridArranger::new(columns).arrange(items, constraints)
}
