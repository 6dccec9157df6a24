#![forbid(unsafe_code)]

//! Column grid arrangement.
//!
//! Every item gets the same width, `max_width / columns`, and is measured
//! under it. Items then fill the grid left to right, top to bottom. All rows
//! share one height: the tallest measured item across the whole list.
//!
//! ```text
//!  x = 0        x = cw       x = 2cw
//! ┌────────────┬────────────┬────────────┐ y = 0
//! │ item 0     │ item 1     │ item 2     │
//! ├────────────┼────────────┼────────────┤ y = h
//! │ item 3     │ item 4     │            │
//! └────────────┴────────────┴────────────┘
//! ```

use crate::{Constraints, LayoutError, Measurable, Placeable, Rect, Size};
use tessera_core::{debug_span, trace, warn};

/// Offset assigned to one item, relative to the container's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Position of the item in the input sequence.
    pub index: usize,
    pub x: u16,
    pub y: u16,
}

impl Placement {
    /// The `(x, y)` offset.
    #[inline]
    pub const fn offset(&self) -> (u16, u16) {
        (self.x, self.y)
    }
}

/// Result of one arrangement pass.
///
/// Produced once per layout pass and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arrangement {
    /// Container width; always the caller's `max_width`.
    pub width: u16,
    /// Container height.
    pub height: u16,
    columns: u16,
    column_width: u16,
    uniform_height: u16,
    placements: Vec<Placement>,
    sizes: Vec<Size>,
}

impl Arrangement {
    /// Placements in input order, one per item.
    #[inline]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Measured size of every item, in input order.
    #[inline]
    pub fn sizes(&self) -> &[Size] {
        &self.sizes
    }

    /// Width every item was measured under.
    #[inline]
    pub const fn column_width(&self) -> u16 {
        self.column_width
    }

    /// Height shared by every row.
    #[inline]
    pub const fn uniform_height(&self) -> u16 {
        self.uniform_height
    }

    #[inline]
    pub const fn columns(&self) -> u16 {
        self.columns
    }

    /// Number of arranged items.
    #[inline]
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Number of rows that actually hold an item.
    ///
    /// This is the tight `ceil(len / columns)`; [`Arrangement::height`] is
    /// computed differently (see [`GridArranger`]).
    pub fn row_count(&self) -> usize {
        self.len().div_ceil(usize::from(self.columns))
    }

    /// Rectangle item `index` occupies: its offset and its measured size.
    pub fn item_rect(&self, index: usize) -> Option<Rect> {
        let placement = self.placements.get(index)?;
        let size = self.sizes.get(index)?;
        Some(Rect::at(placement.x, placement.y, *size))
    }

    /// Position every item at its offset, in placement order.
    ///
    /// `items` must be the same sequence (or a parallel one) that was
    /// arranged.
    pub fn place<P: Placeable>(&self, items: &mut [P]) -> Result<(), LayoutError> {
        if items.len() != self.placements.len() {
            warn!(
                expected = self.placements.len(),
                actual = items.len(),
                "item count does not match arrangement"
            );
            return Err(LayoutError::ItemCountMismatch {
                expected: self.placements.len(),
                actual: items.len(),
            });
        }
        for placement in &self.placements {
            items[placement.index].place_at(placement.x, placement.y);
        }
        Ok(())
    }
}

/// Arranges items into a fixed number of equal-width columns.
///
/// The pass is:
///
/// 1. `column_width = max_width / columns` (floor).
/// 2. Measure each item under the caller's constraints with `max_width`
///    replaced by `column_width`.
/// 3. `uniform_height` is the tallest measured height over *all* items, or 0.
/// 4. `height = uniform_height * (len / columns + 1)`, truncating division.
/// 5. `width = max_width`.
/// 6. Walk the items with a cursor from `(0, 0)`, advancing `x` by
///    `column_width` and wrapping to the next row after every `columns`
///    items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridArranger {
    columns: u16,
}

impl GridArranger {
    /// Create an arranger with `columns` columns.
    ///
    /// Not validated here; `arrange` rejects zero columns.
    pub const fn new(columns: u16) -> Self {
        Self { columns }
    }

    #[inline]
    pub const fn columns(&self) -> u16 {
        self.columns
    }

    /// Measure and place `items`.
    pub fn arrange<M: Measurable>(
        &self,
        items: &mut [M],
        constraints: Constraints,
    ) -> Result<Arrangement, LayoutError> {
        self.arrange_with_measurer(items.len(), constraints, |index, item_constraints| {
            items[index].measure(item_constraints)
        })
    }

    /// Arrange `count` items whose sizes come from `measurer`.
    ///
    /// The measurer receives the item index and the per-column constraints,
    /// and is called exactly once per item, in order. It is not called at
    /// all when the column count is rejected.
    pub fn arrange_with_measurer<F>(
        &self,
        count: usize,
        constraints: Constraints,
        mut measurer: F,
    ) -> Result<Arrangement, LayoutError>
    where
        F: FnMut(usize, Constraints) -> Size,
    {
        let columns = self.validated_columns()?;
        let span = debug_span!(
            "grid_arrange",
            items = count,
            columns,
            max_width = constraints.max_width
        );
        let _guard = span.enter();

        let column_width = constraints.max_width / columns;
        let item_constraints = constraints.max_width(column_width);

        let sizes: Vec<Size> = (0..count)
            .map(|index| measurer(index, item_constraints))
            .collect();

        // One height for every row, taken over all items rather than per row.
        // Rows with only short items are padded to the tallest item anywhere.
        let uniform_height = sizes.iter().map(|size| size.height).max().unwrap_or(0);

        let height = total_height(uniform_height, count, columns);

        let per_row = usize::from(columns);
        let mut placements = Vec::with_capacity(count);
        let (mut x, mut y) = (0u16, 0u16);
        for index in 0..count {
            trace!(index, x, y, "place");
            placements.push(Placement { index, x, y });
            x = x.saturating_add(column_width);
            if (index + 1) % per_row == 0 {
                x = 0;
                y = y.saturating_add(uniform_height);
            }
        }

        Ok(Arrangement {
            width: constraints.max_width,
            height,
            columns,
            column_width,
            uniform_height,
            placements,
            sizes,
        })
    }

    fn validated_columns(&self) -> Result<u16, LayoutError> {
        if self.columns == 0 {
            warn!(columns = self.columns, "rejecting grid with zero columns");
            return Err(LayoutError::InvalidArgument {
                name: "columns",
                reason: "must be at least 1",
                value: 0,
            });
        }
        Ok(self.columns)
    }
}

/// `uniform_height * (count / columns + 1)`, saturating at `u16::MAX`.
///
/// NOTE: this reserves one more row than `ceil(count / columns)` whenever the
/// count is an exact multiple of the column count, and always reserves at
/// least one row. Unclear whether that is intended bottom padding or an
/// off-by-one; kept as is until someone decides.
fn total_height(uniform_height: u16, count: usize, columns: u16) -> u16 {
    let rows = (count / usize::from(columns)) as u64 + 1;
    let height = u64::from(uniform_height).saturating_mul(rows);
    u16::try_from(height).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn uniform_items(count: usize, size: Size) -> Vec<Size> {
        vec![size; count]
    }

    fn offsets(arrangement: &Arrangement) -> Vec<(u16, u16)> {
        arrangement
            .placements()
            .iter()
            .map(Placement::offset)
            .collect()
    }

    #[test]
    fn five_items_two_columns() {
        let constraints = Constraints::with_width(100);
        let arrangement = GridArranger::new(2)
            .arrange_with_measurer(5, constraints, |_, c| Size::new(c.max_width, 30))
            .unwrap();

        assert_eq!(arrangement.column_width(), 50);
        assert_eq!(
            offsets(&arrangement),
            vec![(0, 0), (50, 0), (0, 30), (50, 30), (0, 60)]
        );
        assert_eq!(arrangement.uniform_height(), 30);
        assert_eq!(arrangement.height, 90);
        assert_eq!(arrangement.width, 100);
    }

    #[test]
    fn empty_input() {
        let mut items: Vec<Size> = Vec::new();
        let arrangement = GridArranger::new(2)
            .arrange(&mut items, Constraints::with_width(80))
            .unwrap();
        assert!(arrangement.is_empty());
        assert_eq!(arrangement.uniform_height(), 0);
        assert_eq!(arrangement.height, 0);
        assert_eq!(arrangement.width, 80);
        assert_eq!(arrangement.row_count(), 0);
    }

    #[test]
    fn zero_columns_rejected_before_measuring() {
        let calls = Cell::new(0);
        let result =
            GridArranger::new(0).arrange_with_measurer(3, Constraints::with_width(10), |_, _| {
                calls.set(calls.get() + 1);
                Size::new(1, 1)
            });
        assert_eq!(
            result,
            Err(LayoutError::InvalidArgument {
                name: "columns",
                reason: "must be at least 1",
                value: 0,
            })
        );
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn exact_multiple_reserves_extra_row() {
        let mut items = uniform_items(4, Size::new(5, 10));
        let arrangement = GridArranger::new(2)
            .arrange(&mut items, Constraints::with_width(20))
            .unwrap();
        assert_eq!(arrangement.height, 30);
        assert_eq!(arrangement.row_count(), 2);
    }

    #[test]
    fn uniform_height_is_global_max() {
        // The tall item sits in the last row; the first row still uses its height.
        let mut items = vec![Size::new(5, 1), Size::new(5, 2), Size::new(5, 7)];
        let arrangement = GridArranger::new(2)
            .arrange(&mut items, Constraints::with_width(20))
            .unwrap();
        assert_eq!(arrangement.uniform_height(), 7);
        assert_eq!(offsets(&arrangement), vec![(0, 0), (10, 0), (0, 7)]);
        assert_eq!(arrangement.height, 14);
    }

    #[test]
    fn column_width_floors() {
        let mut items = uniform_items(3, Size::new(1, 1));
        let arrangement = GridArranger::new(3)
            .arrange(&mut items, Constraints::with_width(10))
            .unwrap();
        assert_eq!(arrangement.column_width(), 3);
        assert_eq!(offsets(&arrangement), vec![(0, 0), (3, 0), (6, 0)]);
        // Width is not rounded down to a multiple of the column width.
        assert_eq!(arrangement.width, 10);
    }

    #[test]
    fn measurer_sees_column_width_and_height_bound() {
        let mut seen = Vec::new();
        GridArranger::new(4)
            .arrange_with_measurer(2, Constraints::bounded(41, 9), |index, c| {
                seen.push((index, c));
                Size::ZERO
            })
            .unwrap();
        assert_eq!(
            seen,
            vec![
                (0, Constraints::bounded(10, 9)),
                (1, Constraints::bounded(10, 9)),
            ]
        );
    }

    #[test]
    fn single_column_stacks() {
        let mut items = uniform_items(3, Size::new(4, 2));
        let arrangement = GridArranger::new(1)
            .arrange(&mut items, Constraints::with_width(4))
            .unwrap();
        assert_eq!(offsets(&arrangement), vec![(0, 0), (0, 2), (0, 4)]);
        assert_eq!(arrangement.height, 8);
    }

    #[test]
    fn more_columns_than_width() {
        let mut items = uniform_items(3, Size::new(0, 1));
        let arrangement = GridArranger::new(8)
            .arrange(&mut items, Constraints::with_width(5))
            .unwrap();
        assert_eq!(arrangement.column_width(), 0);
        assert!(arrangement.placements().iter().all(|p| p.x == 0 && p.y == 0));
    }

    #[test]
    fn height_saturates() {
        let mut items = uniform_items(10, Size::new(1, u16::MAX / 2));
        let arrangement = GridArranger::new(1)
            .arrange(&mut items, Constraints::with_width(1))
            .unwrap();
        assert_eq!(arrangement.height, u16::MAX);
    }

    #[test]
    fn item_rect_combines_offset_and_size() {
        let mut items = vec![Size::new(3, 1), Size::new(6, 2)];
        let arrangement = GridArranger::new(2)
            .arrange(&mut items, Constraints::with_width(20))
            .unwrap();
        assert_eq!(arrangement.item_rect(1), Some(Rect::new(10, 0, 6, 2)));
        assert_eq!(arrangement.item_rect(2), None);
    }

    #[derive(Default)]
    struct Recorder {
        at: Option<(u16, u16)>,
    }

    impl Placeable for Recorder {
        fn place_at(&mut self, x: u16, y: u16) {
            self.at = Some((x, y));
        }
    }

    #[test]
    fn place_forwards_offsets() {
        let arrangement = GridArranger::new(2)
            .arrange_with_measurer(3, Constraints::with_width(10), |_, _| Size::new(5, 4))
            .unwrap();
        let mut targets: Vec<Recorder> = (0..3).map(|_| Recorder::default()).collect();
        arrangement.place(&mut targets).unwrap();
        let placed: Vec<_> = targets.iter().map(|t| t.at).collect();
        assert_eq!(placed, vec![Some((0, 0)), Some((5, 0)), Some((0, 4))]);
    }

    #[test]
    fn place_rejects_wrong_count() {
        let arrangement = GridArranger::new(2)
            .arrange_with_measurer(3, Constraints::with_width(10), |_, _| Size::new(5, 4))
            .unwrap();
        let mut targets: Vec<Recorder> = (0..2).map(|_| Recorder::default()).collect();
        assert_eq!(
            arrangement.place(&mut targets),
            Err(LayoutError::ItemCountMismatch {
                expected: 3,
                actual: 2
            })
        );
        assert!(targets.iter().all(|t| t.at.is_none()));
    }
}
