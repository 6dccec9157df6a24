#![forbid(unsafe_code)]

//! The demo screen: a status line, then labels in a column grid.

use tessera_core::{debug, info};
use tessera_layout::{Arrangement, Constraints, GridArranger, LayoutError, Rect, Sides};
use tessera_text::TextItem;
use tessera_text::wrap::truncate_to_width;

use crate::canvas::Canvas;
use crate::cli::Opts;

/// Labels arranged below a status-line inset.
#[derive(Debug, Clone)]
pub struct Screen {
    items: Vec<TextItem>,
    grid: GridArranger,
    inset_top: u16,
}

/// One rendered pass.
#[derive(Debug, Clone)]
pub struct Frame {
    pub canvas: Canvas,
    pub arrangement: Arrangement,
}

impl Screen {
    /// Build a screen from label texts.
    pub fn new<I, S>(labels: I, padding: Sides, columns: u16, inset_top: u16) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: labels
                .into_iter()
                .map(|text| TextItem::new(text).padding(padding))
                .collect(),
            grid: GridArranger::new(columns),
            inset_top,
        }
    }

    /// "Item 1" .. "Item N" with the configured padding, columns and inset.
    pub fn from_opts(opts: &Opts) -> Self {
        Self::new(
            (1..=opts.items).map(|n| format!("Item {n}")),
            Sides::all(opts.padding),
            opts.columns,
            opts.inset_top,
        )
    }

    #[inline]
    pub fn items(&self) -> &[TextItem] {
        &self.items
    }

    /// Lay out and draw the screen at `width` cells.
    pub fn render(&mut self, width: u16) -> Result<Frame, LayoutError> {
        let arrangement = self
            .grid
            .arrange(&mut self.items, Constraints::with_width(width))?;
        arrangement.place(&mut self.items)?;
        info!(
            width,
            height = arrangement.height,
            column_width = arrangement.column_width(),
            rows = arrangement.row_count(),
            "screen laid out"
        );

        let mut canvas = Canvas::new(width, self.inset_top.saturating_add(arrangement.height));
        self.draw_status(&mut canvas, &arrangement);
        for item in &self.items {
            self.draw_item(&mut canvas, item);
        }

        Ok(Frame {
            canvas,
            arrangement,
        })
    }

    fn draw_status(&self, canvas: &mut Canvas, arrangement: &Arrangement) {
        if self.inset_top == 0 {
            return;
        }
        let status = format!(
            "tessera-demo  width={} columns={} rows={}",
            arrangement.width,
            arrangement.columns(),
            arrangement.row_count()
        );
        let status = truncate_to_width(&status, usize::from(canvas.width()));
        let inset = Rect::new(0, 0, canvas.width(), self.inset_top);
        canvas.print_clipped(0, 0, status, inset);
    }

    fn draw_item(&self, canvas: &mut Canvas, item: &TextItem) {
        let Some(content) = item.content_rect() else {
            return;
        };
        let content = content.offset(0, self.inset_top);
        debug!(text = item.text(), x = content.x, y = content.y, "draw label");
        for (row, line) in (content.y..content.bottom()).zip(item.lines()) {
            canvas.print_clipped(content.x, row, line, content);
        }
    }
}
