#![forbid(unsafe_code)]

//! Rendered output of the demo screen.
//!
//! ```sh
//! cargo test -p tessera-demo --test screen_render
//! ```

use proptest::prelude::*;
use tessera_demo::cli::Opts;
use tessera_demo::screen::Screen;

fn render(opts: &Opts, width: u16) -> Vec<String> {
    Screen::from_opts(opts).render(width).unwrap().canvas.lines()
}

#[test]
fn default_screen_at_forty_columns() {
    let lines = render(&Opts::default(), 40);
    let gap = " ".repeat(14);
    let expected = vec![
        "tessera-demo  width=40 columns=2 rows=3".to_string(),
        String::new(),
        format!(" Item 1{gap}Item 2"),
        String::new(),
        String::new(),
        format!(" Item 3{gap}Item 4"),
        String::new(),
        String::new(),
        " Item 5".to_string(),
        String::new(),
    ];
    assert_eq!(lines, expected);
}

#[test]
fn narrow_screen_wraps_labels() {
    let opts = Opts {
        items: 2,
        ..Opts::default()
    };
    // Column width 6 leaves 4 cells per label: "Item" / "1".
    let lines = render(&opts, 12);
    assert_eq!(lines[0], "tessera-demo");
    assert_eq!(lines[2], " Item  Item");
    assert_eq!(lines[3], " 1     2");
    // Uniform height 4, two labels in two columns: 4 * (2 / 2 + 1) rows.
    assert_eq!(lines.len(), 1 + 8);
}

#[test]
fn three_columns_no_padding_no_inset() {
    let opts = Opts {
        columns: 3,
        padding: 0,
        inset_top: 0,
        items: 4,
        width: None,
    };
    let lines = render(&opts, 30);
    assert_eq!(lines[0], format!("Item 1{0}Item 2{0}Item 3", " ".repeat(4)));
    assert_eq!(lines[1], "Item 4");
    assert_eq!(lines.len(), 2);
}

proptest! {
    #[test]
    fn every_label_is_drawn_when_it_fits(
        items in 0u16..=12,
        columns in 1u16..=4,
    ) {
        let opts = Opts { items, columns, ..Opts::default() };
        let text = render(&opts, 120).join("\n");
        for n in 1..=items {
            let label = format!("Item {n}");
            prop_assert!(text.contains(&label), "{label} missing");
        }
    }
}
