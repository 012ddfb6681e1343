//! Wrapping and column layout properties

use inkwatch_core::layout::ColumnMargins;
use inkwatch_core::{compute_columns, wrap, CanvasSize};
use proptest::prelude::*;

fn mono(px: u32) -> impl Fn(&str) -> u32 + Clone {
    move |s: &str| s.chars().count() as u32 * px
}

proptest! {
    #[test]
    fn lines_reconstitute_input(text in "\\PC{0,120}", max_width in 1u32..400, advance in 1u32..24) {
        let joined: String = wrap(&text, max_width, mono(advance)).collect();
        prop_assert_eq!(joined, text);
    }

    #[test]
    fn lines_fit_or_are_single_chars(text in "\\PC{0,120}", max_width in 1u32..400, advance in 1u32..24) {
        let width_of = mono(advance);
        for line in wrap(&text, max_width, width_of.clone()) {
            prop_assert!(!line.is_empty());
            prop_assert!(width_of(line) <= max_width || line.chars().count() == 1);
        }
    }

    #[test]
    fn lines_are_maximal(text in "[a-z ]{1,120}", max_width in 1u32..400, advance in 1u32..24) {
        let width_of = mono(advance);
        let lines: Vec<_> = wrap(&text, max_width, width_of.clone()).collect();
        // every line but the last would overflow with one more character
        for pair in lines.windows(2) {
            let next = pair[1].chars().next().unwrap();
            let mut longer = pair[0].to_string();
            longer.push(next);
            prop_assert!(width_of(&longer) > max_width);
        }
    }

    #[test]
    fn fitting_input_is_one_line(text in "\\PC{1,60}", slack in 0u32..50, advance in 1u32..24) {
        let width_of = mono(advance);
        let max_width = width_of(&text) + slack;
        let lines: Vec<_> = wrap(&text, max_width, width_of).collect();
        prop_assert_eq!(lines, vec![text.as_str()]);
    }

    #[test]
    fn columns_tile_without_overlap(count in 1usize..6, width in 200u32..2000, height in 100u32..1200) {
        let margins = ColumnMargins::default();
        let canvas = CanvasSize::new(width, height);
        let cols = compute_columns(canvas, count, &margins);

        prop_assert_eq!(cols.len(), count);
        for col in &cols {
            prop_assert!(canvas.contains(col));
            prop_assert_eq!(col.width, cols[0].width);
            prop_assert_eq!(col.y, margins.top as i32);
        }
        for pair in cols.windows(2) {
            prop_assert!(!pair[0].overlaps(&pair[1]));
            prop_assert_eq!(pair[1].x - pair[0].right(), margins.gap as i32);
        }
    }
}

#[test]
fn empty_text_has_no_lines() {
    assert_eq!(wrap("", 10, mono(5)).next(), None);
}
