//! Small formatting helpers shared by the display functions

use crate::grid::Direction;

/// Grid cell as a printable character; empty cells render as a middle dot
#[must_use]
pub fn cell_char(letter: Option<u8>) -> char {
    letter.map_or('·', char::from)
}

/// Arrow glyph for a word's direction
#[must_use]
pub const fn direction_arrow(direction: Direction) -> &'static str {
    match direction {
        Direction::Horizontal => "→",
        Direction::Vertical => "↓",
    }
}

/// Proportional bar for distribution rows
#[must_use]
pub fn count_bar(count: usize, max: usize, width: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let filled = (count * width).div_ceil(max).min(width);
    "█".repeat(filled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_char_renders_letters_and_blanks() {
        assert_eq!(cell_char(Some(b'A')), 'A');
        assert_eq!(cell_char(None), '·');
    }

    #[test]
    fn count_bar_scales_to_max() {
        assert_eq!(count_bar(10, 10, 20).chars().count(), 20);
        assert_eq!(count_bar(5, 10, 20).chars().count(), 10);
        assert_eq!(count_bar(0, 10, 20), "");
        assert_eq!(count_bar(3, 0, 20), "");
    }

    #[test]
    fn arrows_match_directions() {
        assert_eq!(direction_arrow(Direction::Horizontal), "→");
        assert_eq!(direction_arrow(Direction::Vertical), "↓");
    }
}
