//! Agent styles.
//!
//! Every cell of the grid holds exactly one [`Style`].  The two occupied
//! variants are the brace-placement camps; `Empty` marks a vacancy.

use std::fmt;

/// What a grid cell holds.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Style {
    /// Opens blocks at the end of the line.
    Endline,
    /// Opens blocks on a line of their own.
    Newline,
    #[default]
    Empty,
}

impl Style {
    /// The two agent styles, in placement order.
    pub const AGENTS: [Style; 2] = [Style::Endline, Style::Newline];

    #[inline]
    pub fn is_occupied(self) -> bool {
        self != Style::Empty
    }

    /// `true` when `other` is an agent of a different style.
    ///
    /// Empty cells are never enemies, and an empty subject has no enemies.
    #[inline]
    pub fn is_enemy_of(self, other: Style) -> bool {
        self.is_occupied() && other.is_occupied() && self != other
    }

    /// `true` when `other` is an agent of the same style.
    #[inline]
    pub fn is_friend_of(self, other: Style) -> bool {
        self.is_occupied() && self == other
    }

    /// Single-character glyph used by the text renderer.
    pub fn glyph(self) -> char {
        match self {
            Style::Endline => 'e',
            Style::Newline => 'n',
            Style::Empty   => '.',
        }
    }

    /// Inverse of [`glyph`][Self::glyph].
    pub fn from_glyph(c: char) -> Option<Style> {
        match c {
            'e' => Some(Style::Endline),
            'n' => Some(Style::Newline),
            '.' => Some(Style::Empty),
            _   => None,
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Style::Endline => "endline",
            Style::Newline => "newline",
            Style::Empty   => "empty",
        };
        f.write_str(s)
    }
}
