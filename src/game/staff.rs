//! Staff geometry: the discrete pitch positions and the letter mapping.
//!
//! Vertical positions are stored as integer half-grid steps (grid row times
//! two) rather than fractional grid rows, so positions can be compared and
//! hashed exactly.

/// Pixel height of one grid row.
pub const GRID_CELL: f32 = 40.0;

/// Horizontal extent of the play area in pixels. Obstacles spawn at the
/// right edge and are discarded once fully past the left edge.
pub const PLAY_WIDTH: f32 = 960.0;

/// A discrete staff position: one of the 9 half-grid rows spanning the
/// 5-line staff plus its ledger extensions (grid rows 5.0 through 9.0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StaffLine(u8);

impl StaffLine {
    /// Lowest valid half-step index (grid row 5.0).
    pub const MIN: u8 = 10;
    /// Highest valid half-step index (grid row 9.0).
    pub const MAX: u8 = 18;

    /// Number of valid staff positions.
    pub const COUNT: usize = 9;

    const fn at(half_steps: u8) -> Self {
        Self(half_steps)
    }

    /// Build from a half-step index. Returns `None` outside the staff.
    pub fn from_half_steps(half_steps: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX)
            .contains(&half_steps)
            .then_some(Self(half_steps))
    }

    /// Build from a fractional grid row, rounding to the nearest half step.
    pub fn from_grid(row: f32) -> Option<Self> {
        let half_steps = (row * 2.0).round();
        if half_steps < 0.0 {
            return None;
        }
        Self::from_half_steps(half_steps as u8)
    }

    pub fn half_steps(self) -> u8 {
        self.0
    }

    /// Fractional grid row (5.0 ..= 9.0).
    pub fn grid_row(self) -> f32 {
        self.0 as f32 / 2.0
    }

    /// Vertical pixel position of this line's center.
    pub fn y_px(self) -> f32 {
        self.grid_row() * GRID_CELL
    }

    /// All valid positions, lowest half-step first.
    pub fn all() -> &'static [StaffLine; Self::COUNT] {
        const ALL: [StaffLine; StaffLine::COUNT] = [
            StaffLine::at(10),
            StaffLine::at(11),
            StaffLine::at(12),
            StaffLine::at(13),
            StaffLine::at(14),
            StaffLine::at(15),
            StaffLine::at(16),
            StaffLine::at(17),
            StaffLine::at(18),
        ];
        &ALL
    }

    /// The pitch letter this position sounds as.
    pub fn letter(self) -> Letter {
        match self.0 {
            10 | 17 => Letter::F,
            11 | 18 => Letter::E,
            12 => Letter::D,
            13 => Letter::C,
            14 => Letter::B,
            15 => Letter::A,
            16 => Letter::G,
            _ => unreachable!("half-step index out of staff range"),
        }
    }
}

/// A pitch letter as entered by the player. The octave is not part of the
/// input: letters with two octave-equivalent staff positions match either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    /// All letters in keyboard order.
    pub fn all() -> &'static [Letter] {
        &[
            Letter::C,
            Letter::D,
            Letter::E,
            Letter::F,
            Letter::G,
            Letter::A,
            Letter::B,
        ]
    }

    /// Map a raw character to a letter. Unmapped characters are not an
    /// error; callers ignore them.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'c' => Some(Letter::C),
            'd' => Some(Letter::D),
            'e' => Some(Letter::E),
            'f' => Some(Letter::F),
            'g' => Some(Letter::G),
            'a' => Some(Letter::A),
            'b' => Some(Letter::B),
            _ => None,
        }
    }

    /// The staff positions this letter matches. `E` and `F` have two
    /// octave-equivalent positions; the rest have one.
    pub fn lines(self) -> &'static [StaffLine] {
        const C: [StaffLine; 1] = [StaffLine::at(13)];
        const D: [StaffLine; 1] = [StaffLine::at(12)];
        const E: [StaffLine; 2] = [StaffLine::at(11), StaffLine::at(18)];
        const F: [StaffLine; 2] = [StaffLine::at(10), StaffLine::at(17)];
        const G: [StaffLine; 1] = [StaffLine::at(16)];
        const A: [StaffLine; 1] = [StaffLine::at(15)];
        const B: [StaffLine; 1] = [StaffLine::at(14)];
        match self {
            Letter::C => &C,
            Letter::D => &D,
            Letter::E => &E,
            Letter::F => &F,
            Letter::G => &G,
            Letter::A => &A,
            Letter::B => &B,
        }
    }

    /// Whether this letter sounds at the given position.
    pub fn matches(self, line: StaffLine) -> bool {
        self.lines().contains(&line)
    }

    /// The position the player moves to when pressing this letter: the one
    /// nearest `from`, ties resolved toward the lower half-step index.
    pub fn nearest_line(self, from: StaffLine) -> StaffLine {
        let lines = self.lines();
        let mut best = lines[0];
        for &line in &lines[1..] {
            let d_best = best.half_steps().abs_diff(from.half_steps());
            let d_line = line.half_steps().abs_diff(from.half_steps());
            if d_line < d_best {
                best = line;
            }
        }
        best
    }

    /// Display name for the floating note label.
    pub fn name(self) -> &'static str {
        match self {
            Letter::C => "C",
            Letter::D => "D",
            Letter::E => "E",
            Letter::F => "F",
            Letter::G => "G",
            Letter::A => "A",
            Letter::B => "B",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staff_has_nine_positions() {
        assert_eq!(StaffLine::all().len(), 9);
        for pair in StaffLine::all().windows(2) {
            assert_eq!(pair[1].half_steps(), pair[0].half_steps() + 1);
        }
    }

    #[test]
    fn from_grid_rounds_to_half_steps() {
        assert_eq!(StaffLine::from_grid(6.5), StaffLine::from_half_steps(13));
        assert_eq!(StaffLine::from_grid(6.49), StaffLine::from_half_steps(13));
        assert_eq!(StaffLine::from_grid(6.74), StaffLine::from_half_steps(13));
        assert_eq!(StaffLine::from_grid(4.0), None);
        assert_eq!(StaffLine::from_grid(9.5), None);
        assert_eq!(StaffLine::from_grid(-1.0), None);
    }

    #[test]
    fn letter_e_matches_either_octave_but_not_d() {
        let e = Letter::E;
        assert!(e.matches(StaffLine::from_grid(5.5).unwrap()));
        assert!(e.matches(StaffLine::from_grid(9.0).unwrap()));
        assert!(!e.matches(StaffLine::from_grid(6.0).unwrap()));
    }

    #[test]
    fn letter_table_matches_fixed_mapping() {
        let cases: [(Letter, &[f32]); 7] = [
            (Letter::C, &[6.5]),
            (Letter::D, &[6.0]),
            (Letter::E, &[5.5, 9.0]),
            (Letter::F, &[5.0, 8.5]),
            (Letter::G, &[8.0]),
            (Letter::A, &[7.5]),
            (Letter::B, &[7.0]),
        ];
        for (letter, rows) in cases {
            let expected: Vec<StaffLine> = rows
                .iter()
                .map(|&r| StaffLine::from_grid(r).unwrap())
                .collect();
            assert_eq!(letter.lines(), expected.as_slice(), "{letter:?}");
        }
    }

    #[test]
    fn nearest_line_prefers_closer_octave() {
        let low = StaffLine::from_grid(5.0).unwrap();
        let high = StaffLine::from_grid(9.0).unwrap();
        assert_eq!(Letter::E.nearest_line(low).grid_row(), 5.5);
        assert_eq!(Letter::E.nearest_line(high).grid_row(), 9.0);
    }

    #[test]
    fn nearest_line_from_midstaff() {
        let from = StaffLine::from_grid(7.0).unwrap();
        // E lines sit at 5.5 and 9.0: the low one is closer from 7.0.
        assert_eq!(Letter::E.nearest_line(from).grid_row(), 5.5);
        // F lines sit at 5.0 and 8.5: the high one is closer.
        assert_eq!(Letter::F.nearest_line(from).grid_row(), 8.5);
    }

    #[test]
    fn every_line_maps_back_to_its_letter() {
        for &line in StaffLine::all() {
            assert!(line.letter().matches(line));
        }
    }

    #[test]
    fn unmapped_characters_are_ignored() {
        assert_eq!(Letter::from_char('q'), None);
        assert_eq!(Letter::from_char('1'), None);
        assert_eq!(Letter::from_char('C'), Some(Letter::C));
    }
}
