// patterns.rs - Seed patterns and the built-in pattern catalogue

use crate::error::{LifeError, Result};

/// Rectangular block of cells parsed from rows of `'0'` / `'1'`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedPattern {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl SeedPattern {
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let width = match rows.first() {
            Some(first) => first.as_ref().chars().count(),
            None => return Err(LifeError::EmptyPattern),
        };
        if width == 0 {
            return Err(LifeError::EmptyPattern);
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if found != width {
                return Err(LifeError::RaggedPattern { row, expected: width, found });
            }
            for (column, ch) in line.chars().enumerate() {
                match ch {
                    '1' => cells.push(true),
                    '0' => cells.push(false),
                    found => return Err(LifeError::InvalidPatternCell { row, column, found }),
                }
            }
        }

        Ok(Self { width, height: rows.len(), cells })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_alive(&self, px: usize, py: usize) -> bool {
        self.cells[py * self.width + px]
    }
}

pub struct Pattern {
    pub name: &'static str,
    pub rows: &'static [&'static str],
}

impl Pattern {
    pub fn seed(&self) -> Result<SeedPattern> {
        SeedPattern::parse(self.rows)
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Space Filler",
        rows: &[
            "0000000000000000000011100011100000000000000000000",
            "0000000000000000000100100010010000000000000000000",
            "1111000000000000000000100010000000000000000001111",
            "1000100000000000000000100010000000000000000010001",
            "1000000001000000000000100010000000000001000000001",
            "0100100110010000000000000000000000000100110010010",
            "0000001000001000000011100011100000001000001000000",
            "0000001000001000000001000001000000001000001000000",
            "0000001000001000000001111111000000001000001000000",
            "0100100110010011000010000000100001100100110010010",
            "1000000001000110000111111111110000110001000000001",
            "1000100000000011000000000000000001100000000010001",
            "1111000000000001111111111111111111000000000001111",
            "0000000000000000101000000000001010000000000000000",
            "0000000000000000000111111111110000000000000000000",
            "0000000000000000000100000000010000000000000000000",
            "0000000000000000000011111111100000000000000000000",
            "0000000000000000000000001000000000000000000000000",
            "0000000000000000000011100011100000000000000000000",
            "0000000000000000000000100010000000000000000000000",
            "0000000000000000000000000000000000000000000000000",
            "0000000000000000000001110111000000000000000000000",
            "0000000000000000000001110111000000000000000000000",
            "0000000000000000000010110110100000000000000000000",
            "0000000000000000000011100011100000000000000000000",
            "0000000000000000000001000001000000000000000000000",
        ],
    },
    Pattern {
        name: "Block",
        rows: &["11", "11"],
    },
    Pattern {
        name: "Glider",
        rows: &["010", "001", "111"],
    },
    Pattern {
        name: "Blinker",
        rows: &["111"],
    },
    Pattern {
        name: "Toad",
        rows: &["0111", "1110"],
    },
    Pattern {
        name: "Beacon",
        rows: &["1100", "1100", "0011", "0011"],
    },
    Pattern {
        name: "Pulsar",
        rows: &[
            // Top half
            "0011100011100",
            "0000000000000",
            "1000010100001",
            "1000010100001",
            "1000010100001",
            "0011100011100",
            "0000000000000",
            // Bottom half (mirrored)
            "0011100011100",
            "1000010100001",
            "1000010100001",
            "1000010100001",
            "0000000000000",
            "0011100011100",
        ],
    },
    Pattern {
        name: "R-pentomino",
        rows: &["011", "110", "010"],
    },
    Pattern {
        name: "Gosper Glider Gun",
        rows: &[
            "000000000000000000000000100000000000",
            "000000000000000000000010100000000000",
            "000000000000110000001100000000000011",
            "000000000001000100001100000000000011",
            "110000000010000010001100000000000000",
            "110000000010001011000010100000000000",
            "000000000010000010000000100000000000",
            "000000000001000100000000000000000000",
            "000000000000110000000000000000000000",
        ],
    },
];

/// Looks up a built-in pattern by name, ignoring case.
pub fn find_pattern(name: &str) -> Result<&'static Pattern> {
    PATTERNS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| LifeError::UnknownPattern(name.to_string()))
}
