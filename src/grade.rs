use std::str::FromStr;

use crate::error::{GpaError, GpaResult};

/// Letter grades of the ten point scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum Grade {
    S,
    A,
    B,
    C,
    D,
    E,
    F,
    N,
}

/// Grade point for every recognized symbol, keyed by the lower-cased form.
const GRADE_POINTS: [(char, Grade, u8); 8] = [
    ('s', Grade::S, 10),
    ('a', Grade::A, 9),
    ('b', Grade::B, 8),
    ('c', Grade::C, 7),
    ('d', Grade::D, 6),
    ('e', Grade::E, 5),
    ('f', Grade::F, 0),
    ('n', Grade::N, 0),
];

impl Grade {
    pub const ALL: [Grade; 8] = [
        Grade::S,
        Grade::A,
        Grade::B,
        Grade::C,
        Grade::D,
        Grade::E,
        Grade::F,
        Grade::N,
    ];

    pub fn points(self) -> u8 {
        GRADE_POINTS
            .iter()
            .find(|(_, grade, _)| *grade == self)
            .map(|(_, _, points)| *points)
            .unwrap_or_default()
    }
}

impl FromStr for Grade {
    type Err = GpaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let symbol = match (chars.next(), chars.next()) {
            (Some(c), None) => c.to_ascii_lowercase(),
            _ => return Err(GpaError::InvalidGrade(trimmed.to_string())),
        };

        GRADE_POINTS
            .iter()
            .find(|(key, _, _)| *key == symbol)
            .map(|(_, grade, _)| *grade)
            .ok_or_else(|| GpaError::InvalidGrade(trimmed.to_string()))
    }
}

/// Resolve a grade symbol (any case) to its grade point.
pub fn lookup(symbol: &str) -> GpaResult<u8> {
    symbol.parse::<Grade>().map(Grade::points)
}
