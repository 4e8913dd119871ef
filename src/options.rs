// src/options.rs
use clap::ValueEnum;

/// One demonstration in the tour. The variant order is the canonical
/// run order; subset selection via `--only` never reorders it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Demo {
    Hello,
    Values,
    Variables,
    Constants,
    Loops,
    Conditionals,
    Switches,
    Arrays,
}

impl Demo {
    pub const ALL: [Self; 8] = [
        Self::Hello,
        Self::Values,
        Self::Variables,
        Self::Constants,
        Self::Loops,
        Self::Conditionals,
        Self::Switches,
        Self::Arrays,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Hello => "hello",
            Self::Values => "values",
            Self::Variables => "variables",
            Self::Constants => "constants",
            Self::Loops => "loops",
            Self::Conditionals => "conditionals",
            Self::Switches => "switches",
            Self::Arrays => "arrays",
        }
    }

    /// Section header printed before the demonstration, preceded by a
    /// blank line. The first two sections carry none, and numbering
    /// starts at 3, exactly as the source program printed it.
    pub fn header(self) -> Option<&'static str> {
        match self {
            Self::Hello | Self::Values => None,
            Self::Variables => Some("CASE 3"),
            Self::Constants => Some("CASE 4 - Constant"),
            Self::Loops => Some("CASE 5 - FOR"),
            Self::Conditionals => Some("CASE 6 - IF"),
            Self::Switches => Some("CASE 7 - switch"),
            Self::Arrays => Some("CASE 8 - arrays"),
        }
    }

    pub fn about(self) -> &'static str {
        match self {
            Self::Hello => "literal greeting",
            Self::Values => "string concatenation, arithmetic, booleans",
            Self::Variables => "declaration forms and zero values",
            Self::Constants => "named and derived constants, sine",
            Self::Loops => "the four loop forms",
            Self::Conditionals => "if/else and a preceding binding",
            Self::Switches => "value, weekday, guard, and variant switches",
            Self::Arrays => "fixed-size arrays and a 2x3 grid",
        }
    }
}
