use {
    anyhow::{ensure, Result},
    std::fmt::{self, Display},
};

/// A named scoring category with a fixed point value. The game never checks
/// the dice against the chosen category.
#[derive(Debug, PartialEq, Clone)]
pub struct Combination {
    label: String,
    points: i32,
}

impl Combination {
    pub fn new(label: impl Into<String>, points: i32) -> Self {
        Self {
            label: label.into(),
            points,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn points(&self) -> i32 {
        self.points
    }
}

impl Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({} points)", self.label, self.points)
    }
}

/// Immutable game rules, combinations keep their file order which defines
/// the menu numbering.
#[derive(Debug, PartialEq, Clone)]
pub struct Rules {
    dice: u8,
    sides: u8,
    throws: u8,
    combinations: Vec<Combination>,
}

impl Rules {
    pub fn new(dice: u8, sides: u8, throws: u8, combinations: Vec<Combination>) -> Result<Self> {
        ensure!(dice >= 1, "numDice must be at least 1");
        ensure!(sides >= 1, "numSides must be at least 1");
        ensure!(throws >= 1, "numThrows must be at least 1");

        Ok(Self {
            dice,
            sides,
            throws,
            combinations,
        })
    }

    pub fn dice(&self) -> u8 {
        self.dice
    }

    pub fn sides(&self) -> u8 {
        self.sides
    }

    pub fn throws(&self) -> u8 {
        self.throws
    }

    pub fn combinations(&self) -> &[Combination] {
        &self.combinations
    }

    /// Looks up a combination by its 1-based menu number.
    pub fn combination(&self, choice: usize) -> Option<&Combination> {
        if (1..=self.combinations.len()).contains(&choice) {
            Some(&self.combinations[choice - 1])
        } else {
            None
        }
    }
}
