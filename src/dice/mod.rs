use {
    colored::Colorize,
    joinery::{separators::Space, JoinableIterator},
    rand::{Rng, RngCore},
    std::fmt::{self, Display},
};

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Die {
    sides: u8,
}

impl Die {
    pub fn new(sides: u8) -> Self {
        Self { sides }
    }

    pub fn sides(&self) -> u8 {
        self.sides
    }

    pub fn roll(&self, rng: &mut dyn RngCore) -> u8 {
        rng.gen_range(1..=self.sides)
    }
}

impl Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "d{}", self.sides)
    }
}

/// The dice on the table for one turn. Kept positions hold their value
/// across re-rolls until the turn ends.
#[derive(Debug, PartialEq, Clone)]
pub struct Hand {
    die: Die,
    values: Vec<u8>,
    kept: Vec<bool>,
}

impl Hand {
    pub fn new(die: Die, count: u8) -> Self {
        Self {
            die,
            values: vec![0; count as usize],
            kept: vec![false; count as usize],
        }
    }

    pub fn values(&self) -> &[u8] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Rolls every die not marked as kept.
    pub fn roll(&mut self, rng: &mut dyn RngCore) {
        let die = self.die;
        for (value, kept) in self.values.iter_mut().zip(self.kept.iter()) {
            if !*kept {
                *value = die.roll(rng);
            }
        }
    }

    /// Replaces the kept set with the given 1-based indices, anything out of
    /// range is silently dropped.
    pub fn keep(&mut self, indices: &[usize]) {
        for kept in self.kept.iter_mut() {
            *kept = false;
        }
        for index in indices {
            if (1..=self.len()).contains(index) {
                self.kept[index - 1] = true;
            }
        }
    }

    fn text(&self) -> String {
        self.values
            .iter()
            .zip(self.kept.iter())
            .enumerate()
            .map(|(i, (value, kept))| {
                let cell = format!("[{}:{}]", i + 1, value);
                if *kept {
                    cell.green().to_string()
                } else {
                    cell.normal().to_string()
                }
            })
            .join_with(Space)
            .to_string()
    }
}

impl Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}
