use clap::Parser;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the rules file.
    #[clap(default_value = "rules.txt")]
    rules: String,

    /// Seed for the dice generator, random when absent.
    #[clap(long, env = "DICEBOUT_SEED")]
    seed: Option<u64>,

    /// Number of rounds to play.
    #[clap(long, default_value_t = 5)]
    rounds: u32,
}

impl Args {
    pub fn rules(&self) -> &str {
        &self.rules
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }
}
