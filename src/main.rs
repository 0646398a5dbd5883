mod cli;
mod console;
mod dice;
mod game;
mod mock;
mod parse;
mod player;
mod rules;

use {
    crate::{cli::Args, parse::RulesParser, player::read_players},
    anyhow::Result,
    clap::Parser,
    rand::{rngs::StdRng, thread_rng, RngCore, SeedableRng},
    std::io::{stdin, stdout},
};

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {:#}", error);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let rules = RulesParser::load(args.rules())?;

    let mut rng: Box<dyn RngCore> = match args.seed() {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(thread_rng()),
    };

    let stdin = stdin();
    let mut input = stdin.lock();
    let mut output = stdout();

    let mut players = read_players(&mut input, &mut output)?;
    game::play(
        &rules,
        &mut players,
        args.rounds(),
        &mut input,
        &mut output,
        &mut rng,
    )
}
