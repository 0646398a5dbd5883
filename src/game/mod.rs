pub mod turn;

use {
    crate::{
        player::{self, Player},
        rules::Rules,
    },
    anyhow::{anyhow, Result},
    rand::{seq::SliceRandom, RngCore},
    std::io::{BufRead, Write},
};

/// Runs a full game: shuffle seating once, play the rounds, announce the
/// winner.
pub fn play<R: BufRead, W: Write>(
    rules: &Rules,
    players: &mut [Player],
    rounds: u32,
    input: &mut R,
    output: &mut W,
    rng: &mut dyn RngCore,
) -> Result<()> {
    players.shuffle(rng);

    writeln!(output, "Order of play:")?;
    for player in players.iter() {
        writeln!(output, "{}", player.name())?;
    }

    for round in 1..=rounds {
        writeln!(output, "\nRound {}:", round)?;
        for player in players.iter_mut() {
            writeln!(output, "\n{}'s turn:", player.name())?;
            turn::take_turn(rules, player, input, output, rng)?;
        }
    }

    let winner = player::winner(players).ok_or_else(|| anyhow!("no players seated"))?;
    writeln!(
        output,
        "\nGame over! The winner is {} with {} points!",
        winner.name(),
        winner.score()
    )?;

    Ok(())
}
