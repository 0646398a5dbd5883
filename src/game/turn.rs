use {
    crate::{
        console,
        dice::{Die, Hand},
        player::Player,
        rules::Rules,
    },
    anyhow::Result,
    rand::RngCore,
    std::io::{BufRead, Write},
};

/// One player's turn: up to `throws` rolls with selective keeps, then a
/// scoring selection. Kept dice hold their value until the turn ends.
pub fn take_turn<R: BufRead, W: Write>(
    rules: &Rules,
    player: &mut Player,
    input: &mut R,
    output: &mut W,
    rng: &mut dyn RngCore,
) -> Result<()> {
    let die = Die::new(rules.sides());
    let mut hand = Hand::new(die, rules.dice());
    let mut throws_remaining = rules.throws();

    while throws_remaining > 0 {
        hand.roll(rng);
        throws_remaining -= 1;

        writeln!(output, "Current dice: {}", hand)?;
        if throws_remaining == 0 {
            break;
        }

        writeln!(output, "You have {} throws left.", throws_remaining)?;
        let indices = console::prompt_indices(
            input,
            output,
            "Enter the indices of dice to keep (separated by spaces), or press Enter to re-roll all: ",
        )?;
        hand.keep(&indices);
    }

    score(rules, player, input, output)
}

fn score<R: BufRead, W: Write>(
    rules: &Rules,
    player: &mut Player,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    writeln!(output, "Available scoring combinations:")?;
    for (number, combination) in rules.combinations().iter().enumerate() {
        writeln!(output, "{}. {}", number + 1, combination)?;
    }

    let choice = console::prompt_int(input, output, "Select a scoring combination by number: ")?;
    let combination = usize::try_from(choice)
        .ok()
        .and_then(|choice| rules.combination(choice));

    match combination {
        Some(combination) => {
            player.award(combination.points());
            writeln!(
                output,
                "{} scored {} points!",
                player.name(),
                combination.points()
            )?;
        }
        None => writeln!(output, "Invalid choice. No points scored this turn.")?,
    }

    Ok(())
}
