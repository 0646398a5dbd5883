use {
    crate::console,
    anyhow::Result,
    std::io::{BufRead, Write},
};

#[derive(Debug, PartialEq, Clone)]
pub struct Player {
    name: String,
    score: i32,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn award(&mut self, points: i32) {
        self.score += points;
    }
}

/// Prompts for a player count and a name per player. Counts below one are
/// rejected and asked again.
pub fn read_players<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Vec<Player>> {
    let count = loop {
        let count = console::prompt_int(input, output, "Enter number of players: ")?;
        if count >= 1 {
            break count;
        }
        writeln!(output, "There must be at least one player.")?;
    };

    let mut players = Vec::with_capacity(count as usize);
    for number in 1..=count {
        let name = console::prompt_line(
            input,
            output,
            &format!("Enter name for player {}: ", number),
        )?;
        players.push(Player::new(name));
    }
    Ok(players)
}

/// First player holding the highest score, ties go to seating order.
pub fn winner(players: &[Player]) -> Option<&Player> {
    let mut winner: Option<&Player> = None;
    for player in players {
        match winner {
            Some(leader) if leader.score() >= player.score() => {}
            _ => winner = Some(player),
        }
    }
    winner
}

#[cfg(test)]
mod test {
    use {super::*, std::io::Cursor};

    fn scored(name: &str, score: i32) -> Player {
        let mut player = Player::new(name);
        player.award(score);
        player
    }

    #[test]
    fn check_award_accumulates() {
        let mut player = Player::new("Alice");

        player.award(100);
        player.award(250);

        assert_eq!(player.score(), 350);
    }

    #[test]
    fn check_read_players() -> Result<()> {
        let mut input = Cursor::new("2\nAlice\nBob the Brave\n");
        let mut output = Vec::new();

        let players = read_players(&mut input, &mut output)?;

        assert_eq!(
            players,
            vec![Player::new("Alice"), Player::new("Bob the Brave")]
        );

        let output = String::from_utf8(output)?;
        assert!(output.contains("Enter number of players: "));
        assert!(output.contains("Enter name for player 1: "));
        assert!(output.contains("Enter name for player 2: "));

        Ok(())
    }

    #[test]
    fn check_read_players_rejects_bad_counts() -> Result<()> {
        let mut input = Cursor::new("zero\n0\n-3\n1\nSolo\n");
        let mut output = Vec::new();

        let players = read_players(&mut input, &mut output)?;

        assert_eq!(players, vec![Player::new("Solo")]);

        let output = String::from_utf8(output)?;
        assert!(output.contains("Please enter a number."));
        assert!(output.contains("There must be at least one player."));

        Ok(())
    }

    #[test]
    fn check_winner_highest_score() {
        let players = vec![scored("A", 100), scored("B", 350), scored("C", 200)];

        assert_eq!(winner(&players).map(|p| p.name()), Some("B"));
    }

    #[test]
    fn check_winner_tie_goes_to_seating_order() {
        let players = vec![scored("A", 200), scored("B", 350), scored("C", 350)];

        assert_eq!(winner(&players).map(|p| p.name()), Some("B"));
    }

    #[test]
    fn check_winner_single_player() {
        let players = vec![scored("Solo", 0)];

        assert_eq!(winner(&players).map(|p| p.name()), Some("Solo"));
    }

    #[test]
    fn check_winner_empty() {
        assert_eq!(winner(&[]), None);
    }
}
