use {
    crate::rules::{Combination, Rules},
    anyhow::{Context, Result},
    pest::Parser,
    pest_derive::Parser,
    std::{fs, path::Path},
};

#[derive(Parser)]
#[grammar = "parse/rules.pest"]
pub struct RulesParser {}

impl RulesParser {
    pub fn load(path: impl AsRef<Path>) -> Result<Rules> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to open rules file {}", path.display()))?;

        Self::rules(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Parses the rules file content. Directives are matched by whole key
    /// token, repeated directives last wins, every other line is a scoring
    /// combination. Lines fitting neither form fail the parse.
    pub fn rules(s: &str) -> Result<Rules> {
        let mut file = RulesParser::parse(Rule::file, s)?;

        let mut dice = 0;
        let mut sides = 0;
        let mut throws = 0;
        let mut combinations = Vec::new();

        for record in file.next().unwrap().into_inner() {
            match record.as_rule() {
                Rule::directive => {
                    let mut parts = record.into_inner();
                    let key = parts.next().unwrap().as_str();
                    let value: u8 = parts
                        .next()
                        .unwrap()
                        .as_str()
                        .parse()
                        .with_context(|| format!("bad value for {}", key))?;
                    match key {
                        "numDice" => dice = value,
                        "numSides" => sides = value,
                        "numThrows" => throws = value,
                        _ => unreachable!(),
                    }
                }
                Rule::combination => {
                    let mut parts = record.into_inner();
                    let label = parts.next().unwrap().as_str();
                    let points = parts
                        .next()
                        .unwrap()
                        .as_str()
                        .parse()
                        .with_context(|| format!("bad points for {}", label))?;
                    combinations.push(Combination::new(label, points));
                }
                Rule::EOI => {}
                _ => unreachable!(),
            }
        }

        Rules::new(dice, sides, throws, combinations)
    }
}
