use std::collections::BTreeSet;
use std::io::{BufRead, Write};

use anyhow::Result;
use colored::Colorize;
use itertools::Itertools;
use rand::seq::IndexedRandom;

use crate::console::Console;

pub const WORDS: [&str; 5] = ["python", "intern", "code", "alpha", "game"];
pub const STARTING_ATTEMPTS: u8 = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    Hit(char),
    Miss(char),
    Repeat(char),
    Invalid,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

#[derive(Clone, Debug)]
pub struct Game {
    secret: String,
    guessed: BTreeSet<char>,
    attempts_left: u8,
}

impl Game {
    pub fn new(secret: &str) -> Self {
        Self {
            secret: secret.to_lowercase(),
            guessed: BTreeSet::new(),
            attempts_left: STARTING_ATTEMPTS,
        }
    }

    pub fn random() -> Self {
        let secret = WORDS
            .choose(&mut rand::rng())
            .expect("word list is non-empty");
        Self::new(secret)
    }

    /// Feeds one raw input line to the game. Only a single ASCII letter is a
    /// real guess; everything else is rejected without touching the state.
    pub fn guess(&mut self, input: &str) -> GuessOutcome {
        let mut chars = input.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => c.to_ascii_lowercase(),
            _ => return GuessOutcome::Invalid,
        };

        if !self.guessed.insert(letter) {
            return GuessOutcome::Repeat(letter);
        }

        if self.secret.contains(letter) {
            GuessOutcome::Hit(letter)
        } else {
            self.attempts_left = self.attempts_left.saturating_sub(1);
            GuessOutcome::Miss(letter)
        }
    }

    /// Secret with unguessed letters masked, space-separated.
    pub fn masked(&self) -> String {
        self.secret
            .chars()
            .map(|c| if self.guessed.contains(&c) { c } else { '_' })
            .join(" ")
    }

    pub fn is_won(&self) -> bool {
        self.secret.chars().all(|c| self.guessed.contains(&c))
    }

    pub fn attempts_left(&self) -> u8 {
        self.attempts_left
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }
}

/// Runs the guessing loop until the word is revealed or attempts run out.
pub fn play<R: BufRead, W: Write>(
    game: &mut Game,
    console: &mut Console<R, W>,
) -> Result<Outcome> {
    loop {
        console.println(format!("\nWord: {}", game.masked()))?;
        if game.is_won() {
            console.println(format!(
                "\n{} The word was: {}",
                "You got it!".green(),
                game.secret()
            ))?;
            return Ok(Outcome::Won);
        }

        let input = console.prompt("Guess a letter: ")?;
        match game.guess(&input) {
            GuessOutcome::Invalid => {
                console.println("Please enter a single letter a-z.")?;
            }
            GuessOutcome::Repeat(letter) => {
                console.println(format!("You already tried '{letter}'."))?;
            }
            GuessOutcome::Hit(letter) => {
                console.println(format!("Nice, '{letter}' is in the word."))?;
            }
            GuessOutcome::Miss(letter) => {
                console.println(format!(
                    "No '{letter}' in the word. Attempts left: {}",
                    game.attempts_left()
                ))?;
                if game.attempts_left() == 0 {
                    console.println(format!(
                        "\n{} The word was: {}",
                        "Game over.".red(),
                        game.secret()
                    ))?;
                    return Ok(Outcome::Lost);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn play_script(secret: &str, script: &str) -> (Outcome, String) {
        colored::control::set_override(false);
        let mut console = Console::new(Cursor::new(script.as_bytes().to_vec()), vec![]);
        let mut game = Game::new(secret);
        let outcome = play(&mut game, &mut console).unwrap();
        (outcome, String::from_utf8(console.output).unwrap())
    }

    #[test]
    fn covering_every_letter_wins_with_attempts_to_spare() {
        let mut game = Game::new("code");
        for letter in ["c", "o", "d", "e"] {
            assert!(matches!(game.guess(letter), GuessOutcome::Hit(_)));
        }
        assert!(game.is_won());
        assert_eq!(game.attempts_left(), STARTING_ATTEMPTS);
    }

    #[test]
    fn six_distinct_misses_lose_the_game() {
        let mut game = Game::new("code");
        for letter in ["x", "y", "z", "q", "w", "v"] {
            assert!(matches!(game.guess(letter), GuessOutcome::Miss(_)));
        }
        assert_eq!(game.attempts_left(), 0);
        assert!(!game.is_won());
    }

    #[test]
    fn repeated_guess_never_costs_an_attempt() {
        let mut game = Game::new("code");
        game.guess("x");
        assert_eq!(game.attempts_left(), STARTING_ATTEMPTS - 1);
        assert_eq!(game.guess("x"), GuessOutcome::Repeat('x'));
        assert_eq!(game.attempts_left(), STARTING_ATTEMPTS - 1);

        game.guess("c");
        assert_eq!(game.guess("C"), GuessOutcome::Repeat('c'));
        assert_eq!(game.attempts_left(), STARTING_ATTEMPTS - 1);
    }

    #[test]
    fn invalid_input_is_rejected_without_penalty() {
        let mut game = Game::new("code");
        for input in ["", "ab", "1", "?", "c3"] {
            assert_eq!(game.guess(input), GuessOutcome::Invalid);
        }
        assert_eq!(game.attempts_left(), STARTING_ATTEMPTS);
        assert_eq!(game.masked(), "_ _ _ _");
    }

    #[test]
    fn masked_reveals_every_occurrence_of_a_guess() {
        let mut game = Game::new("alpha");
        game.guess("a");
        assert_eq!(game.masked(), "a _ _ _ a");
    }

    #[test]
    fn play_reports_victory() {
        let (outcome, output) = play_script("code", "c\no\nd\ne\n");
        assert_eq!(outcome, Outcome::Won);
        assert!(output.contains("Word: c o d e"));
        assert!(output.contains("You got it!"));
    }

    #[test]
    fn play_reveals_the_word_on_loss() {
        let (outcome, output) = play_script("code", "x\ny\nz\nq\nw\nv\n");
        assert_eq!(outcome, Outcome::Lost);
        assert!(output.contains("Attempts left: 0"));
        assert!(output.contains("Game over. The word was: code"));
    }

    #[test]
    fn play_shrugs_off_invalid_and_repeated_input() {
        let (outcome, output) = play_script("code", "ab\nc\nc\no\nd\ne\n");
        assert_eq!(outcome, Outcome::Won);
        assert!(output.contains("Please enter a single letter"));
        assert!(output.contains("You already tried 'c'."));
    }
}
