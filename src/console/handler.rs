use std::io;

use crate::{
    console::{
        messages::{GameMessage, PlayerInput, PROMPT},
        Console,
    },
    game::GameSession,
    models::{GameState, GameSummary},
};

fn send<C: Console>(console: &mut C, message: GameMessage<'_>) -> io::Result<()> {
    console.show(&message.to_string())
}

/// Run the turn loop until the bag is exhausted or the player quits.
///
/// Each turn refills the hand, shows it and reads words until one is accepted.
/// Rejected words are reported and the player is asked again. End of input
/// counts as quitting.
pub fn run_game<C: Console>(session: &mut GameSession, console: &mut C) -> io::Result<GameSummary> {
    send(console, GameMessage::Welcome)?;

    'game: loop {
        if session.refill() == GameState::BagExhausted {
            send(
                console,
                GameMessage::GameOver {
                    total_score: session.total_score(),
                },
            )?;
            break;
        }

        send(
            console,
            GameMessage::HandState {
                hand: session.hand(),
                bag_remaining: session.bag_remaining(),
            },
        )?;

        loop {
            let Some(line) = console.prompt_line(PROMPT)? else {
                tracing::info!("Input closed, ending session");
                session.quit();
                send(
                    console,
                    GameMessage::Farewell {
                        total_score: session.total_score(),
                    },
                )?;
                break 'game;
            };

            let word = match PlayerInput::parse(&line) {
                PlayerInput::Quit => {
                    session.quit();
                    send(
                        console,
                        GameMessage::Farewell {
                            total_score: session.total_score(),
                        },
                    )?;
                    break 'game;
                }
                PlayerInput::Word(word) => word,
            };

            match session.play_word(&word) {
                Ok(play) => {
                    send(
                        console,
                        GameMessage::Accepted {
                            play: &play,
                            total_score: session.total_score(),
                        },
                    )?;
                    continue 'game;
                }
                Err(error) if error.is_rejection() => {
                    send(console, GameMessage::Rejected { error: &error })?;
                }
                Err(error) => {
                    tracing::warn!("Unexpected error during play: {}", error);
                    send(console, GameMessage::Rejected { error: &error })?;
                    break 'game;
                }
            }
        }
    }

    let summary = session.summary();
    send(console, GameMessage::Summary(&summary))?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        console::LineConsole,
        game::TileBag,
        models::{PlayRecord, Tile},
    };
    use rand::{rngs::StdRng, SeedableRng};

    fn session_with_bag(letters: &str, hand_size: usize) -> GameSession {
        let bag: TileBag = letters.chars().map(Tile::standard).collect();
        GameSession::with_bag(bag, hand_size, StdRng::seed_from_u64(8))
    }

    /// Play a scripted game and return the summary plus everything printed
    fn play_script(session: &mut GameSession, input: &str) -> (GameSummary, String) {
        let mut console = LineConsole::new(input.as_bytes(), Vec::new());
        let summary = run_game(session, &mut console).unwrap();
        let output = String::from_utf8(console.into_writer()).unwrap();
        (summary, output)
    }

    #[test]
    fn test_quit_right_away() {
        let mut session = session_with_bag("CATDOGEXYZ", 7);
        let (summary, output) = play_script(&mut session, "quit\n");

        assert!(output.starts_with("Welcome to Scrabble Solo!\n"));
        assert!(output.contains("Your tiles:\n"));
        assert!(output.contains("Tiles left in bag: 3\n"));
        assert!(output.contains(PROMPT));
        assert!(output.contains("Thanks for playing! Total score: 0\n"));
        assert!(output.ends_with("Words played: 0\n"));

        assert_eq!(summary.total_score, 0);
        assert_eq!(session.state(), GameState::PlayerQuit);
        assert_eq!(session.hand().len(), 7);
    }

    #[test]
    fn test_quit_is_case_insensitive() {
        let mut session = session_with_bag("CATDOGE", 7);
        let (_, output) = play_script(&mut session, "QuIt\n");
        assert!(output.contains("Thanks for playing!"));
        assert_eq!(session.state(), GameState::PlayerQuit);
    }

    #[test]
    fn test_hand_is_shown_on_one_line() {
        let mut session = session_with_bag("CATDOGE", 7);
        let (_, output) = play_script(&mut session, "quit\n");

        let tiles_line = output
            .lines()
            .skip_while(|line| *line != "Your tiles:")
            .nth(1)
            .unwrap();
        assert_eq!(tiles_line.matches("(value = ").count(), 7);
        assert!(tiles_line.contains("C  (value = 3)"));
    }

    #[test]
    fn test_rejected_word_then_accepted_word() {
        let mut session = session_with_bag("CATDOGE", 7);
        let (summary, output) = play_script(&mut session, "cats\ncat\nquit\n");

        let rejected = output
            .find("Invalid word! You don't have the tiles for that. Try again.")
            .unwrap();
        let accepted = output.find("Word: CAT | Score: 5 | Total Score: 5").unwrap();
        assert!(rejected < accepted);
        assert!(output.contains("Thanks for playing! Total score: 5"));

        assert_eq!(summary.total_score, 5);
        assert_eq!(summary.words_played, 1);
        assert_eq!(session.hand().len(), 4);
    }

    #[test]
    fn test_malformed_input_is_rejected() {
        let mut session = session_with_bag("CATDOGE", 7);
        let (summary, output) = play_script(&mut session, "c4t\n\ndog\nquit\n");

        assert_eq!(
            output
                .matches("Invalid input! Use letters only. Try again.")
                .count(),
            2
        );
        assert!(output.contains("Word: DOG | Score: 5 | Total Score: 5"));
        assert_eq!(summary.total_score, 5);
    }

    #[test]
    fn test_bag_exhaustion_ends_game() {
        let mut session = session_with_bag("QI", 7);
        let (summary, output) = play_script(&mut session, "qi\n");

        assert!(output.contains("Word: QI | Score: 11 | Total Score: 11"));
        assert!(output.contains("No more tiles in the bag! Game over. Total score: 11\n"));
        assert!(output.ends_with("Words played: 1 | Best word: QI (11 points)\n"));
        assert!(!output.contains("Thanks for playing!"));

        assert_eq!(session.state(), GameState::BagExhausted);
        assert_eq!(
            summary.best_play,
            Some(PlayRecord {
                word: "QI".to_string(),
                score: 11
            })
        );
    }

    #[test]
    fn test_empty_bag_ends_game_before_any_prompt() {
        let mut session = session_with_bag("", 7);
        let (summary, output) = play_script(&mut session, "cat\n");

        assert!(!output.contains(PROMPT));
        assert!(output.contains("Game over"));
        assert_eq!(summary.words_played, 0);
    }

    #[test]
    fn test_end_of_input_quits() {
        let mut session = session_with_bag("CATDOGE", 7);
        let (summary, output) = play_script(&mut session, "cat\n");

        assert!(output.contains("Word: CAT | Score: 5 | Total Score: 5"));
        assert!(output.contains("Thanks for playing! Total score: 5"));
        assert_eq!(summary.total_score, 5);
        assert_eq!(session.state(), GameState::PlayerQuit);
    }

    #[test]
    fn test_invalid_utf8_line_is_rejected_not_fatal() {
        let mut session = session_with_bag("CATDOGE", 7);
        let mut console = LineConsole::new(&b"caf\xe9\ncat\nquit\n"[..], Vec::new());

        let summary = run_game(&mut session, &mut console).unwrap();
        let output = String::from_utf8(console.into_writer()).unwrap();

        assert_eq!(output.matches("Invalid input! Use letters only.").count(), 1);
        let rejected = output.find("Invalid input!").unwrap();
        let accepted = output.find("Word: CAT | Score: 5 | Total Score: 5").unwrap();
        assert!(rejected < accepted);
        assert_eq!(summary.total_score, 5);
        assert_eq!(session.state(), GameState::PlayerQuit);
    }

    /// Plays the first letter of the last hand shown, recording every hand line
    struct FirstTilePlayer {
        last_hand: String,
        hand_sizes: Vec<usize>,
        expect_hand: bool,
    }

    impl Console for FirstTilePlayer {
        fn prompt_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
            Ok(self.last_hand.chars().next().map(|c| c.to_string()))
        }

        fn show(&mut self, text: &str) -> io::Result<()> {
            for line in text.lines() {
                if self.expect_hand {
                    self.hand_sizes.push(line.matches("(value = ").count());
                    self.last_hand = line.to_string();
                    self.expect_hand = false;
                } else if line == "Your tiles:" {
                    self.expect_hand = true;
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_full_seeded_game_runs_to_bag_exhaustion() {
        let config = crate::config::GameConfig {
            hand_size: 7,
            seed: Some(31),
        };
        let mut session = GameSession::new(&config);
        let mut player = FirstTilePlayer {
            last_hand: String::new(),
            hand_sizes: Vec::new(),
            expect_hand: false,
        };

        let summary = run_game(&mut session, &mut player).unwrap();

        assert_eq!(session.state(), GameState::BagExhausted);
        // One single-letter word per tile
        assert_eq!(summary.words_played, 98);
        assert_eq!(player.hand_sizes.len(), 98);
        assert!(player.hand_sizes.iter().all(|&size| (1..=7).contains(&size)));
        assert_eq!(player.hand_sizes[0], 7);

        let expected_total: u32 = crate::utils::letters::TILE_DISTRIBUTION
            .iter()
            .map(|&(_, value, count)| value * count)
            .sum();
        assert_eq!(summary.total_score, expected_total);
    }
}
