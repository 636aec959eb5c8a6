use anyhow::{bail, Context, Result};
use std::env;

use crate::game::DEFAULT_HAND_SIZE;

#[derive(Debug, Clone)]
pub struct Config {
    pub game: GameConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub hand_size: usize,
    /// Fixed RNG seed for reproducible games
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hand_size: DEFAULT_HAND_SIZE,
            seed: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let game = GameConfig::from_vars(env::var("HAND_SIZE").ok(), env::var("GAME_SEED").ok())?;

        Ok(Config { game })
    }
}

impl GameConfig {
    fn from_vars(hand_size: Option<String>, seed: Option<String>) -> Result<Self> {
        let hand_size = match hand_size {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .context("HAND_SIZE must be a number")?,
            None => DEFAULT_HAND_SIZE,
        };
        if hand_size == 0 {
            bail!("HAND_SIZE must be at least 1");
        }

        let seed = seed
            .map(|raw| raw.trim().parse::<u64>().context("GAME_SEED must be a number"))
            .transpose()?;

        Ok(GameConfig { hand_size, seed })
    }
}
