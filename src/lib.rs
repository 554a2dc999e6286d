// Per-character state machine and attack resolution for a 2-player brawler

pub mod core;
pub mod engine;
pub mod game;
