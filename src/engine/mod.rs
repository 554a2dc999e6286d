// Engine modules: fixed-step timing, physics, input

pub mod game_loop;
pub mod input;
pub mod physics;
