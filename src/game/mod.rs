// Game logic: fighters, their moves and the state machine driving them

pub mod characters;
pub mod combat;
pub mod fsm;
