// Attack data and resolution
//
// - `moves`: immutable move definitions, per-character movesets and the catalog
// - `resolver`: picks the concrete move for an attack press and tracks its phase

pub mod moves;
pub mod resolver;

pub use moves::{AttackType, Direction, Guard, MoveCatalog, MoveDefinition, MoveFlags, Moveset};
pub use resolver::{AttackPhase, AttackResolver, Stance};
