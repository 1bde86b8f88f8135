pub mod player;
pub mod team;

pub use player::{Player, PlayerValidator, Skill};
pub use team::Team;
