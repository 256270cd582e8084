pub mod hero;
pub mod hero_power;
pub mod power;
pub mod strength;

pub use strength::Strength;
