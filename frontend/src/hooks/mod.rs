pub mod use_spin_engine;
pub mod validation;

pub use use_spin_engine::*;
