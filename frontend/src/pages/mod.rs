pub mod name_entry;
pub mod not_found;
pub mod spin_wheel;
