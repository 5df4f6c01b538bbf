pub mod dictionary;
pub mod open_addressing;
pub mod prime;
