pub mod hashing;
pub mod string;

// Re-export all modules
pub use hashing::*;
pub use string::*;
