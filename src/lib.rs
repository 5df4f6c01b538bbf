pub mod cs;
pub mod error;

pub use cs::hashing::dictionary::Dictionary;
pub use cs::hashing::open_addressing::{HashedDictionary, HashedDictionaryBuilder};
pub use cs::{hashing, string};
pub use error::{Error, Result};
