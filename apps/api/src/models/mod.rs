pub mod matching;
pub mod user;
