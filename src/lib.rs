pub mod bank;
pub mod config;
pub mod db;
pub mod error;
pub mod server;
pub mod store;

mod utils;

pub use bank::QuestionBank;
pub use error::TriviaError;
pub use store::{MemoryStore, RecordStore};
