pub mod engine;
pub mod growable;
pub mod presize;
pub mod scanner;
pub mod writer;

pub use crate::domain::model::{NumberList, ReadStrategy, RunSummary};
pub use crate::domain::ports::{NumberReader, Storage};
pub use crate::utils::error::Result;
