pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::storage::LocalStorage;
pub use core::{
    engine::{flip_files, FlipEngine},
    growable::GrowableReader,
    presize::PresizeReader,
};
pub use domain::model::{NumberList, ReadStrategy, RunSummary};
pub use domain::ports::{NumberReader, Storage};
pub use utils::error::{FlipError, Result};
