use crate::domain::model::{NumberList, ReadStrategy};
use crate::utils::error::Result;
use std::io::{BufRead, Seek, Write};
use std::path::Path;

/// Opens the streams a run reads from and writes to.
pub trait Storage {
    type Input: BufRead + Seek;
    type Output: Write;

    fn open_input(&self, path: &Path) -> Result<Self::Input>;
    fn create_output(&self, path: &Path) -> Result<Self::Output>;
}

/// Builds a [`NumberList`] from the integers at the front of `input`.
///
/// Scanning stops at end of stream or at the first token that is not an
/// integer; neither case is an error.
pub trait NumberReader {
    fn strategy(&self) -> ReadStrategy;
    fn read<I: BufRead + Seek>(&self, input: I) -> Result<NumberList>;
}
