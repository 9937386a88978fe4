use crate::core::growable::GrowableReader;
use crate::core::presize::PresizeReader;
use crate::core::writer::write_reversed;
use crate::domain::model::{ReadStrategy, RunSummary};
use crate::domain::ports::{NumberReader, Storage};
use crate::utils::error::{FlipError, Result};
use std::io::{BufRead, BufWriter, Seek, Write};
use std::path::Path;

pub struct FlipEngine<R: NumberReader> {
    reader: R,
}

impl<R: NumberReader> FlipEngine<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    pub fn run<I, O>(&self, input: I, output: O) -> Result<RunSummary>
    where
        I: BufRead + Seek,
        O: Write,
    {
        let strategy = self.reader.strategy();
        tracing::info!("Reading integers ({} strategy)...", strategy);
        let nums = self.reader.read(input)?;
        tracing::info!("Read {} integers", nums.len());

        let mut output = BufWriter::new(output);
        write_reversed(&mut output, nums.as_slice())?;
        output.flush().map_err(FlipError::Write)?;
        tracing::debug!("Wrote {} lines", nums.len());

        Ok(RunSummary {
            strategy,
            count: nums.len(),
            capacity: nums.capacity(),
        })
    }
}

/// Opens `input`, then `output`, and flips one into the other.
///
/// The output is only created once the input has opened, so a bad input
/// path leaves the output path untouched.
pub fn flip_files<S: Storage>(
    storage: &S,
    strategy: ReadStrategy,
    input: &Path,
    output: &Path,
) -> Result<RunSummary> {
    tracing::debug!("Opening input {}", input.display());
    let source = storage.open_input(input)?;
    tracing::debug!("Opening output {}", output.display());
    let sink = storage.create_output(output)?;

    match strategy {
        ReadStrategy::Presize => FlipEngine::new(PresizeReader::new()).run(source, sink),
        ReadStrategy::Growable => FlipEngine::new(GrowableReader::new()).run(source, sink),
    }
}
