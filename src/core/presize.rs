use crate::core::scanner::IntScanner;
use crate::domain::model::{NumberList, ReadStrategy};
use crate::domain::ports::NumberReader;
use crate::utils::error::{FlipError, Result};
use std::io::{BufRead, Seek};

/// Two-pass reader: counts the integers, rewinds, then fills a block of
/// exactly that size.
///
/// The input must produce the same tokens on both passes.
#[derive(Debug, Clone, Copy, Default)]
pub struct PresizeReader;

impl PresizeReader {
    pub fn new() -> Self {
        Self
    }
}

impl NumberReader for PresizeReader {
    fn strategy(&self) -> ReadStrategy {
        ReadStrategy::Presize
    }

    fn read<I: BufRead + Seek>(&self, input: I) -> Result<NumberList> {
        let mut scanner = IntScanner::new(input);

        let mut count = 0usize;
        while scanner.next_int()?.is_some() {
            count += 1;
        }
        tracing::debug!("First pass counted {} integers", count);

        scanner.rewind()?;

        let mut nums = NumberList::with_capacity(count)?;
        while nums.len() < count {
            match scanner.next_int()? {
                Some(value) => {
                    nums.push_within(value);
                }
                None => {
                    return Err(FlipError::SourceChanged {
                        expected: count,
                        found: nums.len(),
                    })
                }
            }
        }

        Ok(nums)
    }
}
