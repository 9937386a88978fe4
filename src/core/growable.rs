use crate::core::scanner::IntScanner;
use crate::domain::model::{NumberList, ReadStrategy};
use crate::domain::ports::NumberReader;
use crate::utils::error::Result;
use crate::utils::validation::validate_positive_number;
use std::io::{BufRead, Seek};

pub const DEFAULT_INITIAL_CAPACITY: usize = 10;

/// Single-pass reader into a block that doubles whenever it is one slot
/// short of full. Needs no rewind, so any [`BufRead`] works through
/// [`read_from`](Self::read_from).
#[derive(Debug, Clone, Copy)]
pub struct GrowableReader {
    initial_capacity: usize,
}

impl GrowableReader {
    pub fn new() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
        }
    }

    pub fn with_initial_capacity(initial_capacity: usize) -> Result<Self> {
        validate_positive_number("initial_capacity", initial_capacity, 1)?;
        Ok(Self { initial_capacity })
    }

    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    pub fn read_from<I: BufRead>(&self, input: I) -> Result<NumberList> {
        let mut scanner = IntScanner::new(input);
        let mut nums = NumberList::with_capacity(self.initial_capacity)?;

        while let Some(value) = scanner.next_int()? {
            nums.push(value)?;
        }

        tracing::debug!(
            "Read {} integers, final capacity {}",
            nums.len(),
            nums.capacity()
        );
        Ok(nums)
    }
}

impl Default for GrowableReader {
    fn default() -> Self {
        Self::new()
    }
}

impl NumberReader for GrowableReader {
    fn strategy(&self) -> ReadStrategy {
        ReadStrategy::Growable
    }

    fn read<I: BufRead + Seek>(&self, input: I) -> Result<NumberList> {
        self.read_from(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::presize::PresizeReader;
    use std::io::Cursor;

    fn expected_capacity(initial: usize, n: usize) -> usize {
        let mut capacity = initial;
        while capacity < n + 1 {
            capacity *= 2;
        }
        capacity
    }

    fn numbers_text(n: usize) -> String {
        (0..n)
            .map(|i| (i as i32 * 7 - 50).to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_default_initial_capacity() {
        assert_eq!(GrowableReader::default().initial_capacity(), 10);
    }

    #[test]
    fn test_zero_initial_capacity_rejected() {
        assert!(GrowableReader::with_initial_capacity(0).is_err());
        assert!(GrowableReader::with_initial_capacity(1).is_ok());
    }

    #[test]
    fn test_no_values_lost_across_doublings() {
        let text = numbers_text(100);
        let nums = GrowableReader::new().read_from(text.as_bytes()).unwrap();
        let expected: Vec<i32> = (0..100).map(|i| i * 7 - 50).collect();
        assert_eq!(nums.as_slice(), expected.as_slice());
    }

    #[test]
    fn test_final_capacity_follows_doubling() {
        for n in [0, 1, 8, 9, 10, 19, 20, 39, 40, 41, 160] {
            let text = numbers_text(n);
            let nums = GrowableReader::new().read_from(text.as_bytes()).unwrap();
            assert_eq!(nums.len(), n);
            assert_eq!(nums.capacity(), expected_capacity(10, n), "n = {}", n);
        }
    }

    #[test]
    fn test_small_initial_capacity() {
        let reader = GrowableReader::with_initial_capacity(1).unwrap();
        let nums = reader.read_from("3 1 4 1 5".as_bytes()).unwrap();
        assert_eq!(nums.as_slice(), &[3, 1, 4, 1, 5]);
        assert_eq!(nums.capacity(), expected_capacity(1, 5));
    }

    #[test]
    fn test_matches_presize_reader() {
        let inputs = [
            "",
            "42",
            "1 2 3\n4 5\n",
            "10 20 abc 30",
            "-1 -2 +3\n\n  4x",
            "2147483647 -2147483648",
        ];
        for input in inputs {
            let grown = GrowableReader::new()
                .read(Cursor::new(input.as_bytes()))
                .unwrap();
            let presized = PresizeReader::new()
                .read(Cursor::new(input.as_bytes()))
                .unwrap();
            assert_eq!(grown.as_slice(), presized.as_slice(), "input {:?}", input);
        }
    }
}
