use crate::utils::error::{FlipError, Result};
use std::io::Write;

/// Writes `nums` last-to-first, one decimal integer per line.
pub fn write_reversed<W: Write>(output: &mut W, nums: &[i32]) -> Result<()> {
    for value in nums.iter().rev() {
        writeln!(output, "{}", value).map_err(FlipError::Write)?;
    }
    Ok(())
}
