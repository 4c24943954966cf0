use crate::error::{Error, Result};

const LETTERS: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/**
 * Number of distinct parameter names `param_name` can produce.
 */
pub const MAX_PARAMETERS: usize = 26 * 27;

/**
 * Converts a parameter number in 0..702 to a Verilog variable name:
 * 0 => "$A", 25 => "$Z", 26 => "$AA", 701 => "$ZZ".
 */
pub fn param_name(n: usize) -> Result<String> {
    let nchars = LETTERS.len();
    let mut name = String::from("$");
    if n < nchars {
        name.push(LETTERS[n] as char);
    } else if n < MAX_PARAMETERS {
        name.push(LETTERS[n / nchars - 1] as char);
        name.push(LETTERS[n % nchars] as char);
    } else {
        return Err(Error::TooManyParameters { index: n });
    }
    Ok(name)
}
