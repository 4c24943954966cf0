/**
 * Settings for one compilation, normally filled in from the command line.
 */
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parameters {
    // Name of this program, for the output header
    pub prog_name: String,
    // Name of the input file, or "<stdin>"
    pub in_file_name: String,
    // Minimum integer width in bits; 0 lets the program's contents decide
    pub int_bits: u32,
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters {
            prog_name: String::from(env!("CARGO_PKG_NAME")),
            in_file_name: String::from("<stdin>"),
            int_bits: 0,
        }
    }
}

/**
 * Number of bits needed to represent `value` as an unsigned integer.
 */
pub fn bits_needed(value: u64) -> u32 {
    (u64::BITS - value.leading_zeros()).max(1)
}

impl Parameters {
    /**
     * Width every integer in the generated circuit uses: wide enough for the
     * largest numeral and the largest symbol index, and never narrower than
     * what was requested.
     */
    pub fn effective_int_bits(&self, num_symbols: usize, max_numeral: u64) -> u32 {
        let max_symbol = num_symbols.saturating_sub(1) as u64;
        self.int_bits.max(bits_needed(max_symbol.max(max_numeral)))
    }
}

#[cfg(test)]
mod tests {
    use crate::config::*;

    #[test]
    fn test_bits_needed() {
        assert_eq!(bits_needed(0), 1);
        assert_eq!(bits_needed(1), 1);
        assert_eq!(bits_needed(2), 2);
        assert_eq!(bits_needed(7), 3);
        assert_eq!(bits_needed(8), 4);
        assert_eq!(bits_needed(u64::MAX), 64);
    }

    #[test]
    fn test_effective_int_bits() {
        let mut params = Parameters::default();
        assert_eq!(params.effective_int_bits(0, 0), 1);
        assert_eq!(params.effective_int_bits(5, 0), 3);
        assert_eq!(params.effective_int_bits(2, 9), 4);

        params.int_bits = 8;
        assert_eq!(params.effective_int_bits(5, 9), 8);

        params.int_bits = 2;
        assert_eq!(params.effective_int_bits(1, 100), 7);
    }
}
