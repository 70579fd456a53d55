use log::{debug, warn};

use crate::game::constants::DIGIT_COUNT;
use crate::utils::errors::UtilsError;

/// Reads four digits written as `8474`, `8 4 7 4` or `8,4,7,4`.
///
/// # Errors
///
/// Returns an error if the string is empty, contains anything other than
/// digits `1`-`9`, spaces and commas, or does not hold exactly four digits.
pub fn parse_digits(digit_string: &str) -> Result<[u8; DIGIT_COUNT], UtilsError> {
    debug!("Parsing digit list: '{}'", digit_string);

    if digit_string.trim().is_empty() {
        warn!("Digit list is empty");
        return Err(UtilsError::EmptyDigitString);
    }

    let mut digits = Vec::with_capacity(DIGIT_COUNT);
    for c in digit_string
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
    {
        match c {
            '1'..='9' => digits.push(c as u8 - b'0'),
            _ => {
                warn!("Digit list contains invalid character '{}'", c);
                return Err(UtilsError::InvalidDigitString(digit_string.to_string()));
            }
        }
    }

    let found = digits.len();
    let digits: [u8; DIGIT_COUNT] = digits
        .try_into()
        .map_err(|_| UtilsError::WrongDigitCount {
            expected: DIGIT_COUNT,
            found,
        })?;

    debug!("Parsed digits {:?}", digits);
    Ok(digits)
}
