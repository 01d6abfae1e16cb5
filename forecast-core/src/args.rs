use crate::{error::ValidationError, model::RawArgs};

/// Number of tokens expected on the command line, program name included.
pub const EXPECTED_TOKENS: usize = 4;

/// Split raw command-line tokens into the three positional fields.
///
/// `tokens[0]` is the program name. Anything other than exactly
/// [`EXPECTED_TOKENS`] elements is a usage error, whatever the content.
pub fn parse_args<S: AsRef<str>>(tokens: &[S]) -> Result<RawArgs, ValidationError> {
    match tokens {
        [_, country, start, end] => Ok(RawArgs {
            country: country.as_ref().to_owned(),
            start: start.as_ref().to_owned(),
            end: end.as_ref().to_owned(),
        }),
        _ => Err(ValidationError::Usage { found: tokens.len() }),
    }
}
