use crate::constant::*;
use crate::error::{Errors, TokenizeError};
use crate::tokens::Token;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The result of tokenizing a command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenized {
    /// The tokens, in argv order.
    pub tokens: Vec<Token>,
    /// Every malformed argument, in argv order.
    pub errors: Errors<TokenizeError>,
}

/// Convert raw argument strings into tokens.
///
/// Tokenizing never fails as a whole: a malformed argument is reported in [`Tokenized::errors`] and dropped from the tokens.
///
/// ### Example
/// ```
/// # use argweave_core as argweave;
/// use argweave::{tokenize, Token};
///
/// let tokenized = tokenize(&["-ab=1", "--", "-c"]);
///
/// assert!(!tokenized.errors.has_errors());
/// assert_eq!(tokenized.tokens.len(), 3);
/// assert_eq!(tokenized.tokens[2], Token::Positional("-c".to_string()));
/// ```
pub fn tokenize(args: &[&str]) -> Tokenized {
    let mut tokenizer = Tokenizer::default();

    for arg in args {
        tokenizer.feed(arg);
    }

    tokenizer.close()
}

#[derive(Debug, Default)]
struct Tokenizer {
    only_positional: bool,
    tokens: Vec<Token>,
    errors: Errors<TokenizeError>,
}

impl Tokenizer {
    fn feed(&mut self, arg: &str) {
        if self.only_positional {
            self.tokens.push(Token::positional(arg));
            return;
        }

        if arg == POSITIONAL_SEPARATOR {
            self.only_positional = true;
            return;
        }

        // Named arguments come in the forms:
        //  --name
        //  --name=..
        //  -n
        //  -n=..
        //  -abc
        //  -abc=..
        //  /name
        //  /name=..
        let (prefix, rest) = match NAMED_PREFIX_RE.captures(arg) {
            Some(captures) => match (captures.get(1), captures.get(2)) {
                (Some(prefix), Some(rest)) => (prefix.as_str(), rest.as_str()),
                _ => unreachable!("internal error - prefix pattern always captures both groups"),
            },
            None => {
                self.tokens.push(Token::positional(arg));
                return;
            }
        };

        let (name, value) = match NAMED_ARGUMENT_RE.captures(rest) {
            Some(captures) => match captures.get(1) {
                Some(name) => (name.as_str(), captures.get(2).map(|v| v.as_str())),
                None => unreachable!("internal error - named pattern always captures the name"),
            },
            None => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Malformed argument '{arg}'.");
                }

                self.errors.push(TokenizeError::MalformedArgument {
                    argument: arg.to_string(),
                });
                return;
            }
        };

        let is_short = prefix == "-";
        let length = name.chars().count();

        if is_short && length > 1 {
            // '-abc=x' is read as '-a -b -c=x'.
            // Whether 'a' or 'b' may take values is left to the assembler.
            for (index, single) in name.chars().enumerate() {
                let value = if index + 1 == length { value } else { None };
                self.tokens.push(Token::short(single, true, value));
            }
        } else if is_short {
            match name.chars().next() {
                Some(single) => self.tokens.push(Token::short(single, false, value)),
                None => unreachable!("internal error - named pattern requires a first character"),
            }
        } else {
            self.tokens.push(Token::long(name, value));
        }
    }

    fn close(self) -> Tokenized {
        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Tokenized {} tokens with {} errors.",
                self.tokens.len(),
                self.errors.len()
            );
        }

        Tokenized {
            tokens: self.tokens,
            errors: self.errors,
        }
    }
}
