use lazy_static::lazy_static;
use regex::Regex;

/// Switches every subsequent argument to positional.
pub(crate) const POSITIONAL_SEPARATOR: &str = "--";

pub(crate) const HELP_NAME: &str = "help";
pub(crate) const HELP_SHORT: char = 'h';
pub(crate) const HELP_MESSAGE: &str = "Show this help message and exit.";
pub(crate) const VERSION_NAME: &str = "version";
pub(crate) const VERSION_MESSAGE: &str = "Show the version and exit.";

lazy_static! {
    // Splits a named argument into its prefix and the remainder.
    // `--` must be tried before `-`.
    pub(crate) static ref NAMED_PREFIX_RE: Regex =
        Regex::new(r"(?s)^(--|-|/)(.*)$").expect("internal error - invalid prefix pattern");

    // IDENT(=VALUE)?
    // Only the first '=' separates; the value may contain further '=' characters.
    pub(crate) static ref NAMED_ARGUMENT_RE: Regex =
        Regex::new(r"(?s)^([A-Za-z_:][A-Za-z0-9_:-]*)(?:=(.*))?$")
            .expect("internal error - invalid named argument pattern");

    // A declared parameter name must be writable as a named argument.
    pub(crate) static ref IDENTIFIER_RE: Regex =
        Regex::new(r"^[A-Za-z_:][A-Za-z0-9_:-]*$")
            .expect("internal error - invalid identifier pattern");
}

/// Whether `short` can be written on its own as a short named argument (ex: `-x`).
///
/// Digits and `-` may only follow the first character of a name, so `-3` is malformed and `--` is the positional separator.
pub(crate) fn is_short_character(short: char) -> bool {
    short.is_ascii_alphabetic() || short == '_' || short == ':'
}
