//! Core module for `argweave`.
//! See [documentation root](https://docs.rs/argweave/latest/argweave/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod error;
mod matcher;
mod model;
mod parser;
mod tokens;

pub use api::*;
pub use error::*;
pub use matcher::*;
pub use model::*;
pub use parser::GeneralParser;
pub use tokens::*;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

#[cfg(test)]
pub(crate) mod test {
    macro_rules! assert_contains {
        ($base:expr, $sub:expr) => {
            assert!(
                $base.contains($sub),
                "'{b}' does not contain '{s}'",
                b = $base,
                s = $sub,
            );
        };
    }

    pub(crate) use assert_contains;
}
