//! `argweave` is a schema-driven command line parser for Rust.
//!
//! Declare a [`Command`] of named and positional parameters, then parse the Cli against it.
//! `argweave` prioritizes the following design concerns:
//! * *Every problem in one pass*:
//! Parsing never stops at the first error.
//! Unknown parameters, missing values, and inconvertible values are all collected, so the user sees everything wrong with their invocation at once.
//! * *Typed values*:
//! Each parameter declares a [`ValueType`]; its raw strings are converted into a [`Value`] (ex: `int`, `float`, a choice, an array).
//! * *Validated schemas*:
//! Ambiguous schemas (ex: two parameters sharing a short name) are rejected with a [`ConfigError`] when the `Command` is constructed, never while parsing.
//! * *Detailed yet basic UX*:
//! The help and error output lists every parameter with its type, description, and default.
//! We do not aim to support rich display configurations, such as colour output, shell completions, etc.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/watch.rs")]
//! ```
//!
//! ```console
//! $ watch -h
//! usage: watch {files:string[]} [-h] [--version] [--silent] [-v] [-l={string}] [--interval={float}] [--mode={poll|notify}]
//!
//! Watch files for changes.
//!
//! positional parameters:
//!  {files:string[]}              The files to watch.
//!
//! optional parameters:
//!  -h, --help                    Show this help message and exit.
//!  --version                     Show the version and exit.
//!  --silent                      Do not print changes.
//!  -v, --verbose                 Print every event.
//!  -l={string}, --log={string}   The file to log into. (default: watch.log)
//!  --interval={float}            Seconds between polls. (default: 0.5)
//!  --mode={poll|notify}          (default: notify)
//!
//! $ watch --version
//! version: 0.1.0
//!
//! $ watch -v a.txt b.txt
//! silent: false
//! verbose: true
//! log: watch.log
//! interval: 0.5
//! mode: notify
//! files: [a.txt, b.txt]
//!
//! $ watch --interval=soon -x
//! Did not expect a parameter with name 'x'.
//! Invalid value for parameter 'interval': cannot convert 'soon' to float.
//!
//! usage: watch {files:string[]} [-h] [--version] [--silent] [-v] [-l={string}] [--interval={float}] [--mode={poll|notify}]
//! <truncated>
//! ```
//!
//! # Command line syntax
//! Arguments are read left to right:
//! * `--name`, `/name`: the named parameter `name`.
//! * `-n`: the named parameter with short name `n`.
//! * `--name=value`, `/name=value`, `-n=value`: the named parameter along with its value.
//! * `-abc`: the short names `a`, `b`, and `c` grouped together.
//! Grouped parameters must be flags, although the final one may still be written with a value (`-abc=value`), which is reported as an error.
//! * `--`: every following argument is positional, even if it looks named.
//! * Anything else is a positional value.
//!
//! Names start with a letter, `_`, or `:`, followed by letters, digits, `_`, `:`, or `-`.
//! An argument that looks named but breaks this rule (ex: `--3d`, `-5`) is reported as malformed.
//! Use `--` to pass such values positionally.
//!
//! # Parameters
//! Each parameter takes one of three arities, based off its [`ValueType`]:
//! * *No value*: a flag (ex: [`ValueType::flag`]), which is `true` when present.
//! * *Single value*: precisely one value, given inline (`--count=3`) or as the next argument (`--count 3`).
//! * *Multi value*: every following positional argument, up until the next named argument (ex: `--files a.txt b.txt --verbose`).
//!
//! A named parameter is required unless its type has a default ([`ValueType::with_default`]); flags default to `false`.
//!
//! Positional parameters claim the positional values (those not consumed by named parameters) in declaration order.
//! Only the last positional parameter may be multi value, in which case it claims all the remaining values.
//! Positional values left unclaimed are available in [`ParsedCommand::rest`].
//!
//! # Stages
//! [`Command::parse_args`] runs three stages, each of which is also available on its own:
//! 1. [`tokenize`] splits the arguments into [`Token`]s.
//! 2. [`Assembler::assemble`] binds the tokens to named parameters, as raw strings.
//! 3. Coercion converts the raw strings into [`Value`]s and binds the positional parameters.
//!
//! The errors of every stage are merged, in order, into a single [`Errors`] collection of [`ParseError`]s.
//!
//! ```
//! use argweave::{Command, ErrorKind, NamedParameter, ValueType};
//!
//! let command = Command::new(
//!     "program",
//!     vec![
//!         NamedParameter::new("count", ValueType::integer()).short('c'),
//!         NamedParameter::new("name", ValueType::text()),
//!     ],
//!     vec![],
//! )
//! .unwrap();
//!
//! let parsed = command.parse_args(&["--unknown", "-c=x"]);
//! assert_eq!(
//!     parsed.errors.kinds(),
//!     vec![
//!         ErrorKind::UnknownParameter,
//!         ErrorKind::ArgumentParseError,
//!         ErrorKind::MissingRequiredParameter,
//!     ]
//! );
//! ```
//!
//! # Logging
//! Enable the `tracing_debug` feature to emit `tracing` debug events from each stage.
pub use argweave_core::*;
