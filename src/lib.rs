//! Callback-driven command-line option parsing.
//!
//! This crate is intentionally small: callers register each option with an
//! optional default and a callback, then run a single parse pass over the
//! argument vector. Every registered callback fires in registration order,
//! with the supplied value or the default, whether or not the user typed
//! the flag. Flags the caller never registered stop the pass, either as a
//! [`ParseError`] or through a caller-installed unknown-flag hook.
//!
//! Matching is exact, with one abbreviation: a single-character token
//! satisfies any registered name sharing its first letter, so `-v` works
//! for `version` without an alias table. When two registered options share
//! a first letter, the earlier registration wins; this is a documented
//! limitation, not an error.
//!
//! Normalization strips leading dashes but keeps a per-token marker bit
//! (see [`Token`]), so plain values are never reported as unknown flags. A
//! negative number passed as text is still flag-shaped; supply it as a
//! pre-parsed [`Value::Int`] to sidestep the ambiguity.

mod error;
mod matcher;
mod parser;
mod token;
mod value;

pub use error::ParseError;
pub use parser::OptParser;
pub use token::{Token, normalize};
pub use value::Value;
