//! Formula calculator: single-letter variables, implicit multiplication,
//! shunting-yard conversion and postfix evaluation.
//!
//! ```
//! use formula_calc::{calculate, Variables};
//!
//! let variables = Variables::from([('a', 2.0), ('b', 3.0)]);
//! assert_eq!(calculate("2a + b", &variables), Ok(7.0));
//! ```

#![allow(nonstandard_style)]

pub mod calculating;
pub mod error_handling;
pub mod evaluating;
pub mod logging;
pub mod parsing;
pub mod scanning;
pub mod session;
pub mod variables;

pub use calculating::calculate;
pub use error_handling::{CalcError, Result};
pub use evaluating::evaluate;
pub use parsing::to_postfix;
pub use scanning::{normalize, normalize_and_substitute, Token, TokenKind};
pub use session::Session;
pub use variables::{Slider, Variables};
