//! Builds evaluable expression trees from flat token sequences and
//! evaluates or partially folds them against a variable namespace.
//!
//! The tokenizer and the concrete operator set live outside this crate: the
//! input is an ordered list of [`Token`]s whose operators implement
//! [`Operator`], and the output is a [`Node`] tree exposing [`Node::eval`],
//! [`Node::simplify`] and [`Node::used_variables`].

pub mod builder;
pub mod builtins;
pub mod node;
pub mod token;
pub mod value;

pub use builder::{build, BuildError};
pub use node::{EvalError, Node, Operation};
pub use token::{Operator, Token};
pub use value::{Namespace, Value};
