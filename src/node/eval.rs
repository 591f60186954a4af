use thiserror::Error;

use super::Node;
use crate::builtins;
use crate::value::{Namespace, Value};

/// A failure during full evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A variable used by the tree has no binding, builtin or caller-made.
    #[error("variable '{0}' is not bound")]
    MissingVariable(String),
}

/// Evaluates the whole tree against the widened namespace.
///
/// Every used variable is validated once at the root, before descending.
pub(super) fn eval(node: &Node, namespace: &Namespace) -> Result<Value, EvalError> {
    let namespace = builtins::with_defaults(namespace);

    for name in node.used_variables().iter() {
        if !namespace.contains_key(name) {
            return Err(EvalError::MissingVariable(name.clone()));
        }
    }

    eval_inner(node, &namespace)
}

fn eval_inner(node: &Node, namespace: &Namespace) -> Result<Value, EvalError> {
    match node {
        Node::Constant(value) => Ok(value.clone()),
        // guaranteed bound by the root check; kept as a defensive path
        Node::Variable(name) => namespace
            .get(name)
            .cloned()
            .ok_or_else(|| EvalError::MissingVariable(name.clone())),
        Node::Operation(op) => {
            let x = eval_inner(&op.lhs, namespace)?;
            let y = match &op.rhs {
                Some(rhs) => Some(eval_inner(rhs, namespace)?),
                None => None,
            };
            Ok(op.operator.apply(x, y))
        }
    }
}
