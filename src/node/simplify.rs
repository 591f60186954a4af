use either::Either;

use super::Node;
use crate::builtins;
use crate::value::{Namespace, Value};

/// Folds every fully bound subtree to a constant; unresolved variables stay
/// symbolic, so this never fails.
pub(super) fn simplify(node: &Node, namespace: &Namespace) -> Node {
    let namespace = builtins::with_defaults(namespace);
    match eval_partial(node, &namespace) {
        Either::Left(node) => node,
        Either::Right(value) => Node::Constant(value),
    }
}

/// `Left` carries a subtree that still refers to unbound variables, `Right`
/// a fully reduced value.
fn eval_partial(node: &Node, namespace: &Namespace) -> Either<Node, Value> {
    match node {
        Node::Constant(value) => Either::Right(value.clone()),
        Node::Variable(name) => match namespace.get(name) {
            Some(value) => Either::Right(value.clone()),
            None => Either::Left(Node::Variable(name.clone())),
        },
        Node::Operation(op) => {
            let x = eval_partial(&op.lhs, namespace);
            match &op.rhs {
                None => match x {
                    Either::Right(x) => Either::Right(op.operator.apply(x, None)),
                    Either::Left(x) => Either::Left(Node::unary(op.operator.clone(), x)),
                },
                Some(rhs) => {
                    let y = eval_partial(rhs, namespace);
                    match (x, y) {
                        (Either::Right(x), Either::Right(y)) => {
                            Either::Right(op.operator.apply(x, Some(y)))
                        }
                        (x, y) => Either::Left(Node::binary(
                            op.operator.clone(),
                            into_node(x),
                            into_node(y),
                        )),
                    }
                }
            }
        }
    }
}

fn into_node(partial: Either<Node, Value>) -> Node {
    partial.either(|node| node, Node::Constant)
}
