mod display;
mod eval;
mod simplify;

pub use self::eval::EvalError;

use std::borrow::Cow;
use std::collections::HashSet;
use std::sync::Arc;

use crate::token::Operator;
use crate::value::{Namespace, Value};

/// A node of a built expression tree.
#[derive(Clone)]
pub enum Node {
    /// A literal value.
    Constant(Value),
    /// A name resolved against the namespace at evaluation time.
    Variable(String),
    /// An operator applied to one or two operand subtrees.
    Operation(Operation),
}

/// An operator application; unary when the second operand is absent.
#[derive(Clone)]
pub struct Operation {
    operator: Arc<dyn Operator>,
    lhs: Box<Node>,
    rhs: Option<Box<Node>>,
    used: HashSet<String>,
}

impl Operation {
    /// Wraps the operand(s) under `operator`, taking the union of their
    /// variable sets once, up front.
    pub fn new(operator: Arc<dyn Operator>, lhs: Node, rhs: Option<Node>) -> Operation {
        let mut used = lhs.used_variables().into_owned();
        if let Some(rhs) = &rhs {
            used.extend(rhs.used_variables().iter().cloned());
        }

        Operation {
            operator,
            lhs: Box::new(lhs),
            rhs: rhs.map(Box::new),
            used,
        }
    }

    pub fn operator(&self) -> &dyn Operator {
        &*self.operator
    }

    pub fn lhs(&self) -> &Node {
        &self.lhs
    }

    pub fn rhs(&self) -> Option<&Node> {
        self.rhs.as_deref()
    }

    /// Whether the node applies its operator to a single operand.
    pub fn is_unary(&self) -> bool {
        self.rhs.is_none()
    }
}

impl Node {
    /// An operation over a single operand.
    pub fn unary(operator: Arc<dyn Operator>, operand: Node) -> Node {
        Node::Operation(Operation::new(operator, operand, None))
    }

    /// An operation over two operands.
    pub fn binary(operator: Arc<dyn Operator>, lhs: Node, rhs: Node) -> Node {
        Node::Operation(Operation::new(operator, lhs, Some(rhs)))
    }

    /// The set of variable names the tree refers to.
    ///
    /// Operation nodes answer from the union computed at construction;
    /// leaves answer directly.
    pub fn used_variables(&self) -> Cow<'_, HashSet<String>> {
        match self {
            Node::Constant(_) => Cow::Owned(HashSet::new()),
            Node::Variable(name) => {
                let mut set = HashSet::new();
                set.insert(name.clone());
                Cow::Owned(set)
            }
            Node::Operation(op) => Cow::Borrowed(&op.used),
        }
    }

    /// Evaluates the tree down to a single value.
    ///
    /// The namespace is widened with the builtin table first; caller
    /// bindings win on name collisions.
    pub fn eval(&self, namespace: &Namespace) -> Result<Value, EvalError> {
        eval::eval(self, namespace)
    }

    /// Folds every fully bound subtree to a constant, leaving unresolved
    /// variables symbolic. Never fails.
    pub fn simplify(&self, namespace: &Namespace) -> Node {
        simplify::simplify(self, namespace)
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Node) -> bool {
        match (self, other) {
            (Node::Constant(a), Node::Constant(b)) => a == b,
            (Node::Variable(a), Node::Variable(b)) => a == b,
            (Node::Operation(a), Node::Operation(b)) => a == b,
            _ => false,
        }
    }
}

impl PartialEq for Operation {
    fn eq(&self, other: &Operation) -> bool {
        Arc::ptr_eq(&self.operator, &other.operator)
            && self.lhs == other.lhs
            && self.rhs == other.rhs
    }
}
