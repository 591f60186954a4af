use std::fmt;
use std::fmt::{Display, Formatter};

use super::{Node, Operation};

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Node::Constant(value) => Display::fmt(value, f),
            Node::Variable(name) => f.write_str(name),
            Node::Operation(op) => match &op.rhs {
                None => write!(f, "({} {})", op.operator.symbol(), op.lhs),
                Some(rhs) => write!(f, "({} {} {})", op.lhs, op.operator.symbol(), rhs),
            },
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Node::Constant(value) => f.debug_tuple("Constant").field(value).finish(),
            Node::Variable(name) => f.debug_tuple("Variable").field(name).finish(),
            Node::Operation(op) => op.fmt(f),
        }
    }
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operation")
            .field("operator", &self.operator.symbol())
            .field("lhs", &self.lhs)
            .field("rhs", &self.rhs)
            .finish()
    }
}
