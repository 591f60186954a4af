use std::sync::Arc;

use thiserror::Error;

use crate::node::Node;
use crate::token::{Operator, Token};

/// A failure while turning a token sequence into a tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// An operator's right-hand operand is missing or is another operator.
    #[error("Operator '{symbol}' is missing its operand")]
    MissingOperand { symbol: String },
    /// The token sequence was empty.
    #[error("cannot build a tree from an empty token sequence")]
    EmptyInput,
}

enum Item {
    Op(Arc<dyn Operator>),
    Done(Node),
}

/// Builds a single expression tree out of an ordered token sequence.
///
/// Operators are reduced left to right; a reduction is deferred only while
/// the operator two positions ahead binds strictly tighter. An operator with
/// no operand on its left (sequence start or another operator) is applied as
/// unary.
pub fn build<I>(tokens: I) -> Result<Node, BuildError>
where
    I: IntoIterator<Item = Token>,
{
    let mut items: Vec<Item> = tokens
        .into_iter()
        .map(|token| match token {
            Token::Operator(op) => Item::Op(op),
            Token::Constant(value) => Item::Done(Node::Constant(value)),
            Token::Variable(name) => Item::Done(Node::Variable(name)),
        })
        .collect();

    while items.len() > 1 {
        let index = next_reduction(&items);
        reduce(&mut items, index)?;
    }

    match items.into_iter().next() {
        Some(Item::Done(node)) => Ok(node),
        // a lone operator has nothing to consume
        Some(Item::Op(op)) => Err(BuildError::MissingOperand {
            symbol: op.symbol().to_string(),
        }),
        None => Err(BuildError::EmptyInput),
    }
}

/// Picks the operator to reduce next: the leftmost candidate whose successor
/// two positions ahead does not bind strictly tighter.
fn next_reduction(items: &[Item]) -> usize {
    let mut index = match items[0] {
        Item::Op(_) => 0,
        Item::Done(_) => 1,
    };

    while index + 2 < items.len() {
        let (current, next) = match (&items[index], &items[index + 2]) {
            (Item::Op(current), Item::Op(next)) => (current, next),
            _ => break,
        };
        if current.priority() >= next.priority() {
            break;
        }
        index += 2;
    }

    index
}

fn reduce(items: &mut Vec<Item>, index: usize) -> Result<(), BuildError> {
    let symbol = match &items[index] {
        Item::Op(op) => op.symbol().to_string(),
        // two adjacent operands with no operator between them
        Item::Done(node) => {
            return Err(BuildError::MissingOperand {
                symbol: node.to_string(),
            })
        }
    };

    match items.get(index + 1) {
        Some(Item::Done(_)) => {}
        // the right operand is missing or is itself an operator
        _ => return Err(BuildError::MissingOperand { symbol }),
    }

    let rhs = match items.remove(index + 1) {
        Item::Done(node) => node,
        Item::Op(_) => unreachable!(),
    };
    let operator = match items.remove(index) {
        Item::Op(op) => op,
        Item::Done(_) => unreachable!(),
    };

    let takes_left = index > 0 && matches!(items[index - 1], Item::Done(_));
    if takes_left {
        let lhs = match items.remove(index - 1) {
            Item::Done(node) => node,
            Item::Op(_) => unreachable!(),
        };
        items.insert(index - 1, Item::Done(Node::binary(operator, lhs, rhs)));
    } else {
        items.insert(index, Item::Done(Node::unary(operator, rhs)));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::op;
    use crate::value::Value;

    fn constant(n: i64) -> Token {
        Token::Constant(Value::integer(n))
    }

    #[test]
    fn it_reduces_higher_priority_operators_first() {
        let plus = op("+", 1);
        let times = op("*", 2);
        let tree = build(vec![
            constant(2),
            Token::Operator(plus.clone()),
            constant(3),
            Token::Operator(times.clone()),
            constant(4),
        ])
        .unwrap();

        let expected = Node::binary(
            plus,
            Node::Constant(Value::integer(2)),
            Node::binary(
                times,
                Node::Constant(Value::integer(3)),
                Node::Constant(Value::integer(4)),
            ),
        );
        assert_eq!(tree, expected);
    }

    #[test]
    fn it_groups_equal_priorities_left_to_right() {
        let minus = op("-", 1);
        let tree = build(vec![
            constant(1),
            Token::Operator(minus.clone()),
            constant(2),
            Token::Operator(minus.clone()),
            constant(3),
        ])
        .unwrap();

        let expected = Node::binary(
            minus.clone(),
            Node::binary(
                minus,
                Node::Constant(Value::integer(1)),
                Node::Constant(Value::integer(2)),
            ),
            Node::Constant(Value::integer(3)),
        );
        assert_eq!(tree, expected);
    }

    #[test]
    fn it_defers_along_a_strictly_rising_priority_chain() {
        let plus = op("+", 1);
        let times = op("*", 2);
        let caret = op("^", 3);
        let tree = build(vec![
            constant(1),
            Token::Operator(plus.clone()),
            constant(2),
            Token::Operator(times.clone()),
            constant(3),
            Token::Operator(caret.clone()),
            constant(2),
        ])
        .unwrap();

        let expected = Node::binary(
            plus,
            Node::Constant(Value::integer(1)),
            Node::binary(
                times,
                Node::Constant(Value::integer(2)),
                Node::binary(
                    caret,
                    Node::Constant(Value::integer(3)),
                    Node::Constant(Value::integer(2)),
                ),
            ),
        );
        assert_eq!(tree, expected);
    }

    #[test]
    fn it_treats_a_leading_operator_as_unary() {
        let minus = op("-", 1);
        let tree = build(vec![Token::Operator(minus.clone()), constant(5)]).unwrap();
        assert_eq!(tree, Node::unary(minus, Node::Constant(Value::integer(5))));
    }

    #[test]
    fn it_returns_a_single_operand_unchanged() {
        let tree = build(vec![Token::Variable("x".to_string())]).unwrap();
        assert_eq!(tree, Node::Variable("x".to_string()));
    }

    #[test]
    fn it_reports_an_operator_without_a_right_operand() {
        let plus = op("+", 1);
        let err = build(vec![constant(3), Token::Operator(plus)]).unwrap_err();
        assert_eq!(
            err,
            BuildError::MissingOperand {
                symbol: "+".to_string()
            }
        );
    }

    #[test]
    fn it_reports_an_operator_followed_by_another_operator() {
        let times = op("*", 2);
        let minus = op("-", 1);
        let err = build(vec![
            constant(2),
            Token::Operator(times),
            Token::Operator(minus),
            constant(3),
        ])
        .unwrap_err();

        // the operator being reduced is reported, not its neighbor
        assert_eq!(
            err,
            BuildError::MissingOperand {
                symbol: "*".to_string()
            }
        );
    }

    #[test]
    fn it_rejects_chained_operators_without_an_operand_between() {
        let minus = op("-", 1);
        let err = build(vec![
            Token::Operator(minus.clone()),
            Token::Operator(minus),
            constant(5),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            BuildError::MissingOperand {
                symbol: "-".to_string()
            }
        );
    }

    #[test]
    fn it_rejects_a_lone_operator() {
        let plus = op("+", 1);
        let err = build(vec![Token::Operator(plus)]).unwrap_err();
        assert_eq!(
            err,
            BuildError::MissingOperand {
                symbol: "+".to_string()
            }
        );
    }

    #[test]
    fn it_reports_adjacent_operands() {
        let err = build(vec![constant(1), constant(2)]).unwrap_err();
        assert_eq!(
            err,
            BuildError::MissingOperand {
                symbol: "2".to_string()
            }
        );
    }

    #[test]
    fn it_rejects_an_empty_sequence() {
        assert_eq!(build(Vec::new()).unwrap_err(), BuildError::EmptyInput);
    }
}
