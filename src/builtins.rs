use std::f64::consts::{E, PI};

use num_complex::Complex64;
use num_traits::ToPrimitive;

use crate::value::{Namespace, Value};

/// The builtin table every evaluation starts from: the constants `e`, `pi`
/// and `i`, plus the trigonometric helpers bound as variable-like names.
pub fn default_namespace() -> Namespace {
    let mut namespace = Namespace::new();
    namespace.insert("e".to_string(), Value::Float(E));
    namespace.insert("pi".to_string(), Value::Float(PI));
    namespace.insert("i".to_string(), Value::Complex(Complex64::i()));
    namespace.insert("sin".to_string(), Value::Func(sin));
    namespace.insert("cos".to_string(), Value::Func(cos));
    namespace.insert("tan".to_string(), Value::Func(tan));
    namespace
}

/// Widens a caller namespace with the builtin table. Builtins are defaults:
/// caller bindings win on name collisions.
pub fn with_defaults(caller: &Namespace) -> Namespace {
    let mut namespace = default_namespace();
    namespace.extend(
        caller
            .iter()
            .map(|(name, value)| (name.clone(), value.clone())),
    );
    namespace
}

fn sin(x: Value) -> Value {
    match x {
        Value::Complex(z) => Value::Complex(z.sin()),
        other => Value::Float(real_arg(other).sin()),
    }
}

fn cos(x: Value) -> Value {
    match x {
        Value::Complex(z) => Value::Complex(z.cos()),
        other => Value::Float(real_arg(other).cos()),
    }
}

fn tan(x: Value) -> Value {
    match x {
        Value::Complex(z) => Value::Complex(z.tan()),
        other => Value::Float(real_arg(other).tan()),
    }
}

/// The helpers operate on the real line unless handed a complex value.
fn real_arg(x: Value) -> f64 {
    match x {
        Value::Ratio(r) => r.to_f64().unwrap_or(f64::NAN),
        Value::Float(x) => x,
        Value::Complex(_) => unreachable!("complex arguments are handled by the caller"),
        Value::Func(_) => panic!("builtin helper applied to a non-numeric value"),
    }
}
