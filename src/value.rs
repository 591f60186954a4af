use std::collections::HashMap;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::*;

use num_bigint::BigInt;
use num_complex::Complex64;
use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};

/// A binding table from variable names to values.
pub type Namespace = HashMap<String, Value>;

/// A numeric value carried by tokens, tree leaves, and evaluation results.
#[derive(Clone, PartialEq)]
pub enum Value {
    /// An exact integer or rational.
    Ratio(BigRational),
    /// A real number.
    Float(f64),
    /// A complex number.
    Complex(Complex64),
    /// A builtin one-argument helper bound under a variable-like name.
    Func(fn(Value) -> Value),
}

impl Value {
    /// An exact integer value.
    pub fn integer(n: i64) -> Value {
        Value::Ratio(BigRational::from_integer(BigInt::from(n)))
    }

    /// Narrows to `f64` when the value has a faithful real representation.
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Value::Ratio(r) => r.to_f64(),
            Value::Float(x) => Some(*x),
            Value::Complex(z) if z.im == 0.0 => Some(z.re),
            Value::Complex(_) | Value::Func(_) => None,
        }
    }

    fn widen_f64(self) -> f64 {
        match self {
            Value::Ratio(r) => r.to_f64().unwrap_or(f64::NAN),
            Value::Float(x) => x,
            Value::Complex(_) => unreachable!("complex operands widen to complex"),
            Value::Func(_) => panic!("builtin function used as a number"),
        }
    }

    fn widen_complex(self) -> Complex64 {
        match self {
            Value::Complex(z) => z,
            other => Complex64::new(other.widen_f64(), 0.0),
        }
    }

    /// Promotes both operands along Ratio -> Float -> Complex, then applies
    /// the matching function.
    fn binop(
        self,
        rhs: Value,
        exact: fn(BigRational, BigRational) -> BigRational,
        real: fn(f64, f64) -> f64,
        complex: fn(Complex64, Complex64) -> Complex64,
    ) -> Value {
        match (self, rhs) {
            (Value::Ratio(a), Value::Ratio(b)) => Value::Ratio(exact(a, b)),
            (a, b) => {
                if matches!(a, Value::Complex(_)) || matches!(b, Value::Complex(_)) {
                    Value::Complex(complex(a.widen_complex(), b.widen_complex()))
                } else {
                    Value::Float(real(a.widen_f64(), b.widen_f64()))
                }
            }
        }
    }
}

impl Add for Value {
    type Output = Value;

    fn add(self, rhs: Value) -> Value {
        self.binop(rhs, Add::add, Add::add, Add::add)
    }
}

impl Sub for Value {
    type Output = Value;

    fn sub(self, rhs: Value) -> Value {
        self.binop(rhs, Sub::sub, Sub::sub, Sub::sub)
    }
}

impl Mul for Value {
    type Output = Value;

    fn mul(self, rhs: Value) -> Value {
        self.binop(rhs, Mul::mul, Mul::mul, Mul::mul)
    }
}

impl Div for Value {
    type Output = Value;

    fn div(self, rhs: Value) -> Value {
        match (self, rhs) {
            // exact division by an exact zero widens to float (inf/NaN)
            (Value::Ratio(a), Value::Ratio(b)) if !b.is_zero() => Value::Ratio(a / b),
            (a, b) => {
                if matches!(a, Value::Complex(_)) || matches!(b, Value::Complex(_)) {
                    Value::Complex(a.widen_complex() / b.widen_complex())
                } else {
                    Value::Float(a.widen_f64() / b.widen_f64())
                }
            }
        }
    }
}

impl Neg for Value {
    type Output = Value;

    fn neg(self) -> Value {
        match self {
            Value::Ratio(r) => Value::Ratio(-r),
            Value::Float(x) => Value::Float(-x),
            Value::Complex(z) => Value::Complex(-z),
            Value::Func(_) => panic!("builtin function used as a number"),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Value {
        Value::integer(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Value {
        Value::Float(x)
    }
}

impl From<BigRational> for Value {
    fn from(r: BigRational) -> Value {
        Value::Ratio(r)
    }
}

impl From<Complex64> for Value {
    fn from(z: Complex64) -> Value {
        Value::Complex(z)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Ratio(r) => Display::fmt(r, f),
            Value::Float(x) => Display::fmt(x, f),
            Value::Complex(z) => Display::fmt(z, f),
            Value::Func(_) => f.write_str("<builtin>"),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Ratio(r) => write!(f, "Ratio({})", r),
            Value::Float(x) => write!(f, "Float({:?})", x),
            Value::Complex(z) => write!(f, "Complex({})", z),
            Value::Func(_) => f.write_str("Func(..)"),
        }
    }
}
