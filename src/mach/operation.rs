use crate::error;
use crate::lang::{Error, Integer, Operator};

type Result<T> = std::result::Result<T, Error>;

/// Integer arithmetic for the expression evaluator.
/// Overflow and zero divisors are errors, never wrapped or undefined.
pub struct Operation {}

impl Operation {
    pub fn is_relational(op: Operator) -> bool {
        matches!(op, Operator::Less | Operator::Greater | Operator::Equal)
    }

    pub fn is_additive(op: Operator) -> bool {
        matches!(
            op,
            Operator::Plus | Operator::Minus | Operator::And | Operator::Or
        )
    }

    pub fn is_multiplicative(op: Operator) -> bool {
        matches!(
            op,
            Operator::Multiply | Operator::Divide | Operator::Modulus
        )
    }

    pub fn binary(op: Operator, lhs: Integer, rhs: Integer) -> Result<Integer> {
        use Operator::*;
        match op {
            Multiply => Self::multiply(lhs, rhs),
            Divide => Self::divide(lhs, rhs),
            Modulus => Self::modulus(lhs, rhs),
            Plus => Self::sum(lhs, rhs),
            Minus => Self::subtract(lhs, rhs),
            And => Ok(lhs & rhs),
            Or => Ok(lhs | rhs),
            Less => Ok(Integer::from(lhs < rhs)),
            Greater => Ok(Integer::from(lhs > rhs)),
            Equal => Ok(Integer::from(lhs == rhs)),
        }
    }

    pub fn multiply(lhs: Integer, rhs: Integer) -> Result<Integer> {
        match lhs.checked_mul(rhs) {
            Some(i) => Ok(i),
            None => Err(error!(Overflow)),
        }
    }

    pub fn divide(lhs: Integer, rhs: Integer) -> Result<Integer> {
        match lhs.checked_div(rhs) {
            Some(i) => Ok(i),
            None => {
                if rhs == 0 {
                    Err(error!(DivisionByZero))
                } else {
                    Err(error!(Overflow))
                }
            }
        }
    }

    pub fn modulus(lhs: Integer, rhs: Integer) -> Result<Integer> {
        match lhs.checked_rem(rhs) {
            Some(i) => Ok(i),
            None => {
                if rhs == 0 {
                    Err(error!(DivisionByZero))
                } else {
                    Err(error!(Overflow))
                }
            }
        }
    }

    pub fn sum(lhs: Integer, rhs: Integer) -> Result<Integer> {
        match lhs.checked_add(rhs) {
            Some(i) => Ok(i),
            None => Err(error!(Overflow)),
        }
    }

    pub fn subtract(lhs: Integer, rhs: Integer) -> Result<Integer> {
        match lhs.checked_sub(rhs) {
            Some(i) => Ok(i),
            None => Err(error!(Overflow)),
        }
    }
}
