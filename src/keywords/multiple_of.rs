//! `multipleOf` (§4.5): the remainder of `instance / divisor` is equal to 0 or to the divisor
//! itself, under a tolerance of ε = 1.19209290 × 10⁻⁷ — a pragmatic accommodation of IEEE-754
//! rounding (§9's "Floating-point `multipleOf`" design note).
use crate::{error::{Error, Result}, output::OutputUnit, tree::Node};

const EPSILON: f64 = 1.192_092_90e-7;

pub(crate) fn validate(
    value: &Node,
    instance: &Node,
    _parent: &Node,
    _errors: &mut Vec<OutputUnit>,
) -> Result<bool> {
    let divisor = value.as_f64().ok_or_else(|| Error::InvalidSchema {
        location: value.location().to_string(),
    })?;
    if divisor == 0.0 {
        return Err(Error::InvalidSchema {
            location: value.location().to_string(),
        });
    }
    match instance.as_f64() {
        Some(n) => {
            let remainder = n % divisor;
            Ok(remainder.abs() < EPSILON || (divisor.abs() - remainder.abs()).abs() < EPSILON)
        }
        None => Ok(true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::build;
    use serde_json::json;

    fn check(divisor: f64, instance: f64) -> bool {
        let value = build(&json!(divisor), "").unwrap();
        let instance = build(&json!(instance), "").unwrap();
        let mut errors = Vec::new();
        validate(&value, &instance, &value, &mut errors).unwrap()
    }

    #[test]
    fn exact_multiples_pass() {
        assert!(check(2.0, 10.0));
        assert!(!check(2.0, 7.0));
    }

    #[test]
    fn floating_point_near_misses_pass() {
        assert!(check(0.1, 0.3));
    }
}
