// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! By-name access to the library's functions and constants.
//!
//! The catalog is a static table in API order. Each entry names a function
//! (using the engine API's camelCase spelling, with the Rust snake_case name
//! accepted as an alias), documents its parameters, and carries a typed
//! function pointer. Tools such as the `mathf` CLI resolve user input through
//! [`lookup`] and [`evaluate`] instead of matching on names themselves.
//!
//! The math functions never fail; [`EvalError`] only covers resolving a name
//! and checking the argument count.

use core::fmt;

use thiserror::Error;

use crate::consts::{DEG2RAD, EPSILON, RAD2DEG};

/// Result of evaluating a catalog function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// Floating-point result.
    Number(f64),
    /// Integer result (power-of-two helpers).
    Integer(i64),
    /// Boolean result (predicates).
    Bool(bool),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => match f.precision() {
                Some(p) => write!(f, "{v:.p$}"),
                None => write!(f, "{v}"),
            },
            Self::Integer(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
        }
    }
}

/// Typed function pointer for a catalog entry.
///
/// The variant fixes both the arity and the result type.
#[derive(Debug, Clone, Copy)]
pub enum Kernel {
    /// `f(x) -> f64`
    Unary(fn(f64) -> f64),
    /// `f(x, y) -> f64`
    Binary(fn(f64, f64) -> f64),
    /// `f(x, y, z) -> f64`
    Ternary(fn(f64, f64, f64) -> f64),
    /// `f(x) -> i32`
    UnaryInt(fn(f64) -> i32),
    /// `f(x) -> i64`
    UnaryLong(fn(f64) -> i64),
    /// `f(x) -> bool`
    UnaryBool(fn(f64) -> bool),
    /// `f(x, y) -> bool`
    BinaryBool(fn(f64, f64) -> bool),
}

impl Kernel {
    /// Number of `f64` arguments the kernel expects.
    pub const fn arity(self) -> usize {
        match self {
            Self::Unary(_) | Self::UnaryInt(_) | Self::UnaryLong(_) | Self::UnaryBool(_) => 1,
            Self::Binary(_) | Self::BinaryBool(_) => 2,
            Self::Ternary(_) => 3,
        }
    }

    fn apply(self, args: &[f64]) -> Option<Value> {
        let value = match (self, args) {
            (Self::Unary(f), &[x]) => Value::Number(f(x)),
            (Self::Binary(f), &[x, y]) => Value::Number(f(x, y)),
            (Self::Ternary(f), &[x, y, z]) => Value::Number(f(x, y, z)),
            (Self::UnaryInt(f), &[x]) => Value::Integer(i64::from(f(x))),
            (Self::UnaryLong(f), &[x]) => Value::Integer(f(x)),
            (Self::UnaryBool(f), &[x]) => Value::Bool(f(x)),
            (Self::BinaryBool(f), &[x, y]) => Value::Bool(f(x, y)),
            _ => return None,
        };
        Some(value)
    }
}

/// Descriptor for a single catalog function.
#[derive(Debug, Clone, Copy)]
pub struct FunctionSpec {
    /// Engine API name (camelCase, e.g. `lerpUnclamped`).
    pub name: &'static str,
    /// Rust function name (snake_case, e.g. `lerp_unclamped`).
    pub rust_name: &'static str,
    /// Parameter names in call order.
    pub params: &'static [&'static str],
    /// One-line description.
    pub summary: &'static str,
    /// Function pointer.
    pub kernel: Kernel,
}

impl FunctionSpec {
    /// Returns `true` if `name` is this entry's API or Rust name.
    pub fn matches(&self, name: &str) -> bool {
        self.name == name || self.rust_name == name
    }

    /// Human-readable signature, e.g. `lerp(a, b, t)`.
    pub fn signature(&self) -> String {
        format!("{}({})", self.name, self.params.join(", "))
    }

    /// Calls the function after checking the argument count.
    pub fn call(&self, args: &[f64]) -> Result<Value, EvalError> {
        self.kernel.apply(args).ok_or(EvalError::Arity {
            name: self.name,
            expected: self.kernel.arity(),
            actual: args.len(),
        })
    }
}

/// Errors from resolving or invoking a catalog function.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// No catalog entry has this name.
    #[error("unknown function `{name}`")]
    UnknownFunction {
        /// The name that was looked up.
        name: String,
    },
    /// Wrong number of arguments.
    #[error("`{name}` takes {expected} argument(s), got {actual}")]
    Arity {
        /// Function name.
        name: &'static str,
        /// Declared parameter count.
        expected: usize,
        /// Supplied argument count.
        actual: usize,
    },
}

macro_rules! entry {
    ($name:literal, $rust:ident, [$($param:literal),*], $summary:literal, $kernel:ident $(,)?) => {
        FunctionSpec {
            name: $name,
            rust_name: stringify!($rust),
            params: &[$($param),*],
            summary: $summary,
            kernel: Kernel::$kernel(crate::$rust),
        }
    };
}

static CATALOG: &[FunctionSpec] = &[
    entry!(
        "approximately",
        approximately,
        ["f1", "f2"],
        "true if |f1 - f2| < machine epsilon",
        BinaryBool,
    ),
    entry!(
        "clamp",
        clamp,
        ["value", "min", "max"],
        "limit value to [min, max]",
        Ternary,
    ),
    entry!(
        "clamp01",
        clamp01,
        ["value"],
        "limit value to [0, 1]",
        Unary,
    ),
    entry!(
        "nextPowerOfTwo",
        next_power_of_two,
        ["value"],
        "smallest power of two >= value (32-bit)",
        UnaryInt,
    ),
    entry!(
        "closestPowerOfTwo",
        closest_power_of_two,
        ["value"],
        "nearest power of two, quarter-distance rule (32-bit)",
        UnaryInt,
    ),
    entry!(
        "closestPowerOfTwoLong",
        closest_power_of_two_long,
        ["value"],
        "nearest power of two located via log2",
        UnaryLong,
    ),
    entry!(
        "isPowerOfTwo",
        is_power_of_two,
        ["value"],
        "true if the truncated value has at most one bit set",
        UnaryBool,
    ),
    entry!(
        "deltaAngle",
        delta_angle,
        ["current", "target"],
        "target - current after reducing turns beyond 360",
        Binary,
    ),
    entry!(
        "gammaToLinearSpace",
        gamma_to_linear_space,
        ["value"],
        "value ^ 2.2",
        Unary,
    ),
    entry!(
        "linearToGammaSpace",
        linear_to_gamma_space,
        ["value"],
        "value ^ 0.45454545",
        Unary,
    ),
    entry!(
        "inverseLerp",
        inverse_lerp,
        ["a", "b", "value"],
        "fraction of value between a and b",
        Ternary,
    ),
    entry!(
        "lerp",
        lerp,
        ["a", "b", "t"],
        "interpolate a to b, t clamped to [0, 1]",
        Ternary,
    ),
    entry!(
        "lerpUnclamped",
        lerp_unclamped,
        ["a", "b", "t"],
        "interpolate without clamping t (unsigned distance outside [0, 1])",
        Ternary,
    ),
    entry!(
        "lerpAngle",
        lerp_angle,
        ["a", "b", "t"],
        "interpolate angles in degrees the short way",
        Ternary,
    ),
    entry!(
        "moveTowards",
        move_towards,
        ["current", "target", "maxDelta"],
        "step toward target by at most maxDelta",
        Ternary,
    ),
    entry!(
        "pingPong",
        ping_pong,
        ["t", "length"],
        "triangle wave over [0, length]",
        Binary,
    ),
    entry!(
        "repeat",
        repeat,
        ["t", "length"],
        "sawtooth wrap with period length",
        Binary,
    ),
    entry!(
        "round",
        round,
        ["f"],
        "round to integer, exact .5 ties to even",
        Unary,
    ),
    entry!(
        "sign",
        sign,
        ["f"],
        "1 for f >= 0, otherwise -1",
        Unary,
    ),
];

static CONSTANTS: &[(&str, f64)] = &[
    ("deg2Rad", DEG2RAD),
    ("rad2Deg", RAD2DEG),
    ("epsilon", EPSILON),
];

/// All catalog functions in API order.
pub fn catalog() -> &'static [FunctionSpec] {
    CATALOG
}

/// Named constants in API order.
pub fn constants() -> &'static [(&'static str, f64)] {
    CONSTANTS
}

/// Finds a function by API name or Rust name.
pub fn lookup(name: &str) -> Result<&'static FunctionSpec, EvalError> {
    CATALOG
        .iter()
        .find(|spec| spec.matches(name))
        .ok_or_else(|| EvalError::UnknownFunction {
            name: name.to_owned(),
        })
}

/// Looks up `name` and calls it with `args`.
pub fn evaluate(name: &str, args: &[f64]) -> Result<Value, EvalError> {
    lookup(name)?.call(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique() {
        let mut names: Vec<&str> = catalog()
            .iter()
            .flat_map(|s| [s.name, s.rust_name])
            .collect();
        names.sort_unstable();
        names.dedup();
        // "clamp", "clamp01", "lerp", "repeat", "round", "sign" and
        // "approximately" share their API and Rust spellings.
        assert_eq!(names.len(), catalog().len() * 2 - 7);
    }

    #[test]
    fn params_match_kernel_arity() {
        for spec in catalog() {
            assert_eq!(spec.params.len(), spec.kernel.arity(), "{}", spec.name);
        }
    }

    #[test]
    fn lookup_accepts_both_spellings() {
        assert_eq!(lookup("pingPong").map(|s| s.rust_name), Ok("ping_pong"));
        assert_eq!(lookup("ping_pong").map(|s| s.name), Ok("pingPong"));
        assert_eq!(
            lookup("smoothStep").err(),
            Some(EvalError::UnknownFunction {
                name: "smoothStep".into()
            })
        );
    }

    #[test]
    fn evaluate_checks_arity() {
        assert_eq!(
            evaluate("lerp", &[0.0, 10.0]),
            Err(EvalError::Arity {
                name: "lerp",
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(evaluate("lerp", &[0.0, 10.0, 0.5]), Ok(Value::Number(5.0)));
    }

    #[test]
    fn result_types_follow_kernel() {
        assert_eq!(evaluate("nextPowerOfTwo", &[5.0]), Ok(Value::Integer(8)));
        assert_eq!(evaluate("closestPowerOfTwoLong", &[5.0]), Ok(Value::Integer(4)));
        assert_eq!(evaluate("isPowerOfTwo", &[0.0]), Ok(Value::Bool(true)));
        assert_eq!(evaluate("approximately", &[1.0, 2.0]), Ok(Value::Bool(false)));
    }

    #[test]
    fn value_display() {
        assert_eq!(Value::Number(5.0).to_string(), "5");
        assert_eq!(Value::Number(0.25).to_string(), "0.25");
        assert_eq!(format!("{:.3}", Value::Number(0.25)), "0.250");
        assert_eq!(format!("{:.3}", Value::Integer(8)), "8");
        assert_eq!(Value::Bool(true).to_string(), "true");
    }

    #[test]
    fn constants_listed() {
        let names: Vec<&str> = constants().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, ["deg2Rad", "rad2Deg", "epsilon"]);
    }
}
