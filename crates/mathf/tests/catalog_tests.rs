// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! The catalog must dispatch to exactly the same functions as direct calls.

use mathf::catalog::{catalog, constants, Kernel};
use mathf::{evaluate, lookup, EvalError, Value};

const SAMPLES: [f64; 9] = [-725.5, -7.0, -0.5, 0.0, 0.25, 1.0, 5.0, 359.0, 1.0e6];

#[test]
fn every_entry_matches_its_direct_call() {
    for spec in catalog() {
        let arity = spec.kernel.arity();
        for &x in &SAMPLES {
            for &y in &SAMPLES {
                for &z in &SAMPLES {
                    let args = [x, y, z];
                    let args = &args[..arity];
                    let direct = match spec.kernel {
                        Kernel::Unary(f) => Value::Number(f(x)),
                        Kernel::Binary(f) => Value::Number(f(x, y)),
                        Kernel::Ternary(f) => Value::Number(f(x, y, z)),
                        Kernel::UnaryInt(f) => Value::Integer(i64::from(f(x))),
                        Kernel::UnaryLong(f) => Value::Integer(f(x)),
                        Kernel::UnaryBool(f) => Value::Bool(f(x)),
                        Kernel::BinaryBool(f) => Value::Bool(f(x, y)),
                    };
                    let via_name = evaluate(spec.name, args).expect("arity matches");
                    let via_alias = evaluate(spec.rust_name, args).expect("arity matches");
                    for got in [via_name, via_alias] {
                        match (got, direct) {
                            (Value::Number(a), Value::Number(b)) => {
                                assert!(a.to_bits() == b.to_bits() || (a.is_nan() && b.is_nan()));
                            }
                            _ => assert_eq!(got, direct),
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn catalog_is_in_api_order() {
    let names: Vec<&str> = catalog().iter().map(|s| s.name).collect();
    assert_eq!(
        names,
        [
            "approximately",
            "clamp",
            "clamp01",
            "nextPowerOfTwo",
            "closestPowerOfTwo",
            "closestPowerOfTwoLong",
            "isPowerOfTwo",
            "deltaAngle",
            "gammaToLinearSpace",
            "linearToGammaSpace",
            "inverseLerp",
            "lerp",
            "lerpUnclamped",
            "lerpAngle",
            "moveTowards",
            "pingPong",
            "repeat",
            "round",
            "sign",
        ]
    );
}

#[test]
fn unimplemented_engine_functions_are_absent() {
    for name in ["moveTowardsAngle", "smoothDamp", "smoothDampAngle", "smoothStep"] {
        assert!(matches!(lookup(name), Err(EvalError::UnknownFunction { .. })));
    }
}

#[test]
fn signatures_and_errors_render() {
    let spec = lookup("moveTowards").expect("present");
    assert_eq!(spec.signature(), "moveTowards(current, target, maxDelta)");
    let err = evaluate("sign", &[]).expect_err("arity");
    assert_eq!(err.to_string(), "`sign` takes 1 argument(s), got 0");
    let err = evaluate("nope", &[1.0]).expect_err("unknown");
    assert_eq!(err.to_string(), "unknown function `nope`");
}

#[test]
fn constants_match_exports() {
    let table = constants();
    assert_eq!(table[0], ("deg2Rad", mathf::DEG2RAD));
    assert_eq!(table[1], ("rad2Deg", mathf::RAD2DEG));
    assert_eq!(table[2], ("epsilon", mathf::EPSILON));
}
