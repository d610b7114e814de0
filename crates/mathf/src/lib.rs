// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! mathf: stateless scalar math helpers in the shape of a familiar game-engine
//! `Mathf` API.
//!
//! Every function is a pure `f64` computation with no shared state. Invalid
//! input never panics or returns an error; it degrades to the IEEE special
//! values (`NaN`, `±∞`) or to the defined-but-odd results documented on each
//! function. Several of those oddities are part of the contract and are
//! covered by tests:
//!
//! - [`lerp_unclamped`] scales by `|b - a|` outside `[0, 1]`.
//! - [`delta_angle`] does not normalise its result into `[-180, 180]`.
//! - [`move_towards`] steps away from the target for a negative `max_delta`.
//! - [`sign`] maps both zeros to `1`.
//! - [`repeat`] maps `0` to `length`.
//!
//! The power-of-two helpers operate on 32-bit integers obtained by truncating
//! the input toward zero and wrapping modulo 2^32.
//!
//! [`catalog`] exposes the same functions by name for tooling.

mod angle;
pub mod catalog;
mod clamp;
mod color;
mod consts;
mod interp;
mod pow2;
mod rounding;
mod wave;

pub use angle::{delta_angle, lerp_angle};
pub use catalog::{evaluate, lookup, EvalError, FunctionSpec, Value};
pub use clamp::{clamp, clamp01};
pub use color::{gamma_to_linear_space, linear_to_gamma_space};
pub use consts::{DEG2RAD, EPSILON, RAD2DEG};
pub use interp::{inverse_lerp, lerp, lerp_unclamped, move_towards};
pub use pow2::{
    closest_power_of_two, closest_power_of_two_long, is_power_of_two, next_power_of_two,
};
pub use rounding::{approximately, round, sign};
pub use wave::{ping_pong, repeat};
