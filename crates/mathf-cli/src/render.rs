// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Text and JSON rendering for command results.

use mathf::{FunctionSpec, Value};
use serde_json::{json, Map, Value as Json};

use crate::cli::Format;
use crate::prefs::{CliPrefs, OutputOptions};

/// Plain rendering of a value, honoring a fixed precision for numbers.
pub(crate) fn plain_value(value: Value, precision: Option<usize>) -> String {
    match precision {
        Some(p) => format!("{value:.p$}"),
        None => value.to_string(),
    }
}

/// JSON rendering of a value. Non-finite numbers become strings because JSON
/// has no representation for them.
pub(crate) fn json_value(value: Value) -> Json {
    match value {
        Value::Number(v) if v.is_finite() => json!(v),
        Value::Number(v) => json!(v.to_string()),
        Value::Integer(v) => json!(v),
        Value::Bool(v) => json!(v),
    }
}

pub(crate) fn eval_result(
    spec: &FunctionSpec,
    args: &[f64],
    value: Value,
    opts: OutputOptions,
) -> String {
    match opts.format {
        Format::Plain => plain_value(value, opts.precision),
        Format::Json => {
            let args: Vec<Json> = args.iter().map(|&a| json_value(Value::Number(a))).collect();
            json!({
                "function": spec.name,
                "args": args,
                "result": json_value(value),
            })
            .to_string()
        }
    }
}

pub(crate) fn catalog_listing(specs: &[FunctionSpec], format: Format) -> String {
    match format {
        Format::Plain => {
            let width = specs
                .iter()
                .map(|s| s.signature().len())
                .max()
                .unwrap_or(0);
            specs
                .iter()
                .map(|s| format!("{:<width$}  {}", s.signature(), s.summary))
                .collect::<Vec<_>>()
                .join("\n")
        }
        Format::Json => {
            let items: Vec<Json> = specs
                .iter()
                .map(|s| {
                    json!({
                        "name": s.name,
                        "rust_name": s.rust_name,
                        "params": s.params,
                        "summary": s.summary,
                    })
                })
                .collect();
            Json::Array(items).to_string()
        }
    }
}

pub(crate) fn constants(table: &[(&str, f64)], opts: OutputOptions) -> String {
    match opts.format {
        Format::Plain => table
            .iter()
            .map(|&(name, v)| {
                let shown = plain_value(Value::Number(v), opts.precision);
                format!("{name} = {shown}")
            })
            .collect::<Vec<_>>()
            .join("\n"),
        Format::Json => {
            let map: Map<String, Json> = table
                .iter()
                .map(|&(name, v)| (name.to_owned(), json_value(Value::Number(v))))
                .collect();
            Json::Object(map).to_string()
        }
    }
}

pub(crate) fn prefs(prefs: &CliPrefs, format: Format) -> String {
    match format {
        Format::Plain => {
            let precision = prefs
                .precision
                .map_or_else(|| "(shortest)".to_owned(), |p| p.to_string());
            let format = match prefs.format {
                Format::Plain => "plain",
                Format::Json => "json",
            };
            format!("precision = {precision}\nformat = {format}")
        }
        Format::Json => json!(prefs).to_string(),
    }
}
