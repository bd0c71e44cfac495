// src/build/format.rs

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::job::{Job, Properties};

pub const GENERATED_HEADER: &str = "# This file generated by jobflow. Do not edit by hand.";

/// Render a `.job` file.
///
/// `type=` comes first (when the kind has one), then `dependencies=`, then
/// the job's own properties sorted by key. A job's own `dependencies`
/// property is ignored in favour of `dependencies`, and its own `type` is
/// ignored when the kind supplies one.
pub fn render_job(job: &Job, dependencies: &[String]) -> String {
    let mut out = String::new();
    out.push_str(GENERATED_HEADER);
    out.push('\n');

    let kind_type = job.kind().azkaban_type();
    if let Some(ty) = kind_type {
        push_line(&mut out, "type", ty);
    }
    if !dependencies.is_empty() {
        push_line(&mut out, "dependencies", &dependencies.join(","));
    }

    let own = job.properties().iter().filter(|(key, _)| match key.as_str() {
        "dependencies" => false,
        "type" => kind_type.is_none(),
        _ => true,
    });
    for (key, value) in own {
        push_line(&mut out, key, value);
    }

    out
}

/// Render a `.properties` file.
pub fn render_properties(properties: &Properties) -> String {
    let mut out = String::new();
    out.push_str(GENERATED_HEADER);
    out.push('\n');
    push_all(&mut out, properties.properties());
    out
}

fn push_all(out: &mut String, properties: &BTreeMap<String, String>) {
    for (key, value) in properties {
        push_line(out, key, value);
    }
}

fn push_line(out: &mut String, key: &str, value: &str) {
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{key}={value}");
}
