//! NDJSON output for `--json`

use std::io::{self, Write};

use serde::Serialize;
use serde_json::{json, Value};

fn write_line(out: &mut impl Write, value: &Value) -> io::Result<()> {
    serde_json::to_writer(&mut *out, value).map_err(io::Error::from)?;
    writeln!(out)
}

/// Write one object to stdout as a single line.
pub fn emit(value: Value) -> io::Result<()> {
    write_line(&mut io::stdout().lock(), &value)
}

/// Serialize `payload` and stamp it with `command` and `event` before emitting.
pub fn emit_tagged<T: Serialize>(command: &str, event: &str, payload: &T) -> io::Result<()> {
    emit(tagged(command, event, payload)?)
}

fn tagged<T: Serialize>(command: &str, event: &str, payload: &T) -> io::Result<Value> {
    let mut value = serde_json::to_value(payload).map_err(io::Error::from)?;
    match value.as_object_mut() {
        Some(object) => {
            object.insert("event".to_string(), json!(event));
            object.insert("command".to_string(), json!(command));
            Ok(value)
        }
        None => Ok(json!({ "event": event, "command": command, "data": value })),
    }
}
