use std::io::{self, Write};

use serde::Serialize;

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Convenience helper that writes to stdout.
pub fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}

/// Emit `payload` with an `event` tag merged into its top-level object.
pub fn emit_event(event: &str, payload: &impl Serialize) -> io::Result<()> {
    let value = tagged(event, payload).map_err(io::Error::other)?;
    emit(value)
}

fn tagged(event: &str, payload: &impl Serialize) -> serde_json::Result<serde_json::Value> {
    let mut value = serde_json::to_value(payload)?;
    match value.as_object_mut() {
        Some(map) => {
            map.insert("event".to_string(), event.into());
            Ok(value)
        }
        None => Ok(serde_json::json!({ "event": event, "data": value })),
    }
}
