//! GELF payload assembly: title extraction, field enrichment, JSON
//! encoding, and NUL framing.

use serde_json::{Map, Value};

use crate::log_record::GelfRecord;

/// Protocol version tag written into every payload.
pub const GELF_VERSION: &str = "1.1";
/// Payload field carrying the shared authentication token.
pub const TOKEN_FIELD: &str = "X-OVH-TOKEN";

/// Split a leading `[...]` group out of the message.
///
/// The first group's inner text becomes the title (omitted when empty);
/// every group is stripped from the returned body, which is then trimmed.
/// A message without a complete bracket group is returned unchanged.
pub(crate) fn split_title(message: &str) -> (Option<String>, String) {
    let mut title = None;
    let mut body = String::with_capacity(message.len());
    let mut rest = message;
    let mut stripped = false;
    while let Some(open) = rest.find('[') {
        let Some(close) = rest[open + 1..].find(']') else {
            break;
        };
        let inner = &rest[open + 1..open + 1 + close];
        if !stripped && !inner.is_empty() {
            title = Some(inner.to_owned());
        }
        body.push_str(&rest[..open]);
        rest = &rest[open + close + 2..];
        stripped = true;
    }
    if !stripped {
        return (None, message.to_owned());
    }
    body.push_str(rest);
    (title, body.trim().to_owned())
}

/// Build the flat payload object for one record.
///
/// Caller fields are copied first; adapter fields are written afterwards so
/// they always win over caller fields of the same name.
pub(crate) fn build_payload(record: &GelfRecord, token: &str, host: &str) -> Map<String, Value> {
    let (title, body) = split_title(&record.message);
    let mut payload = Map::new();
    for (key, value) in &record.fields {
        payload.insert(key.clone(), value.clone());
    }
    payload.insert("level".into(), Value::from(record.level.code()));
    payload.insert("msg".into(), Value::from(body));
    payload.insert("timestamp".into(), Value::from(record.unix_timestamp()));
    if let Some(title) = title {
        payload.insert("title".into(), Value::from(title));
    }
    payload.insert(TOKEN_FIELD.into(), Value::from(token));
    payload.insert("host".into(), Value::from(host));
    payload.insert("version".into(), Value::from(GELF_VERSION));
    payload
}

/// Encode one record as a NUL-terminated GELF JSON frame.
///
/// `serde_json` escapes control characters, so the terminator is the only
/// NUL byte in the frame.
pub(crate) fn encode_frame(
    record: &GelfRecord,
    token: &str,
    host: &str,
) -> Result<Vec<u8>, serde_json::Error> {
    let payload = build_payload(record, token, host);
    let mut frame = serde_json::to_vec(&payload)?;
    frame.push(0);
    Ok(frame)
}
