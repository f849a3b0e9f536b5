use anyhow::{Context, Result};
use reqwest::Response;
use serde::de::DeserializeOwned;

/// Decode the whole body of a response as JSON.
///
/// An empty body is read as JSON `null`, so endpoints answering a mutation
/// with no content still decode into `serde_json::Value` or any `Option`.
pub async fn deserialize_response<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    let full = response.bytes().await.with_context(|| {
        "Failed to get bytes from the body of the message".to_string()
    })?;

    let full: &[u8] = if full.iter().all(u8::is_ascii_whitespace) {
        b"null"
    } else {
        &full
    };

    serde_json::from_slice(full).with_context(|| {
        let text = String::from_utf8_lossy(full);
        format!(
            "Failed to deserialize (supposedly JSON) to the specified type, \
             the text message is {:?}",
            text
        )
    })
}
