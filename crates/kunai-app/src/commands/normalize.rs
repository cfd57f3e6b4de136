use anyhow::{Context, Result};
use kunai_core::config::CodecConfig;
use kunai_rfc::rfc::ical::build::SerializeOptions;
use kunai_rfc::rfc::ical::{decode_document, encode_document, validate};

/// Decodes a calendar stream, validates every record and re-encodes it.
///
/// ## Errors
/// Returns an error if the codec settings are invalid, the stream cannot be
/// decoded, or any event or to-do breaks a structural rule.
#[tracing::instrument(skip(input, codec), fields(input_len = input.len()))]
pub fn run(input: &str, codec: &CodecConfig) -> Result<String> {
    let options = SerializeOptions::try_from(codec)?;
    let documents = decode_document(input).context("Failed to decode calendar stream")?;

    let mut output = String::new();
    for document in &documents {
        for event in &document.events {
            validate(event).with_context(|| format!("Invalid event {}", event.uid))?;
        }
        for todo in &document.todos {
            validate(todo).with_context(|| format!("Invalid to-do {}", todo.uid))?;
        }
        output.push_str(&encode_document(document, &options)?);
    }

    tracing::info!(calendars = documents.len(), "Normalised calendar stream");
    Ok(output)
}
