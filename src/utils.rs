// Render an error followed by every error in its source chain.
pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}

/// Escape user-provided text before it is placed into markup.
pub fn escape_html(s: &str) -> String {
    htmlescape::encode_minimal(s)
}

/// Escape text placed inside a double-quoted attribute value.
pub fn escape_attribute(s: &str) -> String {
    htmlescape::encode_attribute(s)
}
