//! Messages subcommand: print the message catalog.

use anyhow::Result;

use schemafx_schema::messages;

/// Catalog as pretty-printed JSON, keys sorted.
pub fn render_catalog() -> Result<String> {
    Ok(serde_json::to_string_pretty(messages())?)
}

/// Execute the messages subcommand.
pub fn run_messages() -> Result<u8> {
    println!("{}", render_catalog()?);
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_round_trips_through_json() {
        let rendered = render_catalog().unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["missing"], "is missing and it is required");
        assert_eq!(value["strInt"], "string value found, but a integer is required");
    }
}
