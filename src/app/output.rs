use crate::domain::model::{AccessLevel, DevUrl};
use crate::utils::error::{DevUrlError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

/// Left-aligned columns separated by two spaces; ID and name are not shown.
pub fn render_table(urls: &[DevUrl]) -> String {
    let rows: Vec<[String; 3]> = urls
        .iter()
        .map(|u| [u.url.clone(), u.port.to_string(), u.access.to_string()])
        .collect();
    let header = ["URL".to_string(), "Port".to_string(), "Access".to_string()];

    let mut widths = header.clone().map(|h| h.len());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    std::iter::once(&header)
        .chain(rows.iter())
        .map(|row| {
            let line = row
                .iter()
                .zip(widths)
                .map(|(cell, width)| format!("{:<width$}", cell, width = width))
                .collect::<Vec<_>>()
                .join("  ");
            format!("{}\n", line.trim_end())
        })
        .collect()
}

pub fn render_json(urls: &[DevUrl]) -> Result<String> {
    let mut json = serde_json::to_string_pretty(urls).map_err(encode_error)?;
    json.push('\n');
    Ok(json)
}

/// Encoding our own output is a local fault, never a remote one.
fn encode_error(error: serde_json::Error) -> DevUrlError {
    DevUrlError::Io(std::io::Error::from(error))
}

pub fn render_access_levels() -> String {
    AccessLevel::ALL
        .iter()
        .map(|level| format!("{:<8}  {}\n", level.as_str(), level.description()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<DevUrl> {
        vec![
            DevUrl {
                id: "u1".into(),
                url: "https://8080-dev.example.com".into(),
                port: 8080,
                name: Some("web".into()),
                access: AccessLevel::Org,
            },
            DevUrl {
                id: "u2".into(),
                url: "https://22-dev.example.com".into(),
                port: 22,
                name: None,
                access: AccessLevel::Private,
            },
        ]
    }

    #[test]
    fn test_table_aligns_columns() {
        let table = render_table(&sample());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "URL                           Port  Access");
        assert_eq!(lines[1], "https://8080-dev.example.com  8080  ORG");
        assert_eq!(lines[2], "https://22-dev.example.com    22    PRIVATE");
        assert!(!table.contains("u1"));
    }

    #[test]
    fn test_json_keeps_all_fields() {
        let json: serde_json::Value = serde_json::from_str(&render_json(&sample()).unwrap()).unwrap();

        assert_eq!(json[0]["id"], "u1");
        assert_eq!(json[0]["name"], "web");
        assert_eq!(json[1]["access"], "PRIVATE");
        assert_eq!(json[1]["name"], "");
    }

    #[test]
    fn test_encode_failure_is_local_error() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = encode_error(source);

        assert!(matches!(err, DevUrlError::Io(_)));
        assert_ne!(err.category(), crate::utils::error::ErrorCategory::Remote);
        assert!(!err.user_friendly_message().contains("DevURL service"));
    }

    #[test]
    fn test_access_levels_listing() {
        let listing = render_access_levels();
        assert_eq!(listing.lines().count(), 4);
        assert!(listing.contains("PUBLIC    Anyone on the internet can access this link"));
    }
}
