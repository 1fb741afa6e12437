//! Song catalog snapshots for duplicate detection.
//!
//! A snapshot is a list of `{id, title, artist, slug}` records exported from
//! the catalog, as JSON or YAML. Loading happens once; searches work on the
//! in-memory slice and never refresh it.

use crate::duplicates::SongSummary;
use crate::error::ChartError;
use std::fs;
use std::path::Path;

/// Decode a JSON array of songs.
pub fn from_json_str(content: &str) -> Result<Vec<SongSummary>, ChartError> {
    serde_json::from_str(content).map_err(|e| ChartError::Catalog(e.to_string()))
}

/// Decode a YAML sequence of songs.
pub fn from_yaml_str(content: &str) -> Result<Vec<SongSummary>, ChartError> {
    serde_yaml::from_str(content).map_err(|e| ChartError::Catalog(e.to_string()))
}

/// Load a snapshot, choosing the format by extension (`.yaml`/`.yml`, anything
/// else is read as JSON).
pub fn load(path: impl AsRef<Path>) -> Result<Vec<SongSummary>, ChartError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| ChartError::io(path, e))?;

    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    let songs = if is_yaml {
        from_yaml_str(&content)?
    } else {
        from_json_str(&content)?
    };
    tracing::debug!(path = %path.display(), songs = songs.len(), "loaded catalog");
    Ok(songs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const JSON: &str = r#"[
        {"id": "1", "title": "Amazing Grace", "artist": "John Newton", "slug": "amazing-grace"},
        {"id": "2", "title": "Be Thou My Vision", "artist": null, "slug": "be-thou-my-vision"}
    ]"#;

    #[test]
    fn test_json() {
        let songs = from_json_str(JSON).unwrap();
        assert_eq!(songs.len(), 2);
        assert_eq!(songs[0].artist.as_deref(), Some("John Newton"));
        assert_eq!(songs[1].artist, None);
    }

    #[test]
    fn test_yaml() {
        let yaml = "- id: '1'\n  title: Amazing Grace\n  slug: amazing-grace\n";
        let songs = from_yaml_str(yaml).unwrap();
        assert_eq!(songs[0].title, "Amazing Grace");
        assert_eq!(songs[0].artist, None);
    }

    #[test]
    fn test_invalid() {
        assert!(matches!(from_json_str("{}"), Err(ChartError::Catalog(_))));
        assert!(matches!(
            from_json_str(r#"[{"id": "1"}]"#),
            Err(ChartError::Catalog(_))
        ));
    }

    #[test]
    fn test_load_by_extension() {
        let mut json = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(json, "{}", JSON).unwrap();
        assert_eq!(load(json.path()).unwrap().len(), 2);

        let mut yaml = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
        write!(yaml, "- id: '9'\n  title: Holy Holy Holy\n  slug: holy\n").unwrap();
        assert_eq!(load(yaml.path()).unwrap()[0].id, "9");
    }
}
