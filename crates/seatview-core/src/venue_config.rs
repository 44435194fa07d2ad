//! Venue configuration loader
//!
//! Venue configs are YAML files named `{venue_id}.yaml` inside a config
//! directory. They describe a venue's coordinates file, reference images and
//! prompt vocabulary for the downstream generation tools.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SeatViewError};

/// Identity of a venue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenueInfo {
    pub id: String,
    pub name: String,
    /// Kind of venue, e.g. `amphitheater` or `arena`
    #[serde(rename = "type")]
    pub venue_type: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StagePosition {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RowRange {
    #[serde(default = "default_min_row")]
    pub min: u32,
    #[serde(default = "default_max_row")]
    pub max: u32,
}

fn default_min_row() -> u32 {
    1
}

fn default_max_row() -> u32 {
    70
}

impl Default for RowRange {
    fn default() -> Self {
        Self {
            min: default_min_row(),
            max: default_max_row(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Seat coordinates CSV, relative to the project root
    pub csv_path: String,
    pub stage_position: StagePosition,
    #[serde(default)]
    pub row_range: RowRange,
}

/// Where a reference photo was taken from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferencePosition {
    pub row: u32,
    pub angle: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceImage {
    pub path: String,
    #[serde(default)]
    pub description: String,
    pub position: ReferencePosition,
}

/// Prompt vocabulary of a venue
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Prompts {
    #[serde(default)]
    pub elements: Vec<String>,
    #[serde(default)]
    pub negative: String,
    #[serde(default)]
    pub distance_descriptions: BTreeMap<String, String>,
    #[serde(default)]
    pub angle_descriptions: BTreeMap<String, String>,
}

/// Parsed `{venue_id}.yaml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenueConfig {
    pub venue: VenueInfo,
    pub coordinates: Coordinates,
    #[serde(default)]
    pub reference_images: Vec<ReferenceImage>,
    #[serde(default)]
    pub prompts: Prompts,
    /// Output settings, passed through untouched
    #[serde(default)]
    pub output: BTreeMap<String, serde_yaml::Value>,
}

impl VenueConfig {
    pub fn id(&self) -> &str {
        &self.venue.id
    }

    pub fn name(&self) -> &str {
        &self.venue.name
    }

    pub fn prompt_elements(&self) -> &[String] {
        &self.prompts.elements
    }

    pub fn negative_prompt(&self) -> &str {
        &self.prompts.negative
    }

    /// Description for a `front`/`middle`/`back` distance, empty if unknown
    pub fn distance_description(&self, distance_type: &str) -> &str {
        self.prompts
            .distance_descriptions
            .get(distance_type)
            .map_or("", String::as_str)
    }

    /// Description for a `left`/`center`/`right` angle, empty if unknown
    pub fn angle_description(&self, angle_type: &str) -> &str {
        self.prompts
            .angle_descriptions
            .get(angle_type)
            .map_or("", String::as_str)
    }
}

/// Parse a venue config from YAML text.
///
/// # Errors
/// Returns `SeatViewError::Config` if the YAML does not describe a venue.
pub fn parse_venue(yaml: &str) -> Result<VenueConfig> {
    serde_yaml::from_str(yaml).map_err(|e| SeatViewError::Config(e.to_string()))
}

/// Load the venue config `{config_dir}/{venue_id}.yaml`.
///
/// # Errors
/// - `SeatViewError::NotFound` - no config file for `venue_id`
/// - `SeatViewError::Config` - the file cannot be read or parsed
pub fn load_venue(venue_id: &str, config_dir: &Path) -> Result<VenueConfig> {
    let path = config_dir.join(format!("{venue_id}.yaml"));
    if !path.is_file() {
        return Err(SeatViewError::NotFound(format!(
            "venue config {}",
            path.display()
        )));
    }

    let content = std::fs::read_to_string(&path)
        .map_err(|e| SeatViewError::Config(format!("{}: {e}", path.display())))?;

    let config = parse_venue(&content)?;
    tracing::debug!(venue_id, path = %path.display(), "loaded venue config");
    Ok(config)
}

/// Ids of all venue configs in `config_dir`, sorted.
///
/// A missing directory yields an empty list.
pub fn list_venues(config_dir: &Path) -> Vec<String> {
    let Ok(entries) = std::fs::read_dir(config_dir) else {
        return Vec::new();
    };

    let mut ids: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "yaml"))
        .filter_map(|path| path.file_stem()?.to_str().map(str::to_string))
        .collect();

    ids.sort();
    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED_ROCKS: &str = r#"
venue:
  id: red_rocks
  name: Red Rocks Amphitheatre
  type: amphitheater
coordinates:
  csv_path: data/red_rocks_seats.csv
  stage_position:
    x: 0.0
    y: -12.5
  row_range:
    min: 1
    max: 70
reference_images:
  - path: references/red_rocks/row_10.jpg
    description: Front rows, centre
    position:
      row: 10
      angle: 0.0
prompts:
  elements:
    - towering red sandstone monoliths
    - open-air stage
  negative: crowds blocking view
  distance_descriptions:
    front: close to the stage
  angle_descriptions:
    left: from stage left
output:
  directory: outputs
"#;

    #[test]
    fn test_parse_venue() {
        let venue = parse_venue(RED_ROCKS).unwrap();

        assert_eq!(venue.id(), "red_rocks");
        assert_eq!(venue.name(), "Red Rocks Amphitheatre");
        assert_eq!(venue.venue.venue_type, "amphitheater");
        assert_eq!(venue.coordinates.stage_position, StagePosition { x: 0.0, y: -12.5 });
        assert_eq!(venue.coordinates.row_range, RowRange { min: 1, max: 70 });
        assert_eq!(venue.reference_images.len(), 1);
        assert_eq!(venue.reference_images[0].position.row, 10);
        assert_eq!(venue.prompt_elements().len(), 2);
        assert_eq!(venue.negative_prompt(), "crowds blocking view");
        assert!(venue.output.contains_key("directory"));
    }

    #[test]
    fn test_description_lookups() {
        let venue = parse_venue(RED_ROCKS).unwrap();

        assert_eq!(venue.distance_description("front"), "close to the stage");
        assert_eq!(venue.distance_description("back"), "");
        assert_eq!(venue.angle_description("left"), "from stage left");
        assert_eq!(venue.angle_description("right"), "");
    }

    #[test]
    fn test_optional_sections_default() {
        let venue = parse_venue(
            "venue: {id: x, name: X, type: arena}\ncoordinates: {csv_path: x.csv, stage_position: {x: 1, y: 2}}\n",
        )
        .unwrap();

        assert_eq!(venue.coordinates.row_range, RowRange::default());
        assert!(venue.reference_images.is_empty());
        assert_eq!(venue.prompts, Prompts::default());
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let result = parse_venue("venue: [not, a, map]");
        assert!(matches!(result, Err(SeatViewError::Config(_))));
    }

    #[test]
    fn test_load_and_list_venues() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("red_rocks.yaml"), RED_ROCKS).unwrap();
        std::fs::write(dir.path().join("ball_arena.yaml"), RED_ROCKS).unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let venue = load_venue("red_rocks", dir.path()).unwrap();
        assert_eq!(venue.id(), "red_rocks");

        assert_eq!(list_venues(dir.path()), vec!["ball_arena", "red_rocks"]);
    }

    #[test]
    fn test_load_missing_venue() {
        let dir = tempfile::tempdir().unwrap();

        match load_venue("nowhere", dir.path()) {
            Err(SeatViewError::NotFound(msg)) => assert!(msg.contains("nowhere.yaml")),
            other => panic!("Expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_list_missing_directory() {
        assert!(list_venues(Path::new("/definitely/not/a/dir")).is_empty());
    }
}
