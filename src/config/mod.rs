use anyhow::{Context, Result};
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::LotError;

/// Group sizes for one floor, e.g. `5,3,2` for groups of 5, 3 and 2 spots
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct FloorLayout(pub Vec<u32>);

impl FloorLayout {
    pub fn groups(&self) -> &[u32] {
        &self.0
    }

    pub fn total_spots(&self) -> u32 {
        self.0.iter().sum()
    }
}

impl AsRef<[u32]> for FloorLayout {
    fn as_ref(&self) -> &[u32] {
        &self.0
    }
}

impl FromStr for FloorLayout {
    type Err = LotError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(LotError::InvalidLayout(format!(
                "{:?} lists no groups",
                s
            )));
        }

        // every segment is a group, so an empty one is an error
        let groups = s
            .split(',')
            .map(str::trim)
            .map(|part| {
                part.parse::<u32>().map_err(|_| {
                    LotError::InvalidLayout(format!("{:?} is not a group size", part))
                })
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(FloorLayout(groups))
    }
}

impl fmt::Display for FloorLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(u32::to_string).collect();
        f.write_str(&parts.join(","))
    }
}

/// Layout used when neither a config file nor `--floor` flags give one
pub fn default_floors() -> Vec<FloorLayout> {
    vec![
        FloorLayout(vec![5, 3, 2]),
        FloorLayout(vec![4, 4, 2]),
        FloorLayout(vec![6, 2, 2]),
    ]
}

fn default_verbose() -> bool {
    false
}

#[derive(Debug, Deserialize)]
pub struct FileConfig {
    #[serde(default = "default_floors")]
    pub floors: Vec<FloorLayout>,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            floors: default_floors(),
            verbose: default_verbose(),
        }
    }
}

impl FileConfig {
    /// First config file on the search path that parses, if any
    pub fn load() -> Option<Self> {
        let config_paths = get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }

    /// Load an explicitly named config file
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("parkade.toml"));
    paths.push(PathBuf::from(".parkade.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("parkade").join("config.toml"));
        paths.push(config_dir.join("parkade.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".parkade.toml"));
        paths.push(home.join(".config").join("parkade").join("config.toml"));
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_parse_floor_layout() {
        let layout: FloorLayout = "5,3,2".parse().unwrap();
        assert_eq!(layout.groups(), &[5, 3, 2]);
        assert_eq!(layout.total_spots(), 10);
        assert_eq!(layout.to_string(), "5,3,2");

        let spaced: FloorLayout = " 4 , 4,2 ".parse().unwrap();
        assert_eq!(spaced, FloorLayout(vec![4, 4, 2]));
    }

    #[test]
    fn test_parse_floor_layout_errors() {
        assert!(matches!(
            "5,x,2".parse::<FloorLayout>(),
            Err(LotError::InvalidLayout(_))
        ));
        assert!(matches!(
            "-1".parse::<FloorLayout>(),
            Err(LotError::InvalidLayout(_))
        ));
        assert!(matches!(
            " , ".parse::<FloorLayout>(),
            Err(LotError::InvalidLayout(_))
        ));
        assert!(matches!(
            "".parse::<FloorLayout>(),
            Err(LotError::InvalidLayout(_))
        ));
    }

    #[test]
    fn test_parse_floor_layout_rejects_empty_group() {
        for text in ["5,,2", "5,2,", ",5"] {
            assert!(
                matches!(text.parse::<FloorLayout>(), Err(LotError::InvalidLayout(_))),
                "{:?} should be rejected",
                text
            );
        }
    }

    #[test]
    fn test_from_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("parkade.toml");
        fs::write(&path, "verbose = true\nfloors = [[2, 2], [10]]\n").unwrap();

        let config = FileConfig::from_path(&path).unwrap();
        assert!(config.verbose);
        assert_eq!(
            config.floors,
            vec![FloorLayout(vec![2, 2]), FloorLayout(vec![10])]
        );
    }

    #[test]
    fn test_from_path_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.toml");
        fs::write(&path, "").unwrap();

        let config = FileConfig::from_path(&path).unwrap();
        assert!(!config.verbose);
        assert_eq!(config.floors, default_floors());
    }

    #[test]
    fn test_from_path_errors() {
        let dir = tempdir().unwrap();
        assert!(FileConfig::from_path(&dir.path().join("missing.toml")).is_err());

        let path = dir.path().join("bad.toml");
        fs::write(&path, "floors = [[1, -2]]\n").unwrap();
        assert!(FileConfig::from_path(&path).is_err());
    }

    #[test]
    fn test_config_paths() {
        let paths = get_config_paths();
        assert_eq!(paths[0], PathBuf::from("parkade.toml"));
        assert_eq!(paths[1], PathBuf::from(".parkade.toml"));
    }
}
