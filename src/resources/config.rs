//! Resource location resolution.

use std::path::{Path, PathBuf};

use super::ResourceError;

/// Environment variable overriding the resource root.
pub const RESOURCES_PATH_ENV: &str = "INDIC_RESOURCES_PATH";

/// Indic phonetic table for every script except Tamil.
pub const ALL_SCRIPT_PHONETIC_DATA: &str = "all_script_phonetic_data.csv";
/// Tamil phonetic table.
pub const TAMIL_SCRIPT_PHONETIC_DATA: &str = "tamil_script_phonetic_data.csv";
/// English (ARPABET) phonetic table.
pub const ENGLISH_SCRIPT_PHONETIC_DATA: &str = "english_script_phonetic_data.csv";
/// ARPABET symbol list, one symbol per line.
pub const ENGLISH_ARPABET_LIST: &str = "english_arpabet_list.csv";

/// Where the phonetic resource files live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceConfig {
    root: PathBuf,
}

impl ResourceConfig {
    /// Use `root` as the resource directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the resource root.
    ///
    /// Order: `explicit`, then [`RESOURCES_PATH_ENV`] if set to something other
    /// than whitespace, then `<local data dir>/indic-phonetic/resources`.
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self, ResourceError> {
        let env = std::env::var(RESOURCES_PATH_ENV).ok();
        Self::resolve_with(explicit, env.as_deref())
    }

    fn resolve_with(explicit: Option<PathBuf>, env: Option<&str>) -> Result<Self, ResourceError> {
        let root = match (explicit, env) {
            (Some(path), _) => path,
            (None, Some(env)) if !env.trim().is_empty() => PathBuf::from(env),
            (None, _) => default_resources_dir()?,
        };
        let config = Self::new(root);
        config.validate()?;
        tracing::debug!(root = %config.root.display(), "resolved phonetic resource root");
        Ok(config)
    }

    /// Fail with [`ResourceError::EmptyResourcePath`] if the root is blank.
    pub fn validate(&self) -> Result<(), ResourceError> {
        match self.root.to_str() {
            Some(s) if s.trim().is_empty() => Err(ResourceError::EmptyResourcePath),
            _ => Ok(()),
        }
    }

    /// Resource root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of a file under the `script` subdirectory.
    pub fn script_file(&self, name: &str) -> PathBuf {
        self.root.join("script").join(name)
    }
}

/// Default resource directory under the platform's local data directory.
pub fn default_resources_dir() -> Result<PathBuf, ResourceError> {
    dirs::data_local_dir()
        .map(|base| base.join("indic-phonetic").join("resources"))
        .ok_or(ResourceError::EmptyResourcePath)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        let config =
            ResourceConfig::resolve_with(Some(PathBuf::from("/opt/res")), Some("/env/res")).unwrap();
        assert_eq!(config.root(), Path::new("/opt/res"));
    }

    #[test]
    fn test_env_path() {
        let config = ResourceConfig::resolve_with(None, Some("/env/res")).unwrap();
        assert_eq!(config.root(), Path::new("/env/res"));
    }

    #[test]
    fn test_blank_env_falls_back() {
        if let Ok(config) = ResourceConfig::resolve_with(None, Some("   ")) {
            assert!(config.root().ends_with("indic-phonetic/resources"));
        }
    }

    #[test]
    fn test_blank_explicit_rejected() {
        assert!(matches!(
            ResourceConfig::resolve_with(Some(PathBuf::from("  ")), None),
            Err(ResourceError::EmptyResourcePath)
        ));
        assert!(ResourceConfig::new("").validate().is_err());
    }

    #[test]
    fn test_script_file() {
        let config = ResourceConfig::new("/res");
        assert_eq!(
            config.script_file(ALL_SCRIPT_PHONETIC_DATA),
            PathBuf::from("/res/script/all_script_phonetic_data.csv")
        );
    }
}
