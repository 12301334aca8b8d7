use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use lexis_config::Config;
use serde::{Deserialize, Serialize};

/// Where lexis keeps its files
pub struct AppDirs {
    config: PathBuf,
    data: PathBuf,
}

impl AppDirs {
    pub fn new(config: impl Into<PathBuf>, data: impl Into<PathBuf>) -> Self {
        Self {
            config: config.into(),
            data: data.into(),
        }
    }

    /// Platform folders, or a temp folder when there is no home directory
    pub fn resolve() -> Self {
        match ProjectDirs::from("dev", "lexis", "lexis") {
            Some(dirs) => Self::new(dirs.config_dir(), dirs.data_dir()),
            None => {
                let fallback = std::env::temp_dir().join("lexis");
                Self::new(&fallback, &fallback)
            }
        }
    }

    pub fn profiles_dir(&self) -> PathBuf {
        self.config.join("profiles")
    }

    pub fn preferences_file(&self) -> PathBuf {
        self.data.join("preferences.json")
    }

    pub fn log_file(&self) -> PathBuf {
        self.data.join("lexis.log")
    }
}

/// Represents a user profile
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

fn read_profile(path: &Path) -> anyhow::Result<Config> {
    let data = fs::read_to_string(path)?;
    let profile: Profile = serde_json::from_str(&data)?;
    Ok(profile.value)
}

/// Create the profiles folder and the main profile if missing
pub fn init_user_config(dirs: &AppDirs) -> anyhow::Result<()> {
    fs::create_dir_all(dirs.profiles_dir())?;

    let main_profile = dirs.profiles_dir().join("main.json");
    if !main_profile.exists() {
        let profile = Profile {
            name: "main".into(),
            value: Config::default(),
        };
        fs::write(&main_profile, serde_json::to_string_pretty(&profile)?)?;
        tracing::info!("Created main profile at {}", main_profile.display());
    }

    Ok(())
}

/// Load a user profile by name, falling back to main and then to defaults
pub fn load_user_profile(dirs: &AppDirs, name: &str) -> anyhow::Result<Config> {
    let profile_file = dirs.profiles_dir().join(format!("{name}.json"));
    if profile_file.exists() {
        return read_profile(&profile_file);
    }

    tracing::warn!("Profile {name} not found, falling back to main profile");
    let main_file = dirs.profiles_dir().join("main.json");
    if main_file.exists() {
        read_profile(&main_file)
    } else {
        Ok(Config::default())
    }
}

/// Add a new profile cloned from main
pub fn add_profile_from_main(dirs: &AppDirs, new_name: &str) -> anyhow::Result<PathBuf> {
    let profile = Profile {
        name: new_name.into(),
        value: load_user_profile(dirs, "main")?,
    };
    let file = dirs.profiles_dir().join(format!("{new_name}.json"));
    fs::create_dir_all(dirs.profiles_dir())?;
    fs::write(&file, serde_json::to_string_pretty(&profile)?)?;
    tracing::info!("Created new profile: {new_name}");
    Ok(file)
}

/// A bare `Config` JSON file passed with `--config`
pub fn load_config_file(path: &Path) -> anyhow::Result<Config> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

#[cfg(test)]
mod tests {
    use lexis_types::Font;

    use super::*;

    fn dirs() -> (tempfile::TempDir, AppDirs) {
        let root = tempfile::tempdir().unwrap();
        let dirs = AppDirs::new(root.path().join("config"), root.path().join("data"));
        (root, dirs)
    }

    #[test]
    fn init_writes_main_profile_once() {
        let (_root, dirs) = dirs();
        init_user_config(&dirs).unwrap();

        let main = dirs.profiles_dir().join("main.json");
        let written = fs::read_to_string(&main).unwrap();
        assert!(written.contains("\"name\": \"main\""));

        fs::write(&main, r#"{"name": "main", "value": {"ui": {"font": "sans"}}}"#).unwrap();
        init_user_config(&dirs).unwrap();
        assert_eq!(load_user_profile(&dirs, "main").unwrap().ui.font, Font::Sans);
    }

    #[test]
    fn missing_profile_falls_back_to_main() {
        let (_root, dirs) = dirs();
        fs::create_dir_all(dirs.profiles_dir()).unwrap();
        fs::write(
            dirs.profiles_dir().join("main.json"),
            r#"{"name": "main", "value": {"ui": {"default_term": "lexicon"}}}"#,
        )
        .unwrap();

        let config = load_user_profile(&dirs, "work").unwrap();
        assert_eq!(config.ui.default_term, "lexicon");
    }

    #[test]
    fn no_profiles_at_all_gives_defaults() {
        let (_root, dirs) = dirs();
        assert_eq!(load_user_profile(&dirs, "main").unwrap(), Config::default());
    }

    #[test]
    fn new_profile_copies_main() {
        let (_root, dirs) = dirs();
        init_user_config(&dirs).unwrap();

        let file = add_profile_from_main(&dirs, "study").unwrap();
        assert_eq!(file, dirs.profiles_dir().join("study.json"));
        assert_eq!(load_user_profile(&dirs, "study").unwrap(), Config::default());
    }

    #[test]
    fn broken_profile_is_an_error() {
        let (_root, dirs) = dirs();
        fs::create_dir_all(dirs.profiles_dir()).unwrap();
        fs::write(dirs.profiles_dir().join("main.json"), "{ nope").unwrap();
        assert!(load_user_profile(&dirs, "main").is_err());
    }

    #[test]
    fn config_file_is_plain_config() {
        let (root, _dirs) = dirs();
        let path = root.path().join("lexis.json");
        fs::write(&path, r#"{"network": {"timeout_ms": 800}}"#).unwrap();

        let config = load_config_file(&path).unwrap();
        assert_eq!(config.network.timeout_ms, Some(800));
    }

    #[test]
    fn files_live_under_their_folders() {
        let dirs = AppDirs::new("/c", "/d");
        assert_eq!(dirs.profiles_dir(), PathBuf::from("/c/profiles"));
        assert_eq!(dirs.preferences_file(), PathBuf::from("/d/preferences.json"));
        assert_eq!(dirs.log_file(), PathBuf::from("/d/lexis.log"));
    }
}
