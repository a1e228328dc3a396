use std::env;
use std::fs;
use std::path::PathBuf;
use tracing::{error, info};

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "TAROT_DATA_DIR";

const DB_FILENAME: &str = "readings.sqlite";

pub struct PortablePathManager;

impl PortablePathManager {
    /// Application root: the directory containing the executable.
    pub fn root_dir() -> PathBuf {
        match env::current_exe() {
            Ok(mut path) => {
                path.pop();
                path
            }
            Err(e) => {
                error!("Failed to get current exe path: {}. Falling back to current_dir.", e);
                env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
            }
        }
    }

    /// Main data directory: `$TAROT_DATA_DIR`, or `./data` beside the executable.
    pub fn data_dir() -> PathBuf {
        match env::var(DATA_DIR_ENV) {
            Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
            _ => Self::root_dir().join("data"),
        }
    }

    /// Reading archive directory (`<data>/db`).
    pub fn db_dir() -> PathBuf {
        Self::data_dir().join("db")
    }

    /// Reading archive file.
    pub fn db_path() -> PathBuf {
        Self::db_dir().join(DB_FILENAME)
    }

    /// Creates the data and db directories if they don't exist.
    pub fn init() -> Result<(), std::io::Error> {
        let db_path = Self::db_dir();

        if !db_path.exists() {
            info!("Creating db directory: {:?}", db_path);
            fs::create_dir_all(&db_path)?;
        }

        Ok(())
    }
}
