use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

/// Returns the base data directory for settings and saved password lists.
pub fn data_dir() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "PassGen", "PassGen") {
        let dir = proj_dirs.data_dir();
        let _ = fs::create_dir_all(dir);
        dir.to_path_buf()
    } else {
        PathBuf::from(".")
    }
}

pub fn settings_file_path() -> PathBuf {
    data_dir().join("settings.json")
}

/// Where "Save to File" points by default.
pub fn default_export_path(file_name: &str) -> PathBuf {
    data_dir().join(file_name)
}
