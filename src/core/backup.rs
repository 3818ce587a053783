use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the data file to `dest`, optionally zipped. Returns the final path.
    pub fn backup(src: &Path, dest: &Path, compress: bool, force: bool) -> AppResult<PathBuf> {
        // 1️⃣ Check data file exists
        if !src.exists() {
            return Err(AppError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Data file not found: {}", src.display()),
            )));
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let final_target = if compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };
        ensure_writable(&final_target, force)?;

        // 3️⃣ Copy data file
        fs::copy(src, dest)?;
        success(format!("Backup created: {}", dest.display()));

        // 4️⃣ Optional compression
        if !compress {
            return Ok(dest.to_path_buf());
        }

        let compressed = compress_backup(dest)?;
        if compressed.as_path() != dest {
            if let Err(e) = fs::remove_file(dest) {
                warning(format!("Failed to remove uncompressed backup: {}", e));
            } else {
                info(format!("Removed uncompressed backup: {}", dest.display()));
            }
        }

        Ok(compressed)
    }
}

/// Compress a backup using .zip
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let entry_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "garde_data.csv".to_string());

    let mut f = fs::File::open(path)?;
    zip.start_file(entry_name, options)
        .map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    info(format!("Compressed: {}", zip_path.display()));

    Ok(zip_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn plain_copy() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("garde_data.csv");
        fs::write(&src, "ID,Date\n").unwrap();
        let dest = dir.path().join("bk").join("copy.csv");

        let out = BackupLogic::backup(&src, &dest, false, true).unwrap();
        assert_eq!(out, dest);
        assert_eq!(fs::read_to_string(&dest).unwrap(), "ID,Date\n");
    }

    #[test]
    fn compressed_copy_replaces_plain_file() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("garde_data.csv");
        fs::write(&src, "ID,Date\n").unwrap();
        let dest = dir.path().join("copy.csv");

        let out = BackupLogic::backup(&src, &dest, true, true).unwrap();
        assert_eq!(out, dir.path().join("copy.zip"));
        assert!(out.exists());
        assert!(!dest.exists());
    }

    #[test]
    fn missing_source_fails() {
        let dir = TempDir::new().unwrap();
        let res = BackupLogic::backup(
            &dir.path().join("none.csv"),
            &dir.path().join("copy.csv"),
            false,
            true,
        );
        assert!(matches!(res, Err(AppError::Io(_))));
    }
}
