use crate::errors::AppResult;
use crate::export::ensure_writable;
use crate::ui::messages::success;
use crate::utils::path::ensure_parent_dir;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database file to `dest_file`, optionally zipping it.
    ///
    /// Returns the path of the file that was finally written.
    pub fn backup(db_path: &str, dest_file: &str, compress: bool, force: bool) -> AppResult<PathBuf> {
        let src = Path::new(db_path);
        let dest = Path::new(dest_file);

        if !src.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )
            .into());
        }

        let final_path = if compress {
            let zip_path = dest.with_extension("zip");
            ensure_writable(&zip_path, force)?;
            ensure_parent_dir(&zip_path)?;
            compress_backup(src, &zip_path, &entry_name(src, dest))?;
            zip_path
        } else {
            ensure_writable(dest, force)?;
            ensure_parent_dir(dest)?;
            fs::copy(src, dest)?;
            success(format!("Backup created: {}", dest.display()));
            dest.to_path_buf()
        };

        info!(
            source = %src.display(),
            target = %final_path.display(),
            compress,
            "database backup written"
        );
        Ok(final_path)
    }
}

/// Name of the database inside the archive: the destination's stem with the
/// database's own extension (`inv.zip` from `inv.sqlite` holds `inv.sqlite`).
fn entry_name(src: &Path, dest: &Path) -> String {
    let stem = dest
        .file_stem()
        .or_else(|| src.file_stem())
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "backup".to_string());
    match src.extension() {
        Some(ext) => format!("{}.{}", stem, ext.to_string_lossy()),
        None => stem,
    }
}

/// Stream the database straight into a deflated .zip archive.
fn compress_backup(src: &Path, zip_path: &Path, entry: &str) -> AppResult<()> {
    let mut f = fs::File::open(src)?;
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    zip.start_file(entry, options)
        .map_err(std::io::Error::other)?;
    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    success(format!("Compressed backup created: {}", zip_path.display()));
    Ok(())
}
