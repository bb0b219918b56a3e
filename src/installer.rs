use std::fs::{self, File};
use std::future::Future;
use std::io::{self, Cursor};
use std::path::Path;

use zip::ZipArchive;

use crate::manifest::{self, LibraryManifest, VendorManifest};
use crate::network;
use crate::platform::Platform;

pub const LIBRARY_DIR: &str = "Libraries";

#[derive(Debug, PartialEq)]
pub enum Outcome {
    Refused(Platform),
    Installed(Vec<String>),
}

// cbte-install entry: cbtepackage.json / "libraries", never overwrites existing files.
pub async fn install_libraries() -> Result<(), Box<dyn std::error::Error>> {
    let manifest = LibraryManifest::load(Path::new(manifest::LIBRARY_MANIFEST))?;
    let entries = manifest.entries()?;
    install_entries(&entries, Path::new(LIBRARY_DIR), false, Platform::current(), |url| async move {
        network::fetch_archive(&url).await
    })
    .await?;
    Ok(())
}

// cbepm install command: package.json / "vendors", overwrites on extraction.
// A missing manifest is reported as a user message, not an error.
pub async fn install_vendors() -> Result<(), Box<dyn std::error::Error>> {
    let manifest = match VendorManifest::load(Path::new(manifest::VENDOR_MANIFEST)) {
        Ok(manifest) => manifest,
        Err(e) if manifest::is_not_found(e.as_ref()) => {
            println!("Could not find {}", manifest::VENDOR_MANIFEST);
            return Ok(());
        }
        Err(e) => return Err(e),
    };
    let entries = manifest.entries()?;
    install_entries(&entries, Path::new(LIBRARY_DIR), true, Platform::current(), |url| async move {
        network::fetch_archive(&url).await
    })
    .await?;
    Ok(())
}

pub async fn install_entries<F, Fut>(
    entries: &[(String, String)],
    library_dir: &Path,
    overwrite: bool,
    platform: Platform,
    fetch: F,
) -> Result<Outcome, Box<dyn std::error::Error>>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<Vec<u8>, Box<dyn std::error::Error>>>,
{
    if !platform.supported() {
        println!("Sorry, cbepm is not supported in {}", platform);
        return Ok(Outcome::Refused(platform));
    }

    fs::create_dir_all(library_dir)?;

    let mut installed = Vec::with_capacity(entries.len());
    for (name, url) in entries {
        let archive = fetch(url.clone()).await?;
        unpack_zip(&archive, library_dir, overwrite)
            .map_err(|e| format!("Failed to unpack {}: {}", name, e))?;
        println!("download {} complete", name);
        installed.push(name.clone());
    }

    Ok(Outcome::Installed(installed))
}

pub fn unpack_zip(
    bytes: &[u8],
    target_dir: &Path,
    overwrite: bool,
) -> Result<usize, Box<dyn std::error::Error>> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;

    let mut written = 0;
    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;

        // Reject entry names that would escape the target directory.
        let relative = entry
            .enclosed_name()
            .ok_or_else(|| format!("Unsafe path in archive: {}", entry.name()))?
            .to_path_buf();
        let outpath = target_dir.join(relative);

        if entry.name().ends_with('/') {
            fs::create_dir_all(&outpath)?;
            continue;
        }

        if !overwrite && outpath.exists() {
            continue;
        }

        if let Some(parent) = outpath.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut outfile = File::create(&outpath)?;
        io::copy(&mut entry, &mut outfile)?;
        written += 1;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Some(mode) = entry.unix_mode() {
                fs::set_permissions(&outpath, fs::Permissions::from_mode(mode))?;
            }
        }
    }

    Ok(written)
}
