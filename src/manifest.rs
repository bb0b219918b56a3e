use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub const LIBRARY_MANIFEST: &str = "cbtepackage.json";
pub const VENDOR_MANIFEST: &str = "package.json";

#[derive(Debug, Deserialize)]
pub struct LibraryManifest {
    libraries: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
pub struct VendorManifest {
    vendors: Map<String, Value>,
}

impl LibraryManifest {
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        read_json(path)
    }

    pub fn entries(&self) -> Result<Vec<(String, String)>, Box<dyn std::error::Error>> {
        entries(&self.libraries)
    }
}

impl VendorManifest {
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        read_json(path)
    }

    pub fn entries(&self) -> Result<Vec<(String, String)>, Box<dyn std::error::Error>> {
        entries(&self.vendors)
    }
}

pub fn is_not_found(err: &(dyn std::error::Error + 'static)) -> bool {
    err.downcast_ref::<std::io::Error>()
        .map(|e| e.kind() == std::io::ErrorKind::NotFound)
        .unwrap_or(false)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, Box<dyn std::error::Error>> {
    let file = File::open(path)?;
    let manifest = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| format!("Failed to parse {:?}: {}", path, e))?;
    Ok(manifest)
}

// Entry order follows the manifest's own key order (serde_json preserve_order).
fn entries(section: &Map<String, Value>) -> Result<Vec<(String, String)>, Box<dyn std::error::Error>> {
    let mut out = Vec::with_capacity(section.len());
    for (name, url) in section {
        let url = url
            .as_str()
            .ok_or_else(|| format!("Entry '{}' must map to a url string", name))?;
        out.push((name.clone(), url.to_string()));
    }
    Ok(out)
}
