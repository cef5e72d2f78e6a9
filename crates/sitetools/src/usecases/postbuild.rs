//! Post-build patching of the HTML pages.
//!
//! Vite writes hashed bundles plus a manifest; the source pages still point at
//! `/src/styles/...` and `/src/scripts/...`. Every such reference whose file
//! name appears in the manifest is rewritten to the built `/dist/...` path.

use regex::{Captures, Regex, RegexBuilder};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::shared::error::SiteToolsError;

/// One entry of the Vite manifest. Only the fields used here.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ManifestEntry {
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub css: Vec<String>,
}

pub type Manifest = BTreeMap<String, ManifestEntry>;

/// Compiled size cap for the asset pattern (the `regex` default)
const PATTERN_SIZE_LIMIT: usize = 10 * (1 << 20);

/// Source file name → built asset URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetLookup {
    map: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostbuildReport {
    pub manifest: PathBuf,
    pub patched: Vec<String>,
    pub skipped: Vec<String>,
}

/// Vite 5 writes `.vite/manifest.json`, older versions `manifest.json`.
pub fn find_manifest(dist: &Path) -> Result<PathBuf, SiteToolsError> {
    if !dist.is_dir() {
        return Err(SiteToolsError::DistNotFound(dist.to_path_buf()));
    }
    [dist.join(".vite").join("manifest.json"), dist.join("manifest.json")]
        .into_iter()
        .find(|p| p.exists())
        .ok_or_else(|| SiteToolsError::ManifestNotFound(dist.to_path_buf()))
}

pub fn read_manifest(path: &Path) -> Result<Manifest, SiteToolsError> {
    let contents = fs::read_to_string(path).map_err(|e| SiteToolsError::io(path, e))?;
    serde_json::from_str(&contents).map_err(|source| SiteToolsError::InvalidManifest {
        path: path.to_path_buf(),
        source,
    })
}

fn basename(key: &str) -> &str {
    key.rsplit('/').next().unwrap_or(key)
}

impl AssetLookup {
    /// `basename(key)` maps to the entry's file, `basename(key).css` to its first stylesheet.
    pub fn from_manifest(manifest: &Manifest) -> Self {
        let mut map = BTreeMap::new();
        for (key, entry) in manifest {
            let name = basename(key);
            if let Some(file) = &entry.file {
                map.insert(name.to_string(), format!("/dist/{}", file));
            }
            if let Some(css) = entry.css.first() {
                map.insert(format!("{}.css", name), format!("/dist/{}", css));
            }
        }
        Self { map }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.map.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Matches `/src/styles/<name>` or `/src/scripts/<name>` for any known name.
    /// Longer names come first so `main.js.css` is not cut short by `main.js`.
    fn pattern(&self) -> Result<Option<Regex>, regex::Error> {
        if self.map.is_empty() {
            return Ok(None);
        }
        let names: Vec<&str> = self.map.keys().map(String::as_str).collect();
        asset_pattern(&names, PATTERN_SIZE_LIMIT).map(Some)
    }

    /// Rewrite every known source reference in `html`. Returns the new text.
    pub fn patch_html(&self, html: &str) -> Result<String, SiteToolsError> {
        let Some(pattern) = self.pattern()? else {
            return Ok(html.to_string());
        };
        Ok(pattern
            .replace_all(html, |caps: &Captures| {
                self.get(&caps[1]).unwrap_or(&caps[0]).to_string()
            })
            .into_owned())
    }
}

fn asset_pattern(names: &[&str], size_limit: usize) -> Result<Regex, regex::Error> {
    let mut names = names.to_vec();
    names.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    let alternation = names
        .iter()
        .map(|n| regex::escape(n))
        .collect::<Vec<_>>()
        .join("|");
    RegexBuilder::new(&format!("/src/(?:styles|scripts)/({})", alternation))
        .size_limit(size_limit)
        .build()
}

/// Patch the configured pages under `root` using the manifest found in `dist`.
pub fn run_postbuild(root: &Path, dist: &Path, pages: &[String]) -> Result<PostbuildReport, SiteToolsError> {
    let manifest_path = find_manifest(dist)?;
    let manifest = read_manifest(&manifest_path)?;
    let lookup = AssetLookup::from_manifest(&manifest);
    tracing::debug!(
        "postbuild: {} assets from {}",
        lookup.len(),
        manifest_path.display()
    );

    let mut report = PostbuildReport {
        manifest: manifest_path,
        ..Default::default()
    };

    for page in pages {
        let page_path = root.join(page);
        if !page_path.exists() {
            tracing::warn!("Skipping missing page: {}", page_path.display());
            report.skipped.push(page.clone());
            continue;
        }

        let content = fs::read_to_string(&page_path).map_err(|e| SiteToolsError::io(&page_path, e))?;
        let patched = lookup.patch_html(&content)?;
        fs::write(&page_path, patched).map_err(|e| SiteToolsError::io(&page_path, e))?;

        tracing::info!("Patched {}", page);
        report.patched.push(page.clone());
    }

    Ok(report)
}
