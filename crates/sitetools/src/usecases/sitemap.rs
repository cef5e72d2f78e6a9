//! `sitemap.xml` generation from the HTML pages of the site.

use chrono::{DateTime, SecondsFormat, Utc};
use std::fs;
use std::path::{Path, PathBuf};

use crate::shared::config::Config;
use crate::shared::error::SiteToolsError;
use crate::shared::xml;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapEntry {
    /// URL path starting with `/`
    pub path: String,
    pub lastmod: DateTime<Utc>,
}

/// Recursively collect `*.html` files under `dir`, skipping ignored directory names.
pub fn collect_html(dir: &Path, ignored_dirs: &[String]) -> Result<Vec<PathBuf>, SiteToolsError> {
    let mut results = Vec::new();
    let entries = fs::read_dir(dir).map_err(|e| SiteToolsError::io(dir, e))?;

    for entry in entries {
        let entry = entry.map_err(|e| SiteToolsError::io(dir, e))?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| SiteToolsError::io(&path, e))?;
        let name = entry.file_name().to_string_lossy().into_owned();

        if file_type.is_dir() {
            if ignored_dirs.iter().any(|d| *d == name) {
                continue;
            }
            results.extend(collect_html(&path, ignored_dirs)?);
        } else if file_type.is_file() && name.ends_with(".html") {
            results.push(path);
        }
    }
    Ok(results)
}

/// URL path for a page: root-relative with forward slashes, `index.html` stripped.
pub fn url_path(root: &Path, file: &Path) -> String {
    let rel = file.strip_prefix(root).unwrap_or(file);
    let rel = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");

    let path = format!("/{}", rel);
    match path.strip_suffix("/index.html") {
        Some(dir) => format!("{}/", dir),
        None => path,
    }
}

fn modified_at(file: &Path) -> Option<DateTime<Utc>> {
    fs::metadata(file)
        .and_then(|m| m.modified())
        .ok()
        .map(DateTime::<Utc>::from)
}

/// Entries for the given files, sorted by path. Files without a readable
/// mtime get `now`.
pub fn build_entries(root: &Path, files: &[PathBuf], now: DateTime<Utc>) -> Vec<SitemapEntry> {
    let mut entries: Vec<_> = files
        .iter()
        .map(|f| SitemapEntry {
            path: url_path(root, f),
            lastmod: modified_at(f).unwrap_or(now),
        })
        .collect();
    entries.sort_by(|a, b| a.path.cmp(&b.path));
    entries
}

pub fn format_lastmod(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn render_sitemap(hostname: &str, entries: &[SitemapEntry]) -> String {
    let hostname = hostname.trim_end_matches('/');
    let urls = entries
        .iter()
        .map(|e| {
            format!(
                "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n  </url>",
                xml::escape(&format!("{}{}", hostname, e.path)),
                format_lastmod(&e.lastmod)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n\
         {}\n\
         </urlset>",
        urls
    )
}

/// Scan `root`, write `<dist>/sitemap.xml` and return its path.
pub fn generate_sitemap(root: &Path, dist: &Path, config: &Config) -> Result<PathBuf, SiteToolsError> {
    fs::create_dir_all(dist).map_err(|e| SiteToolsError::io(dist, e))?;

    let files = collect_html(root, &config.sitemap.ignored_dirs)?;
    tracing::debug!("sitemap: {} html files under {}", files.len(), root.display());

    let entries = build_entries(root, &files, Utc::now());
    let sitemap = render_sitemap(&config.site.hostname, &entries);

    let out = dist.join("sitemap.xml");
    fs::write(&out, sitemap).map_err(|e| SiteToolsError::io(&out, e))?;
    tracing::info!("Wrote {} ({} urls)", out.display(), entries.len());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_url_path() {
        let root = Path::new("/site");
        assert_eq!(url_path(root, Path::new("/site/index.html")), "/");
        assert_eq!(url_path(root, Path::new("/site/services.html")), "/services.html");
        assert_eq!(url_path(root, Path::new("/site/legal/index.html")), "/legal/");
        assert_eq!(url_path(root, Path::new("/site/legal/terms.html")), "/legal/terms.html");
        assert_eq!(url_path(root, Path::new("/site/reindex.html")), "/reindex.html");
    }

    #[test]
    fn test_format_lastmod_matches_iso_string() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_lastmod(&ts), "2024-03-15T14:02:26.000Z");
    }

    #[test]
    fn test_render_sitemap() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let xml = render_sitemap(
            "https://example.org/",
            &[
                SitemapEntry { path: "/".into(), lastmod: ts },
                SitemapEntry { path: "/a&b.html".into(), lastmod: ts },
            ],
        );
        assert_eq!(
            xml,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n\
             \x20 <url>\n    <loc>https://example.org/</loc>\n    <lastmod>2024-01-02T03:04:05.000Z</lastmod>\n  </url>\n\
             \x20 <url>\n    <loc>https://example.org/a&amp;b.html</loc>\n    <lastmod>2024-01-02T03:04:05.000Z</lastmod>\n  </url>\n\
             </urlset>"
        );
    }
}
