use contracts::enums::SitePage;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "sitetools.toml";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub site: SiteConfig,
    #[serde(default)]
    pub sitemap: SitemapConfig,
    #[serde(default)]
    pub postbuild: PostbuildConfig,
    #[serde(default)]
    pub assets: AssetsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    /// Scheme + host prepended to every sitemap URL, without trailing slash
    pub hostname: String,
    #[serde(default = "default_dist_dir")]
    pub dist_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SitemapConfig {
    #[serde(default = "default_ignored_dirs")]
    pub ignored_dirs: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PostbuildConfig {
    #[serde(default = "default_pages")]
    pub pages: Vec<String>,
}

/// Sources and outputs of the image tools, relative to the site root
#[derive(Debug, Deserialize, Clone)]
pub struct AssetsConfig {
    #[serde(default = "default_images_dir")]
    pub images_dir: String,
    #[serde(default = "default_public_dir")]
    pub public_dir: String,
    #[serde(default = "default_logo")]
    pub logo: String,
    #[serde(default = "default_image_width")]
    pub image_width: u32,
    #[serde(default = "default_webp_quality")]
    pub webp_quality: f32,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            images_dir: default_images_dir(),
            public_dir: default_public_dir(),
            logo: default_logo(),
            image_width: default_image_width(),
            webp_quality: default_webp_quality(),
        }
    }
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            ignored_dirs: default_ignored_dirs(),
        }
    }
}

impl Default for PostbuildConfig {
    fn default() -> Self {
        Self {
            pages: default_pages(),
        }
    }
}

fn default_dist_dir() -> String {
    "dist".to_string()
}

fn default_images_dir() -> String {
    "images".to_string()
}

fn default_public_dir() -> String {
    "public".to_string()
}

fn default_logo() -> String {
    "logo.png".to_string()
}

fn default_image_width() -> u32 {
    1200
}

fn default_webp_quality() -> f32 {
    80.0
}

fn default_ignored_dirs() -> Vec<String> {
    ["node_modules", ".git", "dist", "public"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_pages() -> Vec<String> {
    SitePage::all()
        .into_iter()
        .filter(SitePage::is_patched_by_default)
        .map(|p| p.file_name().to_string())
        .collect()
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[site]
hostname = "https://www.afrievolution.com"
dist_dir = "dist"
"#;

/// Load configuration
///
/// Search order:
/// 1. Explicit `--config` path (must exist)
/// 2. `sitetools.toml` in the site root
/// 3. Falls back to embedded default config
pub fn load_config(root: &Path, explicit: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(path) = explicit {
        tracing::info!("Loading config from: {}", path.display());
        return parse_file(path);
    }

    let config_path = root.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        tracing::info!("Loading config from: {}", config_path.display());
        return parse_file(&config_path);
    }

    tracing::debug!("{} not found at: {}", CONFIG_FILE_NAME, config_path.display());
    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

fn parse_file(path: &Path) -> anyhow::Result<Config> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("cannot read {}: {e}", path.display()))?;
    let config: Config = toml::from_str(&contents)?;
    Ok(config)
}

/// Resolve the dist directory: CLI override, else `site.dist_dir` relative to the root
pub fn dist_path(root: &Path, config: &Config, override_dir: Option<&Path>) -> PathBuf {
    let dist = override_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(&config.site.dist_dir));

    if dist.is_absolute() {
        dist
    } else {
        root.join(dist)
    }
}
