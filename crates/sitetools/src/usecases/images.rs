//! WebP renditions of the source images.
//!
//! Every `*.png`, `*.jpg` and `*.jpeg` in the images directory is scaled to
//! a fixed width (aspect ratio kept) and written as lossy WebP under
//! `<public>/images/<name>.webp`.

use image::imageops::FilterType;
use image::DynamicImage;
use std::fs;
use std::path::{Path, PathBuf};

use crate::shared::config::AssetsConfig;
use crate::shared::error::SiteToolsError;

const SOURCE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImagesReport {
    pub optimized: Vec<PathBuf>,
    pub failed: Vec<PathBuf>,
}

pub fn is_source_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| SOURCE_EXTENSIONS.iter().any(|s| e.eq_ignore_ascii_case(s)))
        .unwrap_or(false)
}

/// Output size for a `width`×`height` source scaled to `target_width`.
pub fn scaled_size(width: u32, height: u32, target_width: u32) -> (u32, u32) {
    if width == 0 {
        return (target_width, height.max(1));
    }
    let height = (height as f64 * target_width as f64 / width as f64).round() as u32;
    (target_width, height.max(1))
}

/// Source images directly in `dir`, sorted by name.
pub fn list_sources(dir: &Path) -> Result<Vec<PathBuf>, SiteToolsError> {
    let entries = fs::read_dir(dir).map_err(|e| SiteToolsError::io(dir, e))?;
    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| SiteToolsError::io(dir, e))?.path();
        if path.is_file() && is_source_image(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Encode `img` as lossy WebP at `quality` (0-100).
pub fn encode_webp(img: &DynamicImage, quality: f32, path: &Path) -> Result<Vec<u8>, SiteToolsError> {
    // the encoder only takes 8-bit RGB or RGBA
    let img = if img.color().has_alpha() {
        DynamicImage::ImageRgba8(img.to_rgba8())
    } else {
        DynamicImage::ImageRgb8(img.to_rgb8())
    };
    let encoder = webp::Encoder::from_image(&img).map_err(|e| SiteToolsError::Webp {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(encoder.encode(quality).to_vec())
}

fn optimize_one(source: &Path, out_dir: &Path, config: &AssetsConfig) -> Result<PathBuf, SiteToolsError> {
    let img = image::open(source).map_err(|e| SiteToolsError::image(source, e))?;
    let (width, height) = scaled_size(img.width(), img.height(), config.image_width);
    let resized = img.resize_exact(width, height, FilterType::Lanczos3);

    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let out = out_dir.join(format!("{}.webp", stem));
    let bytes = encode_webp(&resized, config.webp_quality, &out)?;
    fs::write(&out, bytes).map_err(|e| SiteToolsError::io(&out, e))?;
    Ok(out)
}

/// Convert every source image in `images_dir` into `out_dir`. A file that
/// fails is logged and reported; the rest still run.
pub fn optimize_images(
    images_dir: &Path,
    out_dir: &Path,
    config: &AssetsConfig,
) -> Result<ImagesReport, SiteToolsError> {
    if !images_dir.is_dir() {
        return Err(SiteToolsError::SourceNotFound(images_dir.to_path_buf()));
    }
    fs::create_dir_all(out_dir).map_err(|e| SiteToolsError::io(out_dir, e))?;

    let mut report = ImagesReport::default();
    for source in list_sources(images_dir)? {
        match optimize_one(&source, out_dir, config) {
            Ok(out) => {
                tracing::info!("Optimized {} -> {}", source.display(), out.display());
                report.optimized.push(out);
            }
            Err(e) => {
                tracing::error!("Failed to optimize {}: {}", source.display(), e);
                report.failed.push(source);
            }
        }
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_source_extensions() {
        assert!(is_source_image(Path::new("hero.png")));
        assert!(is_source_image(Path::new("team.JPG")));
        assert!(is_source_image(Path::new("office.jpeg")));
        assert!(!is_source_image(Path::new("logo.svg")));
        assert!(!is_source_image(Path::new("README")));
    }

    #[test]
    fn test_scaled_size_keeps_aspect_ratio() {
        assert_eq!(scaled_size(2400, 1600, 1200), (1200, 800));
        assert_eq!(scaled_size(600, 300, 1200), (1200, 600));
        assert_eq!(scaled_size(3000, 1, 1200), (1200, 1));
    }

    #[test]
    fn test_encode_webp_writes_riff_container() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(8, 8, Rgb([200, 40, 40])));
        let bytes = encode_webp(&img, 80.0, Path::new("x.webp")).unwrap();
        assert_eq!(&bytes[..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WEBP");
    }

    #[test]
    fn test_optimize_skips_broken_files() {
        let dir = tempfile::tempdir().unwrap();
        let images = dir.path().join("images");
        fs::create_dir_all(&images).unwrap();
        RgbImage::from_pixel(40, 20, Rgb([10, 10, 10]))
            .save(images.join("hero.png"))
            .unwrap();
        fs::write(images.join("broken.jpg"), b"not an image").unwrap();
        fs::write(images.join("notes.txt"), b"ignored").unwrap();

        let out = dir.path().join("public/images");
        let config = AssetsConfig {
            image_width: 100,
            ..Default::default()
        };
        let report = optimize_images(&images, &out, &config).unwrap();

        assert_eq!(report.optimized, vec![out.join("hero.webp")]);
        assert_eq!(report.failed, vec![images.join("broken.jpg")]);
        assert_eq!(image::image_dimensions(out.join("hero.webp")).unwrap(), (100, 50));
    }

    #[test]
    fn test_missing_images_dir_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = optimize_images(
            &dir.path().join("images"),
            &dir.path().join("out"),
            &AssetsConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, SiteToolsError::SourceNotFound(_)));
    }
}
