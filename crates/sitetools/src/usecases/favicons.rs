//! Favicon set generated from the site logo.

use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::imageops::FilterType;
use image::{DynamicImage, ExtendedColorType, ImageFormat};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::shared::error::SiteToolsError;

/// PNG icons written next to `favicon.ico`: (file name, edge in px)
pub const PNG_ICONS: [(&str, u32); 3] = [
    ("favicon-16x16.png", 16),
    ("favicon-32x32.png", 32),
    ("apple-touch-icon.png", 180),
];

/// Sizes bundled into `favicon.ico`
pub const ICO_SIZES: [u32; 2] = [16, 32];

pub const ICO_NAME: &str = "favicon.ico";

/// Square icon of the given edge. The logo is scaled to cover and centre-cropped.
pub fn square_icon(logo: &DynamicImage, edge: u32) -> DynamicImage {
    logo.resize_to_fill(edge, edge, FilterType::Lanczos3)
}

fn write_ico(logo: &DynamicImage, path: &Path) -> Result<(), SiteToolsError> {
    let frames = ICO_SIZES
        .iter()
        .map(|&edge| {
            let icon = square_icon(logo, edge).to_rgba8();
            IcoFrame::as_png(icon.as_raw(), edge, edge, ExtendedColorType::Rgba8)
        })
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| SiteToolsError::image(path, e))?;

    let file = File::create(path).map_err(|e| SiteToolsError::io(path, e))?;
    IcoEncoder::new(BufWriter::new(file))
        .encode_images(&frames)
        .map_err(|e| SiteToolsError::image(path, e))
}

/// Write the PNG icons and `favicon.ico` from `logo` into `out_dir`.
/// Returns the written files in order.
pub fn generate_favicons(logo: &Path, out_dir: &Path) -> Result<Vec<PathBuf>, SiteToolsError> {
    if !logo.is_file() {
        return Err(SiteToolsError::SourceNotFound(logo.to_path_buf()));
    }
    fs::create_dir_all(out_dir).map_err(|e| SiteToolsError::io(out_dir, e))?;

    let source = image::open(logo).map_err(|e| SiteToolsError::image(logo, e))?;
    let mut written = Vec::with_capacity(PNG_ICONS.len() + 1);

    for (name, edge) in PNG_ICONS {
        let path = out_dir.join(name);
        square_icon(&source, edge)
            .save_with_format(&path, ImageFormat::Png)
            .map_err(|e| SiteToolsError::image(&path, e))?;
        tracing::debug!("favicons: {} ({}x{})", name, edge, edge);
        written.push(path);
    }

    let ico = out_dir.join(ICO_NAME);
    write_ico(&source, &ico)?;
    written.push(ico);

    tracing::info!("Favicons generated in {}", out_dir.display());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, Rgba, RgbaImage};

    fn logo(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, Rgba([20, 120, 200, 255])))
    }

    #[test]
    fn test_square_icon_crops_wide_logo() {
        let icon = square_icon(&logo(300, 100), 32);
        assert_eq!(icon.dimensions(), (32, 32));
    }

    #[test]
    fn test_generate_writes_full_set() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("logo.png");
        logo(256, 256).save(&src).unwrap();
        let out = dir.path().join("public");

        let written = generate_favicons(&src, &out).unwrap();

        let names: Vec<_> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec!["favicon-16x16.png", "favicon-32x32.png", "apple-touch-icon.png", "favicon.ico"]
        );
        assert_eq!(image::image_dimensions(out.join("favicon-16x16.png")).unwrap(), (16, 16));
        assert_eq!(image::image_dimensions(out.join("apple-touch-icon.png")).unwrap(), (180, 180));

        let ico = fs::read(out.join(ICO_NAME)).unwrap();
        // reserved = 0, type = 1 (icon), two images
        assert_eq!(&ico[..6], &[0, 0, 1, 0, 2, 0]);
    }

    #[test]
    fn test_missing_logo_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = generate_favicons(&dir.path().join("logo.png"), dir.path()).unwrap_err();
        assert!(matches!(err, SiteToolsError::SourceNotFound(_)));
    }
}
