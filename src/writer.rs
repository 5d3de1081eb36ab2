use std::{
    fs::{self, File},
    io::BufWriter,
    path::Path,
};

use image::{ImageFormat, RgbaImage};
use scopeguard::{ScopeGuard, guard};

use crate::error::SckResult;

/// File name of the capture covering the whole desktop.
pub const ALL_FILE_NAME: &str = "all.png";

/// File name of a single display capture, e.g. `0_1920x1080.png`.
pub fn display_file_name(index: usize, width: i32, height: i32) -> String {
    format!("{index}_{width}x{height}.png")
}

/// Writes `image` to `path` as PNG. A partially written file is removed on failure.
pub fn save_png(image: &RgbaImage, path: &Path) -> SckResult<()> {
    let file = File::create(path)?;
    let cleanup = guard(path, |path| {
        if let Err(err) = fs::remove_file(path) {
            log::warn!("remove {} failed: {err}", path.display());
        }
    });

    let mut writer = BufWriter::new(file);
    image.write_to(&mut writer, ImageFormat::Png)?;
    writer.into_inner().map_err(|err| err.into_error())?.sync_all()?;

    ScopeGuard::into_inner(cleanup);
    log::debug!(
        "wrote {}x{} image to {}",
        image.width(),
        image.height(),
        path.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::env;

    use fs_extra::dir;
    use image::Rgba;

    use super::*;
    use crate::error::SckError;

    #[test]
    fn display_file_names() {
        assert_eq!(display_file_name(0, 1920, 1080), "0_1920x1080.png");
        assert_eq!(display_file_name(12, 800, 600), "12_800x600.png");
        assert_eq!(ALL_FILE_NAME, "all.png");
    }

    #[test]
    fn save_png_writes_readable_file() {
        let out_dir = env::temp_dir().join(format!("sckshot-writer-{}", std::process::id()));
        dir::create_all(&out_dir, true).unwrap();

        let image = RgbaImage::from_pixel(3, 2, Rgba([10, 20, 30, 255]));
        let path = out_dir.join(display_file_name(0, 3, 2));
        save_png(&image, &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded, image);

        dir::remove(&out_dir).unwrap();
    }

    #[test]
    fn save_png_into_missing_dir_fails() {
        let path = env::temp_dir()
            .join(format!("sckshot-missing-{}", std::process::id()))
            .join("nested")
            .join(ALL_FILE_NAME);

        let image = RgbaImage::new(1, 1);
        let result = save_png(&image, &path);

        assert!(matches!(result, Err(SckError::Io(_))));
        assert!(!path.exists());
    }
}
