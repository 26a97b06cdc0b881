use crate::model::TerritoryError;
use image::RgbImage;
use std::path::Path;

pub fn write_heatmap(path: &Path, image: &RgbImage) -> Result<(), TerritoryError> {
    let filename = path.to_string_lossy().to_string();
    image
        .save(path)
        .map_err(|e| TerritoryError::ImageWriteError(filename.clone(), e))?;
    log::info!(
        "wrote {}x{} heatmap to {filename}",
        image.width(),
        image.height()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::write_heatmap;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_png_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("heatmap.png");
        let image = RgbImage::from_pixel(3, 2, Rgb([100, 100, 100]));
        write_heatmap(&path, &image).unwrap();
        let read = image::open(&path).unwrap().to_rgb8();
        assert_eq!(read.dimensions(), (3, 2));
        assert_eq!(*read.get_pixel(2, 1), Rgb([100, 100, 100]));
    }
}
