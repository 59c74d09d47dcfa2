/// Plate carrée projection of the whole globe onto a pixel canvas.
///
/// Longitude and latitude get the same scale (equal aspect), and the 360 x 180
/// degree plot area is centered in the canvas. A 2:1 canvas is filled exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Equirectangular {
    /// Pixels per degree.
    scale: f64,
    offset_x: f64,
    offset_y: f64,
}

impl Equirectangular {
    pub fn fit(width: u32, height: u32) -> Self {
        let (width, height) = (f64::from(width), f64::from(height));
        let scale = (width / 360.0).min(height / 180.0);
        Self {
            scale,
            offset_x: (width - 360.0 * scale) / 2.0,
            offset_y: (height - 180.0 * scale) / 2.0,
        }
    }

    /// Pixel position of a longitude/latitude pair. Out-of-range input is clamped.
    pub fn project(&self, longitude: f64, latitude: f64) -> (f32, f32) {
        let longitude = longitude.clamp(-180.0, 180.0);
        let latitude = latitude.clamp(-90.0, 90.0);
        let x = self.offset_x + (longitude + 180.0) * self.scale;
        let y = self.offset_y + (90.0 - latitude) * self.scale;
        (x as f32, y as f32)
    }

    /// The plot area as `(x, y, width, height)` in pixels.
    pub fn plot_area(&self) -> (f32, f32, f32, f32) {
        (
            self.offset_x as f32,
            self.offset_y as f32,
            (360.0 * self.scale) as f32,
            (180.0 * self.scale) as f32,
        )
    }
}
