use std::path::PathBuf;

/// Database location used when neither a flag nor `IPMAPPER_DATABASE` is given.
pub const DEFAULT_DATABASE_PATH: &str = "lookup/GeoLite2-City.mmdb";
/// Country boundary GeoJSON used when neither a flag nor `IPMAPPER_BOUNDARIES` is given.
pub const DEFAULT_BOUNDARIES_PATH: &str = "lookup/naturalearth_lowres.geojson";
pub const DEFAULT_OUTPUT_PATH: &str = "map-image.png";

/// An 8-bit RGBA color.
pub type Rgba = (u8, u8, u8, u8);

/// What to do with an input token that is not an IP address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedPolicy {
    /// Skip the token, count it and keep going.
    #[default]
    Skip,
    /// Stop the run with an error.
    Abort,
}

pub struct Config {
    /// Offline MaxMind database (`.mmdb`) used for every lookup.
    pub database: PathBuf,
    /// GeoJSON FeatureCollection with the country polygons drawn under the points.
    pub boundaries: PathBuf,
    /// Where the PNG ends up.
    pub output: PathBuf,
    pub malformed: MalformedPolicy,
    /// 0 prints everything, 1 hides headers and progress, 2 and up prints errors only.
    pub quiet: u8,
    pub style: RenderStyle,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: PathBuf::from(DEFAULT_DATABASE_PATH),
            boundaries: PathBuf::from(DEFAULT_BOUNDARIES_PATH),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            malformed: MalformedPolicy::default(),
            quiet: 0,
            style: RenderStyle::default(),
        }
    }
}

/// Visual configuration handed to the map renderer.
///
/// Sizes are given in typographic points and inches so the figure keeps its
/// proportions when only `dpi` changes.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderStyle {
    /// Figure width in inches.
    pub width_in: f32,
    /// Figure height in inches.
    pub height_in: f32,
    pub dpi: f32,
    /// Background color, visible wherever there is no land.
    pub ocean_color: Rgba,
    pub land_color: Rgba,
    pub edge_color: Rgba,
    /// Country outline width in points.
    pub edge_width_pt: f32,
    pub marker_color: Rgba,
    /// Marker opacity in `0.0..=1.0`, applied on top of `marker_color`.
    pub marker_alpha: f32,
    /// Marker area in square points.
    pub marker_size_pt2: f32,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            width_in: 16.0,
            height_in: 8.0,
            dpi: 300.0,
            ocean_color: (0xA8, 0xC5, 0xDD, 0xFF),
            land_color: (0xED, 0xC9, 0xAF, 0xFF),
            edge_color: (0x00, 0x00, 0x00, 0xFF),
            edge_width_pt: 1.0,
            marker_color: (0x06, 0x52, 0xFF, 0xFF),
            marker_alpha: 0.3,
            marker_size_pt2: 1.0,
        }
    }
}

impl RenderStyle {
    /// Output size in pixels.
    pub fn pixel_size(&self) -> (u32, u32) {
        let width = (self.width_in * self.dpi).round().max(1.0) as u32;
        let height = (self.height_in * self.dpi).round().max(1.0) as u32;
        (width, height)
    }

    pub fn points_to_pixels(&self, points: f32) -> f32 {
        points * self.dpi / 72.0
    }

    /// Radius in pixels of a circle whose area is `marker_size_pt2`.
    pub fn marker_radius_px(&self) -> f32 {
        let radius_pt = (self.marker_size_pt2 / std::f32::consts::PI).sqrt();
        self.points_to_pixels(radius_pt)
    }
}
