//! # Map Renderer
//!
//! Draws a [`PointLayer`] over a [`BoundaryLayer`] and hands back the finished
//! raster as a [`RenderedMap`]. All visual settings come from the
//! [`RenderStyle`] the renderer was built with.

use std::io;
use std::path::{Path, PathBuf};

use ipmapper_common::config::{RenderStyle, Rgba};
use ipmapper_common::geo::coordinates::CoordinateCollection;
use thiserror::Error;
use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};
use tracing::debug;

pub mod boundaries;
pub mod projection;

pub use boundaries::BoundaryLayer;
use projection::Equirectangular;

const FIGURE_BACKGROUND: Rgba = (0xFF, 0xFF, 0xFF, 0xFF);

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("cannot read boundary layer {}", .path.display())]
    ReadBoundaries {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("boundary layer is not a valid GeoJSON FeatureCollection")]
    InvalidBoundaries(#[from] serde_json::Error),
    #[error("cannot allocate a {width}x{height} canvas")]
    Canvas { width: u32, height: u32 },
    #[error("cannot encode map image")]
    Encode(#[source] io::Error),
    #[error("cannot write map image {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Scatter points as parallel longitude and latitude sequences.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointLayer {
    points: Vec<(f64, f64)>,
}

impl PointLayer {
    /// Pairs `longitudes[i]` with `latitudes[i]`.
    ///
    /// # Panics
    /// If the two slices differ in length. That can only come from a caller bug.
    pub fn from_xy(longitudes: &[f64], latitudes: &[f64]) -> Self {
        assert_eq!(
            longitudes.len(),
            latitudes.len(),
            "point layer needs one latitude per longitude"
        );
        Self {
            points: longitudes.iter().copied().zip(latitudes.iter().copied()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl From<&CoordinateCollection> for PointLayer {
    fn from(coordinates: &CoordinateCollection) -> Self {
        Self::from_xy(coordinates.longitudes(), coordinates.latitudes())
    }
}

/// The composed figure, kept in memory until it is saved.
pub struct RenderedMap {
    pixmap: Pixmap,
}

impl RenderedMap {
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    pub fn encode_png(&self) -> Result<Vec<u8>, RenderError> {
        self.pixmap
            .encode_png()
            .map_err(|e| RenderError::Encode(io::Error::other(e.to_string())))
    }

    pub fn save_png(&self, path: &Path) -> Result<(), RenderError> {
        self.pixmap.save_png(path).map_err(|e| RenderError::Write {
            path: path.to_path_buf(),
            source: io::Error::other(e.to_string()),
        })
    }
}

pub struct MapRenderer {
    style: RenderStyle,
}

impl MapRenderer {
    pub fn new(style: RenderStyle) -> Self {
        Self { style }
    }

    pub fn render(
        &self,
        boundaries: &BoundaryLayer,
        points: &PointLayer,
    ) -> Result<RenderedMap, RenderError> {
        let (width, height) = self.style.pixel_size();
        let mut pixmap = Pixmap::new(width, height).ok_or(RenderError::Canvas { width, height })?;
        let projection = Equirectangular::fit(width, height);

        pixmap.fill(color(FIGURE_BACKGROUND));
        self.draw_ocean(&mut pixmap, &projection);
        self.draw_boundaries(&mut pixmap, &projection, boundaries);
        self.draw_points(&mut pixmap, &projection, points);

        debug!(
            "Rendered {} polygons and {} points on a {width}x{height} canvas",
            boundaries.len(),
            points.len()
        );
        Ok(RenderedMap { pixmap })
    }

    fn draw_ocean(&self, pixmap: &mut Pixmap, projection: &Equirectangular) {
        let (x, y, w, h) = projection.plot_area();
        if let Some(rect) = Rect::from_xywh(x, y, w, h) {
            pixmap.fill_rect(rect, &solid(self.style.ocean_color), Transform::identity(), None);
        }
    }

    fn draw_boundaries(
        &self,
        pixmap: &mut Pixmap,
        projection: &Equirectangular,
        boundaries: &BoundaryLayer,
    ) {
        let land = solid(self.style.land_color);
        let edge = solid(self.style.edge_color);
        let stroke = Stroke {
            width: self.style.points_to_pixels(self.style.edge_width_pt),
            ..Default::default()
        };

        for polygon in boundaries.polygons() {
            let mut builder = PathBuilder::new();
            for ring in &polygon.rings {
                let mut vertices = ring.iter().map(|&(lon, lat)| projection.project(lon, lat));
                if let Some((x, y)) = vertices.next() {
                    builder.move_to(x, y);
                    for (x, y) in vertices {
                        builder.line_to(x, y);
                    }
                    builder.close();
                }
            }

            // Degenerate polygons produce no path.
            let Some(path) = builder.finish() else {
                continue;
            };
            pixmap.fill_path(&path, &land, FillRule::EvenOdd, Transform::identity(), None);
            if stroke.width > 0.0 {
                pixmap.stroke_path(&path, &edge, &stroke, Transform::identity(), None);
            }
        }
    }

    fn draw_points(&self, pixmap: &mut Pixmap, projection: &Equirectangular, points: &PointLayer) {
        let (r, g, b, a) = self.style.marker_color;
        let alpha = (f32::from(a) * self.style.marker_alpha.clamp(0.0, 1.0)).round() as u8;
        let marker = solid((r, g, b, alpha));
        let radius = self.style.marker_radius_px();

        for &(longitude, latitude) in &points.points {
            let (x, y) = projection.project(longitude, latitude);
            if let Some(circle) = PathBuilder::from_circle(x, y, radius) {
                pixmap.fill_path(&circle, &marker, FillRule::Winding, Transform::identity(), None);
            }
        }
    }
}

fn color((r, g, b, a): Rgba) -> Color {
    Color::from_rgba8(r, g, b, a)
}

fn solid(rgba: Rgba) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(color(rgba));
    paint.anti_alias = true;
    paint
}
