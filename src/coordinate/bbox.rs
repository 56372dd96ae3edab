//! Bounding box structure for defining regions

use super::point::Point;
use crate::coordinate::errors::{ProjectionError, ProjResult};

/// A bounding box in a coordinate system
#[derive(Debug, Clone, Copy)]
pub struct BoundingBox {
    /// Minimum X coordinate
    pub min_x: f64,
    /// Minimum Y coordinate
    pub min_y: f64,
    /// Maximum X coordinate
    pub max_x: f64,
    /// Maximum Y coordinate
    pub max_y: f64,
    /// EPSG code of the coordinate system
    pub epsg: Option<u32>,
}

impl BoundingBox {
    /// Create a new bounding box
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        BoundingBox {
            min_x,
            min_y,
            max_x,
            max_y,
            epsg: None,
        }
    }

    /// Create a new bounding box with coordinate system
    pub fn new_with_crs(min_x: f64, min_y: f64, max_x: f64, max_y: f64, epsg: u32) -> Self {
        BoundingBox {
            min_x,
            min_y,
            max_x,
            max_y,
            epsg: Some(epsg),
        }
    }

    /// Parse a bounding box from a string (format: "minx,miny,maxx,maxy")
    pub fn from_string(bbox_str: &str) -> ProjResult<Self> {
        let parts: Vec<&str> = bbox_str.split(',').collect();
        if parts.len() != 4 {
            return Err(ProjectionError::GenericError(
                "Bounding box must have 4 comma-separated values".to_string()));
        }

        let min_x = parts[0].trim().parse::<f64>()
            .map_err(|_| ProjectionError::GenericError("Invalid min_x value".to_string()))?;
        let min_y = parts[1].trim().parse::<f64>()
            .map_err(|_| ProjectionError::GenericError("Invalid min_y value".to_string()))?;
        let max_x = parts[2].trim().parse::<f64>()
            .map_err(|_| ProjectionError::GenericError("Invalid max_x value".to_string()))?;
        let max_y = parts[3].trim().parse::<f64>()
            .map_err(|_| ProjectionError::GenericError("Invalid max_y value".to_string()))?;

        Ok(BoundingBox::new(min_x, min_y, max_x, max_y))
    }

    /// Get the width of the bounding box
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Get the height of the bounding box
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Get the center point of the bounding box
    pub fn center(&self) -> Point {
        Point::new(
            self.min_x + self.width() / 2.0,
            self.min_y + self.height() / 2.0,
        )
    }

    /// Check if this bounding box contains a point
    pub fn contains(&self, point: &Point) -> bool {
        point.x >= self.min_x && point.x <= self.max_x &&
            point.y >= self.min_y && point.y <= self.max_y
    }
}
