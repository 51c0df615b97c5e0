//! Geographic primitives used to restrict a timeline query to an area.

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
///
/// # Examples
///
/// ```
/// use mountainhub::LatLon;
///
/// let loveland_pass = LatLon(39.6637, -105.8794);
/// assert_eq!(loveland_pass.0, 39.6637); // Latitude
/// assert_eq!(loveland_pass.1, -105.8794); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);

/// A rectangular geographic filter expressed as min/max latitude and longitude.
///
/// The MountainHub API receives it as a north-east and a south-west corner.
///
/// # Examples
///
/// ```
/// use mountainhub::{BoundingBox, LatLon};
///
/// let front_range = BoundingBox::from_corners(LatLon(39.0, -106.5), LatLon(40.5, -105.0));
/// assert_eq!(front_range.max_lat, 40.5);
/// assert_eq!(front_range.min_lon, -106.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    pub fn new(min_lat: f64, max_lat: f64, min_lon: f64, max_lon: f64) -> Self {
        Self {
            min_lat,
            max_lat,
            min_lon,
            max_lon,
        }
    }

    /// Builds a box from its south-west and north-east corners.
    pub fn from_corners(south_west: LatLon, north_east: LatLon) -> Self {
        Self::new(south_west.0, north_east.0, south_west.1, north_east.1)
    }

    pub fn north_east(&self) -> LatLon {
        LatLon(self.max_lat, self.max_lon)
    }

    pub fn south_west(&self) -> LatLon {
        LatLon(self.min_lat, self.min_lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_round_trip() {
        let bbox = BoundingBox::from_corners(LatLon(38.5, -107.25), LatLon(41.0, -104.0));
        assert_eq!(bbox.south_west(), LatLon(38.5, -107.25));
        assert_eq!(bbox.north_east(), LatLon(41.0, -104.0));
        assert_eq!(bbox, BoundingBox::new(38.5, 41.0, -107.25, -104.0));
    }
}
