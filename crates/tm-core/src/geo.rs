//! Geographic coordinate type and distance utilities.
//!
//! `Waypoint` stores longitude first, matching the `[lng, lat]` order of
//! GeoJSON positions and of most web map APIs.  Coordinates are `f64` degrees
//! so a path's last waypoint can be reproduced bit-for-bit.

/// Mean Earth radius, metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A (longitude, latitude) pair in degrees.  No datum handling.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waypoint {
    pub lng: f64,
    pub lat: f64,
}

impl Waypoint {
    #[inline]
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// Haversine great-circle distance in metres.
    ///
    /// `h` is clamped to `[0, 1]` before the square roots, so identical or
    /// antipodal points never produce NaN from rounding error.
    pub fn distance_m(self, other: Waypoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lng = (other.lng - self.lng).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let h = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lng * 0.5).sin().powi(2);
        let h = h.clamp(0.0, 1.0);

        let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
        EARTH_RADIUS_M * c
    }

    /// Planar interpolation: longitude and latitude are blended independently,
    /// ignoring Earth curvature.  `t = 0` yields `a`, `t = 1` yields
    /// `a + (b - a)`.
    #[inline]
    pub fn lerp(a: Waypoint, b: Waypoint, t: f64) -> Waypoint {
        Waypoint {
            lng: a.lng + (b.lng - a.lng) * t,
            lat: a.lat + (b.lat - a.lat) * t,
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.lng.is_finite() && self.lat.is_finite()
    }
}

impl From<[f64; 2]> for Waypoint {
    /// `[lng, lat]`, the GeoJSON position order.
    #[inline]
    fn from([lng, lat]: [f64; 2]) -> Self {
        Self { lng, lat }
    }
}

impl From<Waypoint> for [f64; 2] {
    #[inline]
    fn from(p: Waypoint) -> Self {
        [p.lng, p.lat]
    }
}

impl std::fmt::Display for Waypoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:.6}, {:.6}]", self.lng, self.lat)
    }
}

/// Free-function form of [`Waypoint::distance_m`].
#[inline]
pub fn distance(a: Waypoint, b: Waypoint) -> f64 {
    a.distance_m(b)
}
