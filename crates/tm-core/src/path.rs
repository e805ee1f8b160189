//! Ordered waypoint sequences.
//!
//! A [`Path`] always holds at least one waypoint and every coordinate is
//! finite.  Consecutive waypoints may coincide; callers that divide by a
//! segment length must handle the zero-length case themselves.

use crate::{CoreError, CoreResult, Waypoint};

/// An ordered, non-empty sequence of waypoints.  Insertion order is the
/// traversal order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Path {
    waypoints: Vec<Waypoint>,
}

impl Path {
    /// Validate and wrap `waypoints`.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if `waypoints` is empty or any coordinate is NaN or
    /// infinite.
    pub fn new(waypoints: Vec<Waypoint>) -> CoreResult<Self> {
        if waypoints.is_empty() {
            return Err(CoreError::InvalidInput("path has no waypoints".into()));
        }
        if let Some(i) = waypoints.iter().position(|p| !p.is_finite()) {
            return Err(CoreError::InvalidInput(format!(
                "waypoint {i} has a non-finite coordinate"
            )));
        }
        Ok(Self { waypoints })
    }

    /// Build from `[lng, lat]` pairs.
    pub fn from_lng_lat(coords: &[[f64; 2]]) -> CoreResult<Self> {
        Self::new(coords.iter().copied().map(Waypoint::from).collect())
    }

    #[inline]
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Number of segments (`len - 1`).
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.waypoints.len() - 1
    }

    #[inline]
    pub fn first(&self) -> Waypoint {
        self.waypoints[0]
    }

    #[inline]
    pub fn last(&self) -> Waypoint {
        self.waypoints[self.waypoints.len() - 1]
    }

    /// Endpoints of segment `i`, or `None` past the last segment.
    #[inline]
    pub fn segment(&self, i: usize) -> Option<(Waypoint, Waypoint)> {
        Some((*self.waypoints.get(i)?, *self.waypoints.get(i + 1)?))
    }

    /// Haversine length of every segment, in order.
    pub fn segment_lengths_m(&self) -> Vec<f64> {
        self.waypoints
            .windows(2)
            .map(|w| w[0].distance_m(w[1]))
            .collect()
    }

    /// Running distance from the first waypoint to each waypoint.
    ///
    /// Same length as the path; the first entry is `0.0` and the last equals
    /// [`length_m`][Self::length_m].
    pub fn cumulative_m(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.waypoints.len());
        let mut total = 0.0;
        out.push(total);
        for len in self.segment_lengths_m() {
            total += len;
            out.push(total);
        }
        out
    }

    /// Total Haversine length in metres.  `0.0` for a single waypoint.
    pub fn length_m(&self) -> f64 {
        path_length(&self.waypoints)
    }

    /// Read a GeoJSON file and return its first `LineString`.
    ///
    /// # Errors
    ///
    /// `Io` if the file cannot be read, otherwise as [`Path::from_geojson_str`].
    #[cfg(feature = "geojson")]
    pub fn from_geojson_file(file: &std::path::Path) -> CoreResult<Self> {
        let text = std::fs::read_to_string(file)?;
        Self::from_geojson_str(&text)
    }

    /// Parse a GeoJSON document and return the first `LineString` found.
    ///
    /// Accepts a bare geometry, a `Feature`, or a `FeatureCollection`.
    /// Positions are read as `[lng, lat, ...]`; extra ordinates are ignored.
    #[cfg(feature = "geojson")]
    pub fn from_geojson_str(text: &str) -> CoreResult<Self> {
        use geojson::{GeoJson, Value};

        let doc: GeoJson = text
            .parse()
            .map_err(|e: geojson::Error| CoreError::Parse(e.to_string()))?;

        let geometries: Vec<&geojson::Geometry> = match &doc {
            GeoJson::Geometry(g) => vec![g],
            GeoJson::Feature(f) => f.geometry.iter().collect(),
            GeoJson::FeatureCollection(fc) => fc
                .features
                .iter()
                .filter_map(|f| f.geometry.as_ref())
                .collect(),
        };

        let line = geometries
            .into_iter()
            .find_map(|g| match &g.value {
                Value::LineString(coords) => Some(coords),
                _ => None,
            })
            .ok_or_else(|| CoreError::Parse("no LineString geometry found".into()))?;

        let mut waypoints = Vec::with_capacity(line.len());
        for (i, pos) in line.iter().enumerate() {
            match pos.as_slice() {
                [lng, lat, ..] => waypoints.push(Waypoint::new(*lng, *lat)),
                _ => {
                    return Err(CoreError::Parse(format!(
                        "position {i} has fewer than two ordinates"
                    )));
                }
            }
        }
        Self::new(waypoints)
    }
}

/// Sum of Haversine distances over consecutive pairs.  `0.0` for fewer than
/// two waypoints.
pub fn path_length(waypoints: &[Waypoint]) -> f64 {
    waypoints.windows(2).map(|w| w[0].distance_m(w[1])).sum()
}
