use ipnt_domain::constants::{COVERAGE_KM2_PER_SQ_DEGREE, MIN_COVERAGE_KM2};
use ipnt_domain::models::{Location, Node};

/// Axis-aligned bounding box of node positions.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Bounds {
    min: Location,
    max: Location,
}

impl Bounds {
    const fn at(point: Location) -> Self {
        Self { min: point, max: point }
    }

    fn extend(self, point: Location) -> Self {
        Self {
            min: Location { lat: self.min.lat.min(point.lat), lng: self.min.lng.min(point.lng) },
            max: Location { lat: self.max.lat.max(point.lat), lng: self.max.lng.max(point.lng) },
        }
    }

    fn square_degrees(self) -> f64 {
        (self.max.lat - self.min.lat) * (self.max.lng - self.min.lng)
    }
}

/// Approximate coverage in km² from the bounding box of located nodes.
///
/// Nodes without both coordinates are ignored. Returns 0 when no node is located,
/// otherwise the box area scaled by [`COVERAGE_KM2_PER_SQ_DEGREE`], rounded half to
/// even and never below [`MIN_COVERAGE_KM2`].
pub fn coverage_area<'a>(nodes: impl IntoIterator<Item = &'a Node>) -> u64 {
    let mut points = nodes.into_iter().filter_map(Node::location);
    let Some(first) = points.next() else {
        return 0;
    };

    let bounds = points.fold(Bounds::at(first), Bounds::extend);
    let area = (bounds.square_degrees() * COVERAGE_KM2_PER_SQ_DEGREE).round_ties_even();

    // Spans are non-negative, so the cast only saturates on absurd inputs.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let area = area as u64;
    area.max(MIN_COVERAGE_KM2)
}
