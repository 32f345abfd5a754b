use crate::core::distance::{
    calculate_bounding_box, haversine_distance, is_within_bounding_box, round_km,
};
use crate::models::{DiscoveredOpportunity, Opportunity};

/// Radius applied when a query supplies an origin without an explicit radius
pub const DEFAULT_RADIUS_KM: f64 = 10.0;

/// Geo-radius constraint around a query origin
#[derive(Debug, Clone, Copy)]
pub struct GeoFilter {
    pub latitude: f64,
    pub longitude: f64,
    pub radius_km: f64,
}

impl GeoFilter {
    pub fn new(latitude: f64, longitude: f64, radius_km: Option<f64>) -> Self {
        Self {
            latitude,
            longitude,
            radius_km: radius_km.unwrap_or(DEFAULT_RADIUS_KM),
        }
    }
}

/// Optional, independently applicable discovery constraints.
///
/// The active-only restriction is always applied and is not part of the
/// query surface.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryFilters {
    /// Keep opportunities whose required skills intersect this set (OR semantics)
    pub skills: Option<Vec<String>>,
    /// Keep opportunities within `radius_km` of the origin
    pub geo: Option<GeoFilter>,
}

/// Filter the opportunity collection for browsing.
///
/// Preserves the input order (no implicit sort). When a geo filter is
/// active each surviving item is annotated with its 1-decimal distance
/// from the origin. Every item is enriched with its organization's
/// display name via `resolve_org`; unresolvable organizations get the
/// literal "unknown" rather than failing.
pub fn discover_opportunities<F>(
    opportunities: &[Opportunity],
    filters: &DiscoveryFilters,
    resolve_org: F,
) -> Vec<DiscoveredOpportunity>
where
    F: Fn(u64) -> Option<String>,
{
    let bbox = filters
        .geo
        .map(|geo| calculate_bounding_box(geo.latitude, geo.longitude, geo.radius_km));

    opportunities
        .iter()
        .filter(|op| op.is_active())
        .filter(|op| match &filters.skills {
            Some(wanted) => op.required_skills.iter().any(|s| wanted.contains(s)),
            None => true,
        })
        .filter_map(|op| {
            let distance_km = match filters.geo {
                Some(geo) => {
                    // Cheap bounding-box rejection before the exact check;
                    // the box is a superset of the radius circle
                    if let Some(bbox) = &bbox {
                        if !is_within_bounding_box(op.latitude, op.longitude, bbox) {
                            return None;
                        }
                    }

                    let distance = haversine_distance(
                        geo.latitude,
                        geo.longitude,
                        op.latitude,
                        op.longitude,
                    );
                    if distance > geo.radius_km {
                        return None;
                    }
                    Some(round_km(distance))
                }
                None => None,
            };

            Some(DiscoveredOpportunity {
                opportunity: op.clone(),
                organization_name: resolve_org(op.organization_id)
                    .unwrap_or_else(|| "unknown".to_string()),
                distance_km,
            })
        })
        .collect()
}
