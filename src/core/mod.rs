// Core algorithm exports
pub mod distance;
pub mod filters;
pub mod matcher;
pub mod pagination;
pub mod scoring;

pub use distance::{calculate_bounding_box, haversine_distance, is_within_bounding_box};
pub use filters::{discover_opportunities, DiscoveryFilters, GeoFilter, DEFAULT_RADIUS_KM};
pub use matcher::{rank_opportunities, RankedMatches, MIN_MATCH_SCORE};
pub use pagination::{paginate, Page, Pagination, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
pub use scoring::{calculate_match_score, MatchScore};
