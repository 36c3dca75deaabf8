pub mod scholarships;

/// Collection of scholarship records.
pub const SCHOLARSHIPS: &str = "/api/scholarships";
/// A single scholarship record.
pub const SCHOLARSHIP: &str = "/api/scholarships/{id}";
/// Liveness probe.
pub const HEALTH: &str = "/health";

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = String)
    )
)]
pub async fn health_check() -> &'static str {
    "Service is healthy"
}
