/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the pool is an `Arc` internally.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: salonkit_db::DbPool,
}
