use deptstore_db::ConnectionProvider;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Holds no mutable data. Each handler opens its own database session
/// through `db`.
#[derive(Clone)]
pub struct AppState {
    /// Opens a fresh database session per call.
    pub db: ConnectionProvider,
}
