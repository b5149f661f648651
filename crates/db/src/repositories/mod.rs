//! Repository layer.
//!
//! Each repository is a zero-sized struct whose async methods take the
//! caller's `&mut PgConnection` as the first argument. Opening and releasing
//! the session is the caller's job.

pub mod department_repo;
pub mod diagnostics_repo;
pub mod goods_repo;
pub mod sales_view_repo;

pub use department_repo::DepartmentRepo;
pub use diagnostics_repo::DiagnosticsRepo;
pub use goods_repo::GoodsRepo;
pub use sales_view_repo::SalesViewRepo;
