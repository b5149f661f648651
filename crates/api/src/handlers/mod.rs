//! Request handlers.
//!
//! Every handler opens its own database session through
//! [`deptstore_db::ConnectionProvider`], runs one repository call, releases
//! the session, and only then inspects the result. The session is dropped on
//! every path, including early returns and panics.

pub mod department;
pub mod diagnostics;
pub mod goods;
pub mod sales_view;
