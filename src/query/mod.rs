pub use crate::query::ping::PingQuery;
pub use crate::query::select::{SelectQuery, SortOrder};
pub use crate::query::terms::TermsQuery;

pub mod component;
pub mod ping;
pub mod select;
pub mod terms;
