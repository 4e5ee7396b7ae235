//! Per-feature Solr query components.
//!
//! Each component is an option holder with fluent setters; attaching one to a
//! [`SelectQuery`](crate::query::SelectQuery) turns the feature on and emits
//! its parameters into the request.

pub use crate::query::component::dismax::{DisMax, EDisMax};
pub use crate::query::component::distributed::Distributed;
pub use crate::query::component::facet::{
    FacetSet, FacetSort, FieldFacet, PivotFacet, RangeFacet,
};
pub use crate::query::component::group::{Grouping, GroupFormat};
pub use crate::query::component::highlight::Highlighting;
pub use crate::query::component::mlt::{InterestingTerms, MoreLikeThis};
pub use crate::query::component::spellcheck::Spellcheck;
pub use crate::query::component::stats::Stats;
pub use crate::query::component::termvector::TermVectors;

pub mod dismax;
pub mod distributed;
pub mod facet;
pub mod group;
pub mod highlight;
pub mod mlt;
pub mod spellcheck;
pub mod stats;
pub mod termvector;

use crate::param::Params;

/// A query component: maps its configured options into Solr request
/// parameters.
pub trait Component {
    fn append_params(&self, params: &mut Params);

    /// Whether the component's response section relies on NamedList ordering
    /// and therefore wants `json.nl=flat`.
    fn needs_flat_named_list(&self) -> bool {
        false
    }
}
