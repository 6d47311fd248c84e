//! Versioned grammar data for the external rule table.
//!
//! The two Fig designs share one lexical shape; what differs is which statement forms exist and which
//! productions contain a `[`. Both facts are data here, registered per [`GrammarVersion`], so a rule
//! table swaps versions by swapping a [`SiteTable`]. The scanner never consults this module.
//!
//! ## Examples
//! ```rust
//! use fig_core::GrammarVersion;
//! use fig_syntax::brackets::BracketRole;
//! use fig_syntax::grammar::{SiteId, SiteTable};
//!
//! let v2 = SiteTable::for_version(GrammarVersion::V2);
//! let ctx = v2.context(SiteId::IndexSuffix, true, false).unwrap();
//! assert_eq!(fig_syntax::brackets::resolve(ctx, None), Ok(BracketRole::IndexExpression));
//! ```

mod sites;

pub use sites::{
    FORMS, FormRegistration, SITES, SiteChange, SiteId, SiteLead, SiteRegistration, SiteTable, StatementForm,
    diff,
};
pub use fig_core::GrammarVersion;
