//! The pure classification core: filename grammar, grouping, gap
//! detection, count buckets, and the routing rule table. Nothing in this
//! module touches the filesystem.

pub mod buckets;
pub mod gaps;
pub mod grouper;
pub mod parser;
pub mod router;
