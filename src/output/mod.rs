//! Output collaborators: copying routed files onto disk, packaging results
//! into a ZIP, and persisting the batch logs.

pub mod archive;
pub mod copier;
pub mod logs;
