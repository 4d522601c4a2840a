//! Source-agnostic core: the persisted snapshot, the margin scan, and the
//! change report.

pub mod margin;
pub mod report;
pub mod snapshot;

pub use snapshot::Snapshot;
