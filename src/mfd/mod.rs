//! MFD project model.
//!
//! An MFD project is a `<name>.mfd` file listing namespaces. Each namespace
//! has an entity file `<ns>.xml` and an optional admin UI file
//! `<ns>.vt.xml`:
//!
//! ```text
//! newsportal.mfd
//! portal.xml      portal.vt.xml
//! geo.xml         geo.vt.xml
//! ```
//!
//! Raw XML lives in [`xml`]. Loading converts it into the types below,
//! references between them are resolved by name on lookup.

mod error;
mod namespace;
mod project;
pub mod vt;
mod xml;

pub use error::MfdError;
pub use project::{Project, Selected};
pub use vt::VtEntity;
