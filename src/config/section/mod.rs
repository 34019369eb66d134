//! Configuration section definitions.
//!
//! | Module    | TOML Section | Purpose                                  |
//! |-----------|--------------|------------------------------------------|
//! | `project` | `[project]`  | MFD input, frontend output, filters      |
//! | `routes`  | `[routes]`   | Route file location and rendering        |

mod project;
mod routes;

pub use project::ProjectConfig;
pub use routes::RoutesConfig;
