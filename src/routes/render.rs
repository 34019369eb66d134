//! `routes.ts` rendering.
//!
//! ```ts
//! /* eslint-disable */
//! export default [
//!   /* Category */
//!   {
//!     name: "categoryList",
//!     path: "/categories",
//!     component: () =>
//!       import("@/pages/Entity/Category/List.vue"),
//!     meta: {
//!       breadcrumbs: ["dashboard", "categoryList"]
//!     }
//!   },
//! ];
//! ```

use super::{RouteOptions, RouteRecord, RouteTable};
use std::borrow::Cow;

const HEADER: &str = "/* eslint-disable */\nexport default [\n";
const FOOTER: &str = "];\n";

impl RouteTable {
    /// Render the table as a default-exported TypeScript array.
    pub fn render(&self, options: &RouteOptions) -> String {
        let mut out = String::with_capacity(HEADER.len() + self.len() * 900);
        out.push_str(HEADER);

        for entity in &self.entities {
            out.push_str("  /* ");
            out.push_str(&entity.entity);
            out.push_str(" */\n");

            for record in &entity.records {
                render_record(&mut out, record, options);
            }
        }

        out.push_str(FOOTER);
        out
    }
}

fn render_record(out: &mut String, record: &RouteRecord, options: &RouteOptions) {
    out.push_str("  {\n");

    out.push_str("    name: \"");
    out.push_str(&escape_js(&record.name));
    out.push_str("\",\n");

    out.push_str("    path: \"");
    out.push_str(&escape_js(&record.path));
    out.push_str("\",\n");

    out.push_str("    component: () =>\n      import(");
    if options.chunk_names {
        out.push_str("/* webpackChunkName: \"");
        out.push_str(&record.component.chunk_name());
        out.push_str("\" */ ");
    }
    out.push('"');
    out.push_str(&escape_js(&record.component.import_path));
    out.push_str("\"),\n");

    out.push_str("    meta: {\n      breadcrumbs: [");
    for (i, crumb) in record.meta.breadcrumbs.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push('"');
        out.push_str(&escape_js(crumb));
        out.push('"');
    }
    out.push_str("]\n    }\n");

    out.push_str("  },\n");
}

/// Escape a value for a double-quoted JS string literal.
fn escape_js(s: &str) -> Cow<'_, str> {
    if !s.contains(['\\', '"', '\n']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('\\', "\\\\")
            .replace('"', "\\\"")
            .replace('\n', "\\n"),
    )
}
