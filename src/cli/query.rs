//! Query command implementation.
//!
//! Prints the route records of the selected entities as JSON, in the same
//! order and shape as the generated route file.

use std::fs;
use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use super::common::{build_routes, load_project};
use crate::cli::QueryArgs;
use crate::config::GenConfig;
use crate::routes::{RouteRecord, RouteTable};
use crate::utils::plural::plural_count;
use crate::{debug, log};

/// Result for batch query
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct QueryResult<'a> {
    pub records: Vec<&'a RouteRecord>,
}

impl<'a> QueryResult<'a> {
    pub fn new(table: &'a RouteTable) -> Self {
        Self {
            records: table.records().collect(),
        }
    }

    fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

/// Execute query command
pub fn run_query(args: &QueryArgs, config: &GenConfig) -> Result<()> {
    let project = load_project(config)?;
    let table = build_routes(&project, config, &config.project.entities)?;
    let result = QueryResult::new(&table);

    debug!(
        "query";
        "found {} for {}",
        plural_count(result.records.len(), "route"),
        plural_count(table.len(), "entity")
    );

    let formatted = result.to_json(args.pretty)?;

    // Output to file or stdout
    if let Some(ref output_path) = args.output {
        let mut file = fs::File::create(output_path)
            .with_context(|| format!("Failed to create {}", output_path.display()))?;
        writeln!(file, "{formatted}")?;
        log!("query"; "wrote output to {}", output_path.display());
    } else {
        println!("{formatted}");
    }

    Ok(())
}
