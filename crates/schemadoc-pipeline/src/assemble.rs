//! Document model assembly.

use std::time::Instant;

use tracing::debug;

use schemadoc_core::{DataModel, DocumentConfig, ProcessConfig, Result};

use crate::filter::filter_tables;
use crate::group::MetadataIndex;
use crate::mapper::map_table;
use crate::query::DatabaseQuery;

/// Assemble the document model from raw introspection results.
///
/// Tables keep the order the query layer returned them in; for identical
/// inputs and configuration the output is identical.
pub fn build_data_model(
    query: &dyn DatabaseQuery,
    document: &DocumentConfig,
    process: &ProcessConfig,
) -> Result<DataModel> {
    build_data_model_with(query, document, process, |model| model)
}

/// Assemble the document model, then apply a caller-supplied post-processing
/// step to the finished model.
///
/// The hook runs after filtering and sees exactly the model
/// [`build_data_model`] would return; [`build_data_model`] is the identity
/// case.
pub fn build_data_model_with<F>(
    query: &dyn DatabaseQuery,
    document: &DocumentConfig,
    process: &ProcessConfig,
    post_process: F,
) -> Result<DataModel>
where
    F: FnOnce(DataModel) -> DataModel,
{
    let start = Instant::now();
    let database = query.database()?;
    debug!(
        engine = query.engine(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "queried database identity"
    );

    let start = Instant::now();
    let index_infos = query.index_infos()?;
    let tables = query.tables(&index_infos)?;
    debug!(
        tables = tables.len(),
        index_entries = index_infos.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "queried tables"
    );

    let start = Instant::now();
    let columns = query.table_columns()?;
    debug!(
        columns = columns.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "queried columns"
    );

    let start = Instant::now();
    let primary_keys = query.primary_keys()?;
    debug!(
        primary_keys = primary_keys.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "queried primary keys"
    );

    let start = Instant::now();
    let index = MetadataIndex::build(columns, primary_keys);
    let table_models = tables.iter().map(|table| map_table(table, &index)).collect();

    let model = DataModel {
        title: document.title.clone(),
        organization: document.organization.clone(),
        organization_url: document.organization_url.clone(),
        version: document.version.clone(),
        description: document.description.clone(),
        database_name: database.name,
        tables: filter_tables(table_models, process),
    };
    debug!(
        tables = model.tables.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "encapsulated document model"
    );

    Ok(post_process(model))
}
