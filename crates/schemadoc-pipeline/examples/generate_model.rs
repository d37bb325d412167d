use schemadoc_core::{DocumentConfig, ProcessConfig, Result};
use schemadoc_pipeline::{
    build_data_model, Database, DatabaseQuery, RawColumn, RawIndexInfo, RawPrimaryKey, RawTable,
};
use tracing_subscriber::EnvFilter;

/// Canned introspection results standing in for a live vendor query layer.
struct CannedQuery;

impl DatabaseQuery for CannedQuery {
    fn engine(&self) -> &'static str {
        "mysql"
    }

    fn database(&self) -> Result<Database> {
        Ok(Database {
            name: "shop".to_string(),
        })
    }

    fn index_infos(&self) -> Result<Vec<RawIndexInfo>> {
        Ok(vec![RawIndexInfo {
            table_name: "orders".to_string(),
            column_name: "id".to_string(),
            index_name: "PRIMARY".to_string(),
            non_unique: "0".to_string(),
        }])
    }

    fn tables(&self, index_infos: &[RawIndexInfo]) -> Result<Vec<RawTable>> {
        Ok(vec![
            RawTable {
                table_name: "orders".to_string(),
                remarks: "customer orders".to_string(),
                index_names: index_infos
                    .iter()
                    .map(|entry| entry.index_name.clone())
                    .collect(),
                index_column_names: index_infos
                    .iter()
                    .map(|entry| entry.column_name.clone())
                    .collect(),
            },
            RawTable {
                table_name: "tmp_import".to_string(),
                remarks: "load staging".to_string(),
                index_names: Vec::new(),
                index_column_names: Vec::new(),
            },
        ])
    }

    fn table_columns(&self) -> Result<Vec<RawColumn>> {
        Ok(vec![
            RawColumn {
                table_name: "orders".to_string(),
                ordinal_position: 1,
                column_name: "id".to_string(),
                column_type: "bigint(20)".to_string(),
                type_name: "bigint".to_string(),
                column_length: "20".to_string(),
                column_size: "20".to_string(),
                decimal_digits: None,
                nullable: "0".to_string(),
                column_def: None,
                remarks: Some("identifier".to_string()),
            },
            RawColumn {
                table_name: "orders".to_string(),
                ordinal_position: 2,
                column_name: "total".to_string(),
                column_type: "decimal(10,2)".to_string(),
                type_name: "decimal".to_string(),
                column_length: "10".to_string(),
                column_size: "10".to_string(),
                decimal_digits: Some("2".to_string()),
                nullable: "1".to_string(),
                column_def: Some("0.00".to_string()),
                remarks: None,
            },
        ])
    }

    fn primary_keys(&self) -> Result<Vec<RawPrimaryKey>> {
        Ok(vec![RawPrimaryKey {
            table_name: "orders".to_string(),
            column_name: "id".to_string(),
        }])
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let document = DocumentConfig {
        title: "shop database".to_string(),
        organization: "acme".to_string(),
        organization_url: "https://acme.example".to_string(),
        version: "1.0.0".to_string(),
        description: "order tracking schema".to_string(),
    };
    let process = ProcessConfig {
        ignore_table_prefix: vec!["tmp_".to_string()],
        ..ProcessConfig::default()
    };

    let model = build_data_model(&CannedQuery, &document, &process)?;
    println!(
        "{}",
        serde_json::to_string_pretty(&model).expect("serialize model")
    );

    Ok(())
}
