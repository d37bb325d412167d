//! Designate/ignore table filtering.

use schemadoc_core::{ProcessConfig, TableModel};

/// Apply the configured table rules, preserving input order.
///
/// When designate mode is active (any designate rule set is non-empty) a
/// table is kept iff its name matches a designate rule, and the ignore sets
/// are not consulted. Otherwise a table is kept unless its name matches an
/// ignore rule. Matching is byte-exact and case-sensitive.
pub fn filter_tables(tables: Vec<TableModel>, config: &ProcessConfig) -> Vec<TableModel> {
    if config.designate_mode() {
        tables
            .into_iter()
            .filter(|table| designated(&table.table_name, config))
            .collect()
    } else {
        tables
            .into_iter()
            .filter(|table| !ignored(&table.table_name, config))
            .collect()
    }
}

fn designated(name: &str, config: &ProcessConfig) -> bool {
    config.designated_table_name.iter().any(|rule| rule == name)
        || config
            .designated_table_prefix
            .iter()
            .any(|prefix| name.starts_with(prefix.as_str()))
        || config
            .designated_table_suffix
            .iter()
            .any(|suffix| name.ends_with(suffix.as_str()))
}

fn ignored(name: &str, config: &ProcessConfig) -> bool {
    config.ignore_table_name.iter().any(|rule| rule == name)
        || config
            .ignore_table_prefix
            .iter()
            .any(|prefix| name.starts_with(prefix.as_str()))
        || config
            .ignore_table_suffix
            .iter()
            .any(|suffix| name.ends_with(suffix.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(name: &str) -> TableModel {
        TableModel {
            table_name: name.to_string(),
            remarks: String::new(),
            index_names: Vec::new(),
            index_column_names: Vec::new(),
            columns: Vec::new(),
        }
    }

    fn names(tables: &[TableModel]) -> Vec<&str> {
        tables.iter().map(|t| t.table_name.as_str()).collect()
    }

    #[test]
    fn no_rules_keep_every_table_in_order() {
        let tables = vec![table("orders"), table("customers"), table("order_items")];
        let kept = filter_tables(tables, &ProcessConfig::default());
        assert_eq!(names(&kept), ["orders", "customers", "order_items"]);
    }

    #[test]
    fn ignore_by_name_drops_only_exact_matches() {
        let config = ProcessConfig {
            ignore_table_name: vec!["test_user".to_string()],
            ..ProcessConfig::default()
        };
        let tables = vec![table("orders"), table("test_user"), table("order_items")];
        let kept = filter_tables(tables, &config);
        assert_eq!(names(&kept), ["orders", "order_items"]);
    }

    #[test]
    fn ignore_by_prefix_and_suffix() {
        let config = ProcessConfig {
            ignore_table_prefix: vec!["tmp_".to_string()],
            ignore_table_suffix: vec!["_bak".to_string()],
            ..ProcessConfig::default()
        };
        let tables = vec![
            table("orders"),
            table("tmp_load"),
            table("orders_bak"),
            table("customers"),
        ];
        let kept = filter_tables(tables, &config);
        assert_eq!(names(&kept), ["orders", "customers"]);
    }

    #[test]
    fn designate_mode_bypasses_ignore_rules() {
        let config = ProcessConfig {
            designated_table_name: vec!["orders".to_string()],
            ignore_table_name: vec!["orders".to_string()],
            ..ProcessConfig::default()
        };
        let tables = vec![table("orders"), table("customers")];
        let kept = filter_tables(tables, &config);
        assert_eq!(names(&kept), ["orders"]);
    }

    #[test]
    fn designate_by_prefix_overrides_ignore_by_name() {
        let config = ProcessConfig {
            designated_table_prefix: vec!["rpt_".to_string()],
            ignore_table_name: vec!["rpt_sales".to_string()],
            ..ProcessConfig::default()
        };
        let tables = vec![table("rpt_sales"), table("orders")];
        let kept = filter_tables(tables, &config);
        assert_eq!(names(&kept), ["rpt_sales"]);
    }

    #[test]
    fn designate_by_suffix_keeps_matches_only() {
        let config = ProcessConfig {
            designated_table_suffix: vec!["_audit".to_string()],
            ..ProcessConfig::default()
        };
        let tables = vec![table("orders_audit"), table("orders"), table("users_audit")];
        let kept = filter_tables(tables, &config);
        assert_eq!(names(&kept), ["orders_audit", "users_audit"]);
    }

    #[test]
    fn designate_mode_with_no_match_yields_empty_list() {
        let config = ProcessConfig {
            designated_table_name: vec!["missing".to_string()],
            ignore_table_name: vec!["orders".to_string()],
            ..ProcessConfig::default()
        };
        let kept = filter_tables(vec![table("orders")], &config);
        assert!(kept.is_empty());
    }

    #[test]
    fn matching_is_case_sensitive() {
        let config = ProcessConfig {
            ignore_table_name: vec!["Orders".to_string()],
            ..ProcessConfig::default()
        };
        let kept = filter_tables(vec![table("orders")], &config);
        assert_eq!(names(&kept), ["orders"]);
    }
}
