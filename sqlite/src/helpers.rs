//! Statement text assembly for the rusqlite handler

use db_actions_core::{ActionError, Result, Uri, ValueMap};

/// Resolves `uri` to the backing table: the last non-empty `/`-separated
/// segment, which must be a bare identifier. Everything before it (scheme,
/// authority, intermediate segments) is ignored, so both `people` and
/// `content://authority/people` address the `people` table.
pub(crate) fn table_name(uri: &Uri) -> Result<&str> {
    let segment = uri
        .as_str()
        .rsplit('/')
        .find(|segment| !segment.is_empty())
        .ok_or_else(|| ActionError::InvalidUri(format!("no table segment in `{uri}`")))?;
    if !is_identifier(segment) {
        return Err(ActionError::InvalidUri(format!(
            "`{segment}` is not a table identifier"
        )));
    }
    Ok(segment)
}

fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn push_ident(sql: &mut String, name: &str) {
    sql.push('"');
    for ch in name.chars() {
        if ch == '"' {
            sql.push('"');
        }
        sql.push(ch);
    }
    sql.push('"');
}

/// `SELECT <projection or *> FROM <table> [WHERE ..] [ORDER BY ..]`.
///
/// Projection entries, the selection clause, and the sort order are caller
/// text and pass through verbatim.
pub(crate) fn select_sql(
    table: &str,
    projection: Option<&[String]>,
    selection: Option<&str>,
    order_by: Option<&str>,
) -> String {
    let mut sql = String::from("SELECT ");
    match projection {
        Some(columns) => {
            for (idx, column) in columns.iter().enumerate() {
                if idx > 0 {
                    sql.push_str(", ");
                }
                sql.push_str(column);
            }
        }
        None => sql.push('*'),
    }
    sql.push_str(" FROM ");
    push_ident(&mut sql, table);
    if let Some(clause) = selection {
        sql.push_str(" WHERE ");
        sql.push_str(clause);
    }
    if let Some(order) = order_by {
        sql.push_str(" ORDER BY ");
        sql.push_str(order);
    }
    sql
}

/// `INSERT INTO <table> (..) VALUES (..)`, or `DEFAULT VALUES` when the map
/// is empty.
pub(crate) fn insert_sql(table: &str, values: &ValueMap) -> String {
    let mut sql = String::from("INSERT INTO ");
    push_ident(&mut sql, table);
    if values.is_empty() {
        sql.push_str(" DEFAULT VALUES");
        return sql;
    }
    sql.push_str(" (");
    for (idx, column) in values.columns().enumerate() {
        if idx > 0 {
            sql.push_str(", ");
        }
        push_ident(&mut sql, column);
    }
    sql.push_str(") VALUES (");
    for idx in 0..values.len() {
        if idx > 0 {
            sql.push_str(", ");
        }
        sql.push('?');
    }
    sql.push(')');
    sql
}

/// `UPDATE <table> SET .. [WHERE ..]`. An empty map cannot form a SET clause
/// and is rejected.
pub(crate) fn update_sql(
    table: &str,
    values: &ValueMap,
    selection: Option<&str>,
) -> Result<String> {
    if values.is_empty() {
        return Err(ActionError::InvalidArgument(format!(
            "update of `{table}` has no column assignments"
        )));
    }
    let mut sql = String::from("UPDATE ");
    push_ident(&mut sql, table);
    sql.push_str(" SET ");
    for (idx, column) in values.columns().enumerate() {
        if idx > 0 {
            sql.push_str(", ");
        }
        push_ident(&mut sql, column);
        sql.push_str(" = ?");
    }
    if let Some(clause) = selection {
        sql.push_str(" WHERE ");
        sql.push_str(clause);
    }
    Ok(sql)
}

/// `DELETE FROM <table> [WHERE ..]`.
pub(crate) fn delete_sql(table: &str, selection: Option<&str>) -> String {
    let mut sql = String::from("DELETE FROM ");
    push_ident(&mut sql, table);
    if let Some(clause) = selection {
        sql.push_str(" WHERE ");
        sql.push_str(clause);
    }
    sql
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_resolution_takes_the_last_segment() {
        assert_eq!(
            table_name(&Uri::from("content://authority/people")).unwrap(),
            "people"
        );
        assert_eq!(table_name(&Uri::from("people")).unwrap(), "people");
        assert_eq!(table_name(&Uri::from("store/people/")).unwrap(), "people");
    }

    #[test]
    fn non_identifier_segments_are_rejected() {
        assert!(matches!(
            table_name(&Uri::from("store/people; DROP TABLE x")),
            Err(ActionError::InvalidUri(_))
        ));
        assert!(matches!(
            table_name(&Uri::from("")),
            Err(ActionError::InvalidUri(_))
        ));
    }

    #[test]
    fn select_defaults_to_wildcard_projection() {
        assert_eq!(select_sql("t", None, None, None), r#"SELECT * FROM "t""#);
    }

    #[test]
    fn select_renders_all_clauses_in_order() {
        let projection = vec!["a".to_string(), "b".to_string()];
        assert_eq!(
            select_sql("t", Some(&projection), Some("a = ?"), Some("b DESC")),
            r#"SELECT a, b FROM "t" WHERE a = ? ORDER BY b DESC"#
        );
    }

    #[test]
    fn empty_insert_uses_default_values() {
        assert_eq!(
            insert_sql("t", &ValueMap::new()),
            r#"INSERT INTO "t" DEFAULT VALUES"#
        );
    }

    #[test]
    fn insert_lists_columns_in_map_order() {
        let mut values = ValueMap::new();
        values.set("b", 1).set("a", 2);
        assert_eq!(
            insert_sql("t", &values),
            r#"INSERT INTO "t" ("a", "b") VALUES (?, ?)"#
        );
    }

    #[test]
    fn update_requires_assignments() {
        assert!(matches!(
            update_sql("t", &ValueMap::new(), None),
            Err(ActionError::InvalidArgument(_))
        ));

        let mut values = ValueMap::new();
        values.set("a", 1);
        assert_eq!(
            update_sql("t", &values, Some("id = ?")).unwrap(),
            r#"UPDATE "t" SET "a" = ? WHERE id = ?"#
        );
    }

    #[test]
    fn delete_with_and_without_filter() {
        assert_eq!(delete_sql("t", None), r#"DELETE FROM "t""#);
        assert_eq!(
            delete_sql("t", Some("id IN (1,2)")),
            r#"DELETE FROM "t" WHERE id IN (1,2)"#
        );
    }
}
