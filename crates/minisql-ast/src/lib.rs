//! AST node types for the minisql dialect.
//!
//! One variant per statement form, each an explicit record with only the
//! fields that form can carry. Mutually exclusive alternatives (`SELECT *`
//! versus a column list, `DELETE *` versus a `WHERE` list) are enums, so an
//! impossible combination cannot be built.

use serde::Serialize;

/// Root of a parsed statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "statement", rename_all = "snake_case")]
pub enum Statement {
    Select(SelectStatement),
    CreateTable(CreateTableStatement),
    Delete(DeleteStatement),
}

impl Statement {
    /// The keyword that introduced the statement.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Select(_) => "SELECT",
            Self::CreateTable(_) => "CREATE",
            Self::Delete(_) => "DELETE",
        }
    }

    /// Name of the table the statement addresses.
    #[must_use]
    pub fn table(&self) -> &str {
        match self {
            Self::Select(s) => &s.table,
            Self::CreateTable(s) => &s.table,
            Self::Delete(s) => &s.table,
        }
    }
}

// ---------------------------------------------------------------------------
// SELECT
// ---------------------------------------------------------------------------

/// `SELECT (* | col, ...) FROM table`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectStatement {
    pub columns: SelectColumns,
    pub table: String,
}

impl SelectStatement {
    #[must_use]
    pub const fn is_select_all(&self) -> bool {
        matches!(self.columns, SelectColumns::All)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectColumns {
    /// `*`
    All,
    /// Named columns in source order (never empty).
    Named(Vec<String>),
}

// ---------------------------------------------------------------------------
// CREATE TABLE
// ---------------------------------------------------------------------------

/// `CREATE TABLE name ( column-spec, ... )`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateTableStatement {
    pub table: String,
    /// Never empty.
    pub columns: Vec<ColumnSpec>,
}

/// `name type [ ( size ) ]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    /// Digits of the parenthesized size, e.g. `"255"` for `varchar(255)`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

// ---------------------------------------------------------------------------
// DELETE
// ---------------------------------------------------------------------------

/// `DELETE * FROM table` or `DELETE FROM table WHERE key = value, ...`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteStatement {
    pub table: String,
    pub filter: DeleteFilter,
}

impl DeleteStatement {
    #[must_use]
    pub const fn deletes_all(&self) -> bool {
        matches!(self.filter, DeleteFilter::All)
    }

    /// The `WHERE` assignments; empty for `DELETE *`.
    #[must_use]
    pub fn attributes(&self) -> &[Assignment] {
        match &self.filter {
            DeleteFilter::All => &[],
            DeleteFilter::Matching(attributes) => attributes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeleteFilter {
    /// `DELETE *`: every row, no `WHERE` clause.
    All,
    /// Rows matching every assignment (never empty).
    Matching(Vec<Assignment>),
}

/// `key = value` in a `WHERE` list. The value is kept as source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment {
    pub key: String,
    pub value: String,
}

impl Assignment {
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn tags_and_tables() {
        let select = Statement::Select(SelectStatement {
            columns: SelectColumns::All,
            table: "t".to_owned(),
        });
        assert_eq!(select.tag(), "SELECT");
        assert_eq!(select.table(), "t");

        let delete = Statement::Delete(DeleteStatement {
            table: "u".to_owned(),
            filter: DeleteFilter::All,
        });
        assert_eq!(delete.tag(), "DELETE");
        assert_eq!(delete.table(), "u");
    }

    #[test]
    fn delete_all_has_no_attributes() {
        let all = DeleteStatement {
            table: "t".to_owned(),
            filter: DeleteFilter::All,
        };
        assert!(all.deletes_all());
        assert!(all.attributes().is_empty());

        let matching = DeleteStatement {
            table: "t".to_owned(),
            filter: DeleteFilter::Matching(vec![Assignment::new("a", "1")]),
        };
        assert!(!matching.deletes_all());
        assert_eq!(matching.attributes(), &[Assignment::new("a", "1")]);
    }

    #[test]
    fn json_shape() {
        let stmt = Statement::CreateTable(CreateTableStatement {
            table: "P".to_owned(),
            columns: vec![
                ColumnSpec {
                    name: "id".to_owned(),
                    type_name: "int".to_owned(),
                    size: None,
                },
                ColumnSpec {
                    name: "name".to_owned(),
                    type_name: "varchar".to_owned(),
                    size: Some("255".to_owned()),
                },
            ],
        });
        assert_eq!(
            serde_json::to_value(&stmt).unwrap(),
            json!({
                "statement": "create_table",
                "table": "P",
                "columns": [
                    {"name": "id", "type": "int"},
                    {"name": "name", "type": "varchar", "size": "255"},
                ],
            })
        );

        let select = Statement::Select(SelectStatement {
            columns: SelectColumns::Named(vec!["a".to_owned()]),
            table: "t".to_owned(),
        });
        assert_eq!(
            serde_json::to_value(&select).unwrap(),
            json!({"statement": "select", "columns": {"named": ["a"]}, "table": "t"})
        );
    }
}
