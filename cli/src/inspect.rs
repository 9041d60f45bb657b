//! Schema inspection: list tables and describe columns.
//!
//! Both commands go through the same SQL RPC endpoint as batch runs; they
//! are read queries against `information_schema`.

use crate::error::{CLIError, Result};
use crate::formatter::OutputFormatter;
use botica_link::BoticaLinkClient;

const LIST_TABLES_SQL: &str = "SELECT table_name FROM information_schema.tables \
     WHERE table_schema = 'public' ORDER BY table_name";

/// Print the public tables of the database.
pub async fn list_tables(client: &BoticaLinkClient, color: bool) -> Result<()> {
    let rows = client.execute_sql(LIST_TABLES_SQL).await?;
    println!("{}", OutputFormatter::new(color).format_rows(&rows));
    Ok(())
}

/// Print column name, type, nullability, and default for one table.
pub async fn describe_table(client: &BoticaLinkClient, table: &str, color: bool) -> Result<()> {
    if !is_valid_identifier(table) {
        return Err(CLIError::ParseError(format!(
            "Invalid table name: '{}'",
            table
        )));
    }

    let sql = format!(
        "SELECT column_name, data_type, is_nullable, column_default \
         FROM information_schema.columns \
         WHERE table_schema = 'public' AND table_name = '{}' \
         ORDER BY ordinal_position",
        table
    );

    let rows = client.execute_sql(&sql).await?;
    if rows.is_empty() {
        println!("Table '{}' not found in schema 'public'", table);
        return Ok(());
    }
    println!("{}", OutputFormatter::new(color).format_rows(&rows));
    Ok(())
}

/// The table name is interpolated into SQL, so only plain identifiers pass.
fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        assert!(is_valid_identifier("pharmacies"));
        assert!(is_valid_identifier("order_items"));
        assert!(is_valid_identifier("_internal"));
        assert!(is_valid_identifier("t2"));
    }

    #[test]
    fn test_invalid_identifiers() {
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("2fast"));
        assert!(!is_valid_identifier("orders; DROP TABLE orders"));
        assert!(!is_valid_identifier("name with spaces"));
        assert!(!is_valid_identifier("quoted'name"));
    }
}
