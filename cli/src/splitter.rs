//! Statement splitter for SQL script files.
//!
//! Splits a script into an ordered sequence of executable statements:
//! terminator-separated, trimmed, with comment-only fragments excluded.
//!
//! The splitter does not parse SQL. A `;` inside a string literal or a
//! block comment splits the statement anyway; this is a known limitation.
//! `--dry-run` exists so an operator can check how a file will be split
//! before running it.

/// Split raw SQL text into an ordered list of non-empty statements.
pub fn split_statements(sql: &str) -> Vec<String> {
    sql.split(';').filter_map(clean_candidate).collect()
}

/// Trim a raw candidate and filter out comment-only fragments.
///
/// Leading `--` comment lines are stripped first, so a trailing
/// `-- note` after one statement's terminator does not swallow the
/// statement that follows it on the next line.
fn clean_candidate(candidate: &str) -> Option<String> {
    let mut rest = candidate.trim_start();
    while rest.starts_with("--") {
        match rest.find('\n') {
            Some(newline) => rest = rest[newline + 1..].trim_start(),
            None => return None,
        }
    }

    let text = rest.trim_end();
    if text.is_empty() || text.starts_with("/*") {
        return None;
    }
    Some(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_basic() {
        let statements = split_statements("CREATE TABLE a();\nCREATE TABLE b();");
        assert_eq!(statements, vec!["CREATE TABLE a()", "CREATE TABLE b()"]);
    }

    #[test]
    fn test_split_with_inline_comment_and_blank_segment() {
        let sql = "CREATE TABLE a(); -- comment\nCREATE TABLE b();\n\nCREATE TABLE c();";
        let statements = split_statements(sql);
        assert_eq!(
            statements,
            vec!["CREATE TABLE a()", "CREATE TABLE b()", "CREATE TABLE c()"]
        );
    }

    #[test]
    fn test_comment_only_input_yields_nothing() {
        let sql = "-- just a header\n-- and another line\n";
        assert!(split_statements(sql).is_empty());
    }

    #[test]
    fn test_block_comment_candidate_dropped() {
        let sql = "/* schema version 3 */;\nCREATE TABLE a();";
        assert_eq!(split_statements(sql), vec!["CREATE TABLE a()"]);
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert!(split_statements("").is_empty());
        assert!(split_statements("   \n\t  ;;; \n").is_empty());
    }

    #[test]
    fn test_resplitting_is_idempotent() {
        let sql = "CREATE TABLE a(); -- note\nINSERT INTO a VALUES (1);\n\n-- seed\nINSERT INTO a VALUES (2);";
        let first = split_statements(sql);
        let second = split_statements(&first.join(";\n"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_interior_comment_line_is_kept() {
        // A comment line inside a statement body is part of the statement
        let sql = "CREATE TABLE a (\n  id uuid\n  -- more columns later\n);";
        let statements = split_statements(sql);
        assert_eq!(statements.len(), 1);
        assert!(statements[0].contains("-- more columns later"));
    }

    #[test]
    fn test_statement_order_preserved() {
        let sql = "INSERT INTO t VALUES (1);INSERT INTO t VALUES (2);INSERT INTO t VALUES (3);";
        let statements = split_statements(sql);
        assert_eq!(statements.len(), 3);
        for (i, statement) in statements.iter().enumerate() {
            assert!(statement.ends_with(&format!("({})", i + 1)));
        }
    }
}
