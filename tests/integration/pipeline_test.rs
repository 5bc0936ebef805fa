//! Script pipeline integration tests.
//!
//! Tests splitting and classification of realistic multi-statement scripts.

use db_sqlsplit::output::{OutputFormat, ScriptOutput};
use db_sqlsplit::script::{process, split, split_raw, ScriptSummary, StatementInfo};
use pretty_assertions::assert_eq;

fn shapes(statements: &[StatementInfo]) -> Vec<bool> {
    statements.iter().map(|s| s.returns_results()).collect()
}

#[test]
fn test_mixed_dml_script() {
    let script = "SELECT * FROM table1; INSERT INTO table2 VALUES ('value; with semicolon'); \
                  INSERT INTO table2 VALUES ('another value') RETURNING id; \
                  -- Comment with a semicolon; \nUPDATE table3 SET column = 'value' WHERE id = 1 \
                  RETURNING *; DELETE FROM table4 WHERE id = 2;";

    let statements = process(script);

    assert_eq!(statements.len(), 5);
    assert_eq!(shapes(&statements), vec![true, false, true, true, false]);
    assert!(statements[3]
        .statement()
        .starts_with("-- Comment with a semicolon; \n"));
}

#[test]
fn test_flink_session_script() {
    let script = "SET 'sql-client.execution.result-mode' = 'tableau';

CREATE TABLE Orders (
    order_number BIGINT,
    price        DECIMAL(32,2),
    buyer        ROW<first_name STRING, last_name STRING>,
    order_time   TIMESTAMP(3)
) WITH (
  'connector' = 'datagen',
  'number-of-rows' = '100000'
);

SELECT buyer, SUM(price) AS total_cost
FROM Orders
GROUP BY  buyer
ORDER BY  total_cost LIMIT 3;
";

    let statements = process(script);

    assert_eq!(statements.len(), 3);
    assert_eq!(shapes(&statements), vec![false, false, true]);
    assert_eq!(
        statements[0].statement(),
        "SET 'sql-client.execution.result-mode' = 'tableau'"
    );
    assert!(statements[1].statement().starts_with("CREATE TABLE Orders ("));
    assert!(statements[1].statement().ends_with("'number-of-rows' = '100000'\n)"));
}

#[test]
fn test_flink_script_with_leading_url_comment() {
    let script = " -- https://nightlies.apache.org/flink/flink-docs-master/docs/dev/table/jdbcdriver/
 CREATE TABLE T(a INT,b VARCHAR(10)) WITH ('connector' = 'filesystem','path' = 'file:///tmp/T.csv','format' = 'csv');

 INSERT INTO T VALUES (1, 'Hi'), (2, 'Hello');

 SELECT * FROM T;

";

    let statements = process(script);

    assert_eq!(statements.len(), 3);
    assert_eq!(shapes(&statements), vec![false, false, true]);
    assert!(statements[0]
        .statement()
        .starts_with("-- https://nightlies.apache.org/"));
    assert_eq!(statements[2].statement(), "SELECT * FROM T");
}

#[test]
fn test_statement_count_with_every_quote_kind() {
    let script = r#"
        INSERT INTO t VALUES ('x; y') RETURNING id;
        SELECT "weird;column" FROM `weird;table`;
        /* DELETE FROM t; */ SHOW TABLES;
        UPDATE t SET note = 'it\'s; done';
        EXPLAIN SELECT 1
    "#;

    let statements = process(script);

    assert_eq!(
        statements
            .iter()
            .map(StatementInfo::statement)
            .collect::<Vec<_>>(),
        vec![
            "INSERT INTO t VALUES ('x; y') RETURNING id",
            r#"SELECT "weird;column" FROM `weird;table`"#,
            "/* DELETE FROM t; */ SHOW TABLES",
            r"UPDATE t SET note = 'it\'s; done'",
            "EXPLAIN SELECT 1",
        ]
    );
    // The leading block comment hides SHOW from the prefix rules.
    assert_eq!(shapes(&statements), vec![true, true, false, false, true]);
}

#[test]
fn test_split_and_process_agree() {
    let script = "SELECT 1;; -- trailing\n; DELETE FROM t; 'unterminated; tail";
    let texts: Vec<String> = process(script)
        .iter()
        .map(|s| s.statement().to_string())
        .collect();
    assert_eq!(texts, split(script));
    assert_eq!(texts.last().unwrap(), "'unterminated; tail");
}

#[test]
fn test_raw_fragments_rebuild_script() {
    let scripts = [
        "",
        ";",
        "SELECT 1;",
        "SELECT 'a;b'; -- c;\n/* d; */ SELECT `e;f`;\r\n",
        "SELECT \"unterminated; ",
    ];

    for script in scripts {
        let rebuilt: String = split_raw(script)
            .iter()
            .map(|f| {
                if f.terminated {
                    format!("{};", f.text)
                } else {
                    f.text.to_string()
                }
            })
            .collect();
        assert_eq!(rebuilt, script);
    }
}

#[test]
fn test_rendered_json_round_trips_statements() {
    let statements = process("SELECT 1; DELETE FROM t RETURNING *; CREATE TABLE x (a INT);");
    let json = ScriptOutput::new(OutputFormat::Json, true)
        .format_statements(&statements)
        .unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[1]["statement"], "DELETE FROM t RETURNING *");
    assert_eq!(entries[1]["returns_results"], true);
    assert_eq!(entries[2]["returns_results"], false);

    let summary = ScriptSummary::from_statements(&statements);
    assert_eq!(summary.result_sets, 2);
    assert_eq!(summary.update_counts, 1);
}

#[test]
fn test_concurrent_processing() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let script = format!("SELECT {i}; INSERT INTO t VALUES ({i});");
                process(&script)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let statements = handle.join().unwrap();
        assert_eq!(statements[0].statement(), format!("SELECT {i}"));
        assert_eq!(shapes(&statements), vec![true, false]);
    }
}
