//! Tests for key-path splitting and nested writes.

use serde_json::{Map, Value, json};

use super::path::{split_key, write_path};

fn segments(key: &str) -> Vec<String> {
    split_key(key).unwrap()
}

mod splitting {
    use super::*;

    #[test]
    fn single_segment() {
        assert_eq!(segments("port"), vec!["port"]);
    }

    #[test]
    fn nested_segments() {
        assert_eq!(
            segments("database.max.connections"),
            vec!["database", "max", "connections"]
        );
    }

    #[test]
    fn single_underscore_is_not_a_separator() {
        assert_eq!(segments("max_connections"), vec!["max_connections"]);
    }

    #[test]
    fn empty_key_is_rejected() {
        assert_eq!(split_key(""), None);
    }

    #[test]
    fn empty_segments_are_rejected() {
        assert_eq!(split_key("a..b"), None);
        assert_eq!(split_key(".a"), None);
        assert_eq!(split_key("a."), None);
    }
}

mod writing {
    use super::*;

    #[test]
    fn writes_a_top_level_leaf() {
        let mut table = Map::new();
        write_path(&mut table, &segments("port"), json!(8080));

        assert_eq!(Value::Object(table), json!({"port": 8080}));
    }

    #[test]
    fn creates_intermediate_tables() {
        let mut table = Map::new();
        write_path(&mut table, &segments("database.max.connections"), json!(50));

        assert_eq!(
            Value::Object(table),
            json!({"database": {"max": {"connections": 50}}})
        );
    }

    #[test]
    fn final_segment_overwrites_previous_value() {
        let mut table = Map::new();
        write_path(&mut table, &segments("port"), json!(1));
        write_path(&mut table, &segments("port"), json!(2));

        assert_eq!(Value::Object(table), json!({"port": 2}));
    }

    #[test]
    fn sibling_keys_are_preserved() {
        let mut table = Map::new();
        write_path(&mut table, &segments("cache.ttl"), json!(3600));
        write_path(&mut table, &segments("cache.redis.host"), json!("redis"));

        assert_eq!(
            Value::Object(table),
            json!({"cache": {"ttl": 3600, "redis": {"host": "redis"}}})
        );
    }

    #[test]
    fn scalar_blocking_descent_becomes_a_table() {
        // A later write must never fail because an earlier write left a
        // scalar at an intermediate position
        let mut table = Map::new();
        write_path(&mut table, &segments("cache"), json!(true));
        write_path(&mut table, &segments("cache.enabled"), json!(false));

        assert_eq!(Value::Object(table), json!({"cache": {"enabled": false}}));
    }

    #[test]
    fn empty_segment_list_is_a_no_op() {
        let mut table = Map::new();
        write_path(&mut table, &[], json!(1));

        assert!(table.is_empty());
    }
}
