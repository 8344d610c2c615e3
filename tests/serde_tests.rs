#![cfg(feature = "serde")]

//! Integration tests for serde support.
//!
//! A tree serializes as the sequence of its keys in order and deserializes
//! by inserting each element.

use rbtree::{RedBlackTree, ReverseOrder};
use rstest::rstest;

#[rstest]
fn test_serializes_as_sorted_sequence() {
    let tree: RedBlackTree<i32> = [3, 1, 2].into_iter().collect();
    assert_eq!(serde_json::to_string(&tree).unwrap(), "[1,2,3]");
}

#[rstest]
fn test_empty_tree_serializes_as_empty_sequence() {
    let tree: RedBlackTree<i32> = RedBlackTree::new();
    assert_eq!(serde_json::to_string(&tree).unwrap(), "[]");
}

#[rstest]
fn test_json_roundtrip() {
    let tree: RedBlackTree<i32> = [10, 40, 30, 60, 90, 70, 20, 50, 80].into_iter().collect();
    let json = serde_json::to_string(&tree).unwrap();
    let restored: RedBlackTree<i32> = serde_json::from_str(&json).unwrap();

    assert_eq!(tree, restored);
    assert_eq!(restored.validate(), Ok(()));
}

#[rstest]
fn test_deserialize_unsorted_input_with_duplicates() {
    let tree: RedBlackTree<String> = serde_json::from_str(r#"["b", "a", "c", "a"]"#).unwrap();
    assert_eq!(tree.len(), 4);
    assert_eq!(tree.to_string(), "{a, a, b, c}");
}

#[rstest]
fn test_deserialize_uses_comparator() {
    let tree: RedBlackTree<i32, ReverseOrder> = serde_json::from_str("[1, 3, 2]").unwrap();
    assert_eq!(serde_json::to_string(&tree).unwrap(), "[3,2,1]");
}

#[rstest]
fn test_deserialize_rejects_non_sequence() {
    let result: Result<RedBlackTree<i32>, _> = serde_json::from_str(r#"{"key": 1}"#);
    assert!(result.is_err());
}
