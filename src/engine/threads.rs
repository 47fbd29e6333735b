// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Comment thread organization.
//!
//! Turns the flat comment list into parent/replies trees with
//! deterministic ordering. Pure function of its input so it can be
//! recomputed on every mutation without drift.

use crate::models::comment::Comment;
use std::cmp::Ordering;
use std::collections::HashMap;

/// A top-level comment with its replies in creation order.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentThread {
    pub parent: Comment,
    pub replies: Vec<Comment>,
}

/// Organize a flat comment list into threads.
///
/// Top-level comments sort by timestamp ascending with unanchored
/// (general) comments last, ties broken by creation time. Replies attach
/// to their parent sorted by creation time. Replies whose parent is not
/// in the list are dropped.
pub fn organize(comments: &[Comment]) -> Vec<CommentThread> {
    let (parents, replies): (Vec<Comment>, Vec<Comment>) =
        comments.iter().cloned().partition(|c| !c.is_reply());

    let mut by_parent: HashMap<i64, Vec<Comment>> = HashMap::new();
    for reply in replies {
        // parent_comment_id is Some for every reply by the partition above
        if let Some(parent_id) = reply.parent_comment_id {
            by_parent.entry(parent_id).or_default().push(reply);
        }
    }

    let mut threads: Vec<CommentThread> = parents
        .into_iter()
        .map(|parent| {
            let mut replies = by_parent.remove(&parent.id).unwrap_or_default();
            replies.sort_by(|a, b| a.created_at.cmp(&b.created_at));
            CommentThread { parent, replies }
        })
        .collect();

    threads.sort_by(|a, b| compare_parents(&a.parent, &b.parent));
    threads
}

/// Timestamp ascending, None (general comments) after all timed ones,
/// ties by creation time.
fn compare_parents(a: &Comment, b: &Comment) -> Ordering {
    match (a.timestamp, b.timestamp) {
        (Some(x), Some(y)) => x
            .partial_cmp(&y)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.created_at.cmp(&b.created_at)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.created_at.cmp(&b.created_at),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn comment(id: i64, timestamp: Option<f64>, parent: Option<i64>, created_s: i64) -> Comment {
        Comment {
            id,
            video_id: 1,
            content: format!("comment {}", id),
            timestamp,
            timestamp_end: None,
            parent_comment_id: parent,
            author: "reviewer".to_string(),
            created_at: Utc.timestamp_opt(created_s, 0).unwrap(),
        }
    }

    #[test]
    fn test_timed_before_general_sorted_ascending() {
        let comments = vec![
            comment(1, None, None, 10),
            comment(2, Some(40.0), None, 20),
            comment(3, Some(12.3), None, 30),
            comment(4, Some(5.0), None, 40),
        ];
        let threads = organize(&comments);
        let order: Vec<i64> = threads.iter().map(|t| t.parent.id).collect();
        assert_eq!(order, vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_timestamp_ties_break_by_creation_time() {
        let comments = vec![
            comment(1, Some(5.0), None, 200),
            comment(2, Some(5.0), None, 100),
        ];
        let threads = organize(&comments);
        let order: Vec<i64> = threads.iter().map(|t| t.parent.id).collect();
        assert_eq!(order, vec![2, 1]);
    }

    #[test]
    fn test_replies_attach_in_creation_order() {
        let comments = vec![
            comment(1, Some(5.0), None, 10),
            comment(3, None, Some(1), 30),
            comment(2, None, Some(1), 20),
        ];
        let threads = organize(&comments);
        assert_eq!(threads.len(), 1);
        let reply_ids: Vec<i64> = threads[0].replies.iter().map(|r| r.id).collect();
        assert_eq!(reply_ids, vec![2, 3]);
    }

    #[test]
    fn test_orphaned_replies_are_dropped() {
        let comments = vec![
            comment(1, Some(5.0), None, 10),
            comment(2, None, Some(99), 20),
        ];
        let threads = organize(&comments);
        assert_eq!(threads.len(), 1);
        assert!(threads[0].replies.is_empty());
    }

    #[test]
    fn test_organize_is_idempotent() {
        let comments = vec![
            comment(1, Some(40.0), None, 10),
            comment(2, Some(5.0), None, 20),
            comment(3, None, None, 30),
            comment(4, None, Some(1), 40),
            comment(5, None, Some(2), 50),
        ];
        let first = organize(&comments);

        // Flatten the tree back to a list and re-run.
        let mut flattened = Vec::new();
        for thread in &first {
            flattened.push(thread.parent.clone());
            flattened.extend(thread.replies.iter().cloned());
        }
        let second = organize(&flattened);
        assert_eq!(first, second);
    }
}
