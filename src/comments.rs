//! Comment access interface used by the surrounding service.
//!
//! The case converters never touch this module. It fixes the contract of the
//! comment store (list newest first, delete only by the author) and ships an
//! in-memory store that honours it.

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::time::SystemTime;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub author_id: String,
    pub body: String,
    pub created_at: SystemTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommentError {
    #[error("comment not found: {id}")]
    NotFound { id: String },

    #[error("not authorized to delete comment {id}")]
    NotAuthorized { id: String },

    #[error("comment store unavailable: {0}")]
    Transport(String),
}

impl CommentError {
    /// HTTP status the comment route answers with
    pub fn status_code(&self) -> u16 {
        match self {
            CommentError::NotFound { .. } => 404,
            CommentError::NotAuthorized { .. } => 403,
            CommentError::Transport(_) => 500,
        }
    }
}

pub trait CommentStore: Send + Sync {
    /// All comments, newest first
    fn list_comments(&self) -> Result<Vec<Comment>, CommentError>;

    /// Delete `id` if `requester` is its author. Nothing is modified on rejection.
    fn delete_comment(&self, id: &str, requester: &str) -> Result<(), CommentError>;
}

#[derive(Debug, Default)]
pub struct MemoryCommentStore {
    comments: DashMap<String, Comment>,
}

impl MemoryCommentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a comment, keyed by its id
    pub fn insert(&self, comment: Comment) {
        self.comments.insert(comment.id.clone(), comment);
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }
}

impl CommentStore for MemoryCommentStore {
    fn list_comments(&self) -> Result<Vec<Comment>, CommentError> {
        let mut comments: Vec<Comment> = self
            .comments
            .iter()
            .map(|entry| entry.value().clone())
            .collect();

        comments.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });

        Ok(comments)
    }

    fn delete_comment(&self, id: &str, requester: &str) -> Result<(), CommentError> {
        // Ownership check and removal happen under the same shard lock
        if self
            .comments
            .remove_if(id, |_, comment| comment.author_id == requester)
            .is_some()
        {
            return Ok(());
        }

        if self.comments.contains_key(id) {
            Err(CommentError::NotAuthorized { id: id.to_string() })
        } else {
            Err(CommentError::NotFound { id: id.to_string() })
        }
    }
}
