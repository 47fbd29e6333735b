// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Annotation store.
//!
//! The in-memory authoritative list of comments and drawings for the
//! active media version, fed by the sync client. Mutations apply
//! optimistically; every mutation registers a rollback record that is
//! replayed if the paired network call fails. Every request is tagged
//! with the video id it was issued for, and responses whose tag no
//! longer matches the active version (or whose request id is unknown,
//! e.g. after switching away and back) are discarded.

use crate::engine::matcher;
use crate::models::comment::Comment;
use crate::models::drawing::Drawing;
use crate::models::version::ApprovalStatus;
use crate::sync::api::{CommentPayload, DrawingPayload, ReviewPayload};
use crate::sync::client::{SyncClient, SyncEvent, SyncPayload};
use chrono::Utc;
use std::collections::HashMap;
use std::sync::mpsc::Receiver;
use uuid::Uuid;

/// Load state for the active version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading {
        comments_loaded: bool,
        drawings_loaded: bool,
    },
    Ready,
    Error(String),
}

/// Undo record captured when an optimistic mutation is applied.
#[derive(Debug)]
enum Rollback {
    /// Fetches have nothing to undo; the entry only marks the request
    /// as live for staleness detection.
    None,
    RemoveComment(i64),
    RestoreComment(Comment),
    RestoreComments(Vec<Comment>),
    RemoveDrawing(i64),
}

/// Store-level outcomes the application layer reacts to (guest
/// ownership bookkeeping, status line, approval updates).
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    CommentCreated { id: i64 },
    CommentDeleted { id: i64 },
    ReviewConfirmed { status: ApprovalStatus },
    ReviewFailed { message: String },
    SyncFailed { message: String },
}

/// Authoritative annotation state for the active version.
pub struct AnnotationStore {
    client: SyncClient,
    receiver: Receiver<SyncEvent>,
    active_video: Option<i64>,
    state: LoadState,
    comments: Vec<Comment>,
    drawings: Vec<Drawing>,
    stream_url: Option<String>,
    /// Live requests: request id -> rollback to replay on failure.
    pending: HashMap<Uuid, Rollback>,
    /// Ids for optimistic records awaiting their server id. Negative so
    /// they can never collide with server-assigned ids.
    next_temp_id: i64,
}

impl AnnotationStore {
    pub fn new(client: SyncClient, receiver: Receiver<SyncEvent>) -> Self {
        Self {
            client,
            receiver,
            active_video: None,
            state: LoadState::Idle,
            comments: Vec::new(),
            drawings: Vec::new(),
            stream_url: None,
            pending: HashMap::new(),
            next_temp_id: -1,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn active_video(&self) -> Option<i64> {
        self.active_video
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn drawings(&self) -> &[Drawing] {
        &self.drawings
    }

    pub fn stream_url(&self) -> Option<&str> {
        self.stream_url.as_deref()
    }

    /// Drawings anchored to the frame at `current_time`, staged and
    /// committed alike.
    pub fn active_drawings(&self, current_time: f64) -> Vec<&Drawing> {
        self.drawings
            .iter()
            .filter(|d| matcher::is_active(d.timestamp, current_time))
            .collect()
    }

    fn take_temp_id(&mut self) -> i64 {
        let id = self.next_temp_id;
        self.next_temp_id -= 1;
        id
    }

    /// Activate a version: clear all local state and issue fresh
    /// fetches. In-flight requests for the previous version become
    /// unknown and their late responses are dropped.
    pub fn switch_version(&mut self, video_id: i64) {
        log::info!("Switching to video {}", video_id);
        self.active_video = Some(video_id);
        self.state = LoadState::Loading {
            comments_loaded: false,
            drawings_loaded: false,
        };
        self.comments.clear();
        self.drawings.clear();
        self.stream_url = None;
        self.pending.clear();

        let comments_req = Uuid::new_v4();
        self.pending.insert(comments_req, Rollback::None);
        self.client.fetch_comments(video_id, comments_req);

        let drawings_req = Uuid::new_v4();
        self.pending.insert(drawings_req, Rollback::None);
        self.client.fetch_drawings(video_id, drawings_req);

        let stream_req = Uuid::new_v4();
        self.pending.insert(stream_req, Rollback::None);
        self.client.resolve_stream(video_id, stream_req);

        let reviews_req = Uuid::new_v4();
        self.pending.insert(reviews_req, Rollback::None);
        self.client.fetch_reviews(video_id, reviews_req);
    }

    /// Optimistically add a comment (or reply) and send it to the
    /// server. Returns the temporary local id.
    pub fn create_comment(
        &mut self,
        content: String,
        timestamp: Option<f64>,
        timestamp_end: Option<f64>,
        parent_comment_id: Option<i64>,
        author: String,
    ) -> Option<i64> {
        let video_id = self.active_video?;
        let temp_id = self.take_temp_id();
        self.comments.push(Comment {
            id: temp_id,
            video_id,
            content: content.clone(),
            timestamp,
            timestamp_end,
            parent_comment_id,
            author,
            created_at: Utc::now(),
        });

        let request_id = Uuid::new_v4();
        self.pending
            .insert(request_id, Rollback::RemoveComment(temp_id));
        self.client.create_comment(
            CommentPayload {
                video_id,
                content,
                timestamp,
                timestamp_end,
                parent_comment_id,
            },
            request_id,
        );
        Some(temp_id)
    }

    /// Optimistically replace a comment's content and patch it on the
    /// server.
    pub fn edit_comment(&mut self, comment_id: i64, content: String) {
        let Some(video_id) = self.active_video else {
            return;
        };
        let Some(comment) = self.comments.iter_mut().find(|c| c.id == comment_id) else {
            return;
        };
        let previous = comment.clone();
        comment.content = content.clone();

        let request_id = Uuid::new_v4();
        self.pending
            .insert(request_id, Rollback::RestoreComment(previous));
        self.client
            .edit_comment(video_id, comment_id, content, request_id);
    }

    /// Optimistically remove a comment and every reply under it, then
    /// delete it on the server.
    pub fn delete_comment(&mut self, comment_id: i64) {
        let Some(video_id) = self.active_video else {
            return;
        };
        let mut removed = Vec::new();
        self.comments.retain(|c| {
            if c.id == comment_id || c.parent_comment_id == Some(comment_id) {
                removed.push(c.clone());
                false
            } else {
                true
            }
        });
        if removed.is_empty() {
            return;
        }

        if comment_id < 0 {
            // Never reached the server; nothing to delete remotely.
            log::debug!("Dropped unsynced comment {}", comment_id);
            return;
        }

        let request_id = Uuid::new_v4();
        self.pending
            .insert(request_id, Rollback::RestoreComments(removed));
        self.client.delete_comment(video_id, comment_id, request_id);
    }

    /// Stage a completed stroke. When `persist` is set it is posted
    /// immediately (authenticated flow); otherwise it stays staged until
    /// [`Self::commit_staged_drawings`] runs. Returns the local id.
    pub fn add_stroke(&mut self, mut drawing: Drawing, persist: bool) -> Option<i64> {
        self.active_video?;
        let temp_id = self.take_temp_id();
        drawing.id = temp_id;
        drawing.committed = false;
        self.drawings.push(drawing);
        if persist {
            self.persist_drawing(temp_id);
        }
        Some(temp_id)
    }

    /// Post every staged stroke that is not already on its way to the
    /// server. Guest strokes ride along with the comment submit.
    pub fn commit_staged_drawings(&mut self) {
        let staged: Vec<i64> = self
            .drawings
            .iter()
            .filter(|d| !d.committed)
            .map(|d| d.id)
            .filter(|id| !self.drawing_in_flight(*id))
            .collect();
        for id in staged {
            self.persist_drawing(id);
        }
    }

    fn drawing_in_flight(&self, drawing_id: i64) -> bool {
        self.pending
            .values()
            .any(|r| matches!(r, Rollback::RemoveDrawing(id) if *id == drawing_id))
    }

    fn persist_drawing(&mut self, drawing_id: i64) {
        let Some(drawing) = self.drawings.iter().find(|d| d.id == drawing_id) else {
            return;
        };
        let payload = DrawingPayload::from_drawing(drawing);
        let request_id = Uuid::new_v4();
        self.pending
            .insert(request_id, Rollback::RemoveDrawing(drawing_id));
        self.client.create_drawing(payload, request_id);
    }

    /// Submit an approval decision for the active version. The version
    /// record itself lives with the caller, which applies the status
    /// optimistically and reverts on [`StoreEvent::ReviewFailed`].
    pub fn submit_review(&mut self, status: ApprovalStatus, notes: String) {
        let Some(video_id) = self.active_video else {
            return;
        };
        let request_id = Uuid::new_v4();
        self.pending.insert(request_id, Rollback::None);
        self.client.submit_review(
            ReviewPayload {
                video_id,
                status: status.as_wire().to_string(),
                notes,
            },
            request_id,
        );
    }

    /// Drain completed network operations. Call once per frame.
    pub fn poll(&mut self) -> Vec<StoreEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.receiver.try_recv() {
            if let Some(out) = self.handle_event(event) {
                events.push(out);
            }
        }
        events
    }

    fn handle_event(&mut self, event: SyncEvent) -> Option<StoreEvent> {
        if Some(event.video_id) != self.active_video {
            log::debug!(
                "Discarding response for inactive video {} (active: {:?})",
                event.video_id,
                self.active_video
            );
            self.pending.remove(&event.request_id);
            return None;
        }
        let Some(rollback) = self.pending.remove(&event.request_id) else {
            // Issued before a switch away and back; the lists were
            // rebuilt since, so the response no longer applies.
            log::debug!("Discarding response for unknown request {}", event.request_id);
            return None;
        };

        match event.payload {
            SyncPayload::CommentsLoaded(Ok(comments)) => {
                self.comments = comments;
                self.mark_loaded(true, false);
                None
            }
            SyncPayload::DrawingsLoaded(Ok(drawings)) => {
                self.drawings = drawings;
                self.mark_loaded(false, true);
                None
            }
            SyncPayload::CommentsLoaded(Err(e)) | SyncPayload::DrawingsLoaded(Err(e)) => {
                let message = e.to_string();
                log::error!("Failed to load annotations: {}", message);
                self.state = LoadState::Error(message.clone());
                Some(StoreEvent::SyncFailed { message })
            }
            SyncPayload::CommentCreated(Ok(server)) => {
                if let Rollback::RemoveComment(temp_id) = rollback {
                    if let Some(local) = self.comments.iter_mut().find(|c| c.id == temp_id) {
                        *local = server.clone();
                    } else {
                        self.comments.push(server.clone());
                    }
                }
                Some(StoreEvent::CommentCreated { id: server.id })
            }
            SyncPayload::CommentEdited(Ok(server)) => {
                if let Some(local) = self.comments.iter_mut().find(|c| c.id == server.id) {
                    *local = server;
                }
                None
            }
            SyncPayload::CommentDeleted(Ok(id)) => Some(StoreEvent::CommentDeleted { id }),
            SyncPayload::DrawingCreated(Ok(server)) => {
                if let Rollback::RemoveDrawing(temp_id) = rollback {
                    if let Some(local) = self.drawings.iter_mut().find(|d| d.id == temp_id) {
                        *local = server;
                    } else {
                        self.drawings.push(server);
                    }
                }
                None
            }
            SyncPayload::StreamResolved(Ok(url)) => {
                self.stream_url = Some(url);
                None
            }
            SyncPayload::ReviewSubmitted(Ok(record)) => {
                let status = ApprovalStatus::from_wire(&record.status)
                    .unwrap_or(ApprovalStatus::Pending);
                Some(StoreEvent::ReviewConfirmed { status })
            }
            SyncPayload::ReviewSubmitted(Err(e)) => Some(StoreEvent::ReviewFailed {
                message: e.to_string(),
            }),
            SyncPayload::ReviewsLoaded(Ok(records)) => {
                // The latest decision wins; earlier records are history.
                let latest = records.into_iter().max_by_key(|r| r.id)?;
                let status =
                    ApprovalStatus::from_wire(&latest.status).unwrap_or(ApprovalStatus::Pending);
                Some(StoreEvent::ReviewConfirmed { status })
            }
            SyncPayload::ReviewsLoaded(Err(e)) => {
                // History is advisory; the session's status stands.
                log::warn!("Could not load review history: {}", e);
                None
            }
            SyncPayload::CommentCreated(Err(e))
            | SyncPayload::CommentEdited(Err(e))
            | SyncPayload::CommentDeleted(Err(e))
            | SyncPayload::DrawingCreated(Err(e))
            | SyncPayload::StreamResolved(Err(e)) => {
                let message = e.to_string();
                log::error!("Sync operation failed, rolling back: {}", message);
                self.apply_rollback(rollback);
                Some(StoreEvent::SyncFailed { message })
            }
        }
    }

    fn mark_loaded(&mut self, comments: bool, drawings: bool) {
        if let LoadState::Loading {
            comments_loaded,
            drawings_loaded,
        } = &mut self.state
        {
            *comments_loaded |= comments;
            *drawings_loaded |= drawings;
            if *comments_loaded && *drawings_loaded {
                self.state = LoadState::Ready;
                log::info!(
                    "Video {} ready: {} comments, {} drawings",
                    self.active_video.unwrap_or_default(),
                    self.comments.len(),
                    self.drawings.len()
                );
            }
        }
    }

    fn apply_rollback(&mut self, rollback: Rollback) {
        match rollback {
            Rollback::None => {}
            Rollback::RemoveComment(id) => self.comments.retain(|c| c.id != id),
            Rollback::RestoreComment(comment) => {
                if let Some(local) = self.comments.iter_mut().find(|c| c.id == comment.id) {
                    *local = comment;
                }
            }
            Rollback::RestoreComments(comments) => self.comments.extend(comments),
            Rollback::RemoveDrawing(id) => self.drawings.retain(|d| d.id != id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::drawing::Point;
    use crate::models::identity::Identity;
    use crate::sync::client::SyncError;

    fn test_store() -> AnnotationStore {
        // Port 9 (discard) is never listened on; the spawned request
        // threads fail quietly and their events are never polled.
        let (client, receiver) = SyncClient::new(
            "http://127.0.0.1:9".to_string(),
            Identity::User {
                username: "alice".to_string(),
                token: "tok".to_string(),
            },
        );
        AnnotationStore::new(client, receiver)
    }

    fn server_comment(id: i64, video_id: i64, timestamp: Option<f64>) -> Comment {
        Comment {
            id,
            video_id,
            content: format!("comment {}", id),
            timestamp,
            timestamp_end: None,
            parent_comment_id: None,
            author: "alice".to_string(),
            created_at: Utc::now(),
        }
    }

    /// Feed load responses so the store reaches Ready for `video_id`.
    fn make_ready(store: &mut AnnotationStore, video_id: i64, comments: Vec<Comment>) {
        store.switch_version(video_id);
        let ids: Vec<Uuid> = store.pending.keys().copied().collect();
        let _ = store.handle_event(SyncEvent {
            video_id,
            request_id: ids[0],
            payload: SyncPayload::CommentsLoaded(Ok(comments)),
        });
        let _ = store.handle_event(SyncEvent {
            video_id,
            request_id: ids[1],
            payload: SyncPayload::DrawingsLoaded(Ok(Vec::new())),
        });
    }

    fn mutation_request(store: &AnnotationStore) -> Uuid {
        *store
            .pending
            .iter()
            .find(|(_, r)| !matches!(r, Rollback::None))
            .map(|(id, _)| id)
            .expect("a mutation request should be pending")
    }

    fn server_error() -> SyncError {
        SyncError::Server {
            status: 500,
            message: "boom".to_string(),
        }
    }

    #[test]
    fn test_switch_version_clears_previous_state() {
        let mut store = test_store();
        make_ready(&mut store, 1, vec![server_comment(10, 1, Some(5.0))]);
        assert_eq!(store.comments().len(), 1);

        store.switch_version(2);
        assert!(store.comments().is_empty());
        assert!(store.drawings().is_empty());
        assert_eq!(store.stream_url(), None);
        assert!(matches!(store.state(), LoadState::Loading { .. }));
    }

    #[test]
    fn test_stale_response_for_previous_version_is_discarded() {
        let mut store = test_store();
        store.switch_version(1);
        let old_request = *store.pending.keys().next().unwrap();
        store.switch_version(2);

        // Late response tagged with the old video id.
        let out = store.handle_event(SyncEvent {
            video_id: 1,
            request_id: old_request,
            payload: SyncPayload::CommentsLoaded(Ok(vec![server_comment(10, 1, None)])),
        });
        assert_eq!(out, None);
        assert!(store.comments().is_empty());
    }

    #[test]
    fn test_response_with_unknown_request_id_is_discarded() {
        // Switch A -> B -> A: a response from the first visit to A
        // matches the active video id but not any live request.
        let mut store = test_store();
        store.switch_version(1);
        let first_visit_request = *store.pending.keys().next().unwrap();
        store.switch_version(2);
        store.switch_version(1);

        let out = store.handle_event(SyncEvent {
            video_id: 1,
            request_id: first_visit_request,
            payload: SyncPayload::CommentsLoaded(Ok(vec![server_comment(10, 1, None)])),
        });
        assert_eq!(out, None);
        assert!(store.comments().is_empty());
    }

    #[test]
    fn test_load_state_becomes_ready_after_both_fetches() {
        let mut store = test_store();
        make_ready(&mut store, 1, Vec::new());
        assert_eq!(*store.state(), LoadState::Ready);
    }

    #[test]
    fn test_create_comment_is_optimistic_and_reconciles_server_id() {
        let mut store = test_store();
        make_ready(&mut store, 1, Vec::new());

        let temp_id = store
            .create_comment("fix color".to_string(), Some(12.3), None, None, "alice".into())
            .unwrap();
        assert!(temp_id < 0);
        assert_eq!(store.comments().len(), 1);

        let request_id = mutation_request(&store);
        let mut server = server_comment(42, 1, Some(12.3));
        server.content = "fix color".to_string();
        let out = store.handle_event(SyncEvent {
            video_id: 1,
            request_id,
            payload: SyncPayload::CommentCreated(Ok(server)),
        });
        assert_eq!(out, Some(StoreEvent::CommentCreated { id: 42 }));
        assert_eq!(store.comments().len(), 1);
        assert_eq!(store.comments()[0].id, 42);
    }

    #[test]
    fn test_failed_create_rolls_the_comment_back() {
        let mut store = test_store();
        make_ready(&mut store, 1, Vec::new());
        store.create_comment("typo".to_string(), None, None, None, "alice".into());
        let request_id = mutation_request(&store);

        let out = store.handle_event(SyncEvent {
            video_id: 1,
            request_id,
            payload: SyncPayload::CommentCreated(Err(server_error())),
        });
        assert!(matches!(out, Some(StoreEvent::SyncFailed { .. })));
        assert!(store.comments().is_empty());
    }

    #[test]
    fn test_failed_edit_restores_previous_content() {
        let mut store = test_store();
        make_ready(&mut store, 1, vec![server_comment(10, 1, Some(5.0))]);

        store.edit_comment(10, "edited".to_string());
        assert_eq!(store.comments()[0].content, "edited");

        let request_id = mutation_request(&store);
        let _ = store.handle_event(SyncEvent {
            video_id: 1,
            request_id,
            payload: SyncPayload::CommentEdited(Err(server_error())),
        });
        assert_eq!(store.comments()[0].content, "comment 10");
    }

    #[test]
    fn test_delete_cascades_to_replies() {
        let mut store = test_store();
        let mut reply = server_comment(11, 1, None);
        reply.parent_comment_id = Some(10);
        let unrelated = server_comment(12, 1, Some(9.0));
        make_ready(
            &mut store,
            1,
            vec![server_comment(10, 1, Some(5.0)), reply, unrelated],
        );

        store.delete_comment(10);
        let remaining: Vec<i64> = store.comments().iter().map(|c| c.id).collect();
        assert_eq!(remaining, vec![12]);
    }

    #[test]
    fn test_failed_delete_restores_parent_and_replies() {
        let mut store = test_store();
        let mut reply = server_comment(11, 1, None);
        reply.parent_comment_id = Some(10);
        make_ready(&mut store, 1, vec![server_comment(10, 1, Some(5.0)), reply]);

        store.delete_comment(10);
        assert!(store.comments().is_empty());

        let request_id = mutation_request(&store);
        let _ = store.handle_event(SyncEvent {
            video_id: 1,
            request_id,
            payload: SyncPayload::CommentDeleted(Err(server_error())),
        });
        assert_eq!(store.comments().len(), 2);
    }

    #[test]
    fn test_stroke_commits_on_server_response() {
        let mut store = test_store();
        make_ready(&mut store, 1, Vec::new());

        let drawing = Drawing::new(1, 7.05, vec![Point::new(0.5, 0.5)], "#f97316".into());
        let temp_id = store.add_stroke(drawing, true).unwrap();
        assert!(!store.drawings()[0].committed);

        let request_id = mutation_request(&store);
        let mut server = Drawing::new(1, 7.05, vec![Point::new(0.5, 0.5)], "#f97316".into());
        server.id = 77;
        server.committed = true;
        let _ = store.handle_event(SyncEvent {
            video_id: 1,
            request_id,
            payload: SyncPayload::DrawingCreated(Ok(server)),
        });
        assert_eq!(store.drawings().len(), 1);
        assert_eq!(store.drawings()[0].id, 77);
        assert!(store.drawings()[0].committed);
        assert_ne!(store.drawings()[0].id, temp_id);
    }

    #[test]
    fn test_active_drawings_respect_tolerance_window() {
        let mut store = test_store();
        make_ready(&mut store, 1, Vec::new());
        let drawing = Drawing::new(1, 7.05, vec![Point::new(0.5, 0.5)], "#f97316".into());
        store.add_stroke(drawing, false);

        assert_eq!(store.active_drawings(7.05).len(), 1);
        assert_eq!(store.active_drawings(7.0).len(), 1);
        assert_eq!(store.active_drawings(7.14).len(), 1);
        assert!(store.active_drawings(7.15).is_empty());
        assert!(store.active_drawings(6.95).is_empty());
    }

    #[test]
    fn test_commit_staged_drawings_skips_in_flight_strokes() {
        let mut store = test_store();
        make_ready(&mut store, 1, Vec::new());
        let staged = Drawing::new(1, 3.0, vec![Point::new(0.1, 0.1)], "#ffffff".into());
        let in_flight = Drawing::new(1, 4.0, vec![Point::new(0.2, 0.2)], "#ffffff".into());
        store.add_stroke(staged, false);
        let in_flight_id = store.add_stroke(in_flight, true).unwrap();
        assert!(store.drawing_in_flight(in_flight_id));

        store.commit_staged_drawings();
        // One request per stroke: the already-persisting one is not re-sent.
        let drawing_requests = store
            .pending
            .values()
            .filter(|r| matches!(r, Rollback::RemoveDrawing(_)))
            .count();
        assert_eq!(drawing_requests, 2);
    }

    #[test]
    fn test_review_history_applies_latest_decision() {
        let mut store = test_store();
        make_ready(&mut store, 1, Vec::new());
        let request_id = *store.pending.keys().next().unwrap();

        let record = |id, status: &str| crate::sync::api::ReviewRecord {
            id,
            video_id: 1,
            status: status.to_string(),
            notes: String::new(),
        };
        let out = store.handle_event(SyncEvent {
            video_id: 1,
            request_id,
            payload: SyncPayload::ReviewsLoaded(Ok(vec![
                record(3, "changes_requested"),
                record(7, "approved"),
                record(5, "pending"),
            ])),
        });
        assert_eq!(
            out,
            Some(StoreEvent::ReviewConfirmed {
                status: ApprovalStatus::Approved
            })
        );
    }

    #[test]
    fn test_review_events_round_status_through_wire_form() {
        let mut store = test_store();
        make_ready(&mut store, 1, Vec::new());
        store.submit_review(ApprovalStatus::Approved, "ship it".to_string());
        let request_id = *store
            .pending
            .iter()
            .filter(|(_, r)| matches!(r, Rollback::None))
            .map(|(id, _)| id)
            .last()
            .unwrap();

        let out = store.handle_event(SyncEvent {
            video_id: 1,
            request_id,
            payload: SyncPayload::ReviewSubmitted(Ok(crate::sync::api::ReviewRecord {
                id: 1,
                video_id: 1,
                status: "approved".to_string(),
                notes: "ship it".to_string(),
            })),
        });
        assert_eq!(
            out,
            Some(StoreEvent::ReviewConfirmed {
                status: ApprovalStatus::Approved
            })
        );
    }
}
