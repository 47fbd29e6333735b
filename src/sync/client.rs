// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! HTTP sync client.
//!
//! Every operation runs a blocking request on a short-lived background
//! thread and reports back through an mpsc channel, so nothing blocks
//! the UI loop. Events are tagged with the originating video id and a
//! request id; the store matches them against its pending operations and
//! discards events for versions that are no longer active.
//!
//! Guests reach the same routes mounted under `/shares/{token}` with an
//! optional `x-share-password` header instead of a bearer token.

use crate::models::comment::Comment;
use crate::models::drawing::Drawing;
use crate::models::identity::Identity;
use crate::sync::api::{
    CommentPatch, CommentPayload, DrawingPayload, DrawingRecord, ErrorBody, ReviewPayload,
    ReviewRecord, StreamUrl,
};
use reqwest::blocking::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::sync::mpsc::{channel, Receiver, Sender};
use uuid::Uuid;

/// Failures of a sync operation.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("{message}")]
    Server { status: u16, message: String },
}

/// One completed network operation, tagged for staleness detection.
#[derive(Debug)]
pub struct SyncEvent {
    /// The version the operation was issued for.
    pub video_id: i64,
    /// Correlates the event with the store's pending-operation ledger.
    pub request_id: Uuid,
    pub payload: SyncPayload,
}

#[derive(Debug)]
pub enum SyncPayload {
    CommentsLoaded(Result<Vec<Comment>, SyncError>),
    DrawingsLoaded(Result<Vec<Drawing>, SyncError>),
    CommentCreated(Result<Comment, SyncError>),
    CommentEdited(Result<Comment, SyncError>),
    CommentDeleted(Result<i64, SyncError>),
    DrawingCreated(Result<Drawing, SyncError>),
    StreamResolved(Result<String, SyncError>),
    ReviewSubmitted(Result<ReviewRecord, SyncError>),
    ReviewsLoaded(Result<Vec<ReviewRecord>, SyncError>),
}

/// Client for the review backend's comment/drawing/stream routes.
pub struct SyncClient {
    http: reqwest::blocking::Client,
    base_url: String,
    identity: Identity,
    sender: Sender<SyncEvent>,
}

impl SyncClient {
    /// Create a client and the receiving end of its event channel.
    pub fn new(base_url: String, identity: Identity) -> (Self, Receiver<SyncEvent>) {
        let (sender, receiver) = channel();
        let client = Self {
            http: reqwest::blocking::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            identity,
            sender,
        };
        (client, receiver)
    }

    /// Sender handle for injecting events. Used by tests.
    #[cfg(test)]
    pub fn sender(&self) -> Sender<SyncEvent> {
        self.sender.clone()
    }

    /// Resolve a route against the base URL, share-scoped for guests.
    fn url(&self, path: &str) -> String {
        match &self.identity {
            Identity::User { .. } => format!("{}{}", self.base_url, path),
            Identity::Guest { share_token, .. } => {
                format!("{}/shares/{}{}", self.base_url, share_token, path)
            }
        }
    }

    /// Attach credentials: bearer for users, share password for guests.
    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.identity {
            Identity::User { token, .. } => builder.bearer_auth(token),
            Identity::Guest { share_password, .. } => match share_password {
                Some(password) => builder.header("x-share-password", password),
                None => builder,
            },
        }
    }

    pub fn fetch_comments(&self, video_id: i64, request_id: Uuid) {
        let request = self.authorize(
            self.http
                .get(self.url(&format!("/comments/video/{}", video_id))),
        );
        let sender = self.sender.clone();
        std::thread::spawn(move || {
            let result = execute_json::<Vec<Comment>>(request);
            let _ = sender.send(SyncEvent {
                video_id,
                request_id,
                payload: SyncPayload::CommentsLoaded(result),
            });
        });
    }

    pub fn fetch_drawings(&self, video_id: i64, request_id: Uuid) {
        let request = self.authorize(
            self.http
                .get(self.url(&format!("/drawings/video/{}", video_id))),
        );
        let sender = self.sender.clone();
        std::thread::spawn(move || {
            let result = execute_json::<Vec<DrawingRecord>>(request)
                .map(|records| records.into_iter().map(DrawingRecord::into_drawing).collect());
            let _ = sender.send(SyncEvent {
                video_id,
                request_id,
                payload: SyncPayload::DrawingsLoaded(result),
            });
        });
    }

    pub fn create_comment(&self, payload: CommentPayload, request_id: Uuid) {
        let video_id = payload.video_id;
        let request = self.authorize(self.http.post(self.url("/comments")).json(&payload));
        let sender = self.sender.clone();
        std::thread::spawn(move || {
            let result = execute_json::<Comment>(request);
            let _ = sender.send(SyncEvent {
                video_id,
                request_id,
                payload: SyncPayload::CommentCreated(result),
            });
        });
    }

    pub fn edit_comment(&self, video_id: i64, comment_id: i64, content: String, request_id: Uuid) {
        let patch = CommentPatch { content };
        let request = self.authorize(
            self.http
                .patch(self.url(&format!("/comments/{}", comment_id)))
                .json(&patch),
        );
        let sender = self.sender.clone();
        std::thread::spawn(move || {
            let result = execute_json::<Comment>(request);
            let _ = sender.send(SyncEvent {
                video_id,
                request_id,
                payload: SyncPayload::CommentEdited(result),
            });
        });
    }

    pub fn delete_comment(&self, video_id: i64, comment_id: i64, request_id: Uuid) {
        let request =
            self.authorize(self.http.delete(self.url(&format!("/comments/{}", comment_id))));
        let sender = self.sender.clone();
        std::thread::spawn(move || {
            let result = execute_empty(request).map(|_| comment_id);
            let _ = sender.send(SyncEvent {
                video_id,
                request_id,
                payload: SyncPayload::CommentDeleted(result),
            });
        });
    }

    pub fn create_drawing(&self, payload: DrawingPayload, request_id: Uuid) {
        let video_id = payload.video_id;
        let request = self.authorize(self.http.post(self.url("/drawings")).json(&payload));
        let sender = self.sender.clone();
        std::thread::spawn(move || {
            let result =
                execute_json::<DrawingRecord>(request).map(DrawingRecord::into_drawing);
            let _ = sender.send(SyncEvent {
                video_id,
                request_id,
                payload: SyncPayload::DrawingCreated(result),
            });
        });
    }

    pub fn resolve_stream(&self, video_id: i64, request_id: Uuid) {
        let request = self.authorize(
            self.http
                .get(self.url(&format!("/videos/{}/stream", video_id))),
        );
        let sender = self.sender.clone();
        std::thread::spawn(move || {
            let result = execute_json::<StreamUrl>(request).map(|s| s.url);
            let _ = sender.send(SyncEvent {
                video_id,
                request_id,
                payload: SyncPayload::StreamResolved(result),
            });
        });
    }

    pub fn fetch_reviews(&self, video_id: i64, request_id: Uuid) {
        let request = self.authorize(self.http.get(self.url(&format!("/reviews/{}", video_id))));
        let sender = self.sender.clone();
        std::thread::spawn(move || {
            let result = execute_json::<Vec<ReviewRecord>>(request);
            let _ = sender.send(SyncEvent {
                video_id,
                request_id,
                payload: SyncPayload::ReviewsLoaded(result),
            });
        });
    }

    pub fn submit_review(&self, payload: ReviewPayload, request_id: Uuid) {
        let video_id = payload.video_id;
        let request = self.authorize(self.http.post(self.url("/reviews")).json(&payload));
        let sender = self.sender.clone();
        std::thread::spawn(move || {
            let result = execute_json::<ReviewRecord>(request);
            let _ = sender.send(SyncEvent {
                video_id,
                request_id,
                payload: SyncPayload::ReviewSubmitted(result),
            });
        });
    }
}

/// Run a request expecting a JSON body on success.
fn execute_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, SyncError> {
    let response = request.send()?;
    let response = check_status(response)?;
    Ok(response.json::<T>()?)
}

/// Run a request expecting an empty success response (DELETE -> 204).
fn execute_empty(request: RequestBuilder) -> Result<(), SyncError> {
    let response = request.send()?;
    check_status(response)?;
    Ok(())
}

/// Map non-success statuses to `SyncError::Server`, keeping the
/// server-provided message when the body carries one.
fn check_status(response: Response) -> Result<Response, SyncError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response
        .json::<ErrorBody>()
        .map(|body| body.message)
        .unwrap_or_else(|_| format!("request failed with status {}", status.as_u16()));
    Err(SyncError::Server {
        status: status.as_u16(),
        message,
    })
}
