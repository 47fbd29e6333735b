// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! `ReviewApp` constructs the playback clock, annotation store, and
//! stroke engine once and passes them to the UI modules explicitly;
//! nothing is resolved through ambient state. Each frame it polls the
//! store for completed network operations, advances the clock, and
//! routes the action enums returned by the UI panels.

use crate::engine::access::{self, Capabilities};
use crate::engine::range::RangeSelector;
use crate::engine::store::{AnnotationStore, StoreEvent};
use crate::engine::stroke::DrawingEngine;
use crate::io::profile;
use crate::io::session::Session;
use crate::models::identity::{GuestProfile, Identity};
use crate::models::version::{sort_versions, ApprovalStatus, MediaVersion};
use crate::playback::{PlaybackClock, POLL_INTERVAL};
use crate::sync::client::SyncClient;
use crate::ui::comments::CommentComposer;
use crate::ui::{canvas, comments, timeline, toolbar};
use anyhow::Result;
use std::time::{Duration, Instant};

/// How long a transient status message stays visible.
const STATUS_TTL: Duration = Duration::from_secs(4);

/// Current tool selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Select,
    Draw,
    Range,
}

/// Main application state.
pub struct ReviewApp {
    identity: Identity,
    capabilities: Capabilities,
    guest_profile: GuestProfile,

    versions: Vec<MediaVersion>,
    active_version_id: i64,

    clock: PlaybackClock,
    store: AnnotationStore,
    engine: DrawingEngine,
    selector: RangeSelector,
    composer: CommentComposer,
    tool: Tool,

    /// Transient status line (validation and sync failures).
    status: Option<(String, Instant)>,
    /// Approval status to restore if the in-flight review fails.
    review_revert: Option<ApprovalStatus>,
}

impl ReviewApp {
    /// Create the application from a loaded session description.
    pub fn new(session: Session) -> Result<Self> {
        let identity = session.identity()?;
        let capabilities = access::resolve(&identity);

        let mut versions = session.versions;
        sort_versions(&mut versions);
        // load_session rejects empty version lists
        let active = versions[0].clone();

        let (client, receiver) = SyncClient::new(session.api_base_url, identity.clone());
        let mut store = AnnotationStore::new(client, receiver);
        store.switch_version(active.id);

        let guest_profile = profile::load_profile().unwrap_or_else(|e| {
            log::warn!("Could not load guest profile: {}", e);
            GuestProfile::default()
        });
        let composer = CommentComposer {
            guest_name: guest_profile.display_name.clone(),
            ..Default::default()
        };

        log::info!(
            "Session started as {} with {} versions",
            if identity.is_authenticated() {
                "user"
            } else {
                "guest"
            },
            versions.len()
        );

        Ok(Self {
            identity,
            capabilities,
            guest_profile,
            clock: PlaybackClock::new(active.duration),
            active_version_id: active.id,
            versions,
            store,
            engine: DrawingEngine::new(),
            selector: RangeSelector::default(),
            composer,
            tool: Tool::Select,
            status: None,
            review_revert: None,
        })
    }

    fn active_version(&self) -> Option<&MediaVersion> {
        self.versions.iter().find(|v| v.id == self.active_version_id)
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some((message.into(), Instant::now()));
    }

    fn save_guest_profile(&self) {
        if let Err(e) = profile::save_profile(&self.guest_profile) {
            log::error!("Failed to persist guest profile: {}", e);
        }
    }

    fn handle_store_event(&mut self, event: StoreEvent) {
        match event {
            StoreEvent::CommentCreated { id } => {
                if !self.identity.is_authenticated() {
                    self.guest_profile.claim(id);
                    self.save_guest_profile();
                }
            }
            StoreEvent::CommentDeleted { id } => {
                if !self.identity.is_authenticated() {
                    self.guest_profile.release(id);
                    self.save_guest_profile();
                }
            }
            StoreEvent::ReviewConfirmed { status } => {
                self.review_revert = None;
                self.apply_approval(status);
            }
            StoreEvent::ReviewFailed { message } => {
                if let Some(previous) = self.review_revert.take() {
                    self.apply_approval(previous);
                }
                self.set_status(message);
            }
            StoreEvent::SyncFailed { message } => {
                self.set_status(message);
            }
        }
    }

    fn apply_approval(&mut self, status: ApprovalStatus) {
        let id = self.active_version_id;
        if let Some(version) = self.versions.iter_mut().find(|v| v.id == id) {
            version.approval_status = status;
        }
    }

    fn submit_review(&mut self, status: ApprovalStatus) {
        let previous = self
            .active_version()
            .map(|v| v.approval_status)
            .unwrap_or(ApprovalStatus::Pending);
        self.review_revert = Some(previous);
        self.apply_approval(status);
        self.store
            .submit_review(status, self.composer.text.trim().to_string());
    }

    /// Switch the active media version: clears annotation state, resets
    /// the clock, and discards any in-progress authoring.
    fn activate_version(&mut self, version_id: i64) {
        let Some(version) = self.versions.iter().find(|v| v.id == version_id).cloned() else {
            return;
        };
        self.active_version_id = version.id;
        self.clock.pause();
        self.clock.seek(0.0);
        self.clock.set_duration(version.duration);
        self.store.switch_version(version.id);
        self.selector.cancel();
        self.engine.cancel();
        self.composer.reply_to = None;
        self.composer.editing = None;
        self.tool = Tool::Select;
    }

    /// Submit the composer draft as a comment, reply, or range comment.
    fn submit_draft(&mut self) {
        let is_guest = !self.identity.is_authenticated();
        if let Some(message) = self.composer.validation_error(is_guest) {
            self.set_status(message);
            return;
        }

        let author = match &self.identity {
            Identity::User { username, .. } => username.clone(),
            Identity::Guest { .. } => self.composer.guest_name.trim().to_string(),
        };

        // Replies anchor to the current play time; a live range selection
        // wins over the point anchor; otherwise honor the anchor toggle.
        let parent = self.composer.reply_to;
        let (timestamp, timestamp_end) = if parent.is_some() {
            (Some(self.clock.position()), None)
        } else if let Some((start, end)) = self.selector.take() {
            (Some(start), Some(end))
        } else if self.composer.anchor_to_time {
            (Some(self.clock.position()), None)
        } else {
            (None, None)
        };

        let content = self.composer.text.trim().to_string();
        self.store
            .create_comment(content, timestamp, timestamp_end, parent, author);

        if is_guest {
            // Strokes staged while composing ride along with the submit.
            self.store.commit_staged_drawings();
            if self.guest_profile.display_name != self.composer.guest_name.trim() {
                self.guest_profile.display_name = self.composer.guest_name.trim().to_string();
                self.save_guest_profile();
            }
        }

        self.composer.clear_draft();
        if self.tool == Tool::Range {
            self.tool = Tool::Select;
        }
    }
}

impl eframe::App for ReviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Completed network operations.
        for event in self.store.poll() {
            self.handle_store_event(event);
        }

        self.clock.tick();
        if self.clock.is_playing() {
            // Draw mode ends when playback resumes.
            if self.tool == Tool::Draw {
                self.engine.cancel();
                self.tool = Tool::Select;
                log::info!("Exited draw mode on playback");
            }
            // Poll fallback: keep time advancing without input events.
            ctx.request_repaint_after(POLL_INTERVAL);
        }

        // Range mode tracks the tool selection.
        if self.tool == Tool::Range && !self.selector.is_selecting() {
            self.selector
                .begin(self.clock.position(), self.clock.duration());
        } else if self.tool != Tool::Range && self.selector.is_selecting() {
            self.selector.cancel();
        }

        // Keyboard.
        if !ctx.wants_keyboard_input() && ctx.input(|i| i.key_pressed(egui::Key::Space)) {
            self.clock.toggle();
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            if self.engine.is_active() {
                self.engine.cancel();
            } else if self.selector.is_selecting() {
                self.tool = Tool::Select;
                self.selector.cancel();
            } else {
                self.composer.reply_to = None;
                self.composer.editing = None;
            }
        }

        // Toolbar.
        let approval = self.active_version().map(|v| v.approval_status);
        let toolbar_action = egui::TopBottomPanel::top("toolbar")
            .show(ctx, |ui| {
                toolbar::show(
                    ui,
                    &mut self.tool,
                    &mut self.engine,
                    &self.capabilities,
                    approval,
                )
            })
            .inner;
        match toolbar_action {
            toolbar::ToolbarAction::Approve => self.submit_review(ApprovalStatus::Approved),
            toolbar::ToolbarAction::RequestChanges => {
                self.submit_review(ApprovalStatus::ChangesRequested)
            }
            toolbar::ToolbarAction::None => {}
        }

        // Comment sidebar.
        let comments_action = egui::SidePanel::right("comments")
            .default_width(320.0)
            .show(ctx, |ui| {
                comments::show(
                    ui,
                    &mut self.composer,
                    &self.store,
                    &self.versions,
                    self.active_version_id,
                    &self.identity,
                    &self.guest_profile,
                    &self.capabilities,
                    self.selector.is_selecting(),
                )
            })
            .inner;
        match comments_action {
            comments::CommentsAction::SwitchVersion(id) => self.activate_version(id),
            comments::CommentsAction::JumpTo(t) => {
                self.clock.pause();
                self.clock.seek(t);
            }
            comments::CommentsAction::Submit => self.submit_draft(),
            comments::CommentsAction::SaveEdit { comment_id } => {
                let content = self.composer.edit_text.trim().to_string();
                if !content.is_empty() {
                    self.store.edit_comment(comment_id, content);
                }
                self.composer.editing = None;
                self.composer.edit_text.clear();
            }
            comments::CommentsAction::Delete { comment_id } => {
                self.store.delete_comment(comment_id);
            }
            comments::CommentsAction::None => {}
        }

        // Timeline and status line.
        if self
            .status
            .as_ref()
            .is_some_and(|(_, since)| since.elapsed() >= STATUS_TTL)
        {
            self.status = None;
        }
        egui::TopBottomPanel::bottom("timeline").show(ctx, |ui| {
            timeline::show(ui, &mut self.clock, &self.store, &mut self.selector);
            if let Some((message, since)) = &self.status {
                ui.colored_label(egui::Color32::LIGHT_RED, message);
                ui.ctx().request_repaint_after(STATUS_TTL - since.elapsed());
            }
        });

        // Canvas.
        let draw_mode = self.tool == Tool::Draw && !self.clock.is_playing();
        let version = self.active_version().cloned();
        let canvas_action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                canvas::show(
                    ui,
                    &mut self.engine,
                    &self.store,
                    version.as_ref(),
                    self.clock.position(),
                    draw_mode,
                )
            })
            .inner;
        if let canvas::CanvasAction::StrokeFinished(drawing) = canvas_action {
            // Authenticated strokes persist immediately; guest strokes
            // stay staged until a comment submit.
            self.store
                .add_stroke(drawing, self.identity.is_authenticated());
        }
    }
}
