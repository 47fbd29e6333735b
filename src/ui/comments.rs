// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Comment sidebar.
//!
//! Version selector, threaded comment list, and the composer. Comments
//! render as parent/replies trees via the thread organizer; edit and
//! delete controls only appear when the capability check passes, and a
//! guest without comment rights sees the composer disabled rather than
//! an error.

use crate::engine::access::{self, Capabilities};
use crate::engine::store::{AnnotationStore, LoadState};
use crate::engine::threads;
use crate::models::comment::Comment;
use crate::models::identity::{GuestProfile, Identity};
use crate::models::version::MediaVersion;
use crate::ui::timeline::format_time;

/// Result of sidebar interaction.
pub enum CommentsAction {
    None,
    SwitchVersion(i64),
    JumpTo(f64),
    /// Submit the composer draft (new comment or reply).
    Submit,
    SaveEdit {
        comment_id: i64,
    },
    Delete {
        comment_id: i64,
    },
}

/// Draft state for the comment composer.
pub struct CommentComposer {
    pub text: String,
    /// Set while replying to a thread.
    pub reply_to: Option<i64>,
    /// Comment currently being edited, with its working text.
    pub editing: Option<i64>,
    pub edit_text: String,
    /// Guest display name, persisted in the guest profile.
    pub guest_name: String,
    /// Anchor new comments to the current play time (vs. general).
    pub anchor_to_time: bool,
}

impl Default for CommentComposer {
    fn default() -> Self {
        Self {
            text: String::new(),
            reply_to: None,
            editing: None,
            edit_text: String::new(),
            guest_name: String::new(),
            anchor_to_time: true,
        }
    }
}

impl CommentComposer {
    /// Reset the draft after a submit or cancel.
    pub fn clear_draft(&mut self) {
        self.text.clear();
        self.reply_to = None;
    }

    /// Client-side validation; never reaches the network when Some.
    pub fn validation_error(&self, is_guest: bool) -> Option<&'static str> {
        if self.text.trim().is_empty() {
            return Some("Comment text is required");
        }
        if is_guest && self.guest_name.trim().is_empty() {
            return Some("Enter a display name first");
        }
        None
    }
}

/// Display the sidebar and report at most one action per frame.
#[allow(clippy::too_many_arguments)]
pub fn show(
    ui: &mut egui::Ui,
    composer: &mut CommentComposer,
    store: &AnnotationStore,
    versions: &[MediaVersion],
    active_version: i64,
    identity: &Identity,
    guest: &GuestProfile,
    caps: &Capabilities,
    range_pending: bool,
) -> CommentsAction {
    let mut action = CommentsAction::None;

    // Version selector, newest first.
    let selected_label = versions
        .iter()
        .find(|v| v.id == active_version)
        .map(|v| format!("v{} ({})", v.version_number, v.approval_status.as_wire()))
        .unwrap_or_else(|| "-".to_string());
    egui::ComboBox::from_label("Version")
        .selected_text(selected_label)
        .show_ui(ui, |ui| {
            for version in versions {
                let label = format!(
                    "v{} ({})",
                    version.version_number,
                    version.approval_status.as_wire()
                );
                if ui
                    .selectable_label(version.id == active_version, label)
                    .clicked()
                    && version.id != active_version
                {
                    action = CommentsAction::SwitchVersion(version.id);
                }
            }
        });

    ui.separator();

    match store.state() {
        LoadState::Loading { .. } => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading comments...");
            });
        }
        LoadState::Error(message) => {
            ui.colored_label(egui::Color32::LIGHT_RED, message);
        }
        _ => {}
    }

    // Threaded list.
    egui::ScrollArea::vertical()
        .auto_shrink([false, true])
        .show(ui, |ui| {
            for thread in threads::organize(store.comments()) {
                if let Some(a) =
                    show_comment(ui, composer, &thread.parent, identity, guest, false)
                {
                    action = a;
                }
                for reply in &thread.replies {
                    ui.indent(reply.id, |ui| {
                        if let Some(a) = show_comment(ui, composer, reply, identity, guest, true) {
                            action = a;
                        }
                    });
                }
                ui.separator();
            }
        });

    // Composer.
    ui.separator();
    if let Some(parent_id) = composer.reply_to {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(format!("Replying to comment #{}", parent_id)).weak(),
            );
            if ui.small_button("✖").clicked() {
                composer.reply_to = None;
            }
        });
    }

    if !identity.is_authenticated() {
        ui.horizontal(|ui| {
            ui.label("Name:");
            ui.text_edit_singleline(&mut composer.guest_name);
        });
    }

    if composer.reply_to.is_none() {
        ui.horizontal(|ui| {
            ui.add_enabled(
                !range_pending,
                egui::Checkbox::new(&mut composer.anchor_to_time, "Anchor to current time"),
            );
            if range_pending {
                ui.label(egui::RichText::new("range attached").weak());
            }
        });
    }

    ui.add(
        egui::TextEdit::multiline(&mut composer.text)
            .desired_rows(3)
            .hint_text("Leave feedback..."),
    );

    let validation = composer.validation_error(!identity.is_authenticated());
    ui.horizontal(|ui| {
        let can_submit = caps.can_comment && validation.is_none();
        if ui
            .add_enabled(can_submit, egui::Button::new("Submit"))
            .clicked()
        {
            action = CommentsAction::Submit;
        }
        if !caps.can_comment {
            ui.label(egui::RichText::new("This share is view-only").weak());
        } else if let Some(message) = validation {
            if !composer.text.is_empty() || !caps.can_comment {
                ui.label(egui::RichText::new(message).weak());
            }
        }
    });

    action
}

/// One comment row. Returns an action when a control was clicked.
fn show_comment(
    ui: &mut egui::Ui,
    composer: &mut CommentComposer,
    comment: &Comment,
    identity: &Identity,
    guest: &GuestProfile,
    is_reply: bool,
) -> Option<CommentsAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(&comment.author).strong());
        match (comment.timestamp, comment.timestamp_end) {
            (Some(start), Some(end)) => {
                let label = format!("{} - {}", format_time(start), format_time(end));
                if ui.small_button(label).clicked() {
                    action = Some(CommentsAction::JumpTo(start));
                }
            }
            (Some(t), None) => {
                if ui.small_button(format_time(t)).clicked() {
                    action = Some(CommentsAction::JumpTo(t));
                }
            }
            _ => {}
        }
        if comment.id < 0 {
            // Optimistic record still waiting for the server id.
            ui.label(egui::RichText::new("sending...").weak());
        }
    });

    if composer.editing == Some(comment.id) {
        ui.text_edit_multiline(&mut composer.edit_text);
        ui.horizontal(|ui| {
            let valid = !composer.edit_text.trim().is_empty();
            if ui.add_enabled(valid, egui::Button::new("Save")).clicked() {
                action = Some(CommentsAction::SaveEdit {
                    comment_id: comment.id,
                });
            }
            if ui.button("Cancel").clicked() {
                composer.editing = None;
                composer.edit_text.clear();
            }
        });
    } else {
        ui.label(&comment.content);
        ui.horizontal(|ui| {
            if !is_reply && ui.small_button("Reply").clicked() {
                composer.reply_to = Some(comment.id);
            }
            if access::can_modify(identity, guest, comment.id) && comment.id > 0 {
                if ui.small_button("Edit").clicked() {
                    composer.editing = Some(comment.id);
                    composer.edit_text = comment.content.clone();
                }
                if ui.small_button("Delete").clicked() {
                    action = Some(CommentsAction::Delete {
                        comment_id: comment.id,
                    });
                }
            }
        });
    }

    action
}
