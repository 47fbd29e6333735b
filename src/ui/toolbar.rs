// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Toolbar and tool selection UI.
//!
//! Tool buttons (select / draw / range), stroke color swatches, and the
//! approval controls for sessions that may approve.

use crate::app::Tool;
use crate::engine::access::Capabilities;
use crate::engine::stroke::DrawingEngine;
use crate::models::version::ApprovalStatus;
use crate::ui::canvas::parse_color;

/// Stroke color presets.
const SWATCHES: [&str; 4] = ["#f97316", "#ef4444", "#22c55e", "#38bdf8"];

/// Result of toolbar interaction.
pub enum ToolbarAction {
    None,
    Approve,
    RequestChanges,
}

/// Display the toolbar.
pub fn show(
    ui: &mut egui::Ui,
    current_tool: &mut Tool,
    engine: &mut DrawingEngine,
    caps: &Capabilities,
    approval: Option<ApprovalStatus>,
) -> ToolbarAction {
    let mut action = ToolbarAction::None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        ui.label("Tools:");
        ui.separator();

        if ui
            .selectable_label(*current_tool == Tool::Select, "⬆ Select")
            .clicked()
        {
            *current_tool = Tool::Select;
        }
        if ui
            .selectable_label(*current_tool == Tool::Draw, "✏ Draw")
            .clicked()
        {
            *current_tool = Tool::Draw;
        }
        if ui
            .selectable_label(*current_tool == Tool::Range, "⇿ Range")
            .clicked()
        {
            *current_tool = Tool::Range;
        }

        ui.separator();

        if *current_tool == Tool::Draw {
            for swatch in SWATCHES {
                let selected = engine.color() == swatch;
                let (rect, response) =
                    ui.allocate_exact_size(egui::vec2(16.0, 16.0), egui::Sense::click());
                ui.painter().rect_filled(rect, 3.0, parse_color(swatch));
                if selected {
                    ui.painter().rect_stroke(
                        rect,
                        3.0,
                        egui::Stroke::new(2.0, egui::Color32::WHITE),
                    );
                }
                if response.clicked() {
                    engine.set_color(swatch.to_string());
                }
            }
            ui.separator();
        }

        let tool_text = match current_tool {
            Tool::Select => "Scrub the timeline, read and reply to comments",
            Tool::Draw => "Drag on the frame to draw; pause first",
            Tool::Range => "Drag on the timeline to adjust the out-point, then submit",
        };
        ui.label(egui::RichText::new(tool_text).italics().weak());

        if caps.can_approve {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let status = approval.unwrap_or(ApprovalStatus::Pending);
                if ui
                    .add_enabled(
                        status != ApprovalStatus::ChangesRequested,
                        egui::Button::new("Request changes"),
                    )
                    .clicked()
                {
                    action = ToolbarAction::RequestChanges;
                }
                if ui
                    .add_enabled(status != ApprovalStatus::Approved, egui::Button::new("Approve"))
                    .clicked()
                {
                    action = ToolbarAction::Approve;
                }
                ui.label(egui::RichText::new(status.as_wire()).weak());
            });
        }
    });

    action
}
