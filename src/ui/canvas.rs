// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Video canvas with the drawing overlay.
//!
//! Shows the rendered video box (a placeholder frame fed by the resolved
//! stream URL) and rasterizes the drawings anchored to the current play
//! time plus the in-progress stroke. Pointer input in draw mode feeds
//! the stroke engine's pending buffer; the buffer is drained once per
//! frame before painting.

use crate::engine::store::{AnnotationStore, LoadState};
use crate::engine::stroke::{CanvasBox, DrawingEngine};
use crate::models::drawing::{Drawing, Point};
use crate::models::version::MediaVersion;
use crate::util::geometry;

/// Result of canvas interaction.
pub enum CanvasAction {
    None,
    /// A stroke was completed and should be staged in the store.
    StrokeFinished(Drawing),
}

/// Display the canvas area and handle drawing input.
pub fn show(
    ui: &mut egui::Ui,
    engine: &mut DrawingEngine,
    store: &AnnotationStore,
    version: Option<&MediaVersion>,
    current_time: f64,
    draw_mode: bool,
) -> CanvasAction {
    let mut action = CanvasAction::None;
    ui.style_mut().visuals.extreme_bg_color = egui::Color32::from_gray(40);

    let available_size = ui.available_size();

    egui::Frame::canvas(ui.style()).show(ui, |ui| {
        ui.set_min_size(available_size);

        let Some(version) = version else {
            show_welcome(ui);
            return;
        };

        // Fit the video box into the available space, centered.
        let available = ui.available_size();
        let (display_width, display_height) = geometry::fit_box(
            version.width as f64,
            version.height as f64,
            available.x as f64,
            available.y as f64,
        );
        let x_offset = (available.x - display_width as f32) / 2.0;
        let y_offset = (available.y - display_height as f32) / 2.0;
        let video_rect = egui::Rect::from_min_size(
            ui.min_rect().min + egui::vec2(x_offset, y_offset),
            egui::vec2(display_width as f32, display_height as f32),
        );
        let canvas_box: CanvasBox = (
            video_rect.min.x as f64,
            video_rect.min.y as f64,
            video_rect.width() as f64,
            video_rect.height() as f64,
        );

        // Placeholder frame; actual decode happens against the stream URL.
        ui.painter()
            .rect_filled(video_rect, 2.0, egui::Color32::from_gray(20));
        ui.painter().rect_stroke(
            video_rect,
            2.0,
            egui::Stroke::new(1.0, egui::Color32::from_gray(70)),
        );
        let frame_label = match (store.state(), store.stream_url()) {
            (LoadState::Loading { .. }, _) => "Loading version...".to_string(),
            (LoadState::Error(message), _) => format!("Load failed: {}", message),
            (_, Some(_)) => format!("v{}  {:.2}s", version.version_number, current_time),
            (_, None) => "Resolving stream...".to_string(),
        };
        ui.painter().text(
            video_rect.center(),
            egui::Align2::CENTER_CENTER,
            frame_label,
            egui::FontId::proportional(14.0),
            egui::Color32::from_gray(120),
        );

        // Pointer input for the stroke engine.
        if draw_mode {
            // Refresh the cached bounds if the canvas resized mid-stroke.
            engine.sync_canvas_box(canvas_box);

            let response = ui.allocate_rect(video_rect, egui::Sense::click_and_drag());
            if response.drag_started() {
                if let Some(pos) = response.interact_pointer_pos() {
                    engine.begin_stroke(pos.x as f64, pos.y as f64, canvas_box);
                }
            } else if response.dragged() {
                if let Some(pos) = response.interact_pointer_pos() {
                    engine.record_point(pos.x as f64, pos.y as f64);
                }
            }

            // One drain per frame: buffered moves become stroke points.
            engine.drain();

            let released = response.drag_stopped()
                || (engine.is_active() && !response.dragged() && !response.drag_started());
            if released {
                if let Some(drawing) = engine.finish(version.id, current_time) {
                    action = CanvasAction::StrokeFinished(drawing);
                }
            }
        }

        // Committed and staged drawings at the current frame.
        let painter = ui.painter();
        for drawing in store.active_drawings(current_time) {
            paint_points(
                painter,
                &drawing.points,
                &video_rect,
                parse_color(&drawing.color),
            );
        }

        // Live stroke on top.
        if engine.is_active() {
            let color = parse_color(engine.color());
            let points = engine.stroke_points().to_vec();
            paint_points(painter, &points, &video_rect, color);
        }
    });

    action
}

fn show_welcome(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(20.0);
            ui.heading(
                egui::RichText::new("REVU")
                    .size(32.0)
                    .color(egui::Color32::from_gray(200)),
            );
            ui.label(
                egui::RichText::new("Timed review comments and drawings for video")
                    .size(14.0)
                    .color(egui::Color32::from_gray(150)),
            );
        });
    });
}

/// Paint a stroke: line segments between consecutive points, or a dot
/// for a single-point stroke.
fn paint_points(
    painter: &egui::Painter,
    points: &[Point],
    video_rect: &egui::Rect,
    color: egui::Color32,
) {
    if points.is_empty() {
        return;
    }

    let screen_points: Vec<egui::Pos2> = points
        .iter()
        .map(|p| {
            let (x, y) = geometry::denormalize_in_box(
                p,
                video_rect.min.x as f64,
                video_rect.min.y as f64,
                video_rect.width() as f64,
                video_rect.height() as f64,
            );
            egui::pos2(x as f32, y as f32)
        })
        .collect();

    if screen_points.len() == 1 {
        painter.circle_filled(screen_points[0], 3.0, color);
        return;
    }
    for pair in screen_points.windows(2) {
        painter.line_segment([pair[0], pair[1]], egui::Stroke::new(2.5, color));
    }
}

/// Parse a "#rrggbb" color, falling back to orange on malformed input.
pub fn parse_color(hex: &str) -> egui::Color32 {
    let stripped = hex.trim_start_matches('#');
    if stripped.len() == 6 {
        if let Ok(value) = u32::from_str_radix(stripped, 16) {
            return egui::Color32::from_rgb(
                ((value >> 16) & 0xff) as u8,
                ((value >> 8) & 0xff) as u8,
                (value & 0xff) as u8,
            );
        }
    }
    egui::Color32::from_rgb(0xf9, 0x73, 0x16)
}
