// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Timeline scrubber and transport controls.
//!
//! Draws the play head over [0, duration] with a marker tick for every
//! anchored comment and a translucent band for every ranged comment.
//! While a range selection is active, dragging on the bar adjusts the
//! out-point instead of seeking.

use crate::engine::range::RangeSelector;
use crate::engine::store::AnnotationStore;
use crate::playback::PlaybackClock;
use crate::ui::canvas::parse_color;

const BAR_HEIGHT: f32 = 22.0;
const MARKER_COLOR: &str = "#facc15";
const RANGE_COLOR: &str = "#38bdf8";

/// Display transport controls and the scrubber.
pub fn show(
    ui: &mut egui::Ui,
    clock: &mut PlaybackClock,
    store: &AnnotationStore,
    selector: &mut RangeSelector,
) {
    ui.horizontal(|ui| {
        let play_label = if clock.is_playing() { "⏸" } else { "▶" };
        if ui.button(play_label).clicked() {
            clock.toggle();
        }

        ui.label(format!(
            "{} / {}",
            format_time(clock.position()),
            format_time(clock.duration())
        ));

        ui.separator();
        let mut rate = clock.rate();
        ui.label("Speed");
        if ui
            .add(egui::Slider::new(&mut rate, 0.25..=4.0).show_value(true))
            .changed()
        {
            clock.set_rate(rate);
        }

        ui.separator();
        let mut volume = clock.volume();
        ui.label("Vol");
        if ui
            .add(egui::Slider::new(&mut volume, 0.0..=1.0).show_value(false))
            .changed()
        {
            clock.set_volume(volume);
        }
    });

    // Scrubber bar.
    let desired = egui::vec2(ui.available_width(), BAR_HEIGHT);
    let (rect, response) = ui.allocate_exact_size(desired, egui::Sense::click_and_drag());
    let duration = clock.duration();
    let painter = ui.painter();

    painter.rect_filled(rect, 4.0, egui::Color32::from_gray(50));

    if duration > 0.0 {
        let to_x = |t: f64| rect.left() + (t / duration).clamp(0.0, 1.0) as f32 * rect.width();

        // Ranged comment bands.
        for comment in store.comments() {
            if let (Some(start), Some(end)) = (comment.timestamp, comment.timestamp_end) {
                let band = egui::Rect::from_min_max(
                    egui::pos2(to_x(start), rect.top() + 2.0),
                    egui::pos2(to_x(end), rect.bottom() - 2.0),
                );
                painter.rect_filled(band, 2.0, parse_color(RANGE_COLOR).gamma_multiply(0.25));
            }
        }

        // Point comment markers.
        for comment in store.comments() {
            if comment.is_reply() {
                continue;
            }
            if let Some(t) = comment.timestamp {
                let x = to_x(t);
                painter.line_segment(
                    [
                        egui::pos2(x, rect.top() + 2.0),
                        egui::pos2(x, rect.bottom() - 2.0),
                    ],
                    egui::Stroke::new(2.0, parse_color(MARKER_COLOR)),
                );
            }
        }

        // Active range selection overlay.
        if let Some((start, end)) = selector.selection() {
            let (lo, hi) = if end < start { (end, start) } else { (start, end) };
            let band = egui::Rect::from_min_max(
                egui::pos2(to_x(lo), rect.top()),
                egui::pos2(to_x(hi), rect.bottom()),
            );
            painter.rect_filled(band, 2.0, parse_color(RANGE_COLOR).gamma_multiply(0.45));
        }

        // Play head.
        let head_x = to_x(clock.position());
        painter.line_segment(
            [
                egui::pos2(head_x, rect.top()),
                egui::pos2(head_x, rect.bottom()),
            ],
            egui::Stroke::new(2.0, egui::Color32::WHITE),
        );

        if selector.is_selecting() {
            // Horizontal drag adjusts the out-point.
            if response.dragged() {
                selector.drag_end(response.drag_delta().x, duration);
            }
        } else if response.clicked() || response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                let fraction = ((pos.x - rect.left()) / rect.width()).clamp(0.0, 1.0);
                clock.seek(fraction as f64 * duration);
            }
        }
    }
}

/// Format seconds as m:ss.
pub(crate) fn format_time(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    format!("{}:{:02}", total / 60, total % 60)
}
