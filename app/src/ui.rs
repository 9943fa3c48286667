use crate::app::UnlearnApp;

use eframe::egui::{self, Color32, Pos2, Sense, Stroke, Ui};
use unlearn::Label;

/// Screen-space radius (in pixels) within which a click selects a point.
const CLICK_RADIUS: f32 = 10.0;

/// Draws the left-side panel with the controls, the point checklist and the
/// accuracy readout.
pub fn draw_side_panel(app: &mut UnlearnApp, ctx: &egui::Context) {
    egui::SidePanel::left("controls_panel").show(ctx, |ui| {
        ui.heading("Unlearning Visualizer");
        ui.separator();

        if ui.button("Add Data Point").clicked() {
            app.add_point();
        }
        let forget = egui::Button::new("Forget Selected Data Points");
        if ui.add_enabled(!app.selection.is_empty(), forget).clicked() {
            app.forget_selected();
        }

        ui.separator();
        draw_point_checklist(app, ui);

        ui.separator();
        ui.label(format!("Accuracy before unlearning: {}", app.accuracy_text()));
    });
}

/// Draws the central panel containing the scatter plot, or a hint while the
/// store is empty.
pub fn draw_central_panel(app: &mut UnlearnApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        if app.store.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label("No data points yet. Use \"Add Data Point\" to start.");
            });
            return;
        }
        app.ensure_chart();

        // Allocate painter and handle coordinate transformations.
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click());
        let to_screen = egui::emath::RectTransform::from_to(app.data_rect, response.rect);

        // Decision boundary x + y = 0, drawn across the data rectangle.
        let boundary = [
            to_screen * Pos2::new(app.data_rect.min.x, app.data_rect.max.y),
            to_screen * Pos2::new(app.data_rect.max.x, app.data_rect.min.y),
        ];
        painter.line_segment(boundary, Stroke::new(1.0, Color32::GRAY));

        if let Some(chart) = &app.chart {
            draw_series(&painter, &to_screen, chart.positive(), Label::Positive);
            draw_series(&painter, &to_screen, chart.negative(), Label::Negative);
        }

        // Selection rings, drawn over the series from store positions.
        for (index, point) in app.store.iter().enumerate() {
            if app.selection.contains(index) {
                let center =
                    to_screen * Pos2::new(point.features[0] as f32, point.features[1] as f32);
                painter.circle_stroke(center, 8.0, Stroke::new(2.0, Color32::YELLOW));
            }
        }

        // --- Interaction Handling ---
        if response.clicked() {
            if let Some(click_pos) = response.interact_pointer_pos() {
                let hit = nearest_point(app, &to_screen, click_pos);
                if let Some(index) = hit {
                    app.toggle_point(index);
                }
            }
        }
    });
}

/// One checkbox row per point, mirroring the selection set.
fn draw_point_checklist(app: &mut UnlearnApp, ui: &mut Ui) {
    ui.heading("Data Points");
    app.ensure_chart();
    let mut toggled = None;

    egui::ScrollArea::vertical().show(ui, |ui| {
        let captions = app.chart.as_ref().map(|c| c.labels()).unwrap_or(&[]);
        for (index, point) in app.store.iter().enumerate() {
            let caption = captions.get(index).map(String::as_str).unwrap_or("Point ?");
            let text = format!(
                "{} ({:.2}, {:.2}) - {}",
                caption, point.features[0], point.features[1], point.label
            );
            let mut checked = app.selection.contains(index);
            let row = ui.checkbox(&mut checked, text);
            if row.changed() {
                toggled = Some(index);
            }
        }
    });

    if let Some(index) = toggled {
        app.toggle_point(index);
    }
}

fn draw_series(
    painter: &egui::Painter,
    to_screen: &egui::emath::RectTransform,
    series: &[(f64, f64)],
    label: Label,
) {
    let color = UnlearnApp::label_color(label);
    for &(x, y) in series {
        let center = *to_screen * Pos2::new(x as f32, y as f32);
        painter.circle_filled(center, 5.0, color);
        painter.circle_stroke(center, 5.0, Stroke::new(1.0, Color32::BLACK));
    }
}

/// Finds the store index of the point closest to `click_pos` on screen,
/// within [`CLICK_RADIUS`] pixels.
fn nearest_point(
    app: &UnlearnApp,
    to_screen: &egui::emath::RectTransform,
    click_pos: Pos2,
) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (index, point) in app.store.iter().enumerate() {
        let center = *to_screen * Pos2::new(point.features[0] as f32, point.features[1] as f32);
        let dist = center.distance(click_pos);
        if dist <= CLICK_RADIUS && best.map_or(true, |(_, d)| dist < d) {
            best = Some((index, dist));
        }
    }
    best.map(|(index, _)| index)
}
