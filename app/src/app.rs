use crate::ui;

use ecolor::Hsva;
use eframe::egui::{self, Color32, Pos2, Rect};
use eframe::{App, Frame};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use tracing::{debug, info};
use unlearn::{
    ChartProjection, Label, LinearBoundary, MetricsError, PointStore, SelectionSet, accuracy,
};

/// The main application struct.
///
/// The point store and selection set are the only source-of-truth state; the
/// chart projection is derived from the store and cached until the next
/// mutation invalidates it.
pub struct UnlearnApp {
    // --- Core State ---
    pub store: PointStore<f64>,
    pub selection: SelectionSet,
    /// The fixed decision rule used to label new points and score stored ones.
    pub rule: LinearBoundary,

    // --- UI State ---
    /// The cached chart projection. `None` means the store changed and the
    /// projection must be rebuilt before the next draw.
    pub chart: Option<ChartProjection<f64>>,
    /// Defines the coordinate system of the data space.
    pub data_rect: Rect,
    rng: Xoshiro256PlusPlus,
}

impl Default for UnlearnApp {
    /// Creates the application with an empty store and a fresh RNG.
    fn default() -> Self {
        Self {
            store: PointStore::new(),
            selection: SelectionSet::new(),
            rule: LinearBoundary,
            chart: None,
            data_rect: Rect::from_min_max(Pos2::new(-5.0, -5.0), Pos2::new(5.0, 5.0)),
            rng: Xoshiro256PlusPlus::seed_from_u64(rand::random()),
        }
    }
}

impl App for UnlearnApp {
    /// The main update loop, called by eframe on every frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        ui::draw_side_panel(self, ctx);
        ui::draw_central_panel(self, ctx);
    }
}

impl UnlearnApp {
    /// Rebuilds the chart projection if a mutation invalidated it.
    pub fn ensure_chart(&mut self) {
        if self.chart.is_none() {
            self.chart = Some(ChartProjection::project(&self.store));
        }
    }

    /// Adds one random point, labeled by the decision rule.
    pub fn add_point(&mut self) {
        self.store.add_random(&mut self.rng, &self.rule);
        if let Some(point) = self.store.get(self.store.len() - 1) {
            debug!(
                x = point.features[0],
                y = point.features[1],
                label = %point.label,
                "added random point"
            );
        }
        self.chart = None;
    }

    /// Flips selection of the point at `index`. Selection does not affect
    /// the chart series, so the cached projection stays valid.
    pub fn toggle_point(&mut self, index: usize) {
        let selected = self.selection.toggle(index);
        debug!(index, selected, "toggled point selection");
    }

    /// Removes every selected point and clears the selection.
    pub fn forget_selected(&mut self) {
        let removed = self.store.forget(&mut self.selection);
        info!(removed, remaining = self.store.len(), "forgot selected points");
        self.chart = None;
    }

    /// The accuracy readout, with the empty store rendered as "N/A".
    pub fn accuracy_text(&self) -> String {
        match accuracy(&self.store, &self.rule) {
            Ok(value) => format!("{:.2}%", value),
            Err(MetricsError::EmptyPointStore) => "N/A".to_string(),
        }
    }

    /// Generates a consistent color for a label, used for both the plotted
    /// series and the checklist captions.
    pub fn label_color(label: Label) -> Color32 {
        let hue = match label {
            Label::Positive => 0.47,
            Label::Negative => 0.97,
        };
        let hsva = Hsva { h: hue, s: 0.85, v: 0.9, a: 1.0 };
        Color32::from(hsva)
    }
}
