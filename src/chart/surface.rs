//! Ownership of the chart currently drawn on a calculator page.
//!
//! A surface holds at most one [`ChartInstance`]. Mounting a new chart drops
//! the previous instance first, so a page never shows a picture that belongs
//! to stale inputs.

use std::{cell::Cell, rc::Rc};

use super::{draw_chart, ChartDrawing, ChartSpec};
use crate::util::generate_id;

/// The picture of a chart as it was drawn, captured for export.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSnapshot {
    pub chart_id: String,
    pub drawing: ChartDrawing,
}

struct ChartInstance {
    id: String,
    spec: ChartSpec,
    drawing: ChartDrawing,
    svg: String,
    live: Rc<Cell<usize>>,
}

impl ChartInstance {
    fn create(prefix: &str, spec: ChartSpec, live: Rc<Cell<usize>>) -> Self {
        let drawing = draw_chart(&spec);
        let svg = drawing.to_svg();
        live.set(live.get() + 1);
        let id = generate_id(prefix);
        tracing::debug!(chart = %id, labels = spec.labels.len(), "mounted chart");
        Self {
            id,
            spec,
            drawing,
            svg,
            live,
        }
    }
}

impl Drop for ChartInstance {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
        tracing::debug!(chart = %self.id, "disposed chart");
    }
}

pub struct ChartSurface {
    name: &'static str,
    current: Option<ChartInstance>,
    live: Rc<Cell<usize>>,
    mounts: usize,
}

impl ChartSurface {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            current: None,
            live: Rc::new(Cell::new(0)),
            mounts: 0,
        }
    }

    /// Replaces the live chart. The old instance is dropped before the new one
    /// is created.
    pub fn mount(&mut self, spec: ChartSpec) {
        self.dispose();
        self.current = Some(ChartInstance::create(self.name, spec, self.live.clone()));
        self.mounts += 1;
        tracing::trace!(surface = self.name, mounts = self.mounts, "surface remounted");
    }

    /// Remounts only when the inputs behind the chart changed. Returns whether
    /// a new instance was created.
    pub fn sync(&mut self, spec: &ChartSpec) -> bool {
        if self.current.as_ref().is_some_and(|c| &c.spec == spec) {
            return false;
        }
        self.mount(spec.clone());
        true
    }

    pub fn dispose(&mut self) {
        self.current.take();
    }

    pub fn svg(&self) -> Option<&str> {
        self.current.as_ref().map(|c| c.svg.as_str())
    }

    /// Captures what is drawn right now.
    pub fn snapshot(&self) -> Option<ChartSnapshot> {
        self.current.as_ref().map(|c| ChartSnapshot {
            chart_id: c.id.clone(),
            drawing: c.drawing.clone(),
        })
    }

    #[cfg(test)]
    pub fn live_instances(&self) -> usize {
        self.live.get()
    }

    #[cfg(test)]
    pub fn mounts(&self) -> usize {
        self.mounts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{abm_monthly_series, Timeframe};

    fn spec(revenue: f64) -> ChartSpec {
        ChartSpec::abm(&abm_monthly_series(Timeframe::ThreeMonths, revenue, 30.0))
    }

    #[test]
    fn never_more_than_one_live_chart() {
        let mut surface = ChartSurface::new("abm-chart");
        assert_eq!(surface.live_instances(), 0);
        for revenue in [100.0, 200.0, 300.0, 400.0] {
            surface.mount(spec(revenue));
            assert_eq!(surface.live_instances(), 1);
        }
        assert_eq!(surface.mounts(), 4);
        surface.dispose();
        assert_eq!(surface.live_instances(), 0);
        assert!(surface.snapshot().is_none());
    }

    #[test]
    fn sync_skips_identical_inputs() {
        let mut surface = ChartSurface::new("abm-chart");
        assert!(surface.sync(&spec(100.0)));
        assert!(!surface.sync(&spec(100.0)));
        assert!(surface.sync(&spec(150.0)));
        assert_eq!(surface.mounts(), 2);
        assert_eq!(surface.live_instances(), 1);
    }

    #[test]
    fn snapshot_reflects_latest_mount() {
        let mut surface = ChartSurface::new("abm-chart");
        surface.mount(spec(100.0));
        let first = surface.snapshot().unwrap();
        surface.mount(spec(9_000.0));
        let second = surface.snapshot().unwrap();
        assert_ne!(first.chart_id, second.chart_id);
        assert_ne!(first.drawing, second.drawing);
        assert_eq!(second.drawing, draw_chart(&spec(9_000.0)));
        assert_eq!(surface.svg(), Some(second.drawing.to_svg().as_str()));
        assert_eq!((second.drawing.width, second.drawing.height), (900, 300));
    }
}
