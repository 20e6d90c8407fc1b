use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;

use crate::chart::{ChartSpec, ChartSurface};

pub type SharedSurface = Rc<RefCell<ChartSurface>>;

/// Gives a page its own chart surface, disposed when the page unmounts.
pub fn use_chart_surface(name: &'static str) -> SharedSurface {
    let surface = use_hook(|| Rc::new(RefCell::new(ChartSurface::new(name))));
    use_drop({
        let surface = surface.clone();
        move || surface.borrow_mut().dispose()
    });
    surface
}

/// Brings the surface in line with `spec` and returns the markup to show.
pub fn sync_chart(surface: &SharedSurface, spec: &ChartSpec) -> String {
    let mut surface = surface.borrow_mut();
    surface.sync(spec);
    surface.svg().unwrap_or_default().to_string()
}

/// Hosts the markup of the chart a page's surface currently owns.
#[component]
pub fn ChartView(id: &'static str, svg: String) -> Element {
    rsx! {
        section { class: "panel chart-panel",
            div {
                id: "{id}",
                class: "chart",
                dangerous_inner_html: "{svg}",
            }
        }
    }
}
