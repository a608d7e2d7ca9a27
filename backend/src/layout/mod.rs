//! Static dashboard layout.
//!
//! The layout is built once from the loaded dataset: the dropdown lists its
//! sites and the range slider starts at its payload bounds. Nothing in the
//! tree changes afterwards; only the graphs are refilled by callbacks.

pub mod components;

pub use components::*;

use crate::models::{Dataset, ALL_SITES};

/// Component ids shared by the layout and the callbacks that read or fill them.
pub mod ids {
    pub const SITE_DROPDOWN: &str = "site-dropdown";
    pub const PAYLOAD_SLIDER: &str = "payload-slider";
    pub const SUCCESS_PIE_CHART: &str = "success-pie-chart";
    pub const SUCCESS_PAYLOAD_SCATTER_CHART: &str = "success-payload-scatter-chart";
}

pub const DASHBOARD_TITLE: &str = "SpaceX Launch Records Dashboard";
pub const ALL_SITES_LABEL: &str = "All Sites";

/// Fixed slider domain in kilograms.
pub const SLIDER_MIN: f64 = 0.0;
pub const SLIDER_MAX: f64 = 10000.0;
pub const SLIDER_STEP: f64 = 1000.0;
const SLIDER_MARKS: [f64; 5] = [0.0, 2500.0, 5000.0, 7500.0, 10000.0];

/// Dropdown options: "All Sites" first, then one entry per site in the given order.
pub fn site_options(sites: &[String]) -> Vec<SelectOption> {
    std::iter::once(SelectOption {
        label: ALL_SITES_LABEL.to_string(),
        value: ALL_SITES.to_string(),
    })
    .chain(sites.iter().map(|site| SelectOption {
        label: site.clone(),
        value: site.clone(),
    }))
    .collect()
}

/// Build the dashboard component tree for `dataset`.
pub fn build_layout(dataset: &Dataset) -> Component {
    Component::Div {
        children: vec![
            Component::H1 {
                text: DASHBOARD_TITLE.to_string(),
                style: Style {
                    text_align: Some("center".to_string()),
                    color: Some("#503D36".to_string()),
                    font_size: Some(40),
                },
            },
            Component::Dropdown(Dropdown {
                id: ids::SITE_DROPDOWN.to_string(),
                options: site_options(dataset.sites()),
                value: ALL_SITES.to_string(),
                placeholder: "Select a Launch Site here".to_string(),
                searchable: true,
            }),
            Component::Br,
            Component::Div {
                children: vec![Component::Graph {
                    id: ids::SUCCESS_PIE_CHART.to_string(),
                }],
            },
            Component::Br,
            Component::P {
                text: "Payload range (Kg):".to_string(),
            },
            Component::RangeSlider(RangeSlider {
                id: ids::PAYLOAD_SLIDER.to_string(),
                min: SLIDER_MIN,
                max: SLIDER_MAX,
                step: SLIDER_STEP,
                marks: SLIDER_MARKS
                    .iter()
                    .map(|&value| SliderMark {
                        value,
                        label: format!("{}", value),
                    })
                    .collect(),
                value: dataset.payload_bounds(),
            }),
            Component::Br,
            Component::Div {
                children: vec![Component::Graph {
                    id: ids::SUCCESS_PAYLOAD_SCATTER_CHART.to_string(),
                }],
            },
        ],
    }
}
