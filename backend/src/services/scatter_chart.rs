use log::debug;

use crate::charts::{palette_color, Figure, FigureLayout, Marker, ScatterTrace, Trace};
use crate::models::{Dataset, LaunchRecord, PayloadRange, SiteSelection};

pub const PAYLOAD_AXIS_TITLE: &str = "Payload Mass (kg)";
pub const CLASS_AXIS_TITLE: &str = "Class";
pub const LEGEND_TITLE: &str = "Booster Version Category";

/// Records inside the payload window, restricted to the selected site.
pub fn filter_launches<'a>(
    records: &'a [LaunchRecord],
    site: &SiteSelection,
    payload: &PayloadRange,
) -> Vec<&'a LaunchRecord> {
    records
        .iter()
        .filter(|r| payload.contains(r.payload_mass))
        .filter(|r| site.matches(&r.launch_site))
        .collect()
}

/// Build the payload-vs-outcome scatter chart.
///
/// One marker trace per booster version category, in the order categories
/// first appear among the filtered records. An empty selection yields a
/// figure with no traces.
pub fn compute_scatter_chart(
    dataset: &Dataset,
    site: &SiteSelection,
    payload: &PayloadRange,
) -> Figure {
    let filtered = filter_launches(dataset.records(), site, payload);

    let mut traces: Vec<ScatterTrace> = Vec::new();
    for record in &filtered {
        let category = &record.booster_version_category;
        let index = match traces.iter().position(|t| &t.name == category) {
            Some(index) => index,
            None => {
                traces.push(ScatterTrace {
                    name: category.clone(),
                    x: Vec::new(),
                    y: Vec::new(),
                    mode: "markers".to_string(),
                    marker: Marker {
                        color: palette_color(traces.len()).to_string(),
                    },
                    show_legend: true,
                });
                traces.len() - 1
            }
        };
        traces[index].x.push(record.payload_mass.value());
        traces[index].y.push(record.outcome.value());
    }

    debug!(
        "Scatter chart for site={} payload=[{}, {}]: {} points in {} categories",
        site,
        payload.low.value(),
        payload.high.value(),
        filtered.len(),
        traces.len()
    );

    let title = match site {
        SiteSelection::All => "Correlation between Payload and Success for All Sites".to_string(),
        SiteSelection::Site(name) => {
            format!("Correlation between Payload and Success for Site {}", name)
        }
    };

    Figure::new(
        traces.into_iter().map(Trace::Scatter).collect(),
        FigureLayout::titled(title)
            .with_axes(PAYLOAD_AXIS_TITLE, CLASS_AXIS_TITLE)
            .with_legend(LEGEND_TITLE),
    )
}
