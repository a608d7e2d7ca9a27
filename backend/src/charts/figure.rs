//! Chart specification types.
//!
//! A [`Figure`] serializes to the `{"data": [...], "layout": {...}}` shape that
//! Plotly.js accepts directly, so the browser never reshapes chart data.

use serde::{Deserialize, Serialize};

/// Default qualitative palette used to color categorical traces.
pub const QUALITATIVE_PALETTE: [&str; 10] = [
    "#636EFA", "#EF553B", "#00CC96", "#AB63FA", "#FFA15A", "#19D3F3", "#FF6692", "#B6E880",
    "#FF97FF", "#FECB52",
];

/// Palette color for the category at `index`, wrapping around.
pub fn palette_color(index: usize) -> &'static str {
    QUALITATIVE_PALETTE[index % QUALITATIVE_PALETTE.len()]
}

/// A complete chart: traces plus layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: FigureLayout,
}

impl Figure {
    pub fn new(data: Vec<Trace>, layout: FigureLayout) -> Self {
        Self { data, layout }
    }

    /// Number of pie slices across all pie traces.
    pub fn slice_count(&self) -> usize {
        self.data
            .iter()
            .map(|trace| match trace {
                Trace::Pie(pie) => pie.labels.len(),
                Trace::Scatter(_) => 0,
            })
            .sum()
    }

    /// Number of scatter points across all scatter traces.
    pub fn point_count(&self) -> usize {
        self.data
            .iter()
            .map(|trace| match trace {
                Trace::Scatter(scatter) => scatter.x.len(),
                Trace::Pie(_) => 0,
            })
            .sum()
    }

    pub fn title(&self) -> &str {
        &self.layout.title.text
    }
}

/// One data series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Pie(PieTrace),
    Scatter(ScatterTrace),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieTrace {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    /// Fraction of the radius cut out of the middle (donut).
    pub hole: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterTrace {
    /// Legend entry for the trace.
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<u8>,
    pub mode: String,
    pub marker: Marker,
    #[serde(rename = "showlegend")]
    pub show_legend: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub title: Title,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub title: Title,
}

/// Layout portion of a figure.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FigureLayout {
    pub title: Title,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
}

impl FigureLayout {
    pub fn titled(text: impl Into<String>) -> Self {
        Self {
            title: Title::new(text),
            ..Default::default()
        }
    }

    pub fn with_axes(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.xaxis = Some(Axis { title: Title::new(x) });
        self.yaxis = Some(Axis { title: Title::new(y) });
        self
    }

    pub fn with_legend(mut self, title: impl Into<String>) -> Self {
        self.legend = Some(Legend {
            title: Title::new(title),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_palette_wraps() {
        assert_eq!(palette_color(0), "#636EFA");
        assert_eq!(palette_color(10), "#636EFA");
        assert_eq!(palette_color(11), "#EF553B");
    }

    #[test]
    fn test_pie_figure_json_shape() {
        let figure = Figure::new(
            vec![Trace::Pie(PieTrace {
                labels: vec!["1".into(), "0".into()],
                values: vec![3.0, 1.0],
                hole: 0.3,
            })],
            FigureLayout::titled("Outcomes"),
        );

        let value = serde_json::to_value(&figure).unwrap();
        assert_eq!(
            value,
            json!({
                "data": [{"type": "pie", "labels": ["1", "0"], "values": [3.0, 1.0], "hole": 0.3}],
                "layout": {"title": {"text": "Outcomes"}}
            })
        );
        assert_eq!(figure.slice_count(), 2);
        assert_eq!(figure.point_count(), 0);
    }

    #[test]
    fn test_scatter_layout_axes_and_legend() {
        let layout = FigureLayout::titled("Payload")
            .with_axes("Payload Mass (kg)", "Class")
            .with_legend("Booster Version Category");

        let value = serde_json::to_value(&layout).unwrap();
        assert_eq!(value["xaxis"]["title"]["text"], "Payload Mass (kg)");
        assert_eq!(value["yaxis"]["title"]["text"], "Class");
        assert_eq!(value["legend"]["title"]["text"], "Booster Version Category");
    }

    #[test]
    fn test_scatter_trace_tag_and_rename() {
        let trace = Trace::Scatter(ScatterTrace {
            name: "FT".into(),
            x: vec![500.0],
            y: vec![1],
            mode: "markers".into(),
            marker: Marker {
                color: palette_color(0).into(),
            },
            show_legend: true,
        });

        let value = serde_json::to_value(&trace).unwrap();
        assert_eq!(value["type"], "scatter");
        assert_eq!(value["showlegend"], true);
        assert_eq!(value["marker"]["color"], "#636EFA");
    }
}
