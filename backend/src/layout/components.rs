//! Declarative component tree types.
//!
//! The tree is serialized as JSON and rendered by the dashboard page. Every
//! node carries a `type` tag naming the element it becomes.

use serde::{Deserialize, Serialize};

use crate::models::PayloadRange;

/// Inline style for text elements.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Font size in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
}

/// One selectable dropdown entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dropdown {
    pub id: String,
    pub options: Vec<SelectOption>,
    /// Initially selected value.
    pub value: String,
    pub placeholder: String,
    pub searchable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderMark {
    pub value: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeSlider {
    pub id: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<SliderMark>,
    /// Initially selected `[low, high]` window.
    pub value: PayloadRange,
}

/// A node of the dashboard page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Component {
    Div { children: Vec<Component> },
    H1 { text: String, style: Style },
    P { text: String },
    Br,
    Dropdown(Dropdown),
    RangeSlider(RangeSlider),
    /// Placeholder filled with a figure by the callback owning `id`.
    Graph { id: String },
}

impl Component {
    /// Ids of every component in this subtree, depth first.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids = Vec::new();
        self.collect_ids(&mut ids);
        ids
    }

    fn collect_ids<'a>(&'a self, ids: &mut Vec<&'a str>) {
        match self {
            Component::Div { children } => {
                for child in children {
                    child.collect_ids(ids);
                }
            }
            Component::Dropdown(dropdown) => ids.push(&dropdown.id),
            Component::RangeSlider(slider) => ids.push(&slider.id),
            Component::Graph { id } => ids.push(id),
            Component::H1 { .. } | Component::P { .. } | Component::Br => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_component_tagging() {
        let tree = Component::Div {
            children: vec![
                Component::P {
                    text: "Payload range (Kg):".into(),
                },
                Component::Br,
                Component::Graph {
                    id: "chart".into(),
                },
            ],
        };

        assert_eq!(
            serde_json::to_value(&tree).unwrap(),
            json!({
                "type": "Div",
                "children": [
                    {"type": "P", "text": "Payload range (Kg):"},
                    {"type": "Br"},
                    {"type": "Graph", "id": "chart"}
                ]
            })
        );
    }

    #[test]
    fn test_style_uses_css_names() {
        let style = Style {
            text_align: Some("center".into()),
            color: Some("#503D36".into()),
            font_size: Some(40),
        };
        assert_eq!(
            serde_json::to_value(&style).unwrap(),
            json!({"textAlign": "center", "color": "#503D36", "fontSize": 40})
        );
    }

    #[test]
    fn test_ids_walks_nested_divs() {
        let tree = Component::Div {
            children: vec![
                Component::Div {
                    children: vec![Component::Graph { id: "a".into() }],
                },
                Component::Graph { id: "b".into() },
            ],
        };
        assert_eq!(tree.ids(), vec!["a", "b"]);
    }
}
