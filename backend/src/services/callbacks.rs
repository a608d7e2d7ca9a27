//! Reactive wiring between dashboard controls and charts.
//!
//! Each output region is registered with the input ids it depends on and a
//! pure handler. When controls change, [`CallbackRegistry::dispatch`] runs
//! every callback that reads a changed input, in registration order, and
//! returns the fresh figures keyed by output id.

use std::collections::BTreeMap;

use log::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::pie_chart::compute_pie_chart;
use super::scatter_chart::compute_scatter_chart;
use crate::charts::Figure;
use crate::layout::ids;
use crate::models::{Dataset, PayloadRange, SiteSelection};

/// Errors raised while decoding control values for a callback.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CallbackError {
    /// The request names an input no callback listens to.
    #[error("Unknown input: {0}")]
    UnknownInput(String),

    /// A callback needs an input value the request did not provide.
    #[error("Missing value for input '{0}'")]
    MissingInput(String),

    /// The value provided for an input has the wrong shape.
    #[error("Invalid value for input '{id}': {message}")]
    InvalidInput { id: String, message: String },
}

/// Current control values keyed by component id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputValues(BTreeMap<String, serde_json::Value>);

impl InputValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id: impl Into<String>, value: serde_json::Value) -> Self {
        self.0.insert(id.into(), value);
        self
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Decode the value of input `id`.
    pub fn get<T: DeserializeOwned>(&self, id: &str) -> Result<T, CallbackError> {
        let value = self
            .0
            .get(id)
            .ok_or_else(|| CallbackError::MissingInput(id.to_string()))?;
        serde_json::from_value(value.clone()).map_err(|e| CallbackError::InvalidInput {
            id: id.to_string(),
            message: e.to_string(),
        })
    }

    pub fn site(&self) -> Result<SiteSelection, CallbackError> {
        self.get(ids::SITE_DROPDOWN)
    }

    pub fn payload_range(&self) -> Result<PayloadRange, CallbackError> {
        self.get(ids::PAYLOAD_SLIDER)
    }
}

/// Recomputes one output from the dataset and current control values.
pub type Handler = fn(&Dataset, &InputValues) -> Result<Figure, CallbackError>;

struct Callback {
    output: &'static str,
    inputs: &'static [&'static str],
    handler: Handler,
}

/// Public description of one registered callback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackSpec {
    pub output: String,
    pub inputs: Vec<String>,
}

#[derive(Default)]
pub struct CallbackRegistry {
    callbacks: Vec<Callback>,
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry wired for the launch dashboard: the pie chart follows the
    /// site dropdown, the scatter chart follows the dropdown and the slider.
    pub fn dashboard() -> Self {
        let mut registry = Self::new();
        registry.register(ids::SUCCESS_PIE_CHART, &[ids::SITE_DROPDOWN], pie_chart_callback);
        registry.register(
            ids::SUCCESS_PAYLOAD_SCATTER_CHART,
            &[ids::SITE_DROPDOWN, ids::PAYLOAD_SLIDER],
            scatter_chart_callback,
        );
        registry
    }

    pub fn register(
        &mut self,
        output: &'static str,
        inputs: &'static [&'static str],
        handler: Handler,
    ) {
        self.callbacks.push(Callback {
            output,
            inputs,
            handler,
        });
    }

    pub fn dependencies(&self) -> Vec<CallbackSpec> {
        self.callbacks
            .iter()
            .map(|cb| CallbackSpec {
                output: cb.output.to_string(),
                inputs: cb.inputs.iter().map(|id| id.to_string()).collect(),
            })
            .collect()
    }

    fn listens_to(&self, id: &str) -> bool {
        self.callbacks
            .iter()
            .any(|cb| cb.inputs.iter().any(|input| *input == id))
    }

    /// Run the callbacks affected by `changed`.
    ///
    /// An empty `changed` list is the initial render and fires every
    /// callback. Outputs are keyed by their component id.
    pub fn dispatch(
        &self,
        dataset: &Dataset,
        changed: &[String],
        inputs: &InputValues,
    ) -> Result<BTreeMap<String, Figure>, CallbackError> {
        if let Some(unknown) = changed
            .iter()
            .map(String::as_str)
            .chain(inputs.ids())
            .find(|id| !self.listens_to(id))
        {
            return Err(CallbackError::UnknownInput(unknown.to_string()));
        }

        let mut outputs = BTreeMap::new();
        for callback in &self.callbacks {
            let affected = changed.is_empty()
                || callback
                    .inputs
                    .iter()
                    .any(|input| changed.iter().any(|id| id == input));
            if !affected {
                continue;
            }
            debug!("Running callback for output {}", callback.output);
            let figure = (callback.handler)(dataset, inputs)?;
            outputs.insert(callback.output.to_string(), figure);
        }
        Ok(outputs)
    }
}

fn pie_chart_callback(dataset: &Dataset, inputs: &InputValues) -> Result<Figure, CallbackError> {
    Ok(compute_pie_chart(dataset, &inputs.site()?))
}

fn scatter_chart_callback(
    dataset: &Dataset,
    inputs: &InputValues,
) -> Result<Figure, CallbackError> {
    Ok(compute_scatter_chart(
        dataset,
        &inputs.site()?,
        &inputs.payload_range()?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LaunchRecord, Outcome};
    use serde_json::json;

    fn dataset() -> Dataset {
        Dataset::from_records(vec![
            LaunchRecord::new("A", 500.0, Outcome::Success, "FT"),
            LaunchRecord::new("B", 4000.0, Outcome::Failure, "v1.1"),
        ])
        .unwrap()
    }

    fn all_inputs() -> InputValues {
        InputValues::new()
            .with(ids::SITE_DROPDOWN, json!("ALL"))
            .with(ids::PAYLOAD_SLIDER, json!([0, 10000]))
    }

    #[test]
    fn test_dependencies_describe_both_charts() {
        let deps = CallbackRegistry::dashboard().dependencies();
        assert_eq!(deps.len(), 2);
        assert_eq!(deps[0].output, "success-pie-chart");
        assert_eq!(deps[0].inputs, vec!["site-dropdown"]);
        assert_eq!(deps[1].output, "success-payload-scatter-chart");
        assert_eq!(deps[1].inputs, vec!["site-dropdown", "payload-slider"]);
    }

    #[test]
    fn test_initial_render_fires_everything() {
        let outputs = CallbackRegistry::dashboard()
            .dispatch(&dataset(), &[], &all_inputs())
            .unwrap();
        assert_eq!(outputs.len(), 2);
        assert_eq!(outputs[ids::SUCCESS_PIE_CHART].slice_count(), 2);
        assert_eq!(outputs[ids::SUCCESS_PAYLOAD_SCATTER_CHART].point_count(), 2);
    }

    #[test]
    fn test_slider_change_only_updates_scatter() {
        let changed = vec![ids::PAYLOAD_SLIDER.to_string()];
        let outputs = CallbackRegistry::dashboard()
            .dispatch(&dataset(), &changed, &all_inputs())
            .unwrap();
        assert_eq!(outputs.len(), 1);
        assert!(outputs.contains_key(ids::SUCCESS_PAYLOAD_SCATTER_CHART));
    }

    #[test]
    fn test_dropdown_change_updates_both() {
        let changed = vec![ids::SITE_DROPDOWN.to_string()];
        let inputs = all_inputs().with(ids::SITE_DROPDOWN, json!("B"));
        let outputs = CallbackRegistry::dashboard()
            .dispatch(&dataset(), &changed, &inputs)
            .unwrap();
        assert_eq!(outputs.len(), 2);
        assert_eq!(outputs[ids::SUCCESS_PAYLOAD_SCATTER_CHART].point_count(), 1);
    }

    #[test]
    fn test_unknown_input_rejected() {
        let changed = vec!["launch-year".to_string()];
        let err = CallbackRegistry::dashboard()
            .dispatch(&dataset(), &changed, &all_inputs())
            .unwrap_err();
        assert_eq!(err, CallbackError::UnknownInput("launch-year".to_string()));
    }

    #[test]
    fn test_missing_slider_value() {
        let inputs = InputValues::new().with(ids::SITE_DROPDOWN, json!("ALL"));
        let changed = vec![ids::SITE_DROPDOWN.to_string()];
        let err = CallbackRegistry::dashboard()
            .dispatch(&dataset(), &changed, &inputs)
            .unwrap_err();
        assert_eq!(err, CallbackError::MissingInput("payload-slider".to_string()));
    }

    #[test]
    fn test_malformed_slider_value() {
        let inputs = all_inputs().with(ids::PAYLOAD_SLIDER, json!("wide"));
        let err = inputs.payload_range().unwrap_err();
        assert!(matches!(
            err,
            CallbackError::InvalidInput { ref id, .. } if id == "payload-slider"
        ));
    }
}
