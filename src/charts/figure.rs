//! Figure documents
//!
//! Serializable chart descriptions in the shape the Plotly browser library
//! accepts: `{"data": [traces], "layout": {...}}`. Each trace carries its
//! Plotly `type` as the serde tag.

use chrono::NaiveDate;
use serde::Serialize;

/// A complete chart: traces plus layout
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    /// Create a figure with the given title and no traces
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            data: Vec::new(),
            layout: Layout::titled(title),
        }
    }

    /// Builder: append a trace
    pub fn trace(mut self, trace: Trace) -> Self {
        self.data.push(trace);
        self
    }

    /// Builder: label both axes
    pub fn axes(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.layout.xaxis = Some(Axis::titled(x));
        self.layout.yaxis = Some(Axis::titled(y));
        self
    }

    /// Builder: set the bar grouping mode
    pub fn barmode(mut self, mode: BarMode) -> Self {
        self.layout.barmode = Some(mode);
        self
    }

    /// Title text
    pub fn title(&self) -> &str {
        &self.layout.title.text
    }

    /// Whether no trace carries any point
    pub fn is_empty(&self) -> bool {
        self.data.iter().all(Trace::is_empty)
    }
}

/// One plotted series
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Scatter(ScatterTrace),
    Bar(BarTrace),
    Choropleth(ChoroplethTrace),
    Histogram2d(Histogram2dTrace),
    Pie(PieTrace),
}

impl Trace {
    /// Number of points in the trace
    pub fn len(&self) -> usize {
        match self {
            Trace::Scatter(t) => t.x.len(),
            Trace::Bar(t) => t.x.len(),
            Trace::Choropleth(t) => t.locations.len(),
            Trace::Histogram2d(t) => t.x.len(),
            Trace::Pie(t) => t.values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Line / marker series over dates
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScatterTrace {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub x: Vec<NaiveDate>,
    pub y: Vec<u64>,
    pub mode: String,
}

/// Bar series over dates
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BarTrace {
    pub name: String,
    pub x: Vec<NaiveDate>,
    pub y: Vec<u64>,
}

/// Country-level map shading
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChoroplethTrace {
    pub locations: Vec<String>,
    pub z: Vec<u64>,
    pub locationmode: String,
    pub colorscale: String,
    pub hovertext: Vec<String>,
}

/// Two-dimensional density histogram
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Histogram2dTrace {
    pub x: Vec<NaiveDate>,
    pub y: Vec<f64>,
}

/// Slices of a whole
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PieTrace {
    pub labels: Vec<String>,
    pub values: Vec<i64>,
}

/// Figure layout
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Layout {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barmode: Option<BarMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
}

impl Layout {
    pub fn titled(text: impl Into<String>) -> Self {
        Self {
            title: Title { text: text.into() },
            barmode: None,
            xaxis: None,
            yaxis: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Axis {
    pub title: Title,
}

impl Axis {
    pub fn titled(text: impl Into<String>) -> Self {
        Self {
            title: Title { text: text.into() },
        }
    }
}

/// How bars sharing an x value are arranged
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BarMode {
    Group,
    Stack,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_trace_type_tag() {
        let figure = Figure::new("Slices").trace(Trace::Pie(PieTrace {
            labels: vec!["a".to_string()],
            values: vec![1],
        }));

        let value = serde_json::to_value(&figure).unwrap();
        assert_eq!(value["data"][0]["type"], "pie");
        assert_eq!(value["layout"]["title"]["text"], "Slices");
        assert!(value["layout"].get("barmode").is_none());
    }

    #[test]
    fn test_dates_serialize_as_iso() {
        let trace = Trace::Histogram2d(Histogram2dTrace {
            x: vec![NaiveDate::from_ymd_opt(2020, 3, 1).unwrap()],
            y: vec![0.5],
        });

        let value = serde_json::to_value(&trace).unwrap();
        assert_eq!(value, json!({"type": "histogram2d", "x": ["2020-03-01"], "y": [0.5]}));
    }

    #[test]
    fn test_layout_options() {
        let figure = Figure::new("Bars").barmode(BarMode::Group).axes("date", "count");
        let value = serde_json::to_value(&figure).unwrap();
        assert_eq!(value["layout"]["barmode"], "group");
        assert_eq!(value["layout"]["xaxis"]["title"]["text"], "date");
        assert_eq!(value["layout"]["yaxis"]["title"]["text"], "count");
    }

    #[test]
    fn test_is_empty() {
        let figure = Figure::new("Nothing").trace(Trace::Bar(BarTrace {
            name: "Total Deaths".to_string(),
            x: vec![],
            y: vec![],
        }));
        assert!(figure.is_empty());
        assert_eq!(figure.title(), "Nothing");
    }
}
