//! Renderer-independent chart descriptions.
//!
//! A [`ChartSpec`] carries everything the browser-side plotting library needs
//! (kind, data, labels, title) and nothing about how it is drawn.

use serde::{Deserialize, Serialize};

/// Horizontal title position for a centered title.
pub const CENTERED_TITLE_X: f64 = 0.5;

/// One pie slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub value: usize,
    pub hover: String,
}

/// One scatter point: payload mass against class.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: u8,
}

/// Points sharing a color, keyed by booster version category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterSeries {
    pub name: String,
    pub points: Vec<ScatterPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ChartData {
    Pie {
        slices: Vec<PieSlice>,
    },
    Scatter {
        x_axis: String,
        y_axis: String,
        series: Vec<ScatterSeries>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    pub title_x: f64,
    #[serde(flatten)]
    pub data: ChartData,
}

impl ChartSpec {
    pub fn pie(title: impl Into<String>, slices: Vec<PieSlice>) -> Self {
        Self {
            title: title.into(),
            title_x: CENTERED_TITLE_X,
            data: ChartData::Pie { slices },
        }
    }

    pub fn scatter(
        title: impl Into<String>,
        x_axis: impl Into<String>,
        y_axis: impl Into<String>,
        series: Vec<ScatterSeries>,
    ) -> Self {
        Self {
            title: title.into(),
            title_x: CENTERED_TITLE_X,
            data: ChartData::Scatter {
                x_axis: x_axis.into(),
                y_axis: y_axis.into(),
                series,
            },
        }
    }

    /// Pie slices, or `None` for a scatter chart.
    pub fn slices(&self) -> Option<&[PieSlice]> {
        match &self.data {
            ChartData::Pie { slices } => Some(slices),
            ChartData::Scatter { .. } => None,
        }
    }

    /// Scatter series, or `None` for a pie chart.
    pub fn series(&self) -> Option<&[ScatterSeries]> {
        match &self.data {
            ChartData::Scatter { series, .. } => Some(series),
            ChartData::Pie { .. } => None,
        }
    }

    /// Total number of points across all scatter series (0 for a pie).
    pub fn point_count(&self) -> usize {
        self.series()
            .map(|series| series.iter().map(|s| s.points.len()).sum())
            .unwrap_or(0)
    }
}
