use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::core::primitives::{coerce_number, decimal_to_f64};
use crate::error::{ChartError, ChartResult};

/// Label format used for dated items (`DD.MM.YYYY`).
pub const DATE_LABEL_FORMAT: &str = "%d.%m.%Y";

/// One labeled value. `value` may be `NaN` after coercion of invalid input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub label: String,
    pub value: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    #[must_use]
    pub fn dated(date: NaiveDate, value: f64) -> Self {
        Self::new(date.format(DATE_LABEL_FORMAT).to_string(), value)
    }

    #[must_use]
    pub fn from_decimal(label: impl Into<String>, amount: Decimal) -> Self {
        Self::new(label, decimal_to_f64(amount))
    }
}

/// Immutable, ordered sequence of data points driving one chart.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Series {
    points: Vec<DataPoint>,
}

impl Series {
    #[must_use]
    pub fn new(points: Vec<DataPoint>) -> Self {
        debug!(
            count = points.len(),
            finite_count = points.iter().filter(|p| p.value.is_finite()).count(),
            "build series"
        );
        Self { points }
    }

    /// Parses raw items from JSON.
    ///
    /// Accepts either a bare array or an object with an `items` array. Item
    /// labels come from `date`, `label` or `name` (first present wins) and
    /// default to `Item <index>`; values are coerced, never rejected.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let document: Value = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse items json: {e}")))?;
        Self::from_json_value(&document)
    }

    pub fn from_json_value(document: &Value) -> ChartResult<Self> {
        let items = match document {
            Value::Array(items) => items,
            Value::Object(payload) => match payload.get("items") {
                Some(Value::Array(items)) => items,
                Some(Value::Null) | None => return Ok(Self::default()),
                Some(_) => {
                    return Err(ChartError::InvalidData(
                        "`items` must be an array".to_owned(),
                    ));
                }
            },
            Value::Null => return Ok(Self::default()),
            _ => {
                return Err(ChartError::InvalidData(
                    "items json must be an array or an object with `items`".to_owned(),
                ));
            }
        };

        let empty = Map::new();
        let points = items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let fields = item.as_object().unwrap_or(&empty);
                DataPoint::new(item_label(fields, index), coerce_number(fields.get("value")))
            })
            .collect();
        Ok(Self::new(points))
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&DataPoint> {
        self.points.get(index)
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|point| point.value)
    }

    /// True when no value can take part in scale computation.
    #[must_use]
    pub fn is_all_invalid(&self) -> bool {
        self.values().all(|value| !value.is_finite())
    }
}

impl From<Vec<DataPoint>> for Series {
    fn from(points: Vec<DataPoint>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<DataPoint> for Series {
    fn from_iter<I: IntoIterator<Item = DataPoint>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

fn item_label(fields: &Map<String, Value>, index: usize) -> String {
    ["date", "label", "name"]
        .iter()
        .filter_map(|key| fields.get(*key))
        .find_map(|value| match value {
            Value::String(text) if !text.is_empty() => Some(text.clone()),
            Value::Number(number) => Some(number.to_string()),
            _ => None,
        })
        .unwrap_or_else(|| format!("Item {index}"))
}
