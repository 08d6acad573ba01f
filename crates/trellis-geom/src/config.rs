use crate::Result;
use crate::offset::JoinType;
use crate::vector::STANDARD_EPSILON;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Curve flattening controls shared by `BezierPath::tessellate` and its callers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TessellationOptions {
    /// Upper bound on subdivision rounds per curve; each round at most doubles the piece count.
    pub max_stages: usize,
    /// Maximum allowed distance between a piece's parametric midpoint and its chord midpoint.
    pub tolerance: f64,
}

impl TessellationOptions {
    pub const DEFAULT_MAX_STAGES: usize = 10;
    pub const DEFAULT_TOLERANCE: f64 = 0.1;
}

impl Default for TessellationOptions {
    fn default() -> Self {
        Self {
            max_stages: Self::DEFAULT_MAX_STAGES,
            tolerance: Self::DEFAULT_TOLERANCE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OffsetOptions {
    pub join: JoinType,
    pub miter_limit: f64,
}

impl OffsetOptions {
    pub const DEFAULT_MITER_LIMIT: f64 = 4.0;
}

impl Default for OffsetOptions {
    fn default() -> Self {
        Self {
            join: JoinType::Miter,
            miter_limit: Self::DEFAULT_MITER_LIMIT,
        }
    }
}

/// Tunables for the geometry core, loadable from (partial) JSON documents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeometryConfig {
    pub tessellation: TessellationOptions,
    pub offset: OffsetOptions,
    pub collision_epsilon: f64,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            tessellation: TessellationOptions::default(),
            offset: OffsetOptions::default(),
            collision_epsilon: STANDARD_EPSILON,
        }
    }
}

impl GeometryConfig {
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Returns a copy with `overrides` deep-merged on top of the current values.
    ///
    /// Keys missing from `overrides` keep their current value; nested objects merge key by key.
    pub fn merged(&self, overrides: &Value) -> Result<Self> {
        let mut base = self.to_value()?;
        deep_merge_value(&mut base, overrides);
        Self::from_value(base)
    }
}

fn deep_merge_value(base: &mut Value, incoming: &Value) {
    match (base, incoming) {
        (Value::Object(base_map), Value::Object(in_map)) => {
            for (key, in_value) in in_map {
                match base_map.get_mut(key) {
                    Some(base_value) => deep_merge_value(base_value, in_value),
                    None => {
                        base_map.insert(key.clone(), in_value.clone());
                    }
                }
            }
        }
        (base_slot, in_value) => {
            *base_slot = in_value.clone();
        }
    }
}
