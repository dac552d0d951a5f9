// Declared tool parameters: JSON Schema rendering plus validation and coercion

use serde_json::{json, Map, Value};

/// Value type a parameter accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Integer,
    Boolean,
    /// JSON object, or `null`
    Object,
}

impl ParamKind {
    fn json_type(self) -> Value {
        match self {
            Self::String => json!("string"),
            Self::Integer => json!("integer"),
            Self::Boolean => json!("boolean"),
            Self::Object => json!(["object", "null"]),
        }
    }
}

/// One declared tool parameter
#[derive(Debug, Clone)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    pub description: String,
    /// Value used when the caller omits the parameter; `None` makes it required.
    pub default: Option<Value>,
    /// Lower bound for integer parameters.
    pub minimum: Option<i64>,
}

impl ParamSpec {
    pub fn required(name: &'static str, kind: ParamKind, description: impl Into<String>) -> Self {
        Self {
            name,
            kind,
            description: description.into(),
            default: None,
            minimum: None,
        }
    }

    pub fn optional(
        name: &'static str,
        kind: ParamKind,
        description: impl Into<String>,
        default: Value,
    ) -> Self {
        Self {
            default: Some(default),
            ..Self::required(name, kind, description)
        }
    }

    pub fn with_minimum(mut self, minimum: i64) -> Self {
        self.minimum = Some(minimum);
        self
    }

    pub fn is_required(&self) -> bool {
        self.default.is_none()
    }

    fn json_schema(&self) -> Value {
        let mut schema = Map::new();
        schema.insert("type".to_string(), self.kind.json_type());
        schema.insert("description".to_string(), json!(self.description));
        if let Some(default) = &self.default {
            schema.insert("default".to_string(), default.clone());
        }
        if let Some(minimum) = self.minimum {
            schema.insert("minimum".to_string(), json!(minimum));
        }
        Value::Object(schema)
    }

    /// Coerce a caller-supplied value to this parameter's type.
    fn coerce(&self, value: &Value) -> Result<Value, String> {
        let coerced = match self.kind {
            ParamKind::String => match value {
                Value::String(_) => value.clone(),
                other => return Err(self.mismatch("a string", other)),
            },
            ParamKind::Integer => {
                let n = coerce_integer(value).ok_or_else(|| self.mismatch("an integer", value))?;
                json!(n)
            }
            ParamKind::Boolean => {
                let b = coerce_boolean(value).ok_or_else(|| self.mismatch("a boolean", value))?;
                json!(b)
            }
            ParamKind::Object => match value {
                Value::Object(_) | Value::Null => value.clone(),
                other => return Err(self.mismatch("an object", other)),
            },
        };

        if let (Some(minimum), Some(n)) = (self.minimum, coerced.as_i64()) {
            if n < minimum {
                return Err(format!(
                    "'{}' must be greater than or equal to {}, got {}",
                    self.name, minimum, n
                ));
            }
        }

        Ok(coerced)
    }

    fn mismatch(&self, expected: &str, got: &Value) -> String {
        format!("'{}' must be {}, got {}", self.name, expected, got)
    }
}

fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn coerce_boolean(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => match n.as_i64() {
            Some(0) => Some(false),
            Some(1) => Some(true),
            _ => None,
        },
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Some(true),
            "false" | "0" | "no" | "off" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Statically declared description of a tool
#[derive(Debug, Clone)]
pub struct ToolSpec {
    pub name: String,
    pub description: String,
    pub params: Vec<ParamSpec>,
}

impl ToolSpec {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            params: Vec::new(),
        }
    }

    pub fn param(mut self, param: ParamSpec) -> Self {
        self.params.push(param);
        self
    }

    /// JSON Schema published in `tools/list`.
    pub fn input_schema(&self) -> Value {
        let properties: Map<String, Value> = self
            .params
            .iter()
            .map(|p| (p.name.to_string(), p.json_schema()))
            .collect();
        let required: Vec<&str> = self
            .params
            .iter()
            .filter(|p| p.is_required())
            .map(|p| p.name)
            .collect();

        json!({
            "type": "object",
            "properties": properties,
            "required": required
        })
    }

    /// Check and normalise call arguments against the declared parameters.
    ///
    /// The returned object holds every declared parameter (defaults filled in,
    /// values coerced) and nothing else.
    pub fn validate(&self, arguments: &Value) -> Result<Value, String> {
        let empty = Map::new();
        let supplied = match arguments {
            Value::Null => &empty,
            Value::Object(map) => map,
            other => return Err(format!("arguments must be an object, got {}", other)),
        };

        let mut normalized = Map::new();
        for param in &self.params {
            let value = match (supplied.get(param.name), &param.default) {
                (Some(value), _) => param.coerce(value)?,
                (None, Some(default)) => default.clone(),
                (None, None) => return Err(format!("missing required argument '{}'", param.name)),
            };
            normalized.insert(param.name.to_string(), value);
        }

        for extra in supplied.keys().filter(|k| !normalized.contains_key(k.as_str())) {
            tracing::debug!(tool = %self.name, argument = %extra, "Ignoring undeclared argument");
        }

        Ok(Value::Object(normalized))
    }
}
