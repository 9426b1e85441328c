//! Classificação de tipos em tempo de execução.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Tipos dinâmicos reconhecidos pelos validadores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeName {
    /// `null`.
    Null,
    /// `true` / `false`.
    Boolean,
    /// Qualquer número.
    Number,
    /// Texto.
    String,
    /// Lista.
    Array,
    /// Mapa chave-valor.
    Object,
}

impl TypeName {
    /// Classifica um valor.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => TypeName::Null,
            Value::Bool(_) => TypeName::Boolean,
            Value::Number(_) => TypeName::Number,
            Value::String(_) => TypeName::String,
            Value::Array(_) => TypeName::Array,
            Value::Object(_) => TypeName::Object,
        }
    }
}

impl std::fmt::Display for TypeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeName::Null => write!(f, "null"),
            TypeName::Boolean => write!(f, "boolean"),
            TypeName::Number => write!(f, "number"),
            TypeName::String => write!(f, "string"),
            TypeName::Array => write!(f, "array"),
            TypeName::Object => write!(f, "object"),
        }
    }
}

/// Verifica se `value` é do tipo `type_name`.
pub fn is_type(value: &Value, type_name: TypeName) -> bool {
    TypeName::of(value) == type_name
}
