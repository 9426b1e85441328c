//! Validadores do primeiro argumento de uma chamada.
//!
//! Os validadores verificam o primeiro argumento contra um tipo concreto
//! (via `Any`) ou contra um [`TypeName`] dinâmico (via `serde_json::Value`).
//! Em caso de falha, chamam o fallback `on_error` com **todos** os
//! argumentos originais; sem fallback, devolvem um [`ValidationError`].

mod types;

pub use types::{is_type, TypeName};

use std::any::{type_name, Any};

use serde_json::Value;
use thiserror::Error;

/// Erro de validação do primeiro argumento.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Provided arg must have instance of {expected}")]
    InstanceMismatch { expected: &'static str },

    #[error("Provided arg must have {expected} type")]
    TypeMismatch { expected: TypeName },

    #[error("Fallback must return {expected} type, got {actual}")]
    FallbackMismatch {
        expected: TypeName,
        actual: TypeName,
    },
}

/// Fallback para validação por instância.
pub type InstanceFallback<T> = Box<dyn Fn(&[&dyn Any]) -> T>;

/// Fallback para validação por tipo dinâmico.
///
/// O valor devolvido também precisa ser do tipo esperado.
pub type TypeFallback = Box<dyn Fn(&[Value]) -> Value>;

/// Cria um validador que exige que o primeiro argumento seja um `T`.
///
/// ```
/// use std::any::Any;
/// use memora::create_single_arg_instance_validation;
///
/// let as_string = create_single_arg_instance_validation::<String>(None);
/// let name = String::from("otto");
/// assert_eq!(as_string(&[&name as &dyn Any]).unwrap(), "otto");
/// assert!(as_string(&[&7u8 as &dyn Any]).is_err());
/// ```
pub fn create_single_arg_instance_validation<T>(
    on_error: Option<InstanceFallback<T>>,
) -> impl Fn(&[&dyn Any]) -> Result<T, ValidationError>
where
    T: Any + Clone,
{
    move |args: &[&dyn Any]| {
        if let Some(value) = args.first().and_then(|arg| arg.downcast_ref::<T>()) {
            return Ok(value.clone());
        }

        match &on_error {
            Some(fallback) => {
                tracing::debug!(
                    expected = type_name::<T>(),
                    "Instance validation failed, using fallback"
                );
                Ok(fallback(args))
            }
            None => Err(ValidationError::InstanceMismatch {
                expected: type_name::<T>(),
            }),
        }
    }
}

/// Cria um validador que exige que o primeiro argumento seja do tipo
/// dinâmico `expected`.
///
/// Se o fallback devolver um valor de outro tipo, o resultado é
/// [`ValidationError::FallbackMismatch`].
pub fn create_single_arg_type_validation(
    expected: TypeName,
    on_error: Option<TypeFallback>,
) -> impl Fn(&[Value]) -> Result<Value, ValidationError> {
    move |args: &[Value]| {
        if let Some(value) = args.first().filter(|arg| is_type(arg, expected)) {
            return Ok(value.clone());
        }

        match &on_error {
            Some(fallback) => {
                tracing::debug!(expected = %expected, "Type validation failed, using fallback");
                let value = fallback(args);
                if is_type(&value, expected) {
                    Ok(value)
                } else {
                    Err(ValidationError::FallbackMismatch {
                        expected,
                        actual: TypeName::of(&value),
                    })
                }
            }
            None => Err(ValidationError::TypeMismatch { expected }),
        }
    }
}
