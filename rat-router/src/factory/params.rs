//! Untyped, ordered construction parameters.

use crate::error::{FactoryError, MissingParameterSnafu, ParameterTypeSnafu};
use snafu::OptionExt;
use std::any::{type_name, Any};
use std::fmt;

/// Ordered list of construction parameters handed to a route factory.
#[derive(Default)]
pub struct Params {
    values: Vec<Box<dyn Any>>,
}

impl Params {
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Append a parameter, builder style.
    pub fn with<T: Any>(mut self, value: T) -> Self {
        self.push(value);
        self
    }

    pub fn push<T: Any>(&mut self, value: T) {
        self.values.push(Box::new(value));
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Borrow parameter `index` as a `T`.
    pub fn get<T: Any>(&self, index: usize) -> Result<&T, FactoryError> {
        let value = self.values.get(index).context(MissingParameterSnafu {
            index,
            len: self.values.len(),
        })?;
        (**value).downcast_ref::<T>().context(ParameterTypeSnafu {
            index,
            expected: type_name::<T>(),
        })
    }

    /// Clone parameter `index` out as a `T`.
    pub fn cloned<T: Any + Clone>(&self, index: usize) -> Result<T, FactoryError> {
        self.get::<T>(index).cloned()
    }
}

impl fmt::Debug for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Params").field("len", &self.values.len()).finish()
    }
}

/// Build a `Params` list from expressions.
///
/// # Example
/// ```ignore
/// let params = params![host.clone(), 3_u32, "label".to_string()];
/// assert_eq!(params.len(), 3);
/// ```
#[macro_export]
macro_rules! params {
    () => {
        $crate::Params::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Params::new()$(.with($value))+
    };
}
