use std::any::{type_name, Any};
use std::fmt;
use std::sync::Arc;

/// Type-erased object value.
///
/// Lets one container hold objects of several concrete types while an
/// `instance_of` validator asserts which one a read must produce.
#[derive(Clone)]
pub struct Instance {
    type_name: &'static str,
    value: Arc<dyn Any + Send + Sync>,
}

impl Instance {
    /// Wraps `value`, remembering its concrete type name.
    pub fn new<X: Any + Send + Sync>(value: X) -> Self {
        Self {
            type_name: type_name::<X>(),
            value: Arc::new(value),
        }
    }

    /// Whether the wrapped value is an `X`.
    pub fn is<X: Any>(&self) -> bool {
        self.value.is::<X>()
    }

    /// Borrows the wrapped value as `X`.
    pub fn downcast_ref<X: Any>(&self) -> Option<&X> {
        self.value.downcast_ref::<X>()
    }

    /// Concrete type name of the wrapped value.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Borrows the wrapped value as `dyn Any`, e.g. for adapter lookups.
    pub fn as_any(&self) -> &dyn Any {
        &*self.value
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Instance").field(&self.type_name).finish()
    }
}
