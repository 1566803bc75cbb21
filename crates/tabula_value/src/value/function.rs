//! Native functions over packed arguments.

use std::fmt;
use std::sync::Arc;

use crate::errors::ValueResult;
use crate::pack::Pack;

use super::Value;

/// Body of a native function: packed arguments in, packed results out.
pub type NativeFn = dyn Fn(Pack<Value>) -> ValueResult<Pack<Value>> + Send + Sync;

/// Named native function, compared and hashed by identity.
#[derive(Clone)]
pub struct NativeFunction {
    name: Arc<str>,
    body: Arc<NativeFn>,
}

impl NativeFunction {
    /// Wrap a closure as a function value.
    pub fn new<F>(name: impl Into<Arc<str>>, body: F) -> Self
    where
        F: Fn(Pack<Value>) -> ValueResult<Pack<Value>> + Send + Sync + 'static,
    {
        NativeFunction {
            name: name.into(),
            body: Arc::new(body),
        }
    }

    /// Call with packed arguments.
    pub fn call(&self, args: Pack<Value>) -> ValueResult<Pack<Value>> {
        (self.body)(args)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Allocation address of the body.
    #[inline]
    pub fn id(&self) -> usize {
        Arc::as_ptr(&self.body).cast::<()>() as usize
    }

    /// Identity string, e.g. `function: 0x55d0c8a2b6f0`.
    pub fn address(&self) -> String {
        format!("function: {:#x}", self.id())
    }

    #[inline]
    pub fn ptr_eq(&self, other: &NativeFunction) -> bool {
        self.id() == other.id()
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NativeFunction({} @ {:#x})", self.name, self.id())
    }
}
