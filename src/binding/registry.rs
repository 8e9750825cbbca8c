//! Process-wide descriptor cache

use super::{BindingDescriptor, IniSection};
use crate::error::{Error, Result};
use crate::sync::RwLockExt;

use log::debug;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, RwLock};

type DescriptorMap = HashMap<TypeId, Arc<dyn Any + Send + Sync>>;

static DESCRIPTORS: OnceLock<RwLock<DescriptorMap>> = OnceLock::new();

fn descriptors() -> &'static RwLock<DescriptorMap> {
    DESCRIPTORS.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Resolve the binding descriptor of `T`.
///
/// The descriptor is built from [`IniSection::binding`] on first use and then
/// shared for the life of the process. Bindings are static, so the cache is
/// never invalidated.
///
/// # Errors
///
/// Returns [`Error::UnboundType`](crate::Error::UnboundType) if the binding
/// declares no section. Failures are not cached.
pub fn resolve<T: IniSection>() -> Result<Arc<BindingDescriptor<T>>> {
    let type_id = TypeId::of::<T>();

    let cached = descriptors().read_recovered()?.get(&type_id).cloned();
    if let Some(descriptor) = cached.and_then(|any| any.downcast::<BindingDescriptor<T>>().ok()) {
        return Ok(descriptor);
    }

    let built: Arc<dyn Any + Send + Sync> = Arc::new(T::binding().into_descriptor()?);
    let stored = {
        let mut map = descriptors().write_recovered()?;
        Arc::clone(map.entry(type_id).or_insert(built))
    };

    let descriptor = stored.downcast::<BindingDescriptor<T>>().map_err(|_| {
        Error::Config(format!(
            "descriptor cache mismatch for {}",
            std::any::type_name::<T>()
        ))
    })?;

    debug!(
        "Resolved binding for {} -> [{}] ({} fields)",
        descriptor.type_name(),
        descriptor.section(),
        descriptor.fields().len()
    );
    Ok(descriptor)
}
