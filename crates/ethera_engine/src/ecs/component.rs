//! Component trait

use std::any::Any;

/// Marker trait for components
///
/// Components are plain data records with no behavior. An entity holds at
/// most one instance of each concrete component type.
pub trait Component: Any {}

/// Short type name used in logs and error messages
pub(crate) fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    match base.rfind("::") {
        Some(idx) => &full[idx + 2..],
        None => full,
    }
}
