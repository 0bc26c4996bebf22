// ============================================================================
// Operations Registry
// Thread-safe memoized resolution of per-type operations singletons
// ============================================================================
//
// One singleton per concrete number type, constructed lazily on first
// access, idempotent under races, and read-only process-wide afterwards.
// Entries are keyed by TypeId and leaked to 'static; there is no teardown.

use crate::number::Number;
use parking_lot::RwLock;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::OnceLock;

type OpsTable = RwLock<HashMap<TypeId, &'static (dyn Any + Send + Sync)>>;

static REGISTRY: OnceLock<OpsTable> = OnceLock::new();

fn table() -> &'static OpsTable {
    REGISTRY.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Resolves the operations singleton for `N`, constructing it on first use.
///
/// Prefer [`Number::ops`], which forwards here.
pub fn ops_for<N: Number>() -> &'static N::Ops {
    let key = TypeId::of::<N>();

    if let Some(entry) = table().read().get(&key) {
        return entry
            .downcast_ref::<N::Ops>()
            .expect("registry entry type matches its TypeId key");
    }

    let mut map = table().write();
    // Double-checked under the write lock: a racing thread may have won.
    let entry: &'static (dyn Any + Send + Sync) = *map.entry(key).or_insert_with(|| {
        tracing::trace!(
            number_type = std::any::type_name::<N>(),
            "constructing operations singleton"
        );
        Box::leak(Box::new(N::Ops::default()))
    });
    entry
        .downcast_ref::<N::Ops>()
        .expect("registry entry type matches its TypeId key")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hyper::Complex;
    use crate::number::NumberOps;
    use crate::scalar::{ExtendedReal, Real};

    #[test]
    fn test_singleton_identity() {
        let a = ops_for::<Real>() as *const _;
        let b = ops_for::<Real>() as *const _;
        assert_eq!(a, b);
    }

    #[test]
    fn test_distinct_types_distinct_entries() {
        assert_eq!(ops_for::<Real>().dimension(), 1);
        assert_eq!(ops_for::<ExtendedReal>().dimension(), 1);
        assert_eq!(ops_for::<Complex<Real>>().dimension(), 2);
    }

    #[test]
    fn test_concurrent_first_access_is_idempotent() {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                std::thread::spawn(|| {
                    ops_for::<Complex<Complex<Real>>>() as *const _ as usize
                })
            })
            .collect();
        let pointers: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(pointers.windows(2).all(|w| w[0] == w[1]));
    }
}
