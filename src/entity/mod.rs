//! Read-only views of topological entities.
//!
//! Each wrapper pairs a borrowed [`GeometryKernel`] with one of its handles.
//! Construction checks the handle kind, so a wrapper is never created for the
//! wrong kind of entity. Equality and hashing go through [`ShapeKey`]: two
//! wrappers are equal when they refer to the same underlying entity, whatever
//! their orientation.

mod edge;
mod face;
mod solid;
mod vertex;

pub use edge::{Edge, DEFAULT_LENGTH_TOLERANCE};
pub use face::Face;
pub use solid::Solid;
pub use vertex::Vertex;

use crate::error::{Result, TopologyError};
use crate::kernel::{GeometryKernel, ShapeKey, ShapeKind};

/// Fails with [`TopologyError::TypeMismatch`] unless `handle` is a `expected`.
fn check_kind<K: GeometryKernel>(kernel: &K, handle: &K::Handle, expected: ShapeKind) -> Result<()> {
    let found = kernel.shape_kind(handle);
    if found == expected {
        Ok(())
    } else {
        Err(TopologyError::TypeMismatch { expected, found }.into())
    }
}

/// Wraps every handle in `handles`, keeping the first occurrence of each
/// entity in kernel order.
fn unique<'k, K, T, F>(kernel: &'k K, handles: Vec<K::Handle>, wrap: F) -> Vec<T>
where
    K: GeometryKernel,
    F: Fn(&'k K, K::Handle) -> T,
{
    let mut seen = std::collections::HashSet::<ShapeKey>::new();
    handles
        .into_iter()
        .filter(|h| seen.insert(kernel.shape_key(h)))
        .map(|h| wrap(kernel, h))
        .collect()
}

/// Implements identity, `Clone` and `Debug` for a kernel-backed wrapper.
macro_rules! entity_identity {
    ($name:ident) => {
        impl<K: GeometryKernel> $name<'_, K> {
            /// Structural key of the underlying entity.
            #[must_use]
            pub fn key(&self) -> ShapeKey {
                self.kernel.shape_key(&self.handle)
            }

            /// The kernel handle this wrapper views.
            #[must_use]
            pub fn handle(&self) -> &K::Handle {
                &self.handle
            }
        }

        impl<K: GeometryKernel> Clone for $name<'_, K> {
            fn clone(&self) -> Self {
                Self {
                    kernel: self.kernel,
                    handle: self.handle.clone(),
                }
            }
        }

        impl<K: GeometryKernel> std::fmt::Debug for $name<'_, K> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.key()).finish()
            }
        }

        impl<K: GeometryKernel> PartialEq for $name<'_, K> {
            fn eq(&self, other: &Self) -> bool {
                self.key() == other.key()
            }
        }

        impl<K: GeometryKernel> Eq for $name<'_, K> {}

        impl<K: GeometryKernel> std::hash::Hash for $name<'_, K> {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                self.key().hash(state);
            }
        }
    };
}

pub(crate) use entity_identity;
