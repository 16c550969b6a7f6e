//! Image discovery, copying and reference rewriting.
//!
//! Each article's images land in one directory per slug under the asset root. References
//! already pointing into that namespace are left alone, so relocation can run repeatedly.

mod index;
mod references;
mod relocator;

pub use index::AssetIndex;
pub use relocator::AssetRelocator;
