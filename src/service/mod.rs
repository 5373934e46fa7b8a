//! Asset metadata cache and the resolution driver that feeds it.

mod cache;
mod resolver;

pub use cache::AssetCache;
pub use resolver::Resolver;
