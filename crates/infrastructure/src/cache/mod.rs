mod store;

pub use store::InMemoryCacheStore;
