// Internal types - domain values that never cross the API boundary as-is
pub mod auth;
pub mod category;
pub mod scope;
pub mod timeframe;

pub use category::EventCategory;
pub use scope::AdminScope;
pub use timeframe::Timeframe;
