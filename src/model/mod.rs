pub mod category;
pub mod item;
pub mod result;

pub use category::{CATEGORIES, Category};
pub use item::{Item, ScoredItem};
pub use result::{PipelineResult, TopItem};
