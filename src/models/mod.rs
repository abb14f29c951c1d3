// Data models and derived value objects

pub mod analytics;
pub mod cycle;
pub mod fertility;
pub mod prediction;
pub mod reminder;
pub mod validation;

pub use analytics::*;
pub use cycle::*;
pub use fertility::*;
pub use prediction::*;
pub use reminder::*;
pub use validation::*;
