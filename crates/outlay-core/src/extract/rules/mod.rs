//! Rule-based field extraction from free-form expense text.

pub mod amounts;
pub mod categories;
pub mod confidence;
pub mod dates;
pub mod description;
pub mod patterns;

pub use amounts::AmountExtractor;
pub use categories::CategoryClassifier;
pub use dates::DateResolver;
pub use description::DescriptionBuilder;
