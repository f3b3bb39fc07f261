mod predicate;
mod sort;
mod translate;

pub use predicate::{LinkField, ListField, Predicate, PredicateKind};
pub use sort::{compare, sort_submissions};
pub use translate::{predicates_for, translate, TranslatedQuery};
