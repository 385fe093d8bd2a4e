pub mod field;
pub mod form;

pub use field::{ChoiceOption, FieldDefinition, FieldKind, PatternRule};
pub use form::FormSchema;
