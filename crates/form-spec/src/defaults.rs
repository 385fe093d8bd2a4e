use crate::schema::{ChoiceOption, FieldDefinition, FieldKind, FormSchema, PatternRule};

fn choice(value: &str, label: &str) -> ChoiceOption {
    ChoiceOption {
        value: value.into(),
        label: label.into(),
    }
}

/// Built-in survey schema shown before the first edit.
///
/// Note the email field's declared pattern: it is metadata only and is
/// not compiled into the live rule set.
pub fn survey() -> FormSchema {
    FormSchema {
        form_title: "Survey".into(),
        form_description: "Please fill out below details".into(),
        fields: vec![
            FieldDefinition {
                id: "name".into(),
                kind: FieldKind::Text,
                label: "Full Name".into(),
                required: true,
                placeholder: Some("Enter your full name".into()),
                options: None,
                validation: None,
            },
            FieldDefinition {
                id: "email".into(),
                kind: FieldKind::Email,
                label: "Email Address".into(),
                required: true,
                placeholder: Some("Email".into()),
                options: None,
                validation: Some(PatternRule {
                    pattern: "^[^\\s@]+@[^\\s@]+\\.[^\\s@]+$".into(),
                    message: "Please enter a valid email address".into(),
                }),
            },
            FieldDefinition {
                id: "companySize".into(),
                kind: FieldKind::Radio,
                label: "Company Size".into(),
                required: true,
                placeholder: None,
                options: Some(vec![
                    choice("1-50", "1-50 employees"),
                    choice("51-200", "51-200 employees"),
                    choice("201-1000", "201-1000 employees"),
                    choice("1000+", "1000+ employees"),
                ]),
                validation: None,
            },
            FieldDefinition {
                id: "industry".into(),
                kind: FieldKind::Radio,
                label: "Industry".into(),
                required: true,
                placeholder: None,
                options: Some(vec![
                    choice("tech", "Technology"),
                    choice("healthcare", "Healthcare"),
                    choice("finance", "Finance"),
                    choice("retail", "Retail"),
                    choice("other", "Other"),
                ]),
                validation: None,
            },
            FieldDefinition {
                id: "timeline".into(),
                kind: FieldKind::Radio,
                label: "Project Timeline".into(),
                required: true,
                placeholder: None,
                options: Some(vec![
                    choice("immediate", "Immediate (within 1 month)"),
                    choice("short", "Short-term (1-3 months)"),
                    choice("medium", "Medium-term (3-6 months)"),
                    choice("long", "Long-term (6+ months)"),
                ]),
                validation: None,
            },
            FieldDefinition {
                id: "comments".into(),
                kind: FieldKind::Textarea,
                label: "Additional Comments".into(),
                required: false,
                placeholder: Some("Any other details you'd like to share...".into()),
                options: None,
                validation: None,
            },
        ],
    }
}
