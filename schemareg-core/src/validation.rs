use crate::errors::{DescriptionField, RegistryError, Result};
use crate::types::{SchemaDescription, SchemaFormat};
use std::str::FromStr;

/// Borrowed, typed view of a description that passed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidSchema<'a> {
    pub group_name: &'a str,
    pub name: &'a str,
    pub format: SchemaFormat,
    pub content: &'a str,
}

/// Validate a description against every supported format.
pub fn validate(description: &SchemaDescription) -> Result<ValidSchema<'_>> {
    validate_with(description, &SchemaFormat::ALL)
}

/// Validate a description, accepting only the formats in `allowed`.
///
/// Fields are checked in a fixed order (name, group name, content, format) so
/// the reported field is stable when several are missing.
pub fn validate_with<'a>(
    description: &'a SchemaDescription,
    allowed: &[SchemaFormat],
) -> Result<ValidSchema<'a>> {
    let name = required(description.name.as_deref(), DescriptionField::Name)?;
    let group_name = required(description.group_name.as_deref(), DescriptionField::GroupName)?;
    let content = required(description.content.as_deref(), DescriptionField::Content)?;
    let raw_format = required(
        description.serialization_format.as_deref(),
        DescriptionField::SerializationFormat,
    )?;

    let format = SchemaFormat::from_str(raw_format).map_err(|reason| {
        RegistryError::validation(DescriptionField::SerializationFormat, reason)
    })?;

    if !allowed.contains(&format) {
        return Err(RegistryError::validation(
            DescriptionField::SerializationFormat,
            format!(
                "serialization format '{}' is not enabled for this client",
                raw_format
            ),
        ));
    }

    Ok(ValidSchema {
        group_name,
        name,
        format,
        content,
    })
}

/// Reject a missing schema id before it reaches the cache or the registry.
pub fn validate_id(id: &str) -> Result<&str> {
    required(Some(id), DescriptionField::Id)
}

fn required(value: Option<&str>, field: DescriptionField) -> Result<&str> {
    match value {
        None => Err(RegistryError::validation(field, "value is required")),
        Some("") => Err(RegistryError::validation(field, "value must not be empty")),
        Some(value) => Ok(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn description() -> SchemaDescription {
        SchemaDescription::new(
            "group-1",
            "com.example.User",
            "avro",
            r#"{"type":"record","name":"User","fields":[]}"#,
        )
    }

    fn failing_field(description: &SchemaDescription) -> DescriptionField {
        validate(description)
            .unwrap_err()
            .field()
            .expect("expected a validation error")
    }

    #[test]
    fn test_valid_description_passes() {
        let description = description();
        let valid = validate(&description).unwrap();

        assert_eq!(valid.group_name, "group-1");
        assert_eq!(valid.name, "com.example.User");
        assert_eq!(valid.format, SchemaFormat::Avro);
    }

    #[test]
    fn test_missing_or_empty_fields_are_rejected() {
        let mut missing_name = description();
        missing_name.name = None;
        assert_eq!(failing_field(&missing_name), DescriptionField::Name);

        let mut empty_group = description();
        empty_group.group_name = Some(String::new());
        assert_eq!(failing_field(&empty_group), DescriptionField::GroupName);

        let mut empty_content = description();
        empty_content.content = Some(String::new());
        assert_eq!(failing_field(&empty_content), DescriptionField::Content);

        let mut missing_format = description();
        missing_format.serialization_format = None;
        assert_eq!(
            failing_field(&missing_format),
            DescriptionField::SerializationFormat
        );
    }

    #[test]
    fn test_name_is_reported_before_other_fields() {
        let description = SchemaDescription::default();
        assert_eq!(failing_field(&description), DescriptionField::Name);
    }

    #[test]
    fn test_format_matching_is_case_insensitive() {
        let mut upper = description();
        upper.serialization_format = Some("AvRo".into());
        assert_eq!(validate(&upper).unwrap().format, SchemaFormat::Avro);
    }

    #[test]
    fn test_unsupported_format_echoes_value() {
        let mut typo = description();
        typo.serialization_format = Some("avrro".into());

        let err = validate(&typo).unwrap_err();
        assert_eq!(err.field(), Some(DescriptionField::SerializationFormat));
        assert!(err.to_string().contains("avrro"));
    }

    #[test]
    fn test_disallowed_format_is_rejected() {
        let mut json = description();
        json.serialization_format = Some("json".into());

        let err = validate_with(&json, &[SchemaFormat::Avro]).unwrap_err();
        assert_eq!(err.field(), Some(DescriptionField::SerializationFormat));
        assert!(err.to_string().contains("json"));
    }

    #[test]
    fn test_empty_id_is_rejected() {
        let err = validate_id("").unwrap_err();
        assert_eq!(err.field(), Some(DescriptionField::Id));
        assert_eq!(validate_id("abc").unwrap(), "abc");
    }
}
