use crate::types::IdeaCreateInput;

const TITLE_MAX_LENGTH: usize = 200;
const DESCRIPTION_MIN_LENGTH: usize = 10;
const DESCRIPTION_MAX_LENGTH: usize = 4000;

/// Validation errors for idea data
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Validates idea data for submission
pub fn validate_idea_create(data: &IdeaCreateInput) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if data.title.trim().is_empty() {
        errors.push(ValidationError::new("title", "Title is required"));
    } else if data.title.chars().count() > TITLE_MAX_LENGTH {
        errors.push(ValidationError::new(
            "title",
            format!("Title must be at most {} characters", TITLE_MAX_LENGTH),
        ));
    }

    errors.extend(validate_description(&data.description));

    errors
}

/// Validates a description, for submission or a later edit
pub fn validate_description(description: &str) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let length = description.trim().chars().count();

    if length == 0 {
        errors.push(ValidationError::new("description", "Description is required"));
    } else if length < DESCRIPTION_MIN_LENGTH {
        errors.push(ValidationError::new(
            "description",
            format!(
                "Description must be at least {} characters",
                DESCRIPTION_MIN_LENGTH
            ),
        ));
    } else if length > DESCRIPTION_MAX_LENGTH {
        errors.push(ValidationError::new(
            "description",
            format!(
                "Description must be at most {} characters",
                DESCRIPTION_MAX_LENGTH
            ),
        ));
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input() {
        let data = IdeaCreateInput {
            title: "Digitale Zeiterfassung".to_string(),
            description: "Stundenzettel sollen digital erfasst werden".to_string(),
            idea_type: None,
        };

        assert!(validate_idea_create(&data).is_empty());
    }

    #[test]
    fn test_empty_title() {
        let data = IdeaCreateInput {
            title: "   ".to_string(),
            description: "Eine ausreichend lange Beschreibung".to_string(),
            idea_type: None,
        };

        let errors = validate_idea_create(&data);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "title");
    }

    #[test]
    fn test_description_too_short() {
        let errors = validate_description("kurz");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "description");
    }

    #[test]
    fn test_description_too_long() {
        let long = "x".repeat(DESCRIPTION_MAX_LENGTH + 1);
        let errors = validate_description(&long);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "description");
    }

    #[test]
    fn test_title_too_long() {
        let data = IdeaCreateInput {
            title: "t".repeat(TITLE_MAX_LENGTH + 1),
            description: "Eine ausreichend lange Beschreibung".to_string(),
            idea_type: None,
        };

        let errors = validate_idea_create(&data);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "title");
    }
}
