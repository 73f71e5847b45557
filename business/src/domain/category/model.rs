use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::CategoryError;

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    pub fn new(name: String, description: Option<String>) -> Result<Self, CategoryError> {
        let name = validate_name(name)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            description: normalize_description(description),
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        name: String,
        description: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            created_at,
            updated_at,
        }
    }

    /// Returns `false` when the name and description are already current,
    /// in which case `updated_at` is left untouched.
    pub fn rename(
        &mut self,
        name: String,
        description: Option<String>,
    ) -> Result<bool, CategoryError> {
        let name = validate_name(name)?;
        let description = normalize_description(description);
        if name == self.name && description == self.description {
            return Ok(false);
        }

        self.name = name;
        self.description = description;
        self.updated_at = Utc::now();
        Ok(true)
    }
}

fn validate_name(name: String) -> Result<String, CategoryError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CategoryError::NameEmpty);
    }
    Ok(trimmed.to_string())
}

// Blank descriptions are stored as NULL.
fn normalize_description(description: Option<String>) -> Option<String> {
    description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_trim_category_name() {
        let category = Category::new("  Chili Powders ".to_string(), None).unwrap();

        assert_eq!(category.name, "Chili Powders");
        assert_eq!(category.created_at, category.updated_at);
    }

    #[test]
    fn should_reject_blank_category_name() {
        let result = Category::new("   ".to_string(), None);

        assert!(matches!(result, Err(CategoryError::NameEmpty)));
    }

    #[test]
    fn should_keep_previous_name_when_rename_is_blank() {
        let mut category = Category::new("Peppers".to_string(), None).unwrap();

        let result = category.rename("".to_string(), Some("hot".to_string()));

        assert!(result.is_err());
        assert_eq!(category.name, "Peppers");
        assert_eq!(category.description, None);
    }

    #[test]
    fn should_store_blank_description_as_none() {
        let category = Category::new("Salts".to_string(), Some("   ".to_string())).unwrap();

        assert_eq!(category.description, None);
    }

    #[test]
    fn should_report_unchanged_rename() {
        let mut category =
            Category::new("Peppers".to_string(), Some("Whole".to_string())).unwrap();
        let updated_at = category.updated_at;

        let changed = category
            .rename(" Peppers ".to_string(), Some("Whole ".to_string()))
            .unwrap();

        assert!(!changed);
        assert_eq!(category.updated_at, updated_at);
        assert!(category.rename("Peppercorns".to_string(), None).unwrap());
    }
}
