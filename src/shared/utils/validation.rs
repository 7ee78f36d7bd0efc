use crate::shared::errors::AppError;

pub struct Validator;

impl Validator {
    pub fn validate_id(id: i32, entity: &str) -> Result<(), AppError> {
        if id <= 0 {
            return Err(AppError::ValidationError(format!(
                "{} id must be positive",
                entity
            )));
        }
        Ok(())
    }

    pub fn validate_pagination(offset: i64, limit: i64) -> Result<(), AppError> {
        if offset < 0 {
            return Err(AppError::ValidationError(
                "Offset cannot be negative".to_string(),
            ));
        }
        if limit <= 0 {
            return Err(AppError::ValidationError(
                "Limit must be positive".to_string(),
            ));
        }
        if limit > 100 {
            return Err(AppError::ValidationError(
                "Limit cannot exceed 100".to_string(),
            ));
        }
        Ok(())
    }

    /// Turn a user term into an ILIKE substring pattern, matching `%`, `_` and `\` literally.
    pub fn like_pattern(term: &str) -> String {
        let mut pattern = String::with_capacity(term.len() + 2);
        pattern.push('%');
        for c in term.chars() {
            if matches!(c, '%' | '_' | '\\') {
                pattern.push('\\');
            }
            pattern.push(c);
        }
        pattern.push('%');
        pattern
    }
}
