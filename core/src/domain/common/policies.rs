use crate::domain::common::entities::app_errors::CoreError;

/// Turns a policy verdict into a `Forbidden` error carrying `message`.
pub fn ensure_policy(result: Result<bool, CoreError>, message: &str) -> Result<(), CoreError> {
    match result {
        Ok(true) => Ok(()),
        Ok(false) => Err(CoreError::Forbidden(message.to_string())),
        Err(e) => Err(e),
    }
}
