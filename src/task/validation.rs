use super::NewTask;
use std::fmt;

/// Notification text shown when the assignment form is incomplete
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all required task details: Service Type, Pick Up, Drop Off, Assign Robot, and Requested By.";

/// Validation errors for the task assignment form
#[derive(Debug, Clone, PartialEq)]
pub enum TaskFormError {
    /// Labels of the required fields left blank, in form order
    MissingFields(Vec<&'static str>),
}

impl fmt::Display for TaskFormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskFormError::MissingFields(fields) => {
                write!(f, "missing required fields: {}", fields.join(", "))
            }
        }
    }
}

impl std::error::Error for TaskFormError {}

/// Rejections for a recipient signature
#[derive(Debug, Clone, PartialEq)]
pub enum SignatureError {
    /// Empty or whitespace-only signature text
    Empty,
    /// No task with this id
    UnknownTask(u64),
}

impl fmt::Display for SignatureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignatureError::Empty => write!(f, "signature must not be empty"),
            SignatureError::UnknownTask(id) => write!(f, "no task with id {}", id),
        }
    }
}

impl std::error::Error for SignatureError {}

/// Guard applied before a signature is recorded
pub fn validate_signature(signature: &str) -> Result<(), SignatureError> {
    if signature.trim().is_empty() {
        return Err(SignatureError::Empty);
    }
    Ok(())
}

/// Validates a task request the way the assignment form does.
///
/// Required: service type, robot, pick up, drop off, requested by.
/// Whitespace-only values count as missing. Patient id and special
/// instructions are optional.
pub fn validate_form(request: &NewTask) -> Result<(), TaskFormError> {
    let required = [
        ("Service Type", &request.name),
        ("Pick Up", &request.pick_up),
        ("Drop Off", &request.drop_off),
        ("Assign Robot", &request.robot),
        ("Requested By", &request.requested_by),
    ];

    let missing: Vec<&'static str> = required
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| *label)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(TaskFormError::MissingFields(missing))
    }
}
