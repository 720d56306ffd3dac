//! Translation into ErrorResponse fields for the wire encoder.

use quarry_pq::ErrorField;

use crate::Error;

impl Error {
    /// Severity reported to clients: warnings for class `01`, errors
    /// otherwise.
    pub fn severity(&self) -> &'static str {
        if self.code().is_warning() {
            "WARNING"
        } else {
            "ERROR"
        }
    }

    /// The ErrorResponse fields for this error, in the order they are sent.
    ///
    /// The tracking tag is internal and is never included. An empty hint or
    /// detail is left out, as in [`full_error`](crate::full_error).
    pub fn to_fields(&self) -> Vec<(ErrorField, String)> {
        let mut fields = vec![
            (ErrorField::Severity, self.severity().to_string()),
            (ErrorField::SeverityNonLocalized, self.severity().to_string()),
            (ErrorField::Code, self.code().as_str().to_string()),
            (ErrorField::Message, self.message().to_string()),
        ];
        if let Some(detail) = self.detail().filter(|d| !d.is_empty()) {
            fields.push((ErrorField::Detail, detail.to_string()));
        }
        if let Some(hint) = self.hint().filter(|h| !h.is_empty()) {
            fields.push((ErrorField::Hint, hint.to_string()));
        }
        if let Some(location) = self.location() {
            fields.push((ErrorField::File, location.file().to_string()));
            fields.push((ErrorField::Line, location.line().to_string()));
            if !location.function().is_empty() {
                fields.push((ErrorField::Routine, location.function().to_string()));
            }
        }
        fields
    }
}
