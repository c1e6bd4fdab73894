use std::fmt;

// ============================================================================
// Validation Error Taxonomy
// ============================================================================
//
// Every invariant violation raised by an aggregate or value object is a
// ValidationError. Validation is fail-fast: the first broken rule is
// reported and nothing after it is checked.
//
// ============================================================================

/// Kind of rule that was broken. Drives the machine-readable error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    /// A required value is missing or blank
    RequiredField,
    /// A value does not match its expected pattern
    InvalidFormat,
    /// A value is too short or too long
    InvalidLength,
    /// A value lies outside its allowed range (e.g. age bounds)
    OutOfRange,
    /// A required reference (type, contact, ...) was not supplied
    MissingReference,
    /// The requested lifecycle transition is not allowed from the current state
    InvalidTransition,
    /// A natural key or email is already registered
    Duplicate,
}

impl ViolationKind {
    pub const fn code(&self) -> &'static str {
        match self {
            ViolationKind::RequiredField => "REQUIRED_FIELD",
            ViolationKind::InvalidFormat => "INVALID_FORMAT",
            ViolationKind::InvalidLength => "INVALID_LENGTH",
            ViolationKind::OutOfRange => "OUT_OF_RANGE",
            ViolationKind::MissingReference => "MISSING_REFERENCE",
            ViolationKind::InvalidTransition => "INVALID_STATE_TRANSITION",
            ViolationKind::Duplicate => "DUPLICATE_VALUE",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    kind: ViolationKind,
    message: String,
    field: Option<&'static str>,
}

impl ValidationError {
    /// Field-level violation
    pub fn new(kind: ViolationKind, field: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field: Some(field),
        }
    }

    /// Violation that is not tied to a single field (e.g. a state transition)
    pub fn without_field(kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field: None,
        }
    }

    pub fn required(field: &'static str, message: impl Into<String>) -> Self {
        Self::new(ViolationKind::RequiredField, field, message)
    }

    pub fn invalid_format(field: &'static str, message: impl Into<String>) -> Self {
        Self::new(ViolationKind::InvalidFormat, field, message)
    }

    pub fn invalid_length(field: &'static str, message: impl Into<String>) -> Self {
        Self::new(ViolationKind::InvalidLength, field, message)
    }

    pub fn out_of_range(field: &'static str, message: impl Into<String>) -> Self {
        Self::new(ViolationKind::OutOfRange, field, message)
    }

    pub fn missing_reference(field: &'static str, message: impl Into<String>) -> Self {
        Self::new(ViolationKind::MissingReference, field, message)
    }

    pub fn invalid_transition(message: impl Into<String>) -> Self {
        Self::without_field(ViolationKind::InvalidTransition, message)
    }

    pub fn duplicate(field: &'static str, message: impl Into<String>) -> Self {
        Self::new(ViolationKind::Duplicate, field, message)
    }

    pub fn kind(&self) -> ViolationKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn field(&self) -> Option<&'static str> {
        self.field
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
