use super::{DiagnosticCategory, DiagnosticMessage};

pub mod diagnostic_codes {
    pub const CONFLICTING_METHODS: u32 = 1;
    pub const INVALID_OPTION: u32 = 2;
    pub const INVALID_IDENTIFIER: u32 = 3;
    pub const CONFLICTING_CONTROLLER: u32 = 4;
    pub const CONFLICTING_PAGE_CLASS: u32 = 5;
}

pub mod diagnostic_messages {
    pub const CONFLICTING_METHODS: &str =
        "The class '{0}' contains multiple methods which map to the route method '{1}'.";
    pub const INVALID_OPTION: &str = "Value for the option '{0}' is invalid. {1}";
    pub const INVALID_IDENTIFIER: &str = "The text '{0}' is not a valid identifier.";
    pub const CONFLICTING_CONTROLLER: &str =
        "The controller '{0}' conflicts with another controller of the same name.";
    pub const CONFLICTING_PAGE_CLASS: &str =
        "The page class '{0}' conflicts with another page class with the same resulting name.";
}

pub static DIAGNOSTIC_MESSAGES: &[DiagnosticMessage] = &[
    DiagnosticMessage {
        code: diagnostic_codes::CONFLICTING_METHODS,
        category: DiagnosticCategory::Error,
        title: "Conflicting methods",
        message: diagnostic_messages::CONFLICTING_METHODS,
    },
    DiagnosticMessage {
        code: diagnostic_codes::INVALID_OPTION,
        category: DiagnosticCategory::Error,
        title: "Invalid options",
        message: diagnostic_messages::INVALID_OPTION,
    },
    DiagnosticMessage {
        code: diagnostic_codes::INVALID_IDENTIFIER,
        category: DiagnosticCategory::Error,
        title: "Invalid identifier",
        message: diagnostic_messages::INVALID_IDENTIFIER,
    },
    DiagnosticMessage {
        code: diagnostic_codes::CONFLICTING_CONTROLLER,
        category: DiagnosticCategory::Error,
        title: "Conflicting controller",
        message: diagnostic_messages::CONFLICTING_CONTROLLER,
    },
    DiagnosticMessage {
        code: diagnostic_codes::CONFLICTING_PAGE_CLASS,
        category: DiagnosticCategory::Error,
        title: "Conflicting page class",
        message: diagnostic_messages::CONFLICTING_PAGE_CLASS,
    },
];
