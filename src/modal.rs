//! New-Folder Modal State
//!
//! CLOSED → OPEN → SUBMITTING → CLOSED, or back to ERROR(message) with the
//! modal still open.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open { input: String },
    Submitting { input: String },
    Error { input: String, message: String },
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::Closed)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, ModalState::Submitting { .. })
    }

    pub fn input(&self) -> &str {
        match self {
            ModalState::Closed => "",
            ModalState::Open { input }
            | ModalState::Submitting { input }
            | ModalState::Error { input, .. } => input,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ModalState::Error { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Open with an empty input and no error
    pub fn open(&mut self) {
        *self = ModalState::Open { input: String::new() };
    }

    /// Close from any state, discarding the input
    pub fn close(&mut self) {
        *self = ModalState::Closed;
    }

    pub fn edit(&mut self, text: &str) {
        match self {
            ModalState::Open { input } | ModalState::Error { input, .. } => {
                *input = text.to_string();
            }
            ModalState::Closed | ModalState::Submitting { .. } => {}
        }
    }

    /// Enter SUBMITTING; returns the name to submit, or None if not allowed
    pub fn begin_submit(&mut self) -> Option<String> {
        match self {
            ModalState::Open { input } | ModalState::Error { input, .. } => {
                let name = std::mem::take(input);
                *self = ModalState::Submitting { input: name.clone() };
                Some(name)
            }
            ModalState::Closed | ModalState::Submitting { .. } => None,
        }
    }

    /// Apply the submit outcome; ignored if the modal was closed meanwhile
    pub fn finish(&mut self, outcome: Result<(), String>) {
        let ModalState::Submitting { input } = self else {
            return;
        };
        let next = match outcome {
            Ok(()) => ModalState::Closed,
            Err(message) => ModalState::Error {
                input: std::mem::take(input),
                message,
            },
        };
        *self = next;
    }
}
