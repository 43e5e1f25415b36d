use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    MissingElement {
        selector: String,
    },
    MissingChild {
        parent: String,
        index: usize,
        selector: String,
    },
}

impl SetupError {
    pub(crate) fn missing(selector: &str) -> Self {
        SetupError::MissingElement {
            selector: selector.to_string(),
        }
    }

    pub(crate) fn missing_child(parent: &str, index: usize, selector: &str) -> Self {
        SetupError::MissingChild {
            parent: parent.to_string(),
            index,
            selector: selector.to_string(),
        }
    }
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::MissingElement { selector } => {
                write!(f, "required element '{selector}' not found")
            }
            SetupError::MissingChild {
                parent,
                index,
                selector,
            } => {
                write!(f, "'{parent}' #{index} has no '{selector}' child")
            }
        }
    }
}

impl std::error::Error for SetupError {}
