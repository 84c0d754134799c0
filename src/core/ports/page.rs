//! Page element ports
//!
//! The three elements the controller drives: the text input, the validation
//! indicator and the result area. Elements are mutated through `&self`, the
//! way DOM handles are.

use std::rc::Rc;

use thiserror::Error;

/// Errors raised by page element adapters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    /// Element could not be found on the page
    #[error("element not found: {0}")]
    Missing(String),

    /// Element exists but is not of the expected kind
    #[error("element {element} is not a {expected}")]
    WrongKind {
        /// Element id or name
        element: String,
        /// Expected element kind
        expected: &'static str,
    },

    /// Element rejected an update
    #[error("failed to update {element}: {message}")]
    Update {
        /// Element id or name
        element: String,
        /// Reason given by the host
        message: String,
    },
}

/// Height of the auto-growing input box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoxHeight {
    /// Let the host size the box from its content
    #[default]
    Auto,
    /// Fixed height in pixels (or rows, for terminal hosts)
    Pixels(u32),
}

impl std::fmt::Display for BoxHeight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Pixels(px) => write!(f, "{px}px"),
        }
    }
}

/// The text input holding the raw formula
pub trait InputField {
    /// Current text content
    fn value(&self) -> Result<String, PageError>;

    /// Set the box height
    fn set_height(&self, height: BoxHeight) -> Result<(), PageError>;

    /// Height the content needs at the current width
    fn scroll_height(&self) -> Result<u32, PageError>;
}

/// Element showing the live validity status
pub trait ValidationIndicator {
    /// Replace the indicator content
    fn show_status(&self, markup: &str) -> Result<(), PageError>;
}

/// Element showing the calculation outcome
pub trait ResultArea {
    /// Replace the result content
    fn show(&self, markup: &str) -> Result<(), PageError>;
}

macro_rules! forward_page_ports {
    ($($wrapper:ty),*) => {$(
        impl<T: InputField + ?Sized> InputField for $wrapper {
            fn value(&self) -> Result<String, PageError> {
                (**self).value()
            }

            fn set_height(&self, height: BoxHeight) -> Result<(), PageError> {
                (**self).set_height(height)
            }

            fn scroll_height(&self) -> Result<u32, PageError> {
                (**self).scroll_height()
            }
        }

        impl<T: ValidationIndicator + ?Sized> ValidationIndicator for $wrapper {
            fn show_status(&self, markup: &str) -> Result<(), PageError> {
                (**self).show_status(markup)
            }
        }

        impl<T: ResultArea + ?Sized> ResultArea for $wrapper {
            fn show(&self, markup: &str) -> Result<(), PageError> {
                (**self).show(markup)
            }
        }
    )*};
}

forward_page_ports!(&T, Rc<T>, Box<T>);
