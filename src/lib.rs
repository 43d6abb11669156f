use std::error::Error as StdError;
use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    UnknownInput(String),
    UnknownMember(MemberId),
    TypeMismatch {
        input: String,
        expected: String,
        actual: String,
    },
    Serialize(String),
    AssertionFailed {
        target: String,
        expected: String,
        actual: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownInput(name) => write!(f, "unknown input: {name}"),
            Self::UnknownMember(member) => write!(f, "unknown member: person-{member}"),
            Self::TypeMismatch {
                input,
                expected,
                actual,
            } => write!(
                f,
                "type mismatch for {input}: expected {expected}, actual {actual}"
            ),
            Self::Serialize(msg) => write!(f, "serialize error: {msg}"),
            Self::AssertionFailed {
                target,
                expected,
                actual,
            } => write!(
                f,
                "assertion failed for {target}: expected {expected}, actual {actual}"
            ),
        }
    }
}

impl StdError for Error {}

mod controller;
mod fields;
mod harness;
mod state;
mod surface;

pub use controller::FormController;
pub use fields::{FieldDescriptor, FieldValue, household_fields};
pub use harness::Harness;
pub use state::{FormState, MemberId, MemberRecord};
pub use surface::{InputId, InputKind, ListItem, MockSurface, Surface};
