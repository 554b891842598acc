use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// Reported when an accessor is called on a container state that cannot
/// serve it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessError {
  pub kind: AccessErrorKind,
  /// The accessor that was misused.
  pub op: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessErrorKind {
  /// The optional container holds nothing.
  Nothing,
  /// A success-side accessor hit a failure value, or the other way
  /// around.
  WrongVariant,
  /// The variant matched, but its payload was already extracted.
  Consumed,
}

impl AccessError {
  pub(crate) fn nothing(op: &'static str) -> Self {
    Self {
      kind: AccessErrorKind::Nothing,
      op,
    }
  }

  pub(crate) fn wrong_variant(op: &'static str) -> Self {
    Self {
      kind: AccessErrorKind::WrongVariant,
      op,
    }
  }

  pub(crate) fn consumed(op: &'static str) -> Self {
    Self {
      kind: AccessErrorKind::Consumed,
      op,
    }
  }
}

impl Display for AccessError {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self.kind {
      AccessErrorKind::Nothing => {
        write!(f, "called `{}` on a Nothing value", self.op)
      }
      AccessErrorKind::WrongVariant => {
        write!(f, "called `{}` on a value of the other variant", self.op)
      }
      AccessErrorKind::Consumed => {
        write!(
          f,
          "called `{}` after the payload was already extracted",
          self.op
        )
      }
    }
  }
}

impl Error for AccessError {}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn messages_name_the_operation_and_condition() {
    assert_eq!(
      AccessError::nothing("take").to_string(),
      "called `take` on a Nothing value"
    );
    assert_eq!(
      AccessError::wrong_variant("get_success").to_string(),
      "called `get_success` on a value of the other variant"
    );
    assert_eq!(
      AccessError::consumed("take_failure").to_string(),
      "called `take_failure` after the payload was already extracted"
    );
  }

  #[test]
  fn boxes_into_a_dyn_error() {
    let err: Box<dyn Error> = Box::new(AccessError::nothing("get"));
    assert_eq!(err.to_string(), "called `get` on a Nothing value");
  }
}
