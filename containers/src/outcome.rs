use crate::error::AccessError;
use crate::maybe::Maybe;

/// Either a success value of type `T` or a failure value of type `E`,
/// never both.
///
/// Which side an `Outcome` holds is fixed when it is built; extraction
/// empties the payload in place without changing the side. An accessor
/// for the other side reports
/// [`AccessErrorKind::WrongVariant`](crate::error::AccessErrorKind::WrongVariant),
/// an accessor for the right side whose payload was already extracted
/// reports
/// [`AccessErrorKind::Consumed`](crate::error::AccessErrorKind::Consumed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome<T, E> {
  slot: Slot<T, E>,
}

/// An `Outcome` that carries no success value, for operations that only
/// report whether they worked.
pub type Status<E> = Outcome<(), E>;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Slot<T, E> {
  // The inner Option goes None once the payload is extracted; the arm
  // itself never changes after construction.
  Success(Option<T>),
  Failure(Option<E>),
}

impl<T, E> Outcome<T, E> {
  pub fn success(value: T) -> Self {
    Self {
      slot: Slot::Success(Some(value)),
    }
  }

  pub fn failure(error: E) -> Self {
    Self {
      slot: Slot::Failure(Some(error)),
    }
  }

  pub fn is_success(&self) -> bool {
    matches!(self.slot, Slot::Success(_))
  }

  pub fn is_failure(&self) -> bool {
    !self.is_success()
  }

  /// Borrow the success value.
  pub fn get_success(&self) -> Result<&T, AccessError> {
    match &self.slot {
      Slot::Success(Some(value)) => Ok(value),
      Slot::Success(None) => Err(AccessError::consumed("get_success")),
      Slot::Failure(_) => Err(AccessError::wrong_variant("get_success")),
    }
  }

  /// Borrow the failure value.
  pub fn get_failure(&self) -> Result<&E, AccessError> {
    match &self.slot {
      Slot::Failure(Some(error)) => Ok(error),
      Slot::Failure(None) => Err(AccessError::consumed("get_failure")),
      Slot::Success(_) => Err(AccessError::wrong_variant("get_failure")),
    }
  }

  /// Copy the success value out, leaving the container untouched.
  pub fn cloned_success(&self) -> Result<T, AccessError>
  where
    T: Clone,
  {
    match &self.slot {
      Slot::Success(Some(value)) => Ok(value.clone()),
      Slot::Success(None) => Err(AccessError::consumed("cloned_success")),
      Slot::Failure(_) => Err(AccessError::wrong_variant("cloned_success")),
    }
  }

  /// Copy the failure value out, leaving the container untouched.
  pub fn cloned_failure(&self) -> Result<E, AccessError>
  where
    E: Clone,
  {
    match &self.slot {
      Slot::Failure(Some(error)) => Ok(error.clone()),
      Slot::Failure(None) => Err(AccessError::consumed("cloned_failure")),
      Slot::Success(_) => Err(AccessError::wrong_variant("cloned_failure")),
    }
  }

  /// Move the success value out. Every later success-side access reports
  /// it as consumed.
  pub fn take_success(&mut self) -> Result<T, AccessError> {
    match &mut self.slot {
      Slot::Success(slot) => match slot.take() {
        Some(value) => Ok(value),
        None => Err(AccessError::consumed("take_success")),
      },
      Slot::Failure(_) => Err(AccessError::wrong_variant("take_success")),
    }
  }

  /// Move the failure value out. Every later failure-side access reports
  /// it as consumed.
  pub fn take_failure(&mut self) -> Result<E, AccessError> {
    match &mut self.slot {
      Slot::Failure(slot) => match slot.take() {
        Some(error) => Ok(error),
        None => Err(AccessError::consumed("take_failure")),
      },
      Slot::Success(_) => Err(AccessError::wrong_variant("take_failure")),
    }
  }

  /// Extract the success value as a [`Maybe`]: `Just` when this is an
  /// unconsumed success, `Nothing` for a failure or a success that was
  /// already extracted.
  pub fn maybe_success(&mut self) -> Maybe<T> {
    match &mut self.slot {
      Slot::Success(slot) => slot.take().into(),
      Slot::Failure(_) => Maybe::Nothing,
    }
  }

  /// Extract the failure value as a [`Maybe`], symmetric to
  /// [`maybe_success`](Self::maybe_success).
  pub fn maybe_failure(&mut self) -> Maybe<E> {
    match &mut self.slot {
      Slot::Failure(slot) => slot.take().into(),
      Slot::Success(_) => Maybe::Nothing,
    }
  }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
  fn from(result: Result<T, E>) -> Self {
    match result {
      Ok(value) => Self::success(value),
      Err(error) => Self::failure(error),
    }
  }
}
