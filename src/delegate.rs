//! Caller-supplied collaborators consulted during validation.

/// Answers whether a password was used before by the same account.
pub trait PreviousPasswords {
    fn is_previous_password(&self, password: &str) -> bool;
}

/// Delegate attached to a validator with
/// [`set_delegate`](crate::PasswordValidator::set_delegate).
///
/// A delegate advertises the capabilities it supports; the
/// `rejectPreviousPasswords` rule fails with
/// [`ValidatorError::DelegateCapability`](crate::ValidatorError::DelegateCapability)
/// when [`previous_passwords`](PasswordDelegate::previous_passwords) returns `None`.
///
/// ```rust
/// use pwd_policy::{PasswordDelegate, PreviousPasswords};
///
/// struct History(Vec<String>);
///
/// impl PreviousPasswords for History {
///     fn is_previous_password(&self, password: &str) -> bool {
///         self.0.iter().any(|p| p == password)
///     }
/// }
///
/// impl PasswordDelegate for History {
///     fn previous_passwords(&self) -> Option<&dyn PreviousPasswords> {
///         Some(self)
///     }
/// }
/// ```
pub trait PasswordDelegate: Send {
    fn previous_passwords(&self) -> Option<&dyn PreviousPasswords> {
        None
    }
}
