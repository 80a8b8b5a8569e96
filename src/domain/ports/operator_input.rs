//! Operator Input Port
//!
//! Source of raw answer lines for batch and per-item confirmation.

/// Reads one answer line from the operator.
///
/// Implementations return the raw line; a closed or failing input yields an
/// empty string, which every prompt treats as "not yes".
pub trait OperatorInput {
    fn read_line(&self) -> String;
}

impl<T: OperatorInput + ?Sized> OperatorInput for &T {
    fn read_line(&self) -> String {
        (**self).read_line()
    }
}
