/// Default argument for [`Association::get`](crate::Association::get) and
/// [`Associations::get`](crate::Associations::get).
///
/// `Omitted` and `Given(None)` are different requests: the first re-raises a
/// miss as `NotFound`, the second asks for `None` back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback<D> {
    /// No default; a missing key is an error.
    Omitted,
    /// Value returned when the key is missing, even if it is empty or `None`.
    Given(D),
}

impl<D> Fallback<D> {
    /// Whether a default was supplied.
    pub fn is_given(&self) -> bool {
        matches!(self, Fallback::Given(_))
    }

    /// Returns the default, if one was supplied.
    pub fn into_option(self) -> Option<D> {
        match self {
            Fallback::Omitted => None,
            Fallback::Given(d) => Some(d),
        }
    }
}

impl<D> Default for Fallback<D> {
    fn default() -> Self {
        Fallback::Omitted
    }
}
