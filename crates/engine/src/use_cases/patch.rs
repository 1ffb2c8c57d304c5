//! Optional fields of partial-update commands.

/// A command field that is either left out or supplied.
///
/// Distinct from `Option`: `Patch<Option<T>>::Present(None)` means "clear
/// this field", while `Patch::Absent` means "leave it alone".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Patch<T> {
    #[default]
    Absent,
    Present(T),
}

impl<T> Patch<T> {
    pub fn is_present(&self) -> bool {
        matches!(self, Patch::Present(_))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Patch::Absent)
    }

    pub fn as_ref(&self) -> Patch<&T> {
        match self {
            Patch::Absent => Patch::Absent,
            Patch::Present(value) => Patch::Present(value),
        }
    }

    /// The supplied value, if any.
    pub fn present(self) -> Option<T> {
        match self {
            Patch::Absent => None,
            Patch::Present(value) => Some(value),
        }
    }
}

impl<T> From<T> for Patch<T> {
    fn from(value: T) -> Self {
        Patch::Present(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clearing_differs_from_leaving_out() {
        let left_out: Patch<Option<u16>> = Patch::Absent;
        let cleared: Patch<Option<u16>> = Patch::Present(None);
        assert!(left_out.is_absent());
        assert!(cleared.is_present());
        assert_eq!(cleared.present(), Some(None));
    }

    #[test]
    fn default_is_absent() {
        let patch: Patch<String> = Patch::default();
        assert_eq!(patch.present(), None);
        assert_eq!(Patch::from(5).present(), Some(5));
    }

    #[test]
    fn default_needs_no_default_payload() {
        #[derive(Debug, PartialEq)]
        struct NoDefault;

        let patch: Patch<NoDefault> = Patch::default();
        assert!(patch.is_absent());
    }
}
