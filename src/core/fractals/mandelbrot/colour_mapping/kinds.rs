#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MandelbrotColourMapKinds {
    #[default]
    Grayscale,
    PhaseShifted,
}

impl MandelbrotColourMapKinds {
    pub const ALL: &'static [Self] = &[Self::Grayscale, Self::PhaseShifted];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Grayscale => "Grayscale",
            Self::PhaseShifted => "Phase-shifted",
        }
    }

    /// Short name used on the command line.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Grayscale => "grayscale",
            Self::PhaseShifted => "phase",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.key() == key)
    }
}

impl std::fmt::Display for MandelbrotColourMapKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
