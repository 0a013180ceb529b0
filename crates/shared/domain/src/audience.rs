use bitflags::bitflags;

bitflags! {
    /// Audiences a catalogue entry is shown to.
    ///
    /// `ALL` entries appear everywhere; `MRM` alone marks packages reserved for
    /// MRM's own deployment.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct Audience: u8 {
        /// The public landing page.
        const PUBLIC = 1 << 0;
        /// MRM group installations.
        const MRM = 1 << 1;

        const ALL = Self::PUBLIC.bits() | Self::MRM.bits();
    }
}

impl Audience {
    /// Whether an entry with this visibility may appear on the public page.
    #[must_use]
    pub const fn is_public(self) -> bool {
        self.contains(Self::PUBLIC)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_public_flag_reaches_the_landing_page() {
        assert!(Audience::ALL.is_public());
        assert!(Audience::PUBLIC.is_public());
        assert!(!Audience::MRM.is_public());
        assert!(!Audience::empty().is_public());
    }
}
