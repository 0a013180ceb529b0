/// Open/closed state of the mobile navigation panel.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// The opposite state.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    /// Inverts the state in place; one call per button press.
    pub const fn toggle(&mut self) {
        *self = self.toggled();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn each_toggle_inverts_the_previous_state() {
        let mut menu = MenuState::default();
        for press in 1..=7 {
            let before = menu;
            menu.toggle();
            assert_eq!(menu, before.toggled());
            assert_eq!(menu.is_open(), press % 2 == 1);
        }
    }
}
