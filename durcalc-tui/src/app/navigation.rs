use super::*;

impl App {
    /// Move focus to the next field of the current mode, wrapping around
    pub fn focus_next(&mut self) {
        self.focused = self.cycle_focus(1);
    }

    /// Move focus to the previous field of the current mode, wrapping around
    pub fn focus_previous(&mut self) {
        self.focused = self.cycle_focus(-1);
    }

    fn cycle_focus(&self, step: isize) -> InputId {
        let fields = inputs_for(self.mode);
        // Focus can sit on a field from another mode after a click; restart from the top then.
        match fields.iter().position(|id| *id == self.focused) {
            Some(idx) => {
                let len = fields.len() as isize;
                fields[(idx as isize + step).rem_euclid(len) as usize]
            }
            None => fields[0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycles_within_mode() {
        let mut app = App::new(&CalcConfig::default(), UtcOffset::UTC);
        app.set_mode(Mode::DurationToDate);
        app.focus_next();
        assert_eq!(app.focused, InputId::DurationB);
        app.focus_next();
        assert_eq!(app.focused, InputId::DateA);
        app.focus_previous();
        assert_eq!(app.focused, InputId::DurationB);
    }

    #[test]
    fn test_focus_outside_mode_restarts() {
        let mut app = App::new(&CalcConfig::default(), UtcOffset::UTC);
        app.focus(InputId::DateB);
        app.focus_next();
        assert_eq!(app.focused, InputId::DurationA);
    }
}
