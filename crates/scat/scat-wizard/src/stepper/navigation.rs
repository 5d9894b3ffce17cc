//! Position moves. None of these fail; a disallowed move leaves the position
//! unchanged and returns `false`.

use scat_core::SectionId;

use super::FormStepper;

impl FormStepper {
    /// False at the last cause of `nac`. At the last cause of any other
    /// section, true only once that section is complete.
    pub fn can_go_next(&self) -> bool {
        let last = self.current_section_data().last_cause_index();
        if self.current_cause < last {
            return true;
        }
        match self.current_section.next() {
            Some(_) => self.section_progress(self.current_section).is_complete(),
            None => false,
        }
    }

    pub fn can_go_previous(&self) -> bool {
        !(self.current_section == SectionId::Ci && self.current_cause == 0)
    }

    pub fn go_next(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        let last = self.current_section_data().last_cause_index();
        if self.current_cause < last {
            return self.set_position(self.current_section, self.current_cause + 1);
        }
        match self.current_section.next() {
            Some(next) => self.set_position(next, 0),
            None => false,
        }
    }

    /// Steps back one cause, or to the last cause of the previous section
    /// from cause 0.
    pub fn go_previous(&mut self) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        if self.current_cause > 0 {
            return self.set_position(self.current_section, self.current_cause - 1);
        }
        match self.current_section.previous() {
            Some(prev) => {
                let last = self.catalog.section(prev).last_cause_index();
                self.set_position(prev, last)
            }
            None => false,
        }
    }

    /// Jump to `(section, 0)` unless the section is locked.
    pub fn go_to_section(&mut self, section: SectionId) -> bool {
        if self.is_section_locked(section) {
            tracing::debug!(user_id = %self.user_id, %section, "ignored jump to locked section");
            return false;
        }
        self.set_position(section, 0)
    }

    /// Jump within the current section. Out-of-range indexes are ignored.
    pub fn go_to_cause(&mut self, index: usize) -> bool {
        if index >= self.current_section_data().total_causes() {
            return false;
        }
        self.set_position(self.current_section, index)
    }
}
