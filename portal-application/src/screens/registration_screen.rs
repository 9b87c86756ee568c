use portal_domain::{Event, Registration};

use crate::forms::RegistrationForm;

#[derive(Debug, Clone)]
pub struct RegistrationScreen {
    pub event: Event,
    pub form: RegistrationForm,
    pub(crate) existing: Option<Registration>,
    pub(crate) submitting: bool,
    pub(crate) message: Option<String>,
}

impl RegistrationScreen {
    pub fn new(event: Event, existing: Option<Registration>) -> Self {
        let form = existing
            .as_ref()
            .map(RegistrationForm::from_registration)
            .unwrap_or_default();
        Self {
            event,
            form,
            existing,
            submitting: false,
            message: None,
        }
    }

    pub fn existing(&self) -> Option<&Registration> {
        self.existing.as_ref()
    }

    pub fn is_update(&self) -> bool {
        self.existing.is_some()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub(crate) fn sync_with(&mut self, record: Registration) {
        self.form = RegistrationForm::from_registration(&record);
        self.existing = Some(record);
    }
}

/// Holds the submitting flag for the duration of one submit and clears it on
/// every exit path.
pub(crate) struct SubmitGuard<'a> {
    flag: &'a mut bool,
}

impl<'a> SubmitGuard<'a> {
    pub(crate) fn engage(flag: &'a mut bool) -> Option<Self> {
        if *flag {
            return None;
        }
        *flag = true;
        Some(Self { flag })
    }
}

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        *self.flag = false;
    }
}
