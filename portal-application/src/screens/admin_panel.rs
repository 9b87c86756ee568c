use portal_domain::{AdminRegistration, EventId, RegistrationId};

use crate::filters::AdminFilters;
use crate::forms::AdminRegistrationForm;
use crate::AppError;

#[derive(Debug, Clone)]
pub struct AdminEdit {
    pub registration_id: RegistrationId,
    pub form: AdminRegistrationForm,
}

#[derive(Debug, Clone)]
pub struct AdminPanel {
    pub event_id: EventId,
    pub filters: AdminFilters,
    pub(crate) rows: Vec<AdminRegistration>,
    pub(crate) editing: Option<AdminEdit>,
    pub(crate) message: Option<String>,
}

impl AdminPanel {
    pub fn new(event_id: EventId, page_size: u32) -> Self {
        Self {
            event_id,
            filters: AdminFilters::new(page_size),
            rows: Vec::new(),
            editing: None,
            message: None,
        }
    }

    pub fn rows(&self) -> &[AdminRegistration] {
        &self.rows
    }

    pub fn row(&self, id: RegistrationId) -> Option<&AdminRegistration> {
        self.rows.iter().find(|row| row.id() == id)
    }

    pub fn editing(&self) -> Option<&AdminEdit> {
        self.editing.as_ref()
    }

    pub fn editing_mut(&mut self) -> Option<&mut AdminEdit> {
        self.editing.as_mut()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn begin_edit(&mut self, id: RegistrationId) -> Result<&mut AdminEdit, AppError> {
        let form = self
            .row(id)
            .map(AdminRegistrationForm::from_row)
            .ok_or_else(|| AppError::BadRequest(format!("registration {} is not listed", id)))?;
        Ok(self.editing.insert(AdminEdit {
            registration_id: id,
            form,
        }))
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub(crate) fn upsert_row(&mut self, row: AdminRegistration) {
        match self.rows.iter_mut().find(|item| item.id() == row.id()) {
            Some(slot) => *slot = row,
            None => self.rows.push(row),
        }
    }

    pub(crate) fn remove_row(&mut self, id: RegistrationId) {
        self.rows.retain(|row| row.id() != id);
        if self
            .editing
            .as_ref()
            .is_some_and(|edit| edit.registration_id == id)
        {
            self.editing = None;
        }
    }
}
