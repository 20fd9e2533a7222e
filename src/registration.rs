//! Decision logic for a registration submission, kept free of HTTP and
//! database I/O so the handler in `services::register` stays a thin adapter.

use crate::{
    error::RegistrationError,
    models::user::{NewUser, RegistrationForm, Role},
    utils::hash_password,
    validator::is_valid_email,
};

/// A form that passed every input check and may be persisted.
#[derive(Debug)]
pub struct ValidRegistration {
    form: RegistrationForm,
}

impl ValidRegistration {
    pub fn name(&self) -> &str {
        &self.form.name
    }

    pub fn email(&self) -> &str {
        &self.form.email
    }

    /// Hashes the password. The resulting row is always `unverified`.
    pub fn into_new_user(self) -> Result<NewUser, RegistrationError> {
        let password_hash = hash_password(&self.form.password)?;
        Ok(NewUser {
            name: self.form.name,
            email: self.form.email,
            password_hash,
            role: Role::Unverified,
        })
    }
}

pub fn validate(form: RegistrationForm) -> Result<ValidRegistration, RegistrationError> {
    if form.name.is_empty() || form.email.is_empty() || form.password.is_empty() {
        return Err(RegistrationError::MissingFields);
    }
    if !is_valid_email(&form.email) {
        return Err(RegistrationError::InvalidEmail);
    }
    Ok(ValidRegistration { form })
}
