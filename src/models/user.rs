use std::fmt;

use rusqlite::{
    types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef},
    ToSql,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Unverified,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Unverified => "unverified",
        }
    }
}

impl ToSql for Role {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Role {
    fn column_result(value: ValueRef) -> FromSqlResult<Self> {
        match value.as_str()? {
            "unverified" => Ok(Role::Unverified),
            _ => Err(FromSqlError::InvalidType),
        }
    }
}

#[derive(Debug)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// Submitted registration form, built from decoded form pairs. Absent fields are empty strings.
#[derive(Default)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl FromIterator<(String, String)> for RegistrationForm {
    /// Folds decoded form pairs. A repeated key keeps its first value; unknown keys are ignored.
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let (mut name, mut email, mut password) = (None, None, None);
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "name" => &mut name,
                "email" => &mut email,
                "password" => &mut password,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        RegistrationForm {
            name: name.unwrap_or_default(),
            email: email.unwrap_or_default(),
            password: password.unwrap_or_default(),
        }
    }
}

impl fmt::Debug for RegistrationForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationForm")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_redacts_password() {
        let form = RegistrationForm {
            name: "Alice".to_owned(),
            email: "alice@example.com".to_owned(),
            password: "secret123".to_owned(),
        };
        let printed = format!("{:?}", form);
        assert!(!printed.contains("secret123"));
        assert!(printed.contains("alice@example.com"));
    }

    #[test]
    fn repeated_keys_keep_the_first_value() {
        let pairs = [
            ("name", "Alice"),
            ("name", "Bob"),
            ("email", "alice@example.com"),
            ("remember", "on"),
        ];
        let form: RegistrationForm = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        assert_eq!(form.name, "Alice");
        assert_eq!(form.email, "alice@example.com");
        assert_eq!(form.password, "");
    }

    #[test]
    fn role_round_trips_through_sqlite() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        let role: Role = conn
            .query_row("SELECT ?1", [Role::Unverified], |row| row.get(0))
            .unwrap();
        assert_eq!(role, Role::Unverified);
    }

    #[test]
    fn unknown_role_text_is_rejected() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        let result: rusqlite::Result<Role> =
            conn.query_row("SELECT 'admin'", [], |row| row.get(0));
        assert!(result.is_err());
    }
}
