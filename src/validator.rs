use ::validator::ValidateEmail;

pub fn is_valid_email(email: &str) -> bool {
    email.validate_email()
}
