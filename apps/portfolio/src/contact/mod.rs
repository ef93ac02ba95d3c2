pub mod form;
pub mod mailer;

pub use form::ContactForm;
pub use mailer::{MailError, Mailer, SmtpMailer};
