use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    MissingFields, // Name or email left blank, form keeps its input
    Sent,          // Accepted (demo only), form is cleared
}

impl FormStatus {
    pub fn message(&self, lang: &str) -> &'static str {
        let indonesian = lang == "id";
        match (self, indonesian) {
            (FormStatus::MissingFields, true) => "Nama & email wajib diisi.",
            (FormStatus::MissingFields, false) => "Name & email are required.",
            (FormStatus::Sent, true) => "Terima kasih! Pesan Anda telah terkirim (demo).",
            (FormStatus::Sent, false) => "Thanks! Your message has been sent (demo).",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Validates the form and clears it when accepted. Nothing is sent anywhere.
    pub fn submit(&mut self) -> FormStatus {
        if self.name.trim().is_empty() || self.email.trim().is_empty() {
            debug!("contact form rejected, missing fields");
            return FormStatus::MissingFields;
        }
        debug!(message_len = self.message.trim().len(), "contact form accepted");
        *self = ContactForm::default();
        FormStatus::Sent
    }
}
