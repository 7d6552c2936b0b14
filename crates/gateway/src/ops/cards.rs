//! Registration card (admission request) operations.
//!
//! Card submission carries up to three degree-image attachments, so it
//! goes over multipart form encoding instead of JSON. Review decisions
//! are `PATCH /RegisterationCard/{id}/accept|reject` (the backend's
//! misspelling of "Registration" is part of its contract). PDF exports
//! return raw bytes passed through untouched.

use qabul_core::models::{Attachment, CreateRegistrationCard, RegistrationCard};
use qabul_core::DbId;

use crate::client::Gateway;
use crate::envelope::Outcome;
use crate::messages::{op_failed, verb};

impl Gateway {
    pub async fn list_cards(&self) -> Outcome<Vec<RegistrationCard>> {
        self.send(
            self.http().get(self.url("RegisterationCard")),
            &op_failed(verb::LOAD, "طلبات التسجيل"),
        )
        .await
    }

    /// Submit a new admission request with its attachments.
    pub async fn add_card(
        &self,
        input: &CreateRegistrationCard,
        attachments: Vec<Attachment>,
    ) -> Outcome<RegistrationCard> {
        let fallback = op_failed(verb::ADD, "طلب التسجيل");

        let mut form = match multipart_fields(input) {
            Ok(form) => form,
            Err(msg) => return Outcome::failure(format!("{fallback}: {msg}")),
        };
        for attachment in attachments {
            let part = match reqwest::multipart::Part::bytes(attachment.bytes)
                .file_name(attachment.file_name)
                .mime_str(&attachment.mime)
            {
                Ok(part) => part,
                Err(err) => return Outcome::failure(format!("{fallback}: {err}")),
            };
            form = form.part(attachment.field_name, part);
        }

        self.send(
            self.http()
                .post(self.url("RegisterationCard/AddRegistrationCard"))
                .multipart(form),
            &fallback,
        )
        .await
    }

    pub async fn accept_card(&self, id: DbId) -> Outcome<()> {
        self.send_empty(
            self.http()
                .patch(self.url(&format!("RegisterationCard/{id}/accept"))),
            &op_failed(verb::ACCEPT, "طلب التسجيل"),
        )
        .await
    }

    pub async fn reject_card(&self, id: DbId) -> Outcome<()> {
        self.send_empty(
            self.http()
                .patch(self.url(&format!("RegisterationCard/{id}/reject"))),
            &op_failed(verb::REJECT, "طلب التسجيل"),
        )
        .await
    }

    /// PDF of all cards, as raw bytes.
    pub async fn all_cards_pdf(&self) -> Outcome<Vec<u8>> {
        self.send_bytes(
            self.http().post(self.url("RegisterationCard/AllCardsPdf")),
            &op_failed(verb::EXPORT, "طلبات التسجيل"),
        )
        .await
    }

    /// PDF of one student's card, as raw bytes.
    pub async fn student_card_pdf(&self, national_id: &str) -> Outcome<Vec<u8>> {
        self.send_bytes(
            self.http()
                .post(self.url("RegisterationCard/StudentCardPdf"))
                .query(&[("NationalId", national_id)]),
            &op_failed(verb::EXPORT, "طلب التسجيل"),
        )
        .await
    }
}

/// Flatten the card payload into multipart text fields, skipping
/// unselected optionals.
fn multipart_fields(
    input: &CreateRegistrationCard,
) -> Result<reqwest::multipart::Form, String> {
    let value = serde_json::to_value(input).map_err(|e| e.to_string())?;
    let serde_json::Value::Object(map) = value else {
        return Err("card payload did not serialize to an object".to_string());
    };

    let mut form = reqwest::multipart::Form::new();
    for (key, value) in map {
        let text = match value {
            serde_json::Value::Null => continue,
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        };
        form = form.text(key, text);
    }
    Ok(form)
}
