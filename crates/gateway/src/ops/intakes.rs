//! Intake (admission cycle) operations.

use qabul_core::models::{CreateIntake, Intake, UpdateIntake};
use qabul_core::DbId;

use crate::client::Gateway;
use crate::envelope::Outcome;
use crate::messages::{op_failed, verb};

impl Gateway {
    pub async fn list_intakes(&self) -> Outcome<Vec<Intake>> {
        self.send(
            self.http().get(self.url("Intake")),
            &op_failed(verb::LOAD, "الدفعات"),
        )
        .await
    }

    pub async fn add_intake(&self, input: &CreateIntake) -> Outcome<Intake> {
        self.send(
            self.http().post(self.url("Intake")).json(input),
            &op_failed(verb::ADD, "الدفعة"),
        )
        .await
    }

    pub async fn update_intake(&self, input: &UpdateIntake) -> Outcome<Intake> {
        self.send(
            self.http().put(self.url("Intake")).json(input),
            &op_failed(verb::UPDATE, "الدفعة"),
        )
        .await
    }

    pub async fn delete_intake(&self, id: DbId) -> Outcome<()> {
        self.send_empty(
            self.http().delete(self.url(&format!("Intake/{id}"))),
            &op_failed(verb::DELETE, "الدفعة"),
        )
        .await
    }
}
