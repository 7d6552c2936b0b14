//! Instructor operations.

use qabul_core::models::{CreateInstructor, Instructor, UpdateInstructor};
use qabul_core::DbId;

use crate::client::Gateway;
use crate::envelope::Outcome;
use crate::messages::{op_failed, verb};

impl Gateway {
    pub async fn list_instructors(&self) -> Outcome<Vec<Instructor>> {
        self.send(
            self.http().get(self.url("Instructor")),
            &op_failed(verb::LOAD, "المحاضرين"),
        )
        .await
    }

    pub async fn add_instructor(&self, input: &CreateInstructor) -> Outcome<Instructor> {
        self.send(
            self.http().post(self.url("Instructor")).json(input),
            &op_failed(verb::ADD, "المحاضر"),
        )
        .await
    }

    pub async fn update_instructor(&self, input: &UpdateInstructor) -> Outcome<Instructor> {
        self.send(
            self.http().put(self.url("Instructor")).json(input),
            &op_failed(verb::UPDATE, "المحاضر"),
        )
        .await
    }

    pub async fn delete_instructor(&self, id: DbId) -> Outcome<()> {
        self.send_empty(
            self.http().delete(self.url(&format!("Instructor/{id}"))),
            &op_failed(verb::DELETE, "المحاضر"),
        )
        .await
    }
}
