//! Department operations.

use qabul_core::models::{CreateDepartment, Department, UpdateDepartment};
use qabul_core::DbId;

use crate::client::Gateway;
use crate::envelope::Outcome;
use crate::messages::{op_failed, verb};

impl Gateway {
    /// List departments, optionally restricted to one program.
    pub async fn list_departments(&self, program_id: Option<DbId>) -> Outcome<Vec<Department>> {
        let mut builder = self.http().get(self.url("Department"));
        if let Some(program_id) = program_id {
            builder = builder.query(&[("programId", program_id)]);
        }
        self.send(builder, &op_failed(verb::LOAD, "الأقسام")).await
    }

    pub async fn add_department(&self, input: &CreateDepartment) -> Outcome<Department> {
        self.send(
            self.http().post(self.url("Department")).json(input),
            &op_failed(verb::ADD, "القسم"),
        )
        .await
    }

    pub async fn update_department(&self, input: &UpdateDepartment) -> Outcome<Department> {
        self.send(
            self.http().put(self.url("Department")).json(input),
            &op_failed(verb::UPDATE, "القسم"),
        )
        .await
    }

    pub async fn delete_department(&self, id: DbId) -> Outcome<()> {
        self.send_empty(
            self.http().delete(self.url(&format!("Department/{id}"))),
            &op_failed(verb::DELETE, "القسم"),
        )
        .await
    }
}
