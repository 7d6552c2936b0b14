//! Degree operations.

use qabul_core::models::{CreateDegree, Degree, UpdateDegree};
use qabul_core::DbId;

use crate::client::Gateway;
use crate::envelope::Outcome;
use crate::messages::{op_failed, verb};

impl Gateway {
    /// List degrees, optionally restricted to one department.
    pub async fn list_degrees(&self, dept_id: Option<DbId>) -> Outcome<Vec<Degree>> {
        let mut builder = self.http().get(self.url("Degree"));
        if let Some(dept_id) = dept_id {
            builder = builder.query(&[("deptId", dept_id)]);
        }
        self.send(builder, &op_failed(verb::LOAD, "الدرجات العلمية"))
            .await
    }

    pub async fn add_degree(&self, input: &CreateDegree) -> Outcome<Degree> {
        self.send(
            self.http().post(self.url("Degree")).json(input),
            &op_failed(verb::ADD, "الدرجة العلمية"),
        )
        .await
    }

    pub async fn update_degree(&self, input: &UpdateDegree) -> Outcome<Degree> {
        self.send(
            self.http().put(self.url("Degree")).json(input),
            &op_failed(verb::UPDATE, "الدرجة العلمية"),
        )
        .await
    }

    pub async fn delete_degree(&self, id: DbId) -> Outcome<()> {
        self.send_empty(
            self.http().delete(self.url(&format!("Degree/{id}"))),
            &op_failed(verb::DELETE, "الدرجة العلمية"),
        )
        .await
    }
}
