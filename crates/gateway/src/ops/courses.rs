//! Course operations.

use qabul_core::models::{Course, CreateCourse};
use qabul_core::DbId;

use crate::client::Gateway;
use crate::envelope::Outcome;
use crate::messages::{op_failed, verb};

impl Gateway {
    /// List courses, optionally restricted to one department.
    pub async fn list_courses(&self, dept_id: Option<DbId>) -> Outcome<Vec<Course>> {
        let mut builder = self.http().get(self.url("Course"));
        if let Some(dept_id) = dept_id {
            builder = builder.query(&[("deptId", dept_id)]);
        }
        self.send(builder, &op_failed(verb::LOAD, "المقررات")).await
    }

    pub async fn add_course(&self, input: &CreateCourse) -> Outcome<Course> {
        self.send(
            self.http().post(self.url("Course")).json(input),
            &op_failed(verb::ADD, "المقرر"),
        )
        .await
    }

    pub async fn update_course(&self, input: &CreateCourse) -> Outcome<Course> {
        self.send(
            self.http().put(self.url("Course")).json(input),
            &op_failed(verb::UPDATE, "المقرر"),
        )
        .await
    }

    pub async fn delete_course(&self, id: DbId) -> Outcome<()> {
        self.send_empty(
            self.http().delete(self.url(&format!("Course/{id}"))),
            &op_failed(verb::DELETE, "المقرر"),
        )
        .await
    }
}
