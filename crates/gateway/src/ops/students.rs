//! Student operations. Students are keyed by national id.

use qabul_core::models::{CreateStudent, Student};

use crate::client::Gateway;
use crate::envelope::Outcome;
use crate::messages::{op_failed, verb};

impl Gateway {
    pub async fn list_students(&self) -> Outcome<Vec<Student>> {
        self.send(
            self.http().get(self.url("Student")),
            &op_failed(verb::LOAD, "الطلاب"),
        )
        .await
    }

    pub async fn get_student(&self, national_id: &str) -> Outcome<Student> {
        self.send(
            self.http()
                .get(self.url(&format!("Student/getByNationalNum/{national_id}"))),
            &op_failed(verb::LOAD, "الطالب"),
        )
        .await
    }

    pub async fn add_student(&self, input: &CreateStudent) -> Outcome<Student> {
        self.send(
            self.http().post(self.url("Student/add")).json(input),
            &op_failed(verb::ADD, "الطالب"),
        )
        .await
    }

    pub async fn delete_student(&self, national_id: &str) -> Outcome<()> {
        self.send_empty(
            self.http()
                .delete(self.url(&format!("Student/{national_id}"))),
            &op_failed(verb::DELETE, "الطالب"),
        )
        .await
    }
}
