//! University and college operations.
//!
//! Universities use query-parameter creation (`/University/add?UniversityName=`)
//! rather than a JSON body; colleges follow the same shape under `/College`.

use qabul_core::models::{College, University};
use qabul_core::DbId;

use crate::client::Gateway;
use crate::envelope::Outcome;
use crate::messages::{op_failed, verb};

impl Gateway {
    pub async fn list_universities(&self) -> Outcome<Vec<University>> {
        self.send(
            self.http().get(self.url("University/names")),
            &op_failed(verb::LOAD, "الجامعات"),
        )
        .await
    }

    pub async fn add_university(&self, name: &str) -> Outcome<University> {
        self.send(
            self.http()
                .post(self.url("University/add"))
                .query(&[("UniversityName", name)]),
            &op_failed(verb::ADD, "الجامعة"),
        )
        .await
    }

    pub async fn update_university(&self, university: &University) -> Outcome<University> {
        self.send(
            self.http()
                .put(self.url("University/update"))
                .json(university),
            &op_failed(verb::UPDATE, "الجامعة"),
        )
        .await
    }

    pub async fn delete_university(&self, id: DbId) -> Outcome<()> {
        self.send_empty(
            self.http()
                .delete(self.url(&format!("University/delete/{id}"))),
            &op_failed(verb::DELETE, "الجامعة"),
        )
        .await
    }

    pub async fn list_colleges(&self) -> Outcome<Vec<College>> {
        self.send(
            self.http().get(self.url("College/names")),
            &op_failed(verb::LOAD, "الكليات"),
        )
        .await
    }

    pub async fn add_college(&self, name: &str) -> Outcome<College> {
        self.send(
            self.http()
                .post(self.url("College/add"))
                .query(&[("CollegeName", name)]),
            &op_failed(verb::ADD, "الكلية"),
        )
        .await
    }

    pub async fn update_college(&self, college: &College) -> Outcome<College> {
        self.send(
            self.http().put(self.url("College/update")).json(college),
            &op_failed(verb::UPDATE, "الكلية"),
        )
        .await
    }

    pub async fn delete_college(&self, id: DbId) -> Outcome<()> {
        self.send_empty(
            self.http()
                .delete(self.url(&format!("College/delete/{id}"))),
            &op_failed(verb::DELETE, "الكلية"),
        )
        .await
    }
}
