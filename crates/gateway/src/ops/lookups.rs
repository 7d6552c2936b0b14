//! Lookup list operations (`/Lookups/<name>` plus the degree→track
//! cascade endpoint).

use qabul_core::lookups::{LookupKind, LookupOption};
use qabul_core::DbId;

use crate::client::Gateway;
use crate::envelope::Outcome;
use crate::messages::{op_failed, verb};

impl Gateway {
    /// Fetch one lookup reference list.
    pub async fn lookup(&self, kind: LookupKind) -> Outcome<Vec<LookupOption>> {
        self.send(
            self.http().get(self.url(&format!("Lookups/{}", kind.path()))),
            &op_failed(verb::LOAD, kind.label()),
        )
        .await
    }

    /// Tracks valid under a given degree, for the dependent track select.
    pub async fn msarat_by_degree(&self, degree_id: DbId) -> Outcome<Vec<LookupOption>> {
        self.send(
            self.http()
                .get(self.url("Lookups/GetMsaratByDegreeId"))
                .query(&[("degreeId", degree_id)]),
            &op_failed(verb::LOAD, "المسارات"),
        )
        .await
    }
}
