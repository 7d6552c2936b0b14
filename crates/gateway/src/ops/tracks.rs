//! Track (msar) operations.

use qabul_core::models::{CreateTrack, Track};
use qabul_core::DbId;

use crate::client::Gateway;
use crate::envelope::Outcome;
use crate::messages::{op_failed, verb};

impl Gateway {
    pub async fn list_tracks(&self) -> Outcome<Vec<Track>> {
        self.send(
            self.http().get(self.url("Msar")),
            &op_failed(verb::LOAD, "المسارات"),
        )
        .await
    }

    pub async fn add_track(&self, input: &CreateTrack) -> Outcome<Track> {
        self.send(
            self.http().post(self.url("Msar")).json(input),
            &op_failed(verb::ADD, "المسار"),
        )
        .await
    }

    pub async fn delete_track(&self, id: DbId) -> Outcome<()> {
        self.send_empty(
            self.http().delete(self.url(&format!("Msar/{id}"))),
            &op_failed(verb::DELETE, "المسار"),
        )
        .await
    }
}
