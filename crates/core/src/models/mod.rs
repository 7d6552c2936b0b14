//! Entity models and create/update payload DTOs.
//!
//! Every entity is a flat record with a server-assigned id and a handful
//! of scalar fields plus foreign keys into lookup lists. Payload DTOs
//! carry the `validator` rules enforced before a request is issued;
//! unselected foreign keys are uniformly `None` (no `0` / `""` sentinels).

pub mod course;
pub mod degree;
pub mod department;
pub mod instructor;
pub mod intake;
pub mod registration_card;
pub mod student;
pub mod track;
pub mod university;

pub use course::{Course, CreateCourse};
pub use degree::{CreateDegree, Degree, GeneralDegree, UpdateDegree};
pub use department::{CreateDepartment, Department, UpdateDepartment};
pub use instructor::{CreateInstructor, Instructor, UpdateInstructor};
pub use intake::{CreateIntake, Intake, UpdateIntake};
pub use registration_card::{Attachment, CardStatus, CreateRegistrationCard, RegistrationCard};
pub use student::{CreateStudent, Qualification, Student};
pub use track::{CreateTrack, Track};
pub use university::{College, University};
