//! Per-entity CRUD operations consumed by the management container.
//!
//! [`EntityOps`] abstracts "the four calls a container needs" so the
//! container stays generic and tests can substitute a scripted fake.
//! The gateway-backed implementations below cover the entity families the
//! CLI manages; every other family follows the same shape.

use std::sync::Arc;

use async_trait::async_trait;
use qabul_core::models::{
    College, CreateDegree, CreateDepartment, CreateInstructor, CreateIntake, Degree, Department,
    Instructor, Intake, UpdateDegree, UpdateDepartment, UpdateInstructor, UpdateIntake,
    University,
};
use qabul_core::DbId;
use qabul_gateway::{Gateway, Outcome};

/// CRUD surface of one entity family.
#[async_trait]
pub trait EntityOps: Send + Sync {
    type Entity: Clone + Send + Sync + 'static;
    type Create: Send + Sync;
    type Update: Send + Sync;
    type Key: Clone + PartialEq + Send + Sync;

    /// Arabic label used in user-facing failure fallbacks.
    fn label(&self) -> &'static str;

    /// Business key of an entity (id, or national id for students).
    fn key(entity: &Self::Entity) -> Self::Key;

    async fn list(&self) -> Outcome<Vec<Self::Entity>>;
    async fn create(&self, input: &Self::Create) -> Outcome<Self::Entity>;
    async fn update(&self, input: &Self::Update) -> Outcome<Self::Entity>;
    async fn delete(&self, key: &Self::Key) -> Outcome<()>;
}

// ---------------------------------------------------------------------------
// Gateway-backed implementations
// ---------------------------------------------------------------------------

/// Degree CRUD over the gateway.
pub struct DegreeOps(pub Arc<Gateway>);

#[async_trait]
impl EntityOps for DegreeOps {
    type Entity = Degree;
    type Create = CreateDegree;
    type Update = UpdateDegree;
    type Key = DbId;

    fn label(&self) -> &'static str {
        "الدرجة العلمية"
    }

    fn key(entity: &Degree) -> DbId {
        entity.id
    }

    async fn list(&self) -> Outcome<Vec<Degree>> {
        self.0.list_degrees(None).await
    }

    async fn create(&self, input: &CreateDegree) -> Outcome<Degree> {
        self.0.add_degree(input).await
    }

    async fn update(&self, input: &UpdateDegree) -> Outcome<Degree> {
        self.0.update_degree(input).await
    }

    async fn delete(&self, key: &DbId) -> Outcome<()> {
        self.0.delete_degree(*key).await
    }
}

/// Department CRUD over the gateway.
pub struct DepartmentOps(pub Arc<Gateway>);

#[async_trait]
impl EntityOps for DepartmentOps {
    type Entity = Department;
    type Create = CreateDepartment;
    type Update = UpdateDepartment;
    type Key = DbId;

    fn label(&self) -> &'static str {
        "القسم"
    }

    fn key(entity: &Department) -> DbId {
        entity.id
    }

    async fn list(&self) -> Outcome<Vec<Department>> {
        self.0.list_departments(None).await
    }

    async fn create(&self, input: &CreateDepartment) -> Outcome<Department> {
        self.0.add_department(input).await
    }

    async fn update(&self, input: &UpdateDepartment) -> Outcome<Department> {
        self.0.update_department(input).await
    }

    async fn delete(&self, key: &DbId) -> Outcome<()> {
        self.0.delete_department(*key).await
    }
}

/// Intake CRUD over the gateway.
pub struct IntakeOps(pub Arc<Gateway>);

#[async_trait]
impl EntityOps for IntakeOps {
    type Entity = Intake;
    type Create = CreateIntake;
    type Update = UpdateIntake;
    type Key = DbId;

    fn label(&self) -> &'static str {
        "الدفعة"
    }

    fn key(entity: &Intake) -> DbId {
        entity.id
    }

    async fn list(&self) -> Outcome<Vec<Intake>> {
        self.0.list_intakes().await
    }

    async fn create(&self, input: &CreateIntake) -> Outcome<Intake> {
        self.0.add_intake(input).await
    }

    async fn update(&self, input: &UpdateIntake) -> Outcome<Intake> {
        self.0.update_intake(input).await
    }

    async fn delete(&self, key: &DbId) -> Outcome<()> {
        self.0.delete_intake(*key).await
    }
}

/// Instructor CRUD over the gateway.
pub struct InstructorOps(pub Arc<Gateway>);

#[async_trait]
impl EntityOps for InstructorOps {
    type Entity = Instructor;
    type Create = CreateInstructor;
    type Update = UpdateInstructor;
    type Key = DbId;

    fn label(&self) -> &'static str {
        "المحاضر"
    }

    fn key(entity: &Instructor) -> DbId {
        entity.id
    }

    async fn list(&self) -> Outcome<Vec<Instructor>> {
        self.0.list_instructors().await
    }

    async fn create(&self, input: &CreateInstructor) -> Outcome<Instructor> {
        self.0.add_instructor(input).await
    }

    async fn update(&self, input: &UpdateInstructor) -> Outcome<Instructor> {
        self.0.update_instructor(input).await
    }

    async fn delete(&self, key: &DbId) -> Outcome<()> {
        self.0.delete_instructor(*key).await
    }
}

/// University CRUD over the gateway. Creation takes just a name (the
/// backend's query-parameter shape); update ships the whole record.
pub struct UniversityOps(pub Arc<Gateway>);

#[async_trait]
impl EntityOps for UniversityOps {
    type Entity = University;
    type Create = String;
    type Update = University;
    type Key = DbId;

    fn label(&self) -> &'static str {
        "الجامعة"
    }

    fn key(entity: &University) -> DbId {
        entity.id
    }

    async fn list(&self) -> Outcome<Vec<University>> {
        self.0.list_universities().await
    }

    async fn create(&self, input: &String) -> Outcome<University> {
        self.0.add_university(input).await
    }

    async fn update(&self, input: &University) -> Outcome<University> {
        self.0.update_university(input).await
    }

    async fn delete(&self, key: &DbId) -> Outcome<()> {
        self.0.delete_university(*key).await
    }
}

/// College CRUD over the gateway.
pub struct CollegeOps(pub Arc<Gateway>);

#[async_trait]
impl EntityOps for CollegeOps {
    type Entity = College;
    type Create = String;
    type Update = College;
    type Key = DbId;

    fn label(&self) -> &'static str {
        "الكلية"
    }

    fn key(entity: &College) -> DbId {
        entity.id
    }

    async fn list(&self) -> Outcome<Vec<College>> {
        self.0.list_colleges().await
    }

    async fn create(&self, input: &String) -> Outcome<College> {
        self.0.add_college(input).await
    }

    async fn update(&self, input: &College) -> Outcome<College> {
        self.0.update_college(input).await
    }

    async fn delete(&self, key: &DbId) -> Outcome<()> {
        self.0.delete_college(*key).await
    }
}
