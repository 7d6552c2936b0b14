//! Management container behavior against a scripted operations fake.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use assert_matches::assert_matches;
use async_trait::async_trait;
use qabul_console::container::{FormMode, Management, Reconcile};
use qabul_console::ops::EntityOps;
use qabul_console::toast::ToastKind;
use qabul_core::models::{CreateDegree, Degree, GeneralDegree, UpdateDegree};
use qabul_core::DbId;
use qabul_gateway::Outcome;

/// Scripted [`EntityOps`]: each call pops the next outcome off its queue
/// and counts the call. Tests fail loudly if a call was not scripted.
#[derive(Default)]
struct MockOps {
    lists: Mutex<VecDeque<Outcome<Vec<Degree>>>>,
    creates: Mutex<VecDeque<Outcome<Degree>>>,
    updates: Mutex<VecDeque<Outcome<Degree>>>,
    deletes: Mutex<VecDeque<Outcome<()>>>,
    list_calls: AtomicUsize,
    last_create: Mutex<Option<CreateDegree>>,
}

impl MockOps {
    fn script_list(self, outcome: Outcome<Vec<Degree>>) -> Self {
        self.lists.lock().unwrap().push_back(outcome);
        self
    }

    fn script_create(self, outcome: Outcome<Degree>) -> Self {
        self.creates.lock().unwrap().push_back(outcome);
        self
    }

    fn script_update(self, outcome: Outcome<Degree>) -> Self {
        self.updates.lock().unwrap().push_back(outcome);
        self
    }

    fn script_delete(self, outcome: Outcome<()>) -> Self {
        self.deletes.lock().unwrap().push_back(outcome);
        self
    }
}

fn pop<T>(queue: &Mutex<VecDeque<Outcome<T>>>, name: &str) -> Outcome<T> {
    queue
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or_else(|| panic!("unscripted {name} call"))
}

#[async_trait]
impl EntityOps for MockOps {
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
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        pop(&self.lists, "list")
    }

    async fn create(&self, input: &CreateDegree) -> Outcome<Degree> {
        *self.last_create.lock().unwrap() = Some(input.clone());
        pop(&self.creates, "create")
    }

    async fn update(&self, _input: &UpdateDegree) -> Outcome<Degree> {
        pop(&self.updates, "update")
    }

    async fn delete(&self, _key: &DbId) -> Outcome<()> {
        pop(&self.deletes, "delete")
    }
}

fn degree(id: DbId, name: &str) -> Degree {
    Degree {
        id,
        name: name.to_string(),
        description: None,
        department_id: 3,
        standard_duration_years: Some(2),
        general_degree: GeneralDegree::Basic,
    }
}

fn create_payload(name: &str) -> CreateDegree {
    CreateDegree {
        name: name.to_string(),
        description: None,
        department_id: Some(3),
        standard_duration_years: Some(2),
        general_degree: GeneralDegree::Basic,
    }
}

// --- Create flow ---

#[tokio::test]
async fn accepted_create_patches_list_and_closes_form() {
    let ops = MockOps::default()
        .script_list(Outcome::success_with(vec![]))
        .script_create(Outcome::success_with(degree(101, "Master of Science")));
    let mut mgmt = Management::new(ops);

    mgmt.load().await;
    assert!(mgmt.items.is_empty());

    mgmt.open_add();
    mgmt.submit_create(create_payload("Master of Science")).await;

    assert_eq!(mgmt.items.len(), 1);
    assert_eq!(mgmt.items[0].id, 101);
    let sent = mgmt.ops().last_create.lock().unwrap().clone().unwrap();
    assert_eq!(sent.name, "Master of Science");
    assert_eq!(sent.department_id, Some(3));
    assert!(mgmt.form.is_none(), "form must close on success");
    assert!(mgmt.form_error.is_none());
    let toast = mgmt.toasts.last().unwrap();
    assert_eq!(toast.kind, ToastKind::Success);
}

#[tokio::test]
async fn rejected_create_keeps_form_open_with_inline_error() {
    let ops = MockOps::default()
        .script_list(Outcome::success_with(vec![]))
        .script_create(Outcome::failure("الاسم مستخدم من قبل"));
    let mut mgmt = Management::new(ops);

    mgmt.load().await;
    mgmt.open_add();
    mgmt.submit_create(create_payload("مكرر")).await;

    assert_matches!(mgmt.form, Some(FormMode::Add));
    assert_eq!(mgmt.form_error.as_deref(), Some("الاسم مستخدم من قبل"));
    assert!(mgmt.items.is_empty());
    assert_eq!(mgmt.toasts.last().unwrap().kind, ToastKind::Error);
}

#[tokio::test]
async fn create_without_entity_body_reloads_the_list() {
    let ops = MockOps::default()
        .script_list(Outcome::success_with(vec![]))
        .script_create(Outcome::success_empty())
        .script_list(Outcome::success_with(vec![degree(8, "دبلوم")]));
    let mut mgmt = Management::new(ops);

    mgmt.load().await;
    mgmt.open_add();
    mgmt.submit_create(create_payload("دبلوم")).await;

    assert_eq!(mgmt.ops().list_calls.load(Ordering::SeqCst), 2);
    assert_eq!(mgmt.items.len(), 1);
    assert!(mgmt.form.is_none());
}

// --- Update flow ---

#[tokio::test]
async fn accepted_update_patches_row_in_place() {
    let ops = MockOps::default()
        .script_list(Outcome::success_with(vec![degree(5, "بكالوريوس"), degree(6, "ماجستير")]))
        .script_update(Outcome::success_with(degree(5, "بكالوريوس العلوم")));
    let mut mgmt = Management::new(ops);

    mgmt.load().await;
    let row = mgmt.items[0].clone();
    mgmt.open_edit(row);
    mgmt.submit_update(UpdateDegree {
        id: 5,
        name: "بكالوريوس العلوم".into(),
        description: None,
        department_id: Some(3),
        standard_duration_years: Some(4),
        general_degree: GeneralDegree::Basic,
    })
    .await;

    assert_eq!(mgmt.items.len(), 2);
    assert_eq!(mgmt.items[0].name, "بكالوريوس العلوم");
    assert_eq!(mgmt.items[1].id, 6);
    assert!(mgmt.form.is_none());
}

// --- Delete flow ---

#[tokio::test]
async fn accepted_delete_removes_row_and_closes_dialog() {
    let ops = MockOps::default()
        .script_list(Outcome::success_with(vec![degree(7, "دكتوراه")]))
        .script_delete(Outcome::success_empty());
    let mut mgmt = Management::new(ops);

    mgmt.load().await;
    let row = mgmt.items[0].clone();
    mgmt.open_delete(row);
    mgmt.confirm_delete().await;

    assert!(mgmt.items.is_empty());
    assert!(!mgmt.dialog.is_open());
    assert_eq!(mgmt.toasts.last().unwrap().kind, ToastKind::Success);
}

#[tokio::test]
async fn rejected_delete_keeps_row_and_dialog_open() {
    let ops = MockOps::default()
        .script_list(Outcome::success_with(vec![degree(7, "دكتوراه")]))
        .script_delete(Outcome::failure("الدرجة مرتبطة بطلاب مسجلين"));
    let mut mgmt = Management::new(ops);

    mgmt.load().await;
    let row = mgmt.items[0].clone();
    mgmt.open_delete(row);
    mgmt.confirm_delete().await;

    assert_eq!(mgmt.items.len(), 1, "rejected delete must not remove the row");
    assert!(mgmt.dialog.is_open(), "dialog stays open on failure");
    assert_eq!(mgmt.dialog.error(), Some("الدرجة مرتبطة بطلاب مسجلين"));
    assert_eq!(
        mgmt.toasts.last().unwrap().message,
        "الدرجة مرتبطة بطلاب مسجلين"
    );
}

// --- Stale completions ---

#[tokio::test]
async fn stale_load_completion_is_discarded() {
    let ops = MockOps::default();
    let mut mgmt: Management<MockOps> = Management::new(ops);

    let first = mgmt.begin_load();
    let second = mgmt.begin_load();

    mgmt.finish_load(first, Outcome::success_with(vec![degree(1, "قديم")]));
    assert!(mgmt.items.is_empty(), "superseded load must be discarded");

    mgmt.finish_load(second, Outcome::success_with(vec![degree(2, "جديد")]));
    assert_eq!(mgmt.items.len(), 1);
    assert_eq!(mgmt.items[0].id, 2);
}

#[tokio::test]
async fn stale_create_completion_is_discarded() {
    let ops = MockOps::default();
    let mut mgmt: Management<MockOps> = Management::new(ops);

    let stale = mgmt.begin_load();
    mgmt.begin_load();

    let outcome = Outcome::success_with(degree(9, "متأخر"));
    assert_eq!(mgmt.finish_create(stale, outcome), Reconcile::Stale);
    assert!(mgmt.items.is_empty());
    assert!(mgmt.toasts.last().is_none(), "stale completion must be silent");
}

// --- Load failures ---

#[tokio::test]
async fn failed_load_surfaces_backend_message() {
    let ops = MockOps::default().script_list(Outcome::failure("انتهت صلاحية الجلسة"));
    let mut mgmt = Management::new(ops);

    mgmt.load().await;

    assert!(mgmt.items.is_empty());
    let toast = mgmt.toasts.last().unwrap();
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.message, "انتهت صلاحية الجلسة");
}

// --- List state ---

#[tokio::test]
async fn search_change_resets_table_to_first_page() {
    let rows: Vec<Degree> = (1..=25).map(|i| degree(i, &format!("درجة {i}"))).collect();
    let ops = MockOps::default().script_list(Outcome::success_with(rows));
    let mut mgmt = Management::new(ops);

    mgmt.load().await;
    mgmt.table.set_page(3);
    assert_eq!(mgmt.table.view(&mgmt.items).page, 3);

    mgmt.set_search("درجة 1");
    assert_eq!(mgmt.table.view(&mgmt.items).page, 1);
}
