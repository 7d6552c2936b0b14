//! `qabul-admin`: command-line administration console.
//!
//! Thin driver over the management containers: each subcommand builds a
//! gateway, runs one container operation, and renders the resulting list
//! page or toast on stdout. All user-facing output is Arabic; log lines
//! stay English.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use validator::Validate;

use qabul_console::container::Management;
use qabul_console::lookups::LookupPanel;
use qabul_console::ops::{
    CollegeOps, DegreeOps, DepartmentOps, EntityOps, InstructorOps, IntakeOps, UniversityOps,
};
use qabul_console::toast::ToastKind;
use qabul_core::lookups::LookupKind;
use qabul_core::models::{
    Attachment, CreateDegree, CreateDepartment, CreateInstructor, CreateIntake,
    CreateRegistrationCard, CreateTrack, GeneralDegree,
};
use qabul_core::table::{EmptyState, PageItem, TableRow, TableState};
use qabul_core::validation::first_message;
use qabul_core::DbId;
use qabul_gateway::{Gateway, Outcome, Session};

/// Environment variable carrying the bearer token of an existing session.
const ENV_API_TOKEN: &str = "QABUL_API_TOKEN";

#[derive(Parser)]
#[command(name = "qabul-admin", about = "Admissions portal administration console")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Manage academic degrees.
    Degrees {
        #[command(subcommand)]
        action: DegreeAction,
    },
    /// Manage departments.
    Departments {
        #[command(subcommand)]
        action: DepartmentAction,
    },
    /// Manage admission intakes.
    Intakes {
        #[command(subcommand)]
        action: IntakeAction,
    },
    /// Manage teaching staff.
    Instructors {
        #[command(subcommand)]
        action: InstructorAction,
    },
    /// Manage universities.
    Universities {
        #[command(subcommand)]
        action: NamedAction,
    },
    /// Manage colleges.
    Colleges {
        #[command(subcommand)]
        action: NamedAction,
    },
    /// Print one lookup reference list.
    Lookup {
        /// Lookup name, e.g. departments, semesters, languages.
        kind: String,
    },
    /// Print the tracks available for a degree.
    Msarat {
        #[arg(long)]
        degree_id: DbId,
    },
    /// Fetch the lookup lists the student registration form depends on.
    RegistrationLookups,
    /// Manage specialization tracks.
    Tracks {
        #[command(subcommand)]
        action: TrackAction,
    },
    /// Manage courses.
    Courses {
        #[command(subcommand)]
        action: CourseAction,
    },
    /// Manage enrolled students.
    Students {
        #[command(subcommand)]
        action: StudentAction,
    },
    /// Review admission requests.
    Cards {
        #[command(subcommand)]
        action: CardAction,
    },
    /// Look up a student by national id.
    Student {
        #[arg(long)]
        national_id: String,
    },
}

#[derive(Subcommand)]
enum CourseAction {
    List {
        #[arg(long)]
        department_id: Option<DbId>,
    },
    Delete {
        id: DbId,
    },
}

#[derive(Subcommand)]
enum StudentAction {
    List,
    Delete {
        #[arg(long)]
        national_id: String,
    },
}

#[derive(Subcommand)]
enum TrackAction {
    List,
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        degree_id: DbId,
    },
    Delete {
        id: DbId,
    },
}

/// Search / sort / page arguments shared by every list subcommand.
#[derive(Args)]
struct ListArgs {
    /// Free-text filter over the visible columns.
    #[arg(long)]
    search: Option<String>,
    /// Column to sort by, e.g. `name` or `id`.
    #[arg(long)]
    sort: Option<String>,
    /// Sort descending instead of ascending.
    #[arg(long, requires = "sort")]
    desc: bool,
    /// 1-based page to show.
    #[arg(long, default_value_t = 1)]
    page: usize,
}

#[derive(Subcommand)]
enum DegreeAction {
    List(ListArgs),
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        department_id: DbId,
        #[arg(long)]
        duration_years: Option<i32>,
        /// Postgraduate degree (defaults to undergraduate).
        #[arg(long)]
        advanced: bool,
        #[arg(long)]
        description: Option<String>,
    },
    Delete {
        id: DbId,
    },
}

#[derive(Subcommand)]
enum DepartmentAction {
    List(ListArgs),
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        program_id: DbId,
        #[arg(long)]
        description: Option<String>,
    },
    Delete {
        id: DbId,
    },
}

#[derive(Subcommand)]
enum IntakeAction {
    List(ListArgs),
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        start_date: NaiveDate,
        #[arg(long)]
        end_date: NaiveDate,
    },
    Delete {
        id: DbId,
    },
}

#[derive(Subcommand)]
enum InstructorAction {
    List(ListArgs),
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        national_id: String,
        #[arg(long)]
        academic_title_id: DbId,
        #[arg(long)]
        department_id: DbId,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
    Delete {
        id: DbId,
    },
}

/// Shared shape for the name-only entities (universities, colleges).
#[derive(Subcommand)]
enum NamedAction {
    List(ListArgs),
    Add {
        name: String,
    },
    Delete {
        id: DbId,
    },
}

#[derive(Subcommand)]
enum CardAction {
    List(ListArgs),
    Submit {
        #[arg(long)]
        national_id: String,
        #[arg(long)]
        student_name: String,
        #[arg(long)]
        request_type: String,
        #[arg(long)]
        degree_id: DbId,
        #[arg(long)]
        department_id: DbId,
        #[arg(long)]
        msar_id: Option<DbId>,
        #[arg(long)]
        semester_id: DbId,
        #[arg(long)]
        language_id: DbId,
        /// Degree image files, at most three.
        #[arg(long = "attach")]
        attachments: Vec<PathBuf>,
    },
    Accept {
        id: DbId,
    },
    Reject {
        id: DbId,
    },
    /// Export the PDF of all cards.
    ExportAll {
        #[arg(long, default_value = "cards.pdf")]
        out: PathBuf,
    },
    /// Export one student's card PDF.
    ExportStudent {
        #[arg(long)]
        national_id: String,
        #[arg(long, default_value = "card.pdf")]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "qabul_admin=debug,qabul_gateway=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let session = match std::env::var(ENV_API_TOKEN) {
        Ok(token) if !token.trim().is_empty() => Arc::new(Session::with_token(token)),
        _ => Arc::new(Session::new()),
    };
    let gateway = Arc::new(Gateway::from_env(session)?);

    match cli.command {
        Command::Degrees { action } => run_degrees(gateway, action).await,
        Command::Departments { action } => run_departments(gateway, action).await,
        Command::Intakes { action } => run_intakes(gateway, action).await,
        Command::Instructors { action } => run_instructors(gateway, action).await,
        Command::Universities { action } => match action {
            NamedAction::List(args) => {
                list_entities(UniversityOps(gateway), &args, |u| {
                    format!("{:>6}  {}", u.id, u.name)
                })
                .await
            }
            NamedAction::Add { name } => {
                create_entity(UniversityOps(gateway), non_blank_name(name)?).await
            }
            NamedAction::Delete { id } => delete_entity(UniversityOps(gateway), id).await,
        },
        Command::Colleges { action } => match action {
            NamedAction::List(args) => {
                list_entities(CollegeOps(gateway), &args, |c| {
                    format!("{:>6}  {}", c.id, c.name)
                })
                .await
            }
            NamedAction::Add { name } => {
                create_entity(CollegeOps(gateway), non_blank_name(name)?).await
            }
            NamedAction::Delete { id } => delete_entity(CollegeOps(gateway), id).await,
        },
        Command::Lookup { kind } => run_lookup(&gateway, &kind).await,
        Command::Msarat { degree_id } => {
            let outcome = gateway.msarat_by_degree(degree_id).await;
            let options = expect_success(outcome)?.unwrap_or_default();
            for option in options {
                println!("{:>6}  {}", option.id, option.name);
            }
            Ok(())
        }
        Command::RegistrationLookups => run_registration_lookups(&gateway).await,
        Command::Tracks { action } => run_tracks(&gateway, action).await,
        Command::Courses { action } => match action {
            CourseAction::List { department_id } => {
                let outcome = gateway.list_courses(department_id).await;
                for course in expect_success(outcome)?.unwrap_or_default() {
                    println!(
                        "{:>6}  {:<10}  {:<30}  {} س",
                        course.id, course.code, course.name, course.credit_hours
                    );
                }
                Ok(())
            }
            CourseAction::Delete { id } => {
                expect_success(gateway.delete_course(id).await)?;
                println!("تم الحذف بنجاح");
                Ok(())
            }
        },
        Command::Students { action } => match action {
            StudentAction::List => {
                let outcome = gateway.list_students().await;
                for student in expect_success(outcome)?.unwrap_or_default() {
                    println!(
                        "{}  {} {}",
                        student.national_id, student.first_name, student.last_name
                    );
                }
                Ok(())
            }
            StudentAction::Delete { national_id } => {
                expect_success(gateway.delete_student(&national_id).await)?;
                println!("تم الحذف بنجاح");
                Ok(())
            }
        },
        Command::Cards { action } => run_cards(gateway, action).await,
        Command::Student { national_id } => {
            let outcome = gateway.get_student(&national_id).await;
            match expect_success(outcome)? {
                Some(student) => {
                    println!(
                        "{}  {} {}",
                        student.national_id, student.first_name, student.last_name
                    );
                    if let Some(email) = &student.email {
                        println!("  {email}");
                    }
                    if let Some(gpa) = student.gpa {
                        println!("  GPA: {gpa:.2}");
                    }
                }
                None => println!("لا يوجد طالب بهذا الرقم القومي"),
            }
            Ok(())
        }
    }
}

async fn run_degrees(gateway: Arc<Gateway>, action: DegreeAction) -> anyhow::Result<()> {
    match action {
        DegreeAction::List(args) => {
            list_entities(DegreeOps(gateway), &args, |d| {
                let years = d
                    .standard_duration_years
                    .map(|y| y.to_string())
                    .unwrap_or_else(|| "-".into());
                format!("{:>6}  {:<30}  {}", d.id, d.name, years)
            })
            .await
        }
        DegreeAction::Add {
            name,
            department_id,
            duration_years,
            advanced,
            description,
        } => {
            let payload = validated(CreateDegree {
                name,
                description,
                department_id: Some(department_id),
                standard_duration_years: duration_years,
                general_degree: if advanced {
                    GeneralDegree::Advanced
                } else {
                    GeneralDegree::Basic
                },
            })?;
            create_entity(DegreeOps(gateway), payload).await
        }
        DegreeAction::Delete { id } => delete_entity(DegreeOps(gateway), id).await,
    }
}

async fn run_departments(gateway: Arc<Gateway>, action: DepartmentAction) -> anyhow::Result<()> {
    match action {
        DepartmentAction::List(args) => {
            list_entities(DepartmentOps(gateway), &args, |d| {
                let program = d.program_name.as_deref().unwrap_or("-");
                format!("{:>6}  {:<30}  {}", d.id, d.name, program)
            })
            .await
        }
        DepartmentAction::Add {
            name,
            program_id,
            description,
        } => {
            let payload = validated(CreateDepartment {
                name,
                description,
                program_id: Some(program_id),
            })?;
            create_entity(DepartmentOps(gateway), payload).await
        }
        DepartmentAction::Delete { id } => delete_entity(DepartmentOps(gateway), id).await,
    }
}

async fn run_intakes(gateway: Arc<Gateway>, action: IntakeAction) -> anyhow::Result<()> {
    match action {
        IntakeAction::List(args) => {
            list_entities(IntakeOps(gateway), &args, |i| {
                format!(
                    "{:>6}  {:<30}  {} .. {}",
                    i.id, i.name, i.start_date, i.end_date
                )
            })
            .await
        }
        IntakeAction::Add {
            name,
            start_date,
            end_date,
        } => {
            let payload = validated(CreateIntake {
                name,
                start_date,
                end_date,
            })?;
            create_entity(IntakeOps(gateway), payload).await
        }
        IntakeAction::Delete { id } => delete_entity(IntakeOps(gateway), id).await,
    }
}

async fn run_instructors(gateway: Arc<Gateway>, action: InstructorAction) -> anyhow::Result<()> {
    match action {
        InstructorAction::List(args) => {
            list_entities(InstructorOps(gateway), &args, |i| {
                format!(
                    "{:>6}  {:<30}  {}  {}",
                    i.id,
                    i.name,
                    i.national_id,
                    i.email.as_deref().unwrap_or("-")
                )
            })
            .await
        }
        InstructorAction::Add {
            name,
            national_id,
            academic_title_id,
            department_id,
            phone,
            email,
        } => {
            let payload = validated(CreateInstructor {
                name,
                national_id,
                academic_title_id: Some(academic_title_id),
                department_id: Some(department_id),
                phone,
                email,
            })?;
            create_entity(InstructorOps(gateway), payload).await
        }
        InstructorAction::Delete { id } => delete_entity(InstructorOps(gateway), id).await,
    }
}

async fn run_lookup(gateway: &Gateway, kind: &str) -> anyhow::Result<()> {
    let kind = parse_lookup(kind)
        .with_context(|| format!("unknown lookup `{kind}`"))?;
    let outcome = gateway.lookup(kind).await;
    let options = expect_success(outcome)?.unwrap_or_default();
    if options.is_empty() {
        println!("لا توجد بيانات بعد");
    }
    for option in options {
        println!("{:>6}  {}", option.id, option.name);
    }
    Ok(())
}

/// The lookups backing the student registration form, fetched jointly.
async fn run_registration_lookups(gateway: &Gateway) -> anyhow::Result<()> {
    let kinds = [
        LookupKind::Universities,
        LookupKind::Colleges,
        LookupKind::Departments,
        LookupKind::Degrees,
        LookupKind::Grades,
        LookupKind::Qualifications,
    ];
    let panel = LookupPanel::load(gateway, &kinds).await;
    for failure in &panel.failures {
        eprintln!("{}: {}", failure.kind.label(), failure.message);
    }
    for kind in kinds {
        let Some(options) = panel.options(kind) else {
            continue;
        };
        println!("{} ({})", kind.label(), options.len());
        for option in options {
            println!("{:>6}  {}", option.id, option.name);
        }
    }
    if !panel.is_complete() {
        bail!("تعذر تحميل بعض القوائم");
    }
    Ok(())
}

async fn run_tracks(gateway: &Gateway, action: TrackAction) -> anyhow::Result<()> {
    match action {
        TrackAction::List => {
            let outcome = gateway.list_tracks().await;
            for track in expect_success(outcome)?.unwrap_or_default() {
                let degree = track
                    .degree
                    .map(|d| d.name)
                    .unwrap_or_else(|| track.degree_id.to_string());
                println!("{:>6}  {:<30}  {}", track.id, track.name, degree);
            }
            Ok(())
        }
        TrackAction::Add { name, degree_id } => {
            let payload = validated(CreateTrack {
                name,
                degree_id: Some(degree_id),
            })?;
            expect_success(gateway.add_track(&payload).await)?;
            println!("تمت الإضافة بنجاح");
            Ok(())
        }
        TrackAction::Delete { id } => {
            expect_success(gateway.delete_track(id).await)?;
            println!("تم الحذف بنجاح");
            Ok(())
        }
    }
}

async fn run_cards(gateway: Arc<Gateway>, action: CardAction) -> anyhow::Result<()> {
    match action {
        CardAction::List(args) => {
            let outcome = gateway.list_cards().await;
            let cards = expect_success(outcome)?.unwrap_or_default();
            print_page(&cards, &args, |c| {
                format!(
                    "{:>6}  {:<30}  {}  {:?}",
                    c.id, c.student_name, c.national_id, c.status
                )
            });
            Ok(())
        }
        CardAction::Submit {
            national_id,
            student_name,
            request_type,
            degree_id,
            department_id,
            msar_id,
            semester_id,
            language_id,
            attachments,
        } => {
            let payload = validated(CreateRegistrationCard {
                national_id,
                student_name,
                request_type,
                degree_id: Some(degree_id),
                department_id: Some(department_id),
                msar_id,
                semester_id: Some(semester_id),
                language_id: Some(language_id),
            })?;
            if attachments.len() > 3 {
                bail!("يسمح بثلاثة مرفقات كحد أقصى");
            }
            let attachments = read_attachments(&attachments)?;
            let outcome = gateway.add_card(&payload, attachments).await;
            expect_success(outcome)?;
            println!("تمت الإضافة بنجاح");
            Ok(())
        }
        CardAction::Accept { id } => {
            expect_success(gateway.accept_card(id).await)?;
            println!("تم قبول الطلب");
            Ok(())
        }
        CardAction::Reject { id } => {
            expect_success(gateway.reject_card(id).await)?;
            println!("تم رفض الطلب");
            Ok(())
        }
        CardAction::ExportAll { out } => {
            let bytes = expect_success(gateway.all_cards_pdf().await)?.unwrap_or_default();
            write_pdf(&out, &bytes)
        }
        CardAction::ExportStudent { national_id, out } => {
            let bytes =
                expect_success(gateway.student_card_pdf(&national_id).await)?.unwrap_or_default();
            write_pdf(&out, &bytes)
        }
    }
}

// ---------------------------------------------------------------------------
// Container drivers
// ---------------------------------------------------------------------------

/// Load a collection into a container and print the requested page.
async fn list_entities<O>(
    ops: O,
    args: &ListArgs,
    describe: impl Fn(&O::Entity) -> String,
) -> anyhow::Result<()>
where
    O: EntityOps,
    O::Entity: TableRow,
{
    let mut mgmt = Management::new(ops);
    mgmt.load().await;
    bail_on_error_toast(&mgmt)?;

    print_page(&mgmt.items, args, describe);
    Ok(())
}

/// Apply the list flags to a fresh table and print the resulting page.
fn print_page<R: TableRow>(rows: &[R], args: &ListArgs, describe: impl Fn(&R) -> String) {
    let mut table = TableState::new();
    if let Some(query) = &args.search {
        table.set_query(query.clone());
    }
    if let Some(column) = &args.sort {
        table.toggle_sort(column);
        if args.desc {
            table.toggle_sort(column);
        }
    }
    table.set_page(args.page);

    let view = table.view(rows);
    match view.empty {
        Some(EmptyState::SourceEmpty) => println!("لا توجد بيانات بعد"),
        Some(EmptyState::NoMatches) => println!("لا توجد نتائج مطابقة للبحث"),
        None => {
            for row in &view.rows {
                println!("{}", describe(row));
            }
            println!();
            println!(
                "صفحة {} من {} ({} صف)  [{}]",
                view.page,
                view.total_pages,
                view.total_rows,
                render_strip(&view.window, view.page)
            );
        }
    }
}

/// Submit a create through a container and report the toast.
async fn create_entity<O: EntityOps>(ops: O, input: O::Create) -> anyhow::Result<()> {
    let mut mgmt = Management::new(ops);
    mgmt.open_add();
    mgmt.submit_create(input).await;
    if let Some(message) = mgmt.form_error.take() {
        bail!(message);
    }
    print_last_toast(&mgmt);
    Ok(())
}

/// Load, locate the row, confirm its deletion through the dialog.
async fn delete_entity<O>(ops: O, id: DbId) -> anyhow::Result<()>
where
    O: EntityOps<Key = DbId>,
{
    let mut mgmt = Management::new(ops);
    mgmt.load().await;
    bail_on_error_toast(&mgmt)?;

    let Some(row) = mgmt.items.iter().find(|e| O::key(e) == id).cloned() else {
        bail!("لا يوجد صف بالمعرف {id}");
    };
    mgmt.open_delete(row);
    mgmt.confirm_delete().await;
    if mgmt.dialog.is_open() {
        let message = mgmt
            .dialog
            .error()
            .unwrap_or("حدث خطأ أثناء الحذف")
            .to_string();
        bail!(message);
    }
    print_last_toast(&mgmt);
    Ok(())
}

fn bail_on_error_toast<O: EntityOps>(mgmt: &Management<O>) -> anyhow::Result<()> {
    if let Some(toast) = mgmt.toasts.last() {
        if toast.kind == ToastKind::Error {
            bail!(toast.message.clone());
        }
    }
    Ok(())
}

fn print_last_toast<O: EntityOps>(mgmt: &Management<O>) {
    if let Some(toast) = mgmt.toasts.last() {
        println!("{}", toast.message);
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn non_blank_name(name: String) -> anyhow::Result<String> {
    if name.trim().is_empty() {
        bail!("الاسم مطلوب");
    }
    Ok(name)
}

/// Validate a payload; the first violated field's message becomes the error.
fn validated<T: Validate>(payload: T) -> anyhow::Result<T> {
    if let Err(errors) = payload.validate() {
        bail!(first_message(&errors).unwrap_or_else(|| "بيانات غير صالحة".into()));
    }
    Ok(payload)
}

fn expect_success<T>(outcome: Outcome<T>) -> anyhow::Result<Option<T>> {
    if !outcome.success {
        bail!(outcome
            .message
            .unwrap_or_else(|| "حدث خطأ غير متوقع".into()));
    }
    Ok(outcome.data)
}

fn parse_lookup(name: &str) -> Option<LookupKind> {
    Some(match name.to_lowercase().as_str() {
        "universities" => LookupKind::Universities,
        "colleges" => LookupKind::Colleges,
        "departments" => LookupKind::Departments,
        "degrees" => LookupKind::Degrees,
        "majors" => LookupKind::Majors,
        "grades" => LookupKind::Grades,
        "msarat" | "masars" => LookupKind::Msarat,
        "semesters" => LookupKind::Semesters,
        "languages" => LookupKind::Languages,
        "programs" => LookupKind::Programs,
        "intakes" => LookupKind::Intakes,
        "statuses" => LookupKind::Statuses,
        "nationalities" => LookupKind::Nationalities,
        "military-services" | "militaryservices" => LookupKind::MilitaryServices,
        "qualifications" => LookupKind::Qualifications,
        _ => return None,
    })
}

fn read_attachments(paths: &[PathBuf]) -> anyhow::Result<Vec<Attachment>> {
    paths
        .iter()
        .enumerate()
        .map(|(i, path)| {
            let bytes = std::fs::read(path)
                .with_context(|| format!("reading attachment {}", path.display()))?;
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| format!("attachment-{i}"));
            let mime = match path.extension().and_then(|e| e.to_str()) {
                Some("png") => "image/png",
                Some("jpg") | Some("jpeg") => "image/jpeg",
                Some("pdf") => "application/pdf",
                _ => "application/octet-stream",
            };
            Ok(Attachment {
                field_name: format!("DegreeImage{}", i + 1),
                file_name,
                mime: mime.to_string(),
                bytes,
            })
        })
        .collect()
}

fn render_strip(window: &[PageItem], current: usize) -> String {
    window
        .iter()
        .map(|item| match item {
            PageItem::Page(p) if *p == current => format!("({p})"),
            PageItem::Page(p) => p.to_string(),
            PageItem::Ellipsis => "…".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn write_pdf(path: &PathBuf, bytes: &[u8]) -> anyhow::Result<()> {
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    println!("تم التصدير إلى {}", path.display());
    Ok(())
}
