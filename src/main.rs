//! Warden CLI - hostel administration toolkit
//!
//! Seeds an in-memory store from the hostel profile and exposes inspection
//! and demonstration commands over it. All validation (room capacity,
//! building/gender matching) happens here, before the store is invoked;
//! the store itself stays tolerant.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;

use warden::cli::{Cli, Commands};
use warden::domain::policies::validate_allocation;
use warden::domain::ports::{StoreEvent, StoreEventSink};
use warden::domain::services::{complaint_summary, fee_summary, occupancy_by_building};
use warden::domain::value_objects::{
    ApplicationStatus, ApplicationType, Building, ComplaintCategory, FeeType, Gender,
    PaymentMethod, PaymentStatus,
};
use warden::infrastructure::GeminiClient;
use warden::{
    seed, ApplicationDraft, Assistant, ComplaintDraft, HostelConfig, PaymentDraft, StudentDraft,
    StudentPatch,
};

/// Students seeded for the inspection commands
const DEMO_STUDENT_COUNT: u32 = 120;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Stats { month } => cmd_stats(&config, &month, cli.json),
        Commands::Students {
            building,
            unallocated,
        } => cmd_students(&config, building.map(Building::from), unallocated, cli.json),
        Commands::Rooms { building, vacant } => {
            cmd_rooms(&config, building.map(Building::from), vacant, cli.json)
        }
        Commands::Demo => cmd_demo(&config, cli.json),
        Commands::Ask { question } => cmd_ask(&config, &question, cli.json),
    }
}

/// Resolve the profile: explicit flag, then the user-level default path,
/// then built-in defaults
fn load_config(path: Option<&Path>) -> Result<HostelConfig> {
    match path {
        Some(path) => Ok(HostelConfig::load(path)?),
        None => match HostelConfig::default_path() {
            Some(path) => Ok(HostelConfig::load(&path)?),
            None => Ok(HostelConfig::default()),
        },
    }
}

fn cmd_stats(config: &HostelConfig, month: &str, json: bool) -> Result<()> {
    let store = seed::seed_store(config, DEMO_STUDENT_COUNT);

    let occupancy = occupancy_by_building(store.rooms());
    let fees = fee_summary(store.payments(), FeeType::Mess, month);
    let complaints = complaint_summary(store.complaints());

    if json {
        let output = serde_json::json!({
            "event": "stats",
            "institution": config.institution.name,
            "occupancy": occupancy,
            "fees": fees,
            "complaints": complaints,
        });
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    if std::io::stdout().is_terminal() {
        println!("📊 Warden Stats");
    } else {
        println!("Warden Stats");
    }
    println!("{}", config.institution.name);
    println!();

    for summary in &occupancy {
        println!(
            "{}: {} rooms, {}/{} beds ({}%), {} full, {} free",
            summary.building,
            summary.rooms,
            summary.occupied,
            summary.capacity,
            summary.percent(),
            summary.rooms_full,
            summary.beds_free
        );
    }

    println!();
    println!(
        "Mess fees {}: {} paid, {} pending ({} awaiting verification), Rs {} collected",
        fees.month, fees.paid, fees.pending, fees.awaiting_verification, fees.collected
    );

    println!();
    println!(
        "Complaints: {} open, {} resolved",
        complaints.open, complaints.resolved
    );
    for (category, count) in &complaints.by_category {
        println!("  {category}: {count}");
    }

    Ok(())
}

fn cmd_students(
    config: &HostelConfig,
    building: Option<Building>,
    unallocated: bool,
    json: bool,
) -> Result<()> {
    let store = seed::seed_store(config, DEMO_STUDENT_COUNT);

    let mut shown = 0usize;
    for student in store.students() {
        if unallocated && student.room_number.is_some() {
            continue;
        }
        if let Some(building) = building {
            let in_building = student
                .room_number
                .as_deref()
                .and_then(|number| store.room(number))
                .is_some_and(|room| room.building == building);
            if !in_building {
                continue;
            }
        }
        shown += 1;

        if json {
            println!("{}", serde_json::to_string(student)?);
        } else {
            println!(
                "#{:<4} {:<22} {:<6} {:<4} {}",
                student.id,
                student.name,
                student.branch,
                student.year,
                student.room_number.as_deref().unwrap_or("-")
            );
        }
    }

    if !json {
        println!();
        println!("{shown} students");
    }
    Ok(())
}

fn cmd_rooms(
    config: &HostelConfig,
    building: Option<Building>,
    vacant: bool,
    json: bool,
) -> Result<()> {
    let store = seed::seed_store(config, DEMO_STUDENT_COUNT);

    let mut shown = 0usize;
    for room in store.rooms() {
        if vacant && room.is_full() {
            continue;
        }
        if building.is_some_and(|b| room.building != b) {
            continue;
        }
        shown += 1;

        if json {
            println!("{}", serde_json::to_string(room)?);
        } else {
            println!(
                "{:<7} {:<13} {}/{} {:>7}",
                room.room_number,
                room.building.to_string(),
                room.occupied,
                room.capacity,
                room.room_type.to_string()
            );
        }
    }

    if !json {
        println!();
        println!("{shown} rooms");
    }
    Ok(())
}

/// Scripted admin session exercising the whole operation contract
fn cmd_demo(config: &HostelConfig, json: bool) -> Result<()> {
    let sink: Arc<dyn StoreEventSink> = if json {
        Arc::new(JsonEventSink)
    } else {
        Arc::new(ConsoleEventSink)
    };
    let mut store = seed::seed_store(config, 12).with_events(sink);

    if !json {
        println!("Warden Demo - one admin day against a fresh store");
        println!(
            "Seeded {} students across {} rooms",
            store.students().len(),
            store.rooms().len()
        );
        println!();
    }

    // Admissions desk: a new resident arrives
    let student_id = store.add_student(StudentDraft {
        name: "Kabir Joshi".to_string(),
        gender: Gender::Male,
        branch: "ME".to_string(),
        year: "1st".to_string(),
        blood_group: "O-".to_string(),
        caste: "General".to_string(),
        contact: "9012345678".to_string(),
        email: "kabir.joshi@gcoen.ac.in".to_string(),
        permanent_address: "45, Manish Nagar, Nagpur".to_string(),
        temporary_address: "Unallocated".to_string(),
        parent_name: "Mr. Joshi".to_string(),
        parent_contact: "8012345678".to_string(),
        room_number: None,
        admission_date: chrono::Local::now().date_naive(),
        profile_photo: None,
    });

    // House rules are checked before the store is touched
    let student = store.student(student_id).expect("just registered").clone();
    if let Some(girls_room) = store
        .rooms()
        .iter()
        .find(|r| r.building == Building::Girls)
        .map(|r| r.room_number.clone())
    {
        if let Err(violation) = validate_allocation(&student, store.rooms(), &girls_room) {
            if !json {
                println!("  x allocation refused: {violation}");
            }
        }
    }

    for _ in 0..2 {
        // First pass allocates, second pass moves to the next vacant room
        let current = store
            .student(student_id)
            .and_then(|s| s.room_number.clone());
        let target = store
            .rooms()
            .iter()
            .find(|r| {
                r.building == Building::Boys
                    && !r.is_full()
                    && Some(r.room_number.as_str()) != current.as_deref()
            })
            .map(|r| r.room_number.clone());
        if let Some(room_number) = target {
            let student = store.student(student_id).expect("registered").clone();
            match validate_allocation(&student, store.rooms(), &room_number) {
                Ok(()) => store.allocate_room(student_id, &room_number),
                Err(violation) => {
                    if !json {
                        println!("  x allocation refused: {violation}");
                    }
                }
            }
        }
    }

    // Fees desk: an admin-confirmed cash payment...
    store.record_payment(PaymentDraft {
        student_id,
        amount: config.fees.mess_monthly,
        fee_type: FeeType::Mess,
        month: "2024-07".to_string(),
        status: PaymentStatus::Paid,
        payment_method: Some(PaymentMethod::Cash),
        date: Some(chrono::Local::now().date_naive()),
        transaction_id: None,
        payer_name: None,
        proof_url: None,
    })?;

    // ...a self-reported online claim that gets verified...
    let claim = store.record_payment(PaymentDraft {
        student_id,
        amount: config.fees.mess_monthly,
        fee_type: FeeType::Mess,
        month: "2024-08".to_string(),
        status: PaymentStatus::Pending,
        payment_method: Some(PaymentMethod::Online),
        date: None,
        transaction_id: Some("TXN778899".to_string()),
        payer_name: Some("Kabir Joshi".to_string()),
        proof_url: None,
    })?;

    // ...a claim reusing that transaction id, refused by the store...
    let duplicate = store.record_payment(PaymentDraft {
        student_id: 2,
        amount: config.fees.mess_monthly,
        fee_type: FeeType::Mess,
        month: "2024-08".to_string(),
        status: PaymentStatus::Pending,
        payment_method: Some(PaymentMethod::Online),
        date: None,
        transaction_id: Some("TXN778899".to_string()),
        payer_name: None,
        proof_url: None,
    });
    if let Err(err) = duplicate {
        if !json {
            println!("  x payment refused: {err}");
        }
    }
    store.verify_payment(claim);

    // ...and an unreadable proof, rejected with a reason
    let rejected = store.record_payment(PaymentDraft {
        student_id: 3,
        amount: config.fees.mess_monthly,
        fee_type: FeeType::Mess,
        month: "2024-08".to_string(),
        status: PaymentStatus::Pending,
        payment_method: Some(PaymentMethod::Online),
        date: None,
        transaction_id: None,
        payer_name: None,
        proof_url: Some("receipt.jpg".to_string()),
    })?;
    store.reject_payment(rejected, "Proof unreadable, please re-upload");

    // Complaints register
    let complaint = store.add_complaint(ComplaintDraft {
        student_id,
        category: ComplaintCategory::Maintenance,
        subcategory: "Electrical".to_string(),
        description: "Desk lamp socket sparking".to_string(),
    });
    store.resolve_complaint(complaint);

    // Applications: a profile update approved (merges into the record)...
    let update = store.submit_application(ApplicationDraft {
        student_id,
        kind: ApplicationType::ProfileUpdate,
        title: "Update Phone Number".to_string(),
        description: "New SIM after moving in.".to_string(),
        data: Some(StudentPatch {
            contact: Some("9998887770".to_string()),
            ..Default::default()
        }),
        proof_url: None,
    });
    store.update_application_status(update, ApplicationStatus::Approved, None);

    // ...and a leave request rejected with a reason
    let leave = store.submit_application(ApplicationDraft {
        student_id,
        kind: ApplicationType::Leave,
        title: "Weekend Leave".to_string(),
        description: "Family function at home.".to_string(),
        data: None,
        proof_url: None,
    });
    store.update_application_status(leave, ApplicationStatus::Rejected, Some("Exceeds leave quota"));

    // Checkout: deleting the student releases the room
    store.delete_student(student_id);

    if !json {
        println!();
        for summary in occupancy_by_building(store.rooms()) {
            println!(
                "{}: {}/{} beds occupied",
                summary.building, summary.occupied, summary.capacity
            );
        }
    }

    Ok(())
}

fn cmd_ask(config: &HostelConfig, question: &str, json: bool) -> Result<()> {
    let store = seed::seed_store(config, DEMO_STUDENT_COUNT);

    let reply = match GeminiClient::new(config.assistant.model.as_str()) {
        Ok(client) => Assistant::new(config, &client).ask(&store, question),
        // Same recovery the assistant applies: the chat surface never dies
        Err(err) => format!(
            "Sorry, I'm having trouble reaching the assistant service right now ({err}). Please try again later."
        ),
    };

    if json {
        let output = serde_json::json!({
            "event": "ask",
            "question": question,
            "reply": reply,
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{reply}");
    }
    Ok(())
}

/// Narrates store events as indented console lines
struct ConsoleEventSink;

impl StoreEventSink for ConsoleEventSink {
    fn on_event(&self, event: StoreEvent) {
        match event {
            StoreEvent::StudentRegistered { id, name } => {
                println!("  + registered student #{id} ({name})");
            }
            StoreEvent::StudentRemoved { id, released_room } => match released_room {
                Some(room) => println!("  - removed student #{id}, released {room}"),
                None => println!("  - removed student #{id}"),
            },
            StoreEvent::RoomAllocated {
                student_id,
                room_number,
                released,
            } => match released {
                Some(previous) => {
                    println!("  ~ moved student #{student_id} from {previous} to {room_number}");
                }
                None => println!("  ~ allocated {room_number} to student #{student_id}"),
            },
            StoreEvent::PaymentRecorded {
                id,
                student_id,
                updated,
            } => {
                let verb = if updated { "updated" } else { "recorded" };
                println!("  $ payment #{id} {verb} for student #{student_id}");
            }
            StoreEvent::PaymentVerified { id } => println!("  $ payment #{id} verified"),
            StoreEvent::PaymentRejected { id, reason } => {
                println!("  $ payment #{id} rejected: {reason}");
            }
            StoreEvent::ComplaintFiled { id, category } => {
                println!("  ! complaint #{id} filed ({category})");
            }
            StoreEvent::ComplaintResolved { id } => println!("  ! complaint #{id} resolved"),
            StoreEvent::ApplicationSubmitted { id, kind } => {
                println!("  * application #{id} submitted ({kind})");
            }
            StoreEvent::ApplicationDecided {
                id,
                status,
                profile_updated,
            } => {
                if profile_updated {
                    println!("  * application #{id}: {status}, profile updated");
                } else {
                    println!("  * application #{id}: {status}");
                }
            }
        }
    }
}

/// Streams store events as NDJSON for machine output
struct JsonEventSink;

impl StoreEventSink for JsonEventSink {
    fn on_event(&self, event: StoreEvent) {
        if let Ok(line) = serde_json::to_string(&event) {
            println!("{line}");
        }
    }
}
