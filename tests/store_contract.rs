//! Contract tests for the hostel store's operation surface.
//!
//! Each test pins one observable guarantee: occupancy tracking across
//! allocation/deletion, payment dedup by billing tuple, the verification
//! workflow, complaint and application lifecycles, and the profile-update
//! merge on approval.

use chrono::NaiveDate;

use warden::domain::ports::FixedClock;
use warden::domain::value_objects::{
    ApplicationStatus, ApplicationType, Building, ComplaintCategory, ComplaintStatus, FeeType,
    Gender, PaymentMethod, PaymentStatus, RoomType,
};
use warden::{
    ApplicationDraft, ComplaintDraft, HostelStore, PaymentDraft, Room, StudentDraft, StudentPatch,
};

fn student_draft(name: &str, gender: Gender, room: Option<&str>) -> StudentDraft {
    StudentDraft {
        name: name.to_string(),
        gender,
        branch: "CSE".to_string(),
        year: "2nd".to_string(),
        blood_group: "O+".to_string(),
        caste: "General".to_string(),
        contact: "9123456780".to_string(),
        email: "someone@gcoen.ac.in".to_string(),
        permanent_address: "Sadar, Nagpur".to_string(),
        temporary_address: "Unallocated".to_string(),
        parent_name: "Mr. Kumar".to_string(),
        parent_contact: "8123456780".to_string(),
        room_number: room.map(String::from),
        admission_date: NaiveDate::from_ymd_opt(2024, 6, 12).unwrap(),
        profile_photo: None,
    }
}

fn mess_payment(student_id: u32, month: &str, amount: u32, status: PaymentStatus) -> PaymentDraft {
    PaymentDraft {
        student_id,
        amount,
        fee_type: FeeType::Mess,
        month: month.to_string(),
        status,
        payment_method: Some(PaymentMethod::Online),
        date: None,
        transaction_id: None,
        payer_name: None,
        proof_url: None,
    }
}

fn store_with_room() -> HostelStore {
    HostelStore::new(vec![Room::new("B-G01", Building::Boys, 2, RoomType::NonAc)])
}

#[test]
fn allocation_scenario_binds_student_and_room() {
    // Seed one student (no room) and one room with capacity 2.
    let mut store = store_with_room();
    let id = store.add_student(student_draft("Aarav Sharma", Gender::Male, None));

    store.allocate_room(id, "B-G01");

    assert_eq!(store.student(id).unwrap().room_number.as_deref(), Some("B-G01"));
    assert_eq!(store.room("B-G01").unwrap().occupied, 1);
}

#[test]
fn delete_student_releases_exactly_one_bed() {
    let mut store = store_with_room();
    let first = store.add_student(student_draft("Aarav Sharma", Gender::Male, Some("B-G01")));
    let second = store.add_student(student_draft("Vivaan Gupta", Gender::Male, Some("B-G01")));
    assert_eq!(store.room("B-G01").unwrap().occupied, 2);

    store.delete_student(first);

    assert!(store.student(first).is_none());
    assert!(store.student(second).is_some());
    assert_eq!(store.room("B-G01").unwrap().occupied, 1);
}

#[test]
fn delete_student_retains_history() {
    let mut store = store_with_room();
    let id = store.add_student(student_draft("Aarav Sharma", Gender::Male, None));
    store
        .record_payment(mess_payment(id, "2024-03", 2500, PaymentStatus::Paid))
        .unwrap();
    store.add_complaint(ComplaintDraft {
        student_id: id,
        category: ComplaintCategory::Food,
        subcategory: "Hygiene".to_string(),
        description: "Cold dinner".to_string(),
    });

    store.delete_student(id);

    // Orphaned references by design: history survives the record.
    assert_eq!(store.payments().len(), 1);
    assert_eq!(store.complaints().len(), 1);
    assert_eq!(store.payments()[0].student_id, id);
}

#[test]
fn payment_scenario_second_record_updates_not_inserts() {
    // recordPayment twice for the same (student, feeType, month) tuple.
    let mut store = HostelStore::new(Vec::new());

    store
        .record_payment(mess_payment(1, "2024-03", 2500, PaymentStatus::Paid))
        .unwrap();
    store
        .record_payment(mess_payment(1, "2024-03", 2600, PaymentStatus::Paid))
        .unwrap();

    assert_eq!(store.payments().len(), 1);
    assert_eq!(store.payments()[0].amount, 2600);
}

#[test]
fn payment_verification_workflow() {
    let mut store = HostelStore::new(Vec::new());
    let mut claim = mess_payment(5, "2024-03", 2500, PaymentStatus::Pending);
    claim.transaction_id = Some("TXN445566".to_string());
    let id = store.record_payment(claim).unwrap();
    assert!(store.payment(id).unwrap().awaiting_verification());

    store.verify_payment(id);

    let payment = store.payment(id).unwrap();
    assert_eq!(payment.status, PaymentStatus::Paid);
    assert!(!payment.awaiting_verification());
}

#[test]
fn duplicate_transaction_across_students_is_refused() {
    let mut store = HostelStore::new(Vec::new());
    let mut first = mess_payment(1, "2024-03", 2500, PaymentStatus::Paid);
    first.transaction_id = Some("TXN123456".to_string());
    store.record_payment(first).unwrap();

    let mut second = mess_payment(2, "2024-03", 2500, PaymentStatus::Pending);
    second.transaction_id = Some("TXN123456".to_string());

    assert!(store.record_payment(second).is_err());
    assert_eq!(store.payments().len(), 1);
}

#[test]
fn complaint_lifecycle_pending_to_resolved() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();
    let mut store = HostelStore::new(Vec::new()).with_clock(Box::new(FixedClock(date)));

    let id = store.add_complaint(ComplaintDraft {
        student_id: 1,
        category: ComplaintCategory::Food,
        subcategory: "Hygiene".to_string(),
        description: "Too much oil in dal".to_string(),
    });

    let complaint = store.complaint(id).unwrap();
    assert_eq!(complaint.status, ComplaintStatus::Pending);
    assert_eq!(complaint.date, date);

    store.resolve_complaint(id);
    assert_eq!(store.complaint(id).unwrap().status, ComplaintStatus::Resolved);

    // Never back: there is no operation that reopens a complaint, and
    // resolving again keeps it resolved.
    store.resolve_complaint(id);
    assert_eq!(store.complaint(id).unwrap().status, ComplaintStatus::Resolved);
}

#[test]
fn approved_profile_update_merges_contact_only() {
    let mut store = store_with_room();
    let student = store.add_student(student_draft("Aarav Sharma", Gender::Male, Some("B-G01")));
    let before = store.student(student).unwrap().clone();

    let application = store.submit_application(ApplicationDraft {
        student_id: student,
        kind: ApplicationType::ProfileUpdate,
        title: "Update Phone Number".to_string(),
        description: "New number.".to_string(),
        data: Some(StudentPatch {
            contact: Some("999".to_string()),
            ..Default::default()
        }),
        proof_url: None,
    });
    store.update_application_status(application, ApplicationStatus::Approved, None);

    let after = store.student(student).unwrap();
    assert_eq!(after.contact, "999");
    assert_eq!(after.name, before.name);
    assert_eq!(after.email, before.email);
    assert_eq!(after.room_number, before.room_number);
    assert_eq!(after.admission_date, before.admission_date);
}

#[test]
fn rejected_application_stores_reason_and_touches_nothing_else() {
    let mut store = store_with_room();
    let student = store.add_student(student_draft("Aarav Sharma", Gender::Male, None));
    let before = store.student(student).unwrap().clone();

    let application = store.submit_application(ApplicationDraft {
        student_id: student,
        kind: ApplicationType::ProfileUpdate,
        title: "Update Phone Number".to_string(),
        description: "New number.".to_string(),
        data: Some(StudentPatch {
            contact: Some("999".to_string()),
            ..Default::default()
        }),
        proof_url: None,
    });
    store.update_application_status(
        application,
        ApplicationStatus::Rejected,
        Some("reason text"),
    );

    let record = store.application(application).unwrap();
    assert_eq!(record.status, ApplicationStatus::Rejected);
    assert_eq!(record.rejection_reason.as_deref(), Some("reason text"));
    assert_eq!(store.student(student).unwrap(), &before);
}

#[test]
fn over_allocation_is_an_accepted_caller_error_state() {
    // The store does not own capacity checks; a caller that skips the
    // allocation policy can push occupancy past capacity. The store must
    // carry that state without panicking, and deletion still unwinds it.
    let mut store = store_with_room();
    let mut ids = Vec::new();
    for i in 0..3 {
        let id = store.add_student(student_draft(&format!("Student {i}"), Gender::Male, None));
        store.allocate_room(id, "B-G01");
        ids.push(id);
    }

    assert_eq!(store.room("B-G01").unwrap().occupied, 3);

    for id in ids {
        store.delete_student(id);
    }
    assert_eq!(store.room("B-G01").unwrap().occupied, 0);
}

#[test]
fn collections_keep_their_documented_order() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let mut store = store_with_room().with_clock(Box::new(FixedClock(date)));

    let first_student = store.add_student(student_draft("Aarav Sharma", Gender::Male, None));
    let second_student = store.add_student(student_draft("Vivaan Gupta", Gender::Male, None));
    // Students: insertion order
    assert_eq!(store.students()[0].id, first_student);
    assert_eq!(store.students()[1].id, second_student);

    let older = store.add_complaint(ComplaintDraft {
        student_id: first_student,
        category: ComplaintCategory::Maintenance,
        subcategory: "Fan".to_string(),
        description: "Noisy fan".to_string(),
    });
    let newer = store.add_complaint(ComplaintDraft {
        student_id: second_student,
        category: ComplaintCategory::Other,
        subcategory: "General".to_string(),
        description: "Wifi down".to_string(),
    });
    // Complaints: most recent first
    assert_eq!(store.complaints()[0].id, newer);
    assert_eq!(store.complaints()[1].id, older);

    let first_app = store.submit_application(ApplicationDraft {
        student_id: first_student,
        kind: ApplicationType::Bonafide,
        title: "Bonafide".to_string(),
        description: "For scholarship.".to_string(),
        data: None,
        proof_url: None,
    });
    let second_app = store.submit_application(ApplicationDraft {
        student_id: second_student,
        kind: ApplicationType::Leave,
        title: "Leave".to_string(),
        description: "Weekend.".to_string(),
        data: None,
        proof_url: None,
    });
    // Applications: most recent first
    assert_eq!(store.applications()[0].id, second_app);
    assert_eq!(store.applications()[1].id, first_app);
}

#[test]
fn unknown_ids_are_silent_noops_everywhere() {
    let mut store = store_with_room();

    store.delete_student(404);
    store.allocate_room(404, "B-G01");
    store.update_payment(404, Default::default()).unwrap();
    store.verify_payment(404);
    store.reject_payment(404, "nope");
    store.resolve_complaint(404);
    store.update_application_status(404, ApplicationStatus::Approved, None);

    assert!(store.students().is_empty());
    assert!(store.payments().is_empty());
    assert!(store.complaints().is_empty());
    assert!(store.applications().is_empty());
    assert_eq!(store.room("B-G01").unwrap().occupied, 0);
}
