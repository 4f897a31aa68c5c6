//! Demo dataset seeding
//!
//! Generates the room grid and a demo student body from the hostel
//! profile. Generation is fully deterministic (fixed name tables, cycling
//! indices) so two stores seeded from the same profile are identical and
//! tests can assert on exact contents.

use chrono::NaiveDate;

use crate::config::{BuildingConfig, HostelConfig};
use crate::domain::entities::{
    Application, Complaint, Payment, Room, Student, StudentPatch,
};
use crate::domain::store::HostelStore;
use crate::domain::value_objects::{
    ApplicationStatus, ApplicationType, Building, ComplaintCategory, ComplaintStatus, FeeType,
    Gender, PaymentMethod, PaymentStatus, RoomType,
};

const FIRST_NAMES_MALE: [&str; 19] = [
    "Aarav", "Vivaan", "Aditya", "Vihaan", "Arjun", "Sai", "Reyansh", "Ayaan", "Krishna",
    "Ishaan", "Shaurya", "Atharva", "Rohan", "Mohan", "Suresh", "Pranav", "Kabir", "Dhruv",
    "Rudra",
];

const FIRST_NAMES_FEMALE: [&str; 19] = [
    "Saanvi", "Anya", "Aadhya", "Pari", "Diya", "Ananya", "Myra", "Riya", "Meera", "Ishita",
    "Kavya", "Aditi", "Priya", "Sneha", "Tanvi", "Shruti", "Pooja", "Neha", "Adbhut",
];

const LAST_NAMES: [&str; 18] = [
    "Sharma", "Verma", "Gupta", "Patil", "Deshmukh", "Singh", "Kumar", "Joshi", "Mehta", "Das",
    "Chopra", "Wagh", "Kale", "Raut", "Thakre", "Bose", "Iyer", "Reddy",
];

const BRANCHES: [&str; 5] = ["CSE", "ECE", "ME", "CE", "EE"];
const YEARS: [&str; 4] = ["1st", "2nd", "3rd", "4th"];
const BLOOD_GROUPS: [&str; 6] = ["A+", "B+", "O+", "AB+", "O-", "B-"];
const CASTES: [&str; 7] = ["General", "OBC", "SC", "ST", "NT", "VJ", "SBC"];
const LOCALITIES: [&str; 5] = ["Civil Lines", "Sadar", "Manish Nagar", "Sitabuldi", "Dharampeth"];

/// Generate the room grid for every configured building
///
/// Rooms are numbered `<B|G>-<floor><nn>` with `G` for the ground floor
/// (`B-G01`, `B-102`, `G-305`, ...). The ground floor absorbs the rooms
/// left over after an even split across floors, and every fifth room on a
/// floor is AC.
pub fn seed_rooms(config: &HostelConfig) -> Vec<Room> {
    config.buildings.iter().flat_map(building_rooms).collect()
}

fn building_rooms(config: &BuildingConfig) -> Vec<Room> {
    let prefix = match config.building {
        Building::Boys => "B",
        Building::Girls => "G",
    };
    let floor_count = config.floors + 1;
    let base = config.rooms / floor_count;
    let remainder = config.rooms % floor_count;

    let facilities = vec![
        format!("{} Beds", config.capacity_per_room),
        format!("{} Tables", config.capacity_per_room),
        format!("{} Chairs", config.capacity_per_room),
        format!("{} Almirahs", config.capacity_per_room),
        "1 Fan".to_string(),
    ];

    let mut rooms = Vec::with_capacity(config.rooms as usize);
    for floor in 0..floor_count {
        let on_this_floor = if floor == 0 { base + remainder } else { base };
        let floor_prefix = if floor == 0 {
            "G".to_string()
        } else {
            floor.to_string()
        };
        for number in 1..=on_this_floor {
            if rooms.len() as u32 >= config.rooms {
                break;
            }
            let room_type = if number % 5 == 0 {
                RoomType::Ac
            } else {
                RoomType::NonAc
            };
            rooms.push(
                Room::new(
                    format!("{prefix}-{floor_prefix}{number:02}"),
                    config.building,
                    config.capacity_per_room,
                    room_type,
                )
                .with_facilities(facilities.clone()),
            );
        }
    }
    rooms
}

/// Generate `count` demo students, allocating them sequentially into
/// gender-matching rooms until capacity runs out
///
/// Mutates the room grid's `occupied` counts so the returned dataset is
/// internally consistent.
fn seed_students(rooms: &mut [Room], count: u32) -> Vec<Student> {
    let boys: Vec<usize> = room_indices(rooms, Building::Boys);
    let girls: Vec<usize> = room_indices(rooms, Building::Girls);
    let mut boys_cursor = 0;
    let mut girls_cursor = 0;

    let mut students = Vec::with_capacity(count as usize);
    for i in 1..=count {
        // Roughly 65% male, matching the capacity ratio of the two buildings
        let is_male = i % 20 < 13;
        let gender = if is_male { Gender::Male } else { Gender::Female };
        let first = if is_male {
            FIRST_NAMES_MALE[(i as usize * 3) % FIRST_NAMES_MALE.len()]
        } else {
            FIRST_NAMES_FEMALE[(i as usize * 3) % FIRST_NAMES_FEMALE.len()]
        };
        let last = LAST_NAMES[(i as usize * 5) % LAST_NAMES.len()];

        let (indices, cursor) = if is_male {
            (&boys, &mut boys_cursor)
        } else {
            (&girls, &mut girls_cursor)
        };
        let mut room_number = None;
        while *cursor < indices.len() {
            let room = &mut rooms[indices[*cursor]];
            if room.occupied < room.capacity {
                room.occupied += 1;
                room_number = Some(room.room_number.clone());
                break;
            }
            *cursor += 1;
        }

        let temporary_address = match &room_number {
            Some(number) => format!(
                "Room {number}, {}",
                if is_male { "Boys Hostel" } else { "Girls Hostel" }
            ),
            None => "Unallocated".to_string(),
        };

        students.push(Student {
            id: i,
            name: format!("{first} {last}"),
            gender,
            branch: BRANCHES[i as usize % BRANCHES.len()].to_string(),
            year: YEARS[i as usize % YEARS.len()].to_string(),
            blood_group: BLOOD_GROUPS[i as usize % BLOOD_GROUPS.len()].to_string(),
            caste: CASTES[i as usize % CASTES.len()].to_string(),
            contact: format!("9{:09}", (100_000_000 + u64::from(i) * 7_919) % 1_000_000_000),
            email: format!(
                "{}.{}{}@gcoen.ac.in",
                first.to_lowercase(),
                last.to_lowercase(),
                i
            ),
            permanent_address: format!(
                "{}, {}, Nagpur",
                1 + (i % 100),
                LOCALITIES[i as usize % LOCALITIES.len()]
            ),
            temporary_address,
            parent_name: format!("Mr. {last}"),
            parent_contact: format!("8{:09}", (100_000_000 + u64::from(i) * 6_733) % 1_000_000_000),
            room_number,
            admission_date: NaiveDate::from_ymd_opt(2024, 6, 1 + (i % 28)).unwrap(),
            profile_photo: None,
        });
    }
    students
}

fn room_indices(rooms: &[Room], building: Building) -> Vec<usize> {
    rooms
        .iter()
        .enumerate()
        .filter(|(_, r)| r.building == building)
        .map(|(i, _)| i)
        .collect()
}

/// March 2024 mess-fee records for the first stretch of students
fn seed_payments(config: &HostelConfig, student_count: u32) -> Vec<Payment> {
    let amount = config.fees.mess_monthly;
    let covered = student_count.min(30);

    let mut payments = Vec::with_capacity(covered as usize);
    for i in 1..=covered {
        let paid = i % 2 == 1;
        let online = i % 3 != 0;
        // Every fourth unpaid record is a student-submitted claim waiting
        // on admin verification
        let claimed = !paid && i % 4 == 0;
        payments.push(Payment {
            id: i,
            student_id: i,
            amount,
            fee_type: FeeType::Mess,
            month: "2024-03".to_string(),
            status: if paid {
                PaymentStatus::Paid
            } else {
                PaymentStatus::Pending
            },
            payment_method: (paid || claimed).then(|| {
                if online {
                    PaymentMethod::Online
                } else {
                    PaymentMethod::Cash
                }
            }),
            date: paid.then(|| NaiveDate::from_ymd_opt(2024, 3, 2 + (i % 14)).unwrap()),
            transaction_id: ((paid || claimed) && online).then(|| format!("TXN{:06}", 123_450 + i)),
            payer_name: claimed.then(|| format!("Guardian {i}")),
            proof_url: (claimed && !online).then(|| format!("upi_receipt_{i}.jpg")),
            rejection_reason: None,
        });
    }
    payments
}

/// The reference complaint log, most recent first
fn seed_complaints() -> Vec<Complaint> {
    let complaint = |id, student_id, category, subcategory: &str, description: &str, status, date| {
        Complaint {
            id,
            student_id,
            category,
            subcategory: subcategory.to_string(),
            description: description.to_string(),
            status,
            date,
        }
    };
    let day = |m, d| NaiveDate::from_ymd_opt(2024, m, d).unwrap();

    vec![
        complaint(
            5,
            7,
            ComplaintCategory::Maintenance,
            "Plumbing/Water",
            "Tap leaking in bathroom",
            ComplaintStatus::Pending,
            day(3, 14),
        ),
        complaint(
            4,
            2,
            ComplaintCategory::Food,
            "Oil/Hygiene",
            "Too much oil in dal",
            ComplaintStatus::Resolved,
            day(3, 12),
        ),
        complaint(
            3,
            6,
            ComplaintCategory::Discipline,
            "Noise",
            "Loud music during silence hours (after 9 PM).",
            ComplaintStatus::Pending,
            day(3, 11),
        ),
        complaint(
            2,
            4,
            ComplaintCategory::Food,
            "Quality/Taste",
            "Dinner was served cold yesterday.",
            ComplaintStatus::Pending,
            day(3, 10),
        ),
        complaint(
            6,
            8,
            ComplaintCategory::Discipline,
            "Fighting",
            "Fighting in corridor",
            ComplaintStatus::Resolved,
            day(3, 1),
        ),
        complaint(
            1,
            1,
            ComplaintCategory::Maintenance,
            "Fan",
            "Ceiling fan making loud noise in Room G01.",
            ComplaintStatus::Resolved,
            day(2, 20),
        ),
    ]
}

/// The reference application log, most recent first
fn seed_applications() -> Vec<Application> {
    vec![
        Application {
            id: 2,
            student_id: 3,
            kind: ApplicationType::ProfileUpdate,
            title: "Update Phone Number".to_string(),
            description: "Lost my old SIM, updating new number.".to_string(),
            data: Some(StudentPatch {
                contact: Some("9999900000".to_string()),
                ..Default::default()
            }),
            proof_url: None,
            status: ApplicationStatus::Pending,
            rejection_reason: None,
            date: NaiveDate::from_ymd_opt(2024, 3, 18).unwrap(),
        },
        Application {
            id: 1,
            student_id: 2,
            kind: ApplicationType::Leave,
            title: "Sick Leave".to_string(),
            description: "Going home to Wardha for medical treatment for 3 days.".to_string(),
            data: None,
            proof_url: Some("doctor_cert.pdf".to_string()),
            status: ApplicationStatus::Approved,
            rejection_reason: None,
            date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        },
    ]
}

/// Build a fully seeded store: room grid, demo students with consistent
/// occupancy, and the demo payment/complaint/application logs
pub fn seed_store(config: &HostelConfig, student_count: u32) -> HostelStore {
    let mut rooms = seed_rooms(config);
    let students = seed_students(&mut rooms, student_count);
    let payments = seed_payments(config, student_count);
    HostelStore::with_dataset(
        rooms,
        students,
        payments,
        seed_complaints(),
        seed_applications(),
    )
}
