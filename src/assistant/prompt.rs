//! Prompt construction
//!
//! The assistant answers from two sources: the institution policy text in
//! the profile, and a JSON snapshot of live store state. Students are
//! serialized slim (id, name, room) to keep the prompt bounded; complaints
//! go in whole because the category/status detail is what gets asked about.

use serde::Serialize;

use crate::config::HostelConfig;
use crate::domain::store::HostelStore;

/// Slim student projection for the snapshot
#[derive(Serialize)]
struct StudentSnapshot<'a> {
    id: u32,
    name: &'a str,
    room: Option<&'a str>,
}

/// Build the full prompt for one user question
pub fn build_prompt(config: &HostelConfig, store: &HostelStore, question: &str) -> String {
    let students: Vec<StudentSnapshot<'_>> = store
        .students()
        .iter()
        .map(|s| StudentSnapshot {
            id: s.id,
            name: &s.name,
            room: s.room_number.as_deref(),
        })
        .collect();
    let students_json =
        serde_json::to_string(&students).unwrap_or_else(|_| "[]".to_string());
    let complaints_json =
        serde_json::to_string(store.complaints()).unwrap_or_else(|_| "[]".to_string());

    let total_rooms = store.rooms().len();
    let full_rooms = store.rooms().iter().filter(|r| r.is_full()).count();

    format!(
        "You are the AI Assistant for {name} Hostels.\n\
         \n\
         OFFICIAL HOSTEL POLICY & RULES:\n\
         {policy}\n\
         \n\
         REAL-TIME DATABASE:\n\
         Students: {students_json}\n\
         Rooms Summary: Total {total_rooms}, Occupied {full_rooms}.\n\
         Complaints: {complaints_json}\n\
         \n\
         INSTRUCTIONS:\n\
         - Answer based STRICTLY on the policy and database above.\n\
         - Be polite and professional.\n\
         \n\
         User Question: {question}",
        name = config.institution.name,
        policy = config.institution.policy,
    )
}
