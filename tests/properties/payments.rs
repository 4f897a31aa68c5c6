//! Property tests for payment recording and the dedup invariants.

use proptest::prelude::*;

use warden::domain::value_objects::{FeeType, PaymentStatus};
use warden::{HostelStore, PaymentDraft, PaymentPatch};

const MONTHS: [&str; 3] = ["2024-03", "2024-04", "2024"];

fn draft_strategy() -> impl Strategy<Value = PaymentDraft> {
    (
        1u32..6,
        0usize..MONTHS.len(),
        any::<bool>(),
        1000u32..5000,
        proptest::option::of(0u32..8),
    )
        .prop_map(|(student_id, month, mess, amount, txn)| PaymentDraft {
            student_id,
            amount,
            fee_type: if mess { FeeType::Mess } else { FeeType::Hostel },
            month: MONTHS[month].to_string(),
            status: if amount % 2 == 0 {
                PaymentStatus::Paid
            } else {
                PaymentStatus::Pending
            },
            payment_method: None,
            date: None,
            transaction_id: txn.map(|n| format!("TXN{n:04}")),
            payer_name: None,
            proof_url: None,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: whatever sequence of recordings is applied, the store
    /// holds at most one payment per (student, fee type, month) tuple.
    #[test]
    fn property_at_most_one_payment_per_tuple(
        drafts in proptest::collection::vec(draft_strategy(), 0..30)
    ) {
        let mut store = HostelStore::new(Vec::new());
        for draft in drafts {
            // Duplicate-transaction refusals are legitimate outcomes here.
            let _ = store.record_payment(draft);
        }

        for payment in store.payments() {
            let covering = store
                .payments()
                .iter()
                .filter(|p| p.covers(payment.student_id, payment.fee_type, &payment.month))
                .count();
            prop_assert_eq!(covering, 1);
        }
    }

    /// PROPERTY: transaction ids stay unique across the collection, no
    /// matter how often callers try to reuse them.
    #[test]
    fn property_transaction_ids_stay_unique(
        drafts in proptest::collection::vec(draft_strategy(), 0..30)
    ) {
        let mut store = HostelStore::new(Vec::new());
        for draft in drafts {
            let _ = store.record_payment(draft);
        }

        let mut seen = std::collections::HashSet::new();
        for payment in store.payments() {
            if let Some(txn) = &payment.transaction_id {
                prop_assert!(seen.insert(txn.clone()), "duplicate transaction id {}", txn);
            }
        }
    }

    /// PROPERTY: operations addressed by id never panic on ids that do not
    /// exist, and never create records as a side effect.
    #[test]
    fn property_unknown_ids_never_panic(id in 0u32..1000) {
        let mut store = HostelStore::new(Vec::new());

        store.update_payment(id, PaymentPatch::default()).unwrap();
        store.verify_payment(id);
        store.reject_payment(id, "no such claim");
        store.resolve_complaint(id);
        store.delete_student(id);

        prop_assert!(store.payments().is_empty());
        prop_assert!(store.complaints().is_empty());
        prop_assert!(store.students().is_empty());
    }
}
