//! Payment operations: recording, patching, verification workflow

use crate::domain::entities::{Payment, PaymentDraft, PaymentPatch};
use crate::domain::ports::StoreEvent;
use crate::domain::store::HostelStore;
use crate::domain::value_objects::PaymentStatus;
use crate::error::{WardenError, WardenResult};

impl HostelStore {
    /// Record a payment and return the id of the record it landed on
    ///
    /// If a record already covers `(student_id, fee_type, month)` the draft
    /// is applied to it as a patch; otherwise a fresh record is inserted
    /// with the caller-chosen initial status. A transaction id already held
    /// by a different record is refused before anything is mutated.
    pub fn record_payment(&mut self, draft: PaymentDraft) -> WardenResult<u32> {
        let existing = self
            .payment_for(draft.student_id, draft.fee_type, &draft.month)
            .map(|p| p.id);

        match existing {
            Some(id) => {
                self.update_payment(id, draft.as_patch())?;
                self.emit(StoreEvent::PaymentRecorded {
                    id,
                    student_id: draft.student_id,
                    updated: true,
                });
                Ok(id)
            }
            None => {
                self.ensure_transaction_unique(draft.transaction_id.as_deref(), None)?;

                let id = self.next_payment_id;
                self.next_payment_id += 1;
                let student_id = draft.student_id;
                self.payments.push(Payment {
                    id,
                    student_id: draft.student_id,
                    amount: draft.amount,
                    fee_type: draft.fee_type,
                    month: draft.month,
                    status: draft.status,
                    payment_method: draft.payment_method,
                    date: draft.date,
                    transaction_id: draft.transaction_id,
                    payer_name: draft.payer_name,
                    proof_url: draft.proof_url,
                    rejection_reason: None,
                });
                self.emit(StoreEvent::PaymentRecorded {
                    id,
                    student_id,
                    updated: false,
                });
                Ok(id)
            }
        }
    }

    /// Merge a patch into a payment; no-op on an unknown id
    pub fn update_payment(&mut self, id: u32, patch: PaymentPatch) -> WardenResult<()> {
        let Some(index) = self.payments.iter().position(|p| p.id == id) else {
            return Ok(());
        };

        self.ensure_transaction_unique(patch.transaction_id.as_deref(), Some(id))?;
        patch.apply(&mut self.payments[index]);
        Ok(())
    }

    /// Mark a pending claim Paid; no-op on an unknown id
    pub fn verify_payment(&mut self, id: u32) {
        let Some(payment) = self.payments.iter_mut().find(|p| p.id == id) else {
            return;
        };
        payment.status = PaymentStatus::Paid;
        self.emit(StoreEvent::PaymentVerified { id });
    }

    /// Mark a claim Rejected and store the reason; no-op on an unknown id
    pub fn reject_payment(&mut self, id: u32, reason: &str) {
        let Some(payment) = self.payments.iter_mut().find(|p| p.id == id) else {
            return;
        };
        payment.status = PaymentStatus::Rejected;
        payment.rejection_reason = Some(reason.to_string());
        self.emit(StoreEvent::PaymentRejected {
            id,
            reason: reason.to_string(),
        });
    }

    /// Refuse a transaction id that already belongs to a record other than
    /// `exempt`
    fn ensure_transaction_unique(
        &self,
        transaction_id: Option<&str>,
        exempt: Option<u32>,
    ) -> WardenResult<()> {
        let Some(transaction_id) = transaction_id else {
            return Ok(());
        };
        if let Some(holder) = self.payments.iter().find(|p| {
            Some(p.id) != exempt && p.transaction_id.as_deref() == Some(transaction_id)
        }) {
            return Err(WardenError::DuplicateTransaction {
                transaction_id: transaction_id.to_string(),
                payment_id: holder.id,
            });
        }
        Ok(())
    }
}
