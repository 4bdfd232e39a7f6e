//! Payment batches

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use core_kernel::{lifecycle, BatchId, Lifecycle, Money, Record};

use crate::error::PaymentError;

/// Progress reported as soon as a batch is started
pub const STARTED_PROGRESS: u8 = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

lifecycle! {
    BatchStatus, "batch";
    Pending => "pending", "Pending", [("start", Processing)];
    Processing => "processing", "Processing", [("complete", Completed), ("fail", Failed)];
    Completed => "completed", "Completed", [];
    Failed => "failed", "Failed", [];
}

/// A group of payments sent to the bank together
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentBatch {
    pub id: BatchId,
    pub total_amount: Money,
    pub payment_count: u32,
    pub status: BatchStatus,
    /// Percent complete, 0-100
    pub progress: u8,
    pub created_at: DateTime<Utc>,
}

impl PaymentBatch {
    pub fn new(id: BatchId, total_amount: Money, payment_count: u32, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            total_amount,
            payment_count,
            status: BatchStatus::Pending,
            progress: 0,
            created_at,
        }
    }

    fn apply(&mut self, target: BatchStatus) -> Result<(), PaymentError> {
        if !self.status.can_transition_to(target) {
            return Err(PaymentError::InvalidStatusTransition {
                from: self.status.as_str().to_string(),
                to: target.as_str().to_string(),
            });
        }
        info!(
            batch_id = %self.id,
            from = self.status.as_str(),
            to = target.as_str(),
            "Batch status changed"
        );
        self.status = target;
        Ok(())
    }

    pub fn start(&mut self) -> Result<(), PaymentError> {
        self.apply(BatchStatus::Processing)?;
        self.progress = STARTED_PROGRESS;
        Ok(())
    }

    /// Records progress of a processing batch
    pub fn advance(&mut self, progress: u8) -> Result<(), PaymentError> {
        if self.status != BatchStatus::Processing {
            return Err(PaymentError::InvalidStatusTransition {
                from: self.status.as_str().to_string(),
                to: BatchStatus::Processing.as_str().to_string(),
            });
        }
        if progress > 100 || progress < self.progress {
            return Err(PaymentError::InvalidProgress(progress));
        }
        self.progress = progress;
        Ok(())
    }

    pub fn complete(&mut self) -> Result<(), PaymentError> {
        self.apply(BatchStatus::Completed)?;
        self.progress = 100;
        Ok(())
    }

    pub fn fail(&mut self) -> Result<(), PaymentError> {
        self.apply(BatchStatus::Failed)
    }
}

impl Record for PaymentBatch {
    type Id = BatchId;
    const ENTITY: &'static str = "Batch";

    fn id(&self) -> BatchId {
        self.id
    }
}

/// Starts every pending batch, returning how many were started
pub fn start_batch_processing(batches: &mut [PaymentBatch]) -> usize {
    let mut started = 0;
    for batch in batches.iter_mut().filter(|b| b.status == BatchStatus::Pending) {
        if batch.start().is_ok() {
            started += 1;
        }
    }
    info!(started, "Batch processing started");
    started
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn batch(seq: u32) -> PaymentBatch {
        PaymentBatch::new(BatchId::new(seq), Money::usd(dec!(8920.50)), 7, Utc::now())
    }

    #[test]
    fn test_start_pending_batches_only() {
        let mut done = batch(1);
        done.start().unwrap();
        done.complete().unwrap();
        let mut batches = vec![done, batch(2), batch(3)];

        assert_eq!(start_batch_processing(&mut batches), 2);
        assert_eq!(batches[0].status, BatchStatus::Completed);
        assert_eq!(batches[0].progress, 100);
        assert!(batches[1..].iter().all(|b| b.status == BatchStatus::Processing && b.progress == 25));

        assert_eq!(start_batch_processing(&mut batches), 0);
    }

    #[test]
    fn test_advance() {
        let mut b = batch(1);
        assert!(b.advance(50).is_err());
        b.start().unwrap();
        b.advance(65).unwrap();
        assert!(matches!(b.advance(40), Err(PaymentError::InvalidProgress(40))));
        assert!(matches!(b.advance(101), Err(PaymentError::InvalidProgress(101))));
        b.fail().unwrap();
        assert_eq!(b.progress, 65);
    }
}
