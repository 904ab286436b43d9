//! Bid workflow rules.
//!
//! The checks that govern bid creation, approval, and gig completion live
//! here as pure functions over the gig/bid records, so the transition rules
//! can be tested without a database. Handlers map each rejection to an HTTP
//! status via [`WorkflowError::status_code`].

use actix_web::http::StatusCode;
use thiserror::Error;
use uuid::Uuid;

use crate::models::bids::BidStatus;
use crate::models::gigs::{self, GigStatus};

/// Minimum length of a trimmed bid proposal.
pub const MIN_PROPOSAL_CHARS: usize = 100;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkflowError {
    #[error("You cannot bid on your own gig")]
    OwnGig,
    #[error("Bidding is closed for this gig")]
    BiddingClosed,
    #[error("Amount must be between {min} and {max}")]
    AmountOutOfRange { min: f64, max: f64 },
    #[error("Days must be between 1 and {max}")]
    DaysOutOfRange { max: i32 },
    #[error("Proposal must be at least {MIN_PROPOSAL_CHARS} characters")]
    ProposalTooShort,
    #[error("You already have a pending bid on this gig")]
    DuplicatePendingBid,
    #[error("Gig is not in progress")]
    NotInProgress,
}

impl WorkflowError {
    /// HTTP status for each rejection: ownership violations are 403, the
    /// duplicate pending bid is 409, everything else is a 400.
    pub fn status_code(&self) -> StatusCode {
        match self {
            WorkflowError::OwnGig => StatusCode::FORBIDDEN,
            WorkflowError::DuplicatePendingBid => StatusCode::CONFLICT,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

/// Validate a new bid against its gig.
///
/// Order matters: ownership is checked before gig availability, availability
/// before the numeric ranges, and the proposal length last. The
/// duplicate-pending check is a separate database lookup performed by the
/// caller after this passes (it is not atomic with the insert).
pub fn validate_new_bid(
    gig: &gigs::Model,
    bidder_id: Uuid,
    amount: f64,
    days: i32,
    message: &str,
) -> Result<(), WorkflowError> {
    if gig.user_id == bidder_id {
        return Err(WorkflowError::OwnGig);
    }
    if gig.status != GigStatus::Available {
        return Err(WorkflowError::BiddingClosed);
    }
    if amount < gig.price_min || amount > gig.price_max {
        return Err(WorkflowError::AmountOutOfRange {
            min: gig.price_min,
            max: gig.price_max,
        });
    }
    if days < 1 || days > gig.delivery_time {
        return Err(WorkflowError::DaysOutOfRange {
            max: gig.delivery_time,
        });
    }
    if message.trim().chars().count() < MIN_PROPOSAL_CHARS {
        return Err(WorkflowError::ProposalTooShort);
    }
    Ok(())
}

/// Completion guard: both the gig and the bid must be in progress.
/// Completing an already-completed bid fails here.
pub fn validate_completion(
    gig_status: GigStatus,
    bid_status: BidStatus,
) -> Result<(), WorkflowError> {
    if gig_status != GigStatus::InProgress || bid_status != BidStatus::InProgress {
        return Err(WorkflowError::NotInProgress);
    }
    Ok(())
}

/// Whether a gig status change moves forward through
/// available → in_progress → completed. The owner status PATCH does not
/// consult this; it is the documented override path.
pub fn is_forward_transition(from: GigStatus, to: GigStatus) -> bool {
    matches!(
        (from, to),
        (GigStatus::Available, GigStatus::InProgress)
            | (GigStatus::Available, GigStatus::Completed)
            | (GigStatus::InProgress, GigStatus::Completed)
    ) || from == to
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::gigs::{Categories, LikedBy};
    use crate::models::users::StringList;

    fn gig(owner: Uuid) -> gigs::Model {
        gigs::Model {
            id: Uuid::new_v4(),
            user_id: owner,
            title: "Essay research and drafting".to_string(),
            description: "Long-form essay work".to_string(),
            category: Categories::EssayWriting,
            price_min: 50.0,
            price_max: 200.0,
            delivery_time: 10,
            pages: 1,
            price_per_page: 0.0,
            discount_enabled: false,
            discount_amount: 0.0,
            discount_condition: String::new(),
            cover: None,
            images: StringList::default(),
            document_data: None,
            document_content_type: None,
            document_filename: None,
            document_size: None,
            has_document: false,
            status: GigStatus::Available,
            liked_by: LikedBy::default(),
            total_stars: 0,
            star_number: 0,
            sales: 0,
            created_at: chrono::Utc::now(),
            updated_at: None,
        }
    }

    fn long_proposal() -> String {
        "x".repeat(MIN_PROPOSAL_CHARS)
    }

    #[test]
    fn valid_bid_passes() {
        let g = gig(Uuid::new_v4());
        let result = validate_new_bid(&g, Uuid::new_v4(), 100.0, 5, &long_proposal());
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn owner_cannot_bid_on_own_gig() {
        let owner = Uuid::new_v4();
        let g = gig(owner);
        let result = validate_new_bid(&g, owner, 100.0, 5, &long_proposal());
        assert_eq!(result, Err(WorkflowError::OwnGig));
    }

    #[test]
    fn bidding_closed_once_gig_leaves_available() {
        for status in [GigStatus::InProgress, GigStatus::Completed] {
            let mut g = gig(Uuid::new_v4());
            g.status = status;
            let result = validate_new_bid(&g, Uuid::new_v4(), 100.0, 5, &long_proposal());
            assert_eq!(result, Err(WorkflowError::BiddingClosed));
        }
    }

    #[test]
    fn amount_must_fall_within_price_range() {
        let g = gig(Uuid::new_v4());
        for amount in [49.99, 200.01] {
            let result = validate_new_bid(&g, Uuid::new_v4(), amount, 5, &long_proposal());
            assert_eq!(
                result,
                Err(WorkflowError::AmountOutOfRange {
                    min: 50.0,
                    max: 200.0
                })
            );
        }
        // Boundaries are inclusive.
        assert!(validate_new_bid(&g, Uuid::new_v4(), 50.0, 5, &long_proposal()).is_ok());
        assert!(validate_new_bid(&g, Uuid::new_v4(), 200.0, 5, &long_proposal()).is_ok());
    }

    #[test]
    fn days_must_fall_within_delivery_window() {
        let g = gig(Uuid::new_v4());
        for days in [0, 11] {
            let result = validate_new_bid(&g, Uuid::new_v4(), 100.0, days, &long_proposal());
            assert_eq!(result, Err(WorkflowError::DaysOutOfRange { max: 10 }));
        }
        assert!(validate_new_bid(&g, Uuid::new_v4(), 100.0, 1, &long_proposal()).is_ok());
        assert!(validate_new_bid(&g, Uuid::new_v4(), 100.0, 10, &long_proposal()).is_ok());
    }

    #[test]
    fn short_proposal_is_rejected_after_trimming() {
        let g = gig(Uuid::new_v4());
        // 99 characters padded with whitespace: trimming must not rescue it.
        let padded = format!("  {}  ", "x".repeat(MIN_PROPOSAL_CHARS - 1));
        let result = validate_new_bid(&g, Uuid::new_v4(), 100.0, 5, &padded);
        assert_eq!(result, Err(WorkflowError::ProposalTooShort));
    }

    #[test]
    fn ownership_is_checked_before_availability() {
        let owner = Uuid::new_v4();
        let mut g = gig(owner);
        g.status = GigStatus::Completed;
        let result = validate_new_bid(&g, owner, 0.0, 0, "");
        assert_eq!(result, Err(WorkflowError::OwnGig));
    }

    #[test]
    fn completion_requires_both_records_in_progress() {
        assert!(validate_completion(GigStatus::InProgress, BidStatus::InProgress).is_ok());
        assert_eq!(
            validate_completion(GigStatus::Available, BidStatus::InProgress),
            Err(WorkflowError::NotInProgress)
        );
        assert_eq!(
            validate_completion(GigStatus::InProgress, BidStatus::Pending),
            Err(WorkflowError::NotInProgress)
        );
        // Completing an already-completed bid fails.
        assert_eq!(
            validate_completion(GigStatus::Completed, BidStatus::Completed),
            Err(WorkflowError::NotInProgress)
        );
    }

    #[test]
    fn gig_status_only_moves_forward() {
        assert!(is_forward_transition(
            GigStatus::Available,
            GigStatus::InProgress
        ));
        assert!(is_forward_transition(
            GigStatus::InProgress,
            GigStatus::Completed
        ));
        assert!(!is_forward_transition(
            GigStatus::InProgress,
            GigStatus::Available
        ));
        assert!(!is_forward_transition(
            GigStatus::Completed,
            GigStatus::InProgress
        ));
        assert!(!is_forward_transition(
            GigStatus::Completed,
            GigStatus::Available
        ));
    }

    #[test]
    fn rejections_map_to_expected_status_codes() {
        assert_eq!(WorkflowError::OwnGig.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            WorkflowError::DuplicatePendingBid.status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            WorkflowError::BiddingClosed.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            WorkflowError::NotInProgress.status_code(),
            StatusCode::BAD_REQUEST
        );
    }
}
