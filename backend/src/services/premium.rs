//! Premium subscription service
//!
//! A user is premium when the plan says so and any recorded expiry is
//! still in the future. The upgrade flow simulates checkout: it sets the
//! plan and expiry directly, with no payment provider involved.

use crate::error::ApiError;
use crate::repositories::UserRepository;
use chrono::{DateTime, Duration, Utc};
use fitlikeus_shared::models::Plan;
use fitlikeus_shared::types::{BillingPeriod, PremiumStatusResponse};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

/// Subscription length granted per billing period
const MONTHLY_DAYS: i64 = 30;
const YEARLY_DAYS: i64 = 365;

/// Premium service for business logic
pub struct PremiumService;

impl PremiumService {
    /// Whether the plan grants premium access at `now`
    ///
    /// An expiry exactly at `now` no longer grants access; a premium plan
    /// with no recorded expiry does not expire.
    pub fn is_premium(plan: Plan, premium_expires_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
        if plan != Plan::Premium {
            return false;
        }
        match premium_expires_at {
            Some(expires_at) => expires_at > now,
            None => true,
        }
    }

    /// Whole days until the premium expiry, floored at zero
    pub fn days_until_expiry(
        premium_expires_at: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Option<i64> {
        let expires_at = premium_expires_at?;
        let remaining_secs = (expires_at - now).num_seconds();
        let days = (remaining_secs as f64 / 86_400.0).ceil() as i64;
        Some(days.max(0))
    }

    /// Get the subscription status for a user
    pub async fn get_status(pool: &PgPool, user_id: Uuid) -> Result<PremiumStatusResponse, ApiError> {
        let user = UserRepository::find_by_id(pool, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        let plan = user
            .plan
            .parse::<Plan>()
            .map_err(|e| ApiError::Internal(anyhow::anyhow!(e)))?;

        let now = Utc::now();
        Ok(PremiumStatusResponse {
            plan,
            is_premium: Self::is_premium(plan, user.premium_expires_at, now),
            premium_expires_at: user.premium_expires_at,
            days_until_expiry: Self::days_until_expiry(user.premium_expires_at, now),
        })
    }

    /// Upgrade a user to the premium plan
    pub async fn upgrade(
        pool: &PgPool,
        user_id: Uuid,
        period: BillingPeriod,
    ) -> Result<PremiumStatusResponse, ApiError> {
        let days = match period {
            BillingPeriod::Monthly => MONTHLY_DAYS,
            BillingPeriod::Yearly => YEARLY_DAYS,
        };

        let now = Utc::now();
        let expires_at = now + Duration::days(days);

        let user = UserRepository::set_plan(
            pool,
            user_id,
            &Plan::Premium.to_string(),
            Some(expires_at),
        )
        .await
        .map_err(ApiError::Internal)?;

        info!(user_id = %user.id, ?period, "Plan upgraded to premium");

        Ok(PremiumStatusResponse {
            plan: Plan::Premium,
            is_premium: true,
            premium_expires_at: user.premium_expires_at,
            days_until_expiry: Self::days_until_expiry(user.premium_expires_at, now),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 7, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_free_plan_is_never_premium() {
        assert!(!PremiumService::is_premium(Plan::Free, None, now()));
        assert!(!PremiumService::is_premium(
            Plan::Free,
            Some(now() + Duration::days(10)),
            now()
        ));
    }

    #[test]
    fn test_premium_without_expiry_does_not_expire() {
        assert!(PremiumService::is_premium(Plan::Premium, None, now()));
    }

    #[test]
    fn test_premium_with_future_expiry() {
        let expires = Some(now() + Duration::days(3));
        assert!(PremiumService::is_premium(Plan::Premium, expires, now()));
    }

    #[test]
    fn test_premium_with_past_expiry_is_expired() {
        let expires = Some(now() - Duration::seconds(1));
        assert!(!PremiumService::is_premium(Plan::Premium, expires, now()));
    }

    #[test]
    fn test_expiry_exactly_now_is_expired() {
        assert!(!PremiumService::is_premium(Plan::Premium, Some(now()), now()));
    }

    #[test]
    fn test_days_until_expiry_rounds_up() {
        let expires = Some(now() + Duration::hours(25));
        assert_eq!(PremiumService::days_until_expiry(expires, now()), Some(2));
    }

    #[test]
    fn test_days_until_expiry_floors_at_zero() {
        let expires = Some(now() - Duration::days(5));
        assert_eq!(PremiumService::days_until_expiry(expires, now()), Some(0));
    }

    #[test]
    fn test_days_until_expiry_absent_without_expiry() {
        assert_eq!(PremiumService::days_until_expiry(None, now()), None);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Remaining days are never negative, whatever the expiry
        #[test]
        fn prop_days_until_expiry_non_negative(offset_secs in -10_000_000i64..10_000_000) {
            let expires = Some(now() + Duration::seconds(offset_secs));
            let days = PremiumService::days_until_expiry(expires, now()).unwrap();
            prop_assert!(days >= 0);
        }

        /// Premium access and a positive day count agree: access implies
        /// at least one remaining day (ceiling), expiry implies zero
        #[test]
        fn prop_access_matches_remaining_days(offset_secs in -10_000_000i64..10_000_000) {
            let expires = Some(now() + Duration::seconds(offset_secs));
            let has_access = PremiumService::is_premium(Plan::Premium, expires, now());
            let days = PremiumService::days_until_expiry(expires, now()).unwrap();

            if has_access {
                prop_assert!(days >= 1);
            } else {
                prop_assert_eq!(days, 0);
            }
        }
    }
}
