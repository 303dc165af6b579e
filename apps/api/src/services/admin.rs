use std::time::Duration;

use crate::errors::AppError;
use crate::models::matching::{AdminUser, PlatformStats, UsagePoint};
use crate::services::{fixtures, simulate_delay};

const STATS_LATENCY: Duration = Duration::from_millis(500);
const USAGE_LATENCY: Duration = Duration::from_millis(600);
const USERS_LATENCY: Duration = Duration::from_millis(700);

/// Admin-facing mock operations backing the admin panel.
pub struct AdminService {
    latency_override: Option<Duration>,
}

impl AdminService {
    pub fn new(latency_override: Option<Duration>) -> Self {
        Self { latency_override }
    }

    fn latency(&self, default: Duration) -> Duration {
        self.latency_override.unwrap_or(default)
    }

    pub async fn get_stats(&self) -> Result<PlatformStats, AppError> {
        simulate_delay(self.latency(STATS_LATENCY)).await;
        Ok(fixtures::platform_stats())
    }

    pub async fn get_usage_data(&self) -> Result<Vec<UsagePoint>, AppError> {
        simulate_delay(self.latency(USAGE_LATENCY)).await;
        Ok(fixtures::usage_data())
    }

    pub async fn get_users(&self) -> Result<Vec<AdminUser>, AppError> {
        simulate_delay(self.latency(USERS_LATENCY)).await;
        Ok(fixtures::admin_users())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_stats_match_fixture() {
        let svc = AdminService::new(None);
        let stats = svc.get_stats().await.unwrap();
        assert_eq!(stats.total_matches, 1247);
        assert!((stats.avg_score - 76.3).abs() < f64::EPSILON);
    }

    #[tokio::test(start_paused = true)]
    async fn test_usage_covers_six_months() {
        let svc = AdminService::new(None);
        let usage = svc.get_usage_data().await.unwrap();
        assert_eq!(usage.len(), 6);
        assert_eq!(usage[0].month, "Sep");
    }

    #[tokio::test(start_paused = true)]
    async fn test_user_listing() {
        let svc = AdminService::new(None);
        let users = svc.get_users().await.unwrap();
        assert_eq!(users.len(), 5);
        assert_eq!(users[2].role, "Recruiter");
    }
}
