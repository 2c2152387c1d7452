//! Aggregate queries behind the dashboard page.

use sqlx::PgPool;

use crate::models::dashboard::{DashboardStats, FundCount, MonthCount, TypeCount};
use crate::models::project::Project;
use crate::repositories::project_repo::{COLUMNS, SNAPSHOT_READ};

/// Number of recently updated projects shown on the dashboard.
pub const RECENT_PROJECTS_LIMIT: i64 = 5;

/// Provides dashboard aggregates. Drafts are excluded from everything
/// except `total_drafts`.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Compute all dashboard aggregates from one read-only snapshot.
    ///
    /// Group-by results are sparse: types, funding statuses and months
    /// without published projects are absent rather than zero.
    pub async fn stats(pool: &PgPool) -> Result<DashboardStats, sqlx::Error> {
        let mut tx = pool.begin().await?;
        sqlx::query(SNAPSHOT_READ).execute(&mut *tx).await?;

        let total_projects: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM projects WHERE is_draft = false")
                .fetch_one(&mut *tx)
                .await?;

        let total_drafts: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM projects WHERE is_draft = true")
                .fetch_one(&mut *tx)
                .await?;

        let projects_by_type = sqlx::query_as::<_, TypeCount>(
            "SELECT project_type, COUNT(*) AS count \
             FROM projects \
             WHERE is_draft = false \
             GROUP BY project_type \
             ORDER BY project_type",
        )
        .fetch_all(&mut *tx)
        .await?;

        let projects_by_fund = sqlx::query_as::<_, FundCount>(
            "SELECT fund_available, COUNT(*) AS count \
             FROM projects \
             WHERE is_draft = false \
             GROUP BY fund_available \
             ORDER BY fund_available",
        )
        .fetch_all(&mut *tx)
        .await?;

        let recent_query = format!(
            "SELECT {COLUMNS} FROM projects \
             WHERE is_draft = false \
             ORDER BY updated_at DESC, id DESC \
             LIMIT $1"
        );
        let recent_projects = sqlx::query_as::<_, Project>(&recent_query)
            .bind(RECENT_PROJECTS_LIMIT)
            .fetch_all(&mut *tx)
            .await?;

        let projects_over_time = sqlx::query_as::<_, MonthCount>(
            "SELECT to_char(start_date, 'YYYY-MM') AS date, COUNT(*) AS count \
             FROM projects \
             WHERE is_draft = false AND start_date IS NOT NULL \
             GROUP BY 1 \
             ORDER BY 1",
        )
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(DashboardStats {
            total_projects,
            total_drafts,
            projects_by_type,
            projects_by_fund,
            recent_projects,
            projects_over_time,
        })
    }
}
