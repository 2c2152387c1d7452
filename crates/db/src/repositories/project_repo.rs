//! Repository for the `projects` table.

use cib_core::filter::{ProjectFilter, SEARCH_COLUMNS};
use cib_core::pagination::{PageMeta, PageRequest, Sort};
use cib_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, ProjectPage, UpdateProject};

/// Column list shared across queries to avoid repetition.
pub(crate) const COLUMNS: &str = "\
    id, pid, project_name, ministry_dept, lead_programme_manager, programme_manager, \
    project_type, fund_available, contract_value, description, status, \
    start_date, completion_date, is_draft, created_at, updated_at";

/// Isolation for multi-statement reads that must agree with each other.
pub(crate) const SNAPSHOT_READ: &str = "SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY";

/// Bind the values referenced by [`where_clause`], in the same order.
macro_rules! bind_filter {
    ($query:expr, $filter:expr) => {{
        let filter: &ProjectFilter = $filter;
        let mut query = $query;
        if let Some(pattern) = filter.search_pattern() {
            query = query.bind(pattern);
        }
        if let Some(project_type) = filter.project_type {
            query = query.bind(project_type.as_str());
        }
        if let Some(fund_available) = filter.fund_available {
            query = query.bind(fund_available.as_str());
        }
        if let Some(is_draft) = filter.draft.required_value() {
            query = query.bind(is_draft);
        }
        query
    }};
}

/// Provides CRUD, listing and export queries for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// A `pid` collision fails with a unique violation on `uq_projects_pid`
    /// and leaves the table untouched.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects \
                (pid, project_name, ministry_dept, lead_programme_manager, programme_manager, \
                 project_type, fund_available, contract_value, description, status, \
                 start_date, completion_date, is_draft) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(input.pid)
            .bind(&input.project_name)
            .bind(&input.ministry_dept)
            .bind(&input.lead_programme_manager)
            .bind(&input.programme_manager)
            .bind(input.project_type.as_str())
            .bind(input.fund_available.as_str())
            .bind(&input.contract_value)
            .bind(&input.description)
            .bind(&input.status)
            .bind(input.start_date)
            .bind(input.completion_date)
            .bind(input.is_draft)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    ///
    /// Dates use a presence flag so an explicit `null` can clear them.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET \
                pid = COALESCE($2, pid), \
                project_name = COALESCE($3, project_name), \
                ministry_dept = COALESCE($4, ministry_dept), \
                lead_programme_manager = COALESCE($5, lead_programme_manager), \
                programme_manager = COALESCE($6, programme_manager), \
                project_type = COALESCE($7, project_type), \
                fund_available = COALESCE($8, fund_available), \
                contract_value = COALESCE($9, contract_value), \
                description = COALESCE($10, description), \
                status = COALESCE($11, status), \
                start_date = CASE WHEN $12 THEN $13 ELSE start_date END, \
                completion_date = CASE WHEN $14 THEN $15 ELSE completion_date END, \
                is_draft = COALESCE($16, is_draft) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(input.pid)
            .bind(&input.project_name)
            .bind(&input.ministry_dept)
            .bind(&input.lead_programme_manager)
            .bind(&input.programme_manager)
            .bind(input.project_type.map(|t| t.as_str()))
            .bind(input.fund_available.map(|f| f.as_str()))
            .bind(&input.contract_value)
            .bind(&input.description)
            .bind(&input.status)
            .bind(input.start_date.is_some())
            .bind(input.start_date.flatten())
            .bind(input.completion_date.is_some())
            .bind(input.completion_date.flatten())
            .bind(input.is_draft)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a project by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Fetch one page of the filtered, sorted listing together with the
    /// full filtered count.
    ///
    /// Both statements run in one read-only snapshot so `total` agrees with
    /// the returned rows under concurrent writes. A page past the end is
    /// simply empty.
    pub async fn list_page(
        pool: &PgPool,
        filter: &ProjectFilter,
        sort: &Sort,
        page: &PageRequest,
    ) -> Result<ProjectPage, sqlx::Error> {
        let (where_sql, bind_idx) = where_clause(filter);

        let mut tx = pool.begin().await?;
        sqlx::query(SNAPSHOT_READ).execute(&mut *tx).await?;

        let count_query = format!("SELECT COUNT(*) FROM projects {where_sql}");
        let total: i64 = bind_filter!(sqlx::query_scalar::<_, i64>(&count_query), filter)
            .fetch_one(&mut *tx)
            .await?;

        let page_query = format!(
            "SELECT {COLUMNS} FROM projects {where_sql} \
             ORDER BY {order_by} \
             LIMIT ${bind_idx} OFFSET ${next_idx}",
            order_by = sort.order_by_sql(),
            next_idx = bind_idx + 1,
        );
        let data = bind_filter!(sqlx::query_as::<_, Project>(&page_query), filter)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(total, rows = data.len(), page = page.page, "Listed projects");

        Ok(ProjectPage {
            data,
            meta: PageMeta::new(total, page),
        })
    }

    /// Fetch every row matching `filter`, sorted, without pagination.
    ///
    /// Used by the report exports.
    pub async fn list_all(
        pool: &PgPool,
        filter: &ProjectFilter,
        sort: &Sort,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let (where_sql, _) = where_clause(filter);
        let query = format!(
            "SELECT {COLUMNS} FROM projects {where_sql} ORDER BY {}",
            sort.order_by_sql()
        );
        bind_filter!(sqlx::query_as::<_, Project>(&query), filter)
            .fetch_all(pool)
            .await
    }
}

/// Build the dynamic `WHERE` clause for `filter`.
///
/// Returns the clause (empty when the filter is empty) and the next free
/// bind index. The search term takes one parameter that is OR-ed across
/// [`SEARCH_COLUMNS`]; the constraint groups are AND-ed. Values are bound
/// by [`bind_filter!`] in the same order, never interpolated.
fn where_clause(filter: &ProjectFilter) -> (String, u32) {
    let mut conditions = Vec::new();
    let mut bind_idx = 1u32;

    if filter.search.is_some() {
        let matches: Vec<String> = SEARCH_COLUMNS
            .iter()
            .map(|column| format!("{column} ILIKE ${bind_idx}"))
            .collect();
        conditions.push(format!("({})", matches.join(" OR ")));
        bind_idx += 1;
    }
    if filter.project_type.is_some() {
        conditions.push(format!("project_type = ${bind_idx}"));
        bind_idx += 1;
    }
    if filter.fund_available.is_some() {
        conditions.push(format!("fund_available = ${bind_idx}"));
        bind_idx += 1;
    }
    if filter.draft.required_value().is_some() {
        conditions.push(format!("is_draft = ${bind_idx}"));
        bind_idx += 1;
    }

    let where_sql = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };
    (where_sql, bind_idx)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
