//! Rendering of [`ListingPlan`]s into a single Postgres statement.
//!
//! Each listable table describes its columns once in a [`ListingSource`];
//! [`render`] walks the plan's stages and emits
//! `SELECT .. FROM .. JOIN users .. WHERE .. ORDER BY .. LIMIT .. OFFSET ..`
//! with every user-supplied value bound as a parameter.

use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use vidhub_core::listing::{like_pattern, ListingPlan, Predicate, Scope, SortField, Stage};

/// Owner summary columns, aliased to match
/// [`OwnerSummary`](crate::models::owner::OwnerSummary).
pub const OWNER_SUMMARY_COLUMNS: &str = "\
    u.id AS owner_id, u.username AS owner_username, \
    u.full_name AS owner_full_name, u.avatar AS owner_avatar";

/// Column mapping for one listable table.
///
/// All column names are static and qualified with the table alias used in
/// `from`; nothing user-supplied is ever pushed as SQL text.
#[derive(Debug, Clone, Copy)]
pub struct ListingSource {
    /// `FROM` target including alias, e.g. `"videos v"`.
    pub from: &'static str,
    /// Record columns selected in addition to the owner summary.
    pub columns: &'static str,
    pub id_column: &'static str,
    pub owner_column: &'static str,
    pub created_at_column: &'static str,
    pub title_column: Option<&'static str>,
    pub parent_video_column: Option<&'static str>,
    pub published_column: Option<&'static str>,
    /// Columns searched by a free-text predicate (OR-ed).
    pub text_columns: &'static [&'static str],
}

impl ListingSource {
    fn scope_column(&self, scope: Scope) -> Option<&'static str> {
        match scope {
            Scope::ParentVideo(_) => self.parent_video_column,
            Scope::Owner(_) => Some(self.owner_column),
            Scope::Published => self.published_column,
        }
    }

    fn sort_column(&self, field: SortField) -> &'static str {
        match field {
            SortField::CreatedAt => self.created_at_column,
            SortField::Title => self.title_column.unwrap_or(self.created_at_column),
        }
    }
}

/// Render a plan against a source. Stages are emitted in plan order.
pub fn render(plan: &ListingPlan, source: &ListingSource) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new("SELECT ");
    qb.push(source.columns);
    if plan.joins_owner() {
        qb.push(", ").push(OWNER_SUMMARY_COLUMNS);
    }
    qb.push(" FROM ").push(source.from);
    if plan.joins_owner() {
        qb.push(" JOIN users u ON u.id = ")
            .push(source.owner_column);
    }

    for stage in plan.stages() {
        match stage {
            Stage::Filter(predicates) => {
                qb.push(" WHERE ");
                for (i, predicate) in predicates.iter().enumerate() {
                    if i > 0 {
                        qb.push(" AND ");
                    }
                    push_predicate(&mut qb, predicate, source);
                }
            }
            // Rendered with FROM: SQL wants the join before WHERE, and an
            // inner join on a required FK keeps exactly the filtered rows.
            Stage::JoinOwner => {}
            Stage::Sort(sort) => {
                let dir = sort.direction.as_sql();
                qb.push(" ORDER BY ")
                    .push(source.sort_column(sort.field))
                    .push(" ")
                    .push(dir)
                    .push(", ")
                    .push(source.id_column)
                    .push(" ")
                    .push(dir);
            }
            Stage::Paginate(page) => {
                qb.push(" LIMIT ")
                    .push_bind(page.limit)
                    .push(" OFFSET ")
                    .push_bind(page.offset());
            }
        }
    }

    qb
}

/// Execute a plan and map each row into `T`.
pub async fn fetch_listing<T>(
    pool: &PgPool,
    plan: &ListingPlan,
    source: &ListingSource,
) -> Result<Vec<T>, sqlx::Error>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    let mut qb = render(plan, source);
    tracing::debug!(sql = qb.sql(), "Executing listing plan");
    qb.build_query_as::<T>().fetch_all(pool).await
}

fn push_predicate(
    qb: &mut QueryBuilder<'static, Postgres>,
    predicate: &Predicate,
    source: &ListingSource,
) {
    match predicate {
        Predicate::Scope(scope) => match (source.scope_column(*scope), scope) {
            (Some(col), Scope::ParentVideo(id) | Scope::Owner(id)) => {
                qb.push(col).push(" = ").push_bind(*id);
            }
            (Some(col), Scope::Published) => {
                qb.push(col).push(" = TRUE");
            }
            (None, _) => {
                // A scope the table cannot express must narrow, never widen.
                tracing::warn!(?scope, from = source.from, "Unsupported listing scope");
                qb.push("FALSE");
            }
        },
        Predicate::OwnerEq(id) => {
            qb.push(source.owner_column).push(" = ").push_bind(*id);
        }
        Predicate::TextContains(text) => {
            if source.text_columns.is_empty() {
                qb.push("FALSE");
                return;
            }
            let pattern = like_pattern(text);
            qb.push("(");
            for (i, col) in source.text_columns.iter().enumerate() {
                if i > 0 {
                    qb.push(" OR ");
                }
                qb.push(*col).push(" ILIKE ").push_bind(pattern.clone());
            }
            qb.push(")");
        }
    }
}

#[cfg(test)]
mod tests {
    use vidhub_core::listing::{
        build_feed_plan, build_listing_plan, FilterSpec, ListingParams, PageSpec, SortDirection,
        SortSpec,
    };

    use super::*;

    const SOURCE: ListingSource = ListingSource {
        from: "videos v",
        columns: "v.id, v.title",
        id_column: "v.id",
        owner_column: "v.owner_id",
        created_at_column: "v.created_at",
        title_column: Some("v.title"),
        parent_video_column: None,
        published_column: Some("v.is_published"),
        text_columns: &["v.title", "v.description"],
    };

    fn sql(plan: &ListingPlan) -> String {
        render(plan, &SOURCE).sql().to_string()
    }

    #[test]
    fn identity_plan_is_plain_select() {
        assert_eq!(
            sql(&ListingPlan::new()),
            "SELECT v.id, v.title FROM videos v"
        );
    }

    #[test]
    fn full_plan_renders_stages_in_order() {
        let params = ListingParams {
            page: Some("3".into()),
            limit: Some("10".into()),
            query: Some("cat".into()),
            sort_by: Some("title".into()),
            sort_type: Some("asc".into()),
            user_id: Some("5".into()),
        };
        let rendered = sql(&build_listing_plan(&params, Some(Scope::Published)));

        assert_eq!(
            rendered,
            format!(
                "SELECT v.id, v.title, {OWNER_SUMMARY_COLUMNS} FROM videos v \
                 JOIN users u ON u.id = v.owner_id \
                 WHERE v.is_published = TRUE AND v.owner_id = $1 \
                 AND (v.title ILIKE $2 OR v.description ILIKE $3) \
                 ORDER BY v.title ASC, v.id ASC LIMIT $4 OFFSET $5"
            )
        );
    }

    #[test]
    fn default_sort_is_newest_first_with_id_tiebreak() {
        let rendered = sql(&ListingPlan::new().sort(SortSpec::default()));
        assert!(rendered.ends_with("ORDER BY v.created_at DESC, v.id DESC"));
    }

    #[test]
    fn unsupported_scope_narrows_to_nothing() {
        let plan = build_feed_plan(&ListingParams::default(), Scope::ParentVideo(1));
        let rendered = sql(&plan);
        assert!(rendered.contains("WHERE FALSE"), "{rendered}");
    }

    #[test]
    fn title_sort_falls_back_when_source_has_no_title() {
        let source = ListingSource {
            title_column: None,
            ..SOURCE
        };
        let plan = ListingPlan::new().sort(SortSpec {
            field: SortField::Title,
            direction: SortDirection::Asc,
        });
        let rendered = render(&plan, &source).sql().to_string();
        assert!(rendered.ends_with("ORDER BY v.created_at ASC, v.id ASC"));
    }

    #[test]
    fn user_text_is_never_inlined() {
        let filter = FilterSpec {
            owner_id: None,
            text: Some("'; DROP TABLE videos; --".into()),
        };
        let plan = ListingPlan::new()
            .filter(&filter)
            .paginate(PageSpec::default());
        assert!(!sql(&plan).contains("DROP"));
    }
}
