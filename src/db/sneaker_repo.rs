use chrono::NaiveDate;
use sqlx::PgPool;

use crate::models::{DropStatus, NewSneaker, Sneaker};

/// Fetch the whole catalog, soonest drop first.
pub async fn get_all_sneakers(pool: &PgPool) -> anyhow::Result<Vec<Sneaker>> {
    let sneakers = sqlx::query_as::<_, Sneaker>(
        "SELECT * FROM sneakers ORDER BY drop_date ASC, name ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(sneakers)
}

/// Fetch catalog entries that have (or have not yet) dropped as of `today`.
pub async fn get_sneakers_by_status(
    pool: &PgPool,
    status: DropStatus,
    today: NaiveDate,
) -> anyhow::Result<Vec<Sneaker>> {
    let query = match status {
        DropStatus::Released => {
            "SELECT * FROM sneakers WHERE drop_date <= $1 ORDER BY drop_date DESC, name ASC"
        }
        DropStatus::Upcoming => {
            "SELECT * FROM sneakers WHERE drop_date > $1 ORDER BY drop_date ASC, name ASC"
        }
    };

    let sneakers = sqlx::query_as::<_, Sneaker>(query)
        .bind(today)
        .fetch_all(pool)
        .await?;

    Ok(sneakers)
}

/// Fetch a single catalog entry.
pub async fn get_sneaker_by_id(pool: &PgPool, id: &str) -> anyhow::Result<Option<Sneaker>> {
    let sneaker = sqlx::query_as::<_, Sneaker>("SELECT * FROM sneakers WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(sneaker)
}

/// Fetch several catalog entries at once; missing ids are simply absent.
pub async fn get_sneakers_by_ids(pool: &PgPool, ids: &[String]) -> anyhow::Result<Vec<Sneaker>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let sneakers = sqlx::query_as::<_, Sneaker>("SELECT * FROM sneakers WHERE id = ANY($1)")
        .bind(ids)
        .fetch_all(pool)
        .await?;

    Ok(sneakers)
}

/// Insert a validated catalog entry under `id`.
pub async fn insert_sneaker(pool: &PgPool, id: &str, new: &NewSneaker) -> anyhow::Result<Sneaker> {
    let sneaker = sqlx::query_as::<_, Sneaker>(
        r#"
        INSERT INTO sneakers
            (id, name, brand, image, description, retail_price, resale_price,
             hype_score, is_raffle, drop_date)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(&new.name)
    .bind(&new.brand)
    .bind(&new.image)
    .bind(&new.description)
    .bind(new.retail_price)
    .bind(new.resale_price)
    .bind(new.hype_score)
    .bind(new.is_raffle)
    .bind(new.drop_date)
    .fetch_one(pool)
    .await?;

    Ok(sneaker)
}

/// Replace the editable fields of an existing entry.
pub async fn update_sneaker(
    pool: &PgPool,
    id: &str,
    new: &NewSneaker,
) -> anyhow::Result<Option<Sneaker>> {
    let sneaker = sqlx::query_as::<_, Sneaker>(
        r#"
        UPDATE sneakers
        SET name = $2, brand = $3, image = $4, description = $5,
            retail_price = $6, resale_price = $7, hype_score = $8,
            is_raffle = $9, drop_date = $10, updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(&new.name)
    .bind(&new.brand)
    .bind(&new.image)
    .bind(&new.description)
    .bind(new.retail_price)
    .bind(new.resale_price)
    .bind(new.hype_score)
    .bind(new.is_raffle)
    .bind(new.drop_date)
    .fetch_optional(pool)
    .await?;

    Ok(sneaker)
}

/// Delete an entry. Returns false if it did not exist.
pub async fn delete_sneaker(pool: &PgPool, id: &str) -> anyhow::Result<bool> {
    let result = sqlx::query("DELETE FROM sneakers WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Count catalog entries.
pub async fn count_sneakers(pool: &PgPool) -> anyhow::Result<i64> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM sneakers")
        .fetch_one(pool)
        .await?;

    Ok(row.0)
}
