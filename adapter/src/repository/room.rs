use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::RoomId,
    room::{event::CreateRoom, Room},
};
use kernel::repository::room::RoomRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::room::RoomRow, ConnectionPool};

#[derive(new)]
pub struct RoomRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl RoomRepository for RoomRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<Room>> {
        let rows: Vec<RoomRow> = sqlx::query_as(
            r#"
                SELECT
                    id, name, room_type, description, price,
                    max_occupancy, size, view, amenities, image_url, available
                FROM rooms
                ORDER BY id
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Room::from).collect())
    }

    async fn find_by_id(&self, room_id: RoomId) -> AppResult<Option<Room>> {
        let row: Option<RoomRow> = sqlx::query_as(
            r#"
                SELECT
                    id, name, room_type, description, price,
                    max_occupancy, size, view, amenities, image_url, available
                FROM rooms
                WHERE id = $1
            "#,
        )
        .bind(room_id.raw())
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Room::from))
    }

    async fn find_by_type(&self, room_type: &str) -> AppResult<Vec<Room>> {
        let rows: Vec<RoomRow> = sqlx::query_as(
            r#"
                SELECT
                    id, name, room_type, description, price,
                    max_occupancy, size, view, amenities, image_url, available
                FROM rooms
                WHERE room_type = $1
                ORDER BY id
            "#,
        )
        .bind(room_type)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Room::from).collect())
    }

    async fn create(&self, event: CreateRoom) -> AppResult<Room> {
        let row: RoomRow = sqlx::query_as(
            r#"
                INSERT INTO rooms
                    (name, room_type, description, price, max_occupancy,
                     size, view, amenities, image_url, available)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
                RETURNING
                    id, name, room_type, description, price,
                    max_occupancy, size, view, amenities, image_url, available
            "#,
        )
        .bind(&event.name)
        .bind(event.room_type.to_string())
        .bind(&event.description)
        .bind(&event.price)
        .bind(event.max_occupancy)
        .bind(&event.size)
        .bind(&event.view)
        .bind(&event.amenities)
        .bind(&event.image_url)
        .bind(event.available.unwrap_or(true))
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(Room::from(row))
    }
}
