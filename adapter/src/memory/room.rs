use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use kernel::model::{
    id::RoomId,
    room::{event::CreateRoom, Room, RoomType},
};
use kernel::repository::room::RoomRepository;
use shared::error::AppResult;

use super::lock;

pub struct InMemoryRoomRepository {
    inner: Mutex<RoomStore>,
}

struct RoomStore {
    rooms: BTreeMap<RoomId, Room>,
    next_id: i64,
}

impl InMemoryRoomRepository {
    /// A fresh store seeded with the sample catalog.
    pub fn new() -> Self {
        let repo = Self {
            inner: Mutex::new(RoomStore {
                rooms: BTreeMap::new(),
                next_id: 1,
            }),
        };
        if let Ok(mut store) = repo.inner.lock() {
            for event in fixture_rooms() {
                store.insert(event);
            }
        }
        repo
    }
}

impl Default for InMemoryRoomRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl RoomStore {
    fn insert(&mut self, event: CreateRoom) -> Room {
        let id = RoomId::new(self.next_id);
        self.next_id += 1;
        let room = Room {
            id,
            name: event.name,
            room_type: event.room_type,
            description: event.description,
            price: event.price,
            max_occupancy: event.max_occupancy,
            size: event.size,
            view: event.view,
            amenities: event.amenities,
            image_url: event.image_url,
            available: event.available.unwrap_or(true),
        };
        self.rooms.insert(id, room.clone());
        room
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn find_all(&self) -> AppResult<Vec<Room>> {
        let store = lock(&self.inner)?;
        Ok(store.rooms.values().cloned().collect())
    }

    async fn find_by_id(&self, room_id: RoomId) -> AppResult<Option<Room>> {
        let store = lock(&self.inner)?;
        Ok(store.rooms.get(&room_id).cloned())
    }

    async fn find_by_type(&self, room_type: &str) -> AppResult<Vec<Room>> {
        let store = lock(&self.inner)?;
        Ok(store
            .rooms
            .values()
            .filter(|room| room.room_type.to_string() == room_type)
            .cloned()
            .collect())
    }

    async fn create(&self, event: CreateRoom) -> AppResult<Room> {
        let mut store = lock(&self.inner)?;
        Ok(store.insert(event))
    }
}

/// The sample catalog every transient instance starts with.
fn fixture_rooms() -> Vec<CreateRoom> {
    vec![
        CreateRoom::new(
            "Standard King Room".into(),
            RoomType::Standard,
            "Comfortable and elegant room with king-size bed, work desk, and city views. \
             Perfect for business travelers and couples."
                .into(),
            "159".into(),
            2,
            "350 sq ft".into(),
            "City View".into(),
            vec![
                "Free Wi-Fi".into(),
                "Air Conditioning".into(),
                "Minibar".into(),
                "Work Desk".into(),
            ],
            "https://images.unsplash.com/photo-1631049307264-da0ec9d70304?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600".into(),
            Some(true),
        ),
        CreateRoom::new(
            "Deluxe Ocean View".into(),
            RoomType::Deluxe,
            "Spacious deluxe room with breathtaking ocean views, private balcony, upgraded \
             amenities, and premium bathroom fixtures."
                .into(),
            "249".into(),
            2,
            "450 sq ft".into(),
            "Ocean View".into(),
            vec![
                "Free Wi-Fi".into(),
                "Balcony".into(),
                "Premium Minibar".into(),
                "Marble Bathroom".into(),
            ],
            "https://images.unsplash.com/photo-1582719478250-c89cae4dc85b?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600".into(),
            Some(true),
        ),
        CreateRoom::new(
            "Executive Suite".into(),
            RoomType::Suite,
            "Premium suite with separate living area, balcony, and concierge service. \
             Perfect for extended stays and special occasions."
                .into(),
            "499".into(),
            4,
            "800 sq ft".into(),
            "Panoramic View".into(),
            vec![
                "Living Area".into(),
                "Balcony".into(),
                "Concierge Service".into(),
                "Premium Amenities".into(),
            ],
            "https://images.unsplash.com/photo-1618773928121-c32242e63f39?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600".into(),
            Some(true),
        ),
        CreateRoom::new(
            "Presidential Suite".into(),
            RoomType::Suite,
            "Ultimate luxury experience with separate living area, dining space, and \
             panoramic views. Includes butler service and exclusive amenities."
                .into(),
            "899".into(),
            4,
            "1200 sq ft".into(),
            "Panoramic View".into(),
            vec![
                "Butler Service".into(),
                "Private Terrace".into(),
                "Dining Area".into(),
                "Premium Bar".into(),
            ],
            "https://images.unsplash.com/photo-1590490360182-c33d57733427?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600".into(),
            Some(true),
        ),
        CreateRoom::new(
            "Standard Queen Room".into(),
            RoomType::Standard,
            "Comfortable queen room with modern amenities and city views. Ideal for solo \
             travelers and couples."
                .into(),
            "129".into(),
            2,
            "320 sq ft".into(),
            "City View".into(),
            vec![
                "Free Wi-Fi".into(),
                "Air Conditioning".into(),
                "Minibar".into(),
                "Work Desk".into(),
            ],
            "https://images.unsplash.com/photo-1586611292717-f828b167408c?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600".into(),
            Some(true),
        ),
        CreateRoom::new(
            "Deluxe King Room".into(),
            RoomType::Deluxe,
            "Spacious king room with premium furnishings, marble bathroom, and city or \
             partial ocean views."
                .into(),
            "299".into(),
            2,
            "450 sq ft".into(),
            "City View".into(),
            vec![
                "King Bed".into(),
                "Marble Bath".into(),
                "Premium Wi-Fi".into(),
                "Seating Area".into(),
            ],
            "https://images.unsplash.com/photo-1631049307264-da0ec9d70304?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600".into(),
            Some(true),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeds_the_sample_catalog() -> anyhow::Result<()> {
        let repo = InMemoryRoomRepository::new();
        let rooms = repo.find_all().await?;
        assert_eq!(rooms.len(), 6);
        // Ids are assigned in seeding order starting at 1.
        assert_eq!(rooms[0].id, RoomId::new(1));
        assert_eq!(rooms[0].name, "Standard King Room");
        assert_eq!(rooms[0].price, "159");
        assert!(rooms.iter().all(|r| r.available));
        Ok(())
    }

    #[tokio::test]
    async fn find_by_type_matches_exactly() -> anyhow::Result<()> {
        let repo = InMemoryRoomRepository::new();

        let suites = repo.find_by_type("suite").await?;
        assert_eq!(suites.len(), 2);
        assert!(suites
            .iter()
            .all(|r| r.room_type == RoomType::Suite));

        // Case-sensitive: "Suite" is not "suite".
        assert!(repo.find_by_type("Suite").await?.is_empty());
        assert!(repo.find_by_type("penthouse").await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn create_assigns_increasing_ids_and_defaults_available() -> anyhow::Result<()> {
        let repo = InMemoryRoomRepository::new();

        let first = repo
            .create(CreateRoom::new(
                "Garden Bungalow".into(),
                RoomType::Other("bungalow".into()),
                "Detached bungalow by the garden.".into(),
                "189.50".into(),
                3,
                "400 sq ft".into(),
                "Garden View".into(),
                vec!["Patio".into()],
                "https://example.com/bungalow.jpg".into(),
                None,
            ))
            .await?;
        assert_eq!(first.id, RoomId::new(7));
        assert!(first.available);

        let second = repo
            .create(CreateRoom::new(
                "Attic Loft".into(),
                RoomType::Standard,
                "Cozy loft under the roof.".into(),
                "99".into(),
                1,
                "200 sq ft".into(),
                "Courtyard".into(),
                vec![],
                "https://example.com/loft.jpg".into(),
                Some(false),
            ))
            .await?;
        assert!(second.id > first.id);
        assert!(!second.available);

        let bungalows = repo.find_by_type("bungalow").await?;
        assert_eq!(bungalows.len(), 1);
        Ok(())
    }
}
