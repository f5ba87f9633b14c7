use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::memory::{
    booking::InMemoryBookingRepository, contact::InMemoryContactRepository,
    health::InMemoryHealthCheckRepository, room::InMemoryRoomRepository,
    user::InMemoryUserRepository,
};
use adapter::repository::{
    booking::BookingRepositoryImpl, contact::ContactRepositoryImpl,
    health::HealthCheckRepositoryImpl, room::RoomRepositoryImpl, user::UserRepositoryImpl,
};
use kernel::repository::{
    booking::BookingRepository, contact::ContactRepository, health::HealthCheckRepository,
    room::RoomRepository, user::UserRepository,
};

/// Holds every repository behind its trait and hands clones to handlers.
/// Storage is owned here: handlers never touch a pool or a map directly.
#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    user_repository: Arc<dyn UserRepository>,
    room_repository: Arc<dyn RoomRepository>,
    booking_repository: Arc<dyn BookingRepository>,
    contact_repository: Arc<dyn ContactRepository>,
}

impl AppRegistry {
    /// Wires the persistent backing over a database pool.
    pub fn new(pool: ConnectionPool) -> Self {
        Self {
            health_check_repository: Arc::new(HealthCheckRepositoryImpl::new(pool.clone())),
            user_repository: Arc::new(UserRepositoryImpl::new(pool.clone())),
            room_repository: Arc::new(RoomRepositoryImpl::new(pool.clone())),
            booking_repository: Arc::new(BookingRepositoryImpl::new(pool.clone())),
            contact_repository: Arc::new(ContactRepositoryImpl::new(pool)),
        }
    }

    /// Wires the transient backing: empty stores plus the fixture room
    /// catalog. Every call builds an isolated instance.
    pub fn in_memory() -> Self {
        Self {
            health_check_repository: Arc::new(InMemoryHealthCheckRepository),
            user_repository: Arc::new(InMemoryUserRepository::new()),
            room_repository: Arc::new(InMemoryRoomRepository::new()),
            booking_repository: Arc::new(InMemoryBookingRepository::new()),
            contact_repository: Arc::new(InMemoryContactRepository::new()),
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    pub fn room_repository(&self) -> Arc<dyn RoomRepository> {
        self.room_repository.clone()
    }

    pub fn booking_repository(&self) -> Arc<dyn BookingRepository> {
        self.booking_repository.clone()
    }

    pub fn contact_repository(&self) -> Arc<dyn ContactRepository> {
        self.contact_repository.clone()
    }
}
