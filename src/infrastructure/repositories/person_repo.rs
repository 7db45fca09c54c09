//! Person repository backing booking registration

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::models::{BookingCreateDto, CrmPerson};
use crate::shared::errors::Result;

#[derive(Debug, Default)]
struct PersonStore {
    people: Vec<CrmPerson>,
    last_id: u64,
}

/// Shared handle; clones point at the same store
#[derive(Debug, Clone, Default)]
pub struct PersonRepository {
    store: Arc<RwLock<PersonStore>>,
}

impl PersonRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a booking and store its person under the next id (first id is 1)
    pub async fn register(&self, booking: BookingCreateDto) -> Result<CrmPerson> {
        booking.validate()?;

        let mut store = self.store.write().await;
        store.last_id += 1;

        let person = CrmPerson {
            id: store.last_id,
            email: booking.email,
            fullname: booking.fullname,
            first: booking.first,
            infix: booking.infix,
            last: booking.last,
            registered_at: Utc::now(),
        };
        store.people.push(person.clone());

        Ok(person)
    }

    pub async fn get(&self, id: u64) -> Option<CrmPerson> {
        self.store.read().await.people.iter().find(|p| p.id == id).cloned()
    }

    pub async fn count(&self) -> usize {
        self.store.read().await.people.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::errors::ShellError;

    fn booking(email: &str) -> BookingCreateDto {
        BookingCreateDto {
            email: email.to_string(),
            fullname: "Anna Jansen".to_string(),
            first: Some("Anna".to_string()),
            infix: None,
            last: Some("Jansen".to_string()),
            location_id: Some(3),
            activity_id: None,
            package_id: None,
        }
    }

    #[tokio::test]
    async fn test_register_assigns_sequential_ids() {
        let repo = PersonRepository::new();

        let first = repo.register(booking("anna@example.nl")).await.unwrap();
        let second = repo.register(booking("piet@example.nl")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(repo.count().await, 2);
        assert_eq!(repo.get(2).await.unwrap().email, "piet@example.nl");
        assert!(repo.get(3).await.is_none());
    }

    #[tokio::test]
    async fn test_invalid_booking_is_not_stored() {
        let repo = PersonRepository::new();

        let err = repo.register(booking("not-an-email")).await.unwrap_err();
        assert!(matches!(err, ShellError::InvalidBooking(_)));
        assert_eq!(repo.count().await, 0);

        // A rejected booking does not consume an id
        let person = repo.register(booking("anna@example.nl")).await.unwrap();
        assert_eq!(person.id, 1);
    }

    #[tokio::test]
    async fn test_clones_share_the_store() {
        let repo = PersonRepository::new();
        let handle = repo.clone();

        handle.register(booking("anna@example.nl")).await.unwrap();
        assert_eq!(repo.count().await, 1);
    }
}
