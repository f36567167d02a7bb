use std::sync::Arc;

use tracing::instrument;

use crate::data::user_repository::UserRepository;
use crate::domain::{error::DomainError, user::User};

#[derive(Clone)]
pub struct UserService<R: UserRepository + 'static> {
    repo: Arc<R>,
}

impl<R> UserService<R>
where
    R: UserRepository + 'static,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Inputs are stored verbatim; creation never rejects a value.
    #[instrument(skip(self))]
    pub fn create_user(&self, name: String, email: String) -> Result<User, DomainError> {
        self.repo.create(name, email)
    }

    /// Unknown ids are `Ok(None)`, a normal outcome rather than an error.
    pub fn get_user(&self, id: u64) -> Result<Option<User>, DomainError> {
        self.repo.find_by_id(id)
    }

    pub fn list_users(&self) -> Result<Vec<User>, DomainError> {
        self.repo.list()
    }

    /// Renders the current records as a pretty-printed JSON array, two-space
    /// indented, in insertion order. A pure read of the state at call time.
    pub fn export_users(&self) -> Result<String, DomainError> {
        let users = self.repo.list()?;
        Ok(serde_json::to_string_pretty(&users)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::user_repository::InMemoryUserRepository;
    use crate::infrastructure::clock::FixedClock;
    use chrono::{TimeZone, Utc};

    fn service_at_fixed_instant() -> UserService<InMemoryUserRepository> {
        let instant = Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap();
        UserService::new(Arc::new(InMemoryUserRepository::with_clock(Arc::new(
            FixedClock(instant),
        ))))
    }

    #[test]
    fn export_of_empty_store_is_an_empty_array() {
        let service = UserService::new(Arc::new(InMemoryUserRepository::new()));
        assert_eq!(service.export_users().unwrap(), "[]");
    }

    #[test]
    fn export_layout_is_stable() {
        let service = service_at_fixed_instant();
        service
            .create_user("Ann".into(), "a@b.com".into())
            .unwrap();

        let expected = "[\n  {\n    \"id\": 1,\n    \"name\": \"Ann\",\n    \"email\": \"a@b.com\",\n    \"created_at\": \"2026-01-01T12:00:00Z\"\n  }\n]";
        assert_eq!(service.export_users().unwrap(), expected);
    }

    #[test]
    fn export_keeps_insertion_order() {
        let service = service_at_fixed_instant();
        service
            .create_user("Ann".into(), "a@b.com".into())
            .unwrap();
        service
            .create_user("Bob".into(), "b@c.org".into())
            .unwrap();

        let exported: serde_json::Value =
            serde_json::from_str(&service.export_users().unwrap()).unwrap();
        let entries = exported.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["id"], 1);
        assert_eq!(entries[0]["name"], "Ann");
        assert_eq!(entries[1]["id"], 2);
        assert_eq!(entries[1]["email"], "b@c.org");
    }

    #[test]
    fn reads_are_idempotent_between_writes() {
        let service = service_at_fixed_instant();
        service
            .create_user("Ann".into(), "a@b.com".into())
            .unwrap();

        let first_export = service.export_users().unwrap();
        let second_export = service.export_users().unwrap();
        assert_eq!(first_export, second_export);

        let first_list = service.list_users().unwrap();
        let second_list = service.list_users().unwrap();
        assert_eq!(first_list.len(), second_list.len());
        assert_eq!(first_list[0].id, second_list[0].id);
    }

    #[test]
    fn get_user_round_trips_every_created_id() {
        let service = service_at_fixed_instant();
        for n in 1..=4u64 {
            service
                .create_user(format!("user{}", n), format!("u{}@test.dev", n))
                .unwrap();
        }

        for n in 1..=4u64 {
            let user = service.get_user(n).unwrap().unwrap();
            assert_eq!(user.id, n);
            assert_eq!(user.name, format!("user{}", n));
        }
        assert!(service.get_user(5).unwrap().is_none());
    }
}
