use async_trait::async_trait;
use dashmap::DashMap;

use mergington::data::{Activities, Activity};
use mergington::errors::ActivityError;
use mergington::log;

/// A trait for reading the activity catalog and managing sign-ups.
///
/// The catalog itself is fixed at construction; only the participant list of
/// each activity changes. Implementations may keep the catalog in memory or
/// behind any other storage.
///
/// # Examples
///
/// ```rust
/// async fn example_usage<S: ActivityService>(service: &S) -> Result<(), S::Error> {
///     service.signup("Chess Club", "alex@mergington.edu").await?;
///
///     let activities = service.list().await?;
///     assert!(activities["Chess Club"].has_participant("alex@mergington.edu"));
///
///     service.unregister("Chess Club", "alex@mergington.edu").await?;
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait ActivityService {
    /// The error type returned by operations on this service.
    type Error;

    /// Returns every activity keyed by name, ordered by name.
    async fn list(&self) -> Result<Activities, Self::Error>;

    /// Retrieves a single activity by name.
    ///
    /// # Errors
    ///
    /// Returns an error if no activity has the given name.
    async fn get(&self, activity_name: &str) -> Result<Activity, Self::Error>;

    /// Appends `email` to the activity's participants.
    ///
    /// The same email may sign up more than once; no duplicate check is made.
    ///
    /// # Errors
    ///
    /// Returns an error if the activity doesn't exist or already holds
    /// `max_participants` entries.
    async fn signup(&self, activity_name: &str, email: &str) -> Result<(), Self::Error>;

    /// Removes the first occurrence of `email` from the activity's participants.
    ///
    /// # Errors
    ///
    /// Returns an error if the activity doesn't exist or `email` is not signed up for it.
    async fn unregister(&self, activity_name: &str, email: &str) -> Result<(), Self::Error>;
}

/// An in-memory implementation of the `ActivityService` trait.
///
/// Activities live in a `DashMap`. Sign-up and unregister hold the entry's
/// write guard across the check and the mutation, so two concurrent sign-ups
/// can never push an activity past its capacity.
pub struct ActivityServiceInMemory {
    activities: DashMap<String, Activity>,
}

impl ActivityServiceInMemory {
    pub fn new(catalog: Activities) -> Self {
        Self {
            activities: catalog.into_iter().collect(),
        }
    }

    pub fn activity_count(&self) -> usize {
        self.activities.len()
    }

    pub fn participant_count(&self) -> usize {
        self.activities
            .iter()
            .map(|entry| entry.value().participants.len())
            .sum()
    }
}

impl Default for ActivityServiceInMemory {
    fn default() -> Self {
        Self::new(super::catalog::seed())
    }
}

#[async_trait]
impl ActivityService for ActivityServiceInMemory {
    type Error = ActivityError;

    async fn list(&self) -> Result<Activities, Self::Error> {
        Ok(self
            .activities
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect())
    }

    async fn get(&self, activity_name: &str) -> Result<Activity, Self::Error> {
        self.activities
            .get(activity_name)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| ActivityError::NotFoundActivity(activity_name.to_string()))
    }

    async fn signup(&self, activity_name: &str, email: &str) -> Result<(), Self::Error> {
        let mut activity = self
            .activities
            .get_mut(activity_name)
            .ok_or_else(|| ActivityError::NotFoundActivity(activity_name.to_string()))?;

        if activity.is_full() {
            return Err(ActivityError::CapacityExceeded {
                activity: activity_name.to_string(),
                max_participants: activity.max_participants,
            });
        }

        if activity.has_participant(email) {
            log::debug!("{} is already signed up for {}", email, activity_name);
        }

        activity.add_participant(email.to_string());
        log::info!(
            "Signed up {} for {} ({} spots left)",
            email,
            activity_name,
            activity.spots_left()
        );
        Ok(())
    }

    async fn unregister(&self, activity_name: &str, email: &str) -> Result<(), Self::Error> {
        let mut activity = self
            .activities
            .get_mut(activity_name)
            .ok_or_else(|| ActivityError::NotFoundActivity(activity_name.to_string()))?;

        if !activity.remove_participant(email) {
            return Err(ActivityError::NotFoundParticipant {
                activity: activity_name.to_string(),
                email: email.to_string(),
            });
        }

        log::info!("Unregistered {} from {}", email, activity_name);
        Ok(())
    }
}
