//! Startup catalog: the built-in activity list, or one loaded from a JSON file.

use std::path::Path;

use mergington::data::{Activities, Activity};
use mergington::errors::{CatalogError, Report, WrapErr};
use mergington::serde_json;

/// The activities offered when no catalog file is configured.
pub fn seed() -> Activities {
    Activities::from([
        (
            "Chess Club".to_string(),
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        ),
        (
            "Programming Class".to_string(),
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        ),
        (
            "Gym Class".to_string(),
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
        ),
        (
            "Soccer Team".to_string(),
            Activity::new(
                "Join the school soccer team and compete in matches",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                22,
            )
            .with_participants(["liam@mergington.edu", "noah@mergington.edu"]),
        ),
        (
            "Basketball Team".to_string(),
            Activity::new(
                "Practice and play basketball with the school team",
                "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
                15,
            )
            .with_participants(["ava@mergington.edu", "mia@mergington.edu"]),
        ),
        (
            "Art Club".to_string(),
            Activity::new(
                "Explore your creativity through painting and drawing",
                "Thursdays, 3:30 PM - 5:00 PM",
                15,
            )
            .with_participants(["amelia@mergington.edu", "harper@mergington.edu"]),
        ),
        (
            "Drama Club".to_string(),
            Activity::new(
                "Act, direct, and produce plays and performances",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                20,
            )
            .with_participants(["ella@mergington.edu", "scarlett@mergington.edu"]),
        ),
        (
            "Math Club".to_string(),
            Activity::new(
                "Solve challenging problems and participate in math competitions",
                "Tuesdays, 3:30 PM - 4:30 PM",
                10,
            )
            .with_participants(["james@mergington.edu", "benjamin@mergington.edu"]),
        ),
        (
            "Debate Team".to_string(),
            Activity::new(
                "Develop public speaking and argumentation skills",
                "Fridays, 4:00 PM - 5:30 PM",
                12,
            )
            .with_participants(["charlotte@mergington.edu", "henry@mergington.edu"]),
        ),
    ])
}

/// Parses and validates a catalog in the same JSON shape `GET /activities` returns.
pub fn parse(json: &str) -> Result<Activities, CatalogError> {
    let activities: Activities = serde_json::from_str(json)?;
    validate(&activities)?;
    Ok(activities)
}

/// Reads a catalog file from disk.
pub fn load(path: &Path) -> Result<Activities, Report> {
    let json = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read catalog file {}", path.display()))?;
    parse(&json).wrap_err_with(|| format!("Invalid catalog file {}", path.display()))
}

fn validate(activities: &Activities) -> Result<(), CatalogError> {
    if activities.is_empty() {
        return Err(CatalogError::Empty);
    }

    for (name, activity) in activities {
        if name.trim().is_empty() {
            return Err(CatalogError::EmptyName(name.clone()));
        }
        if activity.description.trim().is_empty() {
            return Err(CatalogError::EmptyDescription(name.clone()));
        }
        if activity.schedule.trim().is_empty() {
            return Err(CatalogError::EmptySchedule(name.clone()));
        }
        if activity.max_participants == 0 {
            return Err(CatalogError::ZeroCapacity(name.clone()));
        }
        if activity.participants.len() > activity.max_participants as usize {
            return Err(CatalogError::OverCapacity {
                activity: name.clone(),
                participants: activity.participants.len(),
                max_participants: activity.max_participants,
            });
        }
    }

    Ok(())
}
