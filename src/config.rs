use std::env;

/// Default bookable resources, matching the seed list the dashboard shipped
/// with. Overridable through RESOURCES as a comma-separated list.
const DEFAULT_RESOURCES: [&str; 5] = [
    "Meeting Room",
    "Conference Room",
    "Training Room",
    "Collaboration Space",
    "Event Space",
];

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub upstream_url: String,
    pub resources: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            upstream_url: env::var("UPSTREAM_URL")
                .unwrap_or_else(|_| "http://localhost:4000".to_string()),
            resources: env::var("RESOURCES")
                .map(|v| parse_resources(&v))
                .unwrap_or_else(|_| {
                    DEFAULT_RESOURCES.iter().map(|r| r.to_string()).collect()
                }),
        }
    }
}

fn parse_resources(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resources_trims_and_drops_empty() {
        let parsed = parse_resources("Room A, Room B,,  Device X ");
        assert_eq!(parsed, vec!["Room A", "Room B", "Device X"]);
    }
}
