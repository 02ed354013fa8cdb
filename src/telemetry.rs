use std::cmp::Ordering;

pub const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
                LogLevel::Warn => 2,
                LogLevel::Error => 3,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" => Some(Self::Warn),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    fn as_log_level(self) -> log::Level {
        match self {
            Self::Debug => log::Level::Debug,
            Self::Info => log::Level::Info,
            Self::Warn => log::Level::Warn,
            Self::Error => log::Level::Error,
        }
    }
}

/// Installs the browser console logger and the panic hook.
///
/// The logger accepts everything; `set_level` narrows it once the site
/// configuration has been read.
#[cfg(target_arch = "wasm32")]
pub fn init() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).ok();
    set_level(DEFAULT_LOG_LEVEL);
}

pub fn set_level(level: LogLevel) {
    log::set_max_level(level.as_log_level().to_level_filter());
}

fn event_payload(level: LogLevel, event: &str, fields: serde_json::Value) -> serde_json::Value {
    let mut payload = serde_json::Map::new();
    payload.insert("level".to_string(), serde_json::Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), serde_json::Value::String(event.to_string()));

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    serde_json::Value::Object(payload)
}

/// Emits one structured JSON line through the `log` facade.
pub fn log_event(level: LogLevel, event: &str, fields: serde_json::Value) {
    log::log!(
        level.as_log_level(),
        "{}",
        event_payload(level, event, fields)
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn levels_are_ordered_by_severity() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
    }

    #[test]
    fn parse_is_case_insensitive_and_rejects_unknown_levels() {
        assert_eq!(LogLevel::parse(" WARN "), Some(LogLevel::Warn));
        assert_eq!(LogLevel::parse("debug"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse("trace"), None);
    }

    #[test]
    fn payload_merges_fields_after_level_and_event() {
        let payload = event_payload(
            LogLevel::Info,
            "installation_selected",
            json!({ "id": 4, "name": "Emote Arcade" }),
        );

        assert_eq!(payload["level"], "info");
        assert_eq!(payload["event"], "installation_selected");
        assert_eq!(payload["id"], 4);
        assert_eq!(payload["name"], "Emote Arcade");
    }

    #[test]
    fn set_level_narrows_the_log_facade() {
        set_level(LogLevel::Warn);
        assert_eq!(log::max_level(), log::LevelFilter::Warn);
        set_level(DEFAULT_LOG_LEVEL);
        assert_eq!(log::max_level(), log::LevelFilter::Info);
    }

    #[test]
    fn non_object_fields_are_dropped() {
        let payload = event_payload(LogLevel::Warn, "startup", json!("ignored"));
        let object = payload.as_object().expect("payload is an object");
        assert_eq!(object.len(), 2);
    }
}
