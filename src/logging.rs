use serde_json::{Map, Number, Value};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" => Some(Self::Warn),
            _ => None,
        }
    }
}

/// Writes one JSON object per event, dropping events below `min_level`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Logger {
    min_level: LogLevel,
}

impl Logger {
    pub const fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    pub fn event(self, level: LogLevel, event: &str, fields: Value) {
        if let Some(line) = self.render(level, event, fields, now_unix_millis()) {
            emit(&line.to_string());
        }
    }

    fn render(self, level: LogLevel, event: &str, fields: Value, ts: u64) -> Option<Value> {
        if level < self.min_level {
            return None;
        }

        let mut payload = Map::new();
        payload.insert("ts".to_string(), Value::Number(Number::from(ts)));
        payload.insert("level".to_string(), Value::String(level.as_str().to_string()));
        payload.insert("event".to_string(), Value::String(event.to_string()));

        if let Value::Object(extra) = fields {
            for (key, value) in extra {
                payload.insert(key, value);
            }
        }

        Some(Value::Object(payload))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(line: &str) {
    println!("{line}");
}

#[cfg(target_arch = "wasm32")]
fn emit(line: &str) {
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(line));
}

#[cfg(not(target_arch = "wasm32"))]
fn now_unix_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| u64::try_from(value.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}

#[cfg(target_arch = "wasm32")]
fn now_unix_millis() -> u64 {
    js_sys::Date::now() as u64
}
