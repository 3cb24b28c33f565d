//! SMS and voice dispatch through ModemManager's `mmcli`.
//!
//! Sending is a two-step conversation: create the SMS (or call) object,
//! pull its D-Bus path out of the JSON output, then send (or start) it.

use std::process::Command;

use serde_json::Value;

use crate::error::TelephonyError;
use crate::log;

const SMS_PATH_PREFIX: &str = "/org/freedesktop/ModemManager1/SMS/";
const CALL_PATH_PREFIX: &str = "/org/freedesktop/ModemManager1/Call/";

/// Outgoing telephony operations.
///
/// `send_sms` blocks until the modem answers, so callers run it on a
/// blocking task off the UI loop.
pub trait Telephony: Send + Sync {
    /// Send a text message to a number.
    fn send_sms(&self, number: &str, text: &str) -> Result<(), TelephonyError>;

    /// Start a voice call. Fire-and-forget: failures are logged, never
    /// surfaced to the screen.
    fn place_call(&self, number: &str);
}

/// `mmcli`-backed transport.
pub struct ModemManagerTelephony {
    modem: String,
}

impl ModemManagerTelephony {
    pub fn new(modem: impl Into<String>) -> Self {
        Self {
            modem: modem.into(),
        }
    }

    fn mmcli(&self, args: &[&str]) -> Result<String, TelephonyError> {
        log::log_command("mmcli", args);
        let output = Command::new("mmcli")
            .args(args)
            .output()
            .map_err(|e| TelephonyError::CommandFailed(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(TelephonyError::CommandFailed(stderr));
        }
        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }

    /// Find the first D-Bus object path with the given prefix anywhere in
    /// `mmcli -J` output. The JSON shape varies between mmcli versions,
    /// the path format does not.
    fn find_object_path(value: &Value, prefix: &str) -> Option<String> {
        match value {
            Value::String(s) if s.starts_with(prefix) => Some(s.clone()),
            Value::Object(map) => map.values().find_map(|v| Self::find_object_path(v, prefix)),
            Value::Array(items) => items.iter().find_map(|v| Self::find_object_path(v, prefix)),
            _ => None,
        }
    }

    /// Quote a value for a `key='value'` mmcli argument.
    fn quote_arg(value: &str) -> String {
        value.replace('\\', "\\\\").replace('\'', "\\'")
    }
}

impl Telephony for ModemManagerTelephony {
    fn send_sms(&self, number: &str, text: &str) -> Result<(), TelephonyError> {
        let create_arg = format!(
            "--messaging-create-sms=number='{}',text='{}'",
            Self::quote_arg(number),
            Self::quote_arg(text)
        );
        let created = self.mmcli(&["-m", &self.modem, &create_arg, "-J"])?;

        let value: Value = serde_json::from_str(&created).unwrap_or(Value::Null);
        let path = Self::find_object_path(&value, SMS_PATH_PREFIX).ok_or_else(|| {
            TelephonyError::SendFailed(format!(
                "no SMS path in mmcli output: {}",
                created.trim()
            ))
        })?;

        self.mmcli(&["-s", &path, "--send"])?;
        log::log_event(&format!("sms {} sent", path));
        Ok(())
    }

    fn place_call(&self, number: &str) {
        let create_arg = format!("--voice-create-call=number='{}'", Self::quote_arg(number));
        let result = self
            .mmcli(&["-m", &self.modem, &create_arg, "-J"])
            .and_then(|created| {
                let value: Value = serde_json::from_str(&created).unwrap_or(Value::Null);
                Self::find_object_path(&value, CALL_PATH_PREFIX).ok_or_else(|| {
                    TelephonyError::CommandFailed(format!(
                        "no call path in mmcli output: {}",
                        created.trim()
                    ))
                })
            })
            .and_then(|path| self.mmcli(&["-o", &path, "--start"]).map(|_| path));

        match result {
            Ok(path) => log::log_event(&format!("call {} started", path)),
            Err(e) => log::log(&format!("call to {} failed: {}", number, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_object_path_in_nested_output() {
        let json: Value = serde_json::from_str(
            r#"{"modem":{"messaging":{"created-sms":"/org/freedesktop/ModemManager1/SMS/4"}}}"#,
        )
        .unwrap();

        assert_eq!(
            ModemManagerTelephony::find_object_path(&json, SMS_PATH_PREFIX),
            Some("/org/freedesktop/ModemManager1/SMS/4".to_string())
        );
        assert_eq!(
            ModemManagerTelephony::find_object_path(&json, CALL_PATH_PREFIX),
            None
        );
    }

    #[test]
    fn test_find_object_path_in_array() {
        let json: Value =
            serde_json::from_str(r#"{"sms":["/org/freedesktop/ModemManager1/SMS/12"]}"#).unwrap();

        assert_eq!(
            ModemManagerTelephony::find_object_path(&json, SMS_PATH_PREFIX),
            Some("/org/freedesktop/ModemManager1/SMS/12".to_string())
        );
    }

    #[test]
    fn test_quote_arg_escapes_quotes() {
        assert_eq!(
            ModemManagerTelephony::quote_arg("it's here"),
            "it\\'s here"
        );
        assert_eq!(ModemManagerTelephony::quote_arg("a\\b"), "a\\\\b");
    }
}
