use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::contracts::ActionPayload;
use crate::error::FcmError;

/// Remote-control commands understood by the device agent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Lock,
    Unlock,
    DisableFactoryReset,
    EnableFactoryReset,
    DisableDebugging,
    EnableDebugging,
    EnforceNotifications,
    ReleaseDevice,
    Status,
    Test,
}

impl Action {
    pub const ALL: [Action; 10] = [
        Action::Lock,
        Action::Unlock,
        Action::DisableFactoryReset,
        Action::EnableFactoryReset,
        Action::DisableDebugging,
        Action::EnableDebugging,
        Action::EnforceNotifications,
        Action::ReleaseDevice,
        Action::Status,
        Action::Test,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Lock => "lock",
            Action::Unlock => "unlock",
            Action::DisableFactoryReset => "disable_factory_reset",
            Action::EnableFactoryReset => "enable_factory_reset",
            Action::DisableDebugging => "disable_debugging",
            Action::EnableDebugging => "enable_debugging",
            Action::EnforceNotifications => "enforce_notifications",
            Action::ReleaseDevice => "release_device",
            Action::Status => "status",
            Action::Test => "test",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Action::Lock => "Lock device with payment screen",
            Action::Unlock => "Unlock device",
            Action::DisableFactoryReset => "Disable factory reset",
            Action::EnableFactoryReset => "Enable factory reset",
            Action::DisableDebugging => "Disable USB debugging",
            Action::EnableDebugging => "Enable USB debugging",
            Action::EnforceNotifications => "Force enable app notifications",
            Action::ReleaseDevice => "FULLY release device (customer paid all)",
            Action::Status => "Get device status (check logs)",
            Action::Test => "Show toast to verify FCM is working",
        }
    }

    /// Data fields delivered to the device for this action.
    ///
    /// `lock` carries the payment screen contents; every other action only
    /// names itself.
    pub fn payload(&self) -> ActionPayload {
        match self {
            Action::Lock => ActionPayload::new()
                .with("action", "lock")
                .with("title", "Payment Required")
                .with("sellerName", "Waqar Ali Siyal")
                .with("sellerPhone", "0300-1234567")
                .with("amountDue", "PKR 5,000")
                .with("dueDate", "Jan 15, 2025")
                .with(
                    "message",
                    "Please pay your outstanding balance to unlock this device.",
                ),
            other => ActionPayload::new().with("action", other.as_str()),
        }
    }

    pub fn valid_names() -> Vec<&'static str> {
        Self::ALL.iter().map(Action::as_str).collect()
    }
}

impl FromStr for Action {
    type Err = FcmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| FcmError::InvalidAction(s.to_string()))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
