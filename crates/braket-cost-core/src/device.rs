use serde::{Deserialize, Serialize};

use crate::catalog::PriceCatalog;
use crate::error::{CostError, Result};
use crate::estimate::PricePair;

/// Vendor behind a device identifier, derived from the ARN path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceVendor {
    Simulator,
    IonQ,
    Rigetti,
    DWave,
}

impl DeviceVendor {
    pub const ALL: [DeviceVendor; 4] = [
        DeviceVendor::Simulator,
        DeviceVendor::IonQ,
        DeviceVendor::Rigetti,
        DeviceVendor::DWave,
    ];

    /// Substring of the device identifier that marks this vendor.
    pub fn token(self) -> &'static str {
        match self {
            DeviceVendor::Simulator => "simulator",
            DeviceVendor::IonQ => "ionq",
            DeviceVendor::Rigetti => "rigetti",
            DeviceVendor::DWave => "d-wave",
        }
    }

    /// Usage-type code billed once per task on this vendor's devices.
    pub fn task_key(self) -> &'static str {
        match self {
            DeviceVendor::Simulator => "Global-Simulators-Task",
            DeviceVendor::IonQ => "USE1-Task",
            DeviceVendor::Rigetti => "USW1-Task",
            DeviceVendor::DWave => "USW2-Task",
        }
    }

    /// Usage-type code billed per shot. Simulators bill per task only.
    pub fn shot_key(self) -> Option<&'static str> {
        match self {
            DeviceVendor::Simulator => None,
            DeviceVendor::IonQ => Some("USE1-Task-Shot"),
            DeviceVendor::Rigetti => Some("USW1-Task-Shot"),
            DeviceVendor::DWave => Some("USW2-Task-Shot"),
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            DeviceVendor::Simulator => "Simulators",
            DeviceVendor::IonQ => "IonQ",
            DeviceVendor::Rigetti => "Rigetti",
            DeviceVendor::DWave => "D-Wave",
        }
    }

    /// Classify a device identifier by vendor token containment.
    ///
    /// Matching is exhaustive over all vendors: an identifier containing no
    /// token is rejected as unknown, one containing more than one is
    /// rejected as ambiguous rather than silently picking either.
    pub fn classify(device_id: &str) -> Result<Self> {
        let id = device_id.to_ascii_lowercase();
        let mut matched = Self::ALL.iter().copied().filter(|v| id.contains(v.token()));

        match (matched.next(), matched.next()) {
            (Some(vendor), None) => Ok(vendor),
            (Some(_), Some(_)) => Err(CostError::AmbiguousDevice(device_id.to_string())),
            (None, _) => Err(CostError::UnknownDevice(device_id.to_string())),
        }
    }
}

/// Task and shot prices for a device identifier, from an already-fetched
/// catalog. Every key the vendor mapping names must be present; there is
/// no default price.
pub fn resolve(device_id: &str, catalog: &PriceCatalog) -> Result<PricePair> {
    let vendor = DeviceVendor::classify(device_id)?;

    let task_price = catalog
        .price(vendor.task_key())
        .ok_or_else(|| CostError::MissingPriceData(vendor.task_key().to_string()))?;

    let shot_price = match vendor.shot_key() {
        Some(key) => Some(
            catalog
                .price(key)
                .ok_or_else(|| CostError::MissingPriceData(key.to_string()))?,
        ),
        None => None,
    };

    Ok(PricePair {
        task_price,
        shot_price,
    })
}

/// Static registry entry for a known device.
#[derive(Debug, Clone)]
pub struct Device {
    pub key: &'static str,
    pub display_name: &'static str,
    pub vendor: DeviceVendor,
    pub arn: &'static str,
}

pub const DEVICES: &[Device] = &[
    Device { key: "sv1",         display_name: "Amazon SV1",         vendor: DeviceVendor::Simulator, arn: "arn:aws:braket:::device/quantum-simulator/amazon/sv1" },
    Device { key: "tn1",         display_name: "Amazon TN1",         vendor: DeviceVendor::Simulator, arn: "arn:aws:braket:::device/quantum-simulator/amazon/tn1" },
    Device { key: "dm1",         display_name: "Amazon DM1",         vendor: DeviceVendor::Simulator, arn: "arn:aws:braket:::device/quantum-simulator/amazon/dm1" },
    Device { key: "harmony",     display_name: "IonQ Harmony",       vendor: DeviceVendor::IonQ,      arn: "arn:aws:braket:::device/qpu/ionq/ionQdevice" },
    Device { key: "aria-1",      display_name: "IonQ Aria",          vendor: DeviceVendor::IonQ,      arn: "arn:aws:braket:us-east-1::device/qpu/ionq/Aria-1" },
    Device { key: "aspen-m-3",   display_name: "Rigetti Aspen-M-3",  vendor: DeviceVendor::Rigetti,   arn: "arn:aws:braket:us-west-1::device/qpu/rigetti/Aspen-M-3" },
    Device { key: "advantage-4", display_name: "D-Wave Advantage 4", vendor: DeviceVendor::DWave,     arn: "arn:aws:braket:::device/qpu/d-wave/Advantage_system4" },
    Device { key: "dw-2000q",    display_name: "D-Wave 2000Q",       vendor: DeviceVendor::DWave,     arn: "arn:aws:braket:::device/qpu/d-wave/DW_2000Q_6" },
];

/// Find a registry entry by short key or by ARN fragment.
pub fn find_device(query: &str) -> Option<&'static Device> {
    let q = query.to_ascii_lowercase();
    DEVICES
        .iter()
        .find(|d| d.key == q)
        .or_else(|| DEVICES.iter().find(|d| d.arn.to_ascii_lowercase().contains(&q)))
}
