mod procfs;

pub use self::procfs::*;

pub const UNKNOWN: &'static str = "unknown";

/// Board names, indexed by the revision code's model type.
pub const MODEL_NAMES: [&'static str; 27] = [
    "Model A",
    "Model B",
    "Model A+",
    "Model B+",
    "Pi 2 Model B",
    "Alpha",
    "Compute Module",
    "Compute Module 2",
    "Pi 3 Model B",
    "Pi Zero",
    "Compute Module 3",
    "Custom",
    "Pi Zero W",
    "Pi 3 Model B+",
    "Pi 3 Model A+",
    "FPGA",
    "Compute Module 3+",
    "Pi 4 Model B",
    "Pi Zero 2 W",
    "Pi 400",
    "Compute Module 4",
    "Compute Module 4S",
    "Internal",
    "Pi 5",
    "Compute Module 5",
    "Pi 500",
    "Compute Module 5 Lite",
];

/// SoC names, indexed by the revision code's processor id.
pub const PROCESSOR_NAMES: [&'static str; 5] = [
    "BCM2835",
    "BCM2836",
    "BCM2837",
    "BCM2711",
    "BCM2712",
];

pub fn model_name(model_type: u32) -> &'static str {
    MODEL_NAMES.get(model_type as usize).cloned().unwrap_or(UNKNOWN)
}

pub fn processor_name(processor_id: u32) -> &'static str {
    PROCESSOR_NAMES.get(processor_id as usize).cloned().unwrap_or(UNKNOWN)
}

/// Read-only queries answered by the board's firmware interface.
pub trait Firmware {
    fn peripheral_address(&self) -> u64;
    fn peripheral_size(&self) -> u64;
    fn model_type(&self) -> u32;
    fn processor_id(&self) -> u32;
    fn display_size(&self) -> Option<(u32, u32)>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformIdentity {
    pub model_type: u32,
    pub processor_id: u32,
    pub peripheral_address: u64,
    pub peripheral_size: u64,
    pub display_size: Option<(u32, u32)>,
}

impl PlatformIdentity {
    pub fn query<F: Firmware + ?Sized>(firmware: &F) -> PlatformIdentity {
        PlatformIdentity {
            model_type: firmware.model_type(),
            processor_id: firmware.processor_id(),
            peripheral_address: firmware.peripheral_address(),
            peripheral_size: firmware.peripheral_size(),
            display_size: firmware.display_size(),
        }
    }

    pub fn model_name(&self) -> &'static str {
        model_name(self.model_type)
    }

    pub fn processor_name(&self) -> &'static str {
        processor_name(self.processor_id)
    }
}
