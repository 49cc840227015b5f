use platform::PlatformIdentity;
use regs::RegAccess;
use vec;

fn state(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}

/// Human-readable summary of the board and the encoder's current color state.
///
/// The control register is read fresh, so the report reflects the hardware
/// rather than whatever was requested.
pub fn report<R: RegAccess + ?Sized>(identity: &PlatformIdentity, regs: &R) -> String {
    let cfg = vec::read_config(regs);
    let display = match identity.display_size {
        Some((w, h)) => format!("{}x{}", w, h),
        None => "unknown".to_owned(),
    };
    let window = match identity.peripheral_address.checked_add(vec::VEC_OFFSET) {
        Some(addr) => format!("0x{:08X}", addr),
        None => "out of range".to_owned(),
    };

    format!("Model: {}\n\
             Processor: {}\n\
             Display size: {}\n\
             Peripheral base: 0x{:08X}, size: 0x{:08X}\n\
             VEC registers: {}\n\
             VEC config [0x{:02X}]: 0x{:08X}\n\
             Chrominance: {}\n\
             Color burst: {}\n",
            identity.model_name(),
            identity.processor_name(),
            display,
            identity.peripheral_address, identity.peripheral_size,
            window,
            vec::VEC_CONFIG_INDEX, cfg.raw(),
            state(cfg.chroma_enabled()),
            state(cfg.burst_enabled()))
}
