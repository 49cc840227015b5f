use config::Config;
use devmem::RegisterWindow;
use diag;
use errors::*;
use platform::{Firmware, PlatformIdentity};
use vec;

/// One pass over the encoder: map its registers, apply the requested color
/// setting, optionally describe the result, and unmap.
///
/// Returns the diagnostics report when `config.verbose` is set.
pub fn run<F: Firmware + ?Sized>(config: &Config, firmware: &F) -> Result<Option<String>> {
    let identity = PlatformIdentity::query(firmware);
    info!("Board: {} ({}), peripherals at 0x{:08X}",
          identity.model_name(), identity.processor_name(), identity.peripheral_address);

    let mut window = RegisterWindow::acquire(&config.mem_device, identity.peripheral_address,
                                             vec::VEC_OFFSET, vec::VEC_WINDOW_LEN)?;
    debug!("VEC registers mapped from 0x{:08X}", window.phys_addr());

    match config.color {
        Some(enabled) => {
            info!("Turning color {}", if enabled { "on" } else { "off" });
            vec::apply_color_setting(&mut window, enabled);
        }
        None => debug!("No color setting requested, leaving VEC config alone"),
    }

    let report = if config.verbose {
        Some(diag::report(&identity, &window))
    } else {
        None
    };

    window.release()?;
    Ok(report)
}
