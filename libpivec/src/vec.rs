//! The composite video encoder's configuration register.

use regs::RegAccess;

/// Encoder register block, relative to the peripheral base.
pub const VEC_OFFSET: u64 = 0x00c13000;
pub const VEC_WINDOW_LEN: usize = 4096;
pub const VEC_CONFIG_INDEX: usize = 0x41;

pub const CHROMA_DISABLE_MASK: u32 = 1 << 7;
pub const BURST_DISABLE_MASK: u32 = 1 << 8;

bitfield!(VecConfig: u32, {
    chroma_disable: 7 => 7,
    burst_disable: 8 => 8
});

impl VecConfig {
    pub fn chroma_enabled(&self) -> bool {
        !self.flag(VecConfig::chroma_disable())
    }

    pub fn burst_enabled(&self) -> bool {
        !self.flag(VecConfig::burst_disable())
    }
}

/// Register value with chroma and color burst both enabled or both disabled.
/// Every other bit of `old` is kept.
pub fn color_value(old: u32, enabled: bool) -> u32 {
    if enabled {
        old & !(CHROMA_DISABLE_MASK | BURST_DISABLE_MASK)
    } else {
        old | CHROMA_DISABLE_MASK | BURST_DISABLE_MASK
    }
}

pub fn read_config<R: RegAccess + ?Sized>(regs: &R) -> VecConfig {
    VecConfig::new(regs.read_reg(VEC_CONFIG_INDEX))
}

/// Read-modify-write of the configuration register. Returns the value written.
pub fn apply_color_setting<R: RegAccess + ?Sized>(regs: &mut R, enabled: bool) -> u32 {
    let old = regs.read_reg(VEC_CONFIG_INDEX);
    let new = color_value(old, enabled);
    debug!("VEC config 0x{:08X} -> 0x{:08X}", old, new);
    regs.write_reg(VEC_CONFIG_INDEX, new);
    new
}
