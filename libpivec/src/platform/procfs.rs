use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use errors::*;
use platform::Firmware;
use utils;

const SOC_RANGES: &'static str = "proc/device-tree/soc/ranges";
const DT_REVISION: &'static str = "proc/device-tree/system/linux,revision";
const CPUINFO: &'static str = "proc/cpuinfo";
const FB_VIRTUAL_SIZE: &'static str = "sys/class/graphics/fb0/virtual_size";

const DEFAULT_PERIPHERAL_ADDRESS: u64 = 0x20000000;
const DEFAULT_PERIPHERAL_SIZE: u64 = 0x01000000;

const REVISION_NEW_STYLE: u32 = 1 << 23;
const UNKNOWN_MODEL_TYPE: u32 = 0xFF;

/// Firmware information as the kernel exposes it through procfs and sysfs.
pub struct ProcFirmware {
    root: PathBuf,
    peripheral_address: u64,
    peripheral_size: u64,
    revision: u32,
    display_size: Option<(u32, u32)>,
}

impl ProcFirmware {
    pub fn init() -> Result<ProcFirmware> {
        ProcFirmware::init_at("/")
    }

    pub fn init_at<P: AsRef<Path>>(root: P) -> Result<ProcFirmware> {
        let root = root.as_ref();

        let (peripheral_address, peripheral_size) = match read_soc_ranges(&root.join(SOC_RANGES)) {
            Some(ranges) => ranges,
            None => {
                debug!("No usable soc ranges under {}, assuming defaults", root.display());
                (DEFAULT_PERIPHERAL_ADDRESS, DEFAULT_PERIPHERAL_SIZE)
            }
        };

        let revision = read_dt_revision(&root.join(DT_REVISION))
            .or_else(|| read_cpuinfo_revision(&root.join(CPUINFO)))
            .ok_or(ErrorKind::PlatformInit(root.display().to_string()))?;

        let display_size = read_display_size(&root.join(FB_VIRTUAL_SIZE));

        debug!("Platform firmware initialized: revision 0x{:06X}, peripherals at 0x{:08X}+0x{:X}",
               revision, peripheral_address, peripheral_size);

        Ok(ProcFirmware {
            root: root.to_path_buf(),
            peripheral_address: peripheral_address,
            peripheral_size: peripheral_size,
            revision: revision,
            display_size: display_size,
        })
    }
}

impl Firmware for ProcFirmware {
    fn peripheral_address(&self) -> u64 {
        self.peripheral_address
    }

    fn peripheral_size(&self) -> u64 {
        self.peripheral_size
    }

    fn model_type(&self) -> u32 {
        if self.revision & REVISION_NEW_STYLE != 0 {
            bits!(self.revision, 4 => 11)
        } else {
            old_style_model(self.revision)
        }
    }

    fn processor_id(&self) -> u32 {
        if self.revision & REVISION_NEW_STYLE != 0 {
            bits!(self.revision, 12 => 15)
        } else {
            0
        }
    }

    fn display_size(&self) -> Option<(u32, u32)> {
        self.display_size
    }
}

impl Drop for ProcFirmware {
    fn drop(&mut self) {
        trace!("Platform firmware released ({})", self.root.display());
    }
}

/// Model types for the revision codes used before bit 23 was introduced.
fn old_style_model(revision: u32) -> u32 {
    match revision & 0xFFFFFF {
        0x02 ..= 0x06 | 0x0D ..= 0x0F => 1,
        0x07 ..= 0x09 => 0,
        0x10 | 0x13 => 3,
        0x11 | 0x14 => 6,
        0x12 | 0x15 => 2,
        _ => UNKNOWN_MODEL_TYPE,
    }
}

fn read_bytes(path: &Path) -> Option<Vec<u8>> {
    let mut buf = Vec::new();
    File::open(path).and_then(|mut f| f.read_to_end(&mut buf)).ok()?;
    Some(buf)
}

fn read_string(path: &Path) -> Option<String> {
    let mut buf = String::new();
    File::open(path).and_then(|mut f| f.read_to_string(&mut buf)).ok()?;
    Some(buf)
}

fn be_cell(buf: &[u8], offset: usize) -> Option<u32> {
    let cell = buf.get(offset..offset + 4)?;
    Some(((cell[0] as u32) << 24) | ((cell[1] as u32) << 16)
        | ((cell[2] as u32) << 8) | (cell[3] as u32))
}

/// The ranges property is `<child addr> <parent addr> <size>`. The parent
/// address is two cells wide on boards with a 64-bit bus, in which case the
/// first cell reads zero.
fn read_soc_ranges(path: &Path) -> Option<(u64, u64)> {
    let buf = read_bytes(path)?;
    let mut address = be_cell(&buf, 4)?;
    let mut size_offset = 8;
    if address == 0 {
        address = be_cell(&buf, 8)?;
        size_offset = 12;
    }
    let size = be_cell(&buf, size_offset)?;
    Some((address as u64, size as u64))
}

fn read_dt_revision(path: &Path) -> Option<u32> {
    let buf = read_bytes(path)?;
    be_cell(&buf, 0)
}

fn read_cpuinfo_revision(path: &Path) -> Option<u32> {
    let cpuinfo = read_string(path)?;
    cpuinfo.lines()
        .filter(|line| line.starts_with("Revision"))
        .filter_map(|line| line.splitn(2, ':').nth(1))
        .filter_map(|val| utils::from_hex(val).ok())
        .next()
}

fn read_display_size(path: &Path) -> Option<(u32, u32)> {
    let size = read_string(path)?;
    let mut dims = size.trim().splitn(2, ',').map(|d| d.trim().parse::<u32>());
    match (dims.next(), dims.next()) {
        (Some(Ok(w)), Some(Ok(h))) => Some((w, h)),
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::fs;
    use std::io::Write;

    use tempfile;

    fn put(root: &Path, rel: &str, data: &[u8]) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::File::create(path).unwrap().write_all(data).unwrap();
    }

    #[test]
    fn pi4_device_tree() {
        let root = tempfile::tempdir().unwrap();
        let root = root.path();
        // 64-bit parent address: child 0x7e000000, parent 0x0_fe000000, size 0x01800000
        put(root, SOC_RANGES, &[0x7e, 0, 0, 0,  0, 0, 0, 0,  0xfe, 0, 0, 0,  0x01, 0x80, 0, 0]);
        put(root, DT_REVISION, &[0x00, 0xc0, 0x31, 0x11]);
        put(root, FB_VIRTUAL_SIZE, b"720,480\n");

        let fw = ProcFirmware::init_at(root).unwrap();
        assert_eq!(fw.peripheral_address(), 0xFE000000);
        assert_eq!(fw.peripheral_size(), 0x01800000);
        assert_eq!(fw.model_type(), 0x11);
        assert_eq!(fw.processor_id(), 3);
        assert_eq!(fw.display_size(), Some((720, 480)));
    }

    #[test]
    fn pi3_cpuinfo_fallback() {
        let root = tempfile::tempdir().unwrap();
        let root = root.path();
        put(root, SOC_RANGES, &[0x7e, 0, 0, 0,  0x3f, 0, 0, 0,  0x01, 0, 0, 0]);
        put(root, CPUINFO, b"processor\t: 0\nHardware\t: BCM2835\nRevision\t: a02082\nSerial\t\t: 00000000\n");

        let fw = ProcFirmware::init_at(root).unwrap();
        assert_eq!(fw.peripheral_address(), 0x3F000000);
        assert_eq!(fw.peripheral_size(), 0x01000000);
        assert_eq!(fw.model_type(), 0x08);
        assert_eq!(fw.processor_id(), 2);
        assert_eq!(fw.display_size(), None);
    }

    #[test]
    fn old_style_revision() {
        let root = tempfile::tempdir().unwrap();
        let root = root.path();
        // Overvolt flag set on an original Model B+
        put(root, CPUINFO, b"Revision\t: 1000010\n");

        let fw = ProcFirmware::init_at(root).unwrap();
        assert_eq!(fw.peripheral_address(), DEFAULT_PERIPHERAL_ADDRESS);
        assert_eq!(fw.peripheral_size(), DEFAULT_PERIPHERAL_SIZE);
        assert_eq!(fw.model_type(), 3);
        assert_eq!(fw.processor_id(), 0);
    }

    #[test]
    fn unknown_old_style_revision() {
        assert_eq!(old_style_model(0x01), UNKNOWN_MODEL_TYPE);
        assert_eq!(old_style_model(0x0E), 1);
        assert_eq!(old_style_model(0x08), 0);
    }

    #[test]
    fn missing_revision_fails_init() {
        let root = tempfile::tempdir().unwrap();
        let err = ProcFirmware::init_at(root.path()).err().unwrap();
        assert_eq!(err.exit_code(), EXIT_PLATFORM_INIT);
    }

    #[test]
    fn malformed_display_size() {
        let root = tempfile::tempdir().unwrap();
        let root = root.path();
        put(root, DT_REVISION, &[0x00, 0x90, 0x20, 0xe0]);
        put(root, FB_VIRTUAL_SIZE, b"garbage");

        let fw = ProcFirmware::init_at(root).unwrap();
        assert_eq!(fw.display_size(), None);
        assert_eq!(fw.model_type(), 0x0e);
    }
}
