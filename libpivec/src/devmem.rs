use std::fs::{File, OpenOptions};
use std::io;
use std::os::unix::fs::OpenOptionsExt;
use std::os::unix::io::{AsRawFd, RawFd};
use std::path::Path;
use std::ptr;

use libc;

use errors::*;
use regs::RegAccess;

#[cfg(all(target_os = "linux", target_env = "gnu"))]
unsafe fn map_shared(fd: RawFd, len: usize, phys_addr: u64) -> *mut libc::c_void {
    // 64-bit offsets so high peripheral addresses survive on 32-bit userlands
    libc::mmap64(ptr::null_mut(), len, libc::PROT_READ | libc::PROT_WRITE,
                 libc::MAP_SHARED, fd, phys_addr as libc::off64_t)
}

#[cfg(not(all(target_os = "linux", target_env = "gnu")))]
unsafe fn map_shared(fd: RawFd, len: usize, phys_addr: u64) -> *mut libc::c_void {
    libc::mmap(ptr::null_mut(), len, libc::PROT_READ | libc::PROT_WRITE,
               libc::MAP_SHARED, fd, phys_addr as libc::off_t)
}

/// A block of physical address space mapped through a memory device.
///
/// The device stays open for as long as the window lives. `release` unmaps and
/// then closes; dropping an unreleased window does the same, logging instead of
/// returning a failed unmap.
pub struct RegisterWindow {
    ptr: *mut u32,
    len: usize,
    phys_addr: u64,
    device: File,
}

impl RegisterWindow {
    pub fn acquire<P: AsRef<Path>>(device: P, base: u64, offset: u64, len: usize) -> Result<RegisterWindow> {
        let device = device.as_ref();
        let phys_addr = base.checked_add(offset)
            .ok_or(ErrorKind::Map(base))?;

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .custom_flags(libc::O_SYNC)
            .open(device)
            .chain_err(|| ErrorKind::DeviceOpen(device.display().to_string()))?;
        debug!("Opened {} as fd {}", device.display(), file.as_raw_fd());

        let ptr = unsafe { map_shared(file.as_raw_fd(), len, phys_addr) };
        if ptr == libc::MAP_FAILED {
            // `file` drops on the way out, closing the descriptor
            return Err(io::Error::last_os_error())
                .chain_err(|| ErrorKind::Map(phys_addr));
        }
        debug!("Mapped {} bytes at 0x{:08X} to {:p}", len, phys_addr, ptr);

        Ok(RegisterWindow {
            ptr: ptr as *mut u32,
            len: len,
            phys_addr: phys_addr,
            device: file,
        })
    }

    pub fn phys_addr(&self) -> u64 {
        self.phys_addr
    }

    pub fn release(mut self) -> Result<()> {
        self.unmap()
    }

    fn unmap(&mut self) -> Result<()> {
        if self.ptr.is_null() {
            return Ok(())
        }

        let ret = unsafe { libc::munmap(self.ptr as *mut libc::c_void, self.len) };
        self.ptr = ptr::null_mut();
        if ret != 0 {
            return Err(io::Error::last_os_error())
                .chain_err(|| ErrorKind::Unmap(self.phys_addr));
        }
        trace!("Unmapped register window at 0x{:08X}", self.phys_addr);
        Ok(())
    }
}

impl Drop for RegisterWindow {
    fn drop(&mut self) {
        if let Err(e) = self.unmap() {
            warn!("{}", e);
        }
        trace!("Closing fd {}", self.device.as_raw_fd());
    }
}

impl RegAccess for RegisterWindow {
    fn reg_count(&self) -> usize {
        self.len / 4
    }

    fn read_reg(&self, index: usize) -> u32 {
        assert!(index < self.reg_count(), "Register index 0x{:X} outside window", index);
        unsafe { ptr::read_volatile(self.ptr.offset(index as isize)) }
    }

    fn write_reg(&mut self, index: usize, val: u32) {
        assert!(index < self.reg_count(), "Register index 0x{:X} outside window", index);
        unsafe { ptr::write_volatile(self.ptr.offset(index as isize), val) }
    }
}
