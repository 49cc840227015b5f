/// Word-indexed access to a bank of 32-bit registers.
///
/// Index `i` addresses the register at byte offset `i * 4`.
pub trait RegAccess {
    fn reg_count(&self) -> usize;
    fn read_reg(&self, index: usize) -> u32;
    fn write_reg(&mut self, index: usize, val: u32);
}

#[cfg(test)]
pub use self::test::RegisterFile;

#[cfg(test)]
pub mod test {
    use std::cell::Cell;

    use super::RegAccess;

    /// Plain memory standing in for a device, counting every access.
    #[derive(Debug)]
    pub struct RegisterFile {
        regs: Vec<u32>,
        reads: Cell<usize>,
        writes: usize,
    }

    impl RegisterFile {
        pub fn new(count: usize) -> RegisterFile {
            RegisterFile { regs: vec![0; count], reads: Cell::new(0), writes: 0 }
        }

        pub fn with(count: usize, index: usize, val: u32) -> RegisterFile {
            let mut file = RegisterFile::new(count);
            file.regs[index] = val;
            file
        }

        pub fn peek(&self, index: usize) -> u32 {
            self.regs[index]
        }

        pub fn reads(&self) -> usize {
            self.reads.get()
        }

        pub fn writes(&self) -> usize {
            self.writes
        }
    }

    impl RegAccess for RegisterFile {
        fn reg_count(&self) -> usize {
            self.regs.len()
        }

        fn read_reg(&self, index: usize) -> u32 {
            self.reads.set(self.reads.get() + 1);
            self.regs[index]
        }

        fn write_reg(&mut self, index: usize, val: u32) {
            self.writes += 1;
            self.regs[index] = val;
        }
    }

    #[test]
    fn counts_accesses() {
        let mut file = RegisterFile::with(4, 2, 0xDEAD);
        assert_eq!(file.read_reg(2), 0xDEAD);
        file.write_reg(1, 7);
        assert_eq!(file.peek(1), 7);
        assert_eq!((file.reads(), file.writes()), (1, 1));
    }

    #[test]
    #[should_panic]
    fn out_of_range() {
        let file = RegisterFile::new(4);
        file.read_reg(4);
    }
}
