error_chain! {
    foreign_links {
        Io(::std::io::Error);
    }

    errors {
        UnknownSwitch(switch: String) {
            description("unknown switch")
            display("Unknown switch `{}`", switch)
        }
        MissingColorValue {
            description("missing color value")
            display("Switch -c requires a value, either `on` or `off`")
        }
        InvalidColorValue(value: String) {
            description("invalid color value")
            display("Invalid color setting `{}`, expected `on` or `off`", value)
        }
        UnexpectedArgument(arg: String) {
            description("unexpected argument")
            display("Unexpected argument `{}`", arg)
        }
        PlatformInit(root: String) {
            description("platform firmware interface unavailable")
            display("Could not determine the board revision from {}", root)
        }
        DeviceOpen(path: String) {
            description("could not open memory device")
            display("Could not open {} for read/write", path)
        }
        Map(addr: u64) {
            description("could not map register window")
            display("Could not map register window at 0x{:08X}", addr)
        }
        Unmap(addr: u64) {
            description("could not unmap register window")
            display("Could not unmap register window at 0x{:08X}", addr)
        }
    }
}

pub const EXIT_OK: i32 = 0;
pub const EXIT_UNKNOWN_SWITCH: i32 = -9;
pub const EXIT_BAD_COLOR_VALUE: i32 = -10;
pub const EXIT_UNEXPECTED_ARGUMENT: i32 = -11;
pub const EXIT_PLATFORM_INIT: i32 = -12;
pub const EXIT_DEVICE_OPEN: i32 = -13;
pub const EXIT_MAP: i32 = -14;
pub const EXIT_UNMAP: i32 = -15;
pub const EXIT_OTHER: i32 = -1;

impl Error {
    /// Process exit code reported for this error.
    pub fn exit_code(&self) -> i32 {
        match *self.kind() {
            ErrorKind::UnknownSwitch(_) => EXIT_UNKNOWN_SWITCH,
            ErrorKind::MissingColorValue
                | ErrorKind::InvalidColorValue(_) => EXIT_BAD_COLOR_VALUE,
            ErrorKind::UnexpectedArgument(_) => EXIT_UNEXPECTED_ARGUMENT,
            ErrorKind::PlatformInit(_) => EXIT_PLATFORM_INIT,
            ErrorKind::DeviceOpen(_) => EXIT_DEVICE_OPEN,
            ErrorKind::Map(_) => EXIT_MAP,
            ErrorKind::Unmap(_) => EXIT_UNMAP,
            _ => EXIT_OTHER,
        }
    }

    /// User errors get the usage text printed alongside them.
    pub fn is_usage_error(&self) -> bool {
        match *self.kind() {
            ErrorKind::UnknownSwitch(_)
                | ErrorKind::MissingColorValue
                | ErrorKind::InvalidColorValue(_)
                | ErrorKind::UnexpectedArgument(_) => true,
            _ => false,
        }
    }
}
