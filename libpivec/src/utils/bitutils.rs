/// Extracts the inclusive bit range `low..=hi` of `val`, shifted down to bit 0.
#[macro_export]
macro_rules! bits {
    ($val:expr, $low:expr => $hi:expr) => {{
        let max_bit = ::std::mem::size_of_val(&$val) * 8 - 1;
        $val << (max_bit - $hi) >> (max_bit - $hi + $low)
    }};
}

/// Declares a copyable view over a raw register value with named bit ranges.
///
/// Each field becomes an associated function returning its `(low, hi)` position,
/// to be passed to `get` or `flag`.
#[macro_export]
macro_rules! bitfield {
    ($name:ident: $ty:ty, { $($var_name:ident: $var_low:expr => $var_hi:expr),* }) => {
        #[derive(Clone, Copy, PartialEq, Eq)]
        pub struct $name {
            val: $ty
        }

        impl $name {
            pub fn new(val: $ty) -> $name {
                $name {
                    val: val
                }
            }

            #[inline(always)]
            #[allow(dead_code)]
            pub fn raw(&self) -> $ty {
                self.val
            }

            #[inline(always)]
            #[allow(dead_code)]
            pub fn get(&self, pos: (usize, usize)) -> $ty {
                bits!(self.val, pos.0 => pos.1)
            }

            #[inline(always)]
            #[allow(dead_code)]
            pub fn flag(&self, pos: (usize, usize)) -> bool {
                self.get(pos) != 0
            }

            $(
                #[inline(always)]
                pub fn $var_name() -> (usize, usize) {
                    ($var_low, $var_hi)
                }
            )*
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("raw", &format_args!("0x{:08X}", self.val))
                    $(.field(stringify!($var_name), &self.get($name::$var_name())))*
                    .finish()
            }
        }
    };
}
