#![forbid(unsafe_code)]
#![doc(test(
    no_crate_inject,
    attr(deny(warnings, rust_2018_idioms), allow(dead_code, unused_assignments, unused_variables))
))]
#![warn(missing_debug_implementations, rust_2018_idioms, unreachable_pub)]

//! The ClientScript instruction catalog.
//!
//! Maps every opcode the toolchain knows to a [`Descriptor`] (mnemonic,
//! [`Category`], reserved flag, stack effect) and answers the structural
//! questions a decoder, control-flow builder or pretty-printer needs to ask
//! about an instruction through the [`Classify`] trait.
//!
//! ```rust
//! use clientscript::{Catalog, Classify, OperandDomain};
//!
//! let catalog = Catalog::init()?;
//!
//! let switch = catalog.lookup(60);
//! assert_eq!(switch.to_string(), "switch");
//! assert!(switch.terminates_block());
//! assert_eq!(switch.operand_domain(), OperandDomain::Integer);
//!
//! // codes the table does not know are not an error
//! let newer = catalog.lookup(7000);
//! assert!(newer.is_unknown());
//! assert!(!newer.terminates_block());
//! # Ok::<(), clientscript::Error>(())
//! ```

// log for logging (optional).
#[cfg(feature = "log")]
#[allow(unused_imports)]
use log;

#[cfg(not(feature = "log"))]
#[allow(unused_imports, unused_macros)]
pub(crate) mod log {
    macro_rules! debug    ( ($($tt:tt)*) => {{ let _ = format_args!($($tt)*); }} );
    macro_rules! error    ( ($($tt:tt)*) => {{ let _ = format_args!($($tt)*); }} );
    macro_rules! trace    ( ($($tt:tt)*) => {{ let _ = format_args!($($tt)*); }} );
    pub(crate) use debug;
    pub(crate) use error;
    pub(crate) use trace;
}

mod catalog;
mod classify;
mod error;
mod table;

pub mod opcodes;

pub use catalog::*;
pub use classify::*;
pub use error::*;

/// Re-export of [`clientscript_types`]. Commonly used types are also re-exported at the top level.
pub use clientscript_types as types;
pub use clientscript_types::{
    Access, ArrayRole, Category, Comparison, ComponentRole, ComponentTarget, Descriptor, Opcode, OperandDomain,
    Slots, StackEffect, StackType, Transfer, VarScope,
};

#[cfg(all(test, not(feature = "log")))]
mod tests {
    use crate::log::{debug, error, trace};

    #[test]
    #[deny(unused_variables)]
    fn test_log_shim_uses_its_arguments() {
        let code = 7000;
        let err = "duplicate code";
        let name = "switch";
        debug!("built {code}");
        error!("failed: {err}");
        trace!("unknown mnemonic {:?}", name);
    }
}
