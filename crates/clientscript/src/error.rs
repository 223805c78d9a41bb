use core::fmt::Display;

use clientscript_types::Opcode;

/// Errors that can occur for catalog operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The instruction table is inconsistent and the catalog was not built
    Integrity(IntegrityError),

    /// No instruction has this mnemonic
    MnemonicNotFound(String),

    /// A pseudo-code was found where only encoded instructions may appear
    PseudoInStream(Opcode),
}

/// Ways an instruction table can be inconsistent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityError {
    /// Two entries share a code
    DuplicateCode {
        /// The shared code
        code: Opcode,
        /// Mnemonic of the first entry
        first: &'static str,
        /// Mnemonic of the second entry
        second: &'static str,
    },

    /// Two entries share a mnemonic
    DuplicateMnemonic {
        /// The shared mnemonic
        mnemonic: &'static str,
        /// Code of the first entry
        first: Opcode,
        /// Code of the second entry
        second: Opcode,
    },

    /// A code is negative but not a pseudo-code, or does not fit the encoding
    CodeOutOfRange {
        /// The offending code
        code: Opcode,
        /// Its mnemonic
        mnemonic: &'static str,
    },

    /// A reserved entry claims a category other than `Unknown`
    ReservedWithCategory {
        /// The offending code
        code: Opcode,
        /// Its mnemonic
        mnemonic: &'static str,
    },
}

impl IntegrityError {
    /// Get the message of the integrity error
    pub fn message(&self) -> &'static str {
        match self {
            Self::DuplicateCode { .. } => "duplicate code",
            Self::DuplicateMnemonic { .. } => "duplicate mnemonic",
            Self::CodeOutOfRange { .. } => "code out of range",
            Self::ReservedWithCategory { .. } => "reserved entry with a category",
        }
    }
}

impl From<IntegrityError> for Error {
    fn from(value: IntegrityError) -> Self {
        Self::Integrity(value)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Integrity(err) => write!(f, "corrupt instruction table: {err}"),
            Self::MnemonicNotFound(name) => write!(f, "unknown mnemonic: {name}"),
            Self::PseudoInStream(code) => write!(f, "pseudo-instruction {code} cannot appear in encoded bytecode"),
        }
    }
}

impl Display for IntegrityError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::DuplicateCode { code, first, second } => {
                write!(f, "duplicate code {code}: {first} and {second}")
            }
            Self::DuplicateMnemonic { mnemonic, first, second } => {
                write!(f, "duplicate mnemonic {mnemonic}: codes {first} and {second}")
            }
            Self::CodeOutOfRange { code, mnemonic } => write!(f, "code out of range: {mnemonic}={code}"),
            Self::ReservedWithCategory { code, mnemonic } => {
                write!(f, "reserved entry with a category: {mnemonic}={code}")
            }
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Integrity(err) => Some(err),
            _ => None,
        }
    }
}

impl core::error::Error for IntegrityError {}

/// A wrapper around [`core::result::Result`] for catalog operations
pub type Result<T, E = Error> = core::result::Result<T, E>;
