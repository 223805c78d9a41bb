use std::{collections::HashMap, fmt, sync::OnceLock};

use clientscript_types::{Category, Descriptor, Opcode};

use crate::log::{debug, error, trace};
use crate::{table, Classifier, Error, IntegrityError, Result};

static GLOBAL: OnceLock<Catalog> = OnceLock::new();

/// The opcode -> [`Descriptor`] registry.
///
/// Immutable once built. Lookups by code are a single index into a dense
/// table spanning the lowest to the highest defined code.
pub struct Catalog {
    entries: Box<[Descriptor]>,
    min_code: i32,
    by_code: Box<[Option<u32>]>,
    by_mnemonic: HashMap<&'static str, u32>,
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("entries", &self.entries.len())
            .field("min_code", &self.min_code)
            .field("max_code", &self.entries.last().map(|d| d.code))
            .finish()
    }
}

/// Result of looking up a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    Known(&'a Descriptor),
    /// Not in the catalog. Expected for bytecode newer than the table.
    Unknown(Opcode),
}

impl<'a> Lookup<'a> {
    #[inline]
    pub fn descriptor(&self) -> Option<&'a Descriptor> {
        match self {
            Self::Known(d) => Some(d),
            Self::Unknown(_) => None,
        }
    }

    #[inline]
    pub fn code(&self) -> Opcode {
        match self {
            Self::Known(d) => d.code,
            Self::Unknown(code) => *code,
        }
    }

    #[inline]
    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    #[inline]
    pub fn is_unknown(&self) -> bool {
        !self.is_known()
    }
}

impl fmt::Display for Lookup<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(d) => f.write_str(d.mnemonic),
            Self::Unknown(code) => write!(f, "unknown({code})"),
        }
    }
}

impl Catalog {
    /// The process-wide catalog, built from the built-in table on first use.
    ///
    /// # Panics
    ///
    /// If the built-in table is inconsistent. Call [`Catalog::init`] during startup
    /// to get the error as a value instead.
    pub fn global() -> &'static Catalog {
        match Self::init() {
            Ok(catalog) => catalog,
            Err(err) => panic!("{err}"),
        }
    }

    /// Builds the process-wide catalog if that has not happened yet.
    ///
    /// Consumers should call this once before decoding anything so a broken
    /// table stops the process at startup rather than at the first lookup.
    pub fn init() -> Result<&'static Catalog> {
        if let Some(catalog) = GLOBAL.get() {
            return Ok(catalog);
        }

        let catalog = Self::from_entries(table::ENTRIES)?;
        Ok(GLOBAL.get_or_init(|| catalog))
    }

    /// The built-in instruction table, in ascending code order.
    pub fn builtin_entries() -> &'static [Descriptor] {
        table::ENTRIES
    }

    /// Builds a catalog from a table of descriptors, in any order.
    pub fn from_entries(entries: &[Descriptor]) -> Result<Self> {
        Self::build(entries).inspect_err(|err| error!("failed to build instruction catalog: {err}"))
    }

    fn build(entries: &[Descriptor]) -> Result<Self> {
        let mut entries = entries.to_vec();
        entries.sort_by_key(|d| d.code);

        for pair in entries.windows(2) {
            if pair[0].code == pair[1].code {
                return Err(IntegrityError::DuplicateCode {
                    code: pair[0].code,
                    first: pair[0].mnemonic,
                    second: pair[1].mnemonic,
                }
                .into());
            }
        }

        let mut by_mnemonic = HashMap::with_capacity(entries.len());
        for (index, d) in entries.iter().enumerate() {
            if (d.code.0 < 0 && !d.code.is_pseudo()) || d.code.0 > Opcode::MAX {
                return Err(IntegrityError::CodeOutOfRange { code: d.code, mnemonic: d.mnemonic }.into());
            }
            if d.is_reserved && d.category != Category::Unknown {
                return Err(IntegrityError::ReservedWithCategory { code: d.code, mnemonic: d.mnemonic }.into());
            }
            if let Some(first) = by_mnemonic.insert(d.mnemonic, index as u32) {
                return Err(IntegrityError::DuplicateMnemonic {
                    mnemonic: d.mnemonic,
                    first: entries[first as usize].code,
                    second: d.code,
                }
                .into());
            }
        }

        let (min_code, by_code) = match (entries.first(), entries.last()) {
            (Some(first), Some(last)) => {
                let min_code = first.code.0;
                let mut by_code = vec![None; (last.code.0 - min_code) as usize + 1];
                for (index, d) in entries.iter().enumerate() {
                    by_code[(d.code.0 - min_code) as usize] = Some(index as u32);
                }
                (min_code, by_code)
            }
            _ => (0, Vec::new()),
        };

        debug!(
            "built instruction catalog: {} entries ({} reserved), codes {}..={}",
            entries.len(),
            entries.iter().filter(|d| d.is_reserved).count(),
            min_code,
            entries.last().map_or(min_code, |d| d.code.0)
        );

        Ok(Self {
            entries: entries.into_boxed_slice(),
            min_code,
            by_code: by_code.into_boxed_slice(),
            by_mnemonic,
        })
    }

    #[inline]
    fn index_of(&self, code: Opcode) -> Option<usize> {
        let offset = usize::try_from(code.0.checked_sub(self.min_code)?).ok()?;
        self.by_code.get(offset).copied().flatten().map(|index| index as usize)
    }

    /// Resolves any integer to its descriptor. Never fails: codes missing from
    /// the table come back as [`Lookup::Unknown`].
    #[inline]
    pub fn lookup(&self, code: impl Into<Opcode>) -> Lookup<'_> {
        let code = code.into();
        match self.index_of(code) {
            Some(index) => Lookup::Known(&self.entries[index]),
            None => {
                trace!("unknown opcode {code}");
                Lookup::Unknown(code)
            }
        }
    }

    /// Like [`Catalog::lookup`], for codes read from encoded bytecode: the
    /// pseudo-codes are rejected since they never appear in a byte stream.
    pub fn lookup_encoded(&self, code: impl Into<Opcode>) -> Result<Lookup<'_>> {
        let code = code.into();
        if code.is_pseudo() {
            return Err(Error::PseudoInStream(code));
        }
        Ok(self.lookup(code))
    }

    /// Exact, case-sensitive mnemonic lookup.
    pub fn lookup_by_mnemonic(&self, name: &str) -> Result<&Descriptor> {
        match self.by_mnemonic.get(name) {
            Some(&index) => Ok(&self.entries[index as usize]),
            None => {
                trace!("unknown mnemonic {name:?}");
                Err(Error::MnemonicNotFound(name.to_string()))
            }
        }
    }

    /// Every descriptor, in ascending code order.
    #[inline]
    pub fn all(&self) -> core::slice::Iter<'_, Descriptor> {
        self.entries.iter()
    }

    /// Every reserved placeholder, in ascending code order.
    pub fn reserved(&self) -> impl Iterator<Item = &Descriptor> + Clone + '_ {
        self.all().filter(|d| d.is_reserved)
    }

    /// Descriptors whose category satisfies `pred`, in ascending code order.
    pub fn by_category<'a, F>(&'a self, pred: F) -> impl Iterator<Item = &'a Descriptor> + 'a
    where
        F: Fn(&Category) -> bool + 'a,
    {
        self.all().filter(move |d| pred(&d.category))
    }

    #[inline]
    pub fn contains(&self, code: impl Into<Opcode>) -> bool {
        self.index_of(code.into()).is_some()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// A [`Classifier`] answering structural questions against this catalog.
    #[inline]
    pub fn classifier(&self) -> Classifier<'_> {
        Classifier::new(self)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Descriptor;
    type IntoIter = core::slice::Iter<'a, Descriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.all()
    }
}
