//! Typed foreign-key projection over a stored lookup integer
//!
//! Dependent records persist only a raw `i32`; [`LookupCode`] is the typed
//! face of that integer. Both directions are total: no range check on write,
//! no rejection on read. An integer with no declared member still round-trips
//! through [`raw`](LookupCode::raw), it just resolves to `None` via
//! [`known`](LookupCode::known). Validation, where wanted, is the caller's
//! business, and the related row loaded from storage is a separate slot that
//! this projection never touches.

use std::marker::PhantomData;

use crate::descriptor::LookupEnum;

/// The typed face of a persisted lookup foreign key.
///
/// Zero-cost wrapper around the stored integer; the integer is the only thing
/// persisted, the wrapper itself never is. `0` is the reserved "unset" state
/// and never names a member (seeding rejects non-positive member values).
pub struct LookupCode<E> {
    raw: i32,
    _enum: PhantomData<E>,
}

impl<E> LookupCode<E> {
    /// Reserved "no value" state
    pub const UNSET: Self = Self {
        raw: 0,
        _enum: PhantomData,
    };

    /// Wrap a raw stored integer. Total; no range check.
    pub const fn from_raw(raw: i32) -> Self {
        Self {
            raw,
            _enum: PhantomData,
        }
    }

    /// The integer that is (or would be) persisted
    pub const fn raw(self) -> i32 {
        self.raw
    }

    /// Whether this is the reserved "unset" state
    pub const fn is_unset(self) -> bool {
        self.raw == 0
    }
}

impl<E: LookupEnum> LookupCode<E> {
    /// Resolve to the declared member, if the stored integer names one
    pub fn known(self) -> Option<E> {
        E::from_value(self.raw)
    }
}

impl<E: LookupEnum> From<E> for LookupCode<E> {
    fn from(value: E) -> Self {
        Self::from_raw(value.value())
    }
}

impl<E> Default for LookupCode<E> {
    fn default() -> Self {
        Self::UNSET
    }
}

// Manual impls: the phantom parameter must not infect the bounds.

impl<E> Clone for LookupCode<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for LookupCode<E> {}

impl<E> PartialEq for LookupCode<E> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<E> Eq for LookupCode<E> {}

impl<E> std::hash::Hash for LookupCode<E> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl<E> std::fmt::Debug for LookupCode<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("LookupCode").field(&self.raw).finish()
    }
}

impl<E: LookupEnum> std::fmt::Display for LookupCode<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.known() {
            Some(member) => write!(f, "{}", member.name()),
            None => write!(f, "#{}", self.raw),
        }
    }
}
