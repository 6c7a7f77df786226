// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed setting slots.
//!
//! A setting owns one slot of a fixed [`Kind`]. The slot is shared with the
//! [`Handle`] returned to the caller at declaration time, so values written by
//! a load are visible through that handle.

use crate::domain::duration::format_duration;
use crate::domain::{ConfigKey, ConfigValue, Result};
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

/// The supported setting types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `bool`
    Bool,
    /// `isize`
    Int,
    /// `i64`
    Int64,
    /// `usize`
    Uint,
    /// `u64`
    Uint64,
    /// `String`
    String,
    /// `f64`
    Float64,
    /// [`Duration`]
    Duration,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Int64 => "int64",
            Kind::Uint => "uint",
            Kind::Uint64 => "uint64",
            Kind::String => "string",
            Kind::Float64 => "float64",
            Kind::Duration => "duration",
        };
        f.write_str(name)
    }
}

/// A live, shareable view of one setting's current value.
///
/// Handles are cheap to clone and can be read from any thread.
///
/// # Examples
///
/// ```
/// use tomlcfg::prelude::*;
///
/// let registry = Registry::new("app", ErrorPolicy::ContinueOnError);
/// let port = registry.declare_int("port", 8080);
/// assert_eq!(port.get(), 8080);
///
/// registry.set_from_text("port", "9090").unwrap();
/// assert_eq!(port.get(), 9090);
/// ```
pub struct Handle<T>(Arc<RwLock<T>>);

impl<T> Handle<T> {
    pub(crate) fn new(value: T) -> Self {
        Handle(Arc::new(RwLock::new(value)))
    }

    pub(crate) fn set(&self, value: T) {
        *self.0.write().unwrap_or_else(PoisonError::into_inner) = value;
    }

    /// Calls `f` with a reference to the current value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let guard = self.0.read().unwrap_or_else(PoisonError::into_inner);
        f(&*guard)
    }
}

impl<T: Clone> Handle<T> {
    /// Returns a copy of the current value.
    pub fn get(&self) -> T {
        self.with(T::clone)
    }
}

impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        Handle(Arc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with(|value| f.debug_tuple("Handle").field(value).finish())
    }
}

/// The storage behind a setting, tagged by kind.
#[derive(Clone, Debug)]
pub(crate) enum Slot {
    Bool(Handle<bool>),
    Int(Handle<isize>),
    Int64(Handle<i64>),
    Uint(Handle<usize>),
    Uint64(Handle<u64>),
    String(Handle<String>),
    Float64(Handle<f64>),
    Duration(Handle<Duration>),
}

impl Slot {
    pub(crate) fn kind(&self) -> Kind {
        match self {
            Slot::Bool(_) => Kind::Bool,
            Slot::Int(_) => Kind::Int,
            Slot::Int64(_) => Kind::Int64,
            Slot::Uint(_) => Kind::Uint,
            Slot::Uint64(_) => Kind::Uint64,
            Slot::String(_) => Kind::String,
            Slot::Float64(_) => Kind::Float64,
            Slot::Duration(_) => Kind::Duration,
        }
    }

    /// Converts `value` to this slot's kind and stores it.
    ///
    /// The slot is left untouched when the conversion fails.
    pub(crate) fn assign(&self, key: &ConfigKey, value: &ConfigValue) -> Result<()> {
        let key = key.as_str();
        match self {
            Slot::Bool(h) => h.set(value.as_bool(key)?),
            Slot::Int(h) => h.set(value.as_isize(key)?),
            Slot::Int64(h) => h.set(value.as_i64(key)?),
            Slot::Uint(h) => h.set(value.as_usize(key)?),
            Slot::Uint64(h) => h.set(value.as_u64(key)?),
            Slot::String(h) => h.set(value.as_string()),
            Slot::Float64(h) => h.set(value.as_f64(key)?),
            Slot::Duration(h) => h.set(value.as_duration(key)?),
        }
        Ok(())
    }

    /// Renders the current value as text.
    pub(crate) fn current(&self) -> ConfigValue {
        let text = match self {
            Slot::Bool(h) => h.get().to_string(),
            Slot::Int(h) => h.get().to_string(),
            Slot::Int64(h) => h.get().to_string(),
            Slot::Uint(h) => h.get().to_string(),
            Slot::Uint64(h) => h.get().to_string(),
            Slot::String(h) => h.get(),
            Slot::Float64(h) => h.get().to_string(),
            Slot::Duration(h) => format_duration(h.get()),
        };
        ConfigValue::new(text)
    }
}

/// A declared setting: its name, its default and its live slot.
#[derive(Clone, Debug)]
pub struct Setting {
    key: ConfigKey,
    default: ConfigValue,
    slot: Slot,
}

impl Setting {
    pub(crate) fn new(key: ConfigKey, slot: Slot) -> Self {
        let default = slot.current();
        Self { key, default, slot }
    }

    /// The dotted name of the setting.
    pub fn key(&self) -> &ConfigKey {
        &self.key
    }

    /// The declared type of the setting.
    pub fn kind(&self) -> Kind {
        self.slot.kind()
    }

    /// The declared default, as text.
    pub fn default_value(&self) -> &ConfigValue {
        &self.default
    }

    /// The current value, as text.
    pub fn current_value(&self) -> ConfigValue {
        self.slot.current()
    }

    /// Returns `true` if the current value differs from the default.
    pub fn is_overridden(&self) -> bool {
        self.current_value() != self.default
    }

    pub(crate) fn assign(&self, value: &ConfigValue) -> Result<()> {
        self.slot.assign(&self.key, value)
    }
}

macro_rules! slot_from_handle {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<Handle<$ty>> for Slot {
                fn from(handle: Handle<$ty>) -> Self {
                    Slot::$variant(handle)
                }
            }
        )*
    };
}

slot_from_handle! {
    Bool => bool,
    Int => isize,
    Int64 => i64,
    Uint => usize,
    Uint64 => u64,
    String => String,
    Float64 => f64,
    Duration => Duration,
}
