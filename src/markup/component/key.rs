//! Identifier values carried by styles and special components: namespaced
//! keys, UUIDs and block positions.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Namespace used when a key is written without one.
pub const DEFAULT_NAMESPACE: &str = "minecraft";

static NAMESPACE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z0-9_.\-]+$").unwrap());
static VALUE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z0-9_.\-/]+$").unwrap());
static UUID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .unwrap()
});
static WORLD_POS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(~?)(-?\d+) (~?)(-?\d+) (~?)(-?\d+)$").unwrap()
});
static LOCAL_POS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\^(-?\d+(?:\.\d+)?) \^(-?\d+(?:\.\d+)?) \^(-?\d+(?:\.\d+)?)$").unwrap()
});

/// A `namespace:value` identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key {
    namespace: String,
    value: String,
}

impl Key {
    /// Parses `namespace:value` or a bare `value` in the default namespace.
    /// An empty namespace (`:value`) also means the default one.
    ///
    /// Namespaces allow `[a-z0-9_.-]`, values additionally allow `/`.
    pub fn parse(input: &str) -> Option<Key> {
        let (namespace, value) = match input.split_once(':') {
            Some(("", value)) => (DEFAULT_NAMESPACE, value),
            Some((namespace, value)) => (namespace, value),
            None => (DEFAULT_NAMESPACE, input),
        };
        if !NAMESPACE_REGEX.is_match(namespace) || !VALUE_REGEX.is_match(value) {
            return None;
        }
        Some(Key {
            namespace: namespace.to_string(),
            value: value.to_string(),
        })
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.value)
    }
}

impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A 128-bit UUID in canonical `8-4-4-4-12` hex form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Uuid(u128);

impl Uuid {
    pub const fn from_u128(value: u128) -> Self {
        Uuid(value)
    }

    pub const fn as_u128(self) -> u128 {
        self.0
    }

    pub fn parse(input: &str) -> Option<Uuid> {
        if !UUID_REGEX.is_match(input) {
            return None;
        }
        let digits: String = input.chars().filter(|ch| *ch != '-').collect();
        u128::from_str_radix(&digits, 16).ok().map(Uuid)
    }
}

impl FromStr for Uuid {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse(s).ok_or(())
    }
}

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex = format!("{:032x}", self.0);
        write!(
            f,
            "{}-{}-{}-{}-{}",
            &hex[0..8],
            &hex[8..12],
            &hex[12..16],
            &hex[16..20],
            &hex[20..32]
        )
    }
}

impl Serialize for Uuid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One axis of a world position; `relative` marks a `~` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coordinate {
    pub value: i32,
    pub relative: bool,
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.relative {
            write!(f, "~{}", self.value)
        } else {
            write!(f, "{}", self.value)
        }
    }
}

/// Block position used by block NBT sources.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BlockPos {
    World {
        x: Coordinate,
        y: Coordinate,
        z: Coordinate,
    },
    Local {
        left: f64,
        up: f64,
        forwards: f64,
    },
}

impl BlockPos {
    /// Parses `x y z` (each optionally `~`-prefixed) or `^l ^u ^f`.
    pub fn parse(input: &str) -> Option<BlockPos> {
        if let Some(caps) = WORLD_POS_REGEX.captures(input) {
            let axis = |marker: usize, value: usize| -> Option<Coordinate> {
                Some(Coordinate {
                    value: caps[value].parse().ok()?,
                    relative: !caps[marker].is_empty(),
                })
            };
            return Some(BlockPos::World {
                x: axis(1, 2)?,
                y: axis(3, 4)?,
                z: axis(5, 6)?,
            });
        }
        let caps = LOCAL_POS_REGEX.captures(input)?;
        Some(BlockPos::Local {
            left: caps[1].parse().ok()?,
            up: caps[2].parse().ok()?,
            forwards: caps[3].parse().ok()?,
        })
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockPos::World { x, y, z } => write!(f, "{} {} {}", x, y, z),
            BlockPos::Local { left, up, forwards } => write!(f, "^{} ^{} ^{}", left, up, forwards),
        }
    }
}

impl Serialize for BlockPos {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
