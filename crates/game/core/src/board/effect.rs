//! Effect descriptors attached to board squares.
//!
//! [`EffectKind`] is the closed set of rules the resolver knows how to apply.
//! Board data names kinds by their snake_case string; names the engine does
//! not know are kept as [`EffectTag::Unrecognized`] so datasets written for a
//! newer engine still load and simply resolve as no-ops.

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Discriminant selecting which effect rule applies.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EffectKind {
    // ========================================================================
    // Actor movement
    // ========================================================================
    Move,
    Bonus,
    Penalty,
    Teleport,
    RandomMove,
    EnergyBurst,
    Geyser,
    Wormhole,
    BlackHole,
    MoveToNearest,
    GalacticCenter,
    TimeWarp,
    UltimateTruth,

    // ========================================================================
    // Interactions with other players
    // ========================================================================
    Swap,
    Gravity,
    Volcano,
    Snipe,
    MeteorShower,

    // ========================================================================
    // Board-wide redistribution
    // ========================================================================
    BigBang,
    Chaos,
    Supernova,
    BigCrunch,

    // ========================================================================
    // Status conditions
    // ========================================================================
    Rest,
    Curse,
    Confusion,
    Cleanse,
}

impl EffectKind {
    /// Returns the snake_case name used in board data.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// Effect tag as found in board data.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub enum EffectTag {
    Known(EffectKind),
    Unrecognized(String),
}

impl EffectTag {
    pub fn known(&self) -> Option<EffectKind> {
        match self {
            Self::Known(kind) => Some(*kind),
            Self::Unrecognized(_) => None,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Known(kind) => kind.as_str(),
            Self::Unrecognized(name) => name,
        }
    }
}

impl From<EffectKind> for EffectTag {
    fn from(kind: EffectKind) -> Self {
        Self::Known(kind)
    }
}

impl From<String> for EffectTag {
    fn from(name: String) -> Self {
        match name.parse::<EffectKind>() {
            Ok(kind) => Self::Known(kind),
            Err(_) => Self::Unrecognized(name),
        }
    }
}

impl From<&str> for EffectTag {
    fn from(name: &str) -> Self {
        Self::from(name.to_string())
    }
}

impl From<EffectTag> for String {
    fn from(tag: EffectTag) -> Self {
        match tag {
            EffectTag::Known(kind) => kind.as_str().to_string(),
            EffectTag::Unrecognized(name) => name,
        }
    }
}

impl core::fmt::Display for EffectTag {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Numeric payload of an effect: either one number or a candidate set.
///
/// Serialized untagged, so data files write `value: 3` or `value: [2, -2]`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum EffectValue {
    Scalar(i32),
    List(Vec<i32>),
}

impl EffectValue {
    pub fn scalar(&self) -> Option<i32> {
        match self {
            Self::Scalar(value) => Some(*value),
            Self::List(_) => None,
        }
    }

    pub fn candidates(&self) -> Option<&[i32]> {
        match self {
            Self::Scalar(_) => None,
            Self::List(values) => Some(values),
        }
    }
}

/// Expected shape of an effect's value, checked at board load time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ValueShape {
    /// Any value (or none) is accepted and ignored.
    Ignored,
    /// A signed scalar is required.
    Scalar,
    /// A scalar of at least 1 is required.
    Duration,
    /// Optional non-negative scalar overriding a configured amount.
    AmountOverride,
    /// A non-empty candidate list is required.
    Candidates,
    /// Exactly two candidates are required.
    Pair,
}

impl EffectKind {
    fn value_shape(&self) -> ValueShape {
        match self {
            Self::Move | Self::Bonus | Self::Penalty | Self::Teleport => ValueShape::Scalar,
            Self::Rest | Self::Curse | Self::Confusion => ValueShape::Duration,
            Self::Volcano
            | Self::Geyser
            | Self::Snipe
            | Self::Wormhole
            | Self::Supernova
            | Self::MeteorShower => ValueShape::AmountOverride,
            Self::RandomMove => ValueShape::Candidates,
            Self::EnergyBurst => ValueShape::Pair,
            Self::Swap
            | Self::BigBang
            | Self::Gravity
            | Self::MoveToNearest
            | Self::Chaos
            | Self::BlackHole
            | Self::BigCrunch
            | Self::GalacticCenter
            | Self::TimeWarp
            | Self::UltimateTruth
            | Self::Cleanse => ValueShape::Ignored,
        }
    }
}

/// Rule attached to a square, mutating player state when landed on.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectDescriptor {
    pub kind: EffectTag,
    #[cfg_attr(feature = "serde", serde(default))]
    pub value: Option<EffectValue>,
    /// User-facing label.
    #[cfg_attr(feature = "serde", serde(default))]
    pub desc: Option<String>,
}

impl EffectDescriptor {
    pub fn new(kind: impl Into<EffectTag>) -> Self {
        Self {
            kind: kind.into(),
            value: None,
            desc: None,
        }
    }

    #[must_use]
    pub fn with_value(mut self, value: i32) -> Self {
        self.value = Some(EffectValue::Scalar(value));
        self
    }

    #[must_use]
    pub fn with_candidates(mut self, values: impl Into<Vec<i32>>) -> Self {
        self.value = Some(EffectValue::List(values.into()));
        self
    }

    #[must_use]
    pub fn with_desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = Some(desc.into());
        self
    }

    pub fn scalar(&self) -> Option<i32> {
        self.value.as_ref().and_then(EffectValue::scalar)
    }

    pub fn candidates(&self) -> Option<&[i32]> {
        self.value.as_ref().and_then(EffectValue::candidates)
    }

    /// Checks that the value matches what the effect kind expects.
    ///
    /// Unrecognized kinds always pass; they resolve as no-ops.
    pub fn validate(&self) -> Result<(), &'static str> {
        let Some(kind) = self.kind.known() else {
            return Ok(());
        };

        match kind.value_shape() {
            ValueShape::Ignored => Ok(()),
            ValueShape::Scalar => self
                .scalar()
                .map(|_| ())
                .ok_or("expected a scalar value"),
            ValueShape::Duration => match self.scalar() {
                Some(turns) if turns >= 1 => Ok(()),
                Some(_) => Err("duration must be at least one turn"),
                None => Err("expected a turn count"),
            },
            ValueShape::AmountOverride => match &self.value {
                None => Ok(()),
                Some(EffectValue::Scalar(amount)) if *amount >= 0 => Ok(()),
                Some(EffectValue::Scalar(_)) => Err("amount must not be negative"),
                Some(EffectValue::List(_)) => Err("expected a scalar amount"),
            },
            ValueShape::Candidates => match self.candidates() {
                Some(values) if !values.is_empty() => Ok(()),
                Some(_) => Err("candidate set must not be empty"),
                None => Err("expected a candidate list"),
            },
            ValueShape::Pair => match self.candidates() {
                Some(values) if values.len() == 2 => Ok(()),
                _ => Err("expected exactly two candidates"),
            },
        }
    }
}
